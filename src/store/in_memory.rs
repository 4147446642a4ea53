//! InMemoryStore - HashMap-backed store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{Store, StoreError};

/// In-memory store keeping each collection document in a HashMap.
///
/// Clone-friendly via Arc; clones share the same storage.
#[derive(Clone)]
pub struct InMemoryStore {
    documents: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Store for InMemoryStore {
    fn read_document(&self, collection: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let documents = self
            .documents
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(documents.get(collection).cloned())
    }

    fn write_document(&self, collection: &'static str, bytes: Vec<u8>) -> Result<(), StoreError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        documents.insert(collection.to_string(), bytes);
        Ok(())
    }

    fn write_documents(&self, writes: Vec<(&'static str, Vec<u8>)>) -> Result<(), StoreError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        for (collection, bytes) in writes {
            documents.insert(collection.to_string(), bytes);
        }
        Ok(())
    }
}
