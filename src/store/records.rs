//! Records - Typed accessor for one collection of a store.

use std::marker::PhantomData;

use tracing::warn;

use super::{next_id, Record, Store, StoreError};

/// Typed view of one record collection in a store.
pub struct Records<'a, S, R> {
    store: &'a S,
    _marker: PhantomData<R>,
}

impl<'a, S: Store, R: Record> Records<'a, S, R> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Load the whole collection. An absent document is an empty
    /// collection, and so is one that no longer parses: the parse failure
    /// is logged and swallowed so callers always receive a usable
    /// collection.
    pub fn load(&self) -> Result<Vec<R>, StoreError> {
        let Some(bytes) = self.store.read_document(R::COLLECTION)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_slice(&bytes) {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!(
                    collection = R::COLLECTION,
                    error = %err,
                    "collection document does not parse, treating it as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Serialize the whole collection and overwrite its document.
    pub fn save(&self, records: &[R]) -> Result<(), StoreError> {
        let bytes = encode(records)?;
        self.store.write_document(R::COLLECTION, bytes)
    }

    /// Find a record by id.
    pub fn get(&self, id: u32) -> Result<Option<R>, StoreError> {
        Ok(self.load()?.into_iter().find(|record| record.id() == id))
    }

    /// Generate an id for the next record of this collection.
    pub fn next_id(&self) -> Result<u32, StoreError> {
        Ok(next_id(&self.load()?))
    }
}

/// Serialize one collection the way its document stores it.
pub(crate) fn encode<R: Record>(records: &[R]) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec_pretty(records).map_err(|err| StoreError::Serde {
        collection: R::COLLECTION.to_string(),
        message: err.to_string(),
    })
}

/// Extension trait for typed collection access on any store.
pub trait RecordsExt: Store + Sized {
    /// Get a typed accessor for one record collection.
    fn records<R: Record>(&self) -> Records<'_, Self, R> {
        Records::new(self)
    }
}

impl<S: Store> RecordsExt for S {}
