//! CommitBuilder - Stage several collections and write them as one unit.
//!
//! ## Example
//!
//! ```ignore
//! store
//!     .commit()
//!     .collection(&products)?
//!     .collection(&sales)?
//!     .write()?;
//! ```

use crate::store::{encode, Record, Store, StoreError};

/// Builder collecting whole-collection writes for a single commit.
///
/// Each collection is serialized when it is staged, so a serialization
/// failure aborts the commit before any document has been touched.
pub struct CommitBuilder<'a, S> {
    store: &'a S,
    writes: Vec<(&'static str, Vec<u8>)>,
}

impl<'a, S: Store> CommitBuilder<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            writes: Vec::new(),
        }
    }

    /// Stage a whole collection.
    pub fn collection<R: Record>(mut self, records: &[R]) -> Result<Self, StoreError> {
        self.writes.push((R::COLLECTION, encode(records)?));
        Ok(self)
    }

    /// Write every staged collection as one unit.
    pub fn write(self) -> Result<(), StoreError> {
        if self.writes.is_empty() {
            return Ok(());
        }
        self.store.write_documents(self.writes)
    }
}

/// Extension trait to start a commit over several collections.
pub trait CommitExt: Store + Sized {
    /// Start a commit builder chain.
    fn commit(&self) -> CommitBuilder<'_, Self> {
        CommitBuilder::new(self)
    }
}

impl<S: Store> CommitExt for S {}
