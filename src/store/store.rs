//! Store - Abstract document storage for record collections.

use super::StoreError;

/// Abstract whole-document storage, one JSON document per collection.
pub trait Store {
    /// Read a collection document. Returns None if it does not exist yet.
    fn read_document(&self, collection: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Overwrite a collection document.
    fn write_document(&self, collection: &'static str, bytes: Vec<u8>) -> Result<(), StoreError>;

    /// Overwrite several collection documents as one unit. No document may
    /// be replaced unless every staged write can be performed.
    fn write_documents(&self, writes: Vec<(&'static str, Vec<u8>)>) -> Result<(), StoreError>;
}
