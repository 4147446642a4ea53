//! Stores - JSON-document persistence for record collections.
//!
//! Each record kind owns one JSON document holding the whole collection,
//! rewritten on every save. Backends implement [`Store`]; the typed
//! [`Records`] accessor layers collection semantics (load, save, lookup,
//! id generation) on top.
//!
//! ## Example
//!
//! ```ignore
//! use stockbook::{Client, InMemoryStore, RecordsExt};
//!
//! let store = InMemoryStore::new();
//! let clients = store.records::<Client>();
//! let mut all = clients.load()?;
//! all.push(client);
//! clients.save(&all)?;
//! ```

mod in_memory;
mod json_file;
mod records;
mod store;

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// Trait for types persisted as records of a collection.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Document name for this record kind (e.g. "clients", "sales").
    const COLLECTION: &'static str;

    /// Unique identifier of this record within its collection.
    fn id(&self) -> u32;
}

/// Generate an id for a new record: one past the highest taken id (1 for an
/// empty collection), probed upward while taken. The probe keeps ids unique
/// even when records were inserted with hand-picked, non-sequential ids.
pub fn next_id<R: Record>(records: &[R]) -> u32 {
    let mut candidate = records
        .iter()
        .map(Record::id)
        .max()
        .map_or(1, |highest| highest + 1);
    while records.iter().any(|record| record.id() == candidate) {
        candidate += 1;
    }
    candidate
}

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Serialization or deserialization of a collection document failed.
    Serde {
        collection: String,
        message: String,
    },
    /// Storage-level failure reading or writing a document.
    Storage {
        collection: String,
        message: String,
    },
    /// Shared in-memory state was poisoned.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Serde {
                collection,
                message,
            } => write!(f, "could not encode collection {}: {}", collection, message),
            StoreError::Storage {
                collection,
                message,
            } => write!(f, "storage error on collection {}: {}", collection, message),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
pub use records::{Records, RecordsExt};
pub(crate) use records::encode;
pub use store::Store;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    struct Numbered {
        id: u32,
    }

    impl Record for Numbered {
        const COLLECTION: &'static str = "numbered";
        fn id(&self) -> u32 {
            self.id
        }
    }

    fn numbered(ids: &[u32]) -> Vec<Numbered> {
        ids.iter().map(|id| Numbered { id: *id }).collect()
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id::<Numbered>(&[]), 1);
    }

    #[test]
    fn next_id_is_one_past_the_highest() {
        assert_eq!(next_id(&numbered(&[1, 2, 3])), 4);
    }

    #[test]
    fn next_id_ignores_gaps_below_the_highest() {
        // A deleted record leaves a gap; ids are never reused.
        assert_eq!(next_id(&numbered(&[1, 5])), 6);
    }

    #[test]
    fn next_id_handles_non_sequential_ids() {
        assert_eq!(next_id(&numbered(&[7, 2, 9, 4])), 10);
    }

    #[test]
    fn next_id_never_returns_a_taken_id() {
        let records = numbered(&[3, 1, 8, 2]);
        let id = next_id(&records);
        assert!(records.iter().all(|record| record.id() != id));
    }
}
