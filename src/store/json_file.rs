//! JsonFileStore - Flat JSON documents under a data directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Store, StoreError};

/// File-backed store holding one `<collection>.json` document per
/// collection inside an injected data directory.
///
/// Every write lands in a temp file first and is renamed into place, so a
/// crash mid-write never leaves a torn document behind.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store over a data directory. The directory itself is
    /// created on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn document_path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{}.json", collection))
    }

    fn temp_path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!(".{}.json.tmp", collection))
    }

    fn stage(&self, collection: &str, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.dir).map_err(|err| storage_error(collection, &err))?;
        let temp = self.temp_path(collection);
        fs::write(&temp, bytes).map_err(|err| storage_error(collection, &err))?;
        Ok(temp)
    }

    fn promote(&self, collection: &str, temp: &Path) -> Result<(), StoreError> {
        fs::rename(temp, self.document_path(collection))
            .map_err(|err| storage_error(collection, &err))
    }
}

fn storage_error(collection: &str, err: &io::Error) -> StoreError {
    StoreError::Storage {
        collection: collection.to_string(),
        message: err.to_string(),
    }
}

impl Store for JsonFileStore {
    fn read_document(&self, collection: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.document_path(collection)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_error(collection, &err)),
        }
    }

    fn write_document(&self, collection: &'static str, bytes: Vec<u8>) -> Result<(), StoreError> {
        let temp = self.stage(collection, &bytes)?;
        self.promote(collection, &temp)?;
        debug!(collection, bytes = bytes.len(), "document written");
        Ok(())
    }

    fn write_documents(&self, writes: Vec<(&'static str, Vec<u8>)>) -> Result<(), StoreError> {
        // Two phases: every temp file must land before any document is
        // replaced, so a failure while staging leaves all documents as
        // they were.
        let mut staged = Vec::with_capacity(writes.len());
        for (collection, bytes) in &writes {
            match self.stage(collection, bytes) {
                Ok(temp) => staged.push((*collection, temp)),
                Err(err) => {
                    for (_, temp) in staged {
                        let _ = fs::remove_file(temp);
                    }
                    return Err(err);
                }
            }
        }
        for (collection, temp) in staged {
            self.promote(collection, &temp)?;
            debug!(collection, "document written");
        }
        Ok(())
    }
}
