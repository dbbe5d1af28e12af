//! JSON file storage for the address book.
//!
//! The whole book lives in one pretty-printed JSON file:
//!
//! ```json
//! {
//!   "version": 1,
//!   "records": [
//!     { "name": "Ann", "phones": ["0501234567"], "birthday": "1990-06-15" }
//!   ]
//! }
//! ```
//!
//! Writes go to a temp file first and are renamed into place.

use super::snapshot::BookSnapshot;
use super::traits::BookRepository;
use crate::book::AddressBook;
use crate::error::StoreResult;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Address book repository backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> StoreResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No address book at {:?}, starting empty", self.path);
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: BookSnapshot = serde_json::from_str(&contents)?;
        let book = snapshot.restore()?;
        debug!("Loaded {} records from {:?}", book.len(), self.path);
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                info!("Created address book directory: {:?}", parent);
            }
        }

        let json = serde_json::to_string_pretty(&BookSnapshot::capture(book))?;

        // Use atomic write pattern: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        debug!("Saved {} records to {:?}", book.len(), self.path);
        Ok(())
    }
}
