//! Serialized form of an address book.

use crate::book::AddressBook;
use crate::error::{StoreError, StoreResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};

/// Current snapshot layout version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A full copy of the address book as written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub version: u32,

    #[serde(default)]
    pub records: Vec<Record>,
}

impl BookSnapshot {
    /// Capture every record of `book`.
    pub fn capture(book: &AddressBook) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            records: book.records().cloned().collect(),
        }
    }

    /// Rebuild the address book. Later records win on duplicate names.
    pub fn restore(self) -> StoreResult<AddressBook> {
        if self.version != SNAPSHOT_VERSION {
            return Err(StoreError::Snapshot(format!(
                "version {} (expected {})",
                self.version, SNAPSHOT_VERSION
            )));
        }
        Ok(self.records.into_iter().collect())
    }
}
