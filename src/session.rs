//! A working session over a persisted address book.
//!
//! The session owns the in-memory book for its whole lifetime: it is loaded
//! when the session opens and written back when the session closes.

use crate::book::AddressBook;
use crate::error::StoreResult;
use crate::repositories::BookRepository;
use tracing::info;

/// Owns the address book and the repository it came from.
pub struct Session<R: BookRepository> {
    repository: R,
    book: AddressBook,
}

impl<R: BookRepository> Session<R> {
    /// Load the book from `repository` and start a session.
    pub fn open(repository: R) -> StoreResult<Self> {
        let book = repository.load()?;
        info!("Session opened with {} contacts", book.len());
        Ok(Self { repository, book })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    /// Write the current book without ending the session.
    pub fn save(&self) -> StoreResult<()> {
        self.repository.save(&self.book)
    }

    /// Write the current book and end the session.
    pub fn close(self) -> StoreResult<AddressBook> {
        self.repository.save(&self.book)?;
        info!("Session closed with {} contacts", self.book.len());
        Ok(self.book)
    }
}
