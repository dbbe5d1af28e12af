use address_book_assistant::error::{StoreError, StoreResult};
use address_book_assistant::repositories::{BookRepository, BookSnapshot};
use address_book_assistant::AddressBook;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock book repository for testing.
///
/// Keeps the last saved snapshot in memory, can be told to fail saves, and
/// tracks method calls for verification. Clones share state, so a test can
/// keep a handle after moving one into a session.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookRepository {
    stored: Arc<Mutex<Option<BookSnapshot>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create an empty MockBookRepository (nothing saved yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: &AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(BookSnapshot::capture(book));
        repo
    }

    /// The last saved snapshot, if any.
    pub fn stored(&self) -> Option<BookSnapshot> {
        self.stored.lock().unwrap().clone()
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BookRepository for MockBookRepository {
    fn load(&self) -> StoreResult<AddressBook> {
        self.track_call("load");

        match self.stored() {
            Some(snapshot) => snapshot.restore(),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&self, book: &AddressBook) -> StoreResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "save disabled",
            )));
        }

        *self.stored.lock().unwrap() = Some(BookSnapshot::capture(book));
        Ok(())
    }
}
