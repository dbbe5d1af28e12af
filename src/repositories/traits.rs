use crate::book::AddressBook;
use crate::error::StoreResult;

/// Repository for persisting the address book between sessions.
///
/// Implementations store a full snapshot: every record's name, its phones in
/// order, and its birthday. Loading what was saved must give back an equal
/// book.
pub trait BookRepository {
    /// Load the stored book, or an empty one when nothing was saved yet.
    fn load(&self) -> StoreResult<AddressBook>;

    /// Replace the stored snapshot with `book`.
    fn save(&self, book: &AddressBook) -> StoreResult<()>;
}
