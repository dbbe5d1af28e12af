//! The contact collection and its birthday scheduling.

pub mod address_book;
pub mod birthdays;

pub use address_book::AddressBook;
pub use birthdays::DEFAULT_WINDOW_DAYS;
