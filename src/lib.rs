//! Address Book Assistant - the contact-management core of a personal assistant.
//!
//! This library keeps a book of contacts with validated phone numbers and
//! birthdays, and answers which birthdays are coming up in the next week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact record and birthday reminder entries
//! - **book**: The address book collection and birthday scheduling
//! - **error**: Custom error types for precise error handling
//! - **repositories**: Loading and saving the address book
//! - **session**: Owned book with load-at-start and save-at-exit
//! - **messages**: User-facing text for errors and reminder tables
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod messages;
pub mod models;
pub mod repositories;
pub mod session;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, ConfigError, StoreError};
pub use models::{Record, UpcomingBirthday};
pub use repositories::{BookRepository, JsonFileRepository};
pub use session::Session;
