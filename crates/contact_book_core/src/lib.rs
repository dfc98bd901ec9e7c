//! Core domain logic for the contact book.
//! This crate is the single source of truth for record validation rules.

pub mod book;
pub mod logging;
pub mod model;
pub mod store;

pub use book::{AddressBook, BookError, BookResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::field::{Birthday, FieldError, FieldResult, Name, Phone};
pub use model::record::{Record, RecordError, RecordResult};
pub use store::{BookStore, JsonFileStore, MemoryStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
