//! Persistence contracts and storage backends.
//!
//! # Responsibility
//! - Define the whole-book load/save contract used by `AddressBook`.
//! - Keep encoding and file-system details out of book logic.
//!
//! # Invariants
//! - `load` reports a never-written store as `Ok(None)`, not as an error.
//! - `save` replaces the entire persisted book; there is no partial update.

use crate::model::record::Record;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage backend error.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    /// Persisted content exists but cannot be decoded into records.
    Corrupt(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Corrupt(message) => write!(f, "corrupt store content: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Corrupt(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Whole-book storage backend.
///
/// Implementations persist the full record list on every `save`; the book
/// never issues incremental updates.
pub trait BookStore {
    /// Loads all persisted records, or `None` when no store exists yet.
    fn load(&self) -> StoreResult<Option<Vec<Record>>>;

    /// Overwrites the persisted book with `records`.
    fn save(&self, records: &[Record]) -> StoreResult<()>;
}

impl<S: BookStore + ?Sized> BookStore for &S {
    fn load(&self) -> StoreResult<Option<Vec<Record>>> {
        (**self).load()
    }

    fn save(&self, records: &[Record]) -> StoreResult<()> {
        (**self).save(records)
    }
}
