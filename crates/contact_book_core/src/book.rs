//! Address book: name-keyed record collection with write-through persistence.
//!
//! # Responsibility
//! - Enforce name uniqueness across records.
//! - Persist the whole book synchronously after every mutation.
//!
//! # Invariants
//! - Records keep insertion order; searches and listings preserve it.
//! - No two records share a name.
//! - A save failure after an in-memory mutation leaves memory and store
//!   inconsistent; callers see it as `BookError::Store`.

use crate::model::record::Record;
use crate::store::{BookStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BookResult<T> = Result<T, BookError>;

/// Address-book operation error.
#[derive(Debug)]
pub enum BookError {
    /// Insert rejected because a record with the same name exists.
    DuplicateName(String),
    /// Delete target does not exist.
    NotFound(String),
    Store(StoreError),
}

impl Display for BookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName(name) => {
                write!(f, "record with name `{name}` already exists")
            }
            Self::NotFound(name) => write!(f, "record not found: {name}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::DuplicateName(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<StoreError> for BookError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Insertion-ordered collection of uniquely named records, bound to a
/// storage backend passed at construction.
pub struct AddressBook<S: BookStore> {
    store: S,
    records: Vec<Record>,
}

impl<S: BookStore> AddressBook<S> {
    /// Loads the whole book from `store`.
    ///
    /// A never-written store yields an empty book.
    pub fn open(store: S) -> BookResult<Self> {
        let records = store.load()?.unwrap_or_default();
        info!(
            "event=book_open module=book status=ok records={}",
            records.len()
        );
        Ok(Self { store, records })
    }

    /// Inserts a record and persists the book.
    ///
    /// # Errors
    /// - `BookError::DuplicateName` when the name key already exists; the
    ///   existing record is left intact and nothing is persisted.
    /// - `BookError::Store` when persistence fails after the insert.
    pub fn add_record(&mut self, record: Record) -> BookResult<&Record> {
        let name = record.name.as_str().to_string();
        if self.get(&name).is_some() {
            warn!("event=book_add module=book status=rejected reason=duplicate_name");
            return Err(BookError::DuplicateName(name));
        }

        let index = self.records.len();
        self.records.push(record);
        self.persist()?;
        info!(
            "event=book_add module=book status=ok records={}",
            self.records.len()
        );
        Ok(&self.records[index])
    }

    /// Removes the record with the given name and persists the book.
    ///
    /// # Errors
    /// - `BookError::NotFound` when no record carries `name`.
    /// - `BookError::Store` when persistence fails after the removal.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        let pos = self
            .records
            .iter()
            .position(|record| record.name.as_str() == name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        self.records.remove(pos);
        self.persist()?;
        info!(
            "event=book_delete module=book status=ok records={}",
            self.records.len()
        );
        Ok(())
    }

    /// Returns the record with the exact given name, if any.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|record| record.name.as_str() == name)
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Searches by name substring (case-insensitive), falling back to phone
    /// substring (case-sensitive) for records whose name did not match.
    ///
    /// Each record appears at most once; phone checking stops at the first
    /// matching phone. Results keep insertion order.
    pub fn find_by_name_or_phone(&self, query: &str) -> Vec<&Record> {
        let needle = query.to_lowercase();
        let mut results = Vec::new();
        for record in &self.records {
            if record.name.as_str().to_lowercase().contains(&needle) {
                results.push(record);
            } else if record
                .phones
                .iter()
                .any(|phone| phone.as_str().contains(query))
            {
                results.push(record);
            }
        }
        results
    }

    fn persist(&self) -> BookResult<()> {
        self.store.save(&self.records)?;
        Ok(())
    }
}
