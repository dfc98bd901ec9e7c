//! Domain model for contact records.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Enforce field format invariants at construction time.
//!
//! # Invariants
//! - A `Record` is identified by its unique `Name` within a book.
//! - Field values are validated once and immutable afterwards.

pub mod field;
pub mod record;
