//! JSON file blob storage backend.
//!
//! # Responsibility
//! - Serialize the whole record list to a single JSON file.
//! - Treat a missing file as an empty store, never as an error.
//!
//! # Invariants
//! - Every `save` rewrites the file completely.
//! - Undecodable file content is surfaced as `StoreError::Corrupt` instead
//!   of being silently discarded.

use super::{BookStore, StoreError, StoreResult};
use crate::model::record::Record;
use log::{error, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Whole-file JSON storage at a caller-supplied path.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<Vec<Record>>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=store_load module=store status=ok mode=missing");
                return Ok(None);
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error error_code=read_failed error={err}"
                );
                return Err(err.into());
            }
        };

        let records: Vec<Record> = serde_json::from_slice(&bytes).map_err(|err| {
            error!(
                "event=store_load module=store status=error error_code=decode_failed error={err}"
            );
            StoreError::Corrupt(err.to_string())
        })?;

        info!(
            "event=store_load module=store status=ok records={}",
            records.len()
        );
        Ok(Some(records))
    }

    fn save(&self, records: &[Record]) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(records)
            .map_err(|err| StoreError::Corrupt(err.to_string()))?;
        if let Err(err) = fs::write(&self.path, json) {
            error!(
                "event=store_save module=store status=error error_code=write_failed error={err}"
            );
            return Err(err.into());
        }

        info!(
            "event=store_save module=store status=ok records={}",
            records.len()
        );
        Ok(())
    }
}
