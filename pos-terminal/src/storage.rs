//! Flat-file JSON stores
//!
//! Every persistent collection in the terminal is one JSON file holding
//! an array of records. Reads degrade to an empty collection when the
//! file is missing or unreadable ("no data yet"); writes replace the
//! whole file; appends are read-modify-write. No cross-file atomicity —
//! single-terminal deployment is assumed.

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{PosError, PosResult};
use std::path::{Path, PathBuf};

/// One JSON-array file on disk
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection.
    ///
    /// A missing file is normal (nothing recorded yet). A file that
    /// exists but fails to parse is logged and also treated as empty
    /// rather than propagated.
    pub fn read<T: DeserializeOwned>(&self) -> Vec<T> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Unreadable store, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replace the file with the given collection
    pub fn write<T: Serialize>(&self, records: &[T]) -> PosResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, json).map_err(|err| {
            tracing::error!(path = %self.path.display(), error = %err, "Store write failed");
            PosError::storage(err.to_string())
        })
    }

    /// Append one record to the collection
    pub fn append<T: Serialize + DeserializeOwned>(&self, record: T) -> PosResult<()> {
        let mut records: Vec<T> = self.read();
        records.push(record);
        self.write(&records)
    }

    /// Write a single record as the whole file (the per-order invoice
    /// files hold one object, not an array)
    pub fn write_single<T: Serialize>(&self, record: &T) -> PosResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.path, json).map_err(|err| {
            tracing::error!(path = %self.path.display(), error = %err, "Store write failed");
            PosError::storage(err.to_string())
        })
    }
}
