//! Flat-file JSON implementation of the record store.
//!
//! # Responsibility
//! - Persist the full collection as one pretty-printed JSON array.
//! - Treat absent or unreadable data as an empty collection on load.
//!
//! # Invariants
//! - `save` always writes the complete collection; there is no partial or
//!   incremental write path.
//! - `load` never surfaces parse failures to callers; corrupt data degrades
//!   to empty with a warning.

use super::{RecordStore, StoreResult};
use crate::model::record::Record;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Record store backed by a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for the given data file path.
    ///
    /// The file is not touched until the first `save`; a missing file simply
    /// loads as an empty collection.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the persisted data file, as handed to the share mechanism.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<Record>> {
        let started_at = Instant::now();

        if !self.path.exists() {
            info!(
                "event=store_load module=store status=ok outcome=no_prior_data path={}",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "event=store_load module=store status=degraded outcome=unreadable path={} error={err}",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str::<Vec<Record>>(&raw) {
            Ok(records) => {
                info!(
                    "event=store_load module=store status=ok count={} duration_ms={}",
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(records)
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=degraded outcome=malformed path={} error={err}",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, records: &[Record]) -> StoreResult<()> {
        let started_at = Instant::now();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let document = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, document)?;

        info!(
            "event=store_save module=store status=ok count={} duration_ms={}",
            records.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}
