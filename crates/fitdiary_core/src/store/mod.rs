//! Record store contracts and implementations.
//!
//! # Responsibility
//! - Define the whole-collection load/save contract used by the session.
//! - Keep file-format details inside the persistence boundary.
//!
//! # Invariants
//! - The collection is the unit of durability: every save overwrites all
//!   prior data, every load returns the full collection.
//! - Loading never fails on absent or unreadable data; it degrades to an
//!   empty collection and logs the reason.

use crate::model::record::Record;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for record store operations.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "store io failure: {err}"),
            Self::Serialize(err) => write!(f, "store serialization failure: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Whole-collection persistence contract.
///
/// `load` is called once at session start; `save` after every successful
/// mutation. At most one save is in flight at a time (single-user session),
/// so the full-collection overwrite is the atomicity boundary.
pub trait RecordStore {
    fn load(&self) -> StoreResult<Vec<Record>>;
    fn save(&self, records: &[Record]) -> StoreResult<()>;
}

// A session can own its store or borrow one the caller keeps observing.
impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn load(&self) -> StoreResult<Vec<Record>> {
        (**self).load()
    }

    fn save(&self, records: &[Record]) -> StoreResult<()> {
        (**self).save(records)
    }
}
