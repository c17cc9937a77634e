//! Diary session: the record lifecycle manager.
//!
//! # Responsibility
//! - Apply create, update and delete operations to the owned collection.
//! - Track whether the next save creates a record or edits an existing one.
//! - Mirror the collection to the store after each successful mutation.
//!
//! # Invariants
//! - Ids issued within one session are strictly increasing, even when two
//!   creates land in the same millisecond.
//! - `id` and `date` of an existing record never change on update.
//! - A failed save leaves collection, mode and storage untouched.

use crate::model::record::{EntryInput, EntryValidationError, Record, RecordId};
use crate::store::{RecordStore, StoreError};
use chrono::Utc;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Operating mode of the save operation.
///
/// `Creating` appends a fresh record; `Editing` replaces the gauges of the
/// targeted record. The two-valued mode replaces a nullable editing id so
/// transitions stay exhaustive and checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Creating,
    Editing(RecordId),
}

/// Result of a successful save, carrying the affected record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(RecordId),
    Updated(RecordId),
}

impl SaveOutcome {
    /// Id of the record the save created or updated.
    pub fn record_id(self) -> RecordId {
        match self {
            Self::Created(id) | Self::Updated(id) => id,
        }
    }
}

/// Session-level error for lifecycle operations.
#[derive(Debug)]
pub enum SessionError {
    /// Raw input failed validation; the collection is unchanged.
    Validation(EntryValidationError),
    /// Edit targeted an id that is no longer in the collection.
    RecordNotFound(RecordId),
    /// Persistence failed after a mutation was applied in memory.
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::RecordNotFound(id) => write!(f, "record not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::RecordNotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<EntryValidationError> for SessionError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// One user's diary session: collection, mode and storage in one owned value.
pub struct DiarySession<S: RecordStore> {
    store: S,
    records: Vec<Record>,
    mode: Mode,
    last_issued_id: RecordId,
}

impl<S: RecordStore> DiarySession<S> {
    /// Loads the persisted collection and starts a session in create mode.
    ///
    /// This is the single startup load; all later reads observe the owned
    /// in-memory collection.
    pub fn load(store: S) -> Result<Self, SessionError> {
        let records = store.load()?;
        let last_issued_id = records.iter().map(|record| record.id).max().unwrap_or(0);
        info!(
            "event=session_load module=session status=ok count={}",
            records.len()
        );
        Ok(Self {
            store,
            records,
            mode: Mode::Creating,
            last_issued_id,
        })
    }

    /// Current collection in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Current operating mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Record currently targeted for editing, for form prefill.
    pub fn editing_record(&self) -> Option<&Record> {
        match self.mode {
            Mode::Editing(id) => self.records.iter().find(|record| record.id == id),
            Mode::Creating => None,
        }
    }

    /// Parses and applies one save: create in `Creating`, in-place gauge
    /// replacement in `Editing`.
    ///
    /// # Contract
    /// - Validation is all-or-nothing; on failure nothing is mutated, no save
    ///   is issued and the mode is unchanged.
    /// - A successful save persists the full collection and returns the mode
    ///   to `Creating`.
    /// - An edit whose target id vanished returns `RecordNotFound` and leaves
    ///   the mode unchanged.
    pub fn save_entry(
        &mut self,
        exercise_minutes: &str,
        calories: &str,
        water_cups: &str,
    ) -> Result<SaveOutcome, SessionError> {
        let input = match EntryInput::parse(exercise_minutes, calories, water_cups) {
            Ok(input) => input,
            Err(err) => {
                warn!("event=entry_save module=session status=rejected error={err}");
                return Err(err.into());
            }
        };

        let outcome = match self.mode {
            Mode::Editing(id) => {
                let record = self
                    .records
                    .iter_mut()
                    .find(|record| record.id == id)
                    .ok_or(SessionError::RecordNotFound(id))?;
                record.apply(input);
                self.mode = Mode::Creating;
                SaveOutcome::Updated(id)
            }
            Mode::Creating => {
                let id = self.allocate_record_id();
                self.records.push(Record::new(id, input));
                SaveOutcome::Created(id)
            }
        };

        self.store.save(&self.records)?;
        info!(
            "event=entry_save module=session status=ok op={} id={} count={}",
            match outcome {
                SaveOutcome::Created(_) => "create",
                SaveOutcome::Updated(_) => "update",
            },
            outcome.record_id(),
            self.records.len()
        );
        Ok(outcome)
    }

    /// Removes the record with the given id, if present.
    ///
    /// Idempotent: a missing id is a no-op that still mirrors the collection
    /// to storage. Returns whether a record was actually removed.
    pub fn delete(&mut self, id: RecordId) -> Result<bool, SessionError> {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = self.records.len() != before;

        self.store.save(&self.records)?;
        info!(
            "event=entry_delete module=session status=ok id={id} removed={removed} count={}",
            self.records.len()
        );
        Ok(removed)
    }

    /// Targets an existing record for editing.
    ///
    /// An unknown id leaves the mode unchanged and returns `false`; a second
    /// call retargets an in-progress edit.
    pub fn begin_edit(&mut self, id: RecordId) -> bool {
        if self.records.iter().any(|record| record.id == id) {
            self.mode = Mode::Editing(id);
            true
        } else {
            false
        }
    }

    /// Discards any in-progress edit without touching the collection.
    pub fn cancel_edit(&mut self) {
        self.mode = Mode::Creating;
    }

    // Creation timestamp doubles as identity, so the id must stay strictly
    // above everything issued this run even if the clock has not advanced.
    fn allocate_record_id(&mut self) -> RecordId {
        let now_ms = Utc::now().timestamp_millis();
        let id = now_ms.max(self.last_issued_id + 1);
        self.last_issued_id = id;
        id
    }
}
