//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Hold the single process-wide diary session behind a lock.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Return envelopes carry `ok` flags and UTF-8 messages with stable
//!   meaning; core errors never cross as exceptions.

use fitdiary_core::{
    chart_series, core_version as core_version_inner, init_logging as init_logging_inner,
    ordered_view, ping as ping_inner, render_export_json, DiarySession, JsonFileStore, Record,
    SaveOutcome, SortMode,
};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

const DATA_FILE_NAME: &str = "fitdiary_records.json";
static DATA_PATH: OnceLock<PathBuf> = OnceLock::new();
static SESSION: Mutex<Option<DiarySession<JsonFileStore>>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for entry mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Affected record id, when one exists.
    pub record_id: Option<i64>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl EntryActionResponse {
    fn success(message: impl Into<String>, record_id: Option<i64>) -> Self {
        Self {
            ok: true,
            record_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
        }
    }
}

/// One record row shaped for list rendering on the Dart side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryListItem {
    pub id: i64,
    pub date: String,
    pub exercise_minutes: u32,
    pub calories: u32,
    pub water_cups: u32,
}

impl From<&Record> for EntryListItem {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            date: record.date.clone(),
            exercise_minutes: record.exercise_minutes,
            calories: record.calories,
            water_cups: record.water_cups,
        }
    }
}

/// List response envelope with the ordering mode actually applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryListResponse {
    pub items: Vec<EntryListItem>,
    /// Stable name of the applied sort mode (`recent|max_water`).
    pub applied_mode: String,
    pub message: String,
}

/// Chart response envelope; empty sequences below the data threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryChartResponse {
    pub labels: Vec<String>,
    pub water_cups: Vec<u32>,
    pub has_enough_data: bool,
    pub message: String,
}

/// Edit-targeting response carrying prefill data for the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryEditResponse {
    pub ok: bool,
    pub record: Option<EntryListItem>,
    pub message: String,
}

/// Export response for browser-style download targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryExportResponse {
    /// Pretty-printed JSON document, absent when there is nothing to export.
    pub document: Option<String>,
    pub message: String,
}

/// Saves one entry: creates in create mode, updates the targeted record in
/// edit mode.
///
/// # FFI contract
/// - Sync call; persists the full collection on success.
/// - Never panics.
/// - Validation failures return `ok=false` with a field-level message and
///   leave the collection unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_save(
    exercise_minutes: String,
    calories: String,
    water_cups: String,
) -> EntryActionResponse {
    match with_session(|session| {
        session
            .save_entry(&exercise_minutes, &calories, &water_cups)
            .map_err(|err| err.to_string())
    }) {
        Ok(SaveOutcome::Created(id)) => EntryActionResponse::success("Entry saved.", Some(id)),
        Ok(SaveOutcome::Updated(id)) => EntryActionResponse::success("Entry updated.", Some(id)),
        Err(message) => EntryActionResponse::failure(format!("entry_save failed: {message}")),
    }
}

/// Deletes the entry with the given id.
///
/// # FFI contract
/// - Sync call; idempotent. Deleting an unknown id succeeds with a distinct
///   message.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_delete(id: i64) -> EntryActionResponse {
    match with_session(|session| session.delete(id).map_err(|err| err.to_string())) {
        Ok(true) => EntryActionResponse::success("Entry deleted.", Some(id)),
        Ok(false) => EntryActionResponse::success("No entry with that id.", None),
        Err(message) => EntryActionResponse::failure(format!("entry_delete failed: {message}")),
    }
}

/// Targets an existing entry for editing and returns its prefill data.
///
/// # FFI contract
/// - Sync call; an unknown id leaves the current mode unchanged and returns
///   `ok=false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_begin_edit(id: i64) -> EntryEditResponse {
    let result = with_session(|session| {
        if session.begin_edit(id) {
            Ok(session.editing_record().map(EntryListItem::from))
        } else {
            Ok(None)
        }
    });

    match result {
        Ok(Some(record)) => EntryEditResponse {
            ok: true,
            record: Some(record),
            message: "Editing entry.".to_string(),
        },
        Ok(None) => EntryEditResponse {
            ok: false,
            record: None,
            message: "No entry with that id.".to_string(),
        },
        Err(message) => EntryEditResponse {
            ok: false,
            record: None,
            message: format!("entry_begin_edit failed: {message}"),
        },
    }
}

/// Discards any in-progress edit.
///
/// # FFI contract
/// - Sync call; never fails on an already-clear mode.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_cancel_edit() -> EntryActionResponse {
    match with_session(|session| {
        session.cancel_edit();
        Ok(())
    }) {
        Ok(()) => EntryActionResponse::success("Edit cancelled.", None),
        Err(message) => EntryActionResponse::failure(format!("entry_cancel_edit failed: {message}")),
    }
}

/// Lists entries under the requested ordering mode.
///
/// # FFI contract
/// - Sync call, read-only.
/// - Unknown or absent mode names fall back to `recent`; the applied mode is
///   reported back.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_list(sort_mode: Option<String>) -> EntryListResponse {
    let mode = sort_mode
        .as_deref()
        .and_then(SortMode::parse)
        .unwrap_or_default();

    match with_session(|session| Ok(ordered_view(session.records(), mode))) {
        Ok(records) => {
            let items = records.iter().map(EntryListItem::from).collect::<Vec<_>>();
            let message = if items.is_empty() {
                "No entries yet.".to_string()
            } else {
                format!("{} record(s).", items.len())
            };
            EntryListResponse {
                items,
                applied_mode: mode.name().to_string(),
                message,
            }
        }
        Err(message) => EntryListResponse {
            items: Vec::new(),
            applied_mode: mode.name().to_string(),
            message: format!("entry_list failed: {message}"),
        },
    }
}

/// Derives the chronological water-intake chart series.
///
/// # FFI contract
/// - Sync call, read-only; always chronological regardless of list ordering.
/// - Below 2 entries returns empty sequences with `has_enough_data=false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_chart() -> EntryChartResponse {
    match with_session(|session| Ok(chart_series(session.records()))) {
        Ok(Some(series)) => EntryChartResponse {
            has_enough_data: true,
            message: format!("{} point(s).", series.labels.len()),
            labels: series.labels,
            water_cups: series.water_cups,
        },
        Ok(None) => EntryChartResponse {
            labels: Vec::new(),
            water_cups: Vec::new(),
            has_enough_data: false,
            message: "Add at least 2 entries to see the chart.".to_string(),
        },
        Err(message) => EntryChartResponse {
            labels: Vec::new(),
            water_cups: Vec::new(),
            has_enough_data: false,
            message: format!("entry_chart failed: {message}"),
        },
    }
}

/// Renders the collection as a downloadable JSON document.
///
/// # FFI contract
/// - Sync call, read-only.
/// - An empty collection returns no document and a "nothing to export"
///   message.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_export_json() -> EntryExportResponse {
    let rendered = with_session(|session| {
        render_export_json(session.records()).map_err(|err| err.to_string())
    });

    match rendered {
        Ok(Some(document)) => EntryExportResponse {
            document: Some(document),
            message: "Export ready.".to_string(),
        },
        Ok(None) => EntryExportResponse {
            document: None,
            message: "No data to export.".to_string(),
        },
        Err(message) => EntryExportResponse {
            document: None,
            message: format!("entry_export_json failed: {message}"),
        },
    }
}

/// Absolute path of the persisted data file, for the native share sheet.
///
/// # FFI contract
/// - Sync call, non-blocking; the file may not exist yet.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_data_path() -> String {
    resolve_data_path().display().to_string()
}

fn resolve_data_path() -> PathBuf {
    DATA_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("FITDIARY_DATA_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DATA_FILE_NAME)
        })
        .clone()
}

fn with_session<T>(
    f: impl FnOnce(&mut DiarySession<JsonFileStore>) -> Result<T, String>,
) -> Result<T, String> {
    let mut guard = SESSION
        .lock()
        .map_err(|_| "session lock poisoned".to_string())?;

    if guard.is_none() {
        let store = JsonFileStore::new(resolve_data_path());
        let session =
            DiarySession::load(store).map_err(|err| format!("session load failed: {err}"))?;
        *guard = Some(session);
    }

    let session = guard
        .as_mut()
        .ok_or_else(|| "session unavailable".to_string())?;
    f(session)
}
