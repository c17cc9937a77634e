//! Core domain logic for FitDiary.
//! This crate is the single source of truth for business invariants.

pub mod export;
pub mod logging;
pub mod model;
pub mod session;
pub mod store;
pub mod view;

pub use export::{render_export_json, share_persisted, ExportError, ExportStatus, ShareTarget};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{
    format_chart_label, format_entry_date, EntryField, EntryInput, EntryValidationError, Record,
    RecordId,
};
pub use session::diary::{DiarySession, Mode, SaveOutcome, SessionError};
pub use store::{JsonFileStore, MemoryStore, RecordStore, StoreError, StoreResult};
pub use view::projection::{
    chart_series, ordered_view, ChartSeries, SortMode, MIN_CHART_RECORDS,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
