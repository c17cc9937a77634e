//! Export and platform-share collaborator.
//!
//! # Responsibility
//! - Render the collection as a downloadable JSON document (browser-style
//!   targets).
//! - Offer the persisted data file to the native share mechanism, surfacing
//!   distinct notices for "no data" and "sharing unavailable".
//!
//! # Invariants
//! - An empty collection never produces a document; callers surface the
//!   "nothing to export" notice instead.
//! - Availability is checked before the share action is ever invoked.

use crate::model::record::Record;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Outcome of a native share attempt.
///
/// `NoData` and `SharingUnavailable` are user-facing notices, not errors;
/// both are surfaced before the share action runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStatus {
    Shared,
    NoData,
    SharingUnavailable,
}

/// Failure of the export machinery itself.
#[derive(Debug)]
pub enum ExportError {
    /// The collection could not be rendered to JSON.
    Render(serde_json::Error),
    /// The platform share action was invoked and reported a failure.
    Share(String),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(err) => write!(f, "export rendering failed: {err}"),
            Self::Share(message) => write!(f, "share action failed: {message}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Share(_) => None,
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Render(value)
    }
}

/// Platform share mechanism, implemented per target platform.
pub trait ShareTarget {
    /// Whether the platform currently offers a share mechanism.
    fn is_available(&self) -> bool;

    /// Offers the file at `path` to the platform share sheet.
    fn share(&self, path: &Path) -> Result<(), String>;
}

/// Renders the collection as a pretty-printed JSON document for download.
///
/// Returns `Ok(None)` for an empty collection: the "nothing to export"
/// notice, not an error.
pub fn render_export_json(records: &[Record]) -> Result<Option<String>, ExportError> {
    if records.is_empty() {
        return Ok(None);
    }
    let document = serde_json::to_string_pretty(records)?;
    info!(
        "event=export_render module=export status=ok count={} bytes={}",
        records.len(),
        document.len()
    );
    Ok(Some(document))
}

/// Offers the persisted data file to the native share mechanism.
///
/// Notice order matches the user flow: a missing data file reports `NoData`
/// before availability is consulted, and an unavailable platform reports
/// `SharingUnavailable` before the share action is invoked.
pub fn share_persisted(
    path: &Path,
    target: &impl ShareTarget,
) -> Result<ExportStatus, ExportError> {
    if !path.exists() {
        return Ok(ExportStatus::NoData);
    }
    if !target.is_available() {
        return Ok(ExportStatus::SharingUnavailable);
    }

    target.share(path).map_err(ExportError::Share)?;
    info!(
        "event=export_share module=export status=ok path={}",
        path.display()
    );
    Ok(ExportStatus::Shared)
}
