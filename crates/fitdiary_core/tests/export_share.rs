use fitdiary_core::{
    render_export_json, share_persisted, EntryInput, ExportError, ExportStatus, Record,
    ShareTarget,
};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

fn record(id: i64, water_cups: u32) -> Record {
    Record::new(
        id,
        EntryInput {
            exercise_minutes: 30,
            calories: 500,
            water_cups,
        },
    )
}

struct FakeShare {
    available: bool,
    fail_with: Option<String>,
    shared_paths: RefCell<Vec<PathBuf>>,
}

impl FakeShare {
    fn available() -> Self {
        Self {
            available: true,
            fail_with: None,
            shared_paths: RefCell::new(Vec::new()),
        }
    }

    fn unavailable() -> Self {
        Self {
            available: false,
            fail_with: None,
            shared_paths: RefCell::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            available: true,
            fail_with: Some(message.to_string()),
            shared_paths: RefCell::new(Vec::new()),
        }
    }
}

impl ShareTarget for FakeShare {
    fn is_available(&self) -> bool {
        self.available
    }

    fn share(&self, path: &Path) -> Result<(), String> {
        if let Some(message) = &self.fail_with {
            return Err(message.clone());
        }
        self.shared_paths.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

#[test]
fn empty_collection_renders_no_document() {
    assert_eq!(render_export_json(&[]).unwrap(), None);
}

#[test]
fn export_document_is_a_parseable_array_of_same_length() {
    let records = vec![record(1_700_000_000_000, 8), record(1_700_000_060_000, 5)];

    let document = render_export_json(&records).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&document).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), records.len());
    assert_eq!(array[0]["water_cups"], 8);
}

#[test]
fn share_reports_no_data_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("records.json");
    let target = FakeShare::available();

    let status = share_persisted(&missing, &target).unwrap();
    assert_eq!(status, ExportStatus::NoData);
    assert!(target.shared_paths.borrow().is_empty());
}

#[test]
fn share_reports_unavailable_platform_without_invoking_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    fs::write(&path, "[]").unwrap();
    let target = FakeShare::unavailable();

    let status = share_persisted(&path, &target).unwrap();
    assert_eq!(status, ExportStatus::SharingUnavailable);
    assert!(target.shared_paths.borrow().is_empty());
}

#[test]
fn share_offers_the_persisted_file_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    fs::write(&path, "[]").unwrap();
    let target = FakeShare::available();

    let status = share_persisted(&path, &target).unwrap();
    assert_eq!(status, ExportStatus::Shared);
    assert_eq!(target.shared_paths.borrow().as_slice(), &[path]);
}

#[test]
fn share_invocation_failure_surfaces_as_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    fs::write(&path, "[]").unwrap();
    let target = FakeShare::failing("share sheet dismissed");

    let err = share_persisted(&path, &target).unwrap_err();
    assert!(matches!(err, ExportError::Share(message) if message.contains("dismissed")));
}
