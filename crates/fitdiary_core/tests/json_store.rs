use fitdiary_core::{EntryInput, JsonFileStore, Record, RecordStore};
use std::fs;

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

#[test]
fn missing_file_loads_as_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("records.json"));

    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_then_load_roundtrips_all_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("records.json"));

    let records = vec![record(1_700_000_000_000, 8), record(1_700_000_060_000, 5)];
    store.save(&records).unwrap();

    assert_eq!(store.load().unwrap(), records);
}

#[test]
fn save_overwrites_all_prior_data() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("records.json"));

    store
        .save(&[record(1_700_000_000_000, 8), record(1_700_000_060_000, 5)])
        .unwrap();
    store.save(&[record(1_700_000_120_000, 3)]).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 1_700_000_120_000);
}

#[test]
fn malformed_document_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    fs::write(&path, "{ not json ]").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn wrong_shape_document_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    fs::write(&path, "{\"id\": 1}").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn persisted_document_is_a_pretty_json_array_with_wire_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    let store = JsonFileStore::new(&path);

    store.save(&[record(1_700_000_000_000, 8)]).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.trim_start().starts_with('['));
    assert!(raw.contains('\n'), "document should be pretty-printed");
    for field in ["\"id\"", "\"date\"", "\"exercise_minutes\"", "\"calories\"", "\"water_cups\""] {
        assert!(raw.contains(field), "missing {field} in {raw}");
    }

    let reparsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(reparsed.is_array());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("data").join("records.json");
    let store = JsonFileStore::new(&path);

    store.save(&[record(1_700_000_000_000, 8)]).unwrap();
    assert!(path.exists());
}

#[test]
fn path_accessor_reports_configured_location() {
    let store = JsonFileStore::new("/tmp/fitdiary/records.json");
    assert_eq!(
        store.path().to_str().unwrap(),
        "/tmp/fitdiary/records.json"
    );
}
