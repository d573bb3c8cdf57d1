use tempfile::TempDir;

use shotsweep::common::errors::PolicyError;
use shotsweep::policy::types::{FolderSummary, MAX_RETENTION_DAYS, MIN_RETENTION_DAYS};
use shotsweep::policy::{AutoDestroyStore, FileBackend, MemoryBackend, SETTINGS_KEY};

fn summary(id: &str, name: &str) -> FolderSummary {
    FolderSummary {
        id: id.to_string(),
        name: name.to_string(),
        icon: "💼".to_string(),
        color: "#111".to_string(),
        screenshot_count: 12,
    }
}

fn memory_store() -> AutoDestroyStore<MemoryBackend> {
    AutoDestroyStore::open(MemoryBackend::new()).unwrap()
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[test]
fn test_add_folder() {
    let mut store = memory_store();
    let folders = store.add_folder(&summary("f1", "Work"), 30).unwrap();

    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0].id, "f1");
    assert_eq!(folders[0].name, "Work");
    assert_eq!(folders[0].icon, "💼");
    assert_eq!(folders[0].color, "#111");
    assert_eq!(folders[0].screenshot_count, 12);
    assert_eq!(folders[0].retention_days, 30);
}

#[test]
fn test_add_rejects_out_of_range_days() {
    let mut store = memory_store();

    for days in [0, 366, -5, 1000] {
        let err = store.add_folder(&summary("f1", "Work"), days).unwrap_err();
        assert!(matches!(err, PolicyError::OutOfRange { .. }), "days={}", days);
        assert!(store.folders().is_empty(), "folders must be unchanged");
    }

    // Boundary values are accepted
    store
        .add_folder(&summary("f1", "Work"), MIN_RETENTION_DAYS as i64)
        .unwrap();
    store
        .add_folder(&summary("f2", "Personal"), MAX_RETENTION_DAYS as i64)
        .unwrap();
    assert_eq!(store.folders().len(), 2);
}

#[test]
fn test_add_rejects_missing_selection() {
    let mut store = memory_store();
    let err = store.add_folder(&summary("", "Nameless"), 30).unwrap_err();
    assert!(matches!(err, PolicyError::MissingSelection));
    assert!(store.folders().is_empty());
}

#[test]
fn test_add_rejects_duplicate_id() {
    let mut store = memory_store();
    store.add_folder(&summary("f1", "Work"), 30).unwrap();

    let err = store.add_folder(&summary("f1", "Work"), 60).unwrap_err();
    assert!(matches!(err, PolicyError::AlreadyTracked { .. }));
    assert_eq!(store.folders().len(), 1);
    assert_eq!(store.folders()[0].retention_days, 30, "entry must be unchanged");
}

// ─── Removal ─────────────────────────────────────────────────────────────────

#[test]
fn test_remove_is_idempotent() {
    let mut store = memory_store();
    store.add_folder(&summary("f1", "Work"), 30).unwrap();

    store.remove_folder("f1").unwrap();
    let after_first = store.config().clone();

    store.remove_folder("f1").unwrap();
    assert_eq!(store.config(), &after_first);
    assert!(store.folders().is_empty());
}

#[test]
fn test_remove_preserves_survivor_order() {
    let mut store = memory_store();
    store.add_folder(&summary("f1", "Work"), 10).unwrap();
    store.add_folder(&summary("f2", "Personal"), 20).unwrap();
    store.add_folder(&summary("f3", "Projects"), 30).unwrap();

    store.remove_folder("f2").unwrap();

    let ids: Vec<_> = store.folders().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["f1", "f3"]);
}

// ─── Retention updates ───────────────────────────────────────────────────────

#[test]
fn test_update_retention_clamps() {
    let mut store = memory_store();
    store.add_folder(&summary("f1", "Work"), 30).unwrap();

    assert_eq!(store.update_retention("f1", 500).unwrap(), 365);
    assert_eq!(store.folders()[0].retention_days, 365);

    assert_eq!(store.update_retention("f1", -5).unwrap(), 1);
    assert_eq!(store.folders()[0].retention_days, 1);

    assert_eq!(store.update_retention("f1", 90).unwrap(), 90);
    assert_eq!(store.folders()[0].retention_days, 90);
}

#[test]
fn test_update_retention_unknown_id() {
    let mut store = memory_store();
    let err = store.update_retention("ghost", 30).unwrap_err();
    assert!(matches!(err, PolicyError::NotFound { .. }));
}

// ─── Persistence round-trips ─────────────────────────────────────────────────

#[test]
fn test_add_then_reload() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = AutoDestroyStore::open(FileBackend::new(dir.path())).unwrap();
        store.add_folder(&summary("f1", "Work"), 30).unwrap();
    }

    // Restart-equivalent reload from the same backend
    let store = AutoDestroyStore::open(FileBackend::new(dir.path())).unwrap();
    assert_eq!(store.folders().len(), 1);
    assert_eq!(store.folders()[0].id, "f1");
    assert_eq!(store.folders()[0].retention_days, 30);
}

#[test]
fn test_enabled_survives_reload() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = AutoDestroyStore::open(FileBackend::new(dir.path())).unwrap();
        store.set_enabled(true).unwrap();
    }

    let store = AutoDestroyStore::open(FileBackend::new(dir.path())).unwrap();
    assert!(store.is_enabled());
}

#[test]
fn test_persisted_layout_uses_camel_case() {
    let dir = TempDir::new().unwrap();
    let mut store = AutoDestroyStore::open(FileBackend::new(dir.path())).unwrap();
    store.add_folder(&summary("f1", "Work"), 30).unwrap();

    let raw = std::fs::read_to_string(dir.path().join(format!("{}.json", SETTINGS_KEY))).unwrap();
    assert!(raw.contains("\"screenshotCount\""));
    assert!(raw.contains("\"retentionDays\""));
    assert!(raw.contains("\"enabled\""));
}

#[test]
fn test_full_scenario() {
    let dir = TempDir::new().unwrap();
    let mut store = AutoDestroyStore::open(FileBackend::new(dir.path())).unwrap();

    assert!(!store.is_enabled());
    assert!(store.folders().is_empty());

    store.add_folder(&summary("f1", "Work"), 30).unwrap();
    assert_eq!(store.folders()[0].retention_days, 30);

    store.update_retention("f1", 400).unwrap();
    assert_eq!(store.folders()[0].retention_days, 365);

    store.remove_folder("f1").unwrap();
    assert!(store.folders().is_empty());
}

// ─── Malformed persisted data ────────────────────────────────────────────────

#[test]
fn test_garbage_settings_fall_back_to_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(format!("{}.json", SETTINGS_KEY)),
        "not json at all",
    )
    .unwrap();

    let store = AutoDestroyStore::open(FileBackend::new(dir.path())).unwrap();
    assert!(!store.is_enabled());
    assert!(store.folders().is_empty());
}

#[test]
fn test_partially_corrupt_settings_keep_valid_half() {
    let dir = TempDir::new().unwrap();
    let raw = r##"{
        "enabled": true,
        "folders": [
            {"id": "f1", "name": "Work", "icon": "💼", "color": "#111",
             "screenshotCount": 12, "retentionDays": 30},
            {"id": "f2", "name": "Broken"}
        ]
    }"##;
    std::fs::write(dir.path().join(format!("{}.json", SETTINGS_KEY)), raw).unwrap();

    let store = AutoDestroyStore::open(FileBackend::new(dir.path())).unwrap();
    assert!(store.is_enabled(), "enabled flag should be salvaged");
    assert_eq!(store.folders().len(), 1, "only the bad entry is dropped");
    assert_eq!(store.folders()[0].id, "f1");
}

#[test]
fn test_out_of_range_persisted_retention_is_clamped_on_load() {
    let dir = TempDir::new().unwrap();
    let raw = r##"{
        "enabled": false,
        "folders": [
            {"id": "f1", "name": "Work", "icon": "💼", "color": "#111",
             "screenshotCount": 12, "retentionDays": 999}
        ]
    }"##;
    std::fs::write(dir.path().join(format!("{}.json", SETTINGS_KEY)), raw).unwrap();

    let store = AutoDestroyStore::open(FileBackend::new(dir.path())).unwrap();
    assert_eq!(store.folders()[0].retention_days, 365);
}

// ─── Persistence failure stays observable ────────────────────────────────────

#[test]
fn test_failed_write_rolls_back_memory() {
    let dir = TempDir::new().unwrap();
    // A file where the store directory should be makes every write fail.
    let blocked = dir.path().join("store");
    std::fs::write(&blocked, "in the way").unwrap();

    let mut store = AutoDestroyStore::open(FileBackend::new(&blocked)).unwrap();
    let err = store.set_enabled(true).unwrap_err();

    assert!(matches!(err, PolicyError::PersistenceFailure { .. }));
    assert!(!store.is_enabled(), "memory must not run ahead of disk");
}
