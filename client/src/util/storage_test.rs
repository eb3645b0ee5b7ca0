use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::default();
    store.set("k", "v");
    assert_eq!(store.get("k"), Some("v".to_owned()));
}

#[test]
fn memory_store_overwrites_existing_key() {
    let store = MemoryStore::default();
    store.set("k", "first");
    store.set("k", "second");
    assert_eq!(store.get("k"), Some("second".to_owned()));
}

#[test]
fn memory_store_remove_deletes_key() {
    let store = MemoryStore::default();
    store.set("k", "v");
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn memory_store_remove_missing_key_is_noop() {
    let store = MemoryStore::default();
    store.remove("missing");
    assert_eq!(store.get("missing"), None);
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[test]
fn browser_storage_degrades_to_noop_without_a_window() {
    let store = BrowserStorage;
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
    store.remove("k");
}
