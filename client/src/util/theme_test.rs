use super::*;

use crate::util::storage::MemoryStore;

#[test]
fn read_preference_honors_a_stored_dark_value() {
    let store = MemoryStore::default();
    store.set("edupath-theme", "dark");
    assert!(read_preference(&store));
}

#[test]
fn read_preference_treats_other_stored_values_as_light() {
    let store = MemoryStore::default();
    store.set("edupath-theme", "light");
    assert!(!read_preference(&store));
}

#[test]
fn read_preference_defaults_to_light_without_a_system_signal() {
    let store = MemoryStore::default();
    assert!(!read_preference(&store));
}

#[test]
fn toggle_persists_the_new_preference() {
    let store = MemoryStore::default();
    assert!(toggle(&store, false));
    assert_eq!(store.get("edupath-theme").as_deref(), Some("dark"));
    assert!(!toggle(&store, true));
    assert_eq!(store.get("edupath-theme").as_deref(), Some("light"));
}
