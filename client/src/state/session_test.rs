use super::*;

use std::cell::RefCell;

use futures::executor::block_on;

use crate::util::storage::MemoryStore;

/// Scripted session endpoint double.
struct FakeSessionApi {
    result: Result<String, ApiError>,
}

impl SessionApi for FakeSessionApi {
    async fn create_session(&self, _language: Language) -> Result<String, ApiError> {
        self.result.clone()
    }
}

/// Records notifications instead of rendering them.
#[derive(Default)]
struct RecordingNotifier {
    seen: RefCell<Vec<(ToastKind, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        self.seen.borrow_mut().push((kind, message.to_owned()));
    }
}

// =============================================================
// SessionState invariants
// =============================================================

#[test]
fn session_state_default_is_inactive_english() {
    let state = SessionState::default();
    assert_eq!(state.session_id, None);
    assert_eq!(state.language, Language::En);
    assert!(!state.is_active());
}

#[test]
fn is_active_tracks_session_id_presence() {
    let mut state = SessionState::default();
    assert!(!state.is_active());
    state.session_id = Some("abc123".to_owned());
    assert!(state.is_active());
    state.session_id = None;
    assert!(!state.is_active());
}

// =============================================================
// Language
// =============================================================

#[test]
fn language_parse_accepts_only_the_enumeration() {
    assert_eq!(Language::parse("en"), Some(Language::En));
    assert_eq!(Language::parse("fr"), Some(Language::Fr));
    assert_eq!(Language::parse("de"), None);
    assert_eq!(Language::parse(""), None);
}

#[test]
fn language_toggle_flips_between_the_two_values() {
    assert_eq!(Language::En.toggled(), Language::Fr);
    assert_eq!(Language::Fr.toggled(), Language::En);
}

#[test]
fn set_language_round_trips_through_storage() {
    for language in [Language::En, Language::Fr] {
        let store = MemoryStore::default();
        let mut state = SessionState::default();
        set_language(&store, &mut state, language);
        assert_eq!(load(&store).language, language);
    }
}

// =============================================================
// load
// =============================================================

#[test]
fn load_from_empty_storage_is_inactive_with_default_language() {
    let store = MemoryStore::default();
    assert_eq!(load(&store), SessionState::default());
}

#[test]
fn load_restores_a_persisted_session() {
    let store = MemoryStore::default();
    store.set(SESSION_ID_KEY, "abc123");
    store.set(LANGUAGE_KEY, "fr");
    let state = load(&store);
    assert_eq!(state.session_id.as_deref(), Some("abc123"));
    assert_eq!(state.language, Language::Fr);
    assert!(state.is_active());
}

#[test]
fn load_rejects_a_corrupt_language_value() {
    let store = MemoryStore::default();
    store.set(LANGUAGE_KEY, "klingon");
    assert_eq!(load(&store).language, Language::En);
}

// =============================================================
// create_session
// =============================================================

#[test]
fn create_session_success_adopts_and_persists_the_result() {
    let api = FakeSessionApi {
        result: Ok("abc123".to_owned()),
    };
    let store = MemoryStore::default();
    let notify = RecordingNotifier::default();
    let mut state = SessionState::default();

    let id = block_on(create_session(&api, &store, &notify, &mut state, Language::Fr)).unwrap();

    assert_eq!(id, "abc123");
    assert_eq!(state.session_id.as_deref(), Some("abc123"));
    assert_eq!(state.language, Language::Fr);
    assert!(state.is_active());
    assert_eq!(store.get(SESSION_ID_KEY).as_deref(), Some("abc123"));
    assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("fr"));
    assert_eq!(notify.seen.borrow()[0].0, ToastKind::Success);
}

#[test]
fn create_session_failure_leaves_state_and_storage_untouched() {
    let api = FakeSessionApi {
        result: Err(ApiError::Status(500)),
    };
    let store = MemoryStore::default();
    let notify = RecordingNotifier::default();
    let mut state = SessionState::default();
    let before = state.clone();

    let err = block_on(create_session(&api, &store, &notify, &mut state, Language::En)).unwrap_err();

    assert_eq!(err, ApiError::Status(500));
    assert_eq!(state, before);
    assert_eq!(store.get(SESSION_ID_KEY), None);
    assert_eq!(store.get(LANGUAGE_KEY), None);
    assert_eq!(notify.seen.borrow()[0].0, ToastKind::Error);
}

// =============================================================
// clear_session
// =============================================================

#[test]
fn clear_session_unsets_state_and_removes_both_keys() {
    let store = MemoryStore::default();
    store.set(SESSION_ID_KEY, "abc123");
    store.set(LANGUAGE_KEY, "fr");
    let notify = RecordingNotifier::default();
    let mut state = load(&store);

    clear_session(&store, &notify, &mut state);

    assert_eq!(state.session_id, None);
    assert!(!state.is_active());
    assert_eq!(store.get(SESSION_ID_KEY), None);
    assert_eq!(store.get(LANGUAGE_KEY), None);
    assert_eq!(notify.seen.borrow()[0].0, ToastKind::Info);
}

#[test]
fn clear_session_twice_matches_clearing_once() {
    let store = MemoryStore::default();
    store.set(SESSION_ID_KEY, "abc123");
    let notify = RecordingNotifier::default();
    let mut state = load(&store);

    clear_session(&store, &notify, &mut state);
    let after_once = state.clone();
    clear_session(&store, &notify, &mut state);

    assert_eq!(state, after_once);
    assert_eq!(store.get(SESSION_ID_KEY), None);
}
