//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A session is a backend-issued conversation identifier plus the language
//! preference, mirrored to two plain `localStorage` keys so it survives
//! reloads. Session and auth are independent slices: a session can be
//! active without a signed-in user and vice versa.
//!
//! Every mutating operation writes storage synchronously with the in-memory
//! update. Overlapping `create_session` calls are not deduplicated; the
//! last one to resolve wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::{ApiError, SessionApi};
use crate::state::ui::{Notifier, ToastKind};
use crate::util::storage::KeyValueStore;

/// Storage key holding the opaque session identifier.
pub const SESSION_ID_KEY: &str = "edupath-session-id";
/// Storage key holding the two-letter language code.
pub const LANGUAGE_KEY: &str = "edupath-language";

/// Interface language. The product is bilingual by design.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Parse a stored language code. Anything outside the enumeration is
    /// rejected so a corrupt value falls back to the default.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Fr,
            Language::Fr => Language::En,
        }
    }
}

/// Client-held session record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session_id: Option<String>,
    pub language: Language,
}

impl SessionState {
    /// A session is active exactly when an identifier is present.
    pub fn is_active(&self) -> bool {
        self.session_id.is_some()
    }
}

/// Startup read of the persisted session. A present identifier yields an
/// active session; an absent one leaves the default inactive state. A
/// stored language outside `en`/`fr` falls back to the default.
pub fn load(store: &impl KeyValueStore) -> SessionState {
    let session_id = store.get(SESSION_ID_KEY);
    let language = store
        .get(LANGUAGE_KEY)
        .and_then(|raw| Language::parse(&raw))
        .unwrap_or_default();
    SessionState {
        session_id,
        language,
    }
}

/// Ask the backend for a new session and adopt the result.
///
/// On success the identifier and language are stored in-state and under
/// both storage keys, and a success toast is emitted. On failure the state
/// and storage are left untouched, an error toast is emitted, and the error
/// propagates to the caller.
///
/// # Errors
///
/// Returns the transport failure reported by the session endpoint.
pub async fn create_session<A, S, N>(
    api: &A,
    store: &S,
    notify: &N,
    state: &mut SessionState,
    language: Language,
) -> Result<String, ApiError>
where
    A: SessionApi,
    S: KeyValueStore,
    N: Notifier,
{
    match api.create_session(language).await {
        Ok(session_id) => {
            state.session_id = Some(session_id.clone());
            state.language = language;
            store.set(SESSION_ID_KEY, &session_id);
            store.set(LANGUAGE_KEY, language.as_str());
            notify.notify(ToastKind::Success, "Session created successfully!");
            Ok(session_id)
        }
        Err(e) => {
            log::error!("failed to create session: {e}");
            notify.notify(ToastKind::Error, "Failed to create session. Please try again.");
            Err(e)
        }
    }
}

/// Drop the session unconditionally: unset the identifier, remove both
/// persisted keys, and emit an informational toast. Never fails and is
/// idempotent.
pub fn clear_session<S, N>(store: &S, notify: &N, state: &mut SessionState)
where
    S: KeyValueStore,
    N: Notifier,
{
    state.session_id = None;
    store.remove(SESSION_ID_KEY);
    store.remove(LANGUAGE_KEY);
    notify.notify(ToastKind::Info, "Session cleared");
}

/// Switch the interface language in memory and in storage. Never fails.
pub fn set_language<S: KeyValueStore>(store: &S, state: &mut SessionState, language: Language) {
    state.language = language;
    store.set(LANGUAGE_KEY, language.as_str());
}
