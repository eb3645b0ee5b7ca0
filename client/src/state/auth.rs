//! Auth state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and identity-aware components to coordinate
//! login redirects and account rendering. The auth manager operations here
//! are the only code that mutates the user record.
//!
//! Overlapping login/register calls are not deduplicated; pages keep a
//! `busy` signal so only one attempt is in flight at a time.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::{ApiError, IdentityApi};
use crate::net::types::User;

/// Authentication state tracking the current user and the startup check.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    /// True while the startup session-validation call is in flight.
    pub loading: bool,
}

impl AuthState {
    /// Authenticated exactly when a user record is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Sign in with email and password.
///
/// On success the returned user record is stored; on failure the state is
/// unchanged and the error propagates for inline display.
///
/// # Errors
///
/// Returns the failure reported by the identity service.
pub async fn login<A: IdentityApi>(
    api: &A,
    state: &mut AuthState,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    match api.login(email, password).await {
        Ok(user) => {
            state.user = Some(user);
            Ok(())
        }
        Err(e) => {
            log::error!("login failed: {e}");
            Err(e)
        }
    }
}

/// Create an account and sign in as the new user.
///
/// Password confirmation is a caller-side precondition; this operation does
/// not re-check it.
///
/// # Errors
///
/// Returns the failure reported by the identity service.
pub async fn register<A: IdentityApi>(
    api: &A,
    state: &mut AuthState,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    match api.register(first_name, last_name, email, password).await {
        Ok(user) => {
            state.user = Some(user);
            Ok(())
        }
        Err(e) => {
            log::error!("registration failed: {e}");
            Err(e)
        }
    }
}

/// Sign out.
///
/// The local user record is cleared before the teardown result is reported:
/// after a failed teardown the previous state is undefined by contract, and
/// the caller is expected to force a clean reload.
///
/// # Errors
///
/// Returns the teardown failure reported by the identity service.
pub async fn logout<A: IdentityApi>(api: &A, state: &mut AuthState) -> Result<(), ApiError> {
    state.user = None;
    match api.logout().await {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("logout teardown failed: {e}");
            Err(e)
        }
    }
}

/// Startup session validation: adopt whatever user the identity service
/// reports. A `None` answer leaves the app unauthenticated; nothing is
/// fabricated client-side.
pub async fn startup_check<A: IdentityApi>(api: &A) -> Option<User> {
    api.current_user().await
}
