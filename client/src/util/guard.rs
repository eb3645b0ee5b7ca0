//! Route guard for authenticated-only screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/profile` and `/recommendations` require a signed-in user. The decision
//! itself is pure; [`install`] applies it as a client-side effect so every
//! protected page redirects identically, remembering the requested path for
//! replay after login.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Outcome of a protected-route check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested view.
    Allow,
    /// Startup auth check still in flight; hold the view as-is.
    Wait,
    /// Redirect to the login screen, preserving the requested path.
    Deny { redirect_to: String },
}

/// Pure decision for a protected `path` given the current auth flags.
pub fn decide(loading: bool, authenticated: bool, path: &str) -> RouteDecision {
    if loading {
        RouteDecision::Wait
    } else if authenticated {
        RouteDecision::Allow
    } else {
        RouteDecision::Deny {
            redirect_to: login_redirect(path),
        }
    }
}

/// Login URL remembering the originally requested path.
pub fn login_redirect(path: &str) -> String {
    format!("/login?from={path}")
}

/// Destination to replay after a successful login.
///
/// Only absolute in-app paths are accepted; a missing or foreign value
/// falls back to the home page so the login form can never be used as an
/// open redirect.
pub fn post_login_destination(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/".to_owned(),
    }
}

/// Redirect away from `path` whenever auth has loaded and no user is
/// present. Effects never run during SSR, so the server renders the page
/// shell and the browser applies the guard.
pub fn install<F>(auth: RwSignal<AuthState>, path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if let RouteDecision::Deny { redirect_to } =
            decide(state.loading, state.is_authenticated(), path)
        {
            navigate(&redirect_to, NavigateOptions::default());
        }
    });
}
