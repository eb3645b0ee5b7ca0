//! Service traits for the backend plus their HTTP implementations.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Any non-2xx response is a uniform failure; callers receive [`ApiError`]
//! and decide whether to surface it inline or as a toast. Nothing retries,
//! and no request carries a timeout.

#![allow(clippy::unused_async)]
#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::User;
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, RegisterRequest, SessionRequest, SessionResponse};
use crate::state::session::Language;

/// Base URL of the backend API; the reference deployment serves it from a
/// separate FastAPI process.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// Transport-level failure talking to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Issues backend sessions.
pub trait SessionApi {
    /// Exchange a language preference and the client user-agent for an
    /// opaque session identifier.
    async fn create_session(&self, language: Language) -> Result<String, ApiError>;
}

/// Identity operations: session validation, login, register, logout.
pub trait IdentityApi {
    /// Ask the backend whether a user is already signed in.
    async fn current_user(&self) -> Option<User>;
    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError>;
    async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn session_endpoint(base: &str) -> String {
    format!("{base}/auth/session")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(base: &str) -> String {
    format!("{base}/auth/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint(base: &str) -> String {
    format!("{base}/auth/register")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/logout")
}

#[cfg(any(test, feature = "hydrate"))]
fn me_endpoint(base: &str) -> String {
    format!("{base}/auth/me")
}

/// Client identifying string sent with session creation.
#[cfg(feature = "hydrate")]
fn browser_user_agent() -> String {
    web_sys::window()
        .map(|w| w.navigator().user_agent().unwrap_or_default())
        .unwrap_or_default()
}

#[cfg(feature = "hydrate")]
fn transport_error(e: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(e.to_string())
}

/// `gloo-net` implementation of [`SessionApi`].
#[derive(Clone, Debug)]
pub struct HttpSessionApi {
    base_url: String,
}

impl HttpSessionApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpSessionApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl SessionApi for HttpSessionApi {
    async fn create_session(&self, language: Language) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = SessionRequest {
                language_preference: language.as_str().to_owned(),
                user_agent: browser_user_agent(),
            };
            let resp = gloo_net::http::Request::post(&session_endpoint(&self.base_url))
                .json(&payload)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            let body: SessionResponse = resp.json().await.map_err(transport_error)?;
            Ok(body.session_id)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = language;
            Err(ApiError::Unavailable)
        }
    }
}

/// `gloo-net` implementation of [`IdentityApi`] against the identity
/// endpoints the backend will expose. Nothing wires this up yet; the
/// composition root uses [`crate::net::mock::MockIdentityApi`] until the
/// backend ships.
#[derive(Clone, Debug)]
pub struct HttpIdentityApi {
    base_url: String,
}

impl HttpIdentityApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpIdentityApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl IdentityApi for HttpIdentityApi {
    async fn current_user(&self) -> Option<User> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&me_endpoint(&self.base_url))
                .send()
                .await
                .ok()?;
            if !resp.ok() {
                return None;
            }
            resp.json::<User>().await.ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = LoginRequest {
                email: email.to_owned(),
                password: password.to_owned(),
            };
            let resp = gloo_net::http::Request::post(&login_endpoint(&self.base_url))
                .json(&payload)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<User>().await.map_err(transport_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = RegisterRequest {
                email: email.to_owned(),
                password: password.to_owned(),
                first_name: first_name.to_owned(),
                last_name: last_name.to_owned(),
            };
            let resp = gloo_net::http::Request::post(&register_endpoint(&self.base_url))
                .json(&payload)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<User>().await.map_err(transport_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (first_name, last_name, email, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&logout_endpoint(&self.base_url))
                .send()
                .await
                .map_err(transport_error)?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
