//! Mock identity service standing in for the unbuilt backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity endpoints do not exist yet; the composition root wires this
//! mock so the auth screens behave end-to-end. A short simulated delay keeps
//! loading states honest in the browser; native builds resolve immediately.
//! Callers must not rely on any of this surviving the real backend
//! integration.

#![allow(clippy::unused_async)]

use super::api::{ApiError, IdentityApi};
use super::types::User;

/// Simulated round-trip latency in milliseconds.
#[cfg(feature = "hydrate")]
const MOCK_DELAY_MS: u32 = 400;

/// Fixed display name for mock logins, matching the pre-backend fixture.
const MOCK_DISPLAY_NAME: &str = "Test User";

async fn simulated_delay() {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::TimeoutFuture::new(MOCK_DELAY_MS).await;
}

/// Fabricates identity results without touching the network.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockIdentityApi;

impl IdentityApi for MockIdentityApi {
    /// No server-side session validation exists yet, so nobody is ever
    /// already signed in.
    async fn current_user(&self) -> Option<User> {
        simulated_delay().await;
        None
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        simulated_delay().await;
        let _ = password;
        Ok(User {
            id: "1".to_owned(),
            email: email.to_owned(),
            display_name: MOCK_DISPLAY_NAME.to_owned(),
            role: "student".to_owned(),
        })
    }

    async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        simulated_delay().await;
        let _ = password;
        Ok(User {
            id: "1".to_owned(),
            email: email.to_owned(),
            display_name: format!("{first_name} {last_name}"),
            role: "student".to_owned(),
        })
    }

    async fn logout(&self) -> Result<(), ApiError> {
        simulated_delay().await;
        Ok(())
    }
}
