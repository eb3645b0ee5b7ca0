//! Shared application state provided through Leptos context signals.
//!
//! ARCHITECTURE
//! ============
//! Each module owns one state slice as a plain struct plus the operations
//! that mutate it. Operations are generic over the service and storage
//! traits so native tests can drive them against fakes; the `App` component
//! is the only place concrete implementations are named.

pub mod auth;
pub mod session;
pub mod ui;
