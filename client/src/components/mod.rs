//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome while reading/writing shared state from
//! the Leptos context providers set up in `app`.

pub mod footer;
pub mod header;
pub mod toast;
