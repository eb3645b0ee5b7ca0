//! Networking modules for the backend HTTP contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the service traits and their HTTP implementations, `mock`
//! stands in for the endpoints the backend has not shipped yet, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod mock;
pub mod types;
