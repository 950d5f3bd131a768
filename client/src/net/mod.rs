//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the calls, `mock` answers them when no backend is
//! configured, `resources` describes the list/create screens, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod error;
pub mod mock;
pub mod resources;
pub mod types;
