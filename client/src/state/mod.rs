//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `auth`, `ui`) so components can
//! depend on small focused models.

pub mod auth;
pub mod session;
pub mod ui;
