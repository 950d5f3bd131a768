//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome to
//! `components`. The route gate picks which page renders.

pub mod dashboard;
pub(crate) mod forms;
pub mod login;
pub mod profile;
pub mod records;
pub mod reminders;
pub mod settings;
pub mod signup;
