//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the authenticated shell (side menu + top bar) and the
//! route gate that decides, per navigation, what the shell shows.

pub mod navbar;
pub mod route_gate;
pub mod shell;
pub mod sidebar;
