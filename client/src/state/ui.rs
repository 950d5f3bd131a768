//! Local UI chrome state (sidebar, account menu, theme).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session so the shell can
//! evolve independently of access control.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Collapsed sidebar width in pixels.
pub const SIDEBAR_COLLAPSED_WIDTH: u32 = 60;
/// Expanded sidebar width in pixels.
pub const SIDEBAR_EXPANDED_WIDTH: u32 = 240;

/// UI state for the application shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// The sidebar starts collapsed to its icon rail.
    pub sidebar_open: bool,
    pub account_menu_open: bool,
}

impl UiState {
    /// Current sidebar width; the main content is offset by the same amount.
    pub fn sidebar_width(&self) -> u32 {
        if self.sidebar_open { SIDEBAR_EXPANDED_WIDTH } else { SIDEBAR_COLLAPSED_WIDTH }
    }
}
