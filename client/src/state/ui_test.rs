use super::*;

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_sidebar_collapsed() {
    let state = UiState::default();
    assert!(!state.sidebar_open);
    assert_eq!(state.sidebar_width(), SIDEBAR_COLLAPSED_WIDTH);
}

#[test]
fn ui_state_open_sidebar_uses_expanded_width() {
    let state = UiState { sidebar_open: true, ..UiState::default() };
    assert_eq!(state.sidebar_width(), SIDEBAR_EXPANDED_WIDTH);
}

#[test]
fn ui_state_default_account_menu_closed() {
    assert!(!UiState::default().account_menu_open);
}
