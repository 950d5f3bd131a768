use super::*;
use crate::routing::route::LOGIN_PATH;
use crate::state::session::{Role, Session};

fn loaded(session: Session) -> AuthState {
    AuthState { session, loaded: true }
}

fn signed_in(role: Role) -> Session {
    Session { token: Some("t".to_owned()), role, user_id: Some("u@example.com".to_owned()) }
}

#[test]
fn nothing_is_decided_before_storage_is_read() {
    let state = AuthState::default();
    assert_eq!(gate_decision(&state, "/patients"), None);
    assert_eq!(gate_decision(&state, "/login"), None);
}

#[test]
fn unread_session_with_token_still_waits() {
    let state = AuthState { session: signed_in(Role::Doctor), loaded: false };
    assert_eq!(gate_decision(&state, "/dashboard"), None);
    let state = AuthState { loaded: true, ..state };
    assert_eq!(gate_decision(&state, "/dashboard"), Some(RouteDecision::Render(Route::Dashboard(Role::Doctor))));
}

#[test]
fn loaded_guest_is_sent_to_login_from_protected_pages() {
    let state = loaded(Session::default());
    assert_eq!(gate_decision(&state, "/settings"), Some(RouteDecision::RedirectTo(LOGIN_PATH)));
}

#[test]
fn loaded_session_renders_matching_dashboard() {
    let state = loaded(signed_in(Role::Caregiver));
    assert_eq!(
        gate_decision(&state, "/caregiver-dashboard"),
        Some(RouteDecision::Render(Route::Dashboard(Role::Caregiver)))
    );
}
