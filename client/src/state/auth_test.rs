use super::*;
use crate::state::session::MemoryStore;

fn grant(token: &str, role: Role, user_id: &str) -> LoginGrant {
    LoginGrant { token: token.to_owned(), role, user_id: user_id.to_owned() }
}

// =============================================================
// Auth gate
// =============================================================

#[test]
fn default_session_is_not_authenticated() {
    assert!(!is_authenticated(&Session::default()));
    assert_eq!(role_of(&Session::default()), Role::Guest);
}

#[test]
fn token_presence_alone_authenticates() {
    let session = Session { token: Some("tok".to_owned()), role: Role::Guest, user_id: None };
    assert!(is_authenticated(&session));
    assert_eq!(role_of(&session), Role::Guest);
}

#[test]
fn empty_token_is_not_authenticated() {
    let session = Session { token: Some(String::new()), role: Role::Doctor, user_id: None };
    assert!(!is_authenticated(&session));
}

#[test]
fn role_without_token_is_not_authenticated() {
    let session = Session { token: None, role: Role::Doctor, user_id: Some("u1".to_owned()) };
    assert!(!is_authenticated(&session));
}

// =============================================================
// establish / end
// =============================================================

#[test]
fn establish_returns_session_visible_in_store() {
    let store = MemoryStore::new();
    let session = establish(&store, &grant("tok1", Role::Caregiver, "u1"));
    assert!(is_authenticated(&session));
    assert_eq!(session.role, Role::Caregiver);
    assert_eq!(session.user_id.as_deref(), Some("u1"));
    assert_eq!(store.read(), session);
}

#[test]
fn end_after_establish_is_unauthenticated() {
    let store = MemoryStore::new();
    establish(&store, &grant("tok1", Role::Doctor, "u1"));
    let session = end(&store);
    assert!(!is_authenticated(&session));
    assert_eq!(session.role, Role::Guest);
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_not_loaded() {
    let state = AuthState::default();
    assert!(!state.loaded);
    assert!(!state.is_authenticated());
    assert_eq!(state.role(), Role::Guest);
}
