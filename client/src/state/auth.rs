//! Auth gate and the session context shared with route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and the shell components read identity from a
//! `SessionContext` provided by the root component. The context is the only
//! writer of the underlying `SessionStore`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::LoginGrant;
use crate::state::session::{Role, Session, SessionStore};

/// True iff the session carries a non-empty token.
pub fn is_authenticated(session: &Session) -> bool {
    session.token.as_deref().is_some_and(|t| !t.is_empty())
}

/// The caller's role. Unrecognized values were already folded to guest when
/// the session was read, so this never yields anything outside the enum.
pub fn role_of(session: &Session) -> Role {
    session.role
}

/// Persist a successful login and return the session as storage now holds it.
///
/// Callers must publish the returned session before navigating anywhere.
pub fn establish(store: &dyn SessionStore, grant: &LoginGrant) -> Session {
    store.write(&grant.token, grant.role, &grant.user_id);
    store.read()
}

/// Drop the persisted session and return the resulting empty state.
pub fn end(store: &dyn SessionStore) -> Session {
    store.clear();
    store.read()
}

/// Reactive view of the session plus whether storage has been read yet.
///
/// `loaded` stays false during SSR and the first client render so both
/// sides produce identical markup before hydration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub loaded: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        is_authenticated(&self.session)
    }

    pub fn role(&self) -> Role {
        role_of(&self.session)
    }
}

/// Explicit handle to the session, constructed once by the root component.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    state: RwSignal<AuthState>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store, state: RwSignal::new(AuthState::default()) }
    }

    /// Reactive auth state for guards and menus.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    /// Read storage and mark the session as loaded.
    pub fn load(&self) {
        let session = self.store.read();
        self.state.set(AuthState { session, loaded: true });
    }

    /// Write a login grant and publish the re-read session.
    pub fn establish(&self, grant: &LoginGrant) -> Session {
        let session = establish(self.store.as_ref(), grant);
        self.state.set(AuthState { session: session.clone(), loaded: true });
        session
    }

    /// Clear storage and publish the signed-out state.
    pub fn end(&self) {
        let session = end(self.store.as_ref());
        self.state.set(AuthState { session, loaded: true });
    }
}
