//! `localStorage`-backed session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate builds persist the session in the browser so it survives reloads.
//! SSR builds have no browser; the store then reads as empty and ignores
//! writes, which keeps server rendering deterministic.

#[cfg(feature = "hydrate")]
use crate::state::session::{ROLE_KEY, TOKEN_KEY, USER_ID_KEY, clear_keys};
use crate::state::session::{Role, Session, SessionStore};

/// Session store over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalStorageStore {
    fn write(&self, token: &str, role: Role, user_id: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = storage() else {
                leptos::logging::warn!("localStorage unavailable; session not persisted");
                return;
            };
            let _ = storage.set_item(ROLE_KEY, role.as_str());
            let _ = storage.set_item(USER_ID_KEY, user_id);
            let _ = storage.set_item(TOKEN_KEY, token);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, role, user_id);
        }
    }

    fn read(&self) -> Session {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = storage() else {
                return Session::default();
            };
            let get = |key: &str| storage.get_item(key).ok().flatten();
            Session::from_raw(get(TOKEN_KEY), get(ROLE_KEY).as_deref(), get(USER_ID_KEY))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Session::default()
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = storage() else {
                return;
            };
            if !clear_keys(|key| storage.remove_item(key).is_ok()) {
                leptos::logging::warn!("localStorage refused to clear the session");
            }
        }
    }
}
