//! Persisted session model and the stores that hold it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes a session, the sign-out action clears it, and the
//! route gate reads it on every navigation. Nothing else mutates it.
//!
//! DESIGN
//! ======
//! Stores write the token last and clear it first. The token is the only
//! field that grants access, so a reader never sees a live token paired with
//! a half-written role or user id.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Storage key for the opaque authentication token.
pub const TOKEN_KEY: &str = "eldercare.token";
/// Storage key for the role string.
pub const ROLE_KEY: &str = "eldercare.role";
/// Storage key for the user id / username.
pub const USER_ID_KEY: &str = "eldercare.userId";

/// Caller role. Anything the client does not recognize becomes `Guest`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Doctor,
    Caregiver,
    Patient,
    #[default]
    Guest,
}

impl Role {
    /// Every role with a dashboard of its own.
    pub const SIGNED_IN: [Role; 3] = [Role::Doctor, Role::Caregiver, Role::Patient];

    /// Parse a stored or server-supplied role string.
    ///
    /// Case-insensitive and whitespace-tolerant; absent or unknown values
    /// fall back to [`Role::Guest`].
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Role::Guest;
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "doctor" => Role::Doctor,
            "caregiver" => Role::Caregiver,
            "patient" => Role::Patient,
            _ => Role::Guest,
        }
    }

    /// Canonical lowercase form used in storage and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Doctor => "doctor",
            Role::Caregiver => "caregiver",
            Role::Patient => "patient",
            Role::Guest => "guest",
        }
    }

    /// Human-readable label for menus and headings.
    pub fn label(self) -> &'static str {
        match self {
            Role::Doctor => "Doctor",
            Role::Caregiver => "Caregiver",
            Role::Patient => "Patient",
            Role::Guest => "Guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the authenticated identity held in client storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Role,
    pub user_id: Option<String>,
}

impl Session {
    /// Build a session from raw stored strings, normalizing as `read()` does.
    pub fn from_raw(token: Option<String>, role: Option<&str>, user_id: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
            role: Role::parse(role),
            user_id: user_id.filter(|u| !u.is_empty()),
        }
    }
}

/// Durable key/value home for the session.
///
/// Implementations swallow storage failures: a store that cannot be read
/// behaves as an empty one.
pub trait SessionStore: Send + Sync {
    /// Persist all three fields, replacing whatever was there.
    fn write(&self, token: &str, role: Role, user_id: &str);
    /// Current session; missing role reads as guest, missing token as absent.
    fn read(&self) -> Session;
    /// Remove every session field.
    fn clear(&self);
}

/// Remove the session keys through `remove`, token first.
///
/// Stops when the token cannot be removed, so a failed sign-out still reads
/// back as the complete old session rather than a token with no role.
/// Returns whether every key was removed.
pub fn clear_keys(mut remove: impl FnMut(&'static str) -> bool) -> bool {
    if !remove(TOKEN_KEY) {
        return false;
    }
    let role = remove(ROLE_KEY);
    let user = remove(USER_ID_KEY);
    role && user
}

/// In-process store used on the server and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<&'static str, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw value under `key`, bypassing normalization.
    ///
    /// Lets callers reproduce whatever an older client left behind.
    pub fn set_raw(&self, key: &'static str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key, value.to_owned());
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

impl SessionStore for MemoryStore {
    fn write(&self, token: &str, role: Role, user_id: &str) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        entries.insert(ROLE_KEY, role.as_str().to_owned());
        entries.insert(USER_ID_KEY, user_id.to_owned());
        entries.insert(TOKEN_KEY, token.to_owned());
    }

    fn read(&self) -> Session {
        Session::from_raw(self.get(TOKEN_KEY), self.get(ROLE_KEY).as_deref(), self.get(USER_ID_KEY))
    }

    fn clear(&self) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        clear_keys(|key| {
            entries.remove(key);
            true
        });
    }
}
