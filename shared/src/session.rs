//! Client-side session flags.
//!
//! The login flow (not part of this crate) writes two string-boolean flags
//! into storage. They carry no integrity guarantee and are only used to pick
//! which auth affordances to show.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not write session flag `{key}`: {message}")]
    Write { key: &'static str, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionFlag {
    LoggedIn,
    Admin,
}

impl SessionFlag {
    pub const ALL: [SessionFlag; 2] = [SessionFlag::LoggedIn, SessionFlag::Admin];

    pub fn storage_key(&self) -> &'static str {
        match self {
            SessionFlag::LoggedIn => "isLoggedIn",
            SessionFlag::Admin => "isAdmin",
        }
    }

    /// Only the exact text `true` counts; anything else is false.
    pub fn decode(raw: Option<&str>) -> bool {
        raw == Some("true")
    }

    pub fn encode(value: bool) -> &'static str {
        if value {
            "true"
        } else {
            "false"
        }
    }
}

/// Snapshot of both flags, read once at page load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
    pub admin: bool,
}

/// Persistence for the session flags.
///
/// Methods take `&self`: the browser store is a global, and the in-memory
/// store uses interior mutability so both can be shared with event handlers.
pub trait SessionStore {
    fn get(&self, flag: SessionFlag) -> bool;

    fn set(&self, flag: SessionFlag, value: bool) -> Result<(), SessionError>;

    /// Removes the flag entirely.
    fn clear(&self, flag: SessionFlag);

    fn load(&self) -> SessionState {
        SessionState {
            logged_in: self.get(SessionFlag::LoggedIn),
            admin: self.get(SessionFlag::Admin),
        }
    }

    fn clear_all(&self) {
        for flag in SessionFlag::ALL {
            self.clear(flag);
        }
    }
}

/// Clears both flags and reloads the page. There is no server round-trip and
/// no failure path.
pub fn logout<S, R>(store: &S, reload: R)
where
    S: SessionStore + ?Sized,
    R: FnOnce(),
{
    store.clear_all();
    reload();
}

/// Store backed by a map of raw string values, for tests and non-browser use.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: RefCell<HashMap<&'static str, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: SessionState) -> Self {
        let store = Self::new();
        store.set_raw(SessionFlag::LoggedIn, SessionFlag::encode(state.logged_in));
        store.set_raw(SessionFlag::Admin, SessionFlag::encode(state.admin));
        store
    }

    /// Writes a value verbatim, the way an external script would.
    pub fn set_raw(&self, flag: SessionFlag, value: &str) {
        self.values
            .borrow_mut()
            .insert(flag.storage_key(), value.to_string());
    }

    pub fn raw(&self, flag: SessionFlag) -> Option<String> {
        self.values.borrow().get(flag.storage_key()).cloned()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, flag: SessionFlag) -> bool {
        SessionFlag::decode(self.values.borrow().get(flag.storage_key()).map(String::as_str))
    }

    fn set(&self, flag: SessionFlag, value: bool) -> Result<(), SessionError> {
        self.set_raw(flag, SessionFlag::encode(value));
        Ok(())
    }

    fn clear(&self, flag: SessionFlag) {
        self.values.borrow_mut().remove(flag.storage_key());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_storage_keys() {
        assert_eq!(SessionFlag::LoggedIn.storage_key(), "isLoggedIn");
        assert_eq!(SessionFlag::Admin.storage_key(), "isAdmin");
    }

    #[test]
    fn test_decode_only_accepts_exact_true() {
        assert!(SessionFlag::decode(Some("true")));
        assert!(!SessionFlag::decode(Some("false")));
        assert!(!SessionFlag::decode(Some("TRUE")));
        assert!(!SessionFlag::decode(Some("1")));
        assert!(!SessionFlag::decode(None));
    }

    #[test]
    fn test_load_from_external_writes() {
        let store = MemorySessionStore::new();
        assert_eq!(store.load(), SessionState::default());

        store.set_raw(SessionFlag::LoggedIn, "true");
        assert_eq!(
            store.load(),
            SessionState {
                logged_in: true,
                admin: false
            }
        );
    }

    #[test]
    fn test_set_uses_string_encoding() {
        let store = MemorySessionStore::new();
        store.set(SessionFlag::Admin, true).unwrap();
        assert_eq!(store.raw(SessionFlag::Admin).as_deref(), Some("true"));
        assert!(store.get(SessionFlag::Admin));
    }

    #[test]
    fn test_logout_clears_flags_then_reloads() {
        let store = MemorySessionStore::with_state(SessionState {
            logged_in: true,
            admin: true,
        });
        let reloaded = Cell::new(false);

        logout(&store, || {
            assert_eq!(store.raw(SessionFlag::LoggedIn), None);
            reloaded.set(true);
        });

        assert!(reloaded.get());
        assert_eq!(store.raw(SessionFlag::LoggedIn), None);
        assert_eq!(store.raw(SessionFlag::Admin), None);
        assert_eq!(store.load(), SessionState::default());
    }

    #[test]
    fn test_logout_through_trait_object() {
        let store: Box<dyn SessionStore> = Box::new(MemorySessionStore::with_state(SessionState {
            logged_in: true,
            admin: false,
        }));
        let reloads = Cell::new(0);
        logout(store.as_ref(), || reloads.set(reloads.get() + 1));
        assert_eq!(reloads.get(), 1);
        assert!(!store.load().logged_in);
    }
}
