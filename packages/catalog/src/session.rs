//! # Signed-in session and where it is kept
//!
//! [`Session`] is what the client remembers after a successful login: the
//! bearer token (when the backend issues one), who logged in, and which side
//! of the app they belong to.
//!
//! Persistence goes through the [`SessionStore`] trait:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`LocalSessionStore`]
//! - **Everywhere else**: process memory via [`MemorySessionStore`]
//!
//! Stores never fail loudly. A missing or corrupt entry reads as "signed out";
//! a failed write is logged and otherwise ignored.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Which dashboard a user lands on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Librarian,
    #[default]
    Member,
}

impl Role {
    /// Pick a role from the login response, falling back to the email
    /// convention (`ad…` addresses are librarians) when the backend sends none.
    pub fn resolve(role: Option<&str>, email: &str) -> Self {
        match role.map(str::trim).filter(|r| !r.is_empty()) {
            Some(role) => {
                let role = role.to_ascii_lowercase();
                let role = role.strip_prefix("role_").unwrap_or(&role);
                if matches!(role, "librarian" | "admin") {
                    Role::Librarian
                } else {
                    Role::Member
                }
            }
            None if email.trim().to_lowercase().starts_with("ad") => Role::Librarian,
            None => Role::Member,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl Session {
    pub fn is_librarian(&self) -> bool {
        self.role == Role::Librarian
    }
}

/// Somewhere to keep the current session between page loads.
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// In-memory store for native targets and tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    slot: Arc<Mutex<Option<Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn save(&self, session: &Session) {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(session.clone());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalSessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local {
    use super::{Session, SessionStore};

    const SESSION_KEY: &str = "libris.session";
    /// Key the bearer token has always lived under.
    const TOKEN_KEY: &str = "token";

    /// `localStorage`-backed store. The token is mirrored under the plain
    /// `token` key as well.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct LocalSessionStore;

    impl LocalSessionStore {
        pub fn new() -> Self {
            Self
        }

        fn storage() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok()?
        }
    }

    impl SessionStore for LocalSessionStore {
        fn load(&self) -> Option<Session> {
            let raw = Self::storage()?.get_item(SESSION_KEY).ok()??;
            match serde_json::from_str(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!("discarding unreadable session: {e}");
                    None
                }
            }
        }

        fn save(&self, session: &Session) {
            let Some(storage) = Self::storage() else {
                tracing::warn!("localStorage unavailable; session not persisted");
                return;
            };
            let raw = match serde_json::to_string(session) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::error!("failed to encode session: {e}");
                    return;
                }
            };
            let _ = storage.set_item(SESSION_KEY, &raw);
            match &session.token {
                Some(token) => {
                    let _ = storage.set_item(TOKEN_KEY, token);
                }
                None => {
                    let _ = storage.remove_item(TOKEN_KEY);
                }
            }
        }

        fn clear(&self) {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(SESSION_KEY);
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            email: "grace@example.com".into(),
            role,
            token: Some("abc123".into()),
            user_id: Some(7),
        }
    }

    #[test]
    fn test_role_from_backend_wins() {
        assert_eq!(Role::resolve(Some("LIBRARIAN"), "user@example.com"), Role::Librarian);
        assert_eq!(Role::resolve(Some("ROLE_ADMIN"), "user@example.com"), Role::Librarian);
        assert_eq!(Role::resolve(Some("member"), "admin@example.com"), Role::Member);
    }

    #[test]
    fn test_role_falls_back_to_email_prefix() {
        assert_eq!(Role::resolve(None, "Admin@library.org"), Role::Librarian);
        assert_eq!(Role::resolve(Some("  "), "adele@library.org"), Role::Librarian);
        assert_eq!(Role::resolve(None, "reader@library.org"), Role::Member);
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::new();
        assert!(store.load().is_none());

        store.save(&session(Role::Librarian));
        let loaded = store.load().unwrap();
        assert!(loaded.is_librarian());
        assert_eq!(loaded.token.as_deref(), Some("abc123"));

        // Clones share the slot.
        let other = store.clone();
        other.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_session_tolerates_missing_optional_fields() {
        let parsed: Session =
            serde_json::from_str(r#"{"email":"a@b.co","role":"Member"}"#).unwrap();
        assert_eq!(parsed.token, None);
        assert_eq!(parsed.user_id, None);
        assert!(!parsed.is_librarian());
    }
}
