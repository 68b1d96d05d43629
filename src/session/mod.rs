//! Session Store
//!
//! Keeps the signed-in user and their token, mirrored into a key/value
//! storage backend so a session survives restarts.
//!
//! - **SessionStorage**: backend port (memory, JSON file, browser `localStorage`)
//! - **SessionStore**: login/logout/restore over a backend
//!
//! There is no expiry or refresh; a restored session is trusted until the
//! server rejects its token.

mod error;
mod memory;

#[cfg(feature = "native")]
mod file;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStorage;

#[cfg(feature = "native")]
pub use file::FileStorage;

use std::rc::Rc;

use crate::client::{ApiClient, ClientError, Transport};
use crate::model::User;

/// Storage key holding the JSON user object
pub const USER_KEY: &str = "user";
/// Storage key holding the raw token
pub const TOKEN_KEY: &str = "token";

/// Key/value backend for the session pair
pub trait SessionStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
    fn delete(&self, key: &str) -> StorageResult<()>;
}

/// Several stores may share one backend
impl<S: SessionStorage + ?Sized> SessionStorage for Rc<S> {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write(key, value)
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        (**self).delete(key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Outcome of checking a restored session against the server
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCheck {
    /// Nothing to check
    NoSession,
    /// Token accepted; carries the fresh profile
    Valid(User),
    /// Token refused; the session was cleared
    Rejected,
    /// Server not reachable; the session is kept
    Unverified(ClientError),
    /// The stored session was replaced or removed while the check was in
    /// flight; nothing was written and the store reloaded from storage
    Superseded,
}

pub struct SessionStore<S> {
    storage: S,
    current: Option<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, current: None }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.current.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    /// Load a persisted session without contacting the server
    ///
    /// Both keys must be present and the user must parse; anything else
    /// restores nothing.
    pub fn restore(&mut self) -> Option<&Session> {
        self.current = match self.read_pair() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Failed to restore session: {}", e);
                None
            }
        };
        self.current.as_ref()
    }

    fn read_pair(&self) -> StorageResult<Option<Session>> {
        let user = self.storage.read(USER_KEY)?;
        let token = self.storage.read(TOKEN_KEY)?;

        match (user, token) {
            (Some(user), Some(token)) if !token.is_empty() => {
                let user: User = serde_json::from_str(&user)?;
                Ok(Some(Session { user, token }))
            }
            _ => Ok(None),
        }
    }

    /// Persist and activate a session
    pub fn login(&mut self, user: User, token: String) -> StorageResult<()> {
        let encoded = serde_json::to_string(&user)?;
        self.storage.write(USER_KEY, &encoded)?;
        self.storage.write(TOKEN_KEY, &token)?;

        tracing::info!(username = %user.username, "Session started");
        self.current = Some(Session { user, token });
        Ok(())
    }

    /// Forget the session; both keys are removed even if one delete fails
    pub fn logout(&mut self) -> StorageResult<()> {
        self.current = None;
        let user = self.storage.delete(USER_KEY);
        let token = self.storage.delete(TOKEN_KEY);
        user.and(token)
    }

    /// Whether the backend still holds `token`
    pub fn stores_token(&self, token: &str) -> bool {
        matches!(self.storage.read(TOKEN_KEY), Ok(Some(stored)) if stored == token)
    }

    /// Re-validate the current session with `GET /auth/me/`
    ///
    /// `client` must already carry this session's token. The outcome is
    /// applied only if storage still holds the checked token when the
    /// response arrives.
    pub async fn verify<T: Transport>(&mut self, client: &ApiClient<T>) -> SessionCheck {
        let token = match &self.current {
            Some(session) => session.token.clone(),
            None => return SessionCheck::NoSession,
        };

        let outcome = client.current_user().await;

        if !self.stores_token(&token) {
            tracing::info!("Session changed during verification, result dropped");
            self.restore();
            return SessionCheck::Superseded;
        }

        match outcome {
            Ok(user) => {
                if let Err(e) = self.login(user.clone(), token) {
                    tracing::warn!("Failed to persist refreshed user: {}", e);
                }
                SessionCheck::Valid(user)
            }
            Err(e) if e.is_unauthorized() => {
                tracing::info!("Stored token rejected, signing out");
                if let Err(e) = self.logout() {
                    tracing::warn!("Failed to clear session: {}", e);
                }
                SessionCheck::Rejected
            }
            Err(e) => {
                tracing::warn!("Could not verify session: {}", e);
                SessionCheck::Unverified(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::FakeTransport;
    use crate::client::Method;

    fn demo_user() -> User {
        User {
            username: "demo".to_string(),
            full_name: "Demo Kullanıcı".to_string(),
            role_display: "Asistan".to_string(),
            ..Default::default()
        }
    }

    fn signed_in() -> SessionStore<MemoryStorage> {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(demo_user(), "tok-1".to_string()).unwrap();
        store
    }

    #[test]
    fn test_login_writes_both_keys() {
        let store = signed_in();
        assert_eq!(store.storage().read(TOKEN_KEY).unwrap().as_deref(), Some("tok-1"));
        let user = store.storage().read(USER_KEY).unwrap().unwrap();
        assert!(user.contains("\"username\":\"demo\""));
        assert_eq!(store.token(), Some("tok-1"));
    }

    #[test]
    fn test_restore_round_trip() {
        let store = signed_in();
        let mut fresh = SessionStore::new(store.storage);
        let session = fresh.restore().unwrap();
        assert_eq!(session.user, demo_user());
        assert_eq!(session.token, "tok-1");
    }

    #[test]
    fn test_logout_then_restore_yields_nothing() {
        let mut store = signed_in();
        store.logout().unwrap();
        assert!(store.current().is_none());
        assert!(store.storage().is_empty());

        assert!(store.restore().is_none());
    }

    #[test]
    fn test_restore_needs_both_keys() {
        let storage = MemoryStorage::new();
        storage.write(TOKEN_KEY, "tok-1").unwrap();
        let mut store = SessionStore::new(storage);
        assert!(store.restore().is_none());

        store.storage().write(USER_KEY, "{not json").unwrap();
        assert!(store.restore().is_none());
    }

    #[tokio::test]
    async fn test_verify_rejected_token_logs_out() {
        let fake = FakeTransport::new();
        fake.respond(Method::Get, "/auth/me/", 401, r#"{"detail": "Invalid token."}"#);
        let client = fake.client().with_token(Some("tok-1".to_string()));

        let mut store = signed_in();
        assert_eq!(store.verify(&client).await, SessionCheck::Rejected);
        assert!(store.current().is_none());
        assert!(store.storage().is_empty());
    }

    #[tokio::test]
    async fn test_verify_offline_keeps_session() {
        let fake = FakeTransport::new();
        let client = fake.client().with_token(Some("tok-1".to_string()));

        let mut store = signed_in();
        assert!(matches!(store.verify(&client).await, SessionCheck::Unverified(_)));
        assert_eq!(store.token(), Some("tok-1"));
    }

    #[tokio::test]
    async fn test_verify_refreshes_profile() {
        let fake = FakeTransport::new();
        fake.respond(
            Method::Get,
            "/auth/me/",
            200,
            r#"{"id": 3, "username": "demo", "full_name": "Dr. Demo", "role_display": "Hekim"}"#,
        );
        let client = fake.client().with_token(Some("tok-1".to_string()));

        let mut store = signed_in();
        match store.verify(&client).await {
            SessionCheck::Valid(user) => assert_eq!(user.full_name, "Dr. Demo"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(store.user().map(|u| u.display_name()), Some("Dr. Demo"));

        let mut empty = SessionStore::new(MemoryStorage::new());
        assert_eq!(empty.verify(&client).await, SessionCheck::NoSession);
    }

    const ME: &str = r#"{"id": 3, "username": "demo", "full_name": "Dr. Demo"}"#;

    #[tokio::test]
    async fn test_logout_while_verifying_stays_logged_out() {
        let storage = Rc::new(MemoryStorage::new());
        let mut shell = SessionStore::new(Rc::clone(&storage));
        shell.login(demo_user(), "tok-1".to_string()).unwrap();

        let mut checker = SessionStore::new(Rc::clone(&storage));
        assert!(checker.restore().is_some());

        let fake = FakeTransport::new();
        fake.respond(Method::Get, "/auth/me/", 200, ME);
        let shared = Rc::clone(&storage);
        fake.on_send(move || {
            SessionStore::new(Rc::clone(&shared)).logout().unwrap();
        });
        let client = fake.client().with_token(Some("tok-1".to_string()));

        assert_eq!(checker.verify(&client).await, SessionCheck::Superseded);
        assert!(storage.is_empty());
        assert!(checker.current().is_none());
        assert!(shell.restore().is_none());
    }

    #[tokio::test]
    async fn test_login_while_verifying_keeps_new_session() {
        let storage = Rc::new(MemoryStorage::new());
        let mut checker = SessionStore::new(Rc::clone(&storage));
        checker.login(demo_user(), "tok-1".to_string()).unwrap();

        let fake = FakeTransport::new();
        fake.respond(Method::Get, "/auth/me/", 401, r#"{"detail": "Invalid token."}"#);
        let shared = Rc::clone(&storage);
        fake.on_send(move || {
            let other = User {
                username: "ayse".to_string(),
                ..Default::default()
            };
            SessionStore::new(Rc::clone(&shared)).login(other, "tok-2".to_string()).unwrap();
        });
        let client = fake.client().with_token(Some("tok-1".to_string()));

        assert_eq!(checker.verify(&client).await, SessionCheck::Superseded);
        assert!(checker.stores_token("tok-2"));
        assert_eq!(checker.user().map(|u| u.username.as_str()), Some("ayse"));
    }
}
