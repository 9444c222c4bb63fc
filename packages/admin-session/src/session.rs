//! Session store: the single source of truth for who is logged in.
//!
//! The store is created once by the application root with the storage it
//! should persist to, then shared by reference. Dependents observe it through
//! [`SessionStore::subscribe`] instead of polling.
//!
//! Lifecycle:
//!
//! ```text
//! Pending --bootstrap--> Resolved(authenticated | unauthenticated)
//!                        Resolved(..) <--login/logout--> Resolved(..)
//! ```
//!
//! Bootstrap runs once. Identity and tokens are always written, restored and
//! cleared together; a half-restored session is treated as no session.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::PersistError;
use crate::identity::{Identity, Tokens};
use crate::storage::{keys, Storage};

/// An authenticated identity together with its credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
    pub tokens: Tokens,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapPhase {
    /// Persisted state has not been read yet; role-gated UI must not render
    Pending,
    Resolved,
}

/// Read-only view handed to observers and the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub identity: Option<Identity>,
    pub tokens: Option<Tokens>,
    pub is_authenticated: bool,
    pub bootstrap_pending: bool,
}

impl SessionSnapshot {
    /// The state before bootstrap has run.
    pub fn pending() -> Self {
        Self {
            identity: None,
            tokens: None,
            is_authenticated: false,
            bootstrap_pending: true,
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.tokens.as_ref().map(|t| t.access.as_str())
    }
}

/// Handle returned by [`SessionStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&SessionSnapshot)>;

pub struct SessionStore {
    storage: Box<dyn Storage>,
    phase: Cell<BootstrapPhase>,
    session: RefCell<Option<Session>>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<u64>,
}

impl SessionStore {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            phase: Cell::new(BootstrapPhase::Pending),
            session: RefCell::new(None),
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        }
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Restore a previous session from storage.
    ///
    /// Runs at most once; later calls return the current authentication state
    /// without touching storage. Returns whether a session was restored.
    pub fn bootstrap(&self) -> bool {
        if self.phase.get() == BootstrapPhase::Resolved {
            debug!("Session bootstrap already resolved");
            return self.is_authenticated();
        }

        let restored = match read_persisted(self.storage.as_ref()) {
            Ok(session) => {
                info!(user_id = %session.identity.id, "Restored persisted session");
                Some(session)
            }
            Err(e) => {
                if e.is_missing() {
                    debug!(reason = %e, "No persisted session");
                } else {
                    warn!(error = %e, "Discarding corrupt persisted session");
                }
                self.clear_persisted();
                None
            }
        };

        let authenticated = restored.is_some();
        *self.session.borrow_mut() = restored;
        self.phase.set(BootstrapPhase::Resolved);
        self.notify();

        authenticated
    }

    /// Record a successful login and persist it.
    ///
    /// Storage failures are logged; the in-memory session is set regardless.
    pub fn login(&self, identity: Identity, tokens: Tokens) {
        let session = Session { identity, tokens };
        self.persist(&session);

        info!(user_id = %session.identity.id, role = session.identity.role.label(), "Logged in");
        *self.session.borrow_mut() = Some(session);
        self.phase.set(BootstrapPhase::Resolved);
        self.notify();
    }

    /// Clear the session from memory and storage.
    ///
    /// Always succeeds and is safe to repeat. Returns the tokens that were
    /// evicted so the caller can revoke them server-side.
    pub fn logout(&self) -> Option<Tokens> {
        let evicted = self.session.borrow_mut().take();
        self.clear_persisted();

        match &evicted {
            Some(session) => info!(user_id = %session.identity.id, "Logged out"),
            None => debug!("Logout with no active session"),
        }

        self.phase.set(BootstrapPhase::Resolved);
        self.notify();

        evicted.map(|session| session.tokens)
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    pub fn snapshot(&self) -> SessionSnapshot {
        let session = self.session.borrow();
        SessionSnapshot {
            identity: session.as_ref().map(|s| s.identity.clone()),
            tokens: session.as_ref().map(|s| s.tokens.clone()),
            is_authenticated: session.is_some(),
            bootstrap_pending: self.phase.get() == BootstrapPhase::Pending,
        }
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.phase.get()
    }

    pub fn is_pending(&self) -> bool {
        self.phase.get() == BootstrapPhase::Pending
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_some()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session.borrow().as_ref().map(|s| s.identity.clone())
    }

    pub fn tokens(&self) -> Option<Tokens> {
        self.session.borrow().as_ref().map(|s| s.tokens.clone())
    }

    pub fn access_token(&self) -> Option<String> {
        self.session
            .borrow()
            .as_ref()
            .map(|s| s.tokens.access.clone())
    }

    // ------------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------------

    /// Call `f` with a fresh snapshot after every state change.
    pub fn subscribe(&self, f: impl Fn(&SessionSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(f)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        // Release the borrow before calling out so observers may (un)subscribe.
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, f)| Rc::clone(f))
            .collect();

        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }

    // ------------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------------

    fn persist(&self, session: &Session) {
        let result = write_entry(self.storage.as_ref(), keys::USER, &session.identity)
            .and_then(|_| write_entry(self.storage.as_ref(), keys::TOKENS, &session.tokens));

        if let Err(e) = result {
            warn!(error = %e, "Failed to persist session, it will not survive a reload");
            // Never leave one half behind.
            self.clear_persisted();
        }
    }

    fn clear_persisted(&self) {
        for key in [keys::USER, keys::TOKENS] {
            if let Err(e) = self.storage.remove(key) {
                warn!(key, error = %e, "Failed to remove persisted session entry");
            }
        }
    }
}

/// Read the persisted session, or say why there is none.
///
/// Both entries must be present and well-formed; anything less is an error.
pub fn read_persisted(storage: &dyn Storage) -> Result<Session, PersistError> {
    let identity: Identity = read_entry(storage, keys::USER)?;
    let tokens: Tokens = read_entry(storage, keys::TOKENS)?;

    if tokens.access.trim().is_empty() {
        return Err(PersistError::Malformed {
            key: keys::TOKENS,
            reason: "empty access token".to_string(),
        });
    }

    Ok(Session { identity, tokens })
}

fn read_entry<T: DeserializeOwned>(
    storage: &dyn Storage,
    key: &'static str,
) -> Result<T, PersistError> {
    let raw = storage.get(key)?.ok_or(PersistError::Missing { key })?;

    serde_json::from_str(&raw).map_err(|e| PersistError::Malformed {
        key,
        reason: e.to_string(),
    })
}

fn write_entry<T: Serialize>(
    storage: &dyn Storage,
    key: &'static str,
    value: &T,
) -> Result<(), PersistError> {
    let raw = serde_json::to_string(value).map_err(|e| PersistError::Malformed {
        key,
        reason: e.to_string(),
    })?;
    storage.set(key, &raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::identity::{Role, UserId};
    use crate::storage::MemoryStorage;

    fn subadmin() -> Identity {
        Identity {
            id: UserId::Text("u1".to_string()),
            email: "editor@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: Role::Subadmin,
            access_pages: vec!["blogs".to_string()],
        }
    }

    fn tokens() -> Tokens {
        Tokens::new("access-abc", Some("refresh-xyz".to_string()))
    }

    fn logged_out() -> SessionSnapshot {
        SessionSnapshot {
            identity: None,
            tokens: None,
            is_authenticated: false,
            bootstrap_pending: false,
        }
    }

    /// Storage that refuses to write one key.
    struct RejectingStorage {
        inner: MemoryStorage,
        reject: &'static str,
    }

    impl Storage for RejectingStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.reject {
                return Err(StorageError::Operation {
                    key: key.to_string(),
                    message: "quota exceeded".to_string(),
                });
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_new_store_is_pending() {
        let store = SessionStore::new(MemoryStorage::new());
        assert_eq!(store.snapshot(), SessionSnapshot::pending());
        assert_eq!(store.phase(), BootstrapPhase::Pending);
    }

    #[test]
    fn test_bootstrap_with_empty_storage_resolves_logged_out() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(!store.bootstrap());
        assert_eq!(store.snapshot(), logged_out());
    }

    #[test]
    fn test_login_survives_reload() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.bootstrap();
        store.login(subadmin(), tokens());

        // Simulate a page reload: a fresh store over the same storage
        let reloaded = SessionStore::new(storage);
        assert!(reloaded.bootstrap());

        let snapshot = reloaded.snapshot();
        assert_eq!(snapshot.identity, Some(subadmin()));
        assert_eq!(snapshot.tokens, Some(tokens()));
        assert!(snapshot.is_authenticated);
        assert!(!snapshot.bootstrap_pending);
    }

    #[test]
    fn test_corrupt_user_entry_discards_both() {
        let storage = MemoryStorage::new();
        storage.set(keys::USER, "{not json").unwrap();
        storage
            .set(keys::TOKENS, &serde_json::to_string(&tokens()).unwrap())
            .unwrap();

        let store = SessionStore::new(storage.clone());
        assert!(!store.bootstrap());
        assert_eq!(store.snapshot(), logged_out());
        assert!(!storage.contains(keys::USER));
        assert!(!storage.contains(keys::TOKENS));
    }

    #[test]
    fn test_corrupt_tokens_entry_discards_both() {
        let storage = MemoryStorage::new();
        storage
            .set(keys::USER, &serde_json::to_string(&subadmin()).unwrap())
            .unwrap();
        storage.set(keys::TOKENS, "undefined").unwrap();

        let store = SessionStore::new(storage.clone());
        assert!(!store.bootstrap());
        assert_eq!(store.snapshot(), logged_out());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_half_persisted_session_is_discarded() {
        let storage = MemoryStorage::new();
        storage
            .set(keys::USER, &serde_json::to_string(&subadmin()).unwrap())
            .unwrap();

        let store = SessionStore::new(storage.clone());
        assert!(!store.bootstrap());
        assert_eq!(store.snapshot(), logged_out());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_treated_as_corrupt() {
        let storage = MemoryStorage::new();
        storage.set(keys::USER, r#"{"name":"old schema"}"#).unwrap();
        storage.set(keys::TOKENS, r#"{"access":""}"#).unwrap();

        let err = read_persisted(&storage).unwrap_err();
        assert!(matches!(err, PersistError::Malformed { key: keys::USER, .. }));

        storage
            .set(keys::USER, &serde_json::to_string(&subadmin()).unwrap())
            .unwrap();
        let err = read_persisted(&storage).unwrap_err();
        assert!(matches!(err, PersistError::Malformed { key: keys::TOKENS, .. }));
    }

    #[test]
    fn test_bootstrap_runs_once() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        assert!(!store.bootstrap());

        // Written behind the store's back after resolution; must not be picked up
        storage
            .set(keys::USER, &serde_json::to_string(&subadmin()).unwrap())
            .unwrap();
        storage
            .set(keys::TOKENS, &serde_json::to_string(&tokens()).unwrap())
            .unwrap();

        assert!(!store.bootstrap());
        assert!(!store.is_authenticated());
        assert!(!store.is_pending());
    }

    #[test]
    fn test_logout_when_logged_out_is_noop() {
        let store = SessionStore::new(MemoryStorage::new());
        store.bootstrap();

        assert_eq!(store.logout(), None);
        assert_eq!(store.logout(), None);
        assert_eq!(store.snapshot(), logged_out());
    }

    #[test]
    fn test_logout_clears_memory_and_storage() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.bootstrap();
        store.login(subadmin(), tokens());
        assert_eq!(storage.len(), 2);

        let evicted = store.logout();
        assert_eq!(evicted, Some(tokens()));
        assert_eq!(store.snapshot(), logged_out());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_login_tolerates_storage_failure() {
        let inner = MemoryStorage::new();
        let store = SessionStore::new(RejectingStorage {
            inner: inner.clone(),
            reject: keys::TOKENS,
        });
        store.bootstrap();
        store.login(subadmin(), tokens());

        assert!(store.is_authenticated());
        assert_eq!(store.access_token().as_deref(), Some("access-abc"));
        // The identity half must not be left behind on its own
        assert!(inner.is_empty());
    }

    #[test]
    fn test_subscribers_see_every_transition() {
        let store = SessionStore::new(MemoryStorage::new());
        let seen: Rc<RefCell<Vec<(bool, bool)>>> = Rc::default();

        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |snap| {
            sink.borrow_mut()
                .push((snap.is_authenticated, snap.bootstrap_pending));
        });

        store.bootstrap();
        store.login(subadmin(), tokens());
        store.logout();
        store.unsubscribe(id);
        store.login(subadmin(), tokens());

        assert_eq!(
            *seen.borrow(),
            vec![(false, false), (true, false), (false, false)]
        );
    }

    #[test]
    fn test_subscriber_may_unsubscribe_during_notify() {
        let store = Rc::new(SessionStore::new(MemoryStorage::new()));
        let calls = Rc::new(Cell::new(0));
        let id_slot: Rc<Cell<Option<SubscriptionId>>> = Rc::default();

        let weak = Rc::downgrade(&store);
        let counter = Rc::clone(&calls);
        let slot = Rc::clone(&id_slot);
        let id = store.subscribe(move |_| {
            counter.set(counter.get() + 1);
            if let (Some(store), Some(id)) = (weak.upgrade(), slot.get()) {
                store.unsubscribe(id);
            }
        });
        id_slot.set(Some(id));

        store.bootstrap();
        store.logout();
        assert_eq!(calls.get(), 1);
    }
}
