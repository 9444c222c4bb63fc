//! Session state and access control for the careers admin console.
//!
//! Two pieces live here:
//!
//! - [`SessionStore`]: who is logged in, mirrored to durable key-value storage
//!   so a reload restores the session.
//! - [`access`]: which navigation entries (and therefore which pages) the
//!   current identity may see.
//!
//! Nothing in this crate touches the network or the UI toolkit; the web app
//! owns one [`SessionStore`] and subscribes to it.
//!
//! # Example
//!
//! ```rust
//! use admin_session::{access, Identity, MemoryStorage, Role, SessionStore, Tokens, UserId};
//!
//! let store = SessionStore::new(MemoryStorage::new());
//! store.bootstrap();
//! assert!(!store.is_authenticated());
//!
//! let identity = Identity {
//!     id: UserId::Int(7),
//!     email: "editor@example.com".into(),
//!     first_name: "Ada".into(),
//!     last_name: "Lovelace".into(),
//!     role: Role::Subadmin,
//!     access_pages: vec!["blogs".into()],
//! };
//! store.login(identity, Tokens::new("access-token", Some("refresh-token".into())));
//!
//! let snapshot = store.snapshot();
//! let labels: Vec<_> = access::visible_entries(snapshot.identity.as_ref(), access::NAV_ENTRIES)
//!     .into_iter()
//!     .map(|entry| entry.label)
//!     .collect();
//! assert_eq!(labels, ["Dashboard", "Blog Manager", "Settings"]);
//! ```

pub mod access;
pub mod error;
pub mod identity;
pub mod session;
pub mod storage;

pub use error::{PersistError, StorageError};
pub use identity::{Identity, Role, Tokens, UserId};
pub use session::{BootstrapPhase, Session, SessionSnapshot, SessionStore, SubscriptionId};
pub use storage::{MemoryStorage, Storage};

#[cfg(feature = "web")]
pub use storage::LocalStorage;
