//! Durable key-value text storage backing the session.
//!
//! In the browser this is `window.localStorage`; everywhere else (native
//! builds, tests) an in-memory map stands in for it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

/// Keys under which the session is persisted.
pub mod keys {
    /// Serialized [`Identity`](crate::Identity)
    pub const USER: &str = "user";

    /// Serialized [`Tokens`](crate::Tokens)
    pub const TOKENS: &str = "tokens";
}

/// A string-keyed, string-valued store.
///
/// Methods take `&self`; implementations use interior mutability the way the
/// browser's storage object does.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory storage. Clones share the same map, so a test can keep a handle
/// while the session store owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage`
#[cfg(feature = "web")]
#[derive(Clone)]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

#[cfg(feature = "web")]
impl LocalStorage {
    /// Open the page's local storage.
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;

        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;

        Ok(Self { inner })
    }
}

#[cfg(feature = "web")]
impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key).map_err(|e| StorageError::Operation {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value).map_err(|e| StorageError::Operation {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key).map_err(|e| StorageError::Operation {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        storage.set(keys::USER, "{}").unwrap();
        assert!(handle.contains(keys::USER));
        assert_eq!(handle.get(keys::USER).unwrap().as_deref(), Some("{}"));

        handle.remove(keys::USER).unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_removing_absent_key_is_ok() {
        let storage = MemoryStorage::new();
        assert!(storage.remove(keys::TOKENS).is_ok());
        assert_eq!(storage.get(keys::TOKENS).unwrap(), None);
    }
}
