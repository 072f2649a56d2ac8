use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("could not serialize value: {0}")]
    Serialize(String),
    #[error("stored value is corrupt: {0}")]
    Deserialize(String),
}

/// Durable key/value storage holding JSON values
pub trait KeyValueStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError>;
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// `window.localStorage` through gloo-storage
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match LocalStorage::get::<T>(key) {
            Ok(value) => Ok(Some(value)),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
            Err(gloo_storage::errors::StorageError::SerdeError(e)) => {
                Err(StorageError::Deserialize(e.to_string()))
            }
            Err(e) => Err(StorageError::Unavailable(e.to_string())),
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        LocalStorage::set(key, value).map_err(|e| match e {
            gloo_storage::errors::StorageError::SerdeError(e) => {
                StorageError::Serialize(e.to_string())
            }
            other => StorageError::Unavailable(other.to_string()),
        })
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// In-memory storage; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a raw (possibly invalid) JSON string under `key`
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.entries.borrow_mut().insert(key.to_string(), raw.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl PartialEq for MemoryStorage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl KeyValueStore for MemoryStorage {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.entries.borrow().get(key) {
            Some(json) => serde_json::from_str(json)
                .map(Some)
                .map_err(|e| StorageError::Deserialize(e.to_string())),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.entries.borrow_mut().insert(key.to_string(), json);
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_and_shares_state() {
        let storage = MemoryStorage::new();
        let alias = storage.clone();

        storage.save("token", &"abc".to_string()).unwrap();
        assert_eq!(alias.load::<String>("token").unwrap(), Some("abc".to_string()));
        assert_eq!(storage, alias);

        alias.remove("token");
        assert_eq!(storage.load::<String>("token").unwrap(), None);
    }

    #[test]
    fn corrupt_entries_are_reported() {
        let storage = MemoryStorage::new();
        storage.insert_raw("user", "{not json");
        assert!(matches!(
            storage.load::<String>("user"),
            Err(StorageError::Deserialize(_))
        ));
    }
}
