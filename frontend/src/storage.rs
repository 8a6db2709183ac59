use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use log::warn;
use thiserror::Error;

pub const FILTER_CATEGORIES_KEY: &str = "portfolio-filter-categories";
pub const FILTER_TAGS_KEY: &str = "portfolio-filter-tags";
pub const COOKIE_CONSENT_KEY: &str = "cookie-consent";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("local storage is not available")]
    Unavailable,

    #[error("storage operation on {key} failed: {message}")]
    Operation { key: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::NoWindow)?;
        window
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

fn operation_error(key: &str, err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Operation {
        key: key.to_string(),
        message: err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| operation_error(key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| operation_error(key, e))
    }
}

/// In-memory store, used where no browser is around.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn try_load_set(store: &dyn KeyValueStore, key: &str) -> Result<BTreeSet<String>, StorageError> {
    match store.get(key)? {
        Some(raw) => Ok(serde_json::from_str::<Vec<String>>(&raw)?
            .into_iter()
            .collect()),
        None => Ok(BTreeSet::new()),
    }
}

/// Reads a JSON string array. Anything unreadable comes back as an empty set.
pub fn load_set(store: &dyn KeyValueStore, key: &str) -> BTreeSet<String> {
    try_load_set(store, key).unwrap_or_else(|e| {
        warn!("Discarding stored value for {}: {}", key, e);
        BTreeSet::new()
    })
}

pub fn save_set(
    store: &dyn KeyValueStore,
    key: &str,
    values: &BTreeSet<String>,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(values)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let store = MemoryStore::default();
        assert!(load_set(&store, FILTER_TAGS_KEY).is_empty());
    }

    #[test]
    fn test_saved_set_reads_back() {
        let store = MemoryStore::default();
        let tags = set_of(&["React", "AWS"]);
        save_set(&store, FILTER_TAGS_KEY, &tags).unwrap();
        assert_eq!(load_set(&store, FILTER_TAGS_KEY), tags);
    }

    #[test]
    fn test_order_and_duplicates_ignored() {
        let store = MemoryStore::default();
        store
            .set(FILTER_CATEGORIES_KEY, r#"["Web","Mobile","Web"]"#)
            .unwrap();
        assert_eq!(load_set(&store, FILTER_CATEGORIES_KEY), set_of(&["Mobile", "Web"]));
    }

    #[test]
    fn test_corrupted_json_fails_safe() {
        let store = MemoryStore::default();
        store.set(FILTER_CATEGORIES_KEY, "{not json").unwrap();
        assert!(load_set(&store, FILTER_CATEGORIES_KEY).is_empty());

        store.set(FILTER_CATEGORIES_KEY, r#"{"Web":1}"#).unwrap();
        assert!(load_set(&store, FILTER_CATEGORIES_KEY).is_empty());

        store.set(FILTER_CATEGORIES_KEY, "[1,2]").unwrap();
        assert!(load_set(&store, FILTER_CATEGORIES_KEY).is_empty());
    }

    #[test]
    fn test_keys_are_independent() {
        let store = MemoryStore::default();
        save_set(&store, FILTER_CATEGORIES_KEY, &set_of(&["Web"])).unwrap();
        assert!(load_set(&store, FILTER_TAGS_KEY).is_empty());
        save_set(&store, FILTER_CATEGORIES_KEY, &BTreeSet::new()).unwrap();
        assert!(load_set(&store, FILTER_CATEGORIES_KEY).is_empty());
        assert_eq!(store.get(FILTER_CATEGORIES_KEY).unwrap().as_deref(), Some("[]"));
    }
}
