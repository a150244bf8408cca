//! # Key-Value Storage Port
//!
//! The storage interface the estimator flow depends on, plus an
//! in-memory implementation.
//!
//! ## Port Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storage Port Explained                               │
//! │                                                                         │
//! │  The flow never reaches for a global store. Whoever drives the         │
//! │  calculator hands it an Arc<dyn KeyValueStore>:                        │
//! │                                                                         │
//! │  ResultRepository::new(store)                                          │
//! │       │                                                                 │
//! │       ├── store.get("@interior_calculator_result")                     │
//! │       └── store.set("@interior_calculator_result", json)               │
//! │                                                                         │
//! │  Implementations:                                                       │
//! │  • InMemoryStore  - tests, embedding                                   │
//! │  • SqliteStore    - durable, on-device (sqlite.rs)                     │
//! │                                                                         │
//! │  The flow uses exactly one fixed key and never enumerates or           │
//! │  deletes keys, so get/set is the whole contract.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreResult;

// =============================================================================
// Port
// =============================================================================

/// String key-value storage, as the estimator flow sees it.
///
/// Implementations must be safe to share across tasks; the flow itself
/// performs at most one `get` at start and one `set` at completion, so
/// no read-modify-write coordination is required of them.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// Process-local store backed by a `HashMap`.
///
/// ## Usage
/// ```rust,ignore
/// let store = InMemoryStore::new();
/// store.set("k", "v").await?;
/// assert_eq!(store.get("k").await?.as_deref(), Some("v"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().expect("store mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().expect("store mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = InMemoryStore::new();
        store.set("key", "first").await.unwrap();
        assert_eq!(store.get("key").await.unwrap().as_deref(), Some("first"));
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let store = InMemoryStore::new();
        store.set("key", "first").await.unwrap();
        store.set("key", "second").await.unwrap();
        assert_eq!(store.get("key").await.unwrap().as_deref(), Some("second"));
    }
}
