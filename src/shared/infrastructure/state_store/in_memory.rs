// In memory implementation of the StateStore port.
//
// Purpose
// - Support handler tests and local development without a sidecar.
//
// Responsibilities
// - Store string values per (store name, key).
// - Simulate an unreachable store and slow reads so the non-atomic
//   read-increment-write can be exercised under concurrency.

use crate::shared::infrastructure::state_store::{StateStore, StateStoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryStateStore {
    inner: RwLock<HashMap<(String, String), String>>,
    offline: bool,
    offline_set: bool,
    delay_get_ms: AtomicU64,
    calls: AtomicUsize,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Fails only `set`, leaving reads available.
    pub fn toggle_offline_set(&mut self) {
        self.offline_set = !self.offline_set;
    }

    /// Delays every `get` after the value has been read, widening the window
    /// between a read and the caller's subsequent write.
    pub fn set_delay_get_ms(&self, ms: u64) {
        self.delay_get_ms.store(ms, Ordering::SeqCst);
    }

    /// Number of `get`/`set` calls received, including failed ones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn seed(&self, store_name: &str, key: &str, value: &str) {
        self.inner
            .write()
            .await
            .insert((store_name.to_string(), key.to_string()), value.to_string());
    }

    fn ensure_online(&self, offline: bool) -> Result<(), StateStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline || offline {
            return Err(StateStoreError::Unavailable("State store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl StateStore for InMemoryStateStore {
    async fn get(&self, store_name: &str, key: &str) -> Result<Option<String>, StateStoreError> {
        self.ensure_online(false)?;
        let value = {
            let guard = self.inner.read().await;
            guard.get(&(store_name.to_string(), key.to_string())).cloned()
        };
        let delay = self.delay_get_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        Ok(value)
    }

    async fn set(&self, store_name: &str, key: &str, value: &str) -> Result<(), StateStoreError> {
        self.ensure_online(self.offline_set)?;
        self.inner
            .write()
            .await
            .insert((store_name.to_string(), key.to_string()), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_state_store_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_return_none_for_an_unknown_key() {
        let store = InMemoryStateStore::new();
        let value = store.get("statestore", "Alice").await.unwrap();
        assert_eq!(value, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_set_and_get_a_value() {
        let store = InMemoryStateStore::new();
        store.set("statestore", "Alice", "3").await.unwrap();
        let value = store.get("statestore", "Alice").await.unwrap();
        assert_eq!(value.as_deref(), Some("3"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_store_names_apart() {
        let store = InMemoryStateStore::new();
        store.seed("statestore", "Alice", "1").await;
        let value = store.get("otherstore", "Alice").await.unwrap();
        assert_eq!(value, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_offline() {
        let mut store = InMemoryStateStore::new();
        store.toggle_offline();
        let result = store.set("statestore", "Alice", "1").await;
        assert!(matches!(result, Err(StateStoreError::Unavailable(_))));
        let result = store.get("statestore", "Alice").await;
        assert!(matches!(result, Err(StateStoreError::Unavailable(_))));
        assert_eq!(store.calls(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_only_writes_when_set_is_offline() {
        let mut store = InMemoryStateStore::new();
        store.seed("statestore", "Alice", "1").await;
        store.toggle_offline_set();
        let result = store.set("statestore", "Alice", "2").await;
        assert!(matches!(result, Err(StateStoreError::Unavailable(_))));
        let value = store.get("statestore", "Alice").await.unwrap();
        assert_eq!(value.as_deref(), Some("1"));
    }
}
