//! In-memory adapter for the StateStore port
//!
//! Used by tests and ephemeral runs; same last-write-wins semantics as
//! the file adapter, nothing survives the process.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::domain::result::Result;
use crate::ports::{StateStore, StoreKey};

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<StoreKey, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<StoreKey, Value>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: StoreKey) -> Result<Option<Value>> {
        Ok(self.entries().get(&key).cloned())
    }

    fn write(&self, key: StoreKey, value: Value) -> Result<()> {
        self.entries().insert(key, value);
        Ok(())
    }

    fn remove(&self, key: StoreKey) -> Result<()> {
        self.entries().remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        store.write(StoreKey::Users, json!(["a"])).unwrap();
        assert_eq!(store.read(StoreKey::Users).unwrap(), Some(json!(["a"])));
        store.remove(StoreKey::Users).unwrap();
        assert!(store.read(StoreKey::Users).unwrap().is_none());
    }
}
