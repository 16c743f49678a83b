use std::collections::BTreeMap;

use anyhow::Result;
use tokio::sync::Mutex;

use crate::contract::{validate_store_key, KeyValueStore};

/// In-memory key-value store for tests and ephemeral runs.
///
/// Matches the durability contract of the file-backed store for the lifetime
/// of the process only.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a value directly, bypassing key validation. Test-setup helper.
    pub async fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        validate_store_key(key)?;
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_store_key(key)?;
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        validate_store_key(key)?;
        self.entries.lock().await.remove(key);
        Ok(())
    }
}
