use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use squad_core::write_text_atomic;

use crate::contract::{validate_store_key, KeyValueStore};

pub const STORE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct StoreFile {
    schema_version: u32,
    entries: BTreeMap<String, String>,
}

/// Default on-disk location for the device store, relative to the working directory.
pub fn default_store_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()
        .context("failed to resolve current working directory")?
        .join(".squadlink")
        .join("device-store.json"))
}

/// Durable key-value store persisting a schema-versioned JSON file.
///
/// Every mutation rewrites the whole file through an atomic temp-file +
/// rename, so a reader never observes a partially written store. A missing
/// file reads as an empty store.
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read device store {}", self.path.display()))?;
        let parsed = serde_json::from_str::<StoreFile>(&raw)
            .with_context(|| format!("failed to parse device store {}", self.path.display()))?;
        if parsed.schema_version != STORE_SCHEMA_VERSION {
            bail!(
                "unsupported device store schema_version {} in {} (expected {})",
                parsed.schema_version,
                self.path.display(),
                STORE_SCHEMA_VERSION
            );
        }
        Ok(parsed.entries)
    }

    fn save_entries(&self, entries: BTreeMap<String, String>) -> Result<()> {
        let entry_count = entries.len();
        let payload = StoreFile {
            schema_version: STORE_SCHEMA_VERSION,
            entries,
        };
        let mut encoded =
            serde_json::to_string_pretty(&payload).context("failed to encode device store")?;
        encoded.push('\n');
        write_text_atomic(&self.path, &encoded)?;
        tracing::debug!(
            path = %self.path.display(),
            entries = entry_count,
            "persisted device store"
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        validate_store_key(key)?;
        Ok(self.load_entries()?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_store_key(key)?;
        let mut entries = self.load_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.save_entries(entries)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        validate_store_key(key)?;
        let mut entries = self.load_entries()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.save_entries(entries)
    }
}
