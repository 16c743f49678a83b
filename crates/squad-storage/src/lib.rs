//! Durable key-value storage for Squadlink device state.
//!
//! Exposes the async [`KeyValueStore`] contract consumed by the onboarding
//! gate, a JSON-file-backed implementation for real installations, and an
//! in-memory implementation for tests and ephemeral runs.

pub mod contract;
pub mod file_store;
pub mod memory_store;

pub use contract::{validate_store_key, KeyValueStore};
pub use file_store::{default_store_path, FileKeyValueStore, STORE_SCHEMA_VERSION};
pub use memory_store::MemoryKeyValueStore;
