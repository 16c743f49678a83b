use anyhow::{bail, Result};

#[async_trait::async_trait]
/// Trait contract for durable key-value stores backing device-local state.
///
/// Implementations serialize concurrent access to the same key; callers get
/// no ordering guarantee beyond "a `set` that returned `Ok` is visible to
/// every subsequent `get` in the same process."
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Removes `key`. Deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Validates a store key: non-empty ASCII without whitespace or control characters.
pub fn validate_store_key(key: &str) -> Result<()> {
    if key.is_empty() {
        bail!("store key must not be empty");
    }
    if !key.chars().all(|ch| ch.is_ascii_graphic()) {
        bail!(
            "store key '{}' must contain only printable ASCII without spaces",
            key
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_store_key;

    #[test]
    fn unit_validate_store_key_accepts_and_rejects_expected_inputs() {
        assert!(validate_store_key("squadlink_onboarding_completed").is_ok());
        assert!(validate_store_key("a-b.c_1").is_ok());
        assert!(validate_store_key("").is_err());
        assert!(validate_store_key("has space").is_err());
        assert!(validate_store_key("tab\tkey").is_err());
    }
}
