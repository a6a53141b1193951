//! Target stores for parsed variables.
//!
//! The merge step only talks to the [`EnvStore`] trait. [`ProcessEnv`] backs
//! it with the real process environment; [`MemoryEnv`] keeps everything in a
//! map so merge behavior can be exercised without touching process state.

pub mod merge;

use std::collections::BTreeMap;

use crate::error::{Error, Result};

pub use merge::{merge, MergeReport};

pub trait EnvStore {
    /// Whether `key` is defined at all. An empty value still counts.
    fn contains(&self, key: &str) -> bool;

    fn get(&self, key: &str) -> Option<String>;

    /// Check that `set(key, value)` would succeed.
    fn validate(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn set(&mut self, key: &str, value: &str);
}

/// The process-wide environment.
///
/// No locking is applied; callers that load from several threads must
/// serialize access themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn contains(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }

    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn validate(&self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::InvalidEntry { key: key.to_string(), reason: "empty key" });
        }
        if key.contains(['=', '\0']) {
            return Err(Error::InvalidEntry {
                key: key.to_string(),
                reason: "key contains '=' or NUL",
            });
        }
        if value.contains('\0') {
            return Err(Error::InvalidEntry { key: key.to_string(), reason: "value contains NUL" });
        }
        Ok(())
    }

    fn set(&mut self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }
}

/// An in-memory store.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self { vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl EnvStore for MemoryEnv {
    fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_env_presence_not_truthiness() {
        let env: MemoryEnv = [("EMPTY", "")].into_iter().collect();
        assert!(env.contains("EMPTY"));
        assert_eq!(env.get("EMPTY").as_deref(), Some(""));
        assert!(!env.contains("MISSING"));
    }

    #[test]
    fn test_process_env_rejects_nul_value() {
        let result = ProcessEnv.validate("ENVLOAD_TEST_NUL", "a\0b");
        assert!(matches!(result, Err(Error::InvalidEntry { .. })));
    }

    #[test]
    fn test_process_env_round_trip() {
        let key = "ENVLOAD_TEST_PROCESS_ROUND_TRIP";
        let mut env = ProcessEnv;
        assert!(!env.contains(key));
        env.set(key, "value");
        assert_eq!(env.get(key).as_deref(), Some("value"));
        std::env::remove_var(key);
    }
}
