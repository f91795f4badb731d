//! Environment variable sources.
//!
//! Profile resolution reads its inputs through [`EnvSource`] so the same code
//! runs against the process environment or an in-memory map.

use std::collections::HashMap;
use std::env;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read-only view of environment variables.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EnvSource: Send + Sync {
    /// Value of `key`, or `None` when it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the running process.
///
/// A value that is not valid UTF-8 is kept with the invalid bytes replaced
/// by U+FFFD rather than dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        let raw = env::var_os(key)?;
        match raw.into_string() {
            Ok(value) => Some(value),
            Err(raw) => {
                tracing::warn!(
                    variable = key,
                    "Environment variable is not valid UTF-8, replacing invalid bytes"
                );
                Some(raw.to_string_lossy().into_owned())
            }
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
