//! Environment variable configuration source.

use super::ConfigSource;
use crate::error::{RegistryError, Result};
use config::Environment;
use std::collections::HashMap;

/// Notifier configuration read from prefixed environment variables.
///
/// With prefix `TOOLBAR` and separator `__`, `TOOLBAR_ORDER=forward` sets
/// `order` and `TOOLBAR_LABEL=main` sets `label`.
///
/// # Examples
///
/// ```rust
/// use listener_registry::sources::EnvSource;
///
/// let source = EnvSource::new("TOOLBAR", "__");
/// ```
pub struct EnvSource {
    prefix: String,
    separator: String,
    priority: i32,
}

impl EnvSource {
    /// Create an environment source with the default priority (300).
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
            priority: 300,
        }
    }

    /// Set the priority for this source.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl ConfigSource for EnvSource {
    fn load(&self) -> Result<HashMap<String, config::Value>> {
        let env_source = Environment::with_prefix(&self.prefix)
            .prefix_separator("_")
            .separator(&self.separator)
            .try_parsing(true);

        let parsed = config::Config::builder()
            .add_source(env_source)
            .build()
            .map_err(|e| {
                RegistryError::LoadError(format!("Failed to load environment variables: {}", e))
            })?;

        parsed
            .try_deserialize::<HashMap<String, config::Value>>()
            .map_err(|e| {
                RegistryError::DeserializationError(format!(
                    "Failed to parse environment variables: {}",
                    e
                ))
            })
    }

    fn name(&self) -> String {
        format!("env:{}*", self.prefix)
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
