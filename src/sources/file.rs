//! File-based configuration source.

use super::ConfigSource;
use crate::error::{RegistryError, Result};
use config::File;
use std::collections::HashMap;
use std::path::PathBuf;

/// Extensions accepted with the formats compiled in.
const SUPPORTED_EXTENSIONS: &[&str] = &[
    #[cfg(feature = "yaml")]
    "yaml",
    #[cfg(feature = "yaml")]
    "yml",
    #[cfg(feature = "toml")]
    "toml",
    #[cfg(feature = "json")]
    "json",
];

/// Notifier configuration read from a YAML, TOML or JSON file.
///
/// The format is picked from the file extension.
///
/// # Examples
///
/// ```rust,no_run
/// use listener_registry::sources::FileSource;
///
/// let source = FileSource::new("config/notifier.yaml");
/// ```
pub struct FileSource {
    path: PathBuf,
    priority: i32,
}

impl FileSource {
    /// Create a file source with the default priority (100).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            priority: 100,
        }
    }

    /// Set the priority for this source.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    fn validate_extension(&self) -> Result<()> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                RegistryError::LoadError(format!(
                    "Unable to determine file format for: {}",
                    self.path.display()
                ))
            })?;

        if SUPPORTED_EXTENSIONS.contains(&extension) {
            Ok(())
        } else {
            Err(RegistryError::LoadError(format!(
                "Unsupported file extension: {}. Supported: {}",
                extension,
                SUPPORTED_EXTENSIONS.join(", ")
            )))
        }
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<HashMap<String, config::Value>> {
        self.validate_extension()?;

        if !self.path.exists() {
            return Err(RegistryError::LoadError(format!(
                "Configuration file not found: {}",
                self.path.display()
            )));
        }

        let parsed = config::Config::builder()
            .add_source(File::from(self.path.clone()).required(true))
            .build()
            .map_err(|e| RegistryError::LoadError(format!("Failed to load file: {}", e)))?;

        parsed
            .try_deserialize::<HashMap<String, config::Value>>()
            .map_err(|e| RegistryError::DeserializationError(format!("Failed to parse file: {}", e)))
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
