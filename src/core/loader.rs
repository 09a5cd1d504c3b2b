//! Layered loading of notifier configuration.

use crate::config::NotifierConfig;
use crate::error::{RegistryError, Result};
use crate::sources::ConfigSource;
use tracing::debug;

/// Merges configuration sources into a [`NotifierConfig`].
///
/// Sources are applied lowest priority first, so higher priority sources
/// override individual keys. Keys no source sets keep their defaults.
pub(crate) struct ConfigLoader {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigLoader {
    pub(crate) fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    pub(crate) fn add_source(&mut self, source: Box<dyn ConfigSource>) {
        self.sources.push(source);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    fn sorted_sources(&self) -> Vec<&dyn ConfigSource> {
        let mut sorted: Vec<&dyn ConfigSource> = self.sources.iter().map(|s| s.as_ref()).collect();
        // Stable sort keeps insertion order between equal priorities.
        sorted.sort_by_key(|s| s.priority());
        sorted
    }

    /// Load and merge every source.
    ///
    /// # Errors
    ///
    /// Returns an error if a source fails to load, values cannot be merged,
    /// or the merged result does not deserialize into a `NotifierConfig`.
    pub(crate) fn load(&self) -> Result<NotifierConfig> {
        let mut builder = config::Config::builder();

        for source in self.sorted_sources() {
            let values = source.load().map_err(|e| {
                RegistryError::LoadError(format!("Failed to load source '{}': {}", source.name(), e))
            })?;
            debug!(source = %source.name(), keys = values.len(), "loaded configuration source");

            for (key, value) in values {
                builder = builder.set_override(&key, value).map_err(|e| {
                    RegistryError::LoadError(format!(
                        "Failed to merge source '{}': {}",
                        source.name(),
                        e
                    ))
                })?;
            }
        }

        let merged = builder
            .build()
            .map_err(|e| RegistryError::LoadError(format!("Failed to build configuration: {}", e)))?;

        merged.try_deserialize::<NotifierConfig>().map_err(|e| {
            RegistryError::DeserializationError(format!(
                "Failed to deserialize notifier configuration: {}",
                e
            ))
        })
    }

    /// Source names in the order they are applied.
    pub(crate) fn source_names(&self) -> Vec<String> {
        self.sorted_sources().iter().map(|s| s.name()).collect()
    }
}
