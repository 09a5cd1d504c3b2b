//! Builder for configured notifiers and listener lists.

use crate::config::{NotifierConfig, NotifyOrder};
use crate::core::{ConfigLoader, ListenerList, Notifier, Validate};
use crate::error::Result;
use crate::sources::{ConfigSource, EnvSource, FileSource};
use std::path::PathBuf;
use tracing::debug;

/// Builder for a [`Notifier`] or [`ListenerList`].
///
/// Configuration is merged from files (in the order they are added), any
/// custom sources, then environment variables. Settings made directly on
/// the builder override everything loaded. With no sources at all the
/// defaults are used.
///
/// # Examples
///
/// ```rust,no_run
/// use listener_registry::prelude::*;
///
/// # fn example() -> Result<()> {
/// let notifier = Notifier::builder()
///     .with_file("config/notifier.yaml")
///     .with_env_overrides("TOOLBAR", "__")
///     .with_label("toolbar")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct NotifierBuilder {
    file_paths: Vec<PathBuf>,
    env_prefix: Option<String>,
    env_separator: Option<String>,
    custom_sources: Vec<Box<dyn ConfigSource>>,
    label: Option<String>,
    order: Option<NotifyOrder>,
    capacity: Option<usize>,
}

impl NotifierBuilder {
    /// Create a builder with no sources and no overrides.
    pub fn new() -> Self {
        Self {
            file_paths: Vec::new(),
            env_prefix: None,
            env_separator: None,
            custom_sources: Vec::new(),
            label: None,
            order: None,
            capacity: None,
        }
    }

    /// Add a configuration file (`.yaml`, `.yml`, `.toml` or `.json`).
    ///
    /// Later files override earlier ones.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_paths.push(path.into());
        self
    }

    /// Read overrides from environment variables.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Prefix for environment variables (e.g., "TOOLBAR")
    /// * `separator` - Separator for nested keys (e.g., "__")
    pub fn with_env_overrides(mut self, prefix: &str, separator: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self.env_separator = Some(separator.to_string());
        self
    }

    /// Add a custom configuration source.
    pub fn with_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.custom_sources.push(Box::new(source));
        self
    }

    /// Set the label, overriding any loaded value.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the notification order, overriding any loaded value.
    pub fn with_order(mut self, order: NotifyOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the capacity hint, overriding any loaded value.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Load, merge and validate the configuration without building anything.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A configuration source cannot be read
    /// - The merged values do not deserialize
    /// - Validation fails
    pub fn build_config(self) -> Result<NotifierConfig> {
        let mut loader = ConfigLoader::new();

        for (index, path) in self.file_paths.iter().enumerate() {
            let priority = 100 + (index as i32 * 10);
            loader.add_source(Box::new(FileSource::new(path).with_priority(priority)));
        }

        for source in self.custom_sources {
            loader.add_source(source);
        }

        if let (Some(prefix), Some(separator)) = (self.env_prefix, self.env_separator) {
            loader.add_source(Box::new(EnvSource::new(prefix, separator)));
        }

        let mut config = if loader.is_empty() {
            NotifierConfig::default()
        } else {
            debug!(sources = ?loader.source_names(), "loading notifier configuration");
            loader.load()?
        };

        if let Some(label) = self.label {
            config.label = Some(label);
        }
        if let Some(order) = self.order {
            config.order = order;
        }
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }

        config.validate()?;
        debug!(
            label = ?config.label,
            order = ?config.order,
            capacity = config.capacity,
            "notifier configuration ready"
        );
        Ok(config)
    }

    /// Build a [`Notifier`].
    ///
    /// # Errors
    ///
    /// See [`build_config`](Self::build_config).
    pub fn build(self) -> Result<Notifier> {
        let config = self.build_config()?;
        Ok(Notifier::from_config(&config))
    }

    /// Build a bare [`ListenerList`] for a custom source type.
    ///
    /// # Errors
    ///
    /// See [`build_config`](Self::build_config).
    pub fn build_list<S: ?Sized + 'static>(self) -> Result<ListenerList<S>> {
        let config = self.build_config()?;
        Ok(ListenerList::from_config(&config))
    }
}

impl Default for NotifierBuilder {
    fn default() -> Self {
        Self::new()
    }
}
