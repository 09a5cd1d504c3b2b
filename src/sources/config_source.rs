//! Configuration source trait.

use crate::error::Result;
use std::collections::HashMap;

/// A layer of notifier configuration.
///
/// Implement this to feed settings from somewhere other than files or the
/// environment, then hand it to
/// [`NotifierBuilder::with_source`](crate::core::NotifierBuilder::with_source).
pub trait ConfigSource {
    /// Load this layer as a flat key-value map.
    ///
    /// The returned map is merged with other sources according to priority.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded or parsed.
    fn load(&self) -> Result<HashMap<String, config::Value>>;

    /// Human-readable name for log output and error messages.
    fn name(&self) -> String;

    /// Priority of this source (higher takes precedence).
    ///
    /// Default priorities:
    /// - Environment variables: 300
    /// - Files: 100, 110, 120, ... in the order they were added
    fn priority(&self) -> i32 {
        100
    }
}
