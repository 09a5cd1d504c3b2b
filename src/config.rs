//! Notifier configuration.

use crate::core::Validate;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Largest accepted `capacity` hint.
pub const MAX_CAPACITY: usize = 1 << 16;

/// The order in which a notifier visits its listeners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyOrder {
    /// Most recently registered first.
    #[default]
    Reverse,
    /// Registration order.
    Forward,
}

/// Settings for a [`Notifier`](crate::core::Notifier) or
/// [`ListenerList`](crate::core::ListenerList).
///
/// Every field has a default, so an empty file is a valid configuration.
///
/// ```yaml
/// label: toolbar
/// order: forward
/// capacity: 16
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// Name used in log output.
    pub label: Option<String>,
    /// Notification order.
    pub order: NotifyOrder,
    /// Number of listener slots to reserve up front, at most
    /// [`MAX_CAPACITY`].
    pub capacity: usize,
}

impl Validate for NotifierConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if let Some(label) = &self.label {
            if label.trim().is_empty() {
                errors.push(ValidationError::invalid_field("label", "must not be blank"));
            } else if label.chars().any(char::is_control) {
                errors.push(ValidationError::invalid_field(
                    "label",
                    "must not contain control characters",
                ));
            }
        }

        if self.capacity > MAX_CAPACITY {
            errors.push(ValidationError::invalid_field(
                "capacity",
                format!("must not exceed {}", MAX_CAPACITY),
            ));
        }

        match ValidationError::from_errors(errors) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
