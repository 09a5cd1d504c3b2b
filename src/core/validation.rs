//! Configuration validation support.

use crate::error::ValidationError;

/// Trait for configuration validation.
///
/// [`NotifierBuilder`](crate::core::NotifierBuilder) runs this on the loaded
/// configuration before constructing anything.
///
/// # Examples
///
/// ```rust
/// use listener_registry::core::Validate;
/// use listener_registry::error::ValidationError;
///
/// struct Limits {
///     max_listeners: usize,
/// }
///
/// impl Validate for Limits {
///     fn validate(&self) -> Result<(), ValidationError> {
///         if self.max_listeners == 0 {
///             return Err(ValidationError::invalid_field(
///                 "max_listeners",
///                 "must be greater than 0",
///             ));
///         }
///         Ok(())
///     }
/// }
///
/// assert!(Limits { max_listeners: 0 }.validate().is_err());
/// ```
pub trait Validate {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Should return a `ValidationError` describing what validation failed.
    fn validate(&self) -> Result<(), ValidationError>;
}
