//! Listener registry types.

mod builder;
mod listener;
mod listener_list;
mod loader;
mod notifier;
mod registration;
mod validation;

pub use builder::NotifierBuilder;
pub use listener::Listener;
pub use listener_list::{ListenerHandle, ListenerList};
pub(crate) use loader::ConfigLoader;
pub use notifier::Notifier;
pub use registration::Registration;
pub use validation::Validate;
