//! A self-contained notification source.

use crate::config::{NotifierConfig, NotifyOrder};
use crate::core::{Listener, ListenerHandle, ListenerList, NotifierBuilder, Registration};
use std::rc::Rc;

/// A notification source that owns its listener registry.
///
/// Listeners receive the `Notifier` itself when [`notify`](Self::notify) is
/// called, which lets one listener tell apart several notifiers it is
/// registered with.
///
/// # Examples
///
/// ```rust
/// use listener_registry::prelude::*;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let log = Rc::new(RefCell::new(Vec::new()));
///
/// let notifier = Notifier::new();
/// let listeners: Vec<_> = ["a", "b", "c"]
///     .into_iter()
///     .map(|name| {
///         let log = Rc::clone(&log);
///         Rc::new(move |_: &Notifier| log.borrow_mut().push(name))
///     })
///     .collect();
/// for listener in &listeners {
///     notifier.add_listener(listener);
/// }
///
/// notifier.notify();
/// assert_eq!(*log.borrow(), vec!["c", "b", "a"]);
/// ```
#[derive(Debug)]
pub struct Notifier {
    listeners: ListenerList<Notifier>,
}

impl Notifier {
    /// Create a notifier with the default configuration.
    pub fn new() -> Self {
        Self {
            listeners: ListenerList::new(),
        }
    }

    /// Create a notifier from an already validated configuration.
    pub fn from_config(config: &NotifierConfig) -> Self {
        Self {
            listeners: ListenerList::from_config(config),
        }
    }

    /// Create a builder that loads configuration from files and the
    /// environment.
    pub fn builder() -> NotifierBuilder {
        NotifierBuilder::new()
    }

    /// The configured label, if any.
    pub fn label(&self) -> Option<String> {
        self.listeners.label()
    }

    /// The order in which listeners are notified.
    pub fn order(&self) -> NotifyOrder {
        self.listeners.order()
    }

    /// Register a listener. Adding one that is already present does nothing.
    pub fn add_listener<L>(&self, listener: &Rc<L>) -> bool
    where
        L: Listener<Notifier> + 'static,
    {
        self.listeners.add(listener)
    }

    /// Register a listener handle, typically from inside `Rc::new_cyclic`.
    pub fn add_listener_weak(&self, listener: ListenerHandle<Notifier>) -> bool {
        self.listeners.add_weak(listener)
    }

    /// Deregister a listener. Removing one that is absent does nothing.
    pub fn remove_listener<L>(&self, listener: &Rc<L>) -> bool
    where
        L: Listener<Notifier> + 'static,
    {
        self.listeners.remove(listener)
    }

    /// Deregister a listener handle.
    pub fn remove_listener_weak(&self, listener: &ListenerHandle<Notifier>) -> bool {
        self.listeners.remove_weak(listener)
    }

    /// Register a listener for as long as the returned guard lives.
    #[must_use = "dropping the registration immediately deregisters the listener"]
    pub fn subscribe<L>(&self, listener: &Rc<L>) -> Registration<Notifier>
    where
        L: Listener<Notifier> + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Whether the listener is registered with this notifier.
    pub fn has_listener<L>(&self, listener: &Rc<L>) -> bool
    where
        L: Listener<Notifier> + 'static,
    {
        self.listeners.contains(listener)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Notify every registered listener, passing this notifier as the source.
    ///
    /// Returns the number of listeners invoked.
    pub fn notify(&self) -> usize {
        self.listeners.notify(self)
    }

    /// The underlying registry.
    pub fn listeners(&self) -> &ListenerList<Notifier> {
        &self.listeners
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
