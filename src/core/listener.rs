//! The listener capability.

use crate::core::Notifier;

/// Anything that wants to hear from a notification source.
///
/// `S` is the type of the source handed to the callback. It defaults to
/// [`Notifier`], so most listeners only write `impl Listener for MyType`.
/// Sources that embed a [`ListenerList`](crate::core::ListenerList) directly
/// use their own type for `S`.
///
/// Closures taking `&S` are listeners as well.
///
/// # Examples
///
/// ```rust
/// use listener_registry::prelude::*;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// struct Counter(Cell<usize>);
///
/// impl Listener for Counter {
///     fn on_notify(&self, _source: &Notifier) {
///         self.0.set(self.0.get() + 1);
///     }
/// }
///
/// let notifier = Notifier::new();
/// let counter = Rc::new(Counter(Cell::new(0)));
/// notifier.add_listener(&counter);
/// notifier.notify();
/// assert_eq!(counter.0.get(), 1);
/// ```
pub trait Listener<S: ?Sized = Notifier> {
    /// Called once per notification with the source that fired it.
    fn on_notify(&self, source: &S);
}

impl<S, F> Listener<S> for F
where
    S: ?Sized,
    F: Fn(&S),
{
    fn on_notify(&self, source: &S) {
        self(source)
    }
}
