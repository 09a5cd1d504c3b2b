//! Scoped listener registration.

use crate::core::listener_list::{ListenerHandle, ListenerListInner};
use std::cell::RefCell;
use std::fmt;
use std::rc::Weak;

/// Guard for a listener registration.
///
/// When the guard is dropped the listener is removed from the list it was
/// registered with. If that list no longer exists, dropping is a no-op.
///
/// A listener that must stay registered for exactly its own lifetime can
/// store its registration as a field. The field is dropped together with the
/// listener, which deregisters it.
///
/// # Examples
///
/// ```rust
/// use listener_registry::prelude::*;
/// use std::rc::Rc;
///
/// let notifier = Notifier::new();
/// let listener = Rc::new(|_: &Notifier| println!("notified"));
///
/// let registration = notifier.subscribe(&listener);
/// assert!(registration.is_active());
///
/// registration.release();
/// assert_eq!(notifier.listener_count(), 0);
/// ```
#[must_use = "dropping the registration immediately deregisters the listener"]
pub struct Registration<S: ?Sized + 'static> {
    list: Weak<RefCell<ListenerListInner<S>>>,
    listener: ListenerHandle<S>,
}

impl<S: ?Sized + 'static> Registration<S> {
    pub(crate) fn new(list: Weak<RefCell<ListenerListInner<S>>>, listener: ListenerHandle<S>) -> Self {
        Self { list, listener }
    }

    /// Whether the listener is still present in a live list.
    ///
    /// Returns `false` once the listener has been removed by any means or the
    /// list has been dropped.
    pub fn is_active(&self) -> bool {
        match self.list.upgrade() {
            Some(list) => {
                let inner = list.borrow();
                inner.contains(&self.listener)
            }
            None => false,
        }
    }

    /// Deregister now instead of waiting for the guard to go out of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl<S: ?Sized + 'static> Drop for Registration<S> {
    fn drop(&mut self) {
        let Some(list) = self.list.upgrade() else {
            return;
        };
        match list.try_borrow_mut() {
            Ok(mut inner) => {
                inner.remove(&self.listener);
            }
            // Removal is skipped; the listener stays registered until it is
            // dropped and pruned, or removed explicitly.
            Err(_) => tracing::debug!("listener list busy, registration not removed"),
        }
    }
}

impl<S: ?Sized + 'static> fmt::Debug for Registration<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("active", &self.is_active())
            .finish()
    }
}
