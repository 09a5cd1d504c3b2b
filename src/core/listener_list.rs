//! Ordered collection of weak listener handles with synchronous fan-out.

use crate::config::{MAX_CAPACITY, NotifierConfig, NotifyOrder};
use crate::core::{Listener, Registration};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

/// A non-owning handle to a listener.
pub type ListenerHandle<S> = Weak<dyn Listener<S>>;

/// Downgrade a concrete listener and erase its type.
fn handle_of<S, L>(listener: &Rc<L>) -> ListenerHandle<S>
where
    S: ?Sized + 'static,
    L: Listener<S> + 'static,
{
    let weak: Weak<L> = Rc::downgrade(listener);
    weak
}

/// Shared state behind a [`ListenerList`].
pub(crate) struct ListenerListInner<S: ?Sized> {
    listeners: Vec<ListenerHandle<S>>,
    order: NotifyOrder,
    label: Option<String>,
}

impl<S: ?Sized> ListenerListInner<S> {
    fn position(&self, handle: &ListenerHandle<S>) -> Option<usize> {
        self.listeners.iter().position(|h| Weak::ptr_eq(h, handle))
    }

    fn name(&self) -> &str {
        self.label.as_deref().unwrap_or("anonymous")
    }

    pub(crate) fn contains(&self, handle: &ListenerHandle<S>) -> bool {
        self.position(handle).is_some()
    }

    pub(crate) fn remove(&mut self, handle: &ListenerHandle<S>) -> bool {
        match self.position(handle) {
            Some(index) => {
                self.listeners.remove(index);
                debug!(
                    notifier = self.name(),
                    listeners = self.listeners.len(),
                    "listener removed"
                );
                true
            }
            None => false,
        }
    }
}

/// An ordered registry of listeners for a source of type `S`.
///
/// The list never owns its listeners: it stores [`Weak`] handles, so a
/// listener that is dropped without deregistering is simply skipped (and
/// pruned) on the next [`notify`](Self::notify). Listener identity is the
/// allocation behind the `Rc`, so a listener is present at most once.
///
/// Clones share the same underlying collection.
///
/// # Threading
///
/// `ListenerList` is built on `Rc` and `RefCell` and is neither `Send` nor
/// `Sync`. It is meant to be touched from one thread only, the way a UI
/// event loop owns its widgets.
///
/// # Examples
///
/// ```rust
/// use listener_registry::prelude::*;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// struct Recorder(&'static str, Rc<RefCell<Vec<&'static str>>>);
///
/// impl Listener<u32> for Recorder {
///     fn on_notify(&self, _source: &u32) {
///         self.1.borrow_mut().push(self.0);
///     }
/// }
///
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let a = Rc::new(Recorder("a", Rc::clone(&log)));
/// let b = Rc::new(Recorder("b", Rc::clone(&log)));
///
/// let list = ListenerList::<u32>::new();
/// list.add(&a);
/// list.add(&b);
/// list.notify(&7);
///
/// // Most recently added listeners hear about it first.
/// assert_eq!(*log.borrow(), vec!["b", "a"]);
/// ```
pub struct ListenerList<S: ?Sized> {
    inner: Rc<RefCell<ListenerListInner<S>>>,
}

impl<S: ?Sized + 'static> ListenerList<S> {
    /// Create an empty list that notifies in reverse registration order.
    pub fn new() -> Self {
        Self::with_order(NotifyOrder::default())
    }

    /// Create an empty list with the given notification order.
    pub fn with_order(order: NotifyOrder) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ListenerListInner {
                listeners: Vec::new(),
                order,
                label: None,
            })),
        }
    }

    /// Create an empty list from a notifier configuration.
    ///
    /// The configuration is not validated here; use
    /// [`NotifierBuilder`](crate::core::NotifierBuilder) for that. The
    /// capacity hint is clamped to [`MAX_CAPACITY`].
    pub fn from_config(config: &NotifierConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ListenerListInner {
                listeners: Vec::with_capacity(config.capacity.min(MAX_CAPACITY)),
                order: config.order,
                label: config.label.clone(),
            })),
        }
    }

    /// The order in which [`notify`](Self::notify) visits listeners.
    pub fn order(&self) -> NotifyOrder {
        self.inner.borrow().order
    }

    /// Change the notification order. Takes effect on the next `notify`.
    pub fn set_order(&self, order: NotifyOrder) {
        self.inner.borrow_mut().order = order;
    }

    /// The label used in log output, if one was configured.
    pub fn label(&self) -> Option<String> {
        self.inner.borrow().label.clone()
    }

    /// Register a listener.
    ///
    /// Returns `true` if the listener was inserted and `false` if it was
    /// already present, in which case nothing changes.
    pub fn add<L>(&self, listener: &Rc<L>) -> bool
    where
        L: Listener<S> + 'static,
    {
        let handle = handle_of::<S, L>(listener);
        self.add_weak(handle)
    }

    /// Register an already-downgraded listener handle.
    ///
    /// This is the form to use while the listener is still being built with
    /// [`Rc::new_cyclic`]. A handle whose listener is not alive yet must not
    /// be notified before construction finishes, or it is pruned as dead.
    pub fn add_weak(&self, listener: ListenerHandle<S>) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.contains(&listener) {
            trace!(notifier = inner.name(), "listener already registered");
            return false;
        }
        inner.listeners.push(listener);
        debug!(
            notifier = inner.name(),
            listeners = inner.listeners.len(),
            "listener added"
        );
        true
    }

    /// Deregister a listener.
    ///
    /// Returns `true` if it was present. Removing an unknown listener is a
    /// no-op.
    pub fn remove<L>(&self, listener: &Rc<L>) -> bool
    where
        L: Listener<S> + 'static,
    {
        let handle = handle_of::<S, L>(listener);
        self.remove_weak(&handle)
    }

    /// Deregister a listener by handle.
    pub fn remove_weak(&self, listener: &ListenerHandle<S>) -> bool {
        self.inner.borrow_mut().remove(listener)
    }

    /// Register a listener and return a guard that deregisters it on drop.
    ///
    /// If the listener was already registered, the guard takes over that
    /// registration: dropping it removes the existing entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listener_registry::prelude::*;
    /// use std::rc::Rc;
    ///
    /// let list = ListenerList::<u32>::new();
    /// let listener = Rc::new(|_: &u32| {});
    ///
    /// let registration = list.subscribe(&listener);
    /// assert_eq!(list.len(), 1);
    ///
    /// drop(registration);
    /// assert!(list.is_empty());
    /// ```
    #[must_use = "dropping the registration immediately deregisters the listener"]
    pub fn subscribe<L>(&self, listener: &Rc<L>) -> Registration<S>
    where
        L: Listener<S> + 'static,
    {
        let handle = handle_of::<S, L>(listener);
        self.subscribe_weak(handle)
    }

    /// Register a listener handle and return a guard that deregisters it on
    /// drop.
    #[must_use = "dropping the registration immediately deregisters the listener"]
    pub fn subscribe_weak(&self, listener: ListenerHandle<S>) -> Registration<S> {
        self.add_weak(listener.clone());
        Registration::new(Rc::downgrade(&self.inner), listener)
    }

    /// Whether the listener is currently registered.
    pub fn contains<L>(&self, listener: &Rc<L>) -> bool
    where
        L: Listener<S> + 'static,
    {
        let handle = handle_of::<S, L>(listener);
        self.contains_weak(&handle)
    }

    /// Whether the listener handle is currently registered.
    pub fn contains_weak(&self, listener: &ListenerHandle<S>) -> bool {
        self.inner.borrow().contains(listener)
    }

    /// Number of registered handles, including any dead ones not yet pruned.
    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Whether no handles are registered.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().listeners.is_empty()
    }

    /// Remove every handle.
    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.listeners.clear();
        debug!(notifier = inner.name(), "listeners cleared");
    }

    /// Drop handles whose listener no longer exists. Returns how many were
    /// removed.
    pub fn prune(&self) -> usize {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|handle| handle.strong_count() > 0);
        let pruned = before - inner.listeners.len();
        if pruned > 0 {
            debug!(
                notifier = inner.name(),
                pruned,
                listeners = inner.listeners.len(),
                "pruned dead listeners"
            );
        }
        pruned
    }

    /// Call every registered listener once with `source`.
    ///
    /// Listeners are visited in [`order`](Self::order), which is reverse
    /// registration order unless configured otherwise. The call is
    /// synchronous and returns the number of listeners invoked.
    ///
    /// Listeners may add or remove listeners (themselves included) from
    /// inside the callback:
    /// - a listener added during fan-out is first called on the next
    ///   `notify`;
    /// - a listener removed during fan-out is not called for the rest of
    ///   this one.
    ///
    /// Handles whose listener has been dropped are skipped and pruned
    /// afterwards.
    pub fn notify(&self, source: &S) -> usize {
        let snapshot = {
            let inner = self.inner.borrow();
            let mut snapshot = inner.listeners.clone();
            if inner.order == NotifyOrder::Reverse {
                snapshot.reverse();
            }
            snapshot
        };

        let mut delivered = 0;
        let mut dead = 0;
        for handle in snapshot {
            if !self.contains_weak(&handle) {
                continue;
            }
            match handle.upgrade() {
                Some(listener) => {
                    listener.on_notify(source);
                    delivered += 1;
                }
                None => dead += 1,
            }
        }

        {
            let inner = self.inner.borrow();
            trace!(notifier = inner.name(), delivered, dead, "notified listeners");
        }

        if dead > 0 {
            self.prune();
        }
        delivered
    }
}

impl<S: ?Sized + 'static> Default for ListenerList<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> Clone for ListenerList<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: ?Sized> fmt::Debug for ListenerList<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(inner) => f
                .debug_struct("ListenerList")
                .field("label", &inner.label)
                .field("order", &inner.order)
                .field("listeners", &inner.listeners.len())
                .finish(),
            Err(_) => f.debug_struct("ListenerList").finish_non_exhaustive(),
        }
    }
}
