//! # listener-registry
//!
//! A single-threaded listener registry with idempotent registration, scoped
//! deregistration and synchronous fan-out.
//!
//! ## Overview
//!
//! `listener-registry` provides:
//! - A [`Listener`](core::Listener) trait with one callback, `on_notify(source)`
//! - [`ListenerList`](core::ListenerList), an ordered registry of weak
//!   listener handles that can be embedded in any source type
//! - [`Notifier`](core::Notifier), a ready-made source that passes itself to
//!   its listeners
//! - [`Registration`](core::Registration) guards that deregister on drop
//! - Layered configuration (files, then environment variables) for labels
//!   and notification order
//!
//! ## Quick Start
//!
//! ```rust
//! use listener_registry::prelude::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! struct SaveIndicator {
//!     saves: Cell<usize>,
//! }
//!
//! impl Listener for SaveIndicator {
//!     fn on_notify(&self, _source: &Notifier) {
//!         self.saves.set(self.saves.get() + 1);
//!     }
//! }
//!
//! let on_save = Notifier::new();
//! let indicator = Rc::new(SaveIndicator { saves: Cell::new(0) });
//!
//! // Registered only while the guard lives.
//! let registration = on_save.subscribe(&indicator);
//! on_save.notify();
//! drop(registration);
//! on_save.notify();
//!
//! assert_eq!(indicator.saves.get(), 1);
//! ```
//!
//! ## Semantics
//!
//! - Adding a listener that is already registered does nothing.
//! - Removing a listener that is not registered does nothing.
//! - `notify` calls every listener exactly once, most recently registered
//!   first unless [`NotifyOrder::Forward`](config::NotifyOrder) is configured.
//! - Listeners are never owned. One that is dropped while still registered
//!   is skipped and pruned.
//!
//! ## Threading
//!
//! Nothing here is `Send` or `Sync`. Registries are meant to live on one
//! thread, typically an event loop.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod sources;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::config::{NotifierConfig, NotifyOrder};
    pub use crate::core::{
        Listener, ListenerHandle, ListenerList, Notifier, NotifierBuilder, Registration, Validate,
    };
    pub use crate::error::{RegistryError, Result, ValidationError};
}
