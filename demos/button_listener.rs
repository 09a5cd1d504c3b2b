//! Example: a button and the widgets that listen to it.
//!
//! This example shows how to:
//! - Embed a `ListenerList` in your own source type
//! - Register a listener while it is being constructed
//! - Deregister automatically when a listener is dropped
//! - Watch registry activity through `tracing`
//!
//! Run with: RUST_LOG=listener_registry=debug cargo run --example button_listener

use listener_registry::prelude::*;
use std::cell::Cell;
use std::rc::{Rc, Weak};
use tracing_subscriber::EnvFilter;

struct Button {
    caption: String,
    listeners: ListenerList<Button>,
}

impl Button {
    fn new(caption: &str) -> Result<Self> {
        let listeners = NotifierBuilder::new()
            .with_label(format!("button:{}", caption))
            .build_list()?;
        Ok(Self {
            caption: caption.to_string(),
            listeners,
        })
    }

    fn click(&self) {
        println!("[{}] clicked", self.caption);
        let delivered = self.listeners.notify(self);
        println!("[{}] {} listener(s) notified\n", self.caption, delivered);
    }
}

/// Owns a button and reacts to its clicks for as long as it exists.
struct Widget {
    name: &'static str,
    button: Button,
    clicks: Cell<u32>,
    _registration: Registration<Button>,
}

impl Widget {
    fn new(name: &'static str) -> Result<Rc<Self>> {
        let button = Button::new(name)?;
        Ok(Rc::new_cyclic(|me: &Weak<Widget>| {
            let handle: ListenerHandle<Button> = me.clone();
            let registration = button.listeners.subscribe_weak(handle);
            Widget {
                name,
                button,
                clicks: Cell::new(0),
                _registration: registration,
            }
        }))
    }
}

impl Listener<Button> for Widget {
    fn on_notify(&self, source: &Button) {
        self.clicks.set(self.clicks.get() + 1);
        println!(
            "  {} saw '{}' (click #{})",
            self.name,
            source.caption,
            self.clicks.get()
        );
    }
}

/// Listens to a button it does not own.
struct StatusBar {
    registration: Cell<Option<Registration<Button>>>,
}

impl Listener<Button> for StatusBar {
    fn on_notify(&self, source: &Button) {
        println!("  status bar: last action was '{}'", source.caption);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Button/Listener Example ===\n");

    let widget = Widget::new("save")?;
    widget.button.click();

    let status_bar = Rc::new(StatusBar {
        registration: Cell::new(None),
    });
    status_bar
        .registration
        .set(Some(widget.button.listeners.subscribe(&status_bar)));

    // Most recently registered listeners hear about it first.
    widget.button.click();

    println!("Detaching the status bar...\n");
    drop(status_bar.registration.take());
    widget.button.click();

    println!("Dropping a listener without detaching it...\n");
    let orphan = Rc::new(StatusBar {
        registration: Cell::new(None),
    });
    widget.button.listeners.add(&orphan);
    drop(orphan);
    widget.button.click();

    println!("Widget '{}' saw {} click(s)", widget.name, widget.clicks.get());
    Ok(())
}
