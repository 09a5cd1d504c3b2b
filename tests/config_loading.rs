//! Integration tests for building notifiers from configuration sources.

#![allow(unsafe_code)] // For env var manipulation in tests

use listener_registry::prelude::*;
use listener_registry::config::MAX_CAPACITY;
use listener_registry::sources::{ConfigSource, FileSource};
use std::cell::Cell;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::rc::Rc;
use tempfile::TempDir;

#[test]
fn test_load_yaml_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notifier.yaml");
    fs::write(
        &path,
        r#"
label: toolbar
order: forward
capacity: 8
"#,
    )
    .unwrap();

    let config = Notifier::builder().with_file(&path).build_config().unwrap();
    assert_eq!(
        config,
        NotifierConfig {
            label: Some("toolbar".to_string()),
            order: NotifyOrder::Forward,
            capacity: 8,
        }
    );
}

#[test]
fn test_load_toml_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notifier.toml");
    fs::write(&path, "label = \"status-bar\"\norder = \"reverse\"\n").unwrap();

    let notifier = Notifier::builder().with_file(&path).build().unwrap();
    assert_eq!(notifier.label().as_deref(), Some("status-bar"));
    assert_eq!(notifier.order(), NotifyOrder::Reverse);
}

#[test]
fn test_load_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notifier.json");
    fs::write(&path, r#"{ "order": "forward" }"#).unwrap();

    let notifier = Notifier::builder().with_file(&path).build().unwrap();
    assert_eq!(notifier.order(), NotifyOrder::Forward);
    assert!(notifier.label().is_none());
}

#[test]
fn test_later_file_overrides_earlier() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("base.yaml");
    let local = temp_dir.path().join("local.yaml");
    fs::write(&base, "label: toolbar\norder: forward\n").unwrap();
    fs::write(&local, "order: reverse\n").unwrap();

    let config = Notifier::builder()
        .with_file(&base)
        .with_file(&local)
        .build_config()
        .unwrap();

    assert_eq!(config.label.as_deref(), Some("toolbar"));
    assert_eq!(config.order, NotifyOrder::Reverse);
}

#[test]
fn test_builder_settings_override_files() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notifier.yaml");
    fs::write(&path, "label: toolbar\norder: forward\n").unwrap();

    let notifier = Notifier::builder()
        .with_file(&path)
        .with_order(NotifyOrder::Reverse)
        .build()
        .unwrap();

    assert_eq!(notifier.label().as_deref(), Some("toolbar"));
    assert_eq!(notifier.order(), NotifyOrder::Reverse);
}

#[test]
fn test_custom_source_priority() {
    let temp_dir = TempDir::new().unwrap();
    let low = temp_dir.path().join("low.yaml");
    let high = temp_dir.path().join("high.yaml");
    fs::write(&low, "label: low\n").unwrap();
    fs::write(&high, "label: high\n").unwrap();

    let config = Notifier::builder()
        .with_source(FileSource::new(&high).with_priority(500))
        .with_file(&low)
        .build_config()
        .unwrap();

    assert_eq!(config.label.as_deref(), Some("high"));
}

#[test]
fn test_blank_label_in_file_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notifier.yaml");
    fs::write(&path, "label: \"  \"\n").unwrap();

    let result = Notifier::builder().with_file(&path).build();
    assert!(matches!(result, Err(RegistryError::ValidationError(_))));
}

#[test]
fn test_unknown_order_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notifier.yaml");
    fs::write(&path, "order: sideways\n").unwrap();

    let result = Notifier::builder().with_file(&path).build();
    assert!(matches!(result, Err(RegistryError::DeserializationError(_))));
}

#[test]
fn test_unsupported_extension_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notifier.ini");
    fs::write(&path, "order=forward\n").unwrap();

    let result = Notifier::builder().with_file(&path).build();
    assert!(matches!(result, Err(RegistryError::LoadError(_))));
}

#[test]
fn test_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notifier.yaml");
    fs::write(&path, "label: toolbar\norder: forward\n").unwrap();

    unsafe {
        env::set_var("LISTENER_REGISTRY_IT_ORDER", "reverse");
        env::set_var("LISTENER_REGISTRY_IT_CAPACITY", "16");
    }

    let result = Notifier::builder()
        .with_file(&path)
        .with_env_overrides("LISTENER_REGISTRY_IT", "__")
        .build_config();

    unsafe {
        env::remove_var("LISTENER_REGISTRY_IT_ORDER");
        env::remove_var("LISTENER_REGISTRY_IT_CAPACITY");
    }

    let config = result.unwrap();
    assert_eq!(config.label.as_deref(), Some("toolbar"));
    assert_eq!(config.order, NotifyOrder::Reverse);
    assert_eq!(config.capacity, 16);
}

#[test]
fn test_build_list_for_custom_source() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notifier.yaml");
    fs::write(&path, "label: slider\norder: forward\n").unwrap();

    let list = Notifier::builder()
        .with_file(&path)
        .build_list::<f32>()
        .unwrap();

    assert_eq!(list.label().as_deref(), Some("slider"));
    assert_eq!(list.order(), NotifyOrder::Forward);
}

#[test]
fn test_oversized_capacity_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notifier.yaml");
    fs::write(&path, "capacity: 9223372036854775807\n").unwrap();

    let result = Notifier::builder().with_file(&path).build();
    match result {
        Err(RegistryError::ValidationError(msg)) => assert!(msg.contains("capacity")),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("oversized capacity was accepted"),
    }
}

#[test]
fn test_capacity_at_limit_accepted() {
    let notifier = Notifier::builder().with_capacity(MAX_CAPACITY).build();
    assert!(notifier.is_ok());
}

#[test]
fn test_every_invalid_field_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notifier.yaml");
    fs::write(&path, "label: \"\"\ncapacity: 9223372036854775807\n").unwrap();

    let result = Notifier::builder().with_file(&path).build_config();
    match result {
        Err(RegistryError::ValidationError(msg)) => {
            assert!(msg.contains("Multiple validation errors"));
            assert!(msg.contains("label"));
            assert!(msg.contains("capacity"));
        }
        other => panic!("expected a validation error, got {:?}", other),
    }
}

/// Serves values from state shared with the caller.
struct SharedSource {
    order: Rc<Cell<&'static str>>,
}

impl ConfigSource for SharedSource {
    fn load(&self) -> listener_registry::error::Result<HashMap<String, config::Value>> {
        let mut values = HashMap::new();
        values.insert("order".to_string(), config::Value::from(self.order.get()));
        Ok(values)
    }

    fn name(&self) -> String {
        "shared".to_string()
    }
}

#[test]
fn test_custom_source_with_shared_state() {
    let order = Rc::new(Cell::new("forward"));

    let notifier = Notifier::builder()
        .with_source(SharedSource {
            order: Rc::clone(&order),
        })
        .build()
        .unwrap();
    assert_eq!(notifier.order(), NotifyOrder::Forward);

    order.set("reverse");
    let config = Notifier::builder()
        .with_source(SharedSource { order })
        .build_config()
        .unwrap();
    assert_eq!(config.order, NotifyOrder::Reverse);
}
