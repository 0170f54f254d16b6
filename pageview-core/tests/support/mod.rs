#![allow(dead_code)]

use pageview_core::prelude::*;
use serde_json::json;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static TRACING: Once = Once::new();

/// Install a test subscriber once per test binary. `RUST_LOG` controls
/// verbosity; nothing is printed by default.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with(fmt::layer().with_test_writer())
            .try_init();
    });
}

pub fn people() -> Vec<Record> {
    vec![
        Record::new()
            .with("id", 1)
            .with("name", "Alice")
            .with("age", 30)
            .with("favoriteFood", "banana"),
        Record::new()
            .with("id", 2)
            .with("name", "Bob")
            .with("age", 25)
            .with("favoriteFood", "chocolate"),
        Record::new()
            .with("id", 3)
            .with("name", "Charlie")
            .with("age", 35)
            .with("favoriteFood", "apple"),
    ]
}

pub fn people_json() -> Vec<serde_json::Value> {
    vec![
        json!({ "id": 1, "name": "Alice", "age": 30, "favoriteFood": "banana" }),
        json!({ "id": 2, "name": "Bob", "age": 25, "favoriteFood": "chocolate" }),
        json!({ "id": 3, "name": "Charlie", "age": 35, "favoriteFood": "apple" }),
    ]
}

pub fn ids<T: FieldAccess>(items: &[T]) -> Vec<i64> {
    items
        .iter()
        .filter_map(|item| match item.field("id") {
            Some(ValueRef::Int(id)) => Some(id),
            _ => None,
        })
        .collect()
}
