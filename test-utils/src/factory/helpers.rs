//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across factory modules, including ID
//! generation and convenience methods for building whole guide collections.

use serde_json::{Map, Value};

use crate::fixture;

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created record gets a unique identifier to
/// prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds an array payload of `count` default guides with unique IDs and titles.
///
/// # Returns
/// - `Value` - JSON array as served by the data source
pub fn guide_list(count: usize) -> Value {
    Value::Array((0..count).map(|_| unique_guide()).collect())
}

/// Builds an object payload of `count` default guides keyed by their ID.
///
/// # Returns
/// - `Value` - JSON object as served by the data source
pub fn guide_map(count: usize) -> Value {
    let mut map = Map::new();
    for _ in 0..count {
        let guide = unique_guide();
        let key = guide["id"].to_string();
        map.insert(key, guide);
    }
    Value::Object(map)
}

fn unique_guide() -> Value {
    let id = next_id() as i64;
    fixture::deck_guide::raw_builder()
        .id(id)
        .title(format!("Guide {id}"))
        .build()
}
