//! Shared helpers for the mock engine integration tests.

#![allow(dead_code)]

use kv_double_core::{Entry, Key, KvValue, Versionstamp};

/// Route engine logs to the test harness. `RUST_LOG` overrides the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with_test_writer()
        .try_init();
}

pub fn key(parts: &[&str]) -> Key {
    parts.iter().copied().collect()
}

/// Present entry with the default versionstamp.
pub fn entry(parts: &[&str], value: KvValue) -> Entry {
    Entry::new(key(parts), value, Versionstamp::default())
}
