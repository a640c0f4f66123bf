//! Stub implementations of the store contract.
//!
//! # WARNING: TEST ONLY - DO NOT USE IN PRODUCTION
//!
//! - [`InMemoryKv`]: a small, real, non-persistent store. It stands in for the
//!   original store when a test installs a double and restores it afterwards.

mod in_memory_kv;

pub use in_memory_kv::InMemoryKv;
