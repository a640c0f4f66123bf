//! kv-double Core Library
//!
//! Provides the key-value store contract that test doubles and real stores
//! share: the value model, the `KvStore` async trait, the list iterator, the
//! swappable store slot used to install and restore doubles, plus error and
//! configuration types.
//!
//! # Architecture
//!
//! This crate defines:
//! - Value model (`Key`, `KeyPart`, `Entry`, `CommitResult`, `Versionstamp`)
//! - Call options (`ReadOptions`, `ListSelector`, `ListOptions`, `EnqueueOptions`)
//! - Core trait (`KvStore`) and queue handler references (`QueueHandler`)
//! - Store slot (`KvSlot`) with explicit install/restore tokens
//! - Error types and result aliases
//! - Configuration for the mock engine (`MockConfig`)
//! - An in-memory reference store (`stubs::InMemoryKv`)
//!
//! # Example
//!
//! ```
//! use kv_double_core::types::{Key, ListSelector};
//!
//! let selector = ListSelector::prefix(Key::from(["users"]));
//! assert_eq!(selector.field_count(), 1);
//! assert_eq!(Key::from(["users", "ada"]).to_string(), r#"["users", "ada"]"#);
//! ```

pub mod config;
pub mod error;
pub mod list;
pub mod slot;
pub mod stubs;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::{AbsentOptionsPolicy, MockConfig};
pub use error::{ConfigError, KvError, KvResult, SlotError};
pub use list::KvListIterator;
pub use slot::{InstallToken, KvSlot, RestoreError};
pub use traits::{KvStore, QueueHandler};
pub use types::{
    CommitResult, Consistency, EnqueueOptions, Entry, Key, KeyPart, KvValue, ListOptions,
    ListSelector, ReadOptions, Versionstamp,
};
