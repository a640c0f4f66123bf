//! Core trait definitions.
//!
//! - [`KvStore`]: the fixed operation set every store and every double exposes
//! - [`QueueHandler`]: reference to a queue listener registered via `listen_queue`

mod kv_store;

pub use kv_store::{KvStore, QueueHandler};
