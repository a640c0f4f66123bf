//! Error types for kv-double-core.
//!
//! - [`KvError`]: failures surfaced by a store, real or doubled. Programmed
//!   failures queued on a double use the same type so they reach the caller
//!   exactly as a real store failure would.
//! - [`ConfigError`]: configuration validation failures.
//! - [`SlotError`]: misuse of install/restore tokens.
//!
//! Library code never panics on these paths; everything is returned through
//! `Result` and propagated with `?`.

mod kv_error;
mod sub_errors;

#[cfg(test)]
mod tests;

pub use kv_error::{KvError, KvResult};
pub use sub_errors::{ConfigError, SlotError};
