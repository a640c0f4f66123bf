//! Configuration and slot errors.

use thiserror::Error;

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A field holds a value outside its allowed domain.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending field name
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The configuration document could not be parsed.
    #[error("Config parse error: {0}")]
    Parse(String),
}

// ============================================================================
// SLOT ERROR
// ============================================================================

/// Errors from [`crate::KvSlot::restore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// Token was issued by a different slot.
    #[error("Install token belongs to slot {token_slot}, not slot {slot}")]
    ForeignToken {
        /// Slot that issued the token
        token_slot: u64,
        /// Slot asked to restore
        slot: u64,
    },

    /// Installs must be restored innermost first.
    #[error("Out-of-order restore: token generation {token}, slot generation {current}")]
    OutOfOrder {
        /// Generation recorded in the token
        token: u64,
        /// Current slot generation
        current: u64,
    },
}
