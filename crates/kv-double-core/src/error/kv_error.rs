//! Store-level error type.

use thiserror::Error;

/// Result alias for store operations.
pub type KvResult<T> = Result<T, KvError>;

/// Errors raised by a key-value store.
///
/// `Clone` is required: a failure queued as the last outcome of a stub is
/// replayed on every subsequent call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KvError {
    /// Backend failure (I/O, transport, quota).
    #[error("Backend error: {0}")]
    Backend(String),

    /// Key is empty or otherwise unusable for the operation.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// List cursor could not be encoded or decoded.
    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    /// List selector has an unsupported field combination.
    #[error("Invalid list selector: {0}")]
    InvalidSelector(String),

    /// Operation attempted after `close()`.
    #[error("Store is closed")]
    Closed,

    /// Failure queued by a test fixture.
    #[error("Programmed failure: {0}")]
    Programmed(String),
}

impl KvError {
    /// Shorthand for a test fixture failure.
    pub fn programmed(message: impl Into<String>) -> Self {
        Self::Programmed(message.into())
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Backend(_) => "KV-0001",
            Self::InvalidKey(_) => "KV-0002",
            Self::InvalidCursor(_) => "KV-0003",
            Self::InvalidSelector(_) => "KV-0004",
            Self::Closed => "KV-0005",
            Self::Programmed(_) => "KV-0100",
        }
    }

    /// Whether this error came from a stubbed outcome rather than a store.
    #[inline]
    pub fn is_programmed(&self) -> bool {
        matches!(self, Self::Programmed(_))
    }
}
