//! Assertion failures raised by verification.
//!
//! These are distinct from [`kv_double_core::KvError`]: a `KvError` coming out
//! of the double is a programmed fixture, a `VerificationError` is a failed
//! test assertion.

use thiserror::Error;

use crate::verification::Quantifier;

/// Result alias for verification calls.
pub type VerifyResult = Result<(), VerificationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// Matching call count violated the quantifier.
    #[error("expected {call} to be called {expected}, but it was called {actual} time(s)")]
    QuantifierMismatch {
        /// Rendered call matcher
        call: String,
        expected: Quantifier,
        actual: usize,
    },

    /// Calls were recorded that no verification covered.
    #[error("{count} unverified interaction(s):\n{report}")]
    UnverifiedInteractions {
        count: usize,
        /// One line per call, capped
        report: String,
    },
}
