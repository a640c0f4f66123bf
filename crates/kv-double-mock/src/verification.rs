//! Quantifiers and the exhaustiveness report.

use std::fmt;

use crate::call::CallMatcher;
use crate::error::{VerificationError, VerifyResult};
use crate::recorder::Interaction;

/// How many matching calls a verification expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    Once,
    Times(usize),
    Never,
    AtLeast(usize),
    AtMost(usize),
}

impl Default for Quantifier {
    fn default() -> Self {
        Self::AtLeast(1)
    }
}

impl Quantifier {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Self::Once => count == 1,
            Self::Times(n) => count == n,
            Self::Never => count == 0,
            Self::AtLeast(n) => count >= n,
            Self::AtMost(n) => count <= n,
        }
    }

    /// Evaluate against the number of calls `matcher` selected.
    pub fn check(self, matcher: &CallMatcher, count: usize) -> VerifyResult {
        if self.accepts(count) {
            return Ok(());
        }
        Err(VerificationError::QuantifierMismatch {
            call: matcher.to_string(),
            expected: self,
            actual: count,
        })
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Once => f.write_str("exactly once"),
            Self::Times(n) => write!(f, "exactly {n} time(s)"),
            Self::Never => f.write_str("never"),
            Self::AtLeast(n) => write!(f, "at least {n} time(s)"),
            Self::AtMost(n) => write!(f, "at most {n} time(s)"),
        }
    }
}

/// Fail when any interaction is left unverified, listing at most `cap` of them.
pub fn check_exhaustive(unverified: &[&Interaction], cap: usize) -> VerifyResult {
    if unverified.is_empty() {
        return Ok(());
    }
    let mut lines: Vec<String> = unverified
        .iter()
        .take(cap)
        .map(|i| format!("  #{} {}", i.seq, i.call))
        .collect();
    if unverified.len() > cap {
        lines.push(format!("  +{} more", unverified.len() - cap));
    }
    Err(VerificationError::UnverifiedInteractions {
        count: unverified.len(),
        report: lines.join("\n"),
    })
}

#[cfg(test)]
mod tests {
    use kv_double_core::Key;

    use super::*;
    use crate::call::Call;

    #[test]
    fn test_quantifier_laws() {
        for n in 0..4usize {
            assert!(Quantifier::Times(n).accepts(n));
            assert!(!Quantifier::Times(n + 1).accepts(n));
            assert_eq!(Quantifier::Never.accepts(n), n == 0);
            assert_eq!(Quantifier::Once.accepts(n), n == 1);
            assert!(Quantifier::AtLeast(n).accepts(n));
            assert!(!Quantifier::AtLeast(n + 1).accepts(n));
            assert!(Quantifier::AtMost(n).accepts(n));
        }
        assert!(!Quantifier::AtMost(1).accepts(2));
        assert_eq!(Quantifier::default(), Quantifier::AtLeast(1));
    }

    #[test]
    fn test_mismatch_message_names_condition_and_count() {
        let matcher = CallMatcher::delete(Key::from(["x"]));
        let err = Quantifier::Once.check(&matcher, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"expected delete(["x"]) to be called exactly once, but it was called 3 time(s)"#
        );
    }

    #[test]
    fn test_exhaustive_report_is_capped() {
        let interactions: Vec<Interaction> = (0..13)
            .map(|i| Interaction {
                seq: i,
                call: Call::Delete {
                    key: Key::from([i as i64]),
                },
                verified: false,
            })
            .collect();
        let refs: Vec<&Interaction> = interactions.iter().collect();

        let Err(VerificationError::UnverifiedInteractions { count, report }) =
            check_exhaustive(&refs, 10)
        else {
            panic!("expected an exhaustiveness failure");
        };
        assert_eq!(count, 13);
        assert_eq!(report.lines().count(), 11);
        assert!(report.contains("#0 delete([0n])"));
        assert!(!report.contains("#10 "));
        assert!(report.ends_with("+3 more"));

        assert!(check_exhaustive(&[], 10).is_ok());
    }
}
