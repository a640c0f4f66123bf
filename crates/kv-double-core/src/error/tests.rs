//! Tests for error module.

use super::*;

#[test]
fn test_kv_error_codes_are_unique() {
    let errors = [
        KvError::Backend("io".to_string()),
        KvError::InvalidKey("empty".to_string()),
        KvError::InvalidCursor("zz".to_string()),
        KvError::InvalidSelector("no bounds".to_string()),
        KvError::Closed,
        KvError::programmed("boom"),
    ];
    let mut codes: Vec<&str> = errors.iter().map(KvError::code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn test_programmed_error_display() {
    let e = KvError::programmed("quota exceeded");
    assert!(e.is_programmed());
    assert_eq!(e.to_string(), "Programmed failure: quota exceeded");
    assert!(!KvError::Closed.is_programmed());
}

#[test]
fn test_slot_error_messages() {
    let e = SlotError::OutOfOrder {
        token: 1,
        current: 2,
    };
    assert!(e.to_string().contains("generation 1"));

    let e = ConfigError::InvalidValue {
        field: "max_reported_interactions",
        reason: "must be at least 1".to_string(),
    };
    assert_eq!(
        e.to_string(),
        "Invalid value for max_reported_interactions: must be at least 1"
    );
}
