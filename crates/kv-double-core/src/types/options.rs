//! Call options and list selectors.
//!
//! Optional fields serialize only when present, so the serialized field set of
//! an options value is exactly the set of fields the caller supplied. Shape
//! matchers rely on this to compare field cardinality.

use serde::{Deserialize, Serialize};

use super::key::Key;
use crate::error::{KvError, KvResult};

/// Read consistency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consistency {
    Strong,
    Eventual,
}

/// Options accepted by `get` and `get_many`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency: Option<Consistency>,
}

impl ReadOptions {
    pub fn with_consistency(consistency: Consistency) -> Self {
        Self {
            consistency: Some(consistency),
        }
    }
}

/// Which keys a `list` call walks.
///
/// Valid shapes: `{prefix}`, `{prefix, start}`, `{prefix, end}`, `{start, end}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSelector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Key>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Key>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Key>,
}

impl ListSelector {
    pub fn prefix(prefix: Key) -> Self {
        Self {
            prefix: Some(prefix),
            ..Self::default()
        }
    }

    pub fn range(start: Key, end: Key) -> Self {
        Self {
            prefix: None,
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn with_start(mut self, start: Key) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: Key) -> Self {
        self.end = Some(end);
        self
    }

    /// Number of fields present.
    pub fn field_count(&self) -> usize {
        [&self.prefix, &self.start, &self.end]
            .iter()
            .filter(|f| f.is_some())
            .count()
    }

    /// Reject selector shapes a store cannot serve.
    pub fn validate(&self) -> KvResult<()> {
        match (&self.prefix, &self.start, &self.end) {
            (Some(_), Some(_), Some(_)) => Err(KvError::InvalidSelector(
                "prefix selectors accept either start or end, not both".to_string(),
            )),
            (None, Some(_), Some(_)) | (Some(_), _, _) => Ok(()),
            (None, _, _) => Err(KvError::InvalidSelector(
                "selector needs a prefix or both start and end".to_string(),
            )),
        }
    }
}

/// Options accepted by `list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency: Option<Consistency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<usize>,
}

impl ListOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn reversed(mut self) -> Self {
        self.reverse = Some(true);
        self
    }
}

/// Options accepted by `enqueue`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnqueueOptions {
    /// Delivery delay in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys_if_undelivered: Option<Vec<Key>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_shapes() {
        assert!(ListSelector::prefix(Key::from(["a"])).validate().is_ok());
        assert!(ListSelector::range(Key::from(["a"]), Key::from(["b"]))
            .validate()
            .is_ok());
        assert!(ListSelector::prefix(Key::from(["a"]))
            .with_start(Key::from(["a"]).child(1i64))
            .validate()
            .is_ok());
        assert!(ListSelector::default().validate().is_err());
        assert!(ListSelector::default()
            .with_start(Key::from(["a"]))
            .validate()
            .is_err());
        assert!(ListSelector::prefix(Key::from(["a"]))
            .with_start(Key::from(["a"]).child(1i64))
            .with_end(Key::from(["a"]).child(9i64))
            .validate()
            .is_err());
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let json = serde_json::to_value(ListOptions::default().with_limit(5)).unwrap();
        assert_eq!(json, serde_json::json!({ "limit": 5 }));

        let json = serde_json::to_value(ReadOptions::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
