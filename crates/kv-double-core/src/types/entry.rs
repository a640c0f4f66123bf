//! Read results and commit results.

use serde::{Deserialize, Serialize};

use super::key::Key;
use super::value::{KvValue, Versionstamp};

/// Result of reading one key. A missing key has neither value nor versionstamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub key: Key,
    pub value: Option<KvValue>,
    pub versionstamp: Option<Versionstamp>,
}

impl Entry {
    pub fn new(key: Key, value: KvValue, versionstamp: Versionstamp) -> Self {
        Self {
            key,
            value: Some(value),
            versionstamp: Some(versionstamp),
        }
    }

    /// Entry for a key with no stored value.
    pub fn missing(key: Key) -> Self {
        Self {
            key,
            value: None,
            versionstamp: None,
        }
    }

    pub fn is_present(&self) -> bool {
        self.versionstamp.is_some()
    }
}

/// Outcome of a successful write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitResult {
    pub ok: bool,
    pub versionstamp: Versionstamp,
}

impl CommitResult {
    pub fn committed(versionstamp: Versionstamp) -> Self {
        Self {
            ok: true,
            versionstamp,
        }
    }
}

impl Default for CommitResult {
    fn default() -> Self {
        Self::committed(Versionstamp::default())
    }
}
