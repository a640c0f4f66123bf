//! Stored values and versionstamps.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{KvError, KvResult};

/// Any structured value a store can hold.
pub type KvValue = serde_json::Value;

/// Versionstamp of the first commit a store hands out.
pub const DEFAULT_VERSIONSTAMP: &str = "00000000000000010000";

const VERSIONSTAMP_LEN: usize = 20;

/// 20 hex digit commit version: 16 digits of commit sequence followed by
/// 4 digits of batch index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Versionstamp(String);

impl Versionstamp {
    /// Parse a versionstamp, rejecting anything that is not 20 hex digits.
    pub fn parse(raw: impl Into<String>) -> KvResult<Self> {
        let raw = raw.into();
        if raw.len() != VERSIONSTAMP_LEN || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(KvError::Backend(format!(
                "versionstamp must be {VERSIONSTAMP_LEN} hex digits, got {raw:?}"
            )));
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    /// Versionstamp for the `sequence`-th commit, batch index 0.
    pub fn from_sequence(sequence: u64) -> Self {
        Self(format!("{sequence:016x}0000"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Versionstamp {
    fn default() -> Self {
        Self(DEFAULT_VERSIONSTAMP.to_string())
    }
}

impl fmt::Display for Versionstamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
