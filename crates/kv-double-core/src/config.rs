//! Mock engine configuration.
//!
//! ```json
//! {
//!   "max_reported_interactions": 10,
//!   "default_versionstamp": "00000000000000010000",
//!   "absent_options": "strict"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Versionstamp, DEFAULT_VERSIONSTAMP};

/// How a call that omitted an optional options argument is matched.
///
/// Applied identically when resolving stubs and when verifying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbsentOptionsPolicy {
    /// Absent options only satisfy a matcher that accepts absence.
    #[default]
    Strict,
    /// Absent options satisfy any options matcher.
    Lenient,
}

/// Configuration for a mock store instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockConfig {
    /// Unverified calls listed in an exhaustiveness failure before "+N more".
    #[serde(default = "default_max_reported")]
    pub max_reported_interactions: usize,

    /// Versionstamp in commit results of unstubbed writes.
    #[serde(default = "default_versionstamp")]
    pub default_versionstamp: String,

    #[serde(default)]
    pub absent_options: AbsentOptionsPolicy,
}

fn default_max_reported() -> usize {
    10
}

fn default_versionstamp() -> String {
    DEFAULT_VERSIONSTAMP.to_string()
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            max_reported_interactions: default_max_reported(),
            default_versionstamp: default_versionstamp(),
            absent_options: AbsentOptionsPolicy::default(),
        }
    }
}

impl MockConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_reported_interactions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_reported_interactions",
                reason: "must be at least 1".to_string(),
            });
        }
        self.versionstamp()?;
        Ok(())
    }

    /// The configured default versionstamp, parsed.
    pub fn versionstamp(&self) -> Result<Versionstamp, ConfigError> {
        Versionstamp::parse(self.default_versionstamp.clone()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "default_versionstamp",
                reason: e.to_string(),
            }
        })
    }

    pub fn with_absent_options(mut self, policy: AbsentOptionsPolicy) -> Self {
        self.absent_options = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = MockConfig::default();
        assert_eq!(config.max_reported_interactions, 10);
        assert_eq!(config.default_versionstamp, "00000000000000010000");
        assert_eq!(config.absent_options, AbsentOptionsPolicy::Strict);
        assert!(config.validate().is_ok(), "Default MockConfig must validate");
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config = MockConfig::from_json_str(r#"{ "absent_options": "lenient" }"#).unwrap();
        assert_eq!(config.absent_options, AbsentOptionsPolicy::Lenient);
        assert_eq!(config.max_reported_interactions, 10);
    }

    #[test]
    fn test_rejects_zero_report_cap() {
        let config = MockConfig {
            max_reported_interactions: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "max_reported_interactions",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_bad_versionstamp() {
        let err = MockConfig::from_json_str(r#"{ "default_versionstamp": "v1" }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "default_versionstamp",
                ..
            }
        ));
        assert!(matches!(
            MockConfig::from_json_str("{ nope"),
            Err(ConfigError::Parse(_))
        ));
    }
}
