//! Startup configuration for the contact book.
//!
//! # Responsibility
//! - Carry the closed group set supplied by the host at startup.
//! - Reject malformed group declarations before any contact is stored.
//!
//! # Invariants
//! - A validated configuration always yields at least one group.
//! - Group tags are trimmed, non-empty and unique.

use crate::model::group::{GroupSet, DEFAULT_GROUPS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Host-supplied contact book configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBookConfig {
    /// Group tags in presentation order.
    pub groups: Vec<String>,
}

impl Default for ContactBookConfig {
    fn default() -> Self {
        Self {
            groups: DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect(),
        }
    }
}

impl ContactBookConfig {
    /// Parses configuration from a JSON document such as
    /// `{"groups": ["Male", "Female"]}`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates declaration-level invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.group_set().map(|_| ())
    }

    /// Builds the validated group set.
    pub fn group_set(&self) -> Result<GroupSet, ConfigError> {
        if self.groups.is_empty() {
            return Err(ConfigError::NoGroups);
        }

        let mut seen = BTreeSet::<&str>::new();
        let mut groups = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            let normalized = group.trim();
            if normalized.is_empty() {
                return Err(ConfigError::EmptyGroup);
            }
            if !seen.insert(normalized) {
                return Err(ConfigError::DuplicateGroup(normalized.to_string()));
            }
            groups.push(normalized.to_string());
        }

        Ok(GroupSet::from_validated(groups))
    }
}

/// Configuration load/validation errors.
#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
    NoGroups,
    EmptyGroup,
    DuplicateGroup(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid config json: {err}"),
            Self::NoGroups => write!(f, "config must declare at least one group"),
            Self::EmptyGroup => write!(f, "config group must not be empty"),
            Self::DuplicateGroup(value) => write!(f, "config group declared twice: `{value}`"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ContactBookConfig};

    #[test]
    fn default_config_is_valid() {
        let groups = ContactBookConfig::default()
            .group_set()
            .expect("default config should validate");
        assert!(groups.contains("Male"));
        assert!(groups.contains("Female"));
    }

    #[test]
    fn parses_groups_from_json_and_trims() {
        let config = ContactBookConfig::from_json_str(r#"{"groups": ["Family", " Work "]}"#)
            .expect("config should parse");
        let groups = config.group_set().expect("groups should validate");
        assert_eq!(groups.as_slice(), ["Family".to_string(), "Work".to_string()]);
    }

    #[test]
    fn rejects_missing_empty_and_duplicate_groups() {
        let err = ContactBookConfig::from_json_str(r#"{"groups": []}"#)
            .expect_err("empty list must fail");
        assert!(matches!(err, ConfigError::NoGroups));

        let err = ContactBookConfig::from_json_str(r#"{"groups": ["Work", "  "]}"#)
            .expect_err("blank group must fail");
        assert!(matches!(err, ConfigError::EmptyGroup));

        let err = ContactBookConfig::from_json_str(r#"{"groups": ["Work", "Work "]}"#)
            .expect_err("duplicate group must fail");
        assert!(matches!(err, ConfigError::DuplicateGroup(value) if value == "Work"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ContactBookConfig::from_json_str("{groups:").expect_err("bad json must fail");
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
