//! Closed group set attached to contacts.
//!
//! # Invariants
//! - Group tags are non-empty after trimming.
//! - Group tags are unique and keep their configured order.
//! - Membership checks are exact (case-sensitive) matches.

use serde::Serialize;

/// Group labels used when no configuration is supplied.
pub const DEFAULT_GROUPS: &[&str] = &["Male", "Female"];

/// Validated, ordered set of group tags.
///
/// Built through `ContactBookConfig::group_set()` so the duplicate and
/// blank checks are applied in one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupSet {
    groups: Vec<String>,
}

impl GroupSet {
    pub(crate) fn from_validated(groups: Vec<String>) -> Self {
        Self { groups }
    }

    /// Returns whether `group` is one of the configured tags.
    pub fn contains(&self, group: &str) -> bool {
        self.groups.iter().any(|candidate| candidate == group)
    }

    /// Configured tags in presentation order.
    pub fn as_slice(&self) -> &[String] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for GroupSet {
    fn default() -> Self {
        Self::from_validated(DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect())
    }
}
