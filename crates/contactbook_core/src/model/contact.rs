//! Contact record and draft model.
//!
//! # Responsibility
//! - Define the stored `Contact` record and its serialized field names.
//! - Define the fixed-shape `ContactDraft` edited by create/update forms.
//! - Validate drafts against the configured group set.
//!
//! # Invariants
//! - `id` is assigned once by the store and never changes.
//! - A draft is only committed when every field is non-empty and `group`
//!   belongs to the configured set.

use crate::model::group::GroupSet;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one stored contact.
pub type ContactId = Uuid;

/// Stored contact record.
///
/// Serialized with camelCase names (`firstName`, `lastName`) to match the
/// record shape UI hosts already consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Store-assigned identifier, never reused.
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    /// Free-form phone text. No format is enforced.
    pub phone: String,
    /// One of the configured group tags.
    pub group: String,
}

impl Contact {
    /// Builds a contact from an already validated draft.
    pub(crate) fn from_draft(id: ContactId, draft: ContactDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            phone: draft.phone,
            group: draft.group,
        }
    }

    /// Replaces every editable field, keeping `id`.
    pub(crate) fn apply_draft(&mut self, draft: ContactDraft) {
        self.first_name = draft.first_name;
        self.last_name = draft.last_name;
        self.phone = draft.phone;
        self.group = draft.group;
    }
}

/// Editable field of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    FirstName,
    LastName,
    Phone,
    Group,
}

impl DraftField {
    /// All draft fields in form order.
    pub const ALL: [DraftField; 4] = [
        DraftField::FirstName,
        DraftField::LastName,
        DraftField::Phone,
        DraftField::Group,
    ];

    /// Stable field name used by UI hosts.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Phone => "phone",
            Self::Group => "group",
        }
    }

    /// Parses a host-supplied field name.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "firstName" => Some(Self::FirstName),
            "lastName" => Some(Self::LastName),
            "phone" => Some(Self::Phone),
            "group" => Some(Self::Group),
            _ => None,
        }
    }
}

/// Uncommitted contact fields without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub group: String,
}

impl ContactDraft {
    /// Creates a draft from explicit field values.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            group: group.into(),
        }
    }

    /// Copies the editable fields of an existing contact.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            phone: contact.phone.clone(),
            group: contact.group.clone(),
        }
    }

    /// Returns whether all fields are empty.
    pub fn is_blank(&self) -> bool {
        DraftField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Phone => &self.phone,
            DraftField::Group => &self.group,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::FirstName => self.first_name = value,
            DraftField::LastName => self.last_name = value,
            DraftField::Phone => self.phone = value,
            DraftField::Group => self.group = value,
        }
    }

    /// Validates the draft against the configured groups.
    ///
    /// Fields are checked in form order; the first failing field is reported.
    /// Whitespace-only names and phones count as empty. `group` must equal a
    /// configured tag exactly. Values are checked as typed, never rewritten.
    pub fn validate(&self, groups: &GroupSet) -> Result<(), ContactValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ContactValidationError::EmptyFirstName);
        }
        if self.last_name.trim().is_empty() {
            return Err(ContactValidationError::EmptyLastName);
        }
        if self.phone.trim().is_empty() {
            return Err(ContactValidationError::EmptyPhone);
        }
        if self.group.is_empty() {
            return Err(ContactValidationError::EmptyGroup);
        }
        if !groups.contains(&self.group) {
            return Err(ContactValidationError::UnknownGroup(self.group.clone()));
        }
        Ok(())
    }
}

/// Draft validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    EmptyFirstName,
    EmptyLastName,
    EmptyPhone,
    EmptyGroup,
    /// Group is not part of the configured set.
    UnknownGroup(String),
}

impl ContactValidationError {
    /// Field that failed validation.
    pub fn field(&self) -> DraftField {
        match self {
            Self::EmptyFirstName => DraftField::FirstName,
            Self::EmptyLastName => DraftField::LastName,
            Self::EmptyPhone => DraftField::Phone,
            Self::EmptyGroup | Self::UnknownGroup(_) => DraftField::Group,
        }
    }
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFirstName => write!(f, "first name must not be empty"),
            Self::EmptyLastName => write!(f, "last name must not be empty"),
            Self::EmptyPhone => write!(f, "phone must not be empty"),
            Self::EmptyGroup => write!(f, "group must not be empty"),
            Self::UnknownGroup(value) => write!(f, "group is not configured: `{value}`"),
        }
    }
}

impl Error for ContactValidationError {}
