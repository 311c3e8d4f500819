//! Draft editing state machine for create/update forms.
//!
//! # Responsibility
//! - Track whether a create or edit form is open and which contact it targets.
//! - Hold the single active draft and commit it through `ContactService`.
//!
//! # Invariants
//! - At most one draft is active; starting add/edit replaces it.
//! - `Idle` always carries a blank draft and no target id.
//! - A failed commit leaves state and draft untouched.

use crate::model::contact::{Contact, ContactDraft, ContactId, DraftField};
use crate::repo::contact_repo::{ContactRepository, RepoError};
use crate::service::contact_service::ContactService;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Editor lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// No form open.
    Idle,
    /// Create form open with a fresh draft.
    Creating,
    /// Edit form open for `target`.
    Editing { target: ContactId },
}

impl EditorState {
    /// Stable state name used by UI hosts.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Creating => "creating",
            Self::Editing { .. } => "editing",
        }
    }
}

/// Result of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Added(Contact),
    Updated(Contact),
}

impl CommitOutcome {
    pub fn contact(&self) -> &Contact {
        match self {
            Self::Added(contact) | Self::Updated(contact) => contact,
        }
    }
}

/// Editor operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Operation needs an open create/edit form.
    NoActiveDraft,
    Repo(RepoError),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoActiveDraft => write!(f, "no contact form is open"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoActiveDraft => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for EditorError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Single-draft editor.
#[derive(Debug, Clone)]
pub struct DraftEditor {
    state: EditorState,
    draft: ContactDraft,
}

impl Default for DraftEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftEditor {
    pub fn new() -> Self {
        Self {
            state: EditorState::Idle,
            draft: ContactDraft::default(),
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Returns whether a create or edit form is open.
    pub fn is_open(&self) -> bool {
        self.state != EditorState::Idle
    }

    /// Opens the create form with a blank draft.
    pub fn start_add(&mut self) {
        self.state = EditorState::Creating;
        self.draft = ContactDraft::default();
    }

    /// Opens the edit form pre-filled from `contact`.
    pub fn start_edit(&mut self, contact: &Contact) {
        self.state = EditorState::Editing { target: contact.id };
        self.draft = ContactDraft::from_contact(contact);
    }

    /// Writes one draft field.
    pub fn set_field(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        if !self.is_open() {
            return Err(EditorError::NoActiveDraft);
        }
        self.draft.set(field, value);
        Ok(())
    }

    /// Discards the draft and closes the form. No-op when idle.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Commits the draft: `add` when creating, `update` when editing.
    ///
    /// On success the editor returns to `Idle`. On failure the form stays
    /// open with the draft unchanged so the caller can correct it.
    pub fn commit<R: ContactRepository>(
        &mut self,
        service: &mut ContactService<R>,
    ) -> Result<CommitOutcome, EditorError> {
        let outcome = match self.state {
            EditorState::Idle => return Err(EditorError::NoActiveDraft),
            EditorState::Creating => CommitOutcome::Added(service.add(&self.draft)?),
            EditorState::Editing { target } => {
                CommitOutcome::Updated(service.update(target, &self.draft)?)
            }
        };
        self.reset();
        Ok(outcome)
    }

    fn reset(&mut self) {
        self.state = EditorState::Idle;
        self.draft = ContactDraft::default();
    }
}
