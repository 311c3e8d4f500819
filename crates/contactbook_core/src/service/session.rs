//! Contact book session state owned by one UI host.
//!
//! # Responsibility
//! - Own the contact service, the draft editor and the current list filters.
//! - Translate mutation outcomes into user-facing notices.
//!
//! # Invariants
//! - The busy flag is lowered before every call returns.
//! - The group filter is empty or one of the configured groups.

use crate::config::{ConfigError, ContactBookConfig};
use crate::model::contact::{Contact, ContactId, ContactValidationError, DraftField};
use crate::repo::contact_repo::{ContactRepository, InMemoryContactRepository, RepoError};
use crate::search::filter::ContactQuery;
use crate::service::contact_service::ContactService;
use crate::service::draft_editor::{CommitOutcome, DraftEditor, EditorError, EditorState};
use crate::logging::{log_session_close, log_session_open};

pub const NOTICE_ADDED: &str = "Contact added successfully!";
pub const NOTICE_UPDATED: &str = "Contact updated successfully!";
pub const NOTICE_DELETED: &str = "Contact deleted successfully!";
pub const NOTICE_ALREADY_DELETED: &str = "Contact was already deleted.";

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-visible outcome of one mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Notice for a commit result.
    pub fn for_commit(result: &Result<CommitOutcome, EditorError>) -> Self {
        match result {
            Ok(CommitOutcome::Added(_)) => Self::success(NOTICE_ADDED),
            Ok(CommitOutcome::Updated(_)) => Self::success(NOTICE_UPDATED),
            Err(err) => Self::error(format!("Could not save contact: {err}.")),
        }
    }

    /// Notice for a delete. Deleting an absent contact still succeeds.
    pub fn for_delete(removed: bool) -> Self {
        if removed {
            Self::success(NOTICE_DELETED)
        } else {
            Self::success(NOTICE_ALREADY_DELETED)
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

/// Explicit owner of all contact book state for one UI host.
pub struct ContactBookSession<R: ContactRepository> {
    service: ContactService<R>,
    editor: DraftEditor,
    search_term: String,
    group_filter: String,
    busy: bool,
}

impl ContactBookSession<InMemoryContactRepository> {
    /// Builds an empty in-memory session from startup configuration.
    pub fn from_config(config: &ContactBookConfig) -> Result<Self, ConfigError> {
        let groups = config.group_set()?;
        log_session_open(&groups);
        Ok(Self::new(ContactService::new(
            InMemoryContactRepository::new(groups),
        )))
    }
}

impl<R: ContactRepository> ContactBookSession<R> {
    pub fn new(service: ContactService<R>) -> Self {
        Self {
            service,
            editor: DraftEditor::new(),
            search_term: String::new(),
            group_filter: String::new(),
            busy: false,
        }
    }

    pub fn service(&self) -> &ContactService<R> {
        &self.service
    }

    pub fn editor(&self) -> &DraftEditor {
        &self.editor
    }

    /// Configured group tags in presentation order.
    pub fn groups(&self) -> &[String] {
        self.service.groups().as_slice()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn group_filter(&self) -> &str {
        &self.group_filter
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Sets the group filter. Empty means all groups.
    pub fn set_group_filter(
        &mut self,
        group: impl Into<String>,
    ) -> Result<(), ContactValidationError> {
        let group = group.into();
        if !group.is_empty() && !self.service.groups().contains(&group) {
            return Err(ContactValidationError::UnknownGroup(group));
        }
        self.group_filter = group;
        Ok(())
    }

    /// Contacts passing the current search term and group filter.
    pub fn visible_contacts(&self) -> Vec<Contact> {
        self.service.query(&ContactQuery::new(
            self.search_term.as_str(),
            self.group_filter.as_str(),
        ))
    }

    pub fn start_add(&mut self) {
        self.editor.start_add();
    }

    /// Opens the edit form for a stored contact.
    ///
    /// Unknown ids fail with `NotFound` and leave the editor unchanged.
    pub fn start_edit(&mut self, id: ContactId) -> Result<(), EditorError> {
        let contact = self
            .service
            .get(id)
            .ok_or(EditorError::Repo(RepoError::NotFound(id)))?;
        self.editor.start_edit(&contact);
        Ok(())
    }

    pub fn set_draft_field(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.editor.set_field(field, value)
    }

    pub fn cancel_draft(&mut self) {
        self.editor.cancel();
    }

    /// Commits the open draft through the service.
    ///
    /// `Notice::for_commit` turns the result into the user-facing message.
    pub fn commit_draft(&mut self) -> Result<CommitOutcome, EditorError> {
        self.busy = true;
        let result = self.editor.commit(&mut self.service);
        self.busy = false;
        result
    }

    /// Deletes a contact by id. Returns whether a contact was removed;
    /// `Notice::for_delete` turns it into the user-facing message.
    pub fn delete_contact(&mut self, id: ContactId) -> bool {
        self.busy = true;
        let removed = self.service.remove(id);
        // An open edit form for a deleted contact can no longer commit.
        if removed && self.editor.state() == (EditorState::Editing { target: id }) {
            self.editor.cancel();
        }
        self.busy = false;
        removed
    }
}

impl<R: ContactRepository> Drop for ContactBookSession<R> {
    fn drop(&mut self) {
        log_session_close(self.service.len());
    }
}
