//! Contact use-case service.
//!
//! # Responsibility
//! - Provide stable add/update/remove/query entry points for core callers.
//! - Emit metadata-only diagnostic events for every mutation.
//! - Delegate storage and validation to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - Log lines never contain contact names or phone numbers.

use crate::model::contact::{Contact, ContactDraft, ContactId};
use crate::model::group::GroupSet;
use crate::repo::contact_repo::{ContactRepository, RepoError, RepoResult};
use crate::search::filter::ContactQuery;
use log::{debug, info, warn};

/// Use-case service wrapper for contact operations.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a contact from a draft and returns the stored record.
    pub fn add(&mut self, draft: &ContactDraft) -> RepoResult<Contact> {
        match self.repo.add(draft) {
            Ok(contact) => {
                info!(
                    "event=contact_add module=service status=ok contact_id={} total={}",
                    contact.id,
                    self.repo.len()
                );
                Ok(contact)
            }
            Err(err) => {
                warn!(
                    "event=contact_add module=service status=error reason={}",
                    error_reason(&err)
                );
                Err(err)
            }
        }
    }

    /// Replaces the fields of an existing contact, keeping id and position.
    ///
    /// Returns `RepoError::NotFound` when `id` is not stored.
    pub fn update(&mut self, id: ContactId, draft: &ContactDraft) -> RepoResult<Contact> {
        match self.repo.update(id, draft) {
            Ok(contact) => {
                info!(
                    "event=contact_update module=service status=ok contact_id={}",
                    id
                );
                Ok(contact)
            }
            Err(err) => {
                warn!(
                    "event=contact_update module=service status=error contact_id={} reason={}",
                    id,
                    error_reason(&err)
                );
                Err(err)
            }
        }
    }

    /// Removes a contact. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: ContactId) -> bool {
        let removed = self.repo.remove(id);
        info!(
            "event=contact_remove module=service status=ok contact_id={} removed={}",
            id, removed
        );
        removed
    }

    /// Lists contacts matching the search term and group filter.
    pub fn query(&self, query: &ContactQuery) -> Vec<Contact> {
        let contacts = self.repo.query(query);
        debug!(
            "event=contact_query module=service status=ok grouped={} searched={} hits={}",
            !query.group_filter.is_empty(),
            !query.search_term.is_empty(),
            contacts.len()
        );
        contacts
    }

    /// Lists every contact in store order.
    pub fn list_all(&self) -> Vec<Contact> {
        self.repo.query(&ContactQuery::all())
    }

    pub fn get(&self, id: ContactId) -> Option<Contact> {
        self.repo.get(id)
    }

    /// Configured group tags.
    pub fn groups(&self) -> &GroupSet {
        self.repo.groups()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }
}

fn error_reason(err: &RepoError) -> &'static str {
    match err {
        RepoError::Validation(_) => "validation",
        RepoError::NotFound(_) => "not_found",
        RepoError::IdExhausted { .. } => "id_exhausted",
    }
}
