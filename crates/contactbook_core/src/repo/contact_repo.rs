//! Contact store contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the authoritative ordered contact collection for one session.
//! - Apply validated add/update/remove mutations and answer filtered queries.
//!
//! # Invariants
//! - Write paths call `ContactDraft::validate()` before any mutation.
//! - Ids are unique across the collection and never issued twice, even after
//!   the contact holding them was removed.
//! - `add` appends; `update` keeps position; `remove` deletes in place.
//! - Queries never mutate the collection.

use crate::model::contact::{Contact, ContactDraft, ContactId, ContactValidationError};
use crate::model::group::GroupSet;
use crate::repo::id_generator::{ContactIdGenerator, UuidV4Generator};
use crate::search::filter::{filter_contacts, ContactQuery};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Attempts made to draw a fresh id before giving up.
const MAX_ID_ATTEMPTS: u32 = 16;

pub type RepoResult<T> = Result<T, RepoError>;

/// Contact store error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ContactValidationError),
    NotFound(ContactId),
    /// The id generator kept returning ids that were already issued.
    IdExhausted { attempts: u32 },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::IdExhausted { attempts } => {
                write!(f, "no unused contact id after {attempts} attempts")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::IdExhausted { .. } => None,
        }
    }
}

impl From<ContactValidationError> for RepoError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Store interface for contact operations.
pub trait ContactRepository {
    /// Validates `draft`, assigns a fresh id and appends the contact.
    fn add(&mut self, draft: &ContactDraft) -> RepoResult<Contact>;
    /// Validates `draft` and replaces the fields of contact `id` in place.
    fn update(&mut self, id: ContactId, draft: &ContactDraft) -> RepoResult<Contact>;
    /// Removes every contact with `id`. Returns whether anything was removed.
    fn remove(&mut self, id: ContactId) -> bool;
    fn get(&self, id: ContactId) -> Option<Contact>;
    /// Returns matching contacts in store order.
    fn query(&self, query: &ContactQuery) -> Vec<Contact>;
    fn groups(&self) -> &GroupSet;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Session-lifetime contact store backed by a `Vec`.
pub struct InMemoryContactRepository<G: ContactIdGenerator = UuidV4Generator> {
    contacts: Vec<Contact>,
    issued_ids: HashSet<ContactId>,
    groups: GroupSet,
    id_generator: G,
}

impl InMemoryContactRepository<UuidV4Generator> {
    /// Creates an empty store with random UUID ids.
    pub fn new(groups: GroupSet) -> Self {
        Self::with_id_generator(groups, UuidV4Generator)
    }
}

impl<G: ContactIdGenerator> InMemoryContactRepository<G> {
    /// Creates an empty store drawing ids from `id_generator`.
    pub fn with_id_generator(groups: GroupSet, id_generator: G) -> Self {
        Self {
            contacts: Vec::new(),
            issued_ids: HashSet::new(),
            groups,
            id_generator,
        }
    }

    /// Read-only view of every stored contact in order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    fn fresh_id(&mut self) -> RepoResult<ContactId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.id_generator.next_id();
            if self.issued_ids.insert(candidate) {
                return Ok(candidate);
            }
            log::warn!(
                "event=contact_id_collision module=repo status=retry contact_id={}",
                candidate
            );
        }
        Err(RepoError::IdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

impl<G: ContactIdGenerator> ContactRepository for InMemoryContactRepository<G> {
    fn add(&mut self, draft: &ContactDraft) -> RepoResult<Contact> {
        draft.validate(&self.groups)?;

        let id = self.fresh_id()?;
        let contact = Contact::from_draft(id, draft.clone());
        self.contacts.push(contact.clone());
        Ok(contact)
    }

    fn update(&mut self, id: ContactId, draft: &ContactDraft) -> RepoResult<Contact> {
        draft.validate(&self.groups)?;

        let contact = self
            .contacts
            .iter_mut()
            .find(|contact| contact.id == id)
            .ok_or(RepoError::NotFound(id))?;
        contact.apply_draft(draft.clone());
        Ok(contact.clone())
    }

    fn remove(&mut self, id: ContactId) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|contact| contact.id != id);
        self.contacts.len() != before
    }

    fn get(&self, id: ContactId) -> Option<Contact> {
        self.contacts.iter().find(|contact| contact.id == id).cloned()
    }

    fn query(&self, query: &ContactQuery) -> Vec<Contact> {
        filter_contacts(&self.contacts, query)
    }

    fn groups(&self) -> &GroupSet {
        &self.groups
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactRepository, InMemoryContactRepository, RepoError, MAX_ID_ATTEMPTS};
    use crate::model::contact::{ContactDraft, ContactId};
    use crate::model::group::GroupSet;
    use crate::repo::id_generator::ContactIdGenerator;
    use uuid::Uuid;

    struct RepeatingGenerator(Vec<u128>);

    impl ContactIdGenerator for RepeatingGenerator {
        fn next_id(&mut self) -> ContactId {
            let value = if self.0.len() > 1 {
                self.0.remove(0)
            } else {
                self.0[0]
            };
            Uuid::from_u128(value)
        }
    }

    fn draft(first: &str) -> ContactDraft {
        ContactDraft::new(first, "Doe", "555-0100", "Female")
    }

    #[test]
    fn repeated_id_is_skipped() {
        let generator = RepeatingGenerator(vec![1, 1, 2]);
        let mut repo = InMemoryContactRepository::with_id_generator(GroupSet::default(), generator);

        let first = repo.add(&draft("Anna")).unwrap();
        let second = repo.add(&draft("Bea")).unwrap();
        assert_eq!(first.id, Uuid::from_u128(1));
        assert_eq!(second.id, Uuid::from_u128(2));
    }

    #[test]
    fn removed_id_is_not_reissued() {
        let generator = RepeatingGenerator(vec![1, 1]);
        let mut repo = InMemoryContactRepository::with_id_generator(GroupSet::default(), generator);

        let first = repo.add(&draft("Anna")).unwrap();
        assert!(repo.remove(first.id));

        let err = repo.add(&draft("Bea")).unwrap_err();
        assert_eq!(
            err,
            RepoError::IdExhausted {
                attempts: MAX_ID_ATTEMPTS
            }
        );
        assert!(repo.is_empty());
    }

    #[test]
    fn padded_fields_are_stored_as_typed() {
        let mut repo = InMemoryContactRepository::new(GroupSet::default());
        let contact = repo.add(&draft("Anna")).unwrap();

        let padded = ContactDraft::new("Anna ", " Berg", " 555 ", "Female");
        let updated = repo.update(contact.id, &padded).unwrap();
        assert_eq!(ContactDraft::from_contact(&updated), padded);
        assert_eq!(repo.get(contact.id), Some(updated));

        let added = repo.add(&padded).unwrap();
        assert_eq!(ContactDraft::from_contact(&added), padded);
    }
}
