//! Search term and group filter over contacts.
//!
//! # Responsibility
//! - Match contacts by case-insensitive substring over name and group.
//! - Narrow results to one exact group tag.
//!
//! # Invariants
//! - Empty search term and empty group filter match every contact.
//! - Results keep the order of the input sequence.

use crate::model::contact::Contact;

/// Filter options for listing contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactQuery {
    /// Substring matched against first name, last name and group.
    /// Empty means no text filter.
    pub search_term: String,
    /// Exact group tag. Empty means all groups.
    pub group_filter: String,
}

impl ContactQuery {
    pub fn new(search_term: impl Into<String>, group_filter: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            group_filter: group_filter.into(),
        }
    }

    /// Query matching every contact.
    pub fn all() -> Self {
        Self::default()
    }

    /// Returns whether one contact passes both filters.
    pub fn matches(&self, contact: &Contact) -> bool {
        matches_with_needle(contact, &self.search_term.to_lowercase(), &self.group_filter)
    }
}

/// Applies `query` to `contacts`, cloning the matching records in order.
pub fn filter_contacts<'a, I>(contacts: I, query: &ContactQuery) -> Vec<Contact>
where
    I: IntoIterator<Item = &'a Contact>,
{
    let needle = query.search_term.to_lowercase();
    contacts
        .into_iter()
        .filter(|contact| matches_with_needle(contact, &needle, &query.group_filter))
        .cloned()
        .collect()
}

fn matches_with_needle(contact: &Contact, needle: &str, group_filter: &str) -> bool {
    let group_ok = group_filter.is_empty() || contact.group == group_filter;
    if !group_ok {
        return false;
    }
    if needle.is_empty() {
        return true;
    }

    [&contact.first_name, &contact.last_name, &contact.group]
        .iter()
        .any(|value| value.to_lowercase().contains(needle))
}
