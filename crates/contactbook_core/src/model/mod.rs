//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record and its uncommitted draft shape.
//! - Define the closed set of group tags a contact may carry.
//!
//! # Invariants
//! - Every stored contact is identified by a stable `ContactId`.
//! - Drafts never carry an id; the store assigns it on creation.

pub mod contact;
pub mod group;
