//! Contact query filtering.
//!
//! # Responsibility
//! - Provide the pure predicate behind list/search views.
//!
//! # Invariants
//! - Filtering never mutates or reorders the source collection.

pub mod filter;
