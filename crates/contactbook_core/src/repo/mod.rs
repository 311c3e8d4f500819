//! Contact store contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define the contact store contract used by services.
//! - Keep id assignment and collection ordering inside the store boundary.
//!
//! # Invariants
//! - Store writes validate the draft before mutating anything.
//! - Store APIs return semantic errors (`NotFound`, `Validation`).

pub mod contact_repo;
pub mod id_generator;
