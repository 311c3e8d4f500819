//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Own the draft editor and session state that UI hosts drive.
//! - Keep UI/FFI layers decoupled from store details.

pub mod contact_service;
pub mod draft_editor;
pub mod session;
