//! Core domain logic for the contact book.
//! This crate is the single source of truth for contact invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{ConfigError, ContactBookConfig};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::contact::{Contact, ContactDraft, ContactId, ContactValidationError, DraftField};
pub use model::group::{GroupSet, DEFAULT_GROUPS};
pub use repo::contact_repo::{ContactRepository, InMemoryContactRepository, RepoError, RepoResult};
pub use repo::id_generator::{ContactIdGenerator, SequentialIdGenerator, UuidV4Generator};
pub use search::filter::{filter_contacts, ContactQuery};
pub use service::contact_service::ContactService;
pub use service::draft_editor::{CommitOutcome, DraftEditor, EditorError, EditorState};
pub use service::session::{ContactBookSession, Notice, NoticeKind};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
