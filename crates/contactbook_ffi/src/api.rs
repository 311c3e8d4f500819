//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose contact book session operations to Dart via FRB.
//! - Translate core outcomes into simple envelopes with notice text.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Contact ids cross the boundary as hyphenated UUID strings.
//! - All contact state lives in a caller-owned `ContactBookHandle`.

use contactbook_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CommitOutcome, Contact, ContactBookConfig, ContactBookSession, ContactId, DraftField,
    EditorState, InMemoryContactRepository, Notice, NoticeKind, DEFAULT_GROUPS,
};
use log::warn;
use uuid::Uuid;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Group labels used when the host supplies no configuration.
#[flutter_rust_bridge::frb(sync)]
pub fn default_groups() -> Vec<String> {
    DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect()
}

/// Contact row for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    pub contact_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub group: String,
}

/// Current create/edit form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftView {
    /// `idle|creating|editing`.
    pub state: String,
    /// Contact being edited, set only in `editing` state.
    pub target_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub group: String,
}

/// Generic action response envelope for contact mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Affected contact ID, when one exists.
    pub contact_id: Option<String>,
    /// User-facing notice text.
    pub message: String,
}

impl ContactActionResponse {
    fn from_notice(notice: Notice, contact_id: Option<ContactId>) -> Self {
        Self {
            ok: notice.kind == NoticeKind::Success,
            contact_id: contact_id.map(|id| id.to_string()),
            message: notice.message,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            contact_id: None,
            message: message.into(),
        }
    }
}

/// Caller-owned contact book for one UI host.
#[flutter_rust_bridge::frb(opaque)]
pub struct ContactBookHandle {
    session: ContactBookSession<InMemoryContactRepository>,
}

impl ContactBookHandle {
    /// Opens an empty contact book.
    ///
    /// `config_json` has the shape `{"groups": [...]}`; `None` uses the
    /// default groups.
    ///
    /// # FFI contract
    /// - Sync call, in-memory only.
    /// - Returns an error message when the configuration is invalid.
    #[flutter_rust_bridge::frb(sync)]
    pub fn open(config_json: Option<String>) -> Result<ContactBookHandle, String> {
        let config = match config_json.as_deref().map(str::trim) {
            Some(json) if !json.is_empty() => {
                ContactBookConfig::from_json_str(json).map_err(|err| err.to_string())?
            }
            _ => ContactBookConfig::default(),
        };
        let session = ContactBookSession::from_config(&config).map_err(|err| err.to_string())?;
        Ok(Self { session })
    }

    /// Configured group labels in presentation order.
    #[flutter_rust_bridge::frb(sync)]
    pub fn groups(&self) -> Vec<String> {
        self.session.groups().to_vec()
    }

    /// Contacts passing the current search term and group filter.
    #[flutter_rust_bridge::frb(sync)]
    pub fn visible_contacts(&self) -> Vec<ContactItem> {
        self.session
            .visible_contacts()
            .into_iter()
            .map(to_contact_item)
            .collect()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn set_search_term(&mut self, term: String) {
        self.session.set_search_term(term);
    }

    /// Sets the group filter (`""` for all contacts).
    ///
    /// Returns empty string on success and error message on failure.
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_group_filter(&mut self, group: String) -> String {
        match self.session.set_group_filter(group) {
            Ok(()) => String::new(),
            Err(err) => err.to_string(),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn start_add(&mut self) {
        self.session.start_add();
    }

    /// Opens the edit form for `contact_id`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn start_edit(&mut self, contact_id: String) -> ContactActionResponse {
        let id = match parse_contact_id(&contact_id) {
            Ok(id) => id,
            Err(message) => return ContactActionResponse::failure(message),
        };
        match self.session.start_edit(id) {
            Ok(()) => ContactActionResponse {
                ok: true,
                contact_id: Some(id.to_string()),
                message: String::new(),
            },
            Err(err) => ContactActionResponse::failure(format!("start_edit failed: {err}")),
        }
    }

    /// Writes one draft field by its form name (`firstName|lastName|phone|group`).
    ///
    /// Returns empty string on success and error message on failure.
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_draft_field(&mut self, field: String, value: String) -> String {
        let Some(field) = DraftField::parse(&field) else {
            return format!("unknown draft field `{field}`");
        };
        match self.session.set_draft_field(field, value) {
            Ok(()) => String::new(),
            Err(err) => err.to_string(),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn draft(&self) -> DraftView {
        let editor = self.session.editor();
        let draft = editor.draft();
        let target_id = match editor.state() {
            EditorState::Editing { target } => Some(target.to_string()),
            EditorState::Idle | EditorState::Creating => None,
        };
        DraftView {
            state: editor.state().as_str().to_string(),
            target_id,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            phone: draft.phone.clone(),
            group: draft.group.clone(),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn cancel_draft(&mut self) {
        self.session.cancel_draft();
    }

    /// Commits the open form as add or update.
    ///
    /// # FFI contract
    /// - Never panics.
    /// - On failure the form stays open and `message` explains why.
    #[flutter_rust_bridge::frb(sync)]
    pub fn commit_draft(&mut self) -> ContactActionResponse {
        let result = self.session.commit_draft();
        let contact_id = result
            .as_ref()
            .ok()
            .map(|outcome: &CommitOutcome| outcome.contact().id);
        ContactActionResponse::from_notice(Notice::for_commit(&result), contact_id)
    }

    /// Deletes a contact. Deleting an unknown id still reports success.
    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_contact(&mut self, contact_id: String) -> ContactActionResponse {
        let id = match parse_contact_id(&contact_id) {
            Ok(id) => id,
            Err(message) => return ContactActionResponse::failure(message),
        };
        let removed = self.session.delete_contact(id);
        ContactActionResponse::from_notice(Notice::for_delete(removed), Some(id))
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn is_busy(&self) -> bool {
        self.session.is_busy()
    }
}

fn parse_contact_id(raw: &str) -> Result<ContactId, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        warn!("event=ffi_bad_contact_id module=ffi status=error len={}", raw.len());
        format!("invalid contact id `{}`", raw.trim())
    })
}

fn to_contact_item(contact: Contact) -> ContactItem {
    ContactItem {
        contact_id: contact.id.to_string(),
        first_name: contact.first_name,
        last_name: contact.last_name,
        phone: contact.phone,
        group: contact.group,
    }
}
