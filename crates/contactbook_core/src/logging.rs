//! Logging bootstrap and session lifecycle events.
//!
//! # Responsibility
//! - Start one daily-rotated log file backend per process for the UI host.
//! - Emit `session_open` / `session_close` lifecycle lines.
//!
//! # Invariants
//! - A second `init_logging` call must request the active settings exactly.
//! - Lifecycle lines carry counts and configured group labels only, never
//!   contact names or phone numbers.

use crate::model::group::GroupSet;
use flexi_logger::{Age, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "contactbook";
/// One file per day; a week of history is enough for a session-only store.
const KEEP_DAILY_LOG_FILES: usize = 7;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();

/// Validated logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: &'static str,
    pub log_dir: PathBuf,
}

impl LogSettings {
    /// Parses a level (`trace|debug|info|warn|error`) and an absolute directory.
    pub fn parse(level: &str, log_dir: &str) -> Result<Self, LoggingError> {
        let level = match level.trim().to_ascii_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" | "warning" => "warn",
            "error" => "error",
            other => return Err(LoggingError::UnsupportedLevel(other.to_string())),
        };

        let dir = log_dir.trim();
        if dir.is_empty() {
            return Err(LoggingError::EmptyLogDir);
        }
        if !Path::new(dir).is_absolute() {
            return Err(LoggingError::RelativeLogDir(dir.to_string()));
        }

        Ok(Self {
            level,
            log_dir: PathBuf::from(dir),
        })
    }
}

/// Logging bootstrap errors.
#[derive(Debug)]
pub enum LoggingError {
    UnsupportedLevel(String),
    EmptyLogDir,
    RelativeLogDir(String),
    CreateDir(PathBuf, std::io::Error),
    Backend(flexi_logger::FlexiLoggerError),
    /// Logging is already running with different settings.
    Conflict {
        active: LogSettings,
        requested: LogSettings,
    },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(value) => write!(
                f,
                "unsupported log level `{value}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyLogDir => write!(f, "log_dir cannot be empty"),
            Self::RelativeLogDir(value) => {
                write!(f, "log_dir must be an absolute path, got `{value}`")
            }
            Self::CreateDir(dir, err) => {
                write!(f, "failed to create log directory `{}`: {err}", dir.display())
            }
            Self::Backend(err) => write!(f, "failed to start logger: {err}"),
            Self::Conflict { active, requested } => write!(
                f,
                "logging already running as {}@{}; refusing {}@{}",
                active.level,
                active.log_dir.display(),
                requested.level,
                requested.log_dir.display()
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDir(_, err) => Some(err),
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

struct ActiveLogger {
    settings: LogSettings,
    _handle: LoggerHandle,
}

/// Starts file logging. Repeating the call with the same settings is a no-op.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), LoggingError> {
    let requested = LogSettings::parse(level, log_dir)?;
    let active = ACTIVE.get_or_try_init(|| start_backend(&requested))?;

    if active.settings != requested {
        return Err(LoggingError::Conflict {
            active: active.settings.clone(),
            requested,
        });
    }
    Ok(())
}

fn start_backend(settings: &LogSettings) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(&settings.log_dir)
        .map_err(|err| LoggingError::CreateDir(settings.log_dir.clone(), err))?;

    let handle = Logger::try_with_str(settings.level)
        .map_err(LoggingError::Backend)?
        .log_to_file(
            FileSpec::default()
                .directory(settings.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(KEEP_DAILY_LOG_FILES),
        )
        .write_mode(WriteMode::Direct)
        .format_for_files(flexi_logger::opt_format)
        .start()
        .map_err(LoggingError::Backend)?;

    info!(
        "event=logging_start module=core status=ok version={} level={}",
        env!("CARGO_PKG_VERSION"),
        settings.level
    );

    Ok(ActiveLogger {
        settings: settings.clone(),
        _handle: handle,
    })
}

/// Returns the active settings, if logging was started.
pub fn logging_status() -> Option<LogSettings> {
    ACTIVE.get().map(|active| active.settings.clone())
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Records a new session and the group labels it was configured with.
pub fn log_session_open(groups: &GroupSet) {
    info!(
        "event=session_open module=session status=ok groups={}",
        groups.as_slice().join("|")
    );
}

/// Records the end of a session and how many contacts it discarded.
pub fn log_session_close(contacts: usize) {
    info!(
        "event=session_close module=session status=ok discarded_contacts={}",
        contacts
    );
}
