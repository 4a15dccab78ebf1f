//! Tracing output for a CRASHCourse session.
//!
//! Every launch logs to the terminal and to its own file in
//! `.crashcourse/logs`, named after the launch time. The ten most recent
//! session files are kept; anything older is deleted at startup.

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::OnceLock,
    time::SystemTime,
};

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs::{self, AppDirError};

const KEPT_SESSION_LOGS: usize = 10;
const SESSION_LOG_PREFIX: &str = "crashcourse";
/// Filter used when `RUST_LOG` is unset; quiets the HTTP and windowing crates.
const DEFAULT_FILTER: &str = "info,ureq=warn,eframe=warn,egui_glow=warn";

static FILE_WRITER_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static SESSION_LOG: OnceLock<PathBuf> = OnceLock::new();

/// Reasons the session log could not be set up.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Cannot place session logs: no config directory on this system")]
    NoDataDir,
    #[error("Cannot create logs folder {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot list old session logs in {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot delete old session log {path}: {source}")]
    RemoveFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot build a session log name from the launch time: {0}")]
    FormatTime(time::error::Format),
    #[error("Another tracing subscriber is already installed: {0}")]
    SetGlobal(tracing::subscriber::SetGlobalDefaultError),
    #[error("Cannot open session log {path}: {source}")]
    CreateLogFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Start logging for this session and return the session log path.
///
/// Repeat calls return the path chosen by the first one. On error nothing is
/// installed and the caller keeps running without a log file.
pub fn init() -> Result<PathBuf, LoggingError> {
    if let Some(path) = SESSION_LOG.get() {
        return Ok(path.clone());
    }

    let dir = app_dirs::logs_dir().map_err(LoggingError::from)?;
    let file_name = session_log_name(launch_time())?;
    let path = dir.join(&file_name);
    touch(&path)?;
    prune_old_logs(&dir, KEPT_SESSION_LOGS)?;

    let (file_writer, guard) = tracing_appender::non_blocking(rolling::never(&dir, file_name));
    let timer = local_timer();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_timer(timer.clone())
                .with_writer(std::io::stdout),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        );
    tracing::subscriber::set_global_default(subscriber).map_err(LoggingError::SetGlobal)?;
    let _ = FILE_WRITER_GUARD.set(guard);
    let _ = SESSION_LOG.set(path.clone());

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %path.display(),
        "CRASHCourse session started"
    );
    Ok(path)
}

impl From<AppDirError> for LoggingError {
    fn from(error: AppDirError) -> Self {
        match error {
            AppDirError::NoBaseDir => LoggingError::NoDataDir,
            AppDirError::CreateDir { path, source } => LoggingError::CreateDir { path, source },
        }
    }
}

fn touch(path: &Path) -> Result<(), LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(drop)
        .map_err(|source| LoggingError::CreateLogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Delete the oldest session logs so at most `keep` remain. Files that do not
/// look like session logs are left alone.
fn prune_old_logs(dir: &Path, keep: usize) -> Result<(), LoggingError> {
    let listing = fs::read_dir(dir).map_err(|source| LoggingError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut sessions: Vec<(SystemTime, PathBuf)> = listing
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_file()))
        .map(|entry| entry.path())
        .filter(|path| is_session_log(path))
        .map(|path| {
            let modified = fs::metadata(&path)
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, path)
        })
        .collect();

    let excess = sessions.len().saturating_sub(keep);
    sessions.sort_by_key(|(modified, _)| *modified);
    for (_, path) in sessions.into_iter().take(excess) {
        fs::remove_file(&path).map_err(|source| LoggingError::RemoveFile { path, source })?;
    }
    Ok(())
}

fn is_session_log(path: &Path) -> bool {
    let name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");
    name.starts_with(SESSION_LOG_PREFIX) && name.ends_with(".log")
}

fn session_log_name(launched: OffsetDateTime) -> Result<String, LoggingError> {
    const STAMP: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    let stamp = launched.format(STAMP).map_err(LoggingError::FormatTime)?;
    Ok(format!("{SESSION_LOG_PREFIX}_{stamp}.log"))
}

fn local_timer() -> fmt::time::OffsetTime<time::format_description::BorrowedFormatItem<'static>> {
    const LINE_STAMP: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    fmt::time::OffsetTime::new(offset, LINE_STAMP.into())
}

fn launch_time() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
