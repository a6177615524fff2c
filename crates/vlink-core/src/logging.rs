//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! Raw transport failures and upstream bodies are logged here rather than
//! shown to the user.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, EitherWriter};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Covers both the library and the binary.
const DEFAULT_FILTER: &str = "info,vlink=debug,vlink_core=debug";

/// Appends to the log file; a write handle that cannot be cloned goes to stderr.
struct LogFile(fs::File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = EitherWriter<fs::File, io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(f) => EitherWriter::A(f),
            Err(_) => EitherWriter::B(io::stderr()),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn install(writer: BoxMakeWriter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))
}

/// Path of the log file: `~/.local/state/vlink/vlink.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vlink")?;
    Ok(xdg_dirs.get_state_home().join("vlink.log"))
}

/// Logs to [`log_file_path`] and returns the path.
///
/// Errors (unwritable state dir, subscriber already set) are returned so the
/// caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("create log dir: {}", dir.display()))?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file: {}", path.display()))?;

    install(BoxMakeWriter::new(LogFile(file)))?;
    tracing::info!("vlink logging initialized at {}", path.display());
    Ok(path)
}

/// Logs to stderr only. A subscriber that is already installed is left alone.
pub fn init_logging_stderr() {
    let _ = install(BoxMakeWriter::new(io::stderr));
}
