//! Tracing setup: append to `phishcheck.log` in the XDG state dir, or write
//! to stderr when that file cannot be opened.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,phishcheck_core=debug,phishcheck_cli=debug";

/// Where log lines end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Filter from a `RUST_LOG`-style value; unset or unparsable values fall back
/// to [`DEFAULT_FILTER`].
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file() -> Result<(PathBuf, File)> {
    let state_dir = xdg::BaseDirectories::with_prefix("phishcheck")?.get_state_home();
    fs::create_dir_all(&state_dir)?;
    let path = state_dir.join("phishcheck.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Install the global subscriber. Never fails: an unwritable state dir sends
/// logs to stderr instead.
pub fn init() -> LogTarget {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = filter_from(rust_log.as_deref());
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false);

    match open_log_file() {
        Ok((path, file)) => {
            let _ = builder.with_writer(Mutex::new(file)).try_init();
            LogTarget::File(path)
        }
        Err(e) => {
            let _ = builder.with_writer(std::io::stderr).try_init();
            tracing::warn!("log file unavailable, using stderr: {:#}", e);
            LogTarget::Stderr
        }
    }
}
