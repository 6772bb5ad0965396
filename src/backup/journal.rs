//! Append-only error journal.
//!
//! Every rejected configuration input and every failed copy ends up here as
//! one plain-text line. The file is opened in append mode for each write and
//! closed again, so concurrent runs of the binary never hold it open.

use chrono::Local;
use derive_more::{Display, From};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, warn};

pub static DEFAULT_JOURNAL_FILE: &str = "backup_log.txt";

static TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Classification of a recorded failure.
///
/// The journal file itself stays a flat list of timestamped lines; the kind
/// only reaches the structured diagnostics stream.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Fault {
    /// A rejected source directory or exclusion path
    Config,
    /// A failure while mirroring one source tree
    Copy,
}

#[derive(Clone, Debug, From)]
pub struct Journal {
    path: PathBuf,
}

impl Default for Journal {
    fn default() -> Self {
        Journal::new(DEFAULT_JOURNAL_FILE)
    }
}

impl Journal {
    pub fn new<P: Into<PathBuf>>(path: P) -> Journal {
        Journal { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records one failure. A journal that cannot be written must not take
    /// the backup run down with it, so write errors only reach the
    /// diagnostics stream.
    pub fn record<M: std::fmt::Display>(&self, fault: Fault, message: M) {
        let message = message.to_string();
        warn!(fault = %fault, "{message}");
        if let Err(e) = self.append(&message) {
            error!("Appending to journal {:?} failed: {e}", self.path);
        }
    }

    fn append(&self, message: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}: {}", Local::now().format(TIME_FORMAT), message)
    }
}
