//! The backup engine.
//!
//! Owns the destination root, the ordered source list, the exclusion set and
//! the journal. Construction creates the destination tree and is the only
//! fatal path; everything later is journaled and survived.

use crate::backup::exclusion::ExclusionSet;
use crate::backup::function_path;
use crate::backup::journal::{Fault, Journal};
use crate::backup::result_error::error::Error;
use crate::backup::result_error::result::{collect_faults, Result};
use crate::backup::result_error::{WithFnContext, WithMsg};
use crate::backup::walk::{CopyEntryIterable, WalkdirSource};

use function_name::named;
use getset::Getters;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Getters)]
#[getset(get = "pub")]
pub struct BackupEngine {
    destination: PathBuf,
    sources: Vec<PathBuf>,
    exclusions: ExclusionSet,
    #[getset(skip)]
    journal: Journal,
}

impl BackupEngine {
    /// Binds an engine to a destination root, creating the directory and any
    /// missing ancestors. A destination that cannot be created is fatal and
    /// no engine is returned.
    pub fn new<P: Into<PathBuf>>(destination: P, journal: Journal) -> Result<BackupEngine> {
        let destination = destination.into();
        fs::create_dir_all(&destination)
            .map_err(Error::from)
            .with_msg(format!(
                "Cannot create destination directory {:?}",
                destination
            ))?;

        Ok(BackupEngine {
            destination,
            sources: Vec::new(),
            exclusions: ExclusionSet::default(),
            journal,
        })
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Appends a directory to the source list. A path that does not exist or
    /// is not a directory is journaled and not stored.
    pub fn add_source<P: Into<PathBuf>>(&mut self, path: P) -> bool {
        let path = path.into();
        if path.is_dir() {
            self.sources.push(path);
            true
        } else {
            self.journal.record(
                Fault::Config,
                format!("Directory does not exist: {}", path.display()),
            );
            false
        }
    }

    /// Registers an exclusion path. A path that does not exist is journaled
    /// and the set stays unchanged.
    pub fn add_exclusion<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let path = path.as_ref();
        if self.exclusions.insert(path).is_ok() {
            true
        } else {
            self.journal.record(
                Fault::Config,
                format!("Exclusion path does not exist: {}", path.display()),
            );
            false
        }
    }

    /// Mirrors every source into the destination, in insertion order.
    ///
    /// A failure while copying one source tree is journaled and the
    /// remaining sources are still attempted. The aggregated faults are
    /// returned for callers that want to inspect partial failure; the run
    /// itself always completes.
    #[named]
    pub fn run(&self) -> Option<Error> {
        let mut faults = Vec::new();
        for source in &self.sources {
            if let Err(e) = self
                .copy_tree(source)
                .with_fn_context(source.clone(), function_path!())
            {
                self.journal.record(Fault::Copy, &e);
                faults.push(e);
            }
        }

        info!(
            "Backup run finished, {} of {} sources failed",
            faults.len(),
            self.sources.len()
        );
        collect_faults(faults).err()
    }

    fn copy_tree(&self, source: &Path) -> Result<()> {
        let walk = WalkdirSource::builder()
            .src_dir(source)
            .dst_dir(&self.destination)
            .build();

        for entry in walk.copy_entry_iterator()? {
            let entry = entry?;
            if self.exclusions.is_excluded(&entry.src) {
                debug!("Skipping excluded entry {:?}", entry.src);
                continue;
            }
            if entry.is_dir {
                fs::create_dir_all(&entry.dst)
                    .map_err(Error::from)
                    .with_msg(format!("Cannot create directory {:?}", entry.dst))?;
            } else {
                fs::copy(&entry.src, &entry.dst)
                    .map_err(Error::from)
                    .with_msg(format!("Copying {:?} to {:?} failed", entry.src, entry.dst))?;
            }
        }

        Ok(())
    }
}
