//! Excluded-path bookkeeping.
//!
//! Paths are canonicalized when they are registered and matched by raw byte
//! prefix against candidate entries. The prefix test is deliberately not
//! segment-aware: excluding `/a/foo` also excludes the sibling `/a/foobar`.

use crate::backup::result_error::result::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    paths: BTreeSet<PathBuf>,
}

impl ExclusionSet {
    /// Canonicalizes and registers a path. Fails if the path does not exist,
    /// leaving the set unchanged.
    pub fn insert<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let canonical = std::fs::canonicalize(path)?;
        self.paths.insert(canonical);
        Ok(())
    }

    pub fn is_excluded<P: AsRef<Path>>(&self, path: P) -> bool {
        let candidate = path.as_ref().as_os_str().as_encoded_bytes();
        self.paths
            .iter()
            .any(|excluded| candidate.starts_with(excluded.as_os_str().as_encoded_bytes()))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
