use crate::backup::function_path;
use crate::backup::result_error::error::Error;
use crate::backup::result_error::result::Result;
use crate::backup::result_error::WithMsg;

use bon::Builder;
use dyn_iter::{DynIter, IntoDynIterator};
use function_name::named;
use getset::Getters;
use walkdir::{DirEntry, WalkDir};

use std::path::{Path, PathBuf};

/// Enumerates one source directory for mirroring
///
/// Recursively walks `src_dir` and yields one copy entry per filesystem
/// entry below it, with the destination computed by re-rooting the
/// source-relative path under `dst_dir`.
#[derive(Clone, Debug, Builder, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct WalkdirSource {
    #[builder(into)]
    src_dir: PathBuf,
    #[builder(into)]
    dst_dir: PathBuf,
}

/// A single filesystem entry scheduled for copying
#[derive(Debug, PartialEq, Eq)]
pub struct CopyEntry {
    /// Absolute path of the entry under the source tree
    pub src: PathBuf,
    /// Mirrored path under the destination root
    pub dst: PathBuf,
    /// Directories are created at the destination, everything else is copied
    pub is_dir: bool,
}

/// Trait for producing the copy entries of one source
///
/// Yields `Result` items so that per-entry traversal errors reach the
/// consumer, which decides how far the failure propagates.
pub trait CopyEntryIterable {
    fn copy_entry_iterator<'a>(&self) -> Result<DynIter<'a, Result<CopyEntry>>>;
}

impl CopyEntryIterable for WalkdirSource {
    #[named]
    fn copy_entry_iterator<'a>(&self) -> Result<DynIter<'a, Result<CopyEntry>>> {
        // Canonicalizing up front keeps entry paths comparable with the
        // canonicalized exclusion set and rejects missing sources.
        let src_root = std::fs::canonicalize(&self.src_dir)
            .map_err(Error::from)
            .with_msg(format!("Cannot resolve source directory {:?}", self.src_dir))?;
        if !src_root.is_dir() {
            tracing::error!(
                "Source directory does not exist or is not a directory: {:?}",
                self.src_dir
            );
            return Err(Error::from(std::io::Error::other(
                "src_dir is not a directory",
            )));
        }

        tracing::info!("Starting directory scan: {:?}", src_root);

        let dst_root = self.dst_dir.to_path_buf();
        let walker = WalkDir::new(src_root.clone()).min_depth(1);

        let entries = walker
            .into_iter()
            .map(move |res| match res {
                Ok(de) => process_dir_entry(de, &src_root, &dst_root),
                Err(e) => Err(e.into()),
            })
            .map(move |res| res.with_msg(function_path!()));

        Ok(entries.into_dyn_iter())
    }
}

fn process_dir_entry<P1: AsRef<Path>, P2: AsRef<Path>>(
    de: DirEntry,
    src_root: P1,
    dst_root: P2,
) -> Result<CopyEntry> {
    let is_dir = de.file_type().is_dir();
    let src = de.into_path();
    let stripped = src.strip_prefix(src_root.as_ref()).map_err(|e| {
        Error::from(e).with_msg(format!(
            "Stripping {:?} from {:?} failed",
            src_root.as_ref(),
            src
        ))
    })?;
    let dst = dst_root.as_ref().join(stripped);
    tracing::trace!("Scheduling entry: {:?} -> {:?}", src, dst);

    Ok(CopyEntry { src, dst, is_dir })
}
