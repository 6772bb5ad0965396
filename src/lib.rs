//! # treemirror
//!
//! A directory backup tool that mirrors source trees into a destination
//! directory while honoring a set of excluded paths.
//!
//! ## Features
//!
//! - **Multiple Sources**: Back up any number of directories in one run
//! - **Path Exclusions**: Skip entries under registered exclusion paths
//! - **Unconditional Overwrite**: Destination files always match the source
//! - **Error Journal**: Failures are appended to a plain-text log file and
//!   never abort the remaining sources
//! - **Interactive or Declarative**: Drive it from a menu on stdin or from a
//!   YAML run description
//!
//! ## Quick Start
//!
//! ```no_run
//! use treemirror::backup::engine::BackupEngine;
//! use treemirror::backup::journal::Journal;
//!
//! let mut engine = BackupEngine::new("/backup/root", Journal::default())?;
//! engine.add_source("/data/projects");
//! engine.add_exclusion("/data/projects/target");
//! engine.run();
//! # Ok::<(), treemirror::backup::result_error::error::Error>(())
//! ```

pub mod backup;
