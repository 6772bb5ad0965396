use crate::backup::engine::BackupEngine;
use crate::backup::journal::Journal;
use crate::backup::result_error::result::Result;
use crate::backup::validate::validate_dir_exist_or_created;

use bon::Builder;
use getset::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// Declarative description of one backup run
///
/// Mirrors what the interactive menu collects: the destination root, the
/// ordered source list and the exclusion paths, plus an optional journal
/// location. Loaded from YAML by the binary's `--config` flag.
#[derive(Clone, Debug, Serialize, Deserialize, Validate, Builder, PartialEq, Eq, Getters)]
#[serde(deny_unknown_fields)]
#[getset(get = "pub")]
pub struct RunConfig {
    #[validate(custom(function = validate_dir_exist_or_created))]
    #[builder(into)]
    destination: PathBuf,
    #[serde(default)]
    #[builder(default)]
    sources: Vec<PathBuf>,
    #[serde(default)]
    #[builder(default)]
    exclusions: Vec<PathBuf>,
    #[serde(default)]
    log_file: Option<PathBuf>,
}

impl RunConfig {
    /// Lowers the description into a configured engine. Source and exclusion
    /// entries go through the same add operations as interactive input, so
    /// invalid ones are journaled and dropped rather than failing the run.
    pub fn build_engine(&self, default_journal: Journal) -> Result<BackupEngine> {
        let journal = self
            .log_file
            .clone()
            .map(Journal::new)
            .unwrap_or(default_journal);

        let mut engine = BackupEngine::new(&self.destination, journal)?;
        for source in &self.sources {
            engine.add_source(source);
        }
        for exclusion in &self.exclusions {
            engine.add_exclusion(exclusion);
        }

        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_config_from_yaml() {
        let yaml = "destination: /backup/root\nsources:\n  - /data/a\n  - /data/b\nexclusions:\n  - /data/a/tmp\n";
        let config: RunConfig = serde_yml::from_str(yaml).unwrap();

        assert_eq!(config.destination(), &PathBuf::from("/backup/root"));
        assert_eq!(config.sources().len(), 2);
        assert_eq!(config.exclusions().len(), 1);
        assert_eq!(config.log_file(), &None);
    }

    #[test]
    fn test_run_config_defaults_to_empty_lists() {
        let yaml = "destination: /backup/root\n";
        let config: RunConfig = serde_yml::from_str(yaml).unwrap();

        assert!(config.sources().is_empty());
        assert!(config.exclusions().is_empty());
    }

    #[test]
    fn test_run_config_survives_json_round_trip() {
        let config = RunConfig::builder()
            .destination("/backup/root")
            .sources(vec![PathBuf::from("/data/a"), PathBuf::from("/data/b")])
            .exclusions(vec![PathBuf::from("/data/a/tmp")])
            .build();

        let json = serde_json::to_string(&config).unwrap();
        let parsed: RunConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_run_config_rejects_unknown_fields() {
        let yaml = "destination: /backup/root\ncompression: xz\n";
        let result = serde_yml::from_str::<RunConfig>(yaml);

        assert!(result.is_err());
    }

    #[test]
    fn test_validation_creates_destination() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("backups/daily");

        let config = RunConfig::builder().destination(&destination).build();

        assert!(config.validate().is_ok());
        assert!(destination.is_dir());
    }

    #[test]
    fn test_validation_rejects_file_destination() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("occupied");
        std::fs::write(&file, "x").unwrap();

        let config = RunConfig::builder().destination(&file).build();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_engine_journals_invalid_entries() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source");
        std::fs::create_dir(&source).unwrap();
        let journal_file = temp_dir.path().join("journal.txt");

        let config = RunConfig::builder()
            .destination(temp_dir.path().join("destination"))
            .sources(vec![source.clone(), temp_dir.path().join("missing")])
            .exclusions(vec![temp_dir.path().join("also-missing")])
            .build();

        let engine = config.build_engine(Journal::new(&journal_file)).unwrap();

        assert_eq!(engine.sources(), &vec![source]);
        assert!(engine.exclusions().is_empty());
        let journal = std::fs::read_to_string(&journal_file).unwrap();
        assert_eq!(journal.lines().count(), 2);
    }

    #[test]
    fn test_build_engine_prefers_configured_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let configured = temp_dir.path().join("configured.txt");

        let yaml = format!(
            "destination: {:?}\nlog_file: {:?}\n",
            temp_dir.path().join("destination"),
            configured
        );
        let config: RunConfig = serde_yml::from_str(&yaml).unwrap();

        let engine = config
            .build_engine(Journal::new(temp_dir.path().join("default.txt")))
            .unwrap();

        assert_eq!(engine.journal().path(), configured.as_path());
    }
}
