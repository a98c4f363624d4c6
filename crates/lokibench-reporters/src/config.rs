//! Reporter configuration.
//!
//! Loaded from a JSON file when present, then overridden from the
//! environment.

use crate::ReporterError;
use crate::csv_reporter::CsvReporter;
use crate::json_reporter::JsonReporter;
use crate::reporter::Reporters;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides `report_dir`
pub const REPORT_DIR_ENV: &str = "LOKIBENCH_REPORT_DIR";
/// `true`/`false`, overrides `csv`
pub const CSV_ENABLED_ENV: &str = "LOKIBENCH_CSV_REPORTER";
/// `true`/`false`, overrides `json`
pub const JSON_ENABLED_ENV: &str = "LOKIBENCH_JSON_REPORTER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// Directory receiving all report files
    pub report_dir: PathBuf,
    /// Enable the per-measurement CSV reporter
    pub csv: bool,
    /// Enable the experiment JSON reporter
    pub json: bool,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            report_dir: PathBuf::from("./reports"),
            csv: true,
            json: true,
        }
    }
}

impl ReporterConfig {
    /// Parse a JSON configuration file; missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReporterError> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Like [`ReporterConfig::load`], falling back to defaults when the file
    /// is missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(ReporterError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Ignoring invalid reporter configuration"
                );
                Self::default()
            }
        }
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from `lookup`; unparsable flags are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(REPORT_DIR_ENV)
            && !dir.is_empty()
        {
            self.report_dir = PathBuf::from(dir);
        }

        if let Some(flag) = lookup(CSV_ENABLED_ENV)
            && let Ok(enabled) = flag.parse::<bool>()
        {
            self.csv = enabled;
        }

        if let Some(flag) = lookup(JSON_ENABLED_ENV)
            && let Ok(enabled) = flag.parse::<bool>()
        {
            self.json = enabled;
        }

        self
    }

    /// Check that the configured directory exists.
    pub fn validate(&self) -> Result<(), ReporterError> {
        if !self.report_dir.is_dir() {
            return Err(ReporterError::ConfigError(format!(
                "report directory {} does not exist",
                self.report_dir.display()
            )));
        }
        Ok(())
    }

    /// Instantiate the enabled reporters
    pub fn build(&self) -> Reporters {
        let mut reporters = Reporters::new();
        if self.csv {
            reporters.push(CsvReporter::new(&self.report_dir));
        }
        if self.json {
            reporters.push(JsonReporter::new(&self.report_dir));
        }
        reporters
    }
}
