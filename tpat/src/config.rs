//! Configuration module for the tpa CLI.
//!
//! Settings come from an optional `tpa.toml`. Command-line flags override
//! whatever the file says.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TpaError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "tpa.toml";

/// Default extension of written token reports.
pub const DEFAULT_REPORT_EXTENSION: &str = "tpa";

/// How a source file is cut into scan units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// The whole file is one unit; strings may span lines.
    #[default]
    File,
    /// Every line is its own unit.
    Line,
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::File => f.write_str("file"),
            ScanMode::Line => f.write_str("line"),
        }
    }
}

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Scanning options.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Report writing options.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Scanning options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Unit size.
    #[serde(default)]
    pub mode: ScanMode,

    /// Number of files scanned in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: usize,
}

/// Report writing options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Directory for reports. Reports go next to their input when unset.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Extension given to report files.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Write one record per line instead of a single line.
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Keep error tokens in the report as `ERROR` records.
    #[serde(default = "default_true")]
    pub include_errors: bool,
}

fn default_true() -> bool {
    true
}

fn default_extension() -> String {
    DEFAULT_REPORT_EXTENSION.to_string()
}

/// Get the default number of parallel jobs based on CPU count.
fn default_parallel_jobs() -> usize {
    get_num_cpus().max(1)
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            mode: ScanMode::default(),
            jobs: default_parallel_jobs(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            extension: default_extension(),
            pretty: true,
            include_errors: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User configuration directory
    /// 3. `~/.config/tpa`
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TpaError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values that parse but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.scan.jobs == 0 {
            return Err(TpaError::Config("scan.jobs must be at least 1".to_string()));
        }
        let extension = self.report.extension.trim_start_matches('.');
        if extension.is_empty() || extension.contains(['/', '\\']) {
            return Err(TpaError::Config(format!(
                "report.extension is not a usable file extension: {:?}",
                self.report.extension
            )));
        }
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in the platform configuration directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("tpa").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("tpa").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_system_config)
            .or_else(Self::check_home_config)
    }
}
