//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/shortsmith/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/shortsmith/` (~/.config/shortsmith/)
//! - State/Logs: `$XDG_STATE_HOME/shortsmith/` (~/.local/state/shortsmith/)

use crate::error::{Error, Result};
use crate::types::ChannelProfile;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name prefix of the rotated log files
pub const LOG_FILE_PREFIX: &str = "shortsmith.log";

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Channel profile used when none is given on the command line
    #[serde(default)]
    pub profile: ChannelProfile,

    /// Planner behaviour
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Export destination
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Planner configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct PlannerConfig {
    /// Owner for the non-delegated tasks (defaults to the channel name)
    pub owner: Option<String>,
    /// Seed for reproducible runs
    pub seed: Option<u64>,
}

/// Export configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ExportConfig {
    /// Directory export files are written to (defaults to the working directory)
    pub dir: Option<PathBuf>,
}

impl ExportConfig {
    pub fn dir_or_cwd(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/shortsmith/config.toml` (~/.config/shortsmith/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("shortsmith").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/shortsmith/` (~/.local/state/shortsmith/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("shortsmith")
    }

    /// Returns today's log file path
    ///
    /// The daily appender suffixes the UTC date to [`LOG_FILE_PREFIX`]:
    /// `$XDG_STATE_HOME/shortsmith/shortsmith.log.YYYY-MM-DD`
    pub fn log_path() -> PathBuf {
        let today = chrono::Utc::now().format("%Y-%m-%d");
        Self::state_dir().join(format!("{}.{}", LOG_FILE_PREFIX, today))
    }
}

/// Load a standalone channel profile (a TOML table of profile fields).
///
/// Missing fields fall back to the stock profile.
pub fn load_profile(path: &Path) -> Result<ChannelProfile> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read profile {:?}: {}", path, e)))?;

    toml::from_str(&content).map_err(|e| Error::Config(format!("failed to parse profile: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.profile, ChannelProfile::default());
        assert!(config.planner.owner.is_none());
        assert!(config.planner.seed.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.export.dir_or_cwd(), PathBuf::from("."));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[profile]
channelName = "Budget Bites"
niche = "cheap weeknight dinners"
keywords = ["meal prep", "one pot"]

[planner]
owner = "Sam"
seed = 42

[export]
dir = "/tmp/plans"

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.profile.channel_name, "Budget Bites");
        assert_eq!(config.profile.keywords, vec!["meal prep", "one pot"]);
        // Unspecified profile fields keep the stock values
        assert_eq!(config.profile.cadence, "3 shorts per week");
        assert_eq!(config.planner.owner.as_deref(), Some("Sam"));
        assert_eq!(config.planner.seed, Some(42));
        assert_eq!(config.export.dir_or_cwd(), PathBuf::from("/tmp/plans"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.max_files, 5);
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[planner]\nseed = \"not a number\"").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_profile() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "channelName = \"Trail Notes\"\nkeywords = []").unwrap();

        let profile = load_profile(file.path()).unwrap();
        assert_eq!(profile.channel_name, "Trail Notes");
        assert!(profile.keywords.is_empty());
    }

    #[test]
    fn test_missing_profile_file() {
        let err = load_profile(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
