//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sql-helper.toml` in current directory
//! 4. `~/.config/sql-helper/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [rules]
//! disabled = ["SQL002"]
//!
//! [rules.severity]
//! SQL006 = "warning"
//!
//! [editor]
//! debounce_ms = 500
//!
//! [keywords.extra]
//! SLECT = "SELECT"
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQL_HELPER_DEBOUNCE_MS` | Quiet period before live analysis runs |

use std::{
    collections::HashMap,
    env, fs,
    path::{Path, PathBuf},
    time::Duration
};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    error::{AppResult, config_error},
    keywords::KeywordCorrector
};

/// Default quiet period between the last edit and the analysis run
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub rules:    RulesConfig,
    #[serde(default)]
    pub editor:   EditorConfig,
    #[serde(default)]
    pub keywords: KeywordsConfig
}

/// Rules configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RulesConfig {
    /// Disabled check IDs
    #[serde(default)]
    pub disabled: Vec<String>,
    /// Severity overrides (check_id -> severity)
    #[serde(default)]
    pub severity: HashMap<String, String>
}

/// Live editing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS
        }
    }
}

impl EditorConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// Additional keyword misspellings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct KeywordsConfig {
    /// Misspelling -> correct keyword, matched case-insensitively
    #[serde(default)]
    pub extra: IndexMap<String, String>
}

impl KeywordsConfig {
    /// Built-in dictionary extended with the configured entries
    pub fn corrector(&self) -> KeywordCorrector {
        KeywordCorrector::with_extra(
            self.extra
                .iter()
                .map(|(wrong, right)| (wrong.as_str(), right.as_str()))
        )
    }
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.sql-helper.toml)
    /// 3. Config file in home directory (~/.config/sql-helper/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-helper")
                .join("config.toml");
            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        // Local config replaces the home config entirely
        let local_config = PathBuf::from(".sql-helper.toml");
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        Ok(config.with_env())
    }

    /// Parse a single TOML config file
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }

    /// Apply environment variable overrides
    ///
    /// An unparsable value is logged and ignored: only `live` debounces, and
    /// it validates the same variable through its `--debounce-ms` flag.
    pub fn with_env(self) -> Self {
        match env::var("SQL_HELPER_DEBOUNCE_MS") {
            Ok(value) => self.with_debounce_override(&value),
            Err(_) => self
        }
    }

    fn with_debounce_override(mut self, value: &str) -> Self {
        match value.trim().parse() {
            Ok(ms) => self.editor.debounce_ms = ms,
            Err(_) => tracing::warn!(
                value = %value,
                "ignoring SQL_HELPER_DEBOUNCE_MS, expected milliseconds"
            )
        }
        self
    }
}
