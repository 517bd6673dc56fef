//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.ghsearch/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::github::client::{DEFAULT_API_URL, default_user_agent};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GhsearchConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GithubConfig {
    pub api_url: Option<String>,
    pub user_agent: Option<String>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    pub debounce_ms: Option<u64>,
    pub scroll_threshold_rows: Option<u16>,
    pub reset_loading_on_query: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_SCROLL_THRESHOLD_ROWS: u16 = 3;
pub const DEFAULT_LOG_FILE: &str = "ghsearch.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_url: String,
    pub user_agent: String,
    pub per_page: Option<u32>,
    pub debounce_ms: u64,
    pub scroll_threshold_rows: u16,
    pub reset_loading_on_query: bool,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.ghsearch/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".ghsearch").join("config.toml"))
}

/// Load config from `~/.ghsearch/config.toml`.
pub fn load_config() -> Result<GhsearchConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            // Runs before the logger is set up
            eprintln!("Could not determine home directory, using default config");
            Ok(GhsearchConfig::default())
        }
    }
}

/// Load config from `path`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GhsearchConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<GhsearchConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(GhsearchConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GhsearchConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# ghsearch Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "ghsearch.log"           # Or set GHSEARCH_LOG_FILE env var
# log_level = "debug"                 # "off", "error", "warn", "info", "debug", "trace"

# [github]
# api_url = "https://api.github.com"  # Or GHSEARCH_API_URL / --api-url
# user_agent = "ghsearch/0.1.0"       # Or GHSEARCH_USER_AGENT
# per_page = 30                       # GitHub allows up to 100

# [search]
# debounce_ms = 300                   # Quiet time before typed text is searched
# scroll_threshold_rows = 3           # Rows from the end that trigger the next page
# reset_loading_on_query = true       # Clear the paging flag when a new query cancels a page fetch
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        eprintln!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_api_url` is from the `--api-url` flag (None = not specified).
pub fn resolve(config: &GhsearchConfig, cli_api_url: Option<&str>) -> ResolvedConfig {
    // API URL: CLI → env → config → default
    let api_url = cli_api_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("GHSEARCH_API_URL").ok())
        .or_else(|| config.github.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    // User agent: env → config → default
    let user_agent = std::env::var("GHSEARCH_USER_AGENT")
        .ok()
        .or_else(|| config.github.user_agent.clone())
        .unwrap_or_else(default_user_agent);

    // Log file: env → config → default
    let log_file = std::env::var("GHSEARCH_LOG_FILE")
        .ok()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        api_url,
        user_agent,
        per_page: config.github.per_page,
        debounce_ms: config.search.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS),
        scroll_threshold_rows: config
            .search
            .scroll_threshold_rows
            .unwrap_or(DEFAULT_SCROLL_THRESHOLD_ROWS),
        reset_loading_on_query: config.search.reset_loading_on_query.unwrap_or(true),
        log_file: PathBuf::from(log_file),
        log_level: resolve_log_level(config.general.log_level.as_deref()),
    }
}

/// Parses a level name, falling back to the default on anything unrecognized.
fn resolve_log_level(level: Option<&str>) -> LevelFilter {
    match level {
        Some(name) => name.parse().unwrap_or_else(|_| {
            eprintln!("Unknown log_level {:?}, using {}", name, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    }
}
