//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.shelf/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{Level, LevelFilter, log};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::library::BookRecord;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub books: Vec<BookEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FormConfig {
    pub title_placeholder: Option<String>,
    pub author_placeholder: Option<String>,
    pub title_max_length: Option<usize>,
    pub author_max_length: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookEntry {
    pub title: String,
    pub author: String,
}

/// Values taken from CLI flags (None / false = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    /// Start with an empty library even if `[[books]]` are configured.
    pub empty: bool,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE_MAX_LENGTH: usize = 32;
pub const DEFAULT_AUTHOR_MAX_LENGTH: usize = 64;
pub const DEFAULT_TITLE_PLACEHOLDER: &str = "Title";
pub const DEFAULT_AUTHOR_PLACEHOLDER: &str = "Author";
pub const DEFAULT_LOG_FILE: &str = "shelf.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub title_placeholder: String,
    pub author_placeholder: String,
    pub title_max_length: usize,
    pub author_max_length: usize,
    pub books: Vec<BookRecord>,
    /// Messages raised while resolving, see `ConfigNotice`.
    pub notices: Vec<ConfigNotice>,
}

// ============================================================================
// Notices
// ============================================================================

/// A log line raised while loading or resolving config.
///
/// Config is read before the file logger exists (the log file path is a
/// config value), so these are held and emitted once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNotice {
    pub level: Level,
    pub message: String,
}

impl ConfigNotice {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn emit(&self) {
        log!(self.level, "{}", self.message);
    }
}

/// A parsed config file plus what happened while reading it.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: ShelfConfig,
    pub notices: Vec<ConfigNotice>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.shelf/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".shelf").join("config.toml"))
}

/// Load config from `~/.shelf/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ShelfConfig::default()`.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(LoadedConfig {
            config: ShelfConfig::default(),
            notices: vec![ConfigNotice::new(
                Level::Warn,
                "Could not determine home directory, using default config",
            )],
        }),
    }
}

/// Load config from an explicit path. Same first-run behavior as `load_config`.
pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        let mut notices = vec![ConfigNotice::new(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        )];
        if let Err(e) = generate_default_config(path) {
            notices.push(ConfigNotice::new(
                Level::Warn,
                format!("Failed to write default config: {}", e),
            ));
        }
        return Ok(LoadedConfig {
            config: ShelfConfig::default(),
            notices,
        });
    }

    let contents = fs::read_to_string(path)?;
    let config: ShelfConfig = toml::from_str(&contents)?;
    let notices = vec![
        ConfigNotice::new(Level::Info, format!("Loaded config from {}", path.display())),
        ConfigNotice::new(Level::Debug, format!("Config: {:?}", config)),
    ];
    Ok(LoadedConfig { config, notices })
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Shelf Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# log_file = "shelf.log"             # Or set SHELF_LOG_FILE env var

# [form]
# title_placeholder = "Title"
# author_placeholder = "Author"
# title_max_length = 32
# author_max_length = 64

# Books the library starts with (newest first).
# [[books]]
# title = "Dune"
# author = "Frank Herbert"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG_CONTENT)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ShelfConfig, cli: &CliOverrides) -> ResolvedConfig {
    let mut notices = Vec::new();

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("SHELF_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .map(|level| parse_level(&level, &mut notices))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: env → config → default
    let log_file = std::env::var("SHELF_LOG_FILE")
        .ok()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let books = if cli.empty {
        Vec::new()
    } else {
        seed_books(&config.books, &mut notices)
    };

    ResolvedConfig {
        log_level,
        log_file: PathBuf::from(log_file),
        title_placeholder: config
            .form
            .title_placeholder
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE_PLACEHOLDER.to_string()),
        author_placeholder: config
            .form
            .author_placeholder
            .clone()
            .unwrap_or_else(|| DEFAULT_AUTHOR_PLACEHOLDER.to_string()),
        title_max_length: positive_or(
            config.form.title_max_length,
            DEFAULT_TITLE_MAX_LENGTH,
            &mut notices,
        ),
        author_max_length: positive_or(
            config.form.author_max_length,
            DEFAULT_AUTHOR_MAX_LENGTH,
            &mut notices,
        ),
        books,
        notices,
    }
}

fn parse_level(level: &str, notices: &mut Vec<ConfigNotice>) -> LevelFilter {
    level.parse().unwrap_or_else(|_| {
        notices.push(ConfigNotice::new(
            Level::Warn,
            format!("Unknown log level {:?}, using {}", level, DEFAULT_LOG_LEVEL),
        ));
        DEFAULT_LOG_LEVEL
    })
}

fn positive_or(value: Option<usize>, default: usize, notices: &mut Vec<ConfigNotice>) -> usize {
    match value {
        Some(0) => {
            notices.push(ConfigNotice::new(
                Level::Warn,
                format!("Max length must be positive, using {}", default),
            ));
            default
        }
        Some(n) => n,
        None => default,
    }
}

/// Turn `[[books]]` entries into records, skipping incomplete ones.
fn seed_books(entries: &[BookEntry], notices: &mut Vec<ConfigNotice>) -> Vec<BookRecord> {
    entries
        .iter()
        .filter_map(|entry| {
            let record = BookRecord::new(entry.title.trim(), entry.author.trim());
            if record.is_complete() {
                Some(record)
            } else {
                notices.push(ConfigNotice::new(
                    Level::Warn,
                    format!("Skipping incomplete seed book: {:?}", entry),
                ));
                None
            }
        })
        .collect()
}
