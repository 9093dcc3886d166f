//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sommelier/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::content::Content;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SommelierConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub simulator: SimulatorConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Content file, absolute or relative to `~/.sommelier/`.
    pub content_file: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SimulatorConfig {
    pub reply_delay_ms: Option<u64>,
    pub reply_text: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;
pub const DEFAULT_REPLY_TEXT: &str = "Vielen Dank für Ihre Nachricht! \
    Ich suche gerade passende Weine für Sie heraus.";
pub const DEFAULT_LOG_FILE: &str = "sommelier.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub reply_delay: Duration,
    pub reply_text: String,
    pub content: Content,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub reply_delay_ms: Option<u64>,
    pub content_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid content: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.sommelier/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sommelier"))
}

/// Returns the path to `~/.sommelier/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `path`, or from `~/.sommelier/config.toml` when `None`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `SommelierConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<SommelierConfig, ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SommelierConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SommelierConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: SommelierConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Read and validate a content file.
pub fn load_content(path: &Path) -> Result<Content, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let content = Content::from_toml_str(&contents)?;
    info!(
        "Loaded content from {} ({} seed messages, {} cellar slots)",
        path.display(),
        content.seed.len(),
        content.cellar.len()
    );
    Ok(content)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Sommelier Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# content_file = "content.toml"      # Seed chat, taste profile, cellar (relative to ~/.sommelier/)
# log_file = "sommelier.log"

# [simulator]
# reply_delay_ms = 1000               # Or set SOMMELIER_REPLY_DELAY_MS
# reply_text = "Vielen Dank für Ihre Nachricht!"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// A content file named on the command line must load; one named in the
/// config file or environment falls back to the built-in content on error.
pub fn resolve(config: &SommelierConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, process_env)
}

/// Same as [`resolve`], reading `SOMMELIER_*` variables through `env`.
pub fn resolve_with_env(
    config: &SommelierConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Delay: CLI → env → config → default
    let reply_delay_ms = cli
        .reply_delay_ms
        .or_else(|| env_u64(&env, "SOMMELIER_REPLY_DELAY_MS"))
        .or(config.simulator.reply_delay_ms)
        .unwrap_or(DEFAULT_REPLY_DELAY_MS);

    // Reply text: env → config → default
    let reply_text = env("SOMMELIER_REPLY_TEXT")
        .or_else(|| config.simulator.reply_text.clone())
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_REPLY_TEXT.to_string());

    let content = match &cli.content_file {
        Some(path) => load_content(path)?,
        None => resolve_content(config, &env),
    };

    Ok(ResolvedConfig {
        reply_delay: Duration::from_millis(reply_delay_ms),
        reply_text,
        content,
    })
}

/// Log file: env → config → default.
pub fn resolve_log_file(config: &SommelierConfig) -> String {
    resolve_log_file_with_env(config, process_env)
}

pub fn resolve_log_file_with_env(
    config: &SommelierConfig,
    env: impl Fn(&str) -> Option<String>,
) -> String {
    env("SOMMELIER_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_u64(env: impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}

/// Content: env file → config file → built-in.
fn resolve_content(config: &SommelierConfig, env: impl Fn(&str) -> Option<String>) -> Content {
    let Some(file) = env("SOMMELIER_CONTENT_FILE").or_else(|| config.general.content_file.clone())
    else {
        return Content::default();
    };

    let path = content_path(&file);
    match load_content(&path) {
        Ok(content) => content,
        Err(e) => {
            warn!(
                "Failed to load content file {}: {}, using built-in content",
                path.display(),
                e
            );
            Content::default()
        }
    }
}

/// Relative content paths are resolved against `~/.sommelier/`.
fn content_path(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    config_dir().map(|d| d.join(&path)).unwrap_or(path)
}
