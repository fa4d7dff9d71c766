//! Configuration loading.
//!
//! The config file is `~/.tabfix/config.toml`, or the path in the
//! `TABFIX_CONFIG` environment variable when it is set.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::types::TabfixConfig;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "TABFIX_CONFIG";

/// Resolve the config file path.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    let home_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(home_dir.join(".tabfix").join("config.toml"))
}

/// Load and validate the user configuration.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or fails
/// validation. A missing file is not an error; defaults are returned.
pub fn load_config() -> Result<TabfixConfig, ConfigError> {
    let path = config_path()?;

    let config = match load_config_file(&path) {
        Ok(config) => config,
        Err(ConfigError::ConfigNotFound { path }) => {
            info!(event = "core.config.file_not_found", path = path);
            TabfixConfig::default()
        }
        Err(e) => return Err(e),
    };

    validate_config(&config)?;

    info!(event = "core.config.loaded", path = %path.display());
    Ok(config)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<TabfixConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load the configuration, falling back to defaults with a warning on error.
///
/// The overlay must start even when the config file is broken, so this
/// prints a warning to stderr and returns defaults instead of failing.
pub fn load_config_with_warning() -> TabfixConfig {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config: {}. Using defaults.", e);
            eprintln!("Tip: Check ~/.tabfix/config.toml (or $TABFIX_CONFIG) for syntax errors.");
            TabfixConfig::default()
        }
    }
}
