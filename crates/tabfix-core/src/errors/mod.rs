use std::error::Error;

/// Shared behaviour of every tabfix error enum.
pub trait TabfixError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found at '{path}'")]
    ConfigNotFound { path: String },

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid hotkey '{value}' in [hotkey].{field}: {message}")]
    InvalidHotkey {
        field: &'static str,
        value: String,
        message: String,
    },

    #[error("Invalid colour '{value}' in [overlay].{field}. Expected #RRGGBB")]
    InvalidColor { field: &'static str, value: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Could not determine home directory for config lookup")]
    NoHomeDirectory,

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl TabfixError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidHotkey { .. } => "CONFIG_INVALID_HOTKEY",
            ConfigError::InvalidColor { .. } => "CONFIG_INVALID_COLOR",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::NoHomeDirectory => "CONFIG_NO_HOME_DIRECTORY",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. }
                | ConfigError::InvalidHotkey { .. }
                | ConfigError::InvalidColor { .. }
                | ConfigError::InvalidConfiguration { .. }
        )
    }
}
