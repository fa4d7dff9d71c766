//! # Configuration System
//!
//! TOML configuration for the TABFIX overlay.
//!
//! ## Location
//!
//! Configuration is read from `~/.tabfix/config.toml`. Setting the
//! `TABFIX_CONFIG` environment variable points at a different file. A missing
//! file is not an error; built-in defaults apply.
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.tabfix/config.toml
//! [hotkey]
//! trigger = "ctrl+b"
//! alternate = "alt+q"
//!
//! [overlay]
//! width = 1200
//! row_height = 40
//! background = "#051650"
//!
//! [filter]
//! excluded_processes = ["SystemSettings.exe", "TextInputHost.exe"]
//!
//! [tray]
//! enabled = true
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use tabfix_core::config::load_config;
//!
//! fn example() -> Result<(), tabfix_core::config::ConfigError> {
//!     let config = load_config()?;
//!     let trigger = config.hotkey.trigger_hotkey();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use crate::errors::ConfigError;
pub use loading::{CONFIG_PATH_ENV, config_path, load_config, load_config_with_warning};
pub use types::{
    FilterConfig, HotkeyConfig, LoggingConfig, OverlayConfig, Rgb, TabfixConfig, TrayConfig,
};
pub use validation::{parse_color, validate_config};
