//! Configuration type definitions for TABFIX.
//!
//! These types are deserialized from the TOML config file. Every field has a
//! default, so an empty file (or no file) yields a working configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from `~/.tabfix/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TabfixConfig {
    /// Global hotkeys that open the overlay
    #[serde(default)]
    pub hotkey: HotkeyConfig,

    /// Overlay geometry and appearance
    #[serde(default)]
    pub overlay: OverlayConfig,

    /// Rules for leaving windows out of the list
    #[serde(default)]
    pub filter: FilterConfig,

    /// Notification-area icon
    #[serde(default)]
    pub tray: TrayConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Hotkey configuration.
///
/// Hotkeys are `+`-separated strings such as `ctrl+b` or `alt+shift+f2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Primary hotkey.
    /// Default: `ctrl+b`.
    #[serde(default = "super::defaults::default_trigger")]
    pub trigger: String,

    /// Optional second hotkey that opens the same overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate: Option<String>,
}

/// Overlay geometry and colours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Overlay width in pixels. Default: 1200.
    #[serde(default = "super::defaults::default_overlay_width")]
    pub width: u32,

    /// Height of one list row in pixels. Default: 40.
    #[serde(default = "super::defaults::default_row_height")]
    pub row_height: u32,

    /// Margin around the list in pixels. Default: 10.
    #[serde(default = "super::defaults::default_padding")]
    pub padding: u32,

    /// Icon edge length in pixels. Default: 32.
    #[serde(default = "super::defaults::default_icon_size")]
    pub icon_size: u32,

    /// Font height in pixels. Default: 32.
    #[serde(default = "super::defaults::default_font_size")]
    pub font_size: u32,

    /// Font face name. Default: Consolas.
    #[serde(default = "super::defaults::default_font_face")]
    pub font_face: String,

    /// Background colour as `#RRGGBB`. Default: `#051650`.
    #[serde(default = "super::defaults::default_background")]
    pub background: String,

    /// Text colour as `#RRGGBB`. Default: `#FFFFFF`.
    #[serde(default = "super::defaults::default_foreground")]
    pub foreground: String,

    /// Compose rows off-screen and copy them in one blit.
    /// Default: true. `false` draws straight to the window and may flicker.
    #[serde(default = "super::defaults::default_true")]
    pub double_buffered: bool,
}

/// Window exclusion rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Executable names never listed (case-insensitive).
    #[serde(default = "super::defaults::default_excluded_processes")]
    pub excluded_processes: Vec<String>,

    /// Window classes never listed (exact match).
    #[serde(default = "super::defaults::default_excluded_classes")]
    pub excluded_classes: Vec<String>,

    /// Frame class that hosts the settings app. Empty disables the rule.
    #[serde(default = "super::defaults::default_settings_frame_class")]
    pub settings_frame_class: String,

    /// Frame title of the settings app. Empty disables the rule.
    #[serde(default = "super::defaults::default_settings_frame_title")]
    pub settings_frame_title: String,

    /// Maximum number of listed windows (1..=1024). Default: 1024.
    #[serde(default = "super::defaults::default_capacity")]
    pub capacity: usize,
}

/// Notification-area icon configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrayConfig {
    /// Show a tray icon with an Exit item. Default: true.
    #[serde(default = "super::defaults::default_true")]
    pub enabled: bool,
}

/// Log output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Only emit errors.
    #[serde(default)]
    pub quiet: bool,

    /// Append JSON log lines to this file instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Parsed `#RRGGBB` colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pack as a Win32 `COLORREF` (0x00BBGGRR).
    pub fn to_colorref(self) -> u32 {
        u32::from(self.r) | (u32::from(self.g) << 8) | (u32::from(self.b) << 16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabfix_config_serialization() {
        let config = TabfixConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: TabfixConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_overlay_section_keeps_defaults() {
        let config: TabfixConfig = toml::from_str(
            r#"
[overlay]
width = 900
"#,
        )
        .unwrap();
        assert_eq!(config.overlay.width, 900);
        assert_eq!(config.overlay.row_height, 40);
        assert!(config.overlay.double_buffered);
    }

    #[test]
    fn test_rgb_to_colorref() {
        let rgb = Rgb {
            r: 0x05,
            g: 0x16,
            b: 0x50,
        };
        assert_eq!(rgb.to_colorref(), 0x0050_1605);
    }
}
