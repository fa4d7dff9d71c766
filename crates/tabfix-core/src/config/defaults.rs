//! Default implementations for configuration types.
//!
//! This module contains all `Default` implementations and helper functions
//! for providing default values in serde deserialization.

use crate::config::types::{FilterConfig, HotkeyConfig, OverlayConfig, TrayConfig};
use crate::window::MAX_SNAPSHOT_WINDOWS;

pub fn default_trigger() -> String {
    "ctrl+b".to_string()
}

pub fn default_overlay_width() -> u32 {
    1200
}

pub fn default_row_height() -> u32 {
    40
}

pub fn default_padding() -> u32 {
    10
}

pub fn default_icon_size() -> u32 {
    32
}

pub fn default_font_size() -> u32 {
    32
}

pub fn default_font_face() -> String {
    "Consolas".to_string()
}

pub fn default_background() -> String {
    "#051650".to_string()
}

pub fn default_foreground() -> String {
    "#FFFFFF".to_string()
}

pub fn default_true() -> bool {
    true
}

/// The Windows settings app runs as `SystemSettings.exe`.
pub fn default_excluded_processes() -> Vec<String> {
    vec!["SystemSettings.exe".to_string()]
}

/// `Progman` is the desktop shell window.
pub fn default_excluded_classes() -> Vec<String> {
    vec!["Progman".to_string()]
}

pub fn default_settings_frame_class() -> String {
    "ApplicationFrameWindow".to_string()
}

pub fn default_settings_frame_title() -> String {
    "Settings".to_string()
}

pub fn default_capacity() -> usize {
    MAX_SNAPSHOT_WINDOWS
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
            alternate: None,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            width: default_overlay_width(),
            row_height: default_row_height(),
            padding: default_padding(),
            icon_size: default_icon_size(),
            font_size: default_font_size(),
            font_face: default_font_face(),
            background: default_background(),
            foreground: default_foreground(),
            double_buffered: true,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            excluded_processes: default_excluded_processes(),
            excluded_classes: default_excluded_classes(),
            settings_frame_class: default_settings_frame_class(),
            settings_frame_title: default_settings_frame_title(),
            capacity: default_capacity(),
        }
    }
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::TabfixConfig;

    #[test]
    fn test_serde_defaults_match_default_impls() {
        let parsed: TabfixConfig = toml::from_str("").unwrap();
        assert_eq!(parsed, TabfixConfig::default());
    }

    #[test]
    fn test_filter_defaults() {
        let filter = FilterConfig::default();
        assert_eq!(filter.excluded_processes, vec!["SystemSettings.exe"]);
        assert_eq!(filter.excluded_classes, vec!["Progman"]);
        assert_eq!(filter.capacity, 1024);
    }

    #[test]
    fn test_hotkey_defaults() {
        let hotkey = HotkeyConfig::default();
        assert_eq!(hotkey.trigger, "ctrl+b");
        assert!(hotkey.alternate.is_none());
    }
}
