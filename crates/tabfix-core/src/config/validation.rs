//! Configuration validation.

use crate::config::types::{HotkeyConfig, OverlayConfig, Rgb, TabfixConfig};
use crate::errors::ConfigError;
use crate::hotkey::{Hotkey, HotkeyError, parse_hotkey};
use crate::window::MAX_SNAPSHOT_WINDOWS;

/// Largest accepted overlay dimension, in pixels.
pub const MAX_GEOMETRY: u32 = 10_000;

/// Parse a `#RRGGBB` colour string.
pub fn parse_color(value: &str) -> Option<Rgb> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

impl HotkeyConfig {
    /// Parse the primary hotkey.
    pub fn trigger_hotkey(&self) -> Result<Hotkey, HotkeyError> {
        parse_hotkey(&self.trigger)
    }

    /// Parse the alternate hotkey, if one is configured.
    pub fn alternate_hotkey(&self) -> Option<Result<Hotkey, HotkeyError>> {
        self.alternate.as_deref().map(parse_hotkey)
    }
}

impl OverlayConfig {
    /// Background colour, falling back to the default on a bad value.
    pub fn background_rgb(&self) -> Rgb {
        parse_color(&self.background).unwrap_or(Rgb {
            r: 0x05,
            g: 0x16,
            b: 0x50,
        })
    }

    /// Text colour, falling back to white on a bad value.
    pub fn foreground_rgb(&self) -> Rgb {
        parse_color(&self.foreground).unwrap_or(Rgb {
            r: 0xFF,
            g: 0xFF,
            b: 0xFF,
        })
    }
}

/// Validate the configuration.
///
/// Checks that hotkeys parse, geometry is within `1..=MAX_GEOMETRY`, colours are `#RRGGBB`
/// and the capacity is within the snapshot limit.
pub fn validate_config(config: &TabfixConfig) -> Result<(), ConfigError> {
    config
        .hotkey
        .trigger_hotkey()
        .map_err(|e| ConfigError::InvalidHotkey {
            field: "trigger",
            value: config.hotkey.trigger.clone(),
            message: e.to_string(),
        })?;

    if let Some(Err(e)) = config.hotkey.alternate_hotkey() {
        return Err(ConfigError::InvalidHotkey {
            field: "alternate",
            value: config.hotkey.alternate.clone().unwrap_or_default(),
            message: e.to_string(),
        });
    }

    let overlay = &config.overlay;
    for (field, value) in [
        ("width", overlay.width),
        ("row_height", overlay.row_height),
        ("icon_size", overlay.icon_size),
        ("font_size", overlay.font_size),
    ] {
        if value == 0 || value > MAX_GEOMETRY {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "[overlay].{} must be between 1 and {}, got {}",
                    field, MAX_GEOMETRY, value
                ),
            });
        }
    }

    if overlay.padding > MAX_GEOMETRY {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "[overlay].padding must be at most {}, got {}",
                MAX_GEOMETRY, overlay.padding
            ),
        });
    }

    for (field, value) in [
        ("background", &overlay.background),
        ("foreground", &overlay.foreground),
    ] {
        if parse_color(value).is_none() {
            return Err(ConfigError::InvalidColor {
                field,
                value: value.clone(),
            });
        }
    }

    if overlay.font_face.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "[overlay].font_face must not be empty".to_string(),
        });
    }

    let capacity = config.filter.capacity;
    if capacity == 0 || capacity > MAX_SNAPSHOT_WINDOWS {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "[filter].capacity must be between 1 and {}, got {}",
                MAX_SNAPSHOT_WINDOWS, capacity
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&TabfixConfig::default()).is_ok());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(
            parse_color("#051650"),
            Some(Rgb {
                r: 0x05,
                g: 0x16,
                b: 0x50
            })
        );
        assert_eq!(
            parse_color("#ffffff"),
            Some(Rgb {
                r: 255,
                g: 255,
                b: 255
            })
        );
        assert_eq!(parse_color("051650"), None);
        assert_eq!(parse_color("#05165"), None);
        assert_eq!(parse_color("#05165G"), None);
    }

    #[test]
    fn test_invalid_trigger_hotkey() {
        let mut config = TabfixConfig::default();
        config.hotkey.trigger = "b".to_string();

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidHotkey {
                field: "trigger",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_alternate_hotkey() {
        let mut config = TabfixConfig::default();
        config.hotkey.alternate = Some("alt+nope".to_string());

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidHotkey {
                field: "alternate",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_geometry_rejected() {
        let mut config = TabfixConfig::default();
        config.overlay.row_height = 0;

        let result = validate_config(&config);
        assert!(
            matches!(result, Err(ConfigError::InvalidConfiguration { ref message }) if message.contains("row_height"))
        );
    }

    #[test]
    fn test_oversized_geometry_rejected() {
        let mut config = TabfixConfig::default();
        config.overlay.row_height = 3_000_000_000;
        assert!(
            matches!(validate_config(&config), Err(ConfigError::InvalidConfiguration { ref message }) if message.contains("row_height"))
        );

        let mut config = TabfixConfig::default();
        config.overlay.padding = MAX_GEOMETRY + 1;
        assert!(
            matches!(validate_config(&config), Err(ConfigError::InvalidConfiguration { ref message }) if message.contains("padding"))
        );

        let mut config = TabfixConfig::default();
        config.overlay.width = MAX_GEOMETRY;
        config.overlay.padding = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_color_rejected() {
        let mut config = TabfixConfig::default();
        config.overlay.foreground = "white".to_string();

        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidColor {
                field: "foreground",
                ..
            })
        ));
    }

    #[test]
    fn test_capacity_bounds() {
        let mut config = TabfixConfig::default();
        config.filter.capacity = 0;
        assert!(validate_config(&config).is_err());

        config.filter.capacity = 1025;
        assert!(validate_config(&config).is_err());

        config.filter.capacity = 1;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_color_fallbacks() {
        let mut overlay = OverlayConfig::default();
        overlay.background = "nope".to_string();
        assert_eq!(overlay.background_rgb().to_colorref(), 0x0050_1605);
        assert_eq!(overlay.foreground_rgb().to_colorref(), 0x00FF_FFFF);
    }
}
