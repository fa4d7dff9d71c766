use crate::hotkey::errors::HotkeyError;
use crate::hotkey::types::{Hotkey, HotkeyKey, Modifiers};

/// Normalize a hotkey string for comparison (handles "control" vs "ctrl" and
/// the various names for the Windows key).
pub fn normalize_hotkey_string(s: &str) -> String {
    s.split('+')
        .map(|token| match token.trim().to_lowercase().as_str() {
            "control" => "ctrl".to_string(),
            "super" | "cmd" | "meta" => "win".to_string(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join("+")
}

/// Parse a hotkey string such as `ctrl+b` or `Alt+Shift+F2`.
///
/// Tokens are case-insensitive. At least one modifier and exactly one key are
/// required.
pub fn parse_hotkey(value: &str) -> Result<Hotkey, HotkeyError> {
    if value.trim().is_empty() {
        return Err(HotkeyError::Empty);
    }

    let normalized = normalize_hotkey_string(value);
    let mut modifiers = Modifiers::default();
    let mut key: Option<HotkeyKey> = None;

    for token in normalized.split('+') {
        let slot = match token {
            "ctrl" => Some(&mut modifiers.ctrl),
            "alt" => Some(&mut modifiers.alt),
            "shift" => Some(&mut modifiers.shift),
            "win" => Some(&mut modifiers.win),
            _ => None,
        };

        if let Some(held) = slot {
            if *held {
                return Err(HotkeyError::DuplicateModifier {
                    value: value.to_string(),
                    token: token.to_string(),
                });
            }
            *held = true;
            continue;
        }

        if token.is_empty() {
            return Err(HotkeyError::MissingKey {
                value: value.to_string(),
            });
        }

        let parsed = parse_key(token).ok_or_else(|| HotkeyError::UnknownToken {
            value: value.to_string(),
            token: token.to_string(),
        })?;

        if key.replace(parsed).is_some() {
            return Err(HotkeyError::MultipleKeys {
                value: value.to_string(),
            });
        }
    }

    let key = key.ok_or_else(|| HotkeyError::MissingKey {
        value: value.to_string(),
    })?;

    if modifiers.is_empty() {
        return Err(HotkeyError::MissingModifier {
            value: value.to_string(),
        });
    }

    Ok(Hotkey::new(modifiers, key))
}

fn parse_key(token: &str) -> Option<HotkeyKey> {
    match token {
        "space" => return Some(HotkeyKey::Space),
        "tab" => return Some(HotkeyKey::Tab),
        "`" | "backtick" | "grave" => return Some(HotkeyKey::Backtick),
        _ => {}
    }

    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && (c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Some(HotkeyKey::Char(c));
    }

    let n: u8 = token.strip_prefix('f')?.parse().ok()?;
    (1..=24).contains(&n).then_some(HotkeyKey::Function(n))
}
