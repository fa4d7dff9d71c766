use std::fmt;

/// Modifier keys held together with a hotkey.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub win: bool,
}

impl Modifiers {
    /// `MOD_ALT`
    pub const WIN32_ALT: u32 = 0x0001;
    /// `MOD_CONTROL`
    pub const WIN32_CONTROL: u32 = 0x0002;
    /// `MOD_SHIFT`
    pub const WIN32_SHIFT: u32 = 0x0004;
    /// `MOD_WIN`
    pub const WIN32_WIN: u32 = 0x0008;

    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.alt || self.shift || self.win)
    }

    /// Modifier bits in the layout `RegisterHotKey` expects.
    pub fn win32_bits(&self) -> u32 {
        let mut bits = 0;
        if self.alt {
            bits |= Self::WIN32_ALT;
        }
        if self.ctrl {
            bits |= Self::WIN32_CONTROL;
        }
        if self.shift {
            bits |= Self::WIN32_SHIFT;
        }
        if self.win {
            bits |= Self::WIN32_WIN;
        }
        bits
    }
}

/// The non-modifier key of a hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyKey {
    /// Lowercase ASCII letter or digit.
    Char(char),
    /// Function key F1..F24.
    Function(u8),
    Space,
    Tab,
    Backtick,
}

impl HotkeyKey {
    /// Win32 virtual-key code for this key.
    pub fn virtual_key(&self) -> u32 {
        match self {
            // VK_A..VK_Z share the uppercase ASCII codes, VK_0..VK_9 the digits
            HotkeyKey::Char(c) => c.to_ascii_uppercase() as u32,
            HotkeyKey::Function(n) => 0x70 + u32::from(*n) - 1,
            HotkeyKey::Space => 0x20,
            HotkeyKey::Tab => 0x09,
            HotkeyKey::Backtick => 0xC0,
        }
    }
}

impl fmt::Display for HotkeyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotkeyKey::Char(c) => write!(f, "{}", c),
            HotkeyKey::Function(n) => write!(f, "f{}", n),
            HotkeyKey::Space => write!(f, "space"),
            HotkeyKey::Tab => write!(f, "tab"),
            HotkeyKey::Backtick => write!(f, "`"),
        }
    }
}

/// A parsed global hotkey, e.g. `ctrl+b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    pub modifiers: Modifiers,
    pub key: HotkeyKey,
}

impl Hotkey {
    pub fn new(modifiers: Modifiers, key: HotkeyKey) -> Self {
        Self { modifiers, key }
    }
}

impl fmt::Display for Hotkey {
    /// Normalized form: modifiers in ctrl, alt, shift, win order, then the key.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.modifiers;
        for (held, name) in [
            (m.ctrl, "ctrl"),
            (m.alt, "alt"),
            (m.shift, "shift"),
            (m.win, "win"),
        ] {
            if held {
                write!(f, "{}+", name)?;
            }
        }
        write!(f, "{}", self.key)
    }
}
