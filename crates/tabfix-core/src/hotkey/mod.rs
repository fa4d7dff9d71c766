//! Global hotkey descriptions.
//!
//! Hotkeys are written in config as `+`-separated tokens such as `ctrl+b` or
//! `alt+shift+f2`. This module parses them into a [`Hotkey`] that the
//! platform adapter can register with the OS.

pub mod errors;
pub mod operations;
pub mod types;

pub use errors::HotkeyError;
pub use operations::{normalize_hotkey_string, parse_hotkey};
pub use types::{Hotkey, HotkeyKey, Modifiers};
