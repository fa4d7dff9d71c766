use tabfix_core::config::HotkeyConfig;
use tabfix_core::errors::TabfixError;
use tabfix_core::{Hotkey, HotkeyError};
use tracing::{error, info};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    HOT_KEY_MODIFIERS, MOD_NOREPEAT, RegisterHotKey, UnregisterHotKey,
};
use windows::Win32::UI::WindowsAndMessaging::{MB_ICONWARNING, MB_OK, MessageBoxW};
use windows::core::{HSTRING, w};

pub const TRIGGER_ID: i32 = 1;
pub const ALTERNATE_ID: i32 = 2;

/// Register the trigger and the optional alternate hotkey on `hwnd`.
///
/// A hotkey that fails to parse or register produces a blocking notice; the
/// utility keeps running without it. Returns the ids that were registered.
pub fn register_hotkeys(hwnd: HWND, config: &HotkeyConfig) -> Vec<i32> {
    let mut requested = vec![(TRIGGER_ID, config.trigger_hotkey())];
    if let Some(alternate) = config.alternate_hotkey() {
        requested.push((ALTERNATE_ID, alternate));
    }

    let mut registered = Vec::new();
    for (id, parsed) in requested {
        match parsed.and_then(|hotkey| register(hwnd, id, hotkey)) {
            Ok(hotkey) => {
                info!(event = "win32.hotkey_registered", id = id, hotkey = %hotkey);
                registered.push(id);
            }
            Err(e) => {
                error!(
                    event = "win32.hotkey_registration_failed",
                    id = id,
                    code = e.error_code(),
                    error = %e
                );
                show_notice(&e);
            }
        }
    }
    registered
}

pub fn unregister_hotkeys(hwnd: HWND, ids: &[i32]) {
    for &id in ids {
        let _ = unsafe { UnregisterHotKey(Some(hwnd), id) };
    }
}

fn register(hwnd: HWND, id: i32, hotkey: Hotkey) -> Result<Hotkey, HotkeyError> {
    let modifiers = HOT_KEY_MODIFIERS(hotkey.modifiers.win32_bits()) | MOD_NOREPEAT;
    unsafe { RegisterHotKey(Some(hwnd), id, modifiers, hotkey.key.virtual_key()) }.map_err(
        |_| HotkeyError::RegistrationFailed {
            hotkey: hotkey.to_string(),
        },
    )?;
    Ok(hotkey)
}

fn show_notice(error: &HotkeyError) {
    let text = HSTRING::from(format!("Failed to register hotkey: {}", error));
    unsafe {
        MessageBoxW(None, &text, w!("tabfix"), MB_OK | MB_ICONWARNING);
    }
}
