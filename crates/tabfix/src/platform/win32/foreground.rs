use tabfix_core::{ForegroundSwitcher, SwitchError, WindowHandle};
use windows::Win32::UI::WindowsAndMessaging::{
    IsIconic, IsWindow, SW_RESTORE, SetForegroundWindow, ShowWindow,
};

use super::enumerate::to_hwnd;

/// Restores minimized windows before handing them focus.
pub struct Win32Switcher;

impl ForegroundSwitcher for Win32Switcher {
    fn bring_to_foreground(&self, handle: WindowHandle) -> Result<(), SwitchError> {
        let hwnd = to_hwnd(handle);
        unsafe {
            // The window may have closed while the overlay was up
            if !IsWindow(Some(hwnd)).as_bool() {
                return Err(SwitchError::WindowGone { handle });
            }
            if IsIconic(hwnd).as_bool() {
                let _ = ShowWindow(hwnd, SW_RESTORE);
            }
            if !SetForegroundWindow(hwnd).as_bool() {
                return Err(SwitchError::ForegroundRefused { handle });
            }
        }
        Ok(())
    }
}
