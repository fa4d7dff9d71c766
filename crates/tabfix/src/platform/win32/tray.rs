use windows::Win32::Foundation::{HWND, POINT};
use windows::Win32::UI::Shell::{
    NIF_ICON, NIF_MESSAGE, NIF_TIP, NIM_ADD, NIM_DELETE, NOTIFYICONDATAW, Shell_NotifyIconW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CreatePopupMenu, DestroyMenu, GetCursorPos, IDI_APPLICATION, LoadIconW,
    MF_STRING, SetForegroundWindow, TPM_NONOTIFY, TPM_RETURNCMD, TPM_RIGHTBUTTON,
    TrackPopupMenuEx, WM_APP,
};
use windows::core::w;

/// Callback message the shell posts for tray icon mouse events.
pub const WM_TRAY: u32 = WM_APP + 1;

const TRAY_ID: u32 = 1;
const EXIT_COMMAND: u32 = 1001;
const TOOLTIP: &str = "tabfix";

fn notify_data(hwnd: HWND) -> NOTIFYICONDATAW {
    NOTIFYICONDATAW {
        cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
        hWnd: hwnd,
        uID: TRAY_ID,
        ..Default::default()
    }
}

pub fn add_tray_icon(hwnd: HWND) -> windows::core::Result<()> {
    let mut data = notify_data(hwnd);
    data.uFlags = NIF_MESSAGE | NIF_ICON | NIF_TIP;
    data.uCallbackMessage = WM_TRAY;
    data.hIcon = unsafe { LoadIconW(None, IDI_APPLICATION)? };

    let tip: Vec<u16> = TOOLTIP.encode_utf16().collect();
    let len = tip.len().min(data.szTip.len() - 1);
    data.szTip[..len].copy_from_slice(&tip[..len]);

    unsafe { Shell_NotifyIconW(NIM_ADD, &data) }.ok()
}

pub fn remove_tray_icon(hwnd: HWND) {
    let data = notify_data(hwnd);
    let _ = unsafe { Shell_NotifyIconW(NIM_DELETE, &data) };
}

/// Show the context menu at the cursor. Returns true when "Exit" was chosen.
pub fn show_tray_menu(hwnd: HWND) -> windows::core::Result<bool> {
    unsafe {
        let menu = CreatePopupMenu()?;
        AppendMenuW(menu, MF_STRING, EXIT_COMMAND as usize, w!("Exit"))?;

        let mut cursor = POINT::default();
        GetCursorPos(&mut cursor)?;

        // The menu only dismisses on outside clicks if our window is foreground
        let _ = SetForegroundWindow(hwnd);
        let chosen = TrackPopupMenuEx(
            menu,
            (TPM_RETURNCMD | TPM_RIGHTBUTTON | TPM_NONOTIFY).0,
            cursor.x,
            cursor.y,
            hwnd,
            None,
        );
        let _ = DestroyMenu(menu);

        Ok(chosen.0 as u32 == EXIT_COMMAND)
    }
}
