use std::cell::RefCell;
use std::error::Error;

use tabfix_core::capture::KeyInput;
use tabfix_core::config::OverlayConfig;
use tabfix_core::{KeyOutcome, OverlayLayout, OverlaySession, OverlaySurface, ScreenSize};
use tracing::{debug, error, info};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Gdi::InvalidateRect;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::VK_ESCAPE;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW,
    GetSystemMetrics, HWND_TOPMOST, IDC_ARROW, LoadCursorW, MSG, PostQuitMessage,
    RegisterClassW, SM_CXSCREEN, SM_CYSCREEN, SW_HIDE, SWP_SHOWWINDOW, SetForegroundWindow,
    SetWindowPos, ShowWindow, TranslateMessage, WM_CHAR, WM_CONTEXTMENU, WM_DESTROY, WM_HOTKEY,
    WM_KEYDOWN, WM_PAINT, WM_RBUTTONUP, WNDCLASSW, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_POPUP,
};
use windows::core::{PCWSTR, w};

use super::foreground::Win32Switcher;
use super::paint::{PaintStyle, paint_overlay};
use super::{hotkeys, tray};

/// Height of the hidden window before the first activation sizes it.
const INITIAL_HEIGHT: i32 = 100;

thread_local! {
    static STATE: RefCell<Option<OverlayState>> = const { RefCell::new(None) };
}

/// Everything the window procedure needs between messages.
pub struct OverlayState {
    pub session: OverlaySession,
    pub surface: Win32Surface,
    pub switcher: Win32Switcher,
    pub style: PaintStyle,
    pub hotkeys: Vec<i32>,
    pub tray: bool,
}

impl OverlayState {
    fn activate(&mut self) {
        self.session.activate(&mut self.surface);
    }

    fn key(&mut self, key: KeyInput) {
        let Self {
            session,
            surface,
            switcher,
            ..
        } = self;
        if session.handle_key(key, surface, switcher) == KeyOutcome::Ignored {
            debug!(event = "win32.key_ignored");
        }
    }

    fn paint(&mut self) {
        let rows = self.session.rows();
        paint_overlay(
            self.surface.hwnd,
            &rows,
            self.surface.layout.as_ref(),
            &self.style,
        );
    }

    fn shutdown(&mut self) {
        hotkeys::unregister_hotkeys(self.surface.hwnd, &self.hotkeys);
        if self.tray {
            tray::remove_tray_icon(self.surface.hwnd);
        }
        info!(event = "win32.shutdown_completed");
    }
}

/// The borderless top-most popup that lists the windows.
pub struct Win32Surface {
    hwnd: HWND,
    layout: Option<OverlayLayout>,
}

impl Win32Surface {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd, layout: None }
    }
}

impl OverlaySurface for Win32Surface {
    fn screen_size(&self) -> ScreenSize {
        unsafe {
            ScreenSize {
                width: GetSystemMetrics(SM_CXSCREEN),
                height: GetSystemMetrics(SM_CYSCREEN),
            }
        }
    }

    fn show(&mut self, layout: &OverlayLayout) {
        self.layout = Some(*layout);
        unsafe {
            if let Err(e) = SetWindowPos(
                self.hwnd,
                Some(HWND_TOPMOST),
                layout.x,
                layout.y,
                layout.width,
                layout.height,
                SWP_SHOWWINDOW,
            ) {
                error!(event = "win32.overlay_show_failed", error = %e);
            }
            // Keystrokes must reach the overlay
            let _ = SetForegroundWindow(self.hwnd);
            let _ = InvalidateRect(Some(self.hwnd), None, true);
        }
    }

    fn hide(&mut self) {
        self.layout = None;
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_HIDE);
        }
    }
}

pub fn create_overlay_window(config: &OverlayConfig) -> Result<HWND, Box<dyn Error>> {
    unsafe {
        let instance = GetModuleHandleW(PCWSTR::null())?;
        let class_name = w!("TabfixOverlay");

        let class = WNDCLASSW {
            lpfnWndProc: Some(overlay_wndproc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            lpszClassName: class_name,
            ..Default::default()
        };
        if RegisterClassW(&class) == 0 {
            return Err("could not register the overlay window class".into());
        }

        // Tool-window style keeps the overlay off the taskbar and out of its own list
        let hwnd = CreateWindowExW(
            WS_EX_TOOLWINDOW | WS_EX_TOPMOST,
            class_name,
            w!(""),
            WS_POPUP,
            0,
            0,
            config.width as i32,
            INITIAL_HEIGHT,
            None,
            None,
            Some(instance.into()),
            None,
        )?;
        Ok(hwnd)
    }
}

pub fn install(state: OverlayState) {
    STATE.with(|cell| *cell.borrow_mut() = Some(state));
}

pub fn run_message_loop() {
    let mut msg = MSG::default();
    unsafe {
        // GetMessageW returns -1 on error, 0 on WM_QUIT
        while GetMessageW(&mut msg, None, 0, 0).0 > 0 {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
    STATE.with(|cell| cell.borrow_mut().take());
}

/// Run `f` against the installed state.
///
/// Returns `None` before `install` or when the state is already borrowed
/// further up the stack (a message dispatched from inside another handler).
fn with_state<R>(f: impl FnOnce(&mut OverlayState) -> R) -> Option<R> {
    STATE.with(|cell| match cell.try_borrow_mut() {
        Ok(mut guard) => guard.as_mut().map(f),
        Err(_) => {
            debug!(event = "win32.state_busy");
            None
        }
    })
}

fn typed_char(wparam: WPARAM) -> Option<char> {
    char::from_u32(wparam.0 as u32).filter(|c| !c.is_control())
}

unsafe extern "system" fn overlay_wndproc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_HOTKEY => {
            with_state(|state| state.activate());
            LRESULT(0)
        }
        WM_KEYDOWN if wparam.0 == VK_ESCAPE.0 as usize => {
            with_state(|state| state.key(KeyInput::Escape));
            LRESULT(0)
        }
        WM_CHAR => {
            if let Some(c) = typed_char(wparam) {
                with_state(|state| state.key(KeyInput::Char(c)));
            }
            LRESULT(0)
        }
        WM_PAINT => match with_state(|state| state.paint()) {
            Some(()) => LRESULT(0),
            None => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
        },
        tray::WM_TRAY => {
            let event = (lparam.0 as u32) & 0xFFFF;
            if event == WM_RBUTTONUP || event == WM_CONTEXTMENU {
                match tray::show_tray_menu(hwnd) {
                    Ok(true) => {
                        info!(event = "win32.exit_requested");
                        let _ = unsafe { DestroyWindow(hwnd) };
                    }
                    Ok(false) => {}
                    Err(e) => error!(event = "win32.tray_menu_failed", error = %e),
                }
            }
            LRESULT(0)
        }
        WM_DESTROY => {
            with_state(|state| state.shutdown());
            unsafe { PostQuitMessage(0) };
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}
