use std::ffi::c_void;

use tabfix_core::window::WindowError;
use tabfix_core::{RawWindow, WindowHandle, WindowSource};
use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GWL_EXSTYLE, GWL_STYLE, GetClassNameW, GetWindowLongW, GetWindowTextLengthW,
    GetWindowTextW, GetWindowThreadProcessId, IsWindowVisible, WS_CHILD, WS_EX_TOOLWINDOW,
};
use windows::core::BOOL;

/// Class names are limited to 256 characters.
const CLASS_NAME_CAPACITY: usize = 256;

pub fn to_hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.as_raw() as *mut c_void)
}

pub fn from_hwnd(hwnd: HWND) -> WindowHandle {
    WindowHandle::from_raw(hwnd.0 as isize)
}

/// Top-level windows in z-order, via `EnumWindows`.
pub struct Win32WindowSource;

impl WindowSource for Win32WindowSource {
    fn enumerate(&self) -> Result<Vec<RawWindow>, WindowError> {
        unsafe extern "system" fn collect(hwnd: HWND, lparam: LPARAM) -> BOOL {
            // Safety: `enumerate` passes a live `Vec<HWND>` through LPARAM.
            let handles = unsafe { &mut *(lparam.0 as *mut Vec<HWND>) };
            handles.push(hwnd);
            BOOL(1)
        }

        let mut handles: Vec<HWND> = Vec::new();
        unsafe { EnumWindows(Some(collect), LPARAM((&mut handles as *mut Vec<HWND>) as isize)) }
            .map_err(|e| WindowError::EnumerationFailed {
                message: e.message(),
            })?;

        Ok(handles.into_iter().map(describe).collect())
    }
}

fn describe(hwnd: HWND) -> RawWindow {
    unsafe {
        let mut process_id: u32 = 0;
        GetWindowThreadProcessId(hwnd, Some(&mut process_id));

        let style = GetWindowLongW(hwnd, GWL_STYLE) as u32;
        let ex_style = GetWindowLongW(hwnd, GWL_EXSTYLE) as u32;

        RawWindow {
            handle: from_hwnd(hwnd),
            process_id,
            title: window_title(hwnd),
            class_name: class_name(hwnd),
            visible: IsWindowVisible(hwnd).as_bool(),
            child: style & WS_CHILD.0 != 0,
            tool_window: ex_style & WS_EX_TOOLWINDOW.0 != 0,
        }
    }
}

fn window_title(hwnd: HWND) -> String {
    unsafe {
        let len = GetWindowTextLengthW(hwnd);
        if len <= 0 {
            return String::new();
        }
        let mut buf: Vec<u16> = vec![0; len as usize + 1];
        let copied = GetWindowTextW(hwnd, &mut buf);
        String::from_utf16_lossy(&buf[..copied.max(0) as usize])
    }
}

fn class_name(hwnd: HWND) -> String {
    let mut buf = [0u16; CLASS_NAME_CAPACITY];
    let copied = unsafe { GetClassNameW(hwnd, &mut buf) };
    String::from_utf16_lossy(&buf[..copied.max(0) as usize])
}
