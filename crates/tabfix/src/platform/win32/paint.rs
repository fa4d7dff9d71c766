//! GDI rendering of the overlay rows.

use std::ffi::c_void;

use tabfix_core::config::OverlayConfig;
use tabfix_core::overlay::format_row;
use tabfix_core::{OverlayLayout, OverlayRow};
use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, BitBlt, CreateCompatibleBitmap, CreateCompatibleDC, CreateFontIndirectW,
    CreateSolidBrush, DeleteDC, DeleteObject, EndPaint, FillRect, HDC, LOGFONTW, PAINTSTRUCT,
    SRCCOPY, SelectObject, SetBkMode, SetTextColor, TRANSPARENT, TextOutW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    DI_NORMAL, DrawIconEx, GCLP_HICONSM, GetClassLongPtrW, GetClientRect, HICON, ICON_BIG,
    IDI_APPLICATION, LoadIconW, SendMessageW, WM_GETICON,
};

use super::enumerate::to_hwnd;

const BOLD: i32 = 700;

/// Drawing parameters resolved once from `[overlay]`.
pub struct PaintStyle {
    background: COLORREF,
    foreground: COLORREF,
    font_size: i32,
    font_face: Vec<u16>,
    icon_size: i32,
    double_buffered: bool,
}

impl PaintStyle {
    pub fn from_config(config: &OverlayConfig) -> Self {
        Self {
            background: COLORREF(config.background_rgb().to_colorref()),
            foreground: COLORREF(config.foreground_rgb().to_colorref()),
            font_size: config.font_size as i32,
            font_face: config.font_face.encode_utf16().collect(),
            icon_size: config.icon_size as i32,
            double_buffered: config.double_buffered,
        }
    }
}

/// Handle `WM_PAINT`.
///
/// With double buffering the rows are composed off-screen and copied with a
/// single `BitBlt`; otherwise they are drawn straight onto the window.
pub fn paint_overlay(
    hwnd: HWND,
    rows: &[OverlayRow],
    layout: Option<&OverlayLayout>,
    style: &PaintStyle,
) {
    unsafe {
        let mut ps = PAINTSTRUCT::default();
        let hdc = BeginPaint(hwnd, &mut ps);

        let mut client = RECT::default();
        let _ = GetClientRect(hwnd, &mut client);
        let width = client.right - client.left;
        let height = client.bottom - client.top;

        if style.double_buffered && width > 0 && height > 0 {
            let mem_dc = CreateCompatibleDC(Some(hdc));
            let bitmap = CreateCompatibleBitmap(hdc, width, height);
            let previous = SelectObject(mem_dc, bitmap.into());

            draw_rows(mem_dc, &client, rows, layout, style);
            let _ = BitBlt(hdc, 0, 0, width, height, Some(mem_dc), 0, 0, SRCCOPY);

            SelectObject(mem_dc, previous);
            let _ = DeleteObject(bitmap.into());
            let _ = DeleteDC(mem_dc);
        } else {
            draw_rows(hdc, &client, rows, layout, style);
        }

        let _ = EndPaint(hwnd, &ps);
    }
}

unsafe fn draw_rows(
    hdc: HDC,
    client: &RECT,
    rows: &[OverlayRow],
    layout: Option<&OverlayLayout>,
    style: &PaintStyle,
) {
    unsafe {
        let brush = CreateSolidBrush(style.background);
        FillRect(hdc, client, brush);
        let _ = DeleteObject(brush.into());

        let Some(layout) = layout else {
            return;
        };

        let mut font = LOGFONTW {
            lfHeight: style.font_size,
            lfWeight: BOLD,
            ..Default::default()
        };
        // Leave room for the terminating NUL
        let face_len = style.font_face.len().min(font.lfFaceName.len() - 1);
        font.lfFaceName[..face_len].copy_from_slice(&style.font_face[..face_len]);

        let hfont = CreateFontIndirectW(&font);
        let previous_font = SelectObject(hdc, hfont.into());
        SetBkMode(hdc, TRANSPARENT);
        SetTextColor(hdc, style.foreground);

        let icon_x = layout.padding;
        let text_x = icon_x + style.icon_size + layout.padding;

        for (index, row) in rows.iter().enumerate() {
            let top = layout.row_top(index);

            let icon = window_icon(to_hwnd(row.handle));
            let _ = DrawIconEx(
                hdc,
                icon_x,
                top,
                icon,
                style.icon_size,
                style.icon_size,
                0,
                None,
                DI_NORMAL,
            );

            let text: Vec<u16> = format_row(row).encode_utf16().collect();
            let _ = TextOutW(
                hdc,
                text_x,
                top + (style.icon_size - style.font_size) / 2,
                &text,
            );
        }

        SelectObject(hdc, previous_font);
        let _ = DeleteObject(hfont.into());
    }
}

/// Window big icon, then class small icon, then the stock application icon.
unsafe fn window_icon(hwnd: HWND) -> HICON {
    unsafe {
        let big = SendMessageW(
            hwnd,
            WM_GETICON,
            Some(WPARAM(ICON_BIG as usize)),
            Some(LPARAM(0)),
        );
        if big.0 != 0 {
            return HICON(big.0 as *mut c_void);
        }

        let small = GetClassLongPtrW(hwnd, GCLP_HICONSM);
        if small != 0 {
            return HICON(small as *mut c_void);
        }

        LoadIconW(None, IDI_APPLICATION).unwrap_or_default()
    }
}
