//! Win32 message-loop host for the overlay session.
//!
//! Everything here runs on the thread that created the overlay window. The
//! session lives in a thread-local so the window procedure can reach it.

mod enumerate;
mod foreground;
mod hotkeys;
mod overlay;
mod paint;
mod tray;

use std::error::Error;

use tabfix_core::{OverlaySession, SystemProcessResolver, TabfixConfig};
use tracing::{info, warn};

use enumerate::Win32WindowSource;
use foreground::Win32Switcher;
use overlay::{OverlayState, Win32Surface};
use paint::PaintStyle;

pub fn run(config: &TabfixConfig) -> Result<(), Box<dyn Error>> {
    let hwnd = overlay::create_overlay_window(&config.overlay)?;
    info!(event = "win32.overlay_window_created", hwnd = ?hwnd.0);

    let session = OverlaySession::from_config(
        Box::new(Win32WindowSource),
        Box::new(SystemProcessResolver::new()),
        config,
    );

    let hotkeys = hotkeys::register_hotkeys(hwnd, &config.hotkey);

    let tray = config.tray.enabled && {
        match tray::add_tray_icon(hwnd) {
            Ok(()) => true,
            Err(e) => {
                warn!(event = "win32.tray_icon_failed", error = %e);
                false
            }
        }
    };

    overlay::install(OverlayState {
        session,
        surface: Win32Surface::new(hwnd),
        switcher: Win32Switcher,
        style: PaintStyle::from_config(&config.overlay),
        hotkeys,
        tray,
    });

    info!(event = "win32.message_loop_started");
    overlay::run_message_loop();
    info!(event = "win32.message_loop_ended");

    Ok(())
}
