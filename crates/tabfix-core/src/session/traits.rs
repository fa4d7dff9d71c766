//! Collaborators the session drives. The binary implements these with OS
//! calls; tests use recording mocks.

use crate::overlay::{OverlayLayout, ScreenSize};
use crate::session::errors::SwitchError;
use crate::window::WindowHandle;

/// The overlay window itself.
pub trait OverlaySurface {
    /// Size of the primary display.
    fn screen_size(&self) -> ScreenSize;

    /// Move, resize and show the overlay, then schedule a repaint.
    fn show(&mut self, layout: &OverlayLayout);

    /// Hide the overlay.
    fn hide(&mut self);
}

/// Brings a chosen window to the front.
pub trait ForegroundSwitcher {
    /// Restore the window if it is minimized, then give it input focus.
    fn bring_to_foreground(&self, handle: WindowHandle) -> Result<(), SwitchError>;
}
