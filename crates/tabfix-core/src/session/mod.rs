//! Overlay activation lifecycle.
//!
//! An [`OverlaySession`] owns the snapshot, its codes and the capture
//! machine for one activation: from the hotkey until a window is chosen or
//! Escape is pressed. Nothing survives between activations.

pub mod errors;
pub mod handler;
pub mod traits;
pub mod types;

pub use errors::SwitchError;
pub use handler::OverlaySession;
pub use traits::{ForegroundSwitcher, OverlaySurface};
pub use types::KeyOutcome;
