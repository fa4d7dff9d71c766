//! tabfix-core: Core library for mnemonic window switching
//!
//! This library provides the platform-independent logic behind the TABFIX
//! overlay: building a snapshot of switchable windows, labelling each one
//! with a two-letter code, and capturing keystrokes until a code matches.
//! The binary supplies the OS adapters through the traits defined here.
//!
//! # Main Entry Points
//!
//! - [`session`] - Drive one overlay activation from hotkey to window switch
//! - [`window`] - Enumerate and filter switchable windows
//! - [`mnemonic`] - Assign two-letter codes to a snapshot
//! - [`capture`] - Keystroke capture state machine
//! - [`config`] - Configuration management

pub mod capture;
pub mod config;
pub mod errors;
pub mod events;
pub mod hotkey;
pub mod logging;
pub mod mnemonic;
pub mod overlay;
pub mod process;
pub mod session;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use capture::{CaptureMachine, CaptureOutcome, CaptureState, KeyInput};
pub use config::TabfixConfig;
pub use hotkey::{Hotkey, HotkeyError, Modifiers};
pub use mnemonic::Mnemonic;
pub use overlay::{OverlayLayout, OverlayRow, ScreenSize};
pub use process::{ProcessNameResolver, SystemProcessResolver};
pub use session::{ForegroundSwitcher, KeyOutcome, OverlaySession, OverlaySurface, SwitchError};
pub use window::{RawWindow, Snapshot, WindowEntry, WindowFilter, WindowHandle, WindowSource};

// Re-export logging initialization
pub use logging::init_logging;
