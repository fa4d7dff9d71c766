//! Keystroke capture while the overlay is visible.

pub mod machine;
pub mod types;

pub use machine::CaptureMachine;
pub use types::{CaptureOutcome, CaptureState, KeyInput};
