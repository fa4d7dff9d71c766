use crate::window::WindowHandle;

/// What a key press did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No activation is in progress.
    Ignored,
    /// First character of a code stored.
    Pending,
    /// A code matched; the window was asked to come forward and the overlay hid.
    Switched { handle: WindowHandle },
    /// Two characters typed that match no code; listening again.
    NoMatch,
    /// Escape hid the overlay.
    Dismissed,
}
