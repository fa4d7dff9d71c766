/// Whether keystrokes are being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Overlay hidden; keys are ignored.
    Idle,
    /// Overlay visible; zero or one character buffered.
    Listening,
}

/// A key press delivered while the overlay has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Escape,
    Char(char),
}

/// Result of feeding one key into the capture machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Machine was idle; nothing happened.
    Ignored,
    /// First character stored, waiting for the second.
    Buffered,
    /// Both characters matched the code of this snapshot entry.
    Matched { index: usize },
    /// Both characters typed but no code matched; buffer cleared.
    NoMatch,
    /// Escape pressed; capture stopped.
    Dismissed,
}
