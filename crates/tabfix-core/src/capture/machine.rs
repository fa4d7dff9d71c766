use tracing::{debug, info};

use crate::capture::types::{CaptureOutcome, CaptureState, KeyInput};
use crate::mnemonic::{Mnemonic, find_match};

/// Two-keystroke capture state machine.
///
/// Owned by the overlay session. The buffer is cleared on every transition
/// into [`CaptureState::Listening`] and whenever a two-character attempt
/// completes, whether or not it matched.
#[derive(Debug)]
pub struct CaptureMachine {
    state: CaptureState,
    pending: Option<char>,
}

impl CaptureMachine {
    pub fn new() -> Self {
        Self {
            state: CaptureState::Idle,
            pending: None,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Characters typed so far in the current attempt.
    pub fn buffered(&self) -> Option<char> {
        self.pending
    }

    /// Start listening with an empty buffer (overlay became visible).
    pub fn arm(&mut self) {
        self.state = CaptureState::Listening;
        self.pending = None;
    }

    /// Stop listening and drop any partial input (overlay hidden).
    pub fn disarm(&mut self) {
        self.state = CaptureState::Idle;
        self.pending = None;
    }

    /// Feed one key press.
    ///
    /// `codes` is only evaluated when the second character arrives, so the
    /// codes are computed fresh for every attempt. On a match or Escape the
    /// machine returns to [`CaptureState::Idle`].
    pub fn handle_key<F>(&mut self, key: KeyInput, codes: F) -> CaptureOutcome
    where
        F: FnOnce() -> Vec<Mnemonic>,
    {
        if self.state == CaptureState::Idle {
            return CaptureOutcome::Ignored;
        }

        let c = match key {
            KeyInput::Escape => {
                debug!(event = "core.capture.dismissed");
                self.disarm();
                return CaptureOutcome::Dismissed;
            }
            KeyInput::Char(c) => c.to_lowercase().next().unwrap_or(c),
        };

        let Some(first) = self.pending.take() else {
            self.pending = Some(c);
            return CaptureOutcome::Buffered;
        };

        let typed = [first, c];
        match find_match(&codes(), typed) {
            Some(index) => {
                info!(
                    event = "core.capture.matched",
                    code = %format!("{}{}", typed[0], typed[1]),
                    index = index
                );
                self.disarm();
                CaptureOutcome::Matched { index }
            }
            None => {
                debug!(
                    event = "core.capture.no_match",
                    code = %format!("{}{}", typed[0], typed[1])
                );
                CaptureOutcome::NoMatch
            }
        }
    }
}

impl Default for CaptureMachine {
    fn default() -> Self {
        Self::new()
    }
}
