use crate::errors::TabfixError;
use crate::window::WindowHandle;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SwitchError {
    #[error("Window {handle} no longer exists")]
    WindowGone { handle: WindowHandle },

    #[error("The OS refused to bring window {handle} to the foreground")]
    ForegroundRefused { handle: WindowHandle },
}

impl TabfixError for SwitchError {
    fn error_code(&self) -> &'static str {
        match self {
            SwitchError::WindowGone { .. } => "SWITCH_WINDOW_GONE",
            SwitchError::ForegroundRefused { .. } => "SWITCH_FOREGROUND_REFUSED",
        }
    }
}
