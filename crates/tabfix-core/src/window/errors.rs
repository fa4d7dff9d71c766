use crate::errors::TabfixError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Window enumeration failed: {message}")]
    EnumerationFailed { message: String },
}

impl TabfixError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::EnumerationFailed { .. } => "WINDOW_ENUMERATION_FAILED",
        }
    }
}
