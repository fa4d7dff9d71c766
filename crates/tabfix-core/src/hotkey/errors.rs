use crate::errors::TabfixError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HotkeyError {
    #[error("Hotkey is empty")]
    Empty,

    #[error("Hotkey '{value}' has no key, only modifiers")]
    MissingKey { value: String },

    #[error("Hotkey '{value}' needs at least one modifier (ctrl, alt, shift, win)")]
    MissingModifier { value: String },

    #[error("Unknown key or modifier '{token}' in hotkey '{value}'")]
    UnknownToken { value: String, token: String },

    #[error("Modifier '{token}' appears more than once in hotkey '{value}'")]
    DuplicateModifier { value: String, token: String },

    #[error("Hotkey '{value}' has more than one key")]
    MultipleKeys { value: String },

    #[error("Hotkey {hotkey} is already registered by another application")]
    RegistrationFailed { hotkey: String },
}

impl TabfixError for HotkeyError {
    fn error_code(&self) -> &'static str {
        match self {
            HotkeyError::Empty => "HOTKEY_EMPTY",
            HotkeyError::MissingKey { .. } => "HOTKEY_MISSING_KEY",
            HotkeyError::MissingModifier { .. } => "HOTKEY_MISSING_MODIFIER",
            HotkeyError::UnknownToken { .. } => "HOTKEY_UNKNOWN_TOKEN",
            HotkeyError::DuplicateModifier { .. } => "HOTKEY_DUPLICATE_MODIFIER",
            HotkeyError::MultipleKeys { .. } => "HOTKEY_MULTIPLE_KEYS",
            HotkeyError::RegistrationFailed { .. } => "HOTKEY_REGISTRATION_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, HotkeyError::RegistrationFailed { .. })
    }
}
