use crate::window::errors::WindowError;
use crate::window::types::RawWindow;

/// Source of top-level OS windows.
///
/// Implementations return every top-level window in the order the OS
/// enumerates them (z-order on Windows), without filtering. Tests provide
/// synthetic lists through the same seam.
pub trait WindowSource {
    fn enumerate(&self) -> Result<Vec<RawWindow>, WindowError>;
}

impl<S: WindowSource + ?Sized> WindowSource for Box<S> {
    fn enumerate(&self) -> Result<Vec<RawWindow>, WindowError> {
        (**self).enumerate()
    }
}
