//! OS integration. Only Windows has an overlay; other targets refuse to start.

#[cfg(windows)]
mod win32;
#[cfg(windows)]
pub use win32::run;

#[cfg(not(windows))]
mod unsupported;
#[cfg(not(windows))]
pub use unsupported::run;
