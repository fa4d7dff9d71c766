//! Process name resolution seam.

/// Resolves the executable name of a running process.
///
/// Implementations return `None` when the process no longer exists (it may
/// exit between window enumeration and resolution). Callers treat `None` as
/// "use the fallback letter" and never as a hard failure.
pub trait ProcessNameResolver {
    /// Executable file name (e.g. `alpha.exe`) of the process with this id.
    fn executable_name(&self, pid: u32) -> Option<String>;
}
