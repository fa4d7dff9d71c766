use std::cell::RefCell;

use sysinfo::{Pid as SysinfoPid, ProcessesToUpdate, System};
use tracing::debug;

use crate::errors::TabfixError;
use crate::process::errors::ProcessError;
use crate::process::traits::ProcessNameResolver;

/// Letter used when a process name cannot be resolved.
pub const FALLBACK_LETTER: char = '?';

/// Extract the base name from a path, handling both Unix (/) and Windows (\) separators
pub fn extract_base_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// Lowercase first character of an executable name, or [`FALLBACK_LETTER`].
pub fn first_letter(executable_name: Option<&str>) -> char {
    executable_name
        .and_then(|name| extract_base_name(name).chars().next())
        .and_then(|c| c.to_lowercase().next())
        .unwrap_or(FALLBACK_LETTER)
}

/// Look up the executable name of a process in the given system table.
///
/// Only the requested pid is refreshed, so each call reflects the live
/// process list rather than a cached view.
pub fn get_executable_name(system: &mut System, pid: u32) -> Result<String, ProcessError> {
    if pid == 0 {
        return Err(ProcessError::InvalidPid { pid });
    }

    let pid_obj = SysinfoPid::from_u32(pid);
    system.refresh_processes(ProcessesToUpdate::Some(&[pid_obj]), true);

    match system.process(pid_obj) {
        Some(process) => {
            let name = process.name().to_string_lossy();
            Ok(extract_base_name(&name).to_string())
        }
        None => Err(ProcessError::NotFound { pid }),
    }
}

/// [`ProcessNameResolver`] backed by the OS process table via `sysinfo`.
///
/// The overlay is single-threaded, so the system table lives in a `RefCell`
/// and is reused between lookups.
pub struct SystemProcessResolver {
    system: RefCell<System>,
}

impl SystemProcessResolver {
    pub fn new() -> Self {
        Self {
            system: RefCell::new(System::new()),
        }
    }
}

impl Default for SystemProcessResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessNameResolver for SystemProcessResolver {
    fn executable_name(&self, pid: u32) -> Option<String> {
        let Ok(mut system) = self.system.try_borrow_mut() else {
            return None;
        };

        match get_executable_name(&mut system, pid) {
            Ok(name) => Some(name),
            Err(e) => {
                debug!(
                    event = "core.process.resolve_failed",
                    pid = pid,
                    code = e.error_code(),
                    error = %e
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_letter() {
        assert_eq!(first_letter(Some("alpha.exe")), 'a');
        assert_eq!(first_letter(Some("Beta.exe")), 'b');
        assert_eq!(first_letter(Some("C:\\Program Files\\Zed\\zed.exe")), 'z');
        assert_eq!(first_letter(Some("7zFM.exe")), '7');
        assert_eq!(first_letter(Some("")), FALLBACK_LETTER);
        assert_eq!(first_letter(None), FALLBACK_LETTER);
    }

    #[test]
    fn test_extract_base_name() {
        // Unix paths
        assert_eq!(extract_base_name("/usr/bin/sleep"), "sleep");

        // Windows paths
        assert_eq!(
            extract_base_name("C:\\Windows\\ImmersiveControlPanel\\SystemSettings.exe"),
            "SystemSettings.exe"
        );

        // No path
        assert_eq!(extract_base_name("simple"), "simple");

        // Empty string
        assert_eq!(extract_base_name(""), "");
    }

    #[test]
    fn test_get_executable_name_with_invalid_pid() {
        let mut system = System::new();
        assert!(matches!(
            get_executable_name(&mut system, 0),
            Err(ProcessError::InvalidPid { pid: 0 })
        ));
        assert!(matches!(
            get_executable_name(&mut system, 999999),
            Err(ProcessError::NotFound { pid: 999999 })
        ));
    }

    #[test]
    fn test_resolver_returns_none_for_missing_process() {
        let resolver = SystemProcessResolver::new();
        assert_eq!(resolver.executable_name(999999), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolver_finds_running_process() {
        use std::process::{Command, Stdio};

        let mut child = Command::new("sleep")
            .arg("10")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to spawn test process");

        let resolver = SystemProcessResolver::new();
        let name = resolver.executable_name(child.id());
        assert!(name.is_some_and(|n| n.contains("sleep")));

        let _ = child.kill();
        let _ = child.wait();
    }
}
