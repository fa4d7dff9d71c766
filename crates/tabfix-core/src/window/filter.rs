//! Rules deciding which top-level windows are switchable.

use crate::config::FilterConfig;
use crate::process::ProcessNameResolver;
use crate::window::types::RawWindow;

/// Why a window was left out of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Hidden,
    Untitled,
    Child,
    ToolWindow,
    ExcludedProcess,
    DesktopShell,
    SettingsFrame,
}

/// Exclusion rules applied to every enumerated window.
///
/// Rules are checked in order and the first failing rule wins. The process
/// name is resolved only after the cheap style checks pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFilter {
    /// Executable names never listed, compared case-insensitively.
    excluded_processes: Vec<String>,
    /// Window classes never listed, compared exactly (e.g. the desktop shell).
    excluded_classes: Vec<String>,
    /// Generic shell frame class and title that wrap the settings app.
    settings_frame: Option<(String, String)>,
}

impl WindowFilter {
    pub fn new(
        excluded_processes: Vec<String>,
        excluded_classes: Vec<String>,
        settings_frame: Option<(String, String)>,
    ) -> Self {
        Self {
            excluded_processes,
            excluded_classes,
            settings_frame,
        }
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        let settings_frame = match (&config.settings_frame_class, &config.settings_frame_title) {
            (class, title) if !class.is_empty() && !title.is_empty() => {
                Some((class.clone(), title.clone()))
            }
            _ => None,
        };

        Self::new(
            config.excluded_processes.clone(),
            config.excluded_classes.clone(),
            settings_frame,
        )
    }

    /// Check a window against every rule. `None` means the window is switchable.
    pub fn check(&self, window: &RawWindow, resolver: &dyn ProcessNameResolver) -> Option<Rejection> {
        if !window.visible {
            return Some(Rejection::Hidden);
        }
        if window.title.is_empty() {
            return Some(Rejection::Untitled);
        }
        if window.child {
            return Some(Rejection::Child);
        }
        if window.tool_window {
            return Some(Rejection::ToolWindow);
        }

        // An unresolvable process is not excluded
        if let Some(name) = resolver.executable_name(window.process_id)
            && self
                .excluded_processes
                .iter()
                .any(|excluded| excluded.eq_ignore_ascii_case(&name))
        {
            return Some(Rejection::ExcludedProcess);
        }

        if self.excluded_classes.contains(&window.class_name) {
            return Some(Rejection::DesktopShell);
        }

        if let Some((class, title)) = &self.settings_frame
            && window.class_name == *class
            && window.title == *title
        {
            return Some(Rejection::SettingsFrame);
        }

        None
    }
}

impl Default for WindowFilter {
    fn default() -> Self {
        Self::from_config(&FilterConfig::default())
    }
}
