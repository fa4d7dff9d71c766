use tracing::{info, warn};

use crate::capture::{CaptureMachine, CaptureOutcome, CaptureState, KeyInput};
use crate::config::{OverlayConfig, TabfixConfig};
use crate::errors::TabfixError;
use crate::mnemonic::{Mnemonic, assign_mnemonics};
use crate::overlay::{OverlayRow, build_rows, compute_layout};
use crate::process::ProcessNameResolver;
use crate::session::traits::{ForegroundSwitcher, OverlaySurface};
use crate::session::types::KeyOutcome;
use crate::window::{Snapshot, WindowFilter, WindowSource, build_snapshot};

/// Orchestrates one overlay activation at a time.
///
/// The session is created once at startup and lives on the UI thread. Each
/// activation replaces the snapshot wholesale; it is dropped again when the
/// overlay hides.
pub struct OverlaySession {
    source: Box<dyn WindowSource>,
    resolver: Box<dyn ProcessNameResolver>,
    filter: WindowFilter,
    overlay: OverlayConfig,
    capacity: usize,
    snapshot: Option<Snapshot>,
    capture: CaptureMachine,
}

impl OverlaySession {
    pub fn new(
        source: Box<dyn WindowSource>,
        resolver: Box<dyn ProcessNameResolver>,
        filter: WindowFilter,
        overlay: OverlayConfig,
        capacity: usize,
    ) -> Self {
        Self {
            source,
            resolver,
            filter,
            overlay,
            capacity,
            snapshot: None,
            capture: CaptureMachine::new(),
        }
    }

    pub fn from_config(
        source: Box<dyn WindowSource>,
        resolver: Box<dyn ProcessNameResolver>,
        config: &TabfixConfig,
    ) -> Self {
        Self::new(
            source,
            resolver,
            WindowFilter::from_config(&config.filter),
            config.overlay.clone(),
            config.filter.capacity,
        )
    }

    /// True while the overlay is shown and capturing keys.
    pub fn is_active(&self) -> bool {
        self.capture.state() == CaptureState::Listening
    }

    pub fn capture_state(&self) -> CaptureState {
        self.capture.state()
    }

    /// Snapshot of the current activation, if any.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Handle the hotkey: rebuild the snapshot, show the overlay, start listening.
    ///
    /// Triggering again while the overlay is visible starts a fresh activation.
    /// Returns the number of listed windows.
    pub fn activate(&mut self, surface: &mut dyn OverlaySurface) -> usize {
        let snapshot = build_snapshot(
            self.source.as_ref(),
            self.resolver.as_ref(),
            &self.filter,
            self.capacity,
        );
        let count = snapshot.len();
        self.snapshot = Some(snapshot);

        let layout = compute_layout(count, surface.screen_size(), &self.overlay);
        surface.show(&layout);
        self.capture.arm();

        info!(
            event = "core.session.activated",
            windows = count,
            width = layout.width,
            height = layout.height
        );
        count
    }

    /// Codes for the current snapshot, computed from scratch.
    pub fn mnemonics(&self) -> Vec<Mnemonic> {
        match &self.snapshot {
            Some(snapshot) => assign_mnemonics(snapshot, self.resolver.as_ref()),
            None => Vec::new(),
        }
    }

    /// Rows to draw for the current snapshot.
    pub fn rows(&self) -> Vec<OverlayRow> {
        match &self.snapshot {
            Some(snapshot) => build_rows(snapshot, &self.mnemonics()),
            None => Vec::new(),
        }
    }

    /// Feed a key press from the overlay window.
    pub fn handle_key(
        &mut self,
        key: KeyInput,
        surface: &mut dyn OverlaySurface,
        switcher: &dyn ForegroundSwitcher,
    ) -> KeyOutcome {
        let snapshot = self.snapshot.as_ref();
        let resolver = self.resolver.as_ref();
        let outcome = self.capture.handle_key(key, || match snapshot {
            Some(snapshot) => assign_mnemonics(snapshot, resolver),
            None => Vec::new(),
        });

        match outcome {
            CaptureOutcome::Ignored => KeyOutcome::Ignored,
            CaptureOutcome::Buffered => KeyOutcome::Pending,
            CaptureOutcome::NoMatch => KeyOutcome::NoMatch,
            CaptureOutcome::Dismissed => {
                self.end(surface);
                info!(event = "core.session.dismissed");
                KeyOutcome::Dismissed
            }
            CaptureOutcome::Matched { index } => {
                let Some(entry) = self.snapshot.as_ref().and_then(|s| s.get(index)) else {
                    self.end(surface);
                    return KeyOutcome::Dismissed;
                };
                let handle = entry.handle;

                if let Err(e) = switcher.bring_to_foreground(handle) {
                    warn!(
                        event = "core.session.switch_failed",
                        handle = %handle,
                        code = e.error_code(),
                        error = %e
                    );
                }

                self.end(surface);
                info!(event = "core.session.switched", handle = %handle);
                KeyOutcome::Switched { handle }
            }
        }
    }

    /// Hide the overlay and discard the snapshot.
    fn end(&mut self, surface: &mut dyn OverlaySurface) {
        surface.hide();
        self.capture.disarm();
        self.snapshot = None;
    }
}
