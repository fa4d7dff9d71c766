use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::process::ProcessNameResolver;
use crate::window::filter::WindowFilter;
use crate::window::traits::WindowSource;
use crate::window::types::{MAX_SNAPSHOT_WINDOWS, RawWindow, Snapshot, WindowEntry};

/// Build a fresh snapshot of switchable windows.
///
/// Windows keep the order the source reports them in. Enumeration stops at
/// the first switchable window past `capacity` (capped at
/// [`MAX_SNAPSHOT_WINDOWS`]). If the source itself fails, the snapshot is
/// empty; the failure is only logged.
pub fn build_snapshot(
    source: &dyn WindowSource,
    resolver: &dyn ProcessNameResolver,
    filter: &WindowFilter,
    capacity: usize,
) -> Snapshot {
    info!(event = "core.window.snapshot_started");

    let capacity = capacity.min(MAX_SNAPSHOT_WINDOWS);

    let raw_windows = match source.enumerate() {
        Ok(windows) => windows,
        Err(e) => {
            warn!(event = "core.window.enumeration_failed", error = %e);
            return Snapshot::default();
        }
    };

    let (entries, stats) = collect_entries(raw_windows, resolver, filter, capacity);

    if stats.truncated {
        warn!(
            event = "core.window.snapshot_truncated",
            capacity = capacity,
            enumerated = stats.enumerated
        );
    }

    info!(
        event = "core.window.snapshot_completed",
        count = entries.len(),
        enumerated = stats.enumerated,
        rejected = stats.rejected,
        duplicates = stats.duplicates
    );

    Snapshot::new(entries)
}

/// Counters gathered while filtering one enumeration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotStats {
    pub enumerated: usize,
    pub rejected: usize,
    pub duplicates: usize,
    /// A switchable window was left out because `capacity` was reached.
    pub truncated: bool,
}

/// Filter and deduplicate raw windows, keeping at most `capacity` entries.
pub fn collect_entries(
    raw_windows: Vec<RawWindow>,
    resolver: &dyn ProcessNameResolver,
    filter: &WindowFilter,
    capacity: usize,
) -> (Vec<WindowEntry>, SnapshotStats) {
    let mut stats = SnapshotStats {
        enumerated: raw_windows.len(),
        ..SnapshotStats::default()
    };
    let mut seen = HashSet::new();
    let mut entries: Vec<WindowEntry> = Vec::new();

    for raw in raw_windows {
        if let Some(reason) = filter.check(&raw, resolver) {
            debug!(
                event = "core.window.rejected",
                handle = %raw.handle,
                reason = ?reason
            );
            stats.rejected += 1;
            continue;
        }

        if seen.contains(&raw.handle) {
            stats.duplicates += 1;
            continue;
        }

        if entries.len() >= capacity {
            stats.truncated = true;
            break;
        }

        seen.insert(raw.handle);
        entries.push(WindowEntry::from(raw));
    }

    (entries, stats)
}
