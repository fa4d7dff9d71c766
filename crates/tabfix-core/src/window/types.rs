use std::fmt;

/// Maximum number of windows kept in one snapshot. Further windows are dropped.
pub const MAX_SNAPSHOT_WINDOWS: usize = 1024;

/// Opaque OS window identifier.
///
/// The OS owns the window; this is only a copyable reference to it and may
/// go stale if the window closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(isize);

impl WindowHandle {
    pub fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    pub fn as_raw(&self) -> isize {
        self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// Unfiltered description of a top-level window as reported by the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawWindow {
    pub handle: WindowHandle,
    pub process_id: u32,
    pub title: String,
    pub class_name: String,
    pub visible: bool,
    /// `WS_CHILD` style bit is set.
    pub child: bool,
    /// `WS_EX_TOOLWINDOW` extended style bit is set.
    pub tool_window: bool,
}

/// One switchable window captured at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowEntry {
    pub handle: WindowHandle,
    pub process_id: u32,
    pub title: String,
    pub class_name: String,
}

impl From<RawWindow> for WindowEntry {
    fn from(raw: RawWindow) -> Self {
        Self {
            handle: raw.handle,
            process_id: raw.process_id,
            title: raw.title,
            class_name: raw.class_name,
        }
    }
}

/// Ordered set of switchable windows for one overlay activation.
///
/// Order is the OS enumeration order and drives both list position and
/// mnemonic disambiguation. Handles are unique within a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<WindowEntry>,
}

impl Snapshot {
    pub fn new(entries: Vec<WindowEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[WindowEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&WindowEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowEntry> {
        self.entries.iter()
    }
}
