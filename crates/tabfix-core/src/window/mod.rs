pub mod errors;
pub mod filter;
pub mod handler;
pub mod traits;
pub mod types;

pub use errors::WindowError;
pub use filter::{Rejection, WindowFilter};
pub use handler::{SnapshotStats, build_snapshot, collect_entries};
pub use traits::WindowSource;
pub use types::{MAX_SNAPSHOT_WINDOWS, RawWindow, Snapshot, WindowEntry, WindowHandle};
