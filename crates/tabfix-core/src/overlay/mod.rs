//! Geometry and text of the overlay list.

pub mod layout;
pub mod rows;

pub use layout::{OverlayLayout, ScreenSize, compute_layout};
pub use rows::{ROW_DELIMITER, OverlayRow, build_rows, format_row};
