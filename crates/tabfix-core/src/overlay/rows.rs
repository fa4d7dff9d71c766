use crate::mnemonic::Mnemonic;
use crate::window::{Snapshot, WindowHandle};

/// Separator between the code, title and class of a row.
pub const ROW_DELIMITER: &str = " | ";

/// One renderable line of the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayRow {
    pub handle: WindowHandle,
    pub code: Mnemonic,
    pub title: String,
    pub class_name: String,
}

/// Text of a row: code, title and class joined by [`ROW_DELIMITER`].
pub fn format_row(row: &OverlayRow) -> String {
    format!(
        "{}{}{}{}{}",
        row.code, ROW_DELIMITER, row.title, ROW_DELIMITER, row.class_name
    )
}

/// Pair snapshot entries with their codes, in snapshot order.
pub fn build_rows(snapshot: &Snapshot, codes: &[Mnemonic]) -> Vec<OverlayRow> {
    snapshot
        .iter()
        .zip(codes)
        .map(|(entry, code)| OverlayRow {
            handle: entry.handle,
            code: *code,
            title: entry.title.clone(),
            class_name: entry.class_name.clone(),
        })
        .collect()
}
