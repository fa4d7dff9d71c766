use crate::config::OverlayConfig;

/// Size of the primary display in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

/// Position and size of the overlay window, plus the row metrics used to
/// draw into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub row_height: i32,
    pub padding: i32,
}

impl OverlayLayout {
    /// Top edge of a row in client coordinates.
    pub fn row_top(&self, index: usize) -> i32 {
        self.padding
            .saturating_add(self.row_height.saturating_mul(clamp_i32(index)))
    }
}

fn clamp_i32<T: TryInto<i32>>(value: T) -> i32 {
    value.try_into().unwrap_or(i32::MAX)
}

/// Size the overlay to fit `rows` entries and centre it on the screen.
///
/// Height grows linearly with the number of rows. The overlay never starts
/// above or left of the screen origin, even if it is larger than the screen.
/// Arithmetic saturates, so out-of-range geometry yields a huge overlay
/// pinned to the origin rather than an overflow.
pub fn compute_layout(rows: usize, screen: ScreenSize, config: &OverlayConfig) -> OverlayLayout {
    let row_height = clamp_i32(config.row_height);
    let padding = clamp_i32(config.padding);
    let width = clamp_i32(config.width);
    let height = row_height
        .saturating_mul(clamp_i32(rows))
        .saturating_add(padding);

    OverlayLayout {
        x: (screen.width.saturating_sub(width) / 2).max(0),
        y: (screen.height.saturating_sub(height) / 2).max(0),
        width,
        height,
        row_height,
        padding,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenSize = ScreenSize {
        width: 1920,
        height: 1080,
    };

    #[test]
    fn test_height_scales_with_rows() {
        let config = OverlayConfig::default();

        let layout = compute_layout(3, SCREEN, &config);
        assert_eq!(layout.height, 130);
        assert_eq!(layout.width, 1200);

        let layout = compute_layout(10, SCREEN, &config);
        assert_eq!(layout.height, 410);
    }

    #[test]
    fn test_centered_on_screen() {
        let layout = compute_layout(3, SCREEN, &OverlayConfig::default());
        assert_eq!(layout.x, 360);
        assert_eq!(layout.y, 475);
    }

    #[test]
    fn test_empty_snapshot_keeps_padding() {
        let layout = compute_layout(0, SCREEN, &OverlayConfig::default());
        assert_eq!(layout.height, 10);
    }

    #[test]
    fn test_oversized_overlay_is_clamped_to_origin() {
        let layout = compute_layout(100, SCREEN, &OverlayConfig::default());
        assert_eq!(layout.height, 4010);
        assert_eq!(layout.y, 0);
    }

    #[test]
    fn test_out_of_range_geometry_saturates() {
        let config = OverlayConfig {
            row_height: 3_000_000_000,
            padding: u32::MAX,
            width: u32::MAX,
            ..OverlayConfig::default()
        };

        let layout = compute_layout(3, SCREEN, &config);
        assert_eq!(layout.height, i32::MAX);
        assert_eq!(layout.width, i32::MAX);
        assert_eq!((layout.x, layout.y), (0, 0));
        assert_eq!(layout.row_top(2), i32::MAX);
        assert_eq!(layout.row_top(usize::MAX), i32::MAX);
    }

    #[test]
    fn test_row_top() {
        let layout = compute_layout(3, SCREEN, &OverlayConfig::default());
        assert_eq!(layout.row_top(0), 10);
        assert_eq!(layout.row_top(2), 90);
    }
}
