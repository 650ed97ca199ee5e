//! Dither pattern drawing for e-ink style overlays.
//!
//! Pressed and hovered controls get a checkerboard instead of a solid fill,
//! so the label underneath stays readable on a two-color display.

use egui::{Color32, Painter, Pos2, Rect, Vec2};

/// Pixel offsets of a checkerboard pattern inside a `width` × `height` box.
///
/// `density` is the spacing between dots: 1 is a 50% checkerboard, 2 is a
/// sparser pattern. Rows alternate their starting column.
pub fn checkerboard(width: u32, height: u32, density: u32) -> Vec<(u32, u32)> {
    let density = density.max(1);
    let mut dots = Vec::new();
    let mut y = 0;
    while y < height {
        let shifted = (y / density) % 2 == 1;
        let mut x = if shifted { density } else { 0 };
        while x < width {
            dots.push((x, y));
            x += density * 2;
        }
        y += density;
    }
    dots
}

/// Draw a checkerboard dither over `rect` in `color`.
pub fn draw_dither_rect(painter: &Painter, rect: Rect, color: Color32, density: u32) {
    let width = rect.width().max(0.0) as u32;
    let height = rect.height().max(0.0) as u32;
    let origin = Pos2::new(rect.min.x.floor(), rect.min.y.floor());

    for (x, y) in checkerboard(width, height, density) {
        let dot = Rect::from_min_size(origin + Vec2::new(x as f32, y as f32), Vec2::splat(1.0));
        painter.rect_filled(dot, 0.0, color);
    }
}

/// Dense dither used for pressed buttons.
pub fn draw_dither_selection(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 1);
}

/// Lighter dither used for hover.
pub fn draw_dither_hover(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 2);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_alternates_rows() {
        let dots = checkerboard(4, 2, 1);
        assert_eq!(dots, vec![(0, 0), (2, 0), (1, 1), (3, 1)]);
    }

    #[test]
    fn test_checkerboard_sparse() {
        let dots = checkerboard(8, 4, 2);
        assert_eq!(dots, vec![(0, 0), (4, 0), (2, 2), (6, 2)]);
    }

    #[test]
    fn test_checkerboard_empty_and_zero_density() {
        assert!(checkerboard(0, 10, 1).is_empty());
        assert!(checkerboard(10, 0, 1).is_empty());
        // density 0 is treated as 1
        assert_eq!(checkerboard(2, 1, 0), vec![(0, 0)]);
    }
}
