//! The mutable RGBA canvas and its drawing primitives.
//!
//! [`Canvas`] wraps an [`image::RgbaImage`] and exposes exactly the
//! primitives the drawing passes need. Two families exist:
//!
//! - **fill** primitives replace destination pixels outright (RGBA included);
//! - **tint** primitives mix a color into the destination channel-wise by a
//!   source alpha while preserving the destination alpha, so partial-opacity
//!   decoration never changes the icon's coverage.
//!
//! All primitives clip silently at the canvas edges.

use image::{Rgba, RgbaImage};

use crate::color;
use crate::geometry::{PointPx, RoundedRectPx};

/// The pixel buffer being composited.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocates a fully transparent square canvas.
    pub fn new(size: u32) -> Self {
        Self {
            image: RgbaImage::new(size, size),
        }
    }

    /// Canvas width and height in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Returns the pixel at (x, y). Panics if out of bounds; callers clip first.
    pub fn get(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Borrows the underlying image.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consumes the canvas, yielding the composited image.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    // ------------------------------------------------------------------
    // Fill primitives (replace)
    // ------------------------------------------------------------------

    /// Replaces every pixel of row `y` with `color`.
    pub fn fill_row(&mut self, y: u32, color: Rgba<u8>) {
        if y >= self.image.height() {
            return;
        }
        for x in 0..self.image.width() {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Replaces every pixel inside the rounded rectangle with `color`.
    pub fn fill_rounded_rect(&mut self, shape: &RoundedRectPx, color: Rgba<u8>) {
        let r = shape.rect;
        let y_end = r.bottom().min(self.image.height());
        let x_end = r.right().min(self.image.width());
        for y in r.y..y_end {
            for x in r.x..x_end {
                if shape.contains(x, y) {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Clears every pixel outside the rounded rectangle to full transparency.
    pub fn clear_outside(&mut self, shape: &RoundedRectPx) {
        for y in 0..self.image.height() {
            for x in 0..self.image.width() {
                if !shape.contains(x, y) {
                    self.image.put_pixel(x, y, Rgba([0, 0, 0, 0]));
                }
            }
        }
    }

    /// Replaces every pixel inside the triangle with `color`.
    ///
    /// Scanline fill over the bounding box with an edge-sign test; pixels on
    /// an edge count as inside.
    pub fn fill_triangle(&mut self, points: [PointPx; 3], color: Rgba<u8>) {
        let [a, b, c] = points;
        let min_x = a.x.min(b.x).min(c.x).max(0);
        let max_x = a.x.max(b.x).max(c.x).min(self.image.width() as i32 - 1);
        let min_y = a.y.min(b.y).min(c.y).max(0);
        let max_y = a.y.max(b.y).max(c.y).min(self.image.height() as i32 - 1);

        let edge = |p: PointPx, q: PointPx, x: i32, y: i32| -> i64 {
            (x as i64 - q.x as i64) * (p.y as i64 - q.y as i64)
                - (p.x as i64 - q.x as i64) * (y as i64 - q.y as i64)
        };

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let s1 = edge(a, b, x, y);
                let s2 = edge(b, c, x, y);
                let s3 = edge(c, a, x, y);
                let has_neg = s1 < 0 || s2 < 0 || s3 < 0;
                let has_pos = s1 > 0 || s2 > 0 || s3 > 0;
                if !(has_neg && has_pos) {
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Tint primitives (mix color, preserve alpha)
    // ------------------------------------------------------------------

    /// Tints a single pixel, clipping silently if out of bounds.
    pub fn tint_px(&mut self, x: i32, y: i32, color: Rgba<u8>, alpha: u8) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.image.width() || y >= self.image.height() {
            return;
        }
        let dst = *self.image.get_pixel(x, y);
        self.image.put_pixel(x, y, color::tint(dst, color, alpha));
    }

    /// Tints row `y` wherever it falls inside `clip`.
    pub fn tint_row_within(&mut self, y: u32, clip: &RoundedRectPx, color: Rgba<u8>, alpha: u8) {
        if y >= self.image.height() {
            return;
        }
        for x in 0..self.image.width() {
            if clip.contains(x, y) {
                let dst = *self.image.get_pixel(x, y);
                self.image.put_pixel(x, y, color::tint(dst, color, alpha));
            }
        }
    }

    /// Tints a horizontal stroke of the given width, centered on `y`,
    /// spanning `x0..=x1`.
    pub fn tint_hline(&mut self, x0: i32, x1: i32, y: i32, width: u32, color: Rgba<u8>, alpha: u8) {
        let half = (width / 2) as i32;
        for row in (y - half)..(y - half + width as i32) {
            for x in x0..=x1 {
                self.tint_px(x, row, color, alpha);
            }
        }
    }

    /// Tints a vertical stroke of the given width, centered on `x`,
    /// spanning `y0..=y1`.
    pub fn tint_vline(&mut self, y0: i32, y1: i32, x: i32, width: u32, color: Rgba<u8>, alpha: u8) {
        let half = (width / 2) as i32;
        for col in (x - half)..(x - half + width as i32) {
            for y in y0..=y1 {
                self.tint_px(col, y, color, alpha);
            }
        }
    }

    /// Tints a filled disk of the given radius around `center`.
    pub fn tint_disk(&mut self, center: PointPx, radius: u32, color: Rgba<u8>, alpha: u8) {
        let r = radius as i32;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.tint_px(center.x + dx, center.y + dy, color, alpha);
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RectPx;

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = Canvas::new(8);
        assert_eq!(canvas.get(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(canvas.get(7, 7).0, [0, 0, 0, 0]);
    }

    #[test]
    fn fill_row_replaces_alpha() {
        let mut canvas = Canvas::new(8);
        canvas.fill_row(3, Rgba([10, 20, 30, 200]));
        assert_eq!(canvas.get(0, 3).0, [10, 20, 30, 200]);
        assert_eq!(canvas.get(7, 3).0, [10, 20, 30, 200]);
        assert_eq!(canvas.get(0, 2).0, [0, 0, 0, 0]);
    }

    #[test]
    fn fill_rounded_rect_skips_cut_corners() {
        let mut canvas = Canvas::new(100);
        let shape = RoundedRectPx::new(RectPx::from_size(100, 100), 30);
        canvas.fill_rounded_rect(&shape, Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.get(0, 0)[3], 0);
        assert_eq!(canvas.get(50, 50).0, [255, 0, 0, 255]);
        assert_eq!(canvas.get(50, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn clear_outside_zeroes_corners_only() {
        let mut canvas = Canvas::new(100);
        for y in 0..100 {
            canvas.fill_row(y, Rgba([1, 2, 3, 255]));
        }
        let shape = RoundedRectPx::new(RectPx::from_size(100, 100), 30);
        canvas.clear_outside(&shape);
        assert_eq!(canvas.get(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(canvas.get(99, 99).0, [0, 0, 0, 0]);
        assert_eq!(canvas.get(50, 50).0, [1, 2, 3, 255]);
    }

    #[test]
    fn fill_triangle_covers_interior() {
        let mut canvas = Canvas::new(20);
        canvas.fill_triangle(
            [
                PointPx::new(10, 2),
                PointPx::new(2, 18),
                PointPx::new(18, 18),
            ],
            Rgba([0, 255, 0, 255]),
        );
        // Centroid is inside
        assert_eq!(canvas.get(10, 12).0, [0, 255, 0, 255]);
        // Corners of the canvas are not
        assert_eq!(canvas.get(0, 0)[3], 0);
        assert_eq!(canvas.get(19, 0)[3], 0);
    }

    #[test]
    fn fill_triangle_clips_to_canvas() {
        let mut canvas = Canvas::new(10);
        // Tail-style triangle reaching past the left edge
        canvas.fill_triangle(
            [
                PointPx::new(5, 5),
                PointPx::new(-5, 0),
                PointPx::new(-5, 9),
            ],
            Rgba([9, 9, 9, 255]),
        );
        assert_eq!(canvas.get(0, 5).0, [9, 9, 9, 255]);
    }

    #[test]
    fn tint_px_out_of_bounds_is_noop() {
        let mut canvas = Canvas::new(4);
        canvas.tint_px(-1, 0, Rgba([255, 255, 255, 255]), 255);
        canvas.tint_px(0, 4, Rgba([255, 255, 255, 255]), 255);
        assert_eq!(canvas.get(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn tint_disk_preserves_alpha() {
        let mut canvas = Canvas::new(16);
        for y in 0..16 {
            canvas.fill_row(y, Rgba([0, 0, 0, 242]));
        }
        canvas.tint_disk(PointPx::new(8, 8), 3, Rgba([255, 255, 255, 255]), 128);
        let center = canvas.get(8, 8);
        assert_eq!(center[3], 242);
        assert_eq!(center[0], 128);
    }

    #[test]
    fn tint_hline_width_and_span() {
        let mut canvas = Canvas::new(16);
        canvas.tint_hline(2, 12, 8, 4, Rgba([255, 0, 0, 255]), 255);
        // Stroke covers rows 6..=9
        assert_eq!(canvas.get(2, 6)[0], 255);
        assert_eq!(canvas.get(12, 9)[0], 255);
        assert_eq!(canvas.get(2, 5)[0], 0);
        assert_eq!(canvas.get(2, 10)[0], 0);
        // Endpoints inclusive, neighbors untouched
        assert_eq!(canvas.get(1, 8)[0], 0);
        assert_eq!(canvas.get(13, 8)[0], 0);
    }
}
