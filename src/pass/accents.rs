//! Accent passes: sparkles around the bubble and corner dots.

use super::Pass;
use crate::canvas::Canvas;
use crate::color::{LIGHT_INDIGO, WHITE};
use crate::geometry::{Layout, PointPx};
use tracing::debug;

const SPARKLE_RADIUS: u32 = 12;
const SPARKLE_ALPHA: u8 = 153;

const DOT_RADIUS: u32 = 30;
const DOT_ALPHA: u8 = 102;

/// Draws a small disk at each outward corner of the bubble's bounding box.
///
/// A sparkle whose center falls outside the canvas is skipped silently.
pub struct Sparkles {
    centers: [PointPx; 4],
    size: u32,
}

impl Sparkles {
    pub fn new(layout: &Layout) -> Self {
        Self {
            centers: layout.sparkle_centers(),
            size: layout.size,
        }
    }

    fn in_bounds(&self, p: PointPx) -> bool {
        p.x >= 0 && (p.x as u32) < self.size && p.y >= 0 && (p.y as u32) < self.size
    }
}

impl Pass for Sparkles {
    fn name(&self) -> &'static str {
        "sparkles"
    }

    fn apply(&self, canvas: &mut Canvas) {
        for center in self.centers {
            if !self.in_bounds(center) {
                debug!(x = center.x, y = center.y, "sparkle center out of bounds, skipping");
                continue;
            }
            canvas.tint_disk(center, SPARKLE_RADIUS, LIGHT_INDIGO, SPARKLE_ALPHA);
        }
    }
}

/// Draws a larger white disk near each canvas corner, purely decorative.
pub struct CornerDots {
    centers: [PointPx; 4],
}

impl CornerDots {
    pub fn new(layout: &Layout) -> Self {
        Self {
            centers: layout.corner_dot_centers(),
        }
    }
}

impl Pass for CornerDots {
    fn name(&self) -> &'static str {
        "corner-dots"
    }

    fn apply(&self, canvas: &mut Canvas) {
        for center in self.centers {
            canvas.tint_disk(center, DOT_RADIUS, WHITE, DOT_ALPHA);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::INDIGO;
    use crate::pass::RoundedFrame;

    #[test]
    fn sparkle_centers_are_in_bounds_for_the_fixed_layout() {
        let layout = Layout::for_size(1024);
        let sparkles = Sparkles::new(&layout);
        for p in sparkles.centers {
            assert!(sparkles.in_bounds(p), "sparkle at ({}, {})", p.x, p.y);
        }
    }

    #[test]
    fn out_of_bounds_sparkle_is_skipped() {
        let layout = Layout::for_size(1024);
        let sparkles = Sparkles {
            centers: [
                PointPx::new(-10, 100),
                PointPx::new(100, 100),
                PointPx::new(2000, 100),
                PointPx::new(100, -1),
            ],
            size: layout.size,
        };
        let mut canvas = Canvas::new(1024);
        RoundedFrame::new(&layout).apply(&mut canvas);
        sparkles.apply(&mut canvas);

        // Only the in-bounds sparkle landed
        assert_ne!(canvas.get(100, 100), INDIGO);
        // Pixels near the skipped left-edge center stay untouched
        assert_eq!(canvas.get(2, 100).0, [0, 0, 0, 0]);
    }

    #[test]
    fn corner_dots_lighten_the_frame() {
        let layout = Layout::for_size(1024);
        let mut canvas = Canvas::new(1024);
        RoundedFrame::new(&layout).apply(&mut canvas);
        CornerDots::new(&layout).apply(&mut canvas);

        let dot = canvas.get(200, 200);
        assert!(dot[0] > INDIGO[0]);
        assert_eq!(dot[3], 255);
        // Outside the dot radius the frame is unchanged
        assert_eq!(canvas.get(200, 260), INDIGO);
    }
}
