//! Chat bubble pass.

use super::Pass;
use crate::canvas::Canvas;
use crate::color::{self, WHITE};
use crate::geometry::{Layout, PointPx, RoundedRectPx};
use image::Rgba;

/// Alpha of the bubble fill: white with slight transparency.
const BUBBLE_FILL_ALPHA: u8 = 242;

/// Draws the centered chat bubble body and its tail.
///
/// The body is a rounded rectangle filled near-opaque white; the tail is a
/// triangle attached to the body's left edge pointing outward, same fill.
pub struct Bubble {
    body: RoundedRectPx,
    tail: [PointPx; 3],
    fill: Rgba<u8>,
}

impl Bubble {
    pub fn new(layout: &Layout) -> Self {
        Self {
            body: layout.bubble,
            tail: layout.tail,
            fill: color::with_alpha(WHITE, BUBBLE_FILL_ALPHA),
        }
    }
}

impl Pass for Bubble {
    fn name(&self) -> &'static str {
        "bubble"
    }

    fn apply(&self, canvas: &mut Canvas) {
        canvas.fill_rounded_rect(&self.body, self.fill);
        canvas.fill_triangle(self.tail, self.fill);
    }
}
