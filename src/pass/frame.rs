//! Rounded frame pass.

use super::Pass;
use crate::canvas::Canvas;
use crate::color::INDIGO;
use crate::geometry::{Layout, RoundedRectPx};
use image::Rgba;

/// Re-establishes the solid rounded-cornered frame over the backdrop.
///
/// Fills the full-canvas rounded rectangle with opaque primary hue and clears
/// everything outside it, so the corner cutouts export as fully transparent.
pub struct RoundedFrame {
    shape: RoundedRectPx,
    fill: Rgba<u8>,
}

impl RoundedFrame {
    pub fn new(layout: &Layout) -> Self {
        Self {
            shape: layout.frame,
            fill: INDIGO,
        }
    }
}

impl Pass for RoundedFrame {
    fn name(&self) -> &'static str {
        "rounded-frame"
    }

    fn apply(&self, canvas: &mut Canvas) {
        canvas.fill_rounded_rect(&self.shape, self.fill);
        canvas.clear_outside(&self.shape);
    }
}
