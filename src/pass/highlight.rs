//! Top-half highlight pass.

use super::Pass;
use crate::canvas::Canvas;
use crate::color::{self, INDIGO, LIGHT_INDIGO};
use crate::geometry::{Layout, RoundedRectPx};

/// Opacity of each highlight row.
const HIGHLIGHT_ALPHA: u8 = 200;

/// How strongly the lightened hue is mixed in at the canvas midpoint.
const LIGHTEN_RATE: f32 = 0.3;

/// Softly lightens the upper half of the frame.
///
/// For each row in the top half, the primary hue is pulled toward its
/// lightened variant by a factor that grows linearly toward the midpoint,
/// then tinted over the frame at partial opacity. Rows are clipped to the
/// rounded frame so the corner cutouts stay untouched.
pub struct TopHighlight {
    size: u32,
    clip: RoundedRectPx,
}

impl TopHighlight {
    pub fn new(layout: &Layout) -> Self {
        Self {
            size: layout.size,
            clip: layout.frame,
        }
    }
}

impl Pass for TopHighlight {
    fn name(&self) -> &'static str {
        "top-highlight"
    }

    fn apply(&self, canvas: &mut Canvas) {
        for y in 0..self.size {
            let distance_from_top = y as f32 / self.size as f32;
            if distance_from_top >= 0.5 {
                break;
            }
            let factor = 1.0 - distance_from_top * LIGHTEN_RATE;
            let row_color = color::lerp(LIGHT_INDIGO, INDIGO, factor);
            canvas.tint_row_within(y, &self.clip, row_color, HIGHLIGHT_ALPHA);
        }
    }
}
