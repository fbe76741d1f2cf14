//! Drawing-pass infrastructure for the icon composition.
//!
//! Each pass encapsulates one discrete drawing operation over the shared
//! [`Canvas`]. Passes are constructed once from the [`Layout`] and applied in
//! a fixed linear order by [`Pipeline`]; later passes draw on top of earlier
//! ones but never make decisions based on pixels an earlier pass wrote.
//!
//! # Pass Order
//!
//! ```text
//! Transparent canvas
//!     │
//!     ▼
//! ┌───────────────────┐
//! │ BackdropGradient  │  full-width indigo→purple ramp
//! └─────────┬─────────┘
//!           ▼
//! ┌───────────────────┐
//! │   RoundedFrame    │  opaque indigo fill + corner clipping
//! └─────────┬─────────┘
//!           ▼
//! ┌───────────────────┐
//! │   TopHighlight    │  soft lightening over the top half
//! └─────────┬─────────┘
//!           ▼
//! ┌───────────────────┐
//! │      Bubble       │  chat bubble body + tail
//! └─────────┬─────────┘
//!           ▼
//! ┌───────────────────┐
//! │  CircuitPattern   │  grid strokes + intersection nodes
//! └─────────┬─────────┘
//!           ▼
//! ┌───────────────────┐
//! │ Sparkles, Dots    │  accent disks
//! └───────────────────┘
//! ```
//!
//! The backdrop ramp is almost entirely overpainted by the frame; the order
//! is kept anyway because it is the composition's defined layering.

pub mod accents;
pub mod backdrop;
pub mod bubble;
pub mod circuit;
pub mod frame;
pub mod highlight;

pub use accents::{CornerDots, Sparkles};
pub use backdrop::BackdropGradient;
pub use bubble::Bubble;
pub use circuit::CircuitPattern;
pub use frame::RoundedFrame;
pub use highlight::TopHighlight;

use tracing::debug;

use crate::canvas::Canvas;
use crate::geometry::Layout;

/// One discrete drawing operation applied to the canvas.
pub trait Pass {
    /// Stable name for logging.
    fn name(&self) -> &'static str;

    /// Draws this pass onto the canvas.
    fn apply(&self, canvas: &mut Canvas);
}

/// The fixed-order sequence of drawing passes.
pub struct Pipeline {
    backdrop: BackdropGradient,
    frame: RoundedFrame,
    highlight: TopHighlight,
    bubble: Bubble,
    circuit: CircuitPattern,
    sparkles: Sparkles,
    corner_dots: CornerDots,
}

impl Pipeline {
    /// Builds every pass from the layout.
    pub fn new(layout: &Layout) -> Self {
        Self {
            backdrop: BackdropGradient::new(layout),
            frame: RoundedFrame::new(layout),
            highlight: TopHighlight::new(layout),
            bubble: Bubble::new(layout),
            circuit: CircuitPattern::new(layout),
            sparkles: Sparkles::new(layout),
            corner_dots: CornerDots::new(layout),
        }
    }

    /// Applies every pass to the canvas, in order.
    pub fn render(&self, canvas: &mut Canvas) {
        for pass in self.passes() {
            debug!(pass = pass.name(), "applying pass");
            pass.apply(canvas);
        }
    }

    fn passes(&self) -> [&dyn Pass; 7] {
        [
            &self.backdrop,
            &self.frame,
            &self.highlight,
            &self.bubble,
            &self.circuit,
            &self.sparkles,
            &self.corner_dots,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_pass_order() {
        let layout = Layout::for_size(1024);
        let pipeline = Pipeline::new(&layout);
        let names: Vec<&str> = pipeline.passes().iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            [
                "backdrop-gradient",
                "rounded-frame",
                "top-highlight",
                "bubble",
                "circuit-pattern",
                "sparkles",
                "corner-dots",
            ]
        );
    }
}
