//! The icon compositor: one-shot, deterministic composition.

use image::RgbaImage;
use tracing::debug;

use crate::canvas::Canvas;
use crate::geometry::Layout;
use crate::pass::Pipeline;

/// Fixed canvas width and height of the exported icon.
pub const ICON_SIZE: u32 = 1024;

/// Composes the application icon.
///
/// All parameters are fixed constants; [`compose`](Self::compose) has no
/// inputs and cannot fail. Drawing is strictly linear: each pass paints on
/// top of the previous one, and re-running the composition yields a
/// byte-identical buffer.
///
/// # Example
///
/// ```
/// use bubble_renderer::IconCompositor;
///
/// let icon = IconCompositor::new().compose();
/// assert_eq!((icon.width(), icon.height()), (1024, 1024));
/// ```
pub struct IconCompositor {
    layout: Layout,
    pipeline: Pipeline,
}

impl IconCompositor {
    /// Creates a compositor for the fixed 1024×1024 composition.
    pub fn new() -> Self {
        let layout = Layout::for_size(ICON_SIZE);
        let pipeline = Pipeline::new(&layout);
        Self { layout, pipeline }
    }

    /// Returns the geometric layout the passes draw against.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Allocates a transparent canvas and runs every drawing pass over it.
    pub fn compose(&self) -> RgbaImage {
        debug!(size = self.layout.size, "composing icon");
        let mut canvas = Canvas::new(self.layout.size);
        self.pipeline.render(&mut canvas);
        canvas.into_image()
    }
}

impl Default for IconCompositor {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
