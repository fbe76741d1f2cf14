//! bubble-renderer: procedural chat-bubble application icon
//!
//! This crate draws one fixed 1024×1024 icon — a gradient-backed rounded
//! frame holding a stylized chat bubble with a decorative circuit pattern,
//! sparkle accents, and corner dots — and exports it as an RGBA PNG.
//!
//! The composition is deterministic: no randomness, no inputs, no
//! configuration. Every geometric constant is derived once from the canvas
//! size, and the drawing passes run in a fixed linear order.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use bubble_renderer::{export, IconCompositor};
//!
//! let icon = IconCompositor::new().compose();
//! export::write_png(&icon, Path::new("app_icon.png")).unwrap();
//! ```

mod canvas;
mod color;
mod compositor;
mod error;
mod geometry;
mod pass;

pub mod export;

pub use canvas::Canvas;
pub use color::{INDIGO, LIGHT_INDIGO, LIGHT_PURPLE, PURPLE, WHITE};
pub use compositor::{ICON_SIZE, IconCompositor};
pub use error::RenderError;
pub use geometry::{Layout, PointPx, RectPx, RoundedRectPx};
pub use pass::{Pass, Pipeline};
