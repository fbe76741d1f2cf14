//! Error types for icon rendering and export.

use thiserror::Error;

/// Errors that can occur while exporting the composed icon.
///
/// Composition itself is infallible; the only failure surface is persisting
/// the result to disk.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output file could not be created or written.
    #[error("failed to write icon file: {0}")]
    Io(#[from] std::io::Error),

    /// The pixel buffer could not be encoded as PNG.
    #[error("failed to encode icon as PNG: {0}")]
    Encode(#[from] image::ImageError),
}
