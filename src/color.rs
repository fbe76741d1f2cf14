//! The icon palette and channel-wise color math.
//!
//! All colors come from the application theme and are fixed at compile time.
//! The math here deliberately works in 8-bit integer space with float
//! truncation, so the composed output is bit-for-bit reproducible.

use image::Rgba;

// ============================================================================
// Palette
// ============================================================================

/// Primary hue (#6366F1).
pub const INDIGO: Rgba<u8> = Rgba([99, 102, 241, 255]);

/// Secondary hue (#8B5CF6).
pub const PURPLE: Rgba<u8> = Rgba([139, 92, 246, 255]);

/// Lightened primary (#818CF8).
pub const LIGHT_INDIGO: Rgba<u8> = Rgba([129, 140, 248, 255]);

/// Lightened secondary (#A78BFA).
pub const LIGHT_PURPLE: Rgba<u8> = Rgba([167, 139, 250, 255]);

/// Opaque white.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

// ============================================================================
// Color Math
// ============================================================================

/// Returns `color` with its alpha channel replaced.
pub fn with_alpha(color: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], alpha])
}

/// Linearly interpolates two colors channel-wise.
///
/// `ratio` is clamped to `[0.0, 1.0]`; `0.0` yields `from`, `1.0` yields `to`.
/// Each channel is computed in `f32` and truncated back to `u8`.
pub fn lerp(from: Rgba<u8>, to: Rgba<u8>, ratio: f32) -> Rgba<u8> {
    let ratio = ratio.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f32 * (1.0 - ratio) + b as f32 * ratio) as u8;
    Rgba([
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2]),
        channel(from[3], to[3]),
    ])
}

/// Mixes `src` into `dst` by `alpha`, preserving the destination alpha.
///
/// This is the tint operation used by the decorative passes: a partial-opacity
/// stroke shifts the color underneath it without changing how much of the
/// pixel the icon covers. `alpha` of 0 leaves `dst` untouched; 255 replaces
/// the color channels outright.
pub fn tint(dst: Rgba<u8>, src: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    let a = alpha as u32;
    let channel = |d: u8, s: u8| ((s as u32 * a + d as u32 * (255 - a)) / 255) as u8;
    Rgba([
        channel(dst[0], src[0]),
        channel(dst[1], src[1]),
        channel(dst[2], src[2]),
        dst[3],
    ])
}

// ============================================================================
// Tests
// ============================================================================
