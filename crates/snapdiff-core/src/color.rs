//! Perceptual color metrics for pixel comparison.
//!
//! This module provides the two color reductions the diff engine relies on:
//!
//! - **Rec.601 luma** - for estimating whether a screenshot background is
//!   light or dark, so annotation colors keep contrast.
//! - **YIQ distance** - a brightness-weighted squared distance between two
//!   RGB values, computed from signed channel differences. Chroma-only
//!   changes score lower than brightness changes, matching how human
//!   vision weighs them.
//!
//! All transforms here are linear, so applying the YIQ coefficients to
//! channel *differences* yields exactly the difference of the transformed
//! values. The engine exploits this and never converts full pixels.
//!
//! # Example
//!
//! ```rust
//! use snapdiff_core::color::{yiq_distance, YIQ_MAX_DISTANCE};
//!
//! // Black vs white: all channels move by +255
//! let d = yiq_distance(255.0, 255.0, 255.0);
//! assert!(d > 0.0 && d < YIQ_MAX_DISTANCE);
//! ```
//!
//! # Used By
//!
//! - `snapdiff-ops` - Per-pixel classification and theme estimation

// ============================================================================
// Rec.601 Luma Constants
// ============================================================================

/// Rec.601 luma coefficient for the red channel.
///
/// Used in the standard luma formula: `Y = 0.299*R + 0.587*G + 0.114*B`
pub const REC601_LUMA_R: f32 = 0.299;

/// Rec.601 luma coefficient for the green channel.
pub const REC601_LUMA_G: f32 = 0.587;

/// Rec.601 luma coefficient for the blue channel.
pub const REC601_LUMA_B: f32 = 0.114;

/// Rec.601 luma coefficients as an array [R, G, B].
pub const REC601_LUMA: [f32; 3] = [REC601_LUMA_R, REC601_LUMA_G, REC601_LUMA_B];

/// Calculates Rec.601 luma from RGB values.
///
/// The input domain is whatever the caller uses (0-255 byte values or
/// normalized floats); the output lands in the same domain.
///
/// # Example
///
/// ```rust
/// use snapdiff_core::color::luminance_rec601;
///
/// let luma = luminance_rec601([255.0, 255.0, 255.0]);
/// assert!((luma - 255.0).abs() < 1e-3);
/// ```
#[inline]
pub fn luminance_rec601(rgb: [f32; 3]) -> f32 {
    rgb[0] * REC601_LUMA_R + rgb[1] * REC601_LUMA_G + rgb[2] * REC601_LUMA_B
}

// ============================================================================
// YIQ Difference Metric
// ============================================================================

/// YIQ luma (Y) coefficient for the red channel.
pub const YIQ_Y_R: f64 = 0.29889531;
/// YIQ luma (Y) coefficient for the green channel.
pub const YIQ_Y_G: f64 = 0.58662247;
/// YIQ luma (Y) coefficient for the blue channel.
pub const YIQ_Y_B: f64 = 0.11448223;

/// YIQ in-phase (I) coefficient for the red channel.
pub const YIQ_I_R: f64 = 0.59597799;
/// YIQ in-phase (I) coefficient for the green channel.
pub const YIQ_I_G: f64 = -0.27417610;
/// YIQ in-phase (I) coefficient for the blue channel.
pub const YIQ_I_B: f64 = -0.32180189;

/// YIQ quadrature (Q) coefficient for the red channel.
pub const YIQ_Q_R: f64 = 0.21147017;
/// YIQ quadrature (Q) coefficient for the green channel.
pub const YIQ_Q_G: f64 = -0.52261711;
/// YIQ quadrature (Q) coefficient for the blue channel.
pub const YIQ_Q_B: f64 = 0.31114694;

/// Weight of the squared Y (luma) component in the distance.
pub const YIQ_WEIGHT_Y: f64 = 0.5053;
/// Weight of the squared I (in-phase chroma) component in the distance.
pub const YIQ_WEIGHT_I: f64 = 0.299;
/// Weight of the squared Q (quadrature chroma) component in the distance.
pub const YIQ_WEIGHT_Q: f64 = 0.1957;

/// Maximum value of [`yiq_distance`] over the full signed 8-bit delta range.
///
/// Attained when red moves across the full range in the opposite direction
/// of green and blue. Thresholds are expressed as a fraction of this value:
/// a pixel is flagged when `distance > threshold^2 * YIQ_MAX_DISTANCE`.
pub const YIQ_MAX_DISTANCE: f64 = 35215.0;

/// Y (luma) component of an RGB triple or difference.
///
/// The transform is linear: feeding signed channel differences returns the
/// signed luma difference. The sign tells brightening (`> 0`) from
/// darkening (`< 0`).
#[inline]
pub fn yiq_y(r: f64, g: f64, b: f64) -> f64 {
    r * YIQ_Y_R + g * YIQ_Y_G + b * YIQ_Y_B
}

/// I (in-phase chroma) component of an RGB triple or difference.
#[inline]
pub fn yiq_i(r: f64, g: f64, b: f64) -> f64 {
    r * YIQ_I_R + g * YIQ_I_G + b * YIQ_I_B
}

/// Q (quadrature chroma) component of an RGB triple or difference.
#[inline]
pub fn yiq_q(r: f64, g: f64, b: f64) -> f64 {
    r * YIQ_Q_R + g * YIQ_Q_G + b * YIQ_Q_B
}

/// Brightness-weighted squared YIQ distance of a signed RGB difference.
///
/// `distance = 0.5053*dy^2 + 0.299*di^2 + 0.1957*dq^2`
///
/// Ranges from 0 (identical) to [`YIQ_MAX_DISTANCE`].
///
/// # Example
///
/// ```rust
/// use snapdiff_core::color::yiq_distance;
///
/// assert_eq!(yiq_distance(0.0, 0.0, 0.0), 0.0);
/// assert!(yiq_distance(10.0, 0.0, 0.0) > 0.0);
/// ```
#[inline]
pub fn yiq_distance(dr: f64, dg: f64, db: f64) -> f64 {
    let dy = yiq_y(dr, dg, db);
    let di = yiq_i(dr, dg, db);
    let dq = yiq_q(dr, dg, db);
    YIQ_WEIGHT_Y * dy * dy + YIQ_WEIGHT_I * di * di + YIQ_WEIGHT_Q * dq * dq
}
