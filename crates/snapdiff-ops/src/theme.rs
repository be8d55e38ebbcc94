//! Background theme estimation and annotation palettes.
//!
//! Screenshots come in light and dark variants, and an annotation color
//! that pops on one background disappears on the other. Before scanning,
//! the engine samples a few pixels from both inputs to classify the
//! background, then picks the palette with the better contrast.
//!
//! The sampler reads one pixel per 128 along the side of the
//! area-equivalent square, so even very large images cost a few dozen
//! reads.

use snapdiff_core::color::luminance_rec601;
use snapdiff_core::BYTES_PER_PIXEL;

/// Green annotation color with base alpha.
pub const ANNOTATION_GREEN: [u8; 4] = [0x00, 0xCC, 0x00, 0x3F];

/// Red annotation color with base alpha.
pub const ANNOTATION_RED: [u8; 4] = [0xFF, 0x00, 0x00, 0x3F];

/// Base alpha of annotation pixels, before the intensity boost.
pub const ANNOTATION_ALPHA_BASE: u8 = 0x3F;

/// Luma midpoint separating dark backgrounds from light ones.
const DARK_LUMA_CUTOFF: f64 = 128.0;

/// Estimated background theme of the compared images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Bright background (average luma at or above the midpoint).
    Light,
    /// Dark background (average luma below the midpoint).
    Dark,
}

/// Annotation colors chosen for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color for pixels that got brighter.
    pub added: [u8; 4],
    /// Color for pixels that got darker.
    pub removed: [u8; 4],
}

impl Theme {
    /// Returns the annotation palette for this theme.
    ///
    /// Dark themes mark additions green and removals red; light themes
    /// swap the two so both colors keep contrast against the background.
    #[inline]
    pub const fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                added: ANNOTATION_GREEN,
                removed: ANNOTATION_RED,
            },
            Theme::Light => Palette {
                added: ANNOTATION_RED,
                removed: ANNOTATION_GREEN,
            },
        }
    }
}

/// Estimates the background theme from sparse samples of both buffers.
///
/// `baseline` and `candidate` are interleaved RGBA bytes of equal length.
/// Takes `ceil(sqrt(area) / 128)` evenly spaced samples, averages the
/// Rec.601 luma over both buffers, and calls the result dark below 128.
///
/// Empty input returns [`Theme::Light`].
///
/// # Example
///
/// ```rust
/// use snapdiff_ops::{estimate_theme, Theme};
///
/// let black = vec![0u8; 16 * 16 * 4];
/// assert_eq!(estimate_theme(&black, &black), Theme::Dark);
/// ```
pub fn estimate_theme(baseline: &[u8], candidate: &[u8]) -> Theme {
    debug_assert_eq!(baseline.len(), candidate.len());
    debug_assert_eq!(baseline.len() % BYTES_PER_PIXEL, 0);

    let area = baseline.len() / BYTES_PER_PIXEL;
    if area == 0 {
        return Theme::Light;
    }

    let samples = ((area as f64).sqrt() / 128.0).ceil().max(1.0) as usize;
    let step = area / samples;

    let mut sum = 0.0f64;
    for i in 0..samples {
        let offset = i * step * BYTES_PER_PIXEL;
        sum += (sample_luma(baseline, offset) + sample_luma(candidate, offset)) / 2.0;
    }

    if sum / (samples as f64) < DARK_LUMA_CUTOFF {
        Theme::Dark
    } else {
        Theme::Light
    }
}

#[inline]
fn sample_luma(data: &[u8], offset: usize) -> f64 {
    luminance_rec601([
        data[offset] as f32,
        data[offset + 1] as f32,
        data[offset + 2] as f32,
    ]) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(pixel: [u8; 4], count: usize) -> Vec<u8> {
        pixel.iter().copied().cycle().take(count * 4).collect()
    }

    #[test]
    fn test_black_is_dark() {
        let black = solid([0, 0, 0, 255], 64 * 64);
        assert_eq!(estimate_theme(&black, &black), Theme::Dark);
    }

    #[test]
    fn test_white_is_light() {
        let white = solid([255, 255, 255, 255], 64 * 64);
        assert_eq!(estimate_theme(&white, &white), Theme::Light);
    }

    #[test]
    fn test_mixed_inputs_average() {
        // Black baseline against white candidate averages just below the
        // cutoff, so the pair still counts as dark
        let black = solid([0, 0, 0, 255], 32 * 32);
        let white = solid([255, 255, 255, 255], 32 * 32);
        assert_eq!(estimate_theme(&black, &white), Theme::Dark);
    }

    #[test]
    fn test_cutoff_neighbors() {
        let below = solid([127, 127, 127, 255], 64 * 64);
        assert_eq!(estimate_theme(&below, &below), Theme::Dark);

        let above = solid([129, 129, 129, 255], 64 * 64);
        assert_eq!(estimate_theme(&above, &above), Theme::Light);
    }

    #[test]
    fn test_single_pixel() {
        let px = solid([200, 200, 200, 255], 1);
        assert_eq!(estimate_theme(&px, &px), Theme::Light);
    }

    #[test]
    fn test_empty_defaults_light() {
        assert_eq!(estimate_theme(&[], &[]), Theme::Light);
    }

    #[test]
    fn test_palette_contrast() {
        assert_eq!(Theme::Dark.palette().added, ANNOTATION_GREEN);
        assert_eq!(Theme::Dark.palette().removed, ANNOTATION_RED);
        assert_eq!(Theme::Light.palette().added, ANNOTATION_RED);
        assert_eq!(Theme::Light.palette().removed, ANNOTATION_GREEN);
    }
}
