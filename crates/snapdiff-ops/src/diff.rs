//! Perceptual pixel diff.
//!
//! Compares a baseline and a candidate RGBA buffer pixel by pixel and
//! paints the perceptible differences into a caller-provided diff buffer.
//! Each run returns summary statistics alongside the annotated image.
//!
//! # Algorithm
//!
//! Each pixel pair goes through a cheap 4-byte equality check first; only
//! unequal pairs pay for the color math. The signed channel differences
//! are projected into YIQ, and the brightness-weighted squared distance
//! is compared against `threshold^2 * 35215` (the maximum of the metric).
//! Flagged pixels are painted with a theme-aware color whose alpha rises
//! with the luma shift; see [`crate::theme`].
//!
//! # Layouts
//!
//! The diff buffer selects the output layout by its width:
//!
//! - [`DiffLayout::DiffOnly`] - same size as the inputs, annotations only
//! - [`DiffLayout::SideBySide`] - three times as wide; every row carries
//!   the baseline, the candidate, and the annotated diff side by side
//!
//! # Example
//!
//! ```rust
//! use snapdiff_core::PixelBuffer;
//! use snapdiff_ops::{diff, DiffOptions};
//!
//! let baseline = PixelBuffer::filled(8, 8, [0, 0, 0, 255]);
//! let candidate = PixelBuffer::filled(8, 8, [0, 0, 0, 255]);
//! let mut output = PixelBuffer::new(8, 8);
//!
//! let result = diff(&baseline, &candidate, &mut output, &DiffOptions::default()).unwrap();
//! assert!(result.is_match());
//! ```

use crate::error::{DiffError, Result};
use crate::minimap::{Minimap, CELL_SIZE};
use crate::options::DiffOptions;
use crate::theme::{estimate_theme, Palette, ANNOTATION_ALPHA_BASE};
use snapdiff_core::color::{yiq_i, yiq_q, yiq_y, YIQ_WEIGHT_I, YIQ_WEIGHT_Q, YIQ_WEIGHT_Y};
use snapdiff_core::{PixelBuffer, BYTES_PER_PIXEL, YIQ_MAX_DISTANCE};
#[allow(unused_imports)]
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Multiplier spreading pixel positions across the hash space.
pub const HASH_SPREAD: u64 = 0xF073_1337;

/// Output layout, selected by the diff buffer width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffLayout {
    /// Diff buffer matches the input size; only annotations are written.
    DiffOnly,
    /// Diff buffer is three inputs wide; rows hold baseline, candidate,
    /// and the annotated diff in that order.
    SideBySide,
}

impl DiffLayout {
    /// Diff buffer width as a multiple of the input width.
    #[inline]
    pub const fn width_factor(self) -> u32 {
        match self {
            DiffLayout::DiffOnly => 1,
            DiffLayout::SideBySide => 3,
        }
    }

    /// X pixel offset of the annotated diff region within a diff row.
    #[inline]
    pub const fn diff_x_offset(self, width: u32) -> usize {
        match self {
            DiffLayout::DiffOnly => 0,
            DiffLayout::SideBySide => 2 * width as usize,
        }
    }
}

/// Summary statistics of one diff run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffResult {
    /// Number of pixels whose perceptual distance exceeded the threshold.
    pub diff_count: u64,

    /// Position-sensitive fingerprint of the changed pixel set.
    ///
    /// Zero when nothing changed. The sum is anchored on the first
    /// change, so a single changed pixel also yields zero. Two runs with
    /// the same changed positions produce the same value regardless of
    /// how strongly the pixels differ.
    pub hash: u64,

    /// Sum of per-pixel luma shifts, each normalized to the maximum YIQ
    /// distance. Grows with both the extent and the severity of changes.
    pub cumulative_delta: f64,
}

impl DiffResult {
    /// Returns `true` if no pixel difference exceeded the threshold.
    #[inline]
    pub fn is_match(&self) -> bool {
        self.diff_count == 0
    }
}

// ============================================================================
// Validation
// ============================================================================

pub(crate) fn validate_buffers(
    baseline: &PixelBuffer,
    candidate: &PixelBuffer,
    diff: &PixelBuffer,
) -> Result<DiffLayout> {
    let (width, height) = baseline.dimensions();
    if candidate.dimensions() != (width, height) {
        return Err(DiffError::DimensionMismatch(format!(
            "baseline {}x{} vs candidate {}x{}",
            width,
            height,
            candidate.width(),
            candidate.height()
        )));
    }
    if width == 0 || height == 0 {
        return Err(DiffError::InvalidDiffLayout(format!(
            "zero-area input {width}x{height}"
        )));
    }
    if diff.height() != height {
        return Err(DiffError::InvalidDiffLayout(format!(
            "diff height {} does not match input height {}",
            diff.height(),
            height
        )));
    }
    if diff.width() as u64 == width as u64 {
        Ok(DiffLayout::DiffOnly)
    } else if diff.width() as u64 == 3 * width as u64 {
        Ok(DiffLayout::SideBySide)
    } else {
        Err(DiffError::InvalidDiffLayout(format!(
            "diff width {} is neither {} nor {}",
            diff.width(),
            width,
            3 * width as u64
        )))
    }
}

pub(crate) fn validate_slices(
    baseline: &[u8],
    candidate: &[u8],
    diff: &[u8],
    width: u32,
    height: u32,
) -> Result<DiffLayout> {
    let area_bytes = (width as u64)
        .checked_mul(height as u64)
        .and_then(|v| v.checked_mul(BYTES_PER_PIXEL as u64))
        .ok_or_else(|| {
            DiffError::DimensionMismatch(format!(
                "dimensions {width}x{height} overflow the byte size calculation"
            ))
        })?;
    if baseline.len() as u64 != area_bytes || candidate.len() as u64 != area_bytes {
        return Err(DiffError::DimensionMismatch(format!(
            "{}x{} input needs {} bytes, got baseline={}, candidate={}",
            width,
            height,
            area_bytes,
            baseline.len(),
            candidate.len()
        )));
    }
    if width == 0 || height == 0 {
        return Err(DiffError::InvalidDiffLayout(format!(
            "zero-area input {width}x{height}"
        )));
    }
    let diff_len = diff.len() as u64;
    if diff_len == area_bytes {
        Ok(DiffLayout::DiffOnly)
    } else if Some(diff_len) == area_bytes.checked_mul(3) {
        Ok(DiffLayout::SideBySide)
    } else {
        Err(DiffError::InvalidDiffLayout(format!(
            "{} diff bytes fit neither same-size nor side-by-side layout for {width}x{height}",
            diff.len()
        )))
    }
}

// ============================================================================
// Row scanning
// ============================================================================

/// Per-run scan parameters shared by every row.
#[derive(Debug, Clone)]
pub(crate) struct ScanParams {
    pub(crate) width: u32,
    pub(crate) layout: DiffLayout,
    pub(crate) delta_threshold: f64,
    pub(crate) palette: Palette,
    /// Minimap cell columns, 0 when the minimap is disabled
    pub(crate) cell_columns: usize,
}

pub(crate) fn scan_params(
    baseline: &[u8],
    candidate: &[u8],
    width: u32,
    layout: DiffLayout,
    options: &DiffOptions,
) -> ScanParams {
    let threshold = options.threshold as f64;
    ScanParams {
        width,
        layout,
        delta_threshold: threshold * threshold * YIQ_MAX_DISTANCE,
        palette: estimate_theme(baseline, candidate).palette(),
        cell_columns: if options.minimap {
            width.div_ceil(CELL_SIZE) as usize
        } else {
            0
        },
    }
}

/// Scan products of one image row.
#[derive(Debug, Default)]
pub(crate) struct RowDiff {
    pub(crate) count: u64,
    pub(crate) hash_sum: u64,
    /// (linear position, hash index) of the earliest change in this row
    pub(crate) first: Option<(u64, u64)>,
    pub(crate) delta_sum: f64,
    /// Per-cell-column change counts; empty when nothing changed or the
    /// minimap is disabled
    pub(crate) cells: Vec<u32>,
}

/// Scans one row: copies side panels if the layout has them, then
/// classifies and annotates every pixel pair.
pub(crate) fn process_row(
    y: u32,
    baseline_row: &[u8],
    candidate_row: &[u8],
    diff_row: &mut [u8],
    params: &ScanParams,
) -> RowDiff {
    let row_bytes = params.width as usize * BYTES_PER_PIXEL;
    let annotation_row = match params.layout {
        DiffLayout::DiffOnly => diff_row,
        DiffLayout::SideBySide => {
            let (panels, annotation) = diff_row.split_at_mut(2 * row_bytes);
            panels[..row_bytes].copy_from_slice(baseline_row);
            panels[row_bytes..].copy_from_slice(candidate_row);
            annotation
        }
    };
    scan_row(y, baseline_row, candidate_row, annotation_row, params)
}

fn scan_row(
    y: u32,
    baseline_row: &[u8],
    candidate_row: &[u8],
    annotation_row: &mut [u8],
    params: &ScanParams,
) -> RowDiff {
    let mut row = RowDiff::default();
    let row_hash_base = (y as u64 ^ HASH_SPREAD).wrapping_mul(HASH_SPREAD);
    let row_position_base = y as u64 * params.width as u64;

    let pairs = baseline_row
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(candidate_row.chunks_exact(BYTES_PER_PIXEL));
    for (x, (base_px, cand_px)) in pairs.enumerate() {
        if base_px == cand_px {
            continue;
        }

        let dr = cand_px[0] as f64 - base_px[0] as f64;
        let dg = cand_px[1] as f64 - base_px[1] as f64;
        let db = cand_px[2] as f64 - base_px[2] as f64;

        // Alpha is ignored by the metric: equal-color pairs score zero
        let dy = yiq_y(dr, dg, db);
        let di = yiq_i(dr, dg, db);
        let dq = yiq_q(dr, dg, db);
        let delta = YIQ_WEIGHT_Y * dy * dy + YIQ_WEIGHT_I * di * di + YIQ_WEIGHT_Q * dq * dq;
        if delta <= params.delta_threshold {
            continue;
        }

        let dy_abs = dy.abs();
        let color = if dy > 0.0 {
            params.palette.added
        } else {
            params.palette.removed
        };
        // Boost caps at 192, so the alpha byte cannot wrap
        let alpha = ANNOTATION_ALPHA_BASE + (dy_abs * 8.0).min(192.0) as u8;
        let out = &mut annotation_row[x * BYTES_PER_PIXEL..(x + 1) * BYTES_PER_PIXEL];
        out[0] = color[0];
        out[1] = color[1];
        out[2] = color[2];
        out[3] = alpha;

        let hash_index = row_hash_base.wrapping_add(x as u64);
        if row.first.is_none() {
            row.first = Some((row_position_base + x as u64, hash_index));
        }
        row.count += 1;
        row.hash_sum = row.hash_sum.wrapping_add(hash_index);
        row.delta_sum += dy_abs / YIQ_MAX_DISTANCE;

        if params.cell_columns != 0 {
            if row.cells.is_empty() {
                row.cells = vec![0u32; params.cell_columns];
            }
            row.cells[x / CELL_SIZE as usize] += 1;
        }
    }
    row
}

// ============================================================================
// Reduction
// ============================================================================

/// Folds scanned rows into the final statistics.
pub(crate) struct Accumulator {
    count: u64,
    hash_sum: u64,
    first: Option<(u64, u64)>,
    delta_sum: f64,
    minimap: Option<Minimap>,
}

impl Accumulator {
    pub(crate) fn new(minimap: Option<Minimap>) -> Self {
        Self {
            count: 0,
            hash_sum: 0,
            first: None,
            delta_sum: 0.0,
            minimap,
        }
    }

    /// Folds one row in. Rows may arrive in any order; the hash anchor is
    /// the change with the smallest linear position.
    pub(crate) fn absorb(&mut self, y: u32, row: RowDiff) {
        self.count += row.count;
        self.hash_sum = self.hash_sum.wrapping_add(row.hash_sum);
        self.delta_sum += row.delta_sum;
        self.first = match (self.first, row.first) {
            (Some(a), Some(b)) => Some(if b.0 < a.0 { b } else { a }),
            (a, b) => a.or(b),
        };
        if let Some(minimap) = &mut self.minimap {
            if !row.cells.is_empty() {
                minimap.add_row(y, &row.cells);
            }
        }
    }

    pub(crate) fn finish(self) -> (DiffResult, Option<Minimap>) {
        let hash = match self.first {
            Some((_, anchor)) => self.hash_sum.wrapping_sub(anchor),
            None => 0,
        };
        (
            DiffResult {
                diff_count: self.count,
                hash,
                cumulative_delta: self.delta_sum,
            },
            self.minimap,
        )
    }
}

pub(crate) fn finalize(
    acc: Accumulator,
    diff: &mut [u8],
    width: u32,
    height: u32,
    layout: DiffLayout,
) -> DiffResult {
    let (result, minimap) = acc.finish();
    if let Some(minimap) = minimap {
        minimap.apply_overlay(
            diff,
            layout.width_factor() as usize * width as usize,
            layout.diff_x_offset(width),
            width,
            height,
        );
    }
    result
}

fn run(
    baseline: &[u8],
    candidate: &[u8],
    diff: &mut [u8],
    width: u32,
    height: u32,
    layout: DiffLayout,
    options: &DiffOptions,
) -> DiffResult {
    let params = scan_params(baseline, candidate, width, layout, options);
    let mut acc = Accumulator::new(options.minimap.then(|| Minimap::new(width, height)));

    let in_row_bytes = width as usize * BYTES_PER_PIXEL;
    let diff_row_bytes = layout.width_factor() as usize * in_row_bytes;
    for (y, diff_row) in diff.chunks_exact_mut(diff_row_bytes).enumerate() {
        let span = y * in_row_bytes..(y + 1) * in_row_bytes;
        let row = process_row(
            y as u32,
            &baseline[span.clone()],
            &candidate[span],
            diff_row,
            &params,
        );
        acc.absorb(y as u32, row);
    }
    finalize(acc, diff, width, height, layout)
}

// ============================================================================
// Entry points
// ============================================================================

/// Diffs two pixel buffers into a caller-provided diff buffer.
///
/// The diff buffer width selects the layout: equal to the input width for
/// annotations only, or three times it for a side-by-side sheet. On any
/// validation error the diff buffer is left untouched.
///
/// # Errors
///
/// - [`DiffError::DimensionMismatch`] if baseline and candidate disagree
///   in width or height
/// - [`DiffError::InvalidDiffLayout`] if the inputs have zero area, or
///   the diff buffer height differs, or its width is neither 1x nor 3x
///   the input width
///
/// # Example
///
/// ```rust
/// use snapdiff_core::PixelBuffer;
/// use snapdiff_ops::{diff, DiffOptions};
///
/// let baseline = PixelBuffer::filled(4, 4, [20, 20, 20, 255]);
/// let mut candidate = baseline.clone();
/// candidate.set_pixel(2, 1, [240, 240, 240, 255]);
/// let mut output = PixelBuffer::new(4, 4);
///
/// let result = diff(&baseline, &candidate, &mut output, &DiffOptions::default()).unwrap();
/// assert_eq!(result.diff_count, 1);
/// ```
pub fn diff(
    baseline: &PixelBuffer,
    candidate: &PixelBuffer,
    diff: &mut PixelBuffer,
    options: &DiffOptions,
) -> Result<DiffResult> {
    trace!(
        width = baseline.width(),
        height = baseline.height(),
        "diff::diff"
    );
    let layout = validate_buffers(baseline, candidate, diff)?;
    debug!(?layout, threshold = options.threshold, "Diffing pixel buffers");

    let (width, height) = baseline.dimensions();
    Ok(run(
        baseline.data(),
        candidate.data(),
        diff.data_mut(),
        width,
        height,
        layout,
        options,
    ))
}

/// Diffs raw RGBA byte slices into a caller-provided diff slice.
///
/// `baseline` and `candidate` must both hold `width * height * 4` bytes;
/// `diff` must hold exactly one or three times that, which selects the
/// layout. Semantics match [`diff`].
///
/// # Errors
///
/// - [`DiffError::DimensionMismatch`] if the input lengths do not match
///   the dimensions
/// - [`DiffError::InvalidDiffLayout`] if the inputs have zero area or the
///   diff length fits neither layout
///
/// # Example
///
/// ```rust
/// use snapdiff_ops::{diff_slices, DiffOptions};
///
/// let baseline = vec![255u8; 4 * 4 * 4];
/// let candidate = baseline.clone();
/// let mut diff = vec![0u8; 4 * 4 * 4 * 3];
///
/// let result = diff_slices(&baseline, &candidate, &mut diff, 4, 4, &DiffOptions::default()).unwrap();
/// assert!(result.is_match());
/// ```
pub fn diff_slices(
    baseline: &[u8],
    candidate: &[u8],
    diff: &mut [u8],
    width: u32,
    height: u32,
    options: &DiffOptions,
) -> Result<DiffResult> {
    trace!(width, height, "diff::diff_slices");
    let layout = validate_slices(baseline, candidate, diff, width, height)?;
    Ok(run(baseline, candidate, diff, width, height, layout, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimap::MINIMAP_COLOR;
    use crate::theme::ANNOTATION_RED;
    use approx::assert_relative_eq;

    fn hash_index(x: u32, y: u32) -> u64 {
        (y as u64 ^ HASH_SPREAD)
            .wrapping_mul(HASH_SPREAD)
            .wrapping_add(x as u64)
    }

    #[test]
    fn test_identical_inputs_match() {
        let baseline = PixelBuffer::filled(8, 8, [120, 120, 120, 255]);
        let candidate = baseline.clone();
        let mut output = PixelBuffer::new(8, 8);

        let result = diff(&baseline, &candidate, &mut output, &DiffOptions::default()).unwrap();
        assert!(result.is_match());
        assert_eq!(result.diff_count, 0);
        assert_eq!(result.hash, 0);
        assert_eq!(result.cumulative_delta, 0.0);
        assert!(output.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_single_change_annotated_green_on_dark() {
        let baseline = PixelBuffer::filled(8, 8, [0, 0, 0, 255]);
        let mut candidate = baseline.clone();
        candidate.set_pixel(3, 2, [255, 255, 255, 255]);
        let mut output = PixelBuffer::new(8, 8);

        let result = diff(&baseline, &candidate, &mut output, &DiffOptions::default()).unwrap();
        assert_eq!(result.diff_count, 1);
        // The fingerprint is anchored on its only change
        assert_eq!(result.hash, 0);
        assert_relative_eq!(result.cumulative_delta, 255.0 / 35215.0, max_relative = 1e-6);

        // Dark background, pixel got brighter: green at full boost
        assert_eq!(output.pixel(3, 2), [0x00, 0xCC, 0x00, 0xFF]);
        assert_eq!(output.pixel(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_two_changes_fingerprint() {
        let baseline = PixelBuffer::filled(4, 4, [0, 0, 0, 255]);
        let mut candidate = baseline.clone();
        candidate.set_pixel(1, 0, [255, 255, 255, 255]);
        candidate.set_pixel(3, 0, [255, 255, 255, 255]);
        let mut output = PixelBuffer::new(4, 4);

        let result = diff(&baseline, &candidate, &mut output, &DiffOptions::default()).unwrap();
        assert_eq!(result.diff_count, 2);
        // Sum of both indices minus the anchor leaves the second index
        assert_eq!(result.hash, hash_index(3, 0));
    }

    #[test]
    fn test_subtle_change_below_threshold() {
        let baseline = PixelBuffer::filled(4, 4, [100, 100, 100, 255]);
        let mut candidate = baseline.clone();
        candidate.set_pixel(1, 1, [100, 100, 101, 255]);
        let mut output = PixelBuffer::filled(4, 4, [9, 9, 9, 9]);

        let result = diff(&baseline, &candidate, &mut output, &DiffOptions::default()).unwrap();
        assert!(result.is_match());
        assert_eq!(result.cumulative_delta, 0.0);
        // Unchanged and sub-threshold pixels are never written
        assert!(output.data().iter().all(|&b| b == 9));
    }

    #[test]
    fn test_zero_threshold_flags_any_color_change() {
        let baseline = PixelBuffer::filled(4, 4, [100, 100, 100, 255]);
        let mut candidate = baseline.clone();
        candidate.set_pixel(1, 1, [100, 100, 101, 255]);
        let mut output = PixelBuffer::new(4, 4);
        let options = DiffOptions::new().with_threshold(0.0);

        let result = diff(&baseline, &candidate, &mut output, &options).unwrap();
        assert_eq!(result.diff_count, 1);
    }

    #[test]
    fn test_alpha_only_change_never_flagged() {
        let baseline = PixelBuffer::filled(4, 4, [100, 100, 100, 255]);
        let mut candidate = baseline.clone();
        candidate.set_pixel(2, 2, [100, 100, 100, 10]);
        let mut output = PixelBuffer::new(4, 4);
        let options = DiffOptions::new().with_threshold(0.0);

        let result = diff(&baseline, &candidate, &mut output, &options).unwrap();
        assert!(result.is_match());
    }

    #[test]
    fn test_side_by_side_panels_and_annotation() {
        let baseline = PixelBuffer::filled(4, 4, [255, 255, 255, 255]);
        let mut candidate = baseline.clone();
        candidate.set_pixel(1, 1, [0, 0, 0, 255]);
        let mut output = PixelBuffer::new(12, 4);

        let result = diff(&baseline, &candidate, &mut output, &DiffOptions::default()).unwrap();
        assert_eq!(result.diff_count, 1);

        // Left panel holds the baseline, middle panel the candidate
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(output.pixel(x, y), baseline.pixel(x, y));
                assert_eq!(output.pixel(x + 4, y), candidate.pixel(x, y));
            }
        }
        // Light background, pixel got darker: green, full boost
        assert_eq!(output.pixel(8 + 1, 1), [0x00, 0xCC, 0x00, 0xFF]);
        assert_eq!(output.pixel(8, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_light_theme_brighter_pixel_is_red() {
        let baseline = PixelBuffer::filled(4, 4, [200, 200, 200, 255]);
        let mut candidate = baseline.clone();
        candidate.set_pixel(0, 0, [255, 255, 255, 255]);
        let mut output = PixelBuffer::new(4, 4);

        diff(&baseline, &candidate, &mut output, &DiffOptions::default()).unwrap();
        let px = output.pixel(0, 0);
        assert_eq!([px[0], px[1], px[2]], [ANNOTATION_RED[0], ANNOTATION_RED[1], ANNOTATION_RED[2]]);
    }

    #[test]
    fn test_dark_theme_darker_pixel_is_red() {
        let baseline = PixelBuffer::filled(4, 4, [80, 80, 80, 255]);
        let mut candidate = baseline.clone();
        candidate.set_pixel(0, 0, [0, 0, 0, 255]);
        let mut output = PixelBuffer::new(4, 4);

        diff(&baseline, &candidate, &mut output, &DiffOptions::default()).unwrap();
        // 80 -> 0 is a removal on a dark background
        let px = output.pixel(0, 0);
        assert_eq!([px[0], px[1], px[2]], [ANNOTATION_RED[0], ANNOTATION_RED[1], ANNOTATION_RED[2]]);
        assert_eq!(px[3], ANNOTATION_ALPHA_BASE + 192);
    }

    #[test]
    fn test_dimension_mismatch_leaves_diff_untouched() {
        let baseline = PixelBuffer::new(4, 4);
        let candidate = PixelBuffer::new(4, 3);
        let mut output = PixelBuffer::filled(4, 4, [9, 9, 9, 9]);

        let err = diff(&baseline, &candidate, &mut output, &DiffOptions::default()).unwrap_err();
        assert!(err.is_dimension_mismatch());
        assert!(output.data().iter().all(|&b| b == 9));
    }

    #[test]
    fn test_invalid_layouts_rejected() {
        let baseline = PixelBuffer::filled(4, 4, [1, 2, 3, 255]);
        let candidate = baseline.clone();

        let mut double_wide = PixelBuffer::new(8, 4);
        let err = diff(&baseline, &candidate, &mut double_wide, &DiffOptions::default()).unwrap_err();
        assert!(err.is_invalid_layout());

        let mut wrong_height = PixelBuffer::new(4, 5);
        let err = diff(&baseline, &candidate, &mut wrong_height, &DiffOptions::default()).unwrap_err();
        assert!(err.is_invalid_layout());
    }

    #[test]
    fn test_zero_area_rejected() {
        let baseline = PixelBuffer::new(0, 4);
        let candidate = PixelBuffer::new(0, 4);
        let mut output = PixelBuffer::new(0, 4);

        let err = diff(&baseline, &candidate, &mut output, &DiffOptions::default()).unwrap_err();
        assert!(err.is_invalid_layout());
    }

    #[test]
    fn test_slices_match_buffers() {
        let baseline = PixelBuffer::filled(6, 5, [10, 20, 30, 255]);
        let mut candidate = baseline.clone();
        candidate.set_pixel(4, 2, [200, 40, 90, 255]);
        candidate.set_pixel(0, 4, [0, 0, 0, 255]);

        let mut typed_out = PixelBuffer::new(18, 5);
        let typed = diff(&baseline, &candidate, &mut typed_out, &DiffOptions::default()).unwrap();

        let mut raw_out = vec![0u8; 18 * 5 * 4];
        let raw = diff_slices(
            baseline.data(),
            candidate.data(),
            &mut raw_out,
            6,
            5,
            &DiffOptions::default(),
        )
        .unwrap();

        assert_eq!(typed, raw);
        assert_eq!(typed_out.data(), raw_out.as_slice());
    }

    #[test]
    fn test_slices_reject_bad_lengths() {
        let good = vec![0u8; 4 * 4 * 4];
        let short = vec![0u8; 4 * 4 * 4 - 4];
        let mut out = vec![0u8; 4 * 4 * 4];

        let err = diff_slices(&short, &good, &mut out, 4, 4, &DiffOptions::default()).unwrap_err();
        assert!(err.is_dimension_mismatch());

        let mut double = vec![0u8; 4 * 4 * 4 * 2];
        let err = diff_slices(&good, &good, &mut double, 4, 4, &DiffOptions::default()).unwrap_err();
        assert!(err.is_invalid_layout());
    }

    #[test]
    fn test_minimap_tints_diff_region() {
        let baseline = PixelBuffer::filled(8, 8, [0, 0, 0, 255]);
        let mut candidate = baseline.clone();
        candidate.set_pixel(5, 5, [255, 255, 255, 255]);
        let mut output = PixelBuffer::new(8, 8);
        let options = DiffOptions::new().with_minimap(true);

        let result = diff(&baseline, &candidate, &mut output, &options).unwrap();
        assert_eq!(result.diff_count, 1);

        // The single cell covers the whole image: every pixel is tinted
        assert_eq!(output.pixel(0, 0), MINIMAP_COLOR);
        // Annotation shows through the tint
        assert_eq!(output.pixel(5, 5), [0x00, 0xCC, 0x7F, 0xFF]);
    }
}
