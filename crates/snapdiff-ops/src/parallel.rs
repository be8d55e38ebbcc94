//! Parallel perceptual diff using Rayon.
//!
//! Drop-in variants of [`crate::diff()`] and [`crate::diff_slices()`] that
//! scan image rows across threads. Results are bit-identical to the
//! single-threaded engine: rows are reduced in ascending order, so the
//! floating point accumulation order and the hash anchor are the same.
//!
//! # Example
//!
//! ```rust
//! use snapdiff_ops::{parallel, DiffOptions};
//!
//! let baseline = vec![255u8; 640 * 480 * 4];
//! let candidate = baseline.clone();
//! let mut diff = vec![0u8; 640 * 480 * 4];
//!
//! let result =
//!     parallel::diff_slices(&baseline, &candidate, &mut diff, 640, 480, &DiffOptions::default())
//!         .unwrap();
//! assert!(result.is_match());
//! ```

use crate::diff::{
    finalize, process_row, scan_params, validate_buffers, validate_slices, Accumulator,
    DiffLayout, DiffResult, RowDiff,
};
use crate::error::Result;
use crate::minimap::Minimap;
use crate::options::DiffOptions;
use rayon::prelude::*;
use snapdiff_core::{PixelBuffer, BYTES_PER_PIXEL};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Parallel version of [`crate::diff()`].
///
/// Validation, layout selection, annotations, and every statistic match
/// the single-threaded version exactly.
///
/// # Errors
///
/// Same as [`crate::diff()`].
///
/// # Example
///
/// ```rust
/// use snapdiff_core::PixelBuffer;
/// use snapdiff_ops::{parallel, DiffOptions};
///
/// let baseline = PixelBuffer::filled(64, 64, [30, 30, 30, 255]);
/// let mut candidate = baseline.clone();
/// candidate.set_pixel(10, 20, [250, 250, 250, 255]);
/// let mut output = PixelBuffer::new(64, 64);
///
/// let result = parallel::diff(&baseline, &candidate, &mut output, &DiffOptions::default()).unwrap();
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
        "parallel::diff"
    );
    let layout = validate_buffers(baseline, candidate, diff)?;
    debug!(?layout, threshold = options.threshold, "Diffing pixel buffers in parallel");

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

/// Parallel version of [`crate::diff_slices()`].
///
/// # Errors
///
/// Same as [`crate::diff_slices()`].
pub fn diff_slices(
    baseline: &[u8],
    candidate: &[u8],
    diff: &mut [u8],
    width: u32,
    height: u32,
    options: &DiffOptions,
) -> Result<DiffResult> {
    trace!(width, height, "parallel::diff_slices");
    let layout = validate_slices(baseline, candidate, diff, width, height)?;
    Ok(run(baseline, candidate, diff, width, height, layout, options))
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

    let in_row_bytes = width as usize * BYTES_PER_PIXEL;
    let diff_row_bytes = layout.width_factor() as usize * in_row_bytes;

    // collect() keeps row order, so the reduction below runs top to bottom
    let rows: Vec<RowDiff> = diff
        .par_chunks_mut(diff_row_bytes)
        .enumerate()
        .map(|(y, diff_row)| {
            let span = y * in_row_bytes..(y + 1) * in_row_bytes;
            process_row(
                y as u32,
                &baseline[span.clone()],
                &candidate[span],
                diff_row,
                &params,
            )
        })
        .collect();

    let mut acc = Accumulator::new(options.minimap.then(|| Minimap::new(width, height)));
    for (y, row) in rows.into_iter().enumerate() {
        acc.absorb(y as u32, row);
    }
    finalize(acc, diff, width, height, layout)
}
