//! # snapdiff-ops
//!
//! Perceptual image comparison for screenshot pipelines.
//!
//! This crate compares RGBA pixel buffers the way a reviewer would:
//! pixel differences are measured in YIQ space with brightness-weighted
//! components, and perceptible changes are painted into a diff image.
//! Every run also yields stable statistics for gating and deduplication.
//!
//! # Modules
//!
//! - [`mod@diff`] - The diff engine and its entry points
//! - [`theme`] - Background estimation and annotation palettes
//! - [`minimap`] - Coarse change-density overlay
//! - [`options`] - Tuning knobs
//! - [`parallel`] - Multi-threaded variant (enabled by default)
//!
//! # Example
//!
//! ```rust
//! use snapdiff_core::PixelBuffer;
//! use snapdiff_ops::{diff, DiffOptions};
//!
//! let baseline = PixelBuffer::filled(16, 16, [24, 24, 24, 255]);
//! let mut candidate = baseline.clone();
//! candidate.set_pixel(3, 7, [220, 220, 220, 255]);
//!
//! // A diff buffer three inputs wide selects the side-by-side sheet
//! let mut sheet = PixelBuffer::new(48, 16);
//! let result = diff(&baseline, &candidate, &mut sheet, &DiffOptions::default()).unwrap();
//!
//! assert_eq!(result.diff_count, 1);
//! assert!(!result.is_match());
//! ```
//!
//! # Common Operations
//!
//! ## Annotations only
//!
//! ```rust,ignore
//! let mut output = PixelBuffer::new(width, height);
//! let result = diff(&baseline, &candidate, &mut output, &DiffOptions::default())?;
//! ```
//!
//! ## Side-by-side sheet with a change minimap
//!
//! ```rust,ignore
//! let mut sheet = PixelBuffer::new(3 * width, height);
//! let options = DiffOptions::new().with_minimap(true);
//! let result = diff(&baseline, &candidate, &mut sheet, &options)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod diff;
pub mod minimap;
pub mod options;
pub mod theme;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use diff::{diff, diff_slices, DiffLayout, DiffResult};
pub use error::{DiffError, Result};
pub use options::{DiffOptions, DEFAULT_THRESHOLD};
pub use theme::{estimate_theme, Palette, Theme};
