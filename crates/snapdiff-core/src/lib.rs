//! # snapdiff-core
//!
//! Core types for perceptual image comparison.
//!
//! This crate provides the foundational types used by the snapdiff engine:
//!
//! - [`PixelBuffer`] - Owned RGBA8 raster in row-major layout
//! - [`Rect`] - Integer pixel rectangle for region clipping
//! - [`color`] - Rec.601 luma and the YIQ difference metric
//!
//! ## Crate Structure
//!
//! This crate is the foundation of snapdiff and has no internal
//! dependencies:
//!
//! ```text
//! snapdiff-core (this crate)
//!    ^
//!    |
//!    +-- snapdiff-ops (diff engine)
//! ```
//!
//! ## Design Notes
//!
//! Buffers are plain owned memory: callers allocate them, the engine
//! borrows them. Nothing here reads files or decodes image formats; the
//! types start where decoded RGBA bytes end.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod color;
pub mod error;
pub mod rect;

// Re-exports for convenience
pub use buffer::{PixelBuffer, BYTES_PER_PIXEL};
pub use color::{luminance_rec601, yiq_distance, YIQ_MAX_DISTANCE};
pub use error::{Error, Result};
pub use rect::Rect;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use snapdiff_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::{PixelBuffer, BYTES_PER_PIXEL};
    pub use crate::color::{
        luminance_rec601, yiq_distance, yiq_i, yiq_q, yiq_y, YIQ_MAX_DISTANCE,
    };
    pub use crate::error::{Error, Result};
    pub use crate::rect::Rect;
}
