//! Error types for snapdiff-core operations.
//!
//! This module provides the error handling for pixel buffer construction
//! and access.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of the core types:
//! - Buffer construction (byte length vs dimensions)
//! - Pixel access (bounds checking)
//!
//! # Usage
//!
//! ```rust
//! use snapdiff_core::{Error, Result};
//!
//! fn check_pixel(x: u32, y: u32, width: u32, height: u32) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::OutOfBounds {
//!             x,
//!             y,
//!             width,
//!             height,
//!         });
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::buffer::PixelBuffer`] - Construction and access checks
//! - `snapdiff-ops` - Buffer handling inside the diff engine

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or accessing pixel buffers.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside buffer bounds.
    ///
    /// Returned when attempting to access a pixel at (x, y) where
    /// `x >= width` or `y >= height`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snapdiff_core::Error;
    ///
    /// let err = Error::OutOfBounds {
    ///     x: 100,
    ///     y: 50,
    ///     width: 80,
    ///     height: 60,
    /// };
    /// assert!(err.to_string().contains("100"));
    /// ```
    #[error("pixel ({x}, {y}) out of bounds for buffer {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },

    /// Invalid buffer dimensions.
    ///
    /// Returned when a byte slice does not match the dimensions it claims,
    /// or dimensions would overflow the buffer size calculation.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
