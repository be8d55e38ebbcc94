//! Pixel buffer type for image comparison.
//!
//! This module provides [`PixelBuffer`], the owned RGBA8 raster that the
//! diff engine reads from and writes to.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-to-bottom, with
//! interleaved channels:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! Each pixel occupies exactly 4 bytes. The buffer length is always
//! `width * height * 4`; constructors enforce this.
//!
//! # Usage
//!
//! ```rust
//! use snapdiff_core::PixelBuffer;
//!
//! // Create a 640x480 buffer, zero-initialized
//! let mut buf = PixelBuffer::new(640, 480);
//!
//! // Set a pixel [R, G, B, A]
//! buf.set_pixel(100, 100, [255, 128, 64, 255]);
//!
//! // Get a pixel
//! let px = buf.pixel(100, 100);
//! assert_eq!(px[0], 255);
//! ```
//!
//! # Dependencies
//!
//! - [`crate::error::Error`] - Construction errors
//!
//! # Used By
//!
//! - `snapdiff-ops` - Baseline, candidate, and diff buffers

use crate::{Error, Result};

/// Owned RGBA8 image buffer in row-major layout.
///
/// `PixelBuffer` is plain working memory: the caller allocates it, the
/// diff engine borrows it. There is no padding or stride; row `y` starts
/// at byte offset `y * width * 4`.
///
/// # Example
///
/// ```rust
/// use snapdiff_core::PixelBuffer;
///
/// let mut buf = PixelBuffer::new(16, 16);
/// buf.fill([0, 0, 0, 255]);
/// assert_eq!(buf.pixel(0, 0), [0, 0, 0, 255]);
/// assert_eq!(buf.byte_len(), 16 * 16 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Interleaved RGBA bytes
    data: Vec<u8>,
    /// Buffer width in pixels
    width: u32,
    /// Buffer height in pixels
    height: u32,
}

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

impl PixelBuffer {
    /// Creates a new buffer filled with zeros (transparent black).
    ///
    /// # Arguments
    ///
    /// * `width` - Buffer width in pixels
    /// * `height` - Buffer height in pixels
    ///
    /// # Example
    ///
    /// ```rust
    /// use snapdiff_core::PixelBuffer;
    ///
    /// let buf = PixelBuffer::new(1920, 1080);
    /// assert_eq!(buf.width(), 1920);
    /// assert_eq!(buf.height(), 1080);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        Self {
            data: vec![0u8; len],
            width,
            height,
        }
    }

    /// Creates a buffer from existing pixel data.
    ///
    /// # Arguments
    ///
    /// * `width` - Buffer width
    /// * `height` - Buffer height
    /// * `data` - Interleaved RGBA bytes (must have exactly
    ///   `width * height * 4` elements)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the data length does not
    /// match the dimensions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snapdiff_core::PixelBuffer;
    ///
    /// let bytes = vec![0u8; 8 * 8 * 4];
    /// let buf = PixelBuffer::from_data(8, 8, bytes).unwrap();
    /// assert_eq!(buf.pixel_count(), 64);
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a buffer filled with a specific pixel value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snapdiff_core::PixelBuffer;
    ///
    /// let white = PixelBuffer::filled(100, 100, [255, 255, 255, 255]);
    /// assert_eq!(white.pixel(50, 50), [255, 255, 255, 255]);
    /// ```
    pub fn filled(width: u32, height: u32, pixel: [u8; 4]) -> Self {
        let pixel_count = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixel_count * BYTES_PER_PIXEL);
        for _ in 0..pixel_count {
            data.extend_from_slice(&pixel);
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Returns the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the buffer dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the buffer length in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns a reference to the raw interleaved bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a mutable reference to the raw interleaved bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer and returns the underlying bytes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snapdiff_core::PixelBuffer;
    ///
    /// let buf = PixelBuffer::filled(2, 2, [10, 20, 30, 255]);
    /// let bytes = buf.into_data();
    /// assert_eq!(bytes.len(), 2 * 2 * 4);
    /// assert_eq!(&bytes[..4], &[10, 20, 30, 255]);
    /// ```
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the byte offset for pixel at (x, y).
    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snapdiff_core::PixelBuffer;
    ///
    /// let buf = PixelBuffer::filled(10, 10, [1, 2, 3, 4]);
    /// assert_eq!(buf.pixel(5, 5), [1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        let mut result = [0u8; 4];
        result.copy_from_slice(&self.data[offset..offset + BYTES_PER_PIXEL]);
        result
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [u8; 4]) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        self.data[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&pixel);
    }

    /// Returns the bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let row_len = self.width as usize * BYTES_PER_PIXEL;
        let start = y as usize * row_len;
        &self.data[start..start + row_len]
    }

    /// Returns the bytes of row `y` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let row_len = self.width as usize * BYTES_PER_PIXEL;
        let start = y as usize * row_len;
        &mut self.data[start..start + row_len]
    }

    /// Fills the entire buffer with a pixel value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snapdiff_core::PixelBuffer;
    ///
    /// let mut buf = PixelBuffer::new(4, 4);
    /// buf.fill([255, 0, 0, 255]);
    /// assert_eq!(buf.pixel(3, 3), [255, 0, 0, 255]);
    /// ```
    pub fn fill(&mut self, pixel: [u8; 4]) {
        for chunk in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&pixel);
        }
    }
}
