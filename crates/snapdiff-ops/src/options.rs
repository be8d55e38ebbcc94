//! Configuration for diff runs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default perceptual threshold.
///
/// 0.03 flags changes a careful human reviewer would notice while
/// tolerating antialiasing jitter and subpixel rendering differences.
pub const DEFAULT_THRESHOLD: f32 = 0.03;

/// Options controlling a diff run.
///
/// # Example
///
/// ```rust
/// use snapdiff_ops::DiffOptions;
///
/// let options = DiffOptions::new()
///     .with_threshold(0.1)
///     .with_minimap(true);
/// assert_eq!(options.threshold, 0.1);
/// assert!(options.minimap);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiffOptions {
    /// Perceptual sensitivity as a fraction of the maximum YIQ distance.
    /// Smaller values flag more pixels; `0.0` flags any perceptible
    /// change and `1.0` flags none.
    pub threshold: f32,

    /// When `true`, coarse change-density cells are tinted onto the diff
    /// region after the scan, so changes stay findable when the output is
    /// viewed zoomed out.
    pub minimap: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            minimap: false,
        }
    }
}

impl DiffOptions {
    /// Creates options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the perceptual threshold.
    ///
    /// The value is used as given; `0.0` flags every perceptible change.
    #[must_use]
    #[inline]
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enables or disables the minimap overlay.
    #[must_use]
    #[inline]
    pub fn with_minimap(mut self, minimap: bool) -> Self {
        self.minimap = minimap;
        self
    }
}
