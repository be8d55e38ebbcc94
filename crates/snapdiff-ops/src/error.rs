//! Error types for diff operations.

use thiserror::Error;

/// Error type for diff operations.
///
/// Both variants are fatal validation failures: when one is returned the
/// diff buffer has not been written to.
#[derive(Error, Debug)]
pub enum DiffError {
    /// Baseline and candidate buffers disagree in shape.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Diff buffer shape fits neither supported layout.
    #[error("invalid diff layout: {0}")]
    InvalidDiffLayout(String),
}

impl DiffError {
    /// Returns `true` if this is a baseline/candidate shape error.
    #[inline]
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch(_))
    }

    /// Returns `true` if this is a diff buffer layout error.
    #[inline]
    pub fn is_invalid_layout(&self) -> bool {
        matches!(self, Self::InvalidDiffLayout(_))
    }
}

/// Result type for diff operations.
pub type Result<T> = std::result::Result<T, DiffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = DiffError::DimensionMismatch("baseline 4x4 vs candidate 4x2".into());
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.is_dimension_mismatch());

        let err = DiffError::InvalidDiffLayout("diff width 8 is neither 4 nor 12".into());
        assert!(err.to_string().contains("invalid diff layout"));
        assert!(err.is_invalid_layout());
    }
}
