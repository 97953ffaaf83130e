//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
///
/// Every operation validates its parameters before touching pixels, so an
/// error always means no output was produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Region is unordered or extends past the buffer.
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// Input is zero-area or incompatible with the operation.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Contrast stretch on an image whose value channel is constant.
    #[error("degenerate range: value channel is constant at {value}")]
    DegenerateRange {
        /// The single value every pixel shares.
        value: u8,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Any other buffer-level failure.
    #[error(transparent)]
    Core(rastr_core::Error),
}

impl From<rastr_core::Error> for OpsError {
    fn from(err: rastr_core::Error) -> Self {
        match err {
            rastr_core::Error::InvalidRegion { .. } => Self::InvalidRegion(err.to_string()),
            rastr_core::Error::DimensionMismatch(msg) => Self::DimensionMismatch(msg),
            other => Self::Core(other),
        }
    }
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_region_maps_to_invalid_region() {
        let core = rastr_core::Region::new(0, 0, 5, 5).validate(4, 4).unwrap_err();
        let err: OpsError = core.into();
        assert!(matches!(err, OpsError::InvalidRegion(_)));
    }

    #[test]
    fn test_core_dimension_maps_through() {
        let err: OpsError = rastr_core::Error::DimensionMismatch("2x2: short".into()).into();
        assert_eq!(err, OpsError::DimensionMismatch("2x2: short".into()));
    }

    #[test]
    fn test_core_channel_kept() {
        let err: OpsError = rastr_core::Error::ChannelMismatch { expected: 3, got: 1 }.into();
        assert!(matches!(err, OpsError::Core(_)));
        assert_eq!(err.to_string(), "channel mismatch: expected 3, got 1");
    }
}
