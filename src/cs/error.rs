//! Error types shared by the code builders, the gap analyzer and the renderers.

use thiserror::Error;

use crate::cs::combinatorial::large_gap::ShapeParameters;

/// Errors produced while building, analyzing or writing out Gray codes.
#[derive(Error, Debug)]
pub enum Error {
    /// A requested code width that cannot be served.
    #[error("invalid width {width}: {reason}")]
    InvalidWidth { width: usize, reason: String },

    /// A width range whose lower bound exceeds its upper bound.
    #[error("invalid width range {min}..={max}")]
    InvalidRange { min: usize, max: usize },

    /// A shape-parameter tuple outside the domain of the product construction.
    #[error("invalid shape parameters {params}: {reason}")]
    InvalidParameters {
        params: ShapeParameters,
        reason: String,
    },

    /// Text that does not spell four comma separated integers.
    #[error("cannot parse shape parameters from {0:?}")]
    ParseParameters(String),

    /// A constructed sequence that is not a cyclic Gray code.
    #[error("degenerate code: {0}")]
    DegenerateCode(String),

    /// Failure writing a rendered code.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Gray code operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a width outside `1..=max`
    pub fn unsupported_width(width: usize, max: usize) -> Self {
        Self::InvalidWidth {
            width,
            reason: format!("supported widths are 1..={}", max),
        }
    }

    /// Create an error for measuring a code at a width it does not have
    pub fn width_mismatch(width: usize, actual: usize) -> Self {
        Self::InvalidWidth {
            width,
            reason: format!("code has width {}", actual),
        }
    }

    /// Create an invalid parameters error
    pub fn invalid_parameters(params: ShapeParameters, reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            params,
            reason: reason.into(),
        }
    }

    /// Create a degenerate code error
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateCode(message.into())
    }
}
