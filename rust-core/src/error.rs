//! Error types shared by the processor and the frame analyzers

use thiserror::Error;

/// Boxed error raised by a caller-supplied analyzer
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum FeatureError {
    /// Non-positive sample rate, duration, lag count or FFT size
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Degenerate frame handed to an analyzer (e.g. empty frame for a mean)
    #[error("Invalid frame input: {0}")]
    InvalidInput(String),

    /// Error raised by a user-supplied analyzer
    #[error("Analyzer failed: {0}")]
    Analyzer(#[source] BoxError),

    /// Analyzer returned outputs of different lengths within one run
    #[error("Frame {frame} produced {found} values, expected {expected}")]
    ShapeMismatch {
        frame: usize,
        expected: usize,
        found: usize,
    },

    #[error("Failed to assemble feature matrix: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl FeatureError {
    /// Wrap any error raised inside a custom analyzer
    pub fn analyzer<E: Into<BoxError>>(err: E) -> Self {
        Self::Analyzer(err.into())
    }

    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FeatureError>;
