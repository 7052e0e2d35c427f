//! Animation errors

use roadmap_core::ConfigError;
use thiserror::Error;

/// Malformed interpolation ranges
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("input range has {input} points but output range has {output}")]
    RangeLengthMismatch { input: usize, output: usize },

    #[error("interpolation needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("input range must be strictly increasing (breakpoint {index} is {value})")]
    NotIncreasing { index: usize, value: f32 },

    #[error("range value at {index} is not finite")]
    NonFinite { index: usize },
}

impl From<AnimationError> for ConfigError {
    fn from(err: AnimationError) -> Self {
        ConfigError::InvalidRange(err.to_string())
    }
}
