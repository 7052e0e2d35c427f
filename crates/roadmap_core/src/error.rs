//! Configuration errors raised when a component is constructed with
//! parameters it cannot work with.

use thiserror::Error;

/// Invalid construction or reconfiguration parameter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Header height must be a finite number greater than zero
    #[error("header height must be a positive finite number, got {0}")]
    InvalidHeaderHeight(f32),

    /// Interpolation ranges derived from the configuration were rejected
    #[error("invalid interpolation range: {0}")]
    InvalidRange(String),
}
