//! Error types for pool-sim.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid radius: {0} (must not be negative)")]
    InvalidRadius(i32),

    #[error("Invalid speed: {0} (must be positive)")]
    InvalidSpeed(i32),

    #[error("The ball is not inside the table")]
    BallOutsideTable,

    #[error("Invalid direction: ({0}, {1}) has no usable magnitude")]
    InvalidDirection(f64, f64),

    #[error("Ball not set up")]
    NotStarted,

    #[error("Ball still moving after {0} steps")]
    StepLimitExceeded(usize),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
