//! Errors raised while building animation primitives

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("bezier control point x{index} = {value} is outside [0, 1]")]
    InvalidControlPoint { index: u8, value: f64 },

    #[error("{what} is not a finite number")]
    NonFinite { what: &'static str },

    #[error("duration must be positive, got {0}")]
    InvalidDuration(f64),

    #[error("need at least two keyframes, got {0}")]
    TooFewKeyframes(usize),

    #[error("spring {param} must be positive, got {value}")]
    InvalidSpring { param: &'static str, value: f64 },
}
