use crate::scale::{Increment, ParameterKind};

/// Errors raised below the calculator facade.
///
/// Table misses never reach facade callers as errors; the calculator turns
/// them into [`ExposureOutcome::ParameterLimit`](crate::ExposureOutcome).
#[derive(Debug, thiserror::Error)]
pub enum StopwiseError {
    #[error("{parameter} value {value:?} is not on the {increment} scale")]
    NotFound {
        parameter: ParameterKind,
        increment: Increment,
        value: String,
    },

    #[error("{parameter} index {index} is outside the {increment} scale (0..{len})")]
    OutOfRange {
        parameter: ParameterKind,
        increment: Increment,
        index: i64,
        len: usize,
    },

    #[error("EV compensation must be finite, got {0}")]
    InvalidCompensation(f64),

    #[error("unknown increment: {0}")]
    UnknownIncrement(String),

    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("unknown rounding mode: {0}")]
    UnknownRounding(String),

    #[error("preset {0:?} not found")]
    PresetNotFound(String),

    #[error("preset serialization failed: {0}")]
    PresetFormat(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StopwiseError>;
