use thiserror::Error;

use crate::models::WorkoutKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("Unsupported workout kind: {0}")]
    UnsupportedWorkoutKind(String),

    #[error("{kind} expects {expected} readings, got {actual}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid measurement: {field} = {value}")]
    InvalidMeasurement { field: &'static str, value: f64 },

    #[error("Division by zero: {field} must not be zero")]
    DivisionByZero { field: &'static str },
}

impl WorkoutError {
    /// Whether the error was caused by a reading rather than by the package shape.
    pub fn is_measurement_error(&self) -> bool {
        matches!(
            self,
            WorkoutError::InvalidMeasurement { .. } | WorkoutError::DivisionByZero { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
