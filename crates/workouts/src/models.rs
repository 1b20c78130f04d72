use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, WorkoutError};

/// The closed set of supported workout kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    #[serde(rename = "SportsWalking")]
    Walking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::Walking,
        WorkoutKind::Swimming,
    ];

    /// Sensor tag identifying the kind in a package.
    pub const fn tag(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Name shown in reports.
    pub const fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of raw readings a package of this kind carries.
    pub const fn arity(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::Walking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw sensor package: a workout tag plus positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Readings shared by every workout kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    /// Steps or strokes.
    pub action: u64,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

impl Measurements {
    pub fn new(action: f64, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            action: count("action", action)?,
            duration: divisor("duration", duration)?,
            weight: positive("weight", weight)?,
        })
    }
}

/// Accepts a strictly positive, finite reading.
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidMeasurement { field, value })
    }
}

/// Like [`positive`], but a zero reading is reported as a division by zero.
pub(crate) fn divisor(field: &'static str, value: f64) -> Result<f64> {
    if value == 0.0 {
        return Err(WorkoutError::DivisionByZero { field });
    }
    positive(field, value)
}

/// Accepts a non-negative whole number.
pub(crate) fn count(field: &'static str, value: f64) -> Result<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(WorkoutError::InvalidMeasurement { field, value })
    }
}
