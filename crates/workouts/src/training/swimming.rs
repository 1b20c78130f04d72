//! Swimming workout.

use super::{M_IN_KM, Training};
use crate::{
    errors::{Result, WorkoutError},
    models::{Measurements, WorkoutKind, count, positive},
};

/// Distance per stroke in meters.
pub const LEN_STROKE: f64 = 1.38;

const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    measurements: Measurements,
    /// Meters.
    pool_length: f64,
    pool_lengths: u64,
}

impl Swimming {
    pub fn new(
        action: f64,
        duration: f64,
        weight: f64,
        pool_length: f64,
        pool_lengths: f64,
    ) -> Result<Self> {
        let measurements = Measurements::new(action, duration, weight)?;
        let pool_length = positive("pool_length", pool_length)?;
        let pool_lengths = count("pool_lengths", pool_lengths)?;
        if pool_lengths == 0 {
            return Err(WorkoutError::InvalidMeasurement {
                field: "pool_lengths",
                value: 0.0,
            });
        }
        Ok(Self {
            measurements,
            pool_length,
            pool_lengths,
        })
    }

    pub fn pool_length(&self) -> f64 {
        self.pool_length
    }

    pub fn pool_lengths(&self) -> u64 {
        self.pool_lengths
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    fn step_length(&self) -> f64 {
        LEN_STROKE
    }

    fn mean_speed(&self) -> f64 {
        self.pool_length * self.pool_lengths as f64 / M_IN_KM / self.measurements.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.measurements.weight
    }
}
