//! Running workout.

use super::{M_IN_KM, MIN_IN_H, Training};
use crate::{
    errors::Result,
    models::{Measurements, WorkoutKind},
};

const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_SPEED_SHIFT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    measurements: Measurements,
}

impl Running {
    pub fn new(action: f64, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            measurements: Measurements::new(action, duration, weight)?,
        })
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    fn spent_calories(&self) -> f64 {
        let Measurements {
            duration, weight, ..
        } = self.measurements;
        (CALORIES_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_SPEED_SHIFT) * weight / M_IN_KM
            * duration
            * MIN_IN_H
    }
}
