//! Sports walking workout.

use super::{MIN_IN_H, Training};
use crate::{
    errors::Result,
    models::{Measurements, WorkoutKind, divisor},
};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    measurements: Measurements,
    /// Centimeters.
    height: f64,
}

impl Walking {
    pub fn new(action: f64, duration: f64, weight: f64, height: f64) -> Result<Self> {
        Ok(Self {
            measurements: Measurements::new(action, duration, weight)?,
            height: divisor("height", height)?,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for Walking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Walking
    }

    fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    fn spent_calories(&self) -> f64 {
        let Measurements {
            duration, weight, ..
        } = self.measurements;
        // The speed/height term only counts whole units.
        let speed_height = floor_div(self.mean_speed().powi(2), self.height);
        (CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_height * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * duration
            * MIN_IN_H
    }
}

/// Floor division derived from the remainder, so a quotient that rounds up to a whole number
/// still floors to the value below it (`1.0 / 0.1` floors to 9, not 10).
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut quot = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        quot -= 1.0;
    }
    if quot == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = quot.floor();
    if quot - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
