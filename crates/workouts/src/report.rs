//! Training report rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::WorkoutKind;

/// Computed values of one training, rendered as a single summary line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub workout_kind: WorkoutKind,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// km/h.
    pub mean_speed: f64,
    /// kcal.
    pub calories: f64,
}

impl Report {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.workout_kind, self.duration, self.distance, self.mean_speed, self.calories
        )
    }
}
