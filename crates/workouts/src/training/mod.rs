//! Training calculations.
//!
//! Every workout kind shares one distance and mean speed model and brings its own calorie
//! formula. Values are computed on demand from the readings captured at construction.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::Walking;

use crate::{
    models::{Measurements, WorkoutKind},
    report::Report,
};

/// Step length in meters for running and walking.
pub const LEN_STEP: f64 = 0.65;
/// Meters per kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes per hour.
pub const MIN_IN_H: f64 = 60.0;

/// Shared capability of all workout kinds.
///
/// Implementations provide:
/// - Their kind and readings
/// - A calorie formula (there is no default)
///
/// and may override the step length or the mean speed model.
pub trait Training: Send + Sync {
    fn kind(&self) -> WorkoutKind;

    fn measurements(&self) -> &Measurements;

    /// Distance covered per action in meters.
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers.
    fn distance(&self) -> f64 {
        self.measurements().action as f64 * self.step_length() / M_IN_KM
    }

    /// Mean speed over the whole duration in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.measurements().duration
    }

    /// Calories burned in kcal.
    fn spent_calories(&self) -> f64;

    /// Snapshot of the computed values.
    fn report(&self) -> Report {
        Report {
            workout_kind: self.kind(),
            duration: self.measurements().duration,
            distance: self.distance(),
            mean_speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}
