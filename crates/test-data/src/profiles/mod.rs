//! Athlete sensor profiles.
//!
//! Profiles define realistic readings for each workout kind. They are used by the package
//! generator to produce raw sensor data in the positional order the registry expects.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use rand::RngCore;
use rand_distr::{Distribution, Normal};

use workouts::WorkoutKind;

/// Trait for athlete sensor profiles.
///
/// Implementations should provide:
/// - The workout kind they produce readings for
/// - Readings sampled in the kind's positional order
pub trait SensorProfile: Send + Sync {
    fn kind(&self) -> WorkoutKind;

    /// Samples one set of raw readings.
    fn sample_readings(&self, rng: &mut dyn RngCore) -> Vec<f64>;
}

/// Returns the default profile for a workout kind.
pub fn profile_for(kind: WorkoutKind) -> Box<dyn SensorProfile> {
    match kind {
        WorkoutKind::Running => Box::new(RunnerProfile::default()),
        WorkoutKind::Walking => Box::new(WalkerProfile::default()),
        WorkoutKind::Swimming => Box::new(SwimmerProfile::default()),
    }
}

/// Samples from a normal distribution, clamped to `[min, max]`.
/// Falls back to the mean when the deviation is not a valid parameter.
pub fn sample_normal(rng: &mut dyn RngCore, mean: f64, std_dev: f64, min: f64, max: f64) -> f64 {
    let sample = match Normal::new(mean, std_dev) {
        Ok(normal) if std_dev > 0.0 => normal.sample(rng),
        _ => mean,
    };
    sample.clamp(min, max)
}
