//! Walker sensor profile.

use rand::{Rng, RngCore};

use super::{SensorProfile, sample_normal};
use workouts::WorkoutKind;

/// Sensor profile for sports walking.
///
/// Based on brisk walking at ~115 steps/min over half an hour to three hours.
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    /// Mean cadence in steps per minute.
    cadence: f64,
    /// Mean body weight in kg.
    weight: f64,
    /// Mean height in cm.
    height: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            cadence: 115.0,
            weight: 78.0,
            height: 172.0,
        }
    }
}

impl SensorProfile for WalkerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Walking
    }

    fn sample_readings(&self, rng: &mut dyn RngCore) -> Vec<f64> {
        let duration = rng.gen_range(0.5..3.0);
        let cadence = sample_normal(rng, self.cadence, 10.0, 80.0, 150.0);
        let weight = sample_normal(rng, self.weight, 12.0, 45.0, 140.0);
        let height = sample_normal(rng, self.height, 9.0, 145.0, 205.0).round();
        let action = (cadence * 60.0 * duration).round();
        vec![action, duration, weight, height]
    }
}
