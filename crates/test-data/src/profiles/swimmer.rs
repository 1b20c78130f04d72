//! Swimmer sensor profile.

use rand::{Rng, RngCore, seq::SliceRandom};

use super::{SensorProfile, sample_normal};
use workouts::WorkoutKind;

/// Standard pool lengths in meters.
const POOL_LENGTHS: [f64; 3] = [25.0, 33.0, 50.0];

/// Sensor profile for pool swimming.
///
/// - Speed: ~2 km/h for a fitness swimmer
/// - Strokes: ~18 per 25 m, scaled to the pool
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    /// Mean speed in km/h.
    speed: f64,
    /// Mean strokes per 25 m.
    strokes_per_25m: f64,
    /// Mean body weight in kg.
    weight: f64,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            speed: 2.0,
            strokes_per_25m: 18.0,
            weight: 70.0,
        }
    }
}

impl SensorProfile for SwimmerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn sample_readings(&self, rng: &mut dyn RngCore) -> Vec<f64> {
        let duration = rng.gen_range(0.5..1.5);
        let weight = sample_normal(rng, self.weight, 10.0, 40.0, 130.0);
        let pool_length = POOL_LENGTHS.choose(rng).copied().unwrap_or(25.0);
        let speed = sample_normal(rng, self.speed, 0.4, 0.8, 4.0);

        let pool_lengths = (speed * 1000.0 * duration / pool_length).round().max(1.0);
        let strokes = sample_normal(rng, self.strokes_per_25m, 3.0, 10.0, 30.0);
        let action = (pool_lengths * strokes * pool_length / 25.0).round();

        vec![action, duration, weight, pool_length, pool_lengths]
    }
}
