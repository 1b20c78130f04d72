//! Runner sensor profile.

use rand::{Rng, RngCore};

use super::{SensorProfile, sample_normal};
use workouts::WorkoutKind;

/// Sensor profile for running activities.
///
/// Based on typical recreational runners:
/// - Cadence: ~165 steps/min
/// - Sessions between 20 minutes and 2 hours
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Mean cadence in steps per minute.
    cadence: f64,
    /// Mean body weight in kg.
    weight: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            cadence: 165.0,
            weight: 72.0,
        }
    }
}

impl RunnerProfile {
    /// Creates a runner profile with the given mean cadence.
    pub fn with_cadence(cadence: f64) -> Self {
        Self {
            cadence,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile (~185 steps/min).
    pub fn elite() -> Self {
        Self::with_cadence(185.0)
    }
}

impl SensorProfile for RunnerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn sample_readings(&self, rng: &mut dyn RngCore) -> Vec<f64> {
        let duration = rng.gen_range(0.33..2.0);
        let cadence = sample_normal(rng, self.cadence, 8.0, 120.0, 210.0);
        let weight = sample_normal(rng, self.weight, 10.0, 45.0, 130.0);
        let action = (cadence * 60.0 * duration).round();
        vec![action, duration, weight]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_readings_in_range() {
        let profile = RunnerProfile::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let r = profile.sample_readings(&mut rng);
            assert_eq!(r.len(), 3);
            assert_eq!(r[0].fract(), 0.0);
            assert!(r[1] >= 0.33 && r[1] < 2.0);
            assert!((45.0..=130.0).contains(&r[2]));
        }
    }

    #[test]
    fn test_elite_takes_more_steps() {
        assert!(RunnerProfile::elite().cadence > RunnerProfile::default().cadence);
    }
}
