//! Configuration types for package generation.

use serde::{Deserialize, Serialize};

use workouts::WorkoutKind;

/// Relative weights of each workout kind in a generated batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KindMix {
    pub running: f64,
    pub walking: f64,
    pub swimming: f64,
}

impl Default for KindMix {
    fn default() -> Self {
        // Running dominates real sensor uploads; swimming is the rarest.
        Self {
            running: 0.5,
            walking: 0.3,
            swimming: 0.2,
        }
    }
}

impl KindMix {
    /// A mix producing only one kind.
    pub fn only(kind: WorkoutKind) -> Self {
        let mut mix = Self {
            running: 0.0,
            walking: 0.0,
            swimming: 0.0,
        };
        *mix.weight_mut(kind) = 1.0;
        mix
    }

    pub fn weight(&self, kind: WorkoutKind) -> f64 {
        match kind {
            WorkoutKind::Running => self.running,
            WorkoutKind::Walking => self.walking,
            WorkoutKind::Swimming => self.swimming,
        }
    }

    fn weight_mut(&mut self, kind: WorkoutKind) -> &mut f64 {
        match kind {
            WorkoutKind::Running => &mut self.running,
            WorkoutKind::Walking => &mut self.walking,
            WorkoutKind::Swimming => &mut self.swimming,
        }
    }
}

/// Configuration for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenConfig {
    /// Number of packages to generate.
    pub package_count: usize,

    /// Share of each workout kind.
    pub mix: KindMix,

    /// Probability (0.0-1.0) that a package is deliberately malformed.
    pub fault_rate: f64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            package_count: 100,
            mix: KindMix::default(),
            fault_rate: 0.0,
        }
    }
}
