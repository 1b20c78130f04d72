//! Sensor package generation.

use rand::{Rng, distributions::WeightedIndex, seq::SliceRandom};
use rand_distr::Distribution;
use tracing::debug;

use crate::{
    config::{GenConfig, KindMix},
    profiles::{SensorProfile, profile_for},
};
use workouts::{Package, WorkoutKind};

/// Ways a generated package can be broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Tag no registry entry matches.
    UnknownTag,
    /// Last reading dropped.
    MissingReading,
    /// Duration set to zero.
    ZeroDuration,
    /// Weight made negative.
    NegativeWeight,
}

impl Fault {
    pub const ALL: [Fault; 4] = [
        Fault::UnknownTag,
        Fault::MissingReading,
        Fault::ZeroDuration,
        Fault::NegativeWeight,
    ];

    /// Breaks a valid package. Readings the package does not carry are left alone.
    pub fn apply(self, package: &mut Package) {
        match self {
            Fault::UnknownTag => package.workout_type = "FLY".to_string(),
            Fault::MissingReading => {
                package.data.pop();
            }
            Fault::ZeroDuration => {
                if let Some(duration) = package.data.get_mut(1) {
                    *duration = 0.0;
                }
            }
            Fault::NegativeWeight => {
                if let Some(weight) = package.data.get_mut(2) {
                    *weight = -*weight;
                }
            }
        }
    }
}

/// Generates realistic sensor packages.
pub struct PackageGenerator {
    config: GenConfig,
    profiles: Vec<Box<dyn SensorProfile>>,
}

impl Default for PackageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageGenerator {
    /// Creates a new package generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(GenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: GenConfig) -> Self {
        Self {
            config,
            profiles: WorkoutKind::ALL.into_iter().map(profile_for).collect(),
        }
    }

    /// Replaces the profile used for its kind.
    pub fn with_profile(mut self, profile: Box<dyn SensorProfile>) -> Self {
        let kind = profile.kind();
        self.profiles.retain(|p| p.kind() != kind);
        self.profiles.push(profile);
        self
    }

    /// Generates a single valid package for the given kind.
    pub fn generate_one(&self, kind: WorkoutKind, rng: &mut impl Rng) -> Package {
        let readings = match self.profiles.iter().find(|p| p.kind() == kind) {
            Some(profile) => profile.sample_readings(rng),
            None => profile_for(kind).sample_readings(rng),
        };
        Package::new(kind.tag(), readings)
    }

    /// Generates `package_count` packages, breaking roughly `fault_rate` of them.
    pub fn generate(&self, rng: &mut impl Rng) -> Vec<Package> {
        let kinds = self.kind_index();
        let fault_rate = self.config.fault_rate.clamp(0.0, 1.0);

        let packages: Vec<Package> = (0..self.config.package_count)
            .map(|_| {
                let kind = WorkoutKind::ALL[kinds.sample(rng)];
                let mut package = self.generate_one(kind, rng);
                if fault_rate > 0.0 && rng.gen_bool(fault_rate) {
                    if let Some(fault) = Fault::ALL.choose(rng) {
                        fault.apply(&mut package);
                    }
                }
                package
            })
            .collect();

        debug!("Generated {} packages", packages.len());
        packages
    }

    fn kind_index(&self) -> WeightedIndex<f64> {
        let weights = |mix: &KindMix| WorkoutKind::ALL.map(|kind| mix.weight(kind).max(0.0));
        WeightedIndex::new(weights(&self.config.mix))
            .or_else(|_| WeightedIndex::new(weights(&KindMix::default())))
            .unwrap_or_else(|_| unreachable!("default kind mix has positive weights"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_generates_requested_count() {
        let mut rng = StdRng::seed_from_u64(12345);
        let generator = PackageGenerator::with_config(GenConfig {
            package_count: 37,
            ..Default::default()
        });
        assert_eq!(generator.generate(&mut rng).len(), 37);
    }

    #[test]
    fn test_single_kind_mix() {
        let mut rng = StdRng::seed_from_u64(12345);
        let generator = PackageGenerator::with_config(GenConfig {
            package_count: 50,
            mix: KindMix::only(WorkoutKind::Walking),
            ..Default::default()
        });
        assert!(
            generator
                .generate(&mut rng)
                .iter()
                .all(|p| p.workout_type == "WLK" && p.data.len() == 4)
        );
    }

    #[test]
    fn test_zero_mix_falls_back_to_default() {
        let mut rng = StdRng::seed_from_u64(1);
        let generator = PackageGenerator::with_config(GenConfig {
            package_count: 10,
            mix: KindMix {
                running: 0.0,
                walking: 0.0,
                swimming: 0.0,
            },
            ..Default::default()
        });
        assert_eq!(generator.generate(&mut rng).len(), 10);
    }

    #[test]
    fn test_fault_apply() {
        let base = Package::new("RUN", vec![15000.0, 1.0, 75.0]);

        let mut p = base.clone();
        Fault::UnknownTag.apply(&mut p);
        assert_eq!(p.workout_type, "FLY");

        let mut p = base.clone();
        Fault::MissingReading.apply(&mut p);
        assert_eq!(p.data.len(), 2);

        let mut p = base.clone();
        Fault::ZeroDuration.apply(&mut p);
        assert_eq!(p.data[1], 0.0);

        let mut p = base;
        Fault::NegativeWeight.apply(&mut p);
        assert_eq!(p.data[2], -75.0);
    }

    #[test]
    fn test_fault_on_short_package() {
        let mut p = Package::new("RUN", vec![15000.0]);
        for fault in Fault::ALL {
            fault.apply(&mut p);
        }
        assert_eq!(p.workout_type, "FLY");
        assert!(p.data.is_empty());
    }
}
