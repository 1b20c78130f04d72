//! Test data generation for workouts.
//!
//! This crate produces realistic sensor packages for every workout kind, to exercise the
//! registry and report pipeline with more than the handful of hand-written samples.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rand::{SeedableRng, rngs::StdRng};
//! use test_data::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(12345);
//! let packages = PackageGenerator::with_config(GenConfig {
//!     package_count: 500,
//!     fault_rate: 0.1,
//!     ..Default::default()
//! })
//! .generate(&mut rng);
//! ```

pub mod config;
pub mod generators;
pub mod profiles;

// Re-export core types from workouts crate
pub use workouts::{Package, WorkoutKind};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{GenConfig, KindMix};
    pub use crate::generators::{Fault, PackageGenerator};
    pub use crate::profiles::{
        RunnerProfile, SensorProfile, SwimmerProfile, WalkerProfile, profile_for, sample_normal,
    };
    pub use crate::{Package, WorkoutKind};
}
