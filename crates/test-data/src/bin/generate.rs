//! Generates sensor packages as a JSON array on stdout
//!
//! Run with:
//! ```
//! PACKAGE_COUNT=500 FAULT_RATE=0.1 cargo run -p test-data --bin generate > packages.json
//! WORKOUT_PACKAGES=packages.json cargo run -p workouts
//! ```

use std::env;

use rand::{SeedableRng, rngs::StdRng};
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid {key}={value}: {e}")),
        Err(_) => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GenConfig {
        package_count: env_or("PACKAGE_COUNT", 100)?,
        fault_rate: env_or("FAULT_RATE", 0.0)?,
        ..Default::default()
    };
    let seed: u64 = env_or("SEED", 12345)?; // Reproducible data

    let mut rng = StdRng::seed_from_u64(seed);
    let packages = PackageGenerator::with_config(config).generate(&mut rng);

    println!("{}", serde_json::to_string_pretty(&packages)?);

    tracing::info!("Generated {} packages (seed {})", packages.len(), seed);

    Ok(())
}
