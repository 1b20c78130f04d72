use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::{
    config::{Config, ReportFormat},
    load_packages, summarize_batch,
    summary::sample_packages,
};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = Config::from_env()?;

    let packages = match &config.packages_path {
        Some(path) => {
            info!("Loading packages from {}", path.display());
            load_packages(path)?
        }
        None => sample_packages(),
    };

    let mut skipped = 0;
    for (index, (package, result)) in packages
        .iter()
        .zip(summarize_batch(&packages))
        .enumerate()
    {
        match result {
            Ok(report) => match config.format {
                ReportFormat::Text => println!("{report}"),
                ReportFormat::Json => println!("{}", serde_json::to_string(&report)?),
            },
            Err(e) => {
                warn!("Skipping package #{index} ({}): {e}", package.workout_type);
                skipped += 1;
            }
        }
    }

    info!(
        "Summarized {} of {} packages",
        packages.len() - skipped,
        packages.len()
    );

    Ok(())
}
