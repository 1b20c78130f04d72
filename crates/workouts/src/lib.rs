pub mod config;
pub mod errors;
pub mod models;
pub mod registry;
pub mod report;
pub mod summary;
pub mod training;

use std::{fs, path::Path};

use anyhow::Context;

pub use crate::{
    errors::WorkoutError,
    models::{Package, WorkoutKind},
    registry::{registered_tags, resolve, resolve_package},
    report::Report,
    summary::{summarize, summarize_batch},
    training::Training,
};

/// Reads a JSON array of packages.
pub fn load_packages(path: &Path) -> anyhow::Result<Vec<Package>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse packages in {}", path.display()))
}
