//! Workout registry: maps sensor tags to training constructors.

use std::{collections::HashMap, sync::LazyLock};

use tracing::debug;

use crate::{
    errors::{Result, WorkoutError},
    models::{Package, WorkoutKind},
    training::{Running, Swimming, Training, Walking},
};

type Constructor = fn(&[f64]) -> Result<Box<dyn Training>>;

struct Entry {
    kind: WorkoutKind,
    build: Constructor,
}

// Constructors receive a slice already checked against the kind's arity.
fn build_running(data: &[f64]) -> Result<Box<dyn Training>> {
    Ok(Box::new(Running::new(data[0], data[1], data[2])?))
}

fn build_walking(data: &[f64]) -> Result<Box<dyn Training>> {
    Ok(Box::new(Walking::new(data[0], data[1], data[2], data[3])?))
}

fn build_swimming(data: &[f64]) -> Result<Box<dyn Training>> {
    Ok(Box::new(Swimming::new(
        data[0], data[1], data[2], data[3], data[4],
    )?))
}

static REGISTRY: LazyLock<HashMap<&'static str, Entry>> = LazyLock::new(|| {
    WorkoutKind::ALL
        .into_iter()
        .map(|kind| {
            let build: Constructor = match kind {
                WorkoutKind::Running => build_running,
                WorkoutKind::Walking => build_walking,
                WorkoutKind::Swimming => build_swimming,
            };
            (kind.tag(), Entry { kind, build })
        })
        .collect()
});

/// Looks up the kind registered for a tag.
pub fn kind_for_tag(tag: &str) -> Result<WorkoutKind> {
    REGISTRY
        .get(tag)
        .map(|entry| entry.kind)
        .ok_or_else(|| WorkoutError::UnsupportedWorkoutKind(tag.to_string()))
}

/// Registered tags, sorted.
pub fn registered_tags() -> Vec<&'static str> {
    let mut tags: Vec<_> = REGISTRY.keys().copied().collect();
    tags.sort_unstable();
    tags
}

/// Builds the training registered for `tag` from positional readings.
pub fn resolve(tag: &str, data: &[f64]) -> Result<Box<dyn Training>> {
    let entry = REGISTRY
        .get(tag)
        .ok_or_else(|| WorkoutError::UnsupportedWorkoutKind(tag.to_string()))?;

    let expected = entry.kind.arity();
    if data.len() != expected {
        return Err(WorkoutError::ArityMismatch {
            kind: entry.kind,
            expected,
            actual: data.len(),
        });
    }

    debug!("Resolved {} package as {}", tag, entry.kind);
    (entry.build)(data)
}

pub fn resolve_package(package: &Package) -> Result<Box<dyn Training>> {
    resolve(&package.workout_type, &package.data)
}
