//! Package summarizing, one record or a whole batch.

use rayon::prelude::*;

use crate::{errors::Result, models::Package, registry::resolve_package, report::Report};

/// Resolves a package and computes its report.
pub fn summarize(package: &Package) -> Result<Report> {
    resolve_package(package).map(|training| training.report())
}

/// Summarizes every package independently, keeping input order.
pub fn summarize_batch(packages: &[Package]) -> Vec<Result<Report>> {
    packages.par_iter().map(summarize).collect()
}

/// Packages read by the sensors in the reference session.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
