//! Package generators for test data.
//!
//! - [`PackageGenerator`]: Generate batches of sensor packages with a configurable kind mix
//! - [`Fault`]: Malformed packages for exercising error paths

pub mod package;

pub use package::{Fault, PackageGenerator};
