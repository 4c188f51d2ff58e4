//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! implemented by the [preprocess::Preprocess] pipeline that builds training datasets.
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod preprocess;

pub use pipeline::Pipeline;
pub use preprocess::{Preprocess, Report, SplitStats, VocabStats};
