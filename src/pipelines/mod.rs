//! Pipelines.
//!
//! [Cooccurrence] builds and writes the graph, [Check] verifies written outputs.
//! The module also provides a light [pipeline::Pipeline] trait that both implement.
mod builder;
mod check;
mod cooccurrence;
mod outputs;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use builder::{GraphBuilder, RecordStats, DEFAULT_CHUNK_SIZE};
pub use check::{Check, CheckReport};
pub use cooccurrence::{Cooccurrence, Summary};
pub use outputs::Outputs;
pub use pipeline::Pipeline;
