pub mod config;
pub mod error;
pub mod filtering;
pub mod graph;
pub mod identifiers;
pub mod io;
pub mod pipelines;
pub mod record;
pub mod sources;
pub mod tags;
