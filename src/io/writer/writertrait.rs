use std::path::Path;

use crate::error::Error;
use crate::graph::Subgraph;

/// Subgraph sink.
///
/// Nothing is created on disk until [WriterTrait::write] is called.
pub trait WriterTrait {
    fn new(dst: &Path) -> Self
    where
        Self: Sized;
    fn write(&mut self, subgraph: &Subgraph) -> Result<(), Error>;
}
