/*! Co-occurrence graph

[CooccurrenceGraph] accumulates tags and weighted edges record after record,
and is reduced to its largest connected component ([Subgraph]) once the stream is exhausted.
!*/
mod components;
mod cooccurrence;
mod subgraph;

pub use cooccurrence::{CooccurrenceGraph, EdgeKey, NodeId};
pub use subgraph::{Subgraph, SubgraphEdge};
