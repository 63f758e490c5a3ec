/*!
# Subgraph writers

Each output format has a writer implementing [WriterTrait]:

- [AdjacencyWriter]: sparse adjacency matrix (Matrix Market) and its node labels (CSV),
- [GexfWriter]: GEXF graph exchange file,
- [NodeLinkWriter]: node-link JSON.

Writers are independent from each other and only read the [crate::graph::Subgraph].
!*/
mod adjacency;
mod gexf;
mod nodelink;
mod writertrait;

pub(crate) use adjacency::{MatrixEntry, MATRIX_MARKET_HEADER};
pub use adjacency::AdjacencyWriter;
pub use gexf::GexfWriter;
pub use nodelink::{NodeLink, NodeLinkEdge, NodeLinkNode, NodeLinkWriter};
pub use writertrait::WriterTrait;
