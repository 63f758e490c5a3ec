/*! Output reading utilities

Every writer of [crate::io::writer] has a matching reader that decodes its output back into a [crate::graph::Subgraph],
so that outputs can be checked against each other.
!*/
mod adjacency;
mod gexf;
mod nodelink;

pub use adjacency::AdjacencyMatrix;
pub use gexf::GexfReader;
pub use nodelink::read_node_link;
