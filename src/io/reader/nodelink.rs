//! Reads back node-link JSON files.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Error;
use crate::graph::Subgraph;
use crate::io::writer::NodeLink;

pub fn read_node_link(src: &Path) -> Result<Subgraph, Error> {
    let reader = BufReader::new(File::open(src)?);
    let nl: NodeLink = serde_json::from_reader(reader)?;
    Subgraph::try_from(nl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SubgraphEdge;
    use crate::io::writer::{NodeLinkWriter, WriterTrait};

    #[test]
    fn read_written() {
        let dst = tempfile::tempdir().unwrap();
        let path = dst.path().join("graph.json");
        let s = Subgraph::new(
            vec!["x".into(), "y".into(), "z".into()],
            vec![SubgraphEdge::new(2, 0, 1.0), SubgraphEdge::new(0, 1, 7.0)],
        );
        NodeLinkWriter::new(&path).write(&s).unwrap();
        assert_eq!(read_node_link(&path).unwrap(), s);
    }

    #[test]
    fn missing_graph_key() {
        let dst = tempfile::tempdir().unwrap();
        let path = dst.path().join("graph.json");
        std::fs::write(
            &path,
            r#"{"directed":false,"multigraph":false,"nodes":[{"id":"a"},{"id":"b"}],"links":[{"source":"b","target":"a","weight":2.0}]}"#,
        )
        .unwrap();
        let s = read_node_link(&path).unwrap();
        assert_eq!(s.weight("a", "b"), Some(2.0));
    }

    #[test]
    fn read_large_graph() {
        let dst = tempfile::tempdir().unwrap();
        let path = dst.path().join("graph.json");
        let n = 20_000;
        let labels: Vec<String> = (0..n).map(|i| format!("tag{i}")).collect();
        // a ring plus chords, 4 links per node
        let edges: Vec<SubgraphEdge> = (0..n)
            .flat_map(|i| {
                [
                    SubgraphEdge::new(i, (i + 1) % n, 1.0),
                    SubgraphEdge::new(i, (i + 7) % n, 2.0),
                    SubgraphEdge::new(i, (i + 101) % n, 3.0),
                    SubgraphEdge::new(i, (i + 1009) % n, 4.0),
                ]
            })
            .collect();
        let s = Subgraph::new(labels, edges);
        NodeLinkWriter::new(&path).write(&s).unwrap();

        let start = std::time::Instant::now();
        let read = read_node_link(&path).unwrap();
        let elapsed = start.elapsed();

        assert_eq!(read, s);
        assert_eq!(read.edge_count(), 4 * n);
        assert_eq!(read.weight("tag19999", "tag0"), Some(1.0));
        // linear lookups took seconds at this size
        assert!(elapsed.as_secs() < 5, "decoding took {elapsed:?}");
    }
}
