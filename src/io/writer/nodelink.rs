/*! Node-link JSON writer.

Same layout as networkx's `node_link_data`, so that
`networkx.node_link_graph(json.load(f))` gives back the weighted graph.
!*/
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::graph::{Subgraph, SubgraphEdge};

use super::WriterTrait;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkNode {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLink {
    pub directed: bool,
    pub multigraph: bool,
    #[serde(default)]
    pub graph: serde_json::Map<String, serde_json::Value>,
    pub nodes: Vec<NodeLinkNode>,
    pub links: Vec<NodeLinkEdge>,
}

impl From<&Subgraph> for NodeLink {
    fn from(subgraph: &Subgraph) -> Self {
        let labels = subgraph.labels();
        let nodes = labels
            .iter()
            .map(|id| NodeLinkNode { id: id.clone() })
            .collect();
        let links = subgraph
            .edges()
            .iter()
            .map(|e| NodeLinkEdge {
                source: labels[e.source()].clone(),
                target: labels[e.target()].clone(),
                weight: e.weight(),
            })
            .collect();
        Self {
            directed: false,
            multigraph: false,
            graph: serde_json::Map::new(),
            nodes,
            links,
        }
    }
}

impl TryFrom<NodeLink> for Subgraph {
    type Error = Error;

    /// node order is kept, links referring to unknown nodes are an error.
    fn try_from(nl: NodeLink) -> Result<Self, Self::Error> {
        let labels: Vec<String> = nl.nodes.into_iter().map(|n| n.id).collect();
        let edges = {
            let positions: HashMap<&str, usize> = labels
                .iter()
                .enumerate()
                .map(|(pos, label)| (label.as_str(), pos))
                .collect();
            let position = |id: &str| {
                positions
                    .get(id)
                    .copied()
                    .ok_or_else(|| Error::Custom(format!("link to unknown node {id:?}")))
            };
            nl.links
                .iter()
                .map(|l| -> Result<SubgraphEdge, Error> {
                    Ok(SubgraphEdge::new(
                        position(&l.source)?,
                        position(&l.target)?,
                        l.weight,
                    ))
                })
                .collect::<Result<Vec<_>, _>>()?
        };
        Ok(Subgraph::new(labels, edges))
    }
}

pub struct NodeLinkWriter {
    dst: PathBuf,
}

impl WriterTrait for NodeLinkWriter {
    fn new(dst: &Path) -> Self {
        Self {
            dst: dst.to_path_buf(),
        }
    }

    fn write(&mut self, subgraph: &Subgraph) -> Result<(), Error> {
        debug!("writing node-link json to {:?}", self.dst);
        let mut file = BufWriter::new(File::create(&self.dst)?);
        serde_json::to_writer(&mut file, &NodeLink::from(subgraph))?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let s = Subgraph::new(
            vec!["a".into(), "b".into()],
            vec![SubgraphEdge::new(0, 1, 3.0)],
        );
        let v = serde_json::to_value(NodeLink::from(&s)).unwrap();
        assert_eq!(v["directed"], false);
        assert_eq!(v["graph"], serde_json::json!({}));
        assert_eq!(v["nodes"][1]["id"], "b");
        assert_eq!(v["links"][0]["source"], "a");
        assert_eq!(v["links"][0]["weight"], 3.0);
    }

    #[test]
    fn unknown_node() {
        let nl = NodeLink {
            directed: false,
            multigraph: false,
            graph: serde_json::Map::new(),
            nodes: vec![NodeLinkNode { id: "a".into() }],
            links: vec![NodeLinkEdge {
                source: "a".into(),
                target: "ghost".into(),
                weight: 1.0,
            }],
        };
        assert!(Subgraph::try_from(nl).is_err());
    }
}
