/*! Output consistency check

Decodes every output of a [super::Cooccurrence] run and ensures that they describe the same graph:
same node labels and same weighted edges.
!*/
use log::info;
use serde::Serialize;

use crate::error::Error;
use crate::graph::Subgraph;
use crate::io::reader::{read_node_link, AdjacencyMatrix, GexfReader};

use super::outputs::Outputs;
use super::pipeline::Pipeline;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub nodes: usize,
    pub edges: usize,
    pub total_weight: f64,
    /// formats that were decoded and compared.
    pub formats: Vec<&'static str>,
}

pub struct Check {
    outputs: Outputs,
}

impl Check {
    pub fn new(outputs: Outputs) -> Self {
        Self { outputs }
    }

    fn compare(reference: &Subgraph, other: &Subgraph, format: &str) -> Result<(), Error> {
        if reference.is_equivalent(other) {
            Ok(())
        } else {
            Err(Error::Custom(format!(
                "{format} output ({} nodes, {} edges) differs from the adjacency matrix ({} nodes, {} edges)",
                other.node_count(),
                other.edge_count(),
                reference.node_count(),
                reference.edge_count()
            )))
        }
    }
}

impl Pipeline<CheckReport> for Check {
    fn run(&self) -> Result<CheckReport, Error> {
        let reference =
            AdjacencyMatrix::read_subgraph(&self.outputs.adjacency, &self.outputs.labels_path())?;
        let mut formats = vec!["adjacency"];

        let gexf = GexfReader::from_path(&self.outputs.gexf)?.read_subgraph()?;
        Self::compare(&reference, &gexf, "gexf")?;
        formats.push("gexf");

        if let Some(path) = &self.outputs.node_link {
            let node_link = read_node_link(path)?;
            Self::compare(&reference, &node_link, "node-link")?;
            formats.push("node-link");
        }

        info!(
            "{} outputs are consistent: {} nodes, {} edges",
            formats.len(),
            reference.node_count(),
            reference.edge_count()
        );
        Ok(CheckReport {
            nodes: reference.node_count(),
            edges: reference.edge_count(),
            total_weight: reference.total_weight(),
            formats,
        })
    }
}
