//! Output file locations.
use std::path::PathBuf;

use log::{info, warn};

use crate::error::Error;
use crate::graph::Subgraph;
use crate::io::writer::{AdjacencyWriter, GexfWriter, NodeLinkWriter, WriterTrait};

/// Where a subgraph is written to (or read back from).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outputs {
    pub adjacency: PathBuf,
    /// defaults to [AdjacencyWriter::default_labels_path].
    pub labels: Option<PathBuf>,
    pub gexf: PathBuf,
    /// node-link JSON is only written when set.
    pub node_link: Option<PathBuf>,
}

impl Outputs {
    pub fn new(adjacency: PathBuf, gexf: PathBuf) -> Self {
        Self {
            adjacency,
            labels: None,
            gexf,
            node_link: None,
        }
    }

    pub fn with_labels(mut self, labels: Option<PathBuf>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_node_link(mut self, node_link: Option<PathBuf>) -> Self {
        self.node_link = node_link;
        self
    }

    pub fn labels_path(&self) -> PathBuf {
        self.labels
            .clone()
            .unwrap_or_else(|| AdjacencyWriter::default_labels_path(&self.adjacency))
    }

    fn paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![self.adjacency.clone(), self.labels_path(), self.gexf.clone()];
        paths.extend(self.node_link.iter().cloned());
        paths
    }

    /// create missing parent directories.
    fn prepare(&self) -> Result<(), Error> {
        for path in self.paths() {
            match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                    warn!("Destination folder {:?} does not exist. Creating", parent);
                    std::fs::create_dir_all(parent)?;
                }
                _ => (),
            }
        }
        Ok(())
    }

    /// Write the subgraph in every configured format.
    pub fn write(&self, subgraph: &Subgraph) -> Result<(), Error> {
        self.prepare()?;

        let mut adjacency = AdjacencyWriter::new(&self.adjacency).with_labels_path(self.labels_path());
        adjacency.write(subgraph)?;
        info!(
            "adjacency matrix written to {:?} (labels: {:?})",
            self.adjacency,
            adjacency.labels_path()
        );

        GexfWriter::new(&self.gexf).write(subgraph)?;
        info!("gexf written to {:?}", self.gexf);

        if let Some(path) = &self.node_link {
            NodeLinkWriter::new(path).write(subgraph)?;
            info!("node-link json written to {:?}", path);
        }
        Ok(())
    }

    /// true if any of the output files is already there.
    pub fn any_exists(&self) -> bool {
        self.paths().iter().any(|p| p.exists())
    }
}
