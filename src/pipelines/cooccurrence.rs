/*! Hashtag co-occurrence graph pipeline

Builds the co-occurrence graph of a record file and writes its largest connected component.

# Processing
1. Records are read line by line from a (possibly gzipped) JSON lines file.
1. Each record is resolved to its text and tags (original or boosted, extended or plain).
1. Records whose normalized text is not identified as the target language are skipped.
1. Tags of the remaining records are added to the graph, each distinct pair increasing the weight of its edge.
1. The largest connected component is extracted and written as an adjacency matrix, a GEXF file and optionally node-link JSON.

An empty graph is reported as [Error::EmptyGraph], and no output is written in that case.
!*/
use std::path::PathBuf;

use log::{debug, info, warn};
use serde::Serialize;

use crate::config::GraphConfig;
use crate::error::Error;
use crate::filtering::Language;
use crate::graph::{CooccurrenceGraph, Subgraph};
use crate::identifiers::Predict;
use crate::sources::JsonLines;

use super::builder::{GraphBuilder, RecordStats, DEFAULT_CHUNK_SIZE};
use super::outputs::Outputs;
use super::pipeline::Pipeline;

/// Figures about a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub config: GraphConfig,
    pub records: RecordStats,
    /// full graph
    pub nodes: usize,
    pub edges: usize,
    pub components: usize,
    /// largest connected component
    pub component_nodes: usize,
    pub component_edges: usize,
    pub component_weight: f64,
}

pub struct Cooccurrence<P: Predict> {
    src: PathBuf,
    outputs: Outputs,
    config: GraphConfig,
    identifier: P,
    chunk_size: usize,
}

impl<P: Predict> Cooccurrence<P> {
    pub fn new(src: PathBuf, outputs: Outputs, config: GraphConfig, identifier: P) -> Self {
        debug!("using config {:?}", config);
        Self {
            src,
            outputs,
            config,
            identifier,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Build the full graph, without writing anything.
    pub fn build_graph(&self) -> Result<(CooccurrenceGraph, RecordStats), Error> {
        info!(
            "building [{}] co-occurrence graph from {:?}",
            self.config.language, self.src
        );
        let source = JsonLines::from_path(&self.src)?;
        let filter = Language::new(&self.identifier, self.config.language.clone());
        let mut builder =
            GraphBuilder::new(filter, self.config.weights).with_chunk_size(self.chunk_size);
        builder.consume(source)?;
        Ok(builder.finish())
    }

    /// Largest component of the graph, along with the number of components.
    fn reduce(graph: &CooccurrenceGraph) -> Result<(Subgraph, usize), Error> {
        let (subgraph, components) = graph.largest_component_with_count()?;
        info!(
            "{} components, keeping the largest one ({} out of {} nodes)",
            components,
            subgraph.node_count(),
            graph.node_count()
        );
        Ok((subgraph, components))
    }
}

impl<P: Predict> Pipeline<Summary> for Cooccurrence<P> {
    fn run(&self) -> Result<Summary, Error> {
        if self.outputs.any_exists() {
            warn!("some output files already exist and will be overwritten");
        }

        let (graph, records) = self.build_graph()?;
        info!(
            "graph has {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        let (subgraph, components) = match Self::reduce(&graph) {
            Ok(reduced) => reduced,
            Err(Error::EmptyGraph) => {
                warn!("no tag in any accepted record, nothing to write");
                return Err(Error::EmptyGraph);
            }
            Err(e) => return Err(e),
        };

        self.outputs.write(&subgraph)?;

        let summary = Summary {
            config: self.config.clone(),
            records,
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            components,
            component_nodes: subgraph.node_count(),
            component_edges: subgraph.edge_count(),
            component_weight: subgraph.total_weight(),
        };
        info!("summary: {}", serde_json::to_string(&summary)?);
        Ok(summary)
    }
}
