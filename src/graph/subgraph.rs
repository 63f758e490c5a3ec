//! Output subgraph: an ordered node list and a weighted edge list over node positions.
use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubgraphEdge {
    source: usize,
    target: usize,
    weight: f64,
}

impl SubgraphEdge {
    /// endpoints are stored lowest position first.
    pub fn new(a: usize, b: usize, weight: f64) -> Self {
        let (source, target) = if a <= b { (a, b) } else { (b, a) };
        Self {
            source,
            target,
            weight,
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Immutable graph ready for serialization.
///
/// Node positions are the indices used by every output format.
/// Edges are sorted by (source, target).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subgraph {
    labels: Vec<String>,
    edges: Vec<SubgraphEdge>,
}

impl Subgraph {
    pub fn new(labels: Vec<String>, mut edges: Vec<SubgraphEdge>) -> Self {
        edges.sort_by(|a, b| (a.source, a.target).cmp(&(b.source, b.target)));
        Self { labels, edges }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn edges(&self) -> &[SubgraphEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        let probe = SubgraphEdge::new(self.position(a)?, self.position(b)?, 0.0);
        self.edges
            .iter()
            .find(|e| e.source == probe.source && e.target == probe.target)
            .map(SubgraphEdge::weight)
    }

    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(SubgraphEdge::weight).sum()
    }

    /// Edge weights keyed by their (lexicographically ordered) label pair.
    fn labelled_edges(&self) -> BTreeMap<(&str, &str), f64> {
        self.edges
            .iter()
            .map(|e| {
                let (a, b) = (
                    self.labels[e.source].as_str(),
                    self.labels[e.target].as_str(),
                );
                let key = if a <= b { (a, b) } else { (b, a) };
                (key, e.weight)
            })
            .collect()
    }

    /// Same node labels and same weighted edges, regardless of node positions.
    pub fn is_equivalent(&self, other: &Subgraph) -> bool {
        let mut labels: Vec<&String> = self.labels.iter().collect();
        let mut other_labels: Vec<&String> = other.labels.iter().collect();
        labels.sort_unstable();
        other_labels.sort_unstable();

        labels == other_labels && self.labelled_edges() == other.labelled_edges()
    }
}
