/*! Weighted co-occurrence graph.

Nodes are tags, identified by their insertion rank ([NodeId]).
Edges are stored once per unordered pair, under a canonical [EdgeKey] (lowest id first),
which is used both for lookup and creation.
!*/
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::trace;

use crate::config::EdgeWeights;
use crate::tags::TagSet;

pub type NodeId = usize;

/// Canonical unordered pair of distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(NodeId, NodeId);

impl EdgeKey {
    /// returns `None` for self-loops.
    pub fn new(a: NodeId, b: NodeId) -> Option<Self> {
        match a.cmp(&b) {
            Ordering::Less => Some(Self(a, b)),
            Ordering::Greater => Some(Self(b, a)),
            Ordering::Equal => None,
        }
    }

    pub fn low(&self) -> NodeId {
        self.0
    }

    pub fn high(&self) -> NodeId {
        self.1
    }
}

/// Undirected, simple, weighted graph built incrementally from [TagSet]s.
#[derive(Debug, Clone, Default)]
pub struct CooccurrenceGraph {
    weights: EdgeWeights,
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
    edges: HashMap<EdgeKey, f64>,
    // neighbours, in edge creation order
    adjacency: Vec<Vec<NodeId>>,
}

impl CooccurrenceGraph {
    pub fn new(weights: EdgeWeights) -> Self {
        Self {
            weights,
            ..Default::default()
        }
    }

    /// Adds a node if it does not exist yet, returns its id.
    pub fn add_node(&mut self, tag: &str) -> NodeId {
        if let Some(id) = self.index.get(tag) {
            return *id;
        }
        let id = self.labels.len();
        self.labels.push(tag.to_string());
        self.index.insert(tag.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Creates the edge with the default weight, or increments its weight.
    ///
    /// Self-loops are ignored.
    fn add_cooccurrence(&mut self, a: NodeId, b: NodeId) {
        let key = match EdgeKey::new(a, b) {
            Some(key) => key,
            None => return,
        };
        match self.edges.entry(key) {
            Entry::Occupied(mut weight) => *weight.get_mut() += self.weights.weight_increment,
            Entry::Vacant(weight) => {
                weight.insert(self.weights.default_weight);
                self.adjacency[key.low()].push(key.high());
                self.adjacency[key.high()].push(key.low());
            }
        }
    }

    /// Adds the contribution of a single record:
    /// every tag becomes a node, every pair of distinct tags an edge (or an increment).
    pub fn add_record(&mut self, tags: &TagSet) {
        let ids: HashMap<&str, NodeId> = tags
            .tags()
            .iter()
            .map(|tag| (tag.as_str(), self.add_node(tag)))
            .collect();

        for (a, b) in tags.pairs() {
            self.add_cooccurrence(ids[a], ids[b]);
        }
        trace!(
            "record added ({} distinct tags), graph has {} nodes and {} edges",
            tags.distinct().len(),
            self.node_count(),
            self.edge_count()
        );
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// node labels, in insertion order (index is the [NodeId]).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    pub fn node_id(&self, tag: &str) -> Option<NodeId> {
        self.index.get(tag).copied()
    }

    pub fn neighbours(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// edges in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeKey, f64)> + '_ {
        self.edges.iter().map(|(key, weight)| (*key, *weight))
    }

    /// weight of the edge between two tags, if any.
    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        let key = EdgeKey::new(self.node_id(a)?, self.node_id(b)?)?;
        self.edges.get(&key).copied()
    }

    pub fn weights(&self) -> &EdgeWeights {
        &self.weights
    }
}
