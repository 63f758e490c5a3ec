/*! Connected components and largest component extraction.

Components are enumerated by breadth-first traversals started from each unvisited node,
taken in node insertion order. Neighbours are visited in edge creation order.

The largest component is the one with the most nodes. On ties, the first discovered one
(i.e. the one holding the earliest inserted node) wins, so the result is stable across identical inputs.
!*/
use std::collections::VecDeque;

use log::debug;

use crate::error::Error;

use super::cooccurrence::{CooccurrenceGraph, NodeId};
use super::subgraph::{Subgraph, SubgraphEdge};

/// Largest of the provided components, the first one on ties.
pub fn largest(components: &[Vec<NodeId>]) -> Option<&[NodeId]> {
    // strict comparison keeps the first discovered component on ties.
    components
        .iter()
        .fold(None, |best: Option<&Vec<NodeId>>, c| match best {
            Some(b) if b.len() >= c.len() => Some(b),
            _ => Some(c),
        })
        .map(Vec::as_slice)
}

impl CooccurrenceGraph {
    /// Node sets of every connected component, in discovery order.
    ///
    /// Node ids inside a component are in traversal order.
    pub fn components(&self) -> Vec<Vec<NodeId>> {
        let mut visited = vec![false; self.node_count()];
        let mut components = Vec::new();

        for start in 0..self.node_count() {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            let mut component = vec![start];
            let mut queue = VecDeque::from([start]);

            while let Some(current) = queue.pop_front() {
                for &next in self.neighbours(current) {
                    if !visited[next] {
                        visited[next] = true;
                        component.push(next);
                        queue.push_back(next);
                    }
                }
            }
            components.push(component);
        }
        components
    }

    /// Induced subgraph of the largest connected component.
    ///
    /// Fails with [Error::EmptyGraph] if there is no node at all.
    pub fn largest_component(&self) -> Result<Subgraph, Error> {
        self.largest_component_with_count()
            .map(|(subgraph, _)| subgraph)
    }

    /// Same as [CooccurrenceGraph::largest_component], along with the total number of components.
    pub fn largest_component_with_count(&self) -> Result<(Subgraph, usize), Error> {
        let components = self.components();
        let largest = largest(&components).ok_or(Error::EmptyGraph)?;

        debug!(
            "{} components, largest has {} nodes",
            components.len(),
            largest.len()
        );

        Ok((self.induced_subgraph(largest), components.len()))
    }

    /// Selected nodes (in insertion order) and every edge having both ends in the selection.
    pub fn induced_subgraph(&self, nodes: &[NodeId]) -> Subgraph {
        let mut selected: Vec<NodeId> = nodes.to_vec();
        selected.sort_unstable();
        selected.dedup();

        // global id -> position in the subgraph
        let mut position = vec![None; self.node_count()];
        for (pos, id) in selected.iter().enumerate() {
            position[*id] = Some(pos);
        }

        let edges = self
            .edges()
            .filter_map(|(key, weight)| {
                let source = position[key.low()]?;
                let target = position[key.high()]?;
                Some(SubgraphEdge::new(source, target, weight))
            })
            .collect();

        let labels = selected
            .iter()
            .map(|id| self.labels()[*id].clone())
            .collect();

        Subgraph::new(labels, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::largest;
    use crate::config::EdgeWeights;
    use crate::error::Error;
    use crate::graph::CooccurrenceGraph;
    use crate::tags::TagSet;

    fn build(records: &[&[&str]]) -> CooccurrenceGraph {
        let mut g = CooccurrenceGraph::new(EdgeWeights::default());
        for record in records {
            g.add_record(&TagSet::new(record.iter()));
        }
        g
    }

    #[test]
    fn empty_graph() {
        let g = CooccurrenceGraph::default();
        assert!(g.components().is_empty());
        assert!(matches!(g.largest_component(), Err(Error::EmptyGraph)));
    }

    #[test]
    fn partition() {
        let g = build(&[&["a", "b"], &["c", "d"], &["e"], &["b", "f"]]);
        let mut components = g.components();
        assert_eq!(components.len(), 3);
        let total: usize = components.iter().map(Vec::len).sum();
        assert_eq!(total, g.node_count());

        components.iter_mut().for_each(|c| c.sort());
        assert_eq!(components[0], vec![0, 1, 5]);
        assert_eq!(components[1], vec![2, 3]);
        assert_eq!(components[2], vec![4]);
    }

    #[test]
    fn scenario() {
        let g = build(&[&["a", "b"], &["b", "c"], &["a", "b"], &["d"]]);
        assert_eq!(g.node_count(), 4);
        let sub = g.largest_component().unwrap();
        assert_eq!(sub.labels(), ["a", "b", "c"]);
        assert_eq!(sub.weight("a", "b"), Some(2.0));
        assert_eq!(sub.weight("b", "c"), Some(1.0));
        assert_eq!(sub.edge_count(), 2);
    }

    #[test]
    fn tie_goes_to_first_discovered() {
        let g = build(&[&["x", "y"], &["p", "q"], &["q", "x"]]);
        // x-y-q-p is a single component
        assert_eq!(g.components().len(), 1);

        let g = build(&[&["p", "q"], &["x", "y"]]);
        let sub = g.largest_component().unwrap();
        assert_eq!(sub.labels(), ["p", "q"]);

        let g = build(&[&["lonely"], &["x", "y"], &["p", "q"]]);
        let sub = g.largest_component().unwrap();
        assert_eq!(sub.labels(), ["x", "y"]);
    }

    #[test]
    fn component_count() {
        let g = build(&[&["a", "b"], &["c", "d"], &["e"], &["b", "f"]]);
        let (sub, count) = g.largest_component_with_count().unwrap();
        assert_eq!(count, 3);
        assert_eq!(sub, g.largest_component().unwrap());
        assert_eq!(sub.labels(), ["a", "b", "f"]);

        let g = CooccurrenceGraph::default();
        assert!(matches!(
            g.largest_component_with_count(),
            Err(Error::EmptyGraph)
        ));
    }

    #[test]
    fn largest_of_components() {
        assert_eq!(largest(&[]), None);
        let components = vec![vec![3], vec![0, 1], vec![2, 4]];
        assert_eq!(largest(&components), Some(&[0, 1][..]));
    }

    #[test]
    fn isolated_nodes_only() {
        let g = build(&[&["z"], &["w"]]);
        let sub = g.largest_component().unwrap();
        assert_eq!(sub.labels(), ["z"]);
        assert_eq!(sub.edge_count(), 0);
    }

    #[test]
    fn induced_subgraph_property() {
        let g = build(&[
            &["a", "b", "c"],
            &["c", "d"],
            &["x", "y"],
            &["d", "a", "e"],
        ]);
        let sub = g.largest_component().unwrap();
        assert!(sub.node_count() <= g.node_count());
        assert_eq!(sub.labels(), ["a", "b", "c", "d", "e"]);
        for edge in sub.edges() {
            assert!(edge.source() < sub.node_count());
            assert!(edge.target() < sub.node_count());
        }
        // every graph edge within the selection is kept, only x-y is left out
        let (x, y) = (g.node_id("x").unwrap(), g.node_id("y").unwrap());
        let kept = g
            .edges()
            .filter(|(k, _)| ![x, y].contains(&k.low()) && ![x, y].contains(&k.high()))
            .count();
        assert_eq!(kept, g.edge_count() - 1);
        assert_eq!(sub.edge_count(), kept);
    }
}
