//! Weighted directed graph keyed for destination-first traversal.
//!
//! Edges are stored origin → destination in a petgraph [`DiGraph`] whose
//! node `i` is vertex `i`. Centrality needs the distance *to* a vertex from
//! everyone else, so traversal goes through [`LinkGraph::links_into`], the
//! destination's incoming edges.

#![allow(clippy::module_name_repetitions)]

use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use tracing::instrument;

use crate::input::LinkList;

/// Directed graph over vertices `0..N`.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    graph: DiGraph<usize, u32>,
}

impl LinkGraph {
    /// Build the graph from a parsed link list.
    ///
    /// Vertex ids in `links` are trusted to lie in `0..links.vertices`, which
    /// [`crate::input::parse_links`] guarantees.
    #[must_use]
    #[instrument(skip(links), fields(vertices = links.vertices, links = links.links.len()))]
    pub fn from_links(links: &LinkList) -> Self {
        let mut graph = DiGraph::with_capacity(links.vertices, links.links.len());
        for vertex in 0..links.vertices {
            graph.add_node(vertex);
        }
        for link in &links.links {
            graph.add_edge(
                NodeIndex::new(link.origin),
                NodeIndex::new(link.destination),
                link.weight,
            );
        }
        Self { graph }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of directed edges.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Edges ending at `destination`, as `(origin, weight)` pairs.
    ///
    /// Empty for a vertex outside the graph.
    pub fn links_into(&self, destination: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        let node = (destination < self.vertex_count()).then(|| NodeIndex::new(destination));
        node.into_iter().flat_map(move |node| {
            self.graph
                .edges_directed(node, Direction::Incoming)
                .map(move |edge| (self.graph[edge.source()], *edge.weight()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_links;

    fn graph(text: &str) -> LinkGraph {
        LinkGraph::from_links(&parse_links(text).expect("valid input"))
    }

    #[test]
    fn counts_vertices_and_links() {
        let g = graph("4 2\n0 1 3\n2 3 5\n");
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.link_count(), 2);
    }

    #[test]
    fn links_are_keyed_by_destination() {
        let g = graph("3 3\n0 2 4\n1 2 6\n2 0 1\n");
        let mut into_two: Vec<_> = g.links_into(2).collect();
        into_two.sort_unstable();
        assert_eq!(into_two, vec![(0, 4), (1, 6)]);
        assert_eq!(g.links_into(0).collect::<Vec<_>>(), vec![(2, 1)]);
        assert_eq!(g.links_into(1).count(), 0);
    }

    #[test]
    fn unknown_vertex_has_no_links() {
        let g = graph("2 1\n0 1 1\n");
        assert_eq!(g.links_into(7).count(), 0);
    }
}
