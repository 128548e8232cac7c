//! Undirected road network.
//!
//! Cities are petgraph nodes whose weight is the 1-based city id, so node
//! index `i` is city `i + 1`. Every road is a single undirected edge weighted
//! by its height limit; parallel roads and self-loops are kept as given.
//! The network is built once and never mutated afterwards.

#![allow(clippy::module_name_repetitions)]

use petgraph::{
    graph::{NodeIndex, UnGraph},
    visit::EdgeRef,
};
use tracing::instrument;

use crate::input::RoadList;

/// The city that every truck starts from.
pub const FACTORY: usize = 1;

/// Road network over cities `1..=N`.
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    graph: UnGraph<usize, u32>,
}

impl RoadNetwork {
    /// Build the network from a parsed road list.
    ///
    /// City ids in `roads` are trusted to lie in `1..=roads.cities`, which
    /// [`crate::input::parse_roads`] guarantees.
    #[must_use]
    #[instrument(skip(roads), fields(cities = roads.cities, roads = roads.roads.len()))]
    pub fn from_roads(roads: &RoadList) -> Self {
        let mut graph = UnGraph::with_capacity(roads.cities, roads.roads.len());
        for city in 1..=roads.cities {
            graph.add_node(city);
        }
        for road in &roads.roads {
            graph.add_edge(node_of(road.from), node_of(road.to), road.height);
        }
        Self { graph }
    }

    /// Number of cities.
    #[must_use]
    pub fn city_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of roads, counting parallel roads separately.
    #[must_use]
    pub fn road_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether `city` is one of `1..=N`.
    #[must_use]
    pub fn contains(&self, city: usize) -> bool {
        (1..=self.city_count()).contains(&city)
    }

    /// Roads leaving `city` as `(neighbor, height)` pairs.
    ///
    /// A self-loop yields `city` itself as the neighbor. Returns nothing for
    /// a city outside the network.
    pub fn roads_from(&self, city: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        let node = self.contains(city).then(|| node_of(city));
        node.into_iter().flat_map(move |node| {
            self.graph.edges(node).map(move |edge| {
                let other = if edge.source() == node {
                    edge.target()
                } else {
                    edge.source()
                };
                (self.graph[other], *edge.weight())
            })
        })
    }
}

fn node_of(city: usize) -> NodeIndex {
    NodeIndex::new(city - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_roads;

    fn network(text: &str) -> RoadNetwork {
        RoadNetwork::from_roads(&parse_roads(text).expect("valid input"))
    }

    #[test]
    fn counts_cities_and_roads() {
        let net = network("4 3\n1 2 72\n1 4 96\n2 4 80\n");
        assert_eq!(net.city_count(), 4);
        assert_eq!(net.road_count(), 3);
    }

    #[test]
    fn roads_are_visible_from_both_ends() {
        let net = network("3 1\n2 3 40\n");
        assert_eq!(net.roads_from(2).collect::<Vec<_>>(), vec![(3, 40)]);
        assert_eq!(net.roads_from(3).collect::<Vec<_>>(), vec![(2, 40)]);
        assert_eq!(net.roads_from(1).count(), 0);
    }

    #[test]
    fn parallel_roads_are_kept() {
        let net = network("2 2\n1 2 10\n2 1 30\n");
        let mut heights: Vec<u32> = net.roads_from(1).map(|(_, h)| h).collect();
        heights.sort_unstable();
        assert_eq!(heights, vec![10, 30]);
    }

    #[test]
    fn self_loop_points_back_at_city() {
        let net = network("2 1\n2 2 7\n");
        assert!(net.roads_from(2).all(|(other, h)| other == 2 && h == 7));
    }

    #[test]
    fn unknown_city_has_no_roads() {
        let net = network("2 1\n1 2 7\n");
        assert!(!net.contains(0));
        assert!(!net.contains(3));
        assert_eq!(net.roads_from(3).count(), 0);
    }
}
