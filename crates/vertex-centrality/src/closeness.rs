//! Closeness centrality over a weighted directed graph.
//!
//! # Definition
//!
//! For a vertex `v` in a graph of `n` vertices:
//!
//! ```text
//! C(v) = Σ (n - 1) / d(u, v)    over every u ≠ v that can reach v
//! ```
//!
//! where `d(u, v)` is the shortest weighted distance from `u` to `v`.
//! Vertices that cannot reach `v`, or reach it at distance 0 through
//! zero-weight edges, contribute nothing.
//!
//! # Algorithm
//!
//! For each destination, distances *to* it are found with a FIFO work-queue
//! relaxation (Bellman-Ford with a queue, a.k.a. SPFA) walking incoming
//! edges backwards. A vertex is queued at most once at a time; the in-queue
//! set is keyed by the vertex actually pushed or popped. Each destination
//! gets a fresh distance buffer, so nothing leaks between passes.
//!
//! Complexity: `n` relaxation passes, O(n · (V + E)) on typical inputs.
//! Weights are unsigned, so no negative cycles can exist.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::graph::LinkGraph;

/// The winner of [`most_central`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CentralVertex {
    pub vertex: usize,
    pub score: f64,
}

/// Shortest distance from every vertex to `destination`.
///
/// `None` marks a vertex that cannot reach `destination`. The destination
/// itself is at `Some(0)`. Returns all `None` for a destination outside the
/// graph.
#[must_use]
pub fn distances_to(graph: &LinkGraph, destination: usize) -> Vec<Option<u64>> {
    let n = graph.vertex_count();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    if destination >= n {
        return dist;
    }

    let mut queued = FixedBitSet::with_capacity(n);
    let mut todo = VecDeque::new();
    dist[destination] = Some(0);
    todo.push_back(destination);
    queued.insert(destination);

    let mut relaxations = 0_usize;
    while let Some(temp) = todo.pop_front() {
        queued.set(temp, false);
        let Some(here) = dist[temp] else {
            continue;
        };

        for (origin, weight) in graph.links_into(temp) {
            let through = here + u64::from(weight);
            if dist[origin].is_none_or(|known| through < known) {
                dist[origin] = Some(through);
                relaxations += 1;
                if !queued.put(origin) {
                    todo.push_back(origin);
                }
            }
        }
    }

    trace!(destination, relaxations, "relaxation converged");
    dist
}

/// Closeness centrality of `destination`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn closeness(graph: &LinkGraph, destination: usize) -> f64 {
    let numerator = graph.vertex_count().saturating_sub(1) as f64;
    distances_to(graph, destination)
        .into_iter()
        .flatten()
        .filter(|&d| d > 0)
        .map(|d| numerator / d as f64)
        .sum()
}

/// Closeness centrality of every vertex, indexed by vertex id.
#[must_use]
#[instrument(skip(graph), fields(vertices = graph.vertex_count(), links = graph.link_count()))]
pub fn closeness_scores(graph: &LinkGraph) -> Vec<f64> {
    (0..graph.vertex_count())
        .map(|v| closeness(graph, v))
        .collect()
}

/// Pick the vertex with the highest closeness.
///
/// Only a strictly greater score replaces the current leader, so ties keep
/// the lowest id. The comparison starts from a score of 0 at vertex 0,
/// which is also the answer when no vertex scores above 0 (edgeless graphs,
/// a single vertex, or no vertices at all).
#[must_use]
pub fn most_central(graph: &LinkGraph) -> CentralVertex {
    pick_leader(&closeness_scores(graph))
}

/// Pick the leader from precomputed [`closeness_scores`], with the same
/// tie and baseline rules as [`most_central`].
#[must_use]
pub fn pick_leader(scores: &[f64]) -> CentralVertex {
    let mut leader = CentralVertex {
        vertex: 0,
        score: 0.0,
    };
    for (vertex, &score) in scores.iter().enumerate() {
        if score > leader.score {
            leader = CentralVertex { vertex, score };
        }
    }
    debug!(vertex = leader.vertex, score = leader.score, "most central vertex");
    leader
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_links;

    fn graph(text: &str) -> LinkGraph {
        LinkGraph::from_links(&parse_links(text).expect("valid input"))
    }

    #[test]
    fn distances_follow_edges_backwards() {
        // 0 → 1 (2), 1 → 2 (3), 0 → 2 (10)
        let g = graph("3 3\n0 1 2\n1 2 3\n0 2 10\n");
        assert_eq!(distances_to(&g, 2), vec![Some(5), Some(3), Some(0)]);
        assert_eq!(distances_to(&g, 0), vec![Some(0), None, None]);
    }

    #[test]
    fn longer_hop_count_can_be_shorter() {
        // Direct 0 → 3 costs 100; 0 → 1 → 2 → 3 costs 3.
        let g = graph("4 4\n0 3 100\n0 1 1\n1 2 1\n2 3 1\n");
        assert_eq!(distances_to(&g, 3)[0], Some(3));
    }

    #[test]
    fn cycles_converge() {
        let g = graph("3 3\n0 1 1\n1 2 1\n2 0 1\n");
        assert_eq!(distances_to(&g, 0), vec![Some(0), Some(2), Some(1)]);
    }

    #[test]
    fn out_of_range_destination_reaches_nothing() {
        let g = graph("2 1\n0 1 1\n");
        assert_eq!(distances_to(&g, 5), vec![None, None]);
    }

    #[test]
    fn closeness_sums_inverse_distances() {
        // n = 3: C(2) = 2/5 + 2/3
        let g = graph("3 3\n0 1 2\n1 2 3\n0 2 10\n");
        let expected = 2.0 / 5.0 + 2.0 / 3.0;
        assert!((closeness(&g, 2) - expected).abs() < 1e-12);
        assert!(closeness(&g, 0).abs() < 1e-12);
    }

    #[test]
    fn zero_distance_vertices_contribute_nothing() {
        let g = graph("3 2\n0 1 0\n2 1 4\n");
        assert!((closeness(&g, 1) - 2.0 / 4.0).abs() < 1e-12);
    }

    #[test]
    fn ties_keep_lowest_vertex() {
        let leader = pick_leader(&[0.0, 1.5, 1.5, 0.2]);
        assert_eq!(leader.vertex, 1);
    }

    #[test]
    fn all_zero_scores_default_to_vertex_zero() {
        assert_eq!(pick_leader(&[0.0, 0.0, 0.0]).vertex, 0);
        assert_eq!(pick_leader(&[]).vertex, 0);
    }

    #[test]
    fn most_central_of_a_chain_is_its_sink() {
        let g = graph("3 2\n0 1 1\n1 2 1\n");
        let winner = most_central(&g);
        assert_eq!(winner.vertex, 2);
        assert!((winner.score - (2.0 + 1.0)).abs() < 1e-12);
    }
}
