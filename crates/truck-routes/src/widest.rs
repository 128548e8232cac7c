//! Tallest truck that can reach every city from the factory.
//!
//! # Algorithm
//!
//! A priority-first traversal shaped like Dijkstra, except that a path is
//! worth the *lowest* road height along it and the search keeps the
//! *highest* such value per city (the widest-path / maximin problem).
//!
//! 1. `best[c]` is the best height known for city `c`; `0` means the city
//!    has not been reached yet.
//! 2. A max-heap of `(height, city)` entries is seeded with the factory at
//!    height 0.
//! 3. Popping city `c` offers every road `c — n` of height `h` to `n`
//!    (except when `n` is the factory). The offer is `h` when `c` is
//!    unreached or `h < best[c]`, and `best[c]` otherwise, so the bottleneck
//!    is capped by both the road and the way into `c`. `n` takes the offer
//!    when it is unreached, or when `h > best[n]` and either `c` is the
//!    factory or `best[c] > best[n]`. Each accepted offer pushes `n` again.
//! 4. Stale heap entries (height below the city's current best) are
//!    discarded on pop instead of being removed eagerly.
//!
//! A road of height 0 cannot carry a truck, so offers of 0 are never taken.
//! Every accepted offer strictly raises a city's height, which bounds the
//! number of pushes and guarantees termination.

use std::{cmp::Ordering, collections::BinaryHeap};

use serde::Serialize;
use tracing::{instrument, trace};

use crate::graph::{FACTORY, RoadNetwork};

/// Best truck height per city, as computed by [`tallest_trucks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruckHeights {
    heights: Vec<u32>,
}

/// One city's entry in the final answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CityHeight {
    pub city: usize,
    pub height: u32,
}

impl TruckHeights {
    /// Best height for `city`; `0` for unreachable cities, the factory, or
    /// ids outside the network.
    #[must_use]
    pub fn height(&self, city: usize) -> u32 {
        city.checked_sub(1)
            .and_then(|i| self.heights.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Heights for cities `2..=N` in ascending id order.
    pub fn destinations(&self) -> impl Iterator<Item = CityHeight> + '_ {
        self.heights
            .iter()
            .enumerate()
            .skip(FACTORY)
            .map(|(i, &height)| CityHeight { city: i + 1, height })
    }

    /// Number of destination cities that no truck can reach.
    #[must_use]
    pub fn unreachable_count(&self) -> usize {
        self.destinations().filter(|d| d.height == 0).count()
    }
}

/// Heap entry: a city and the bottleneck height it was pushed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frontier {
    height: u32,
    city: usize,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Tallest first; lower city id wins ties so pops are deterministic.
        self.height
            .cmp(&other.height)
            .then_with(|| other.city.cmp(&self.city))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the tallest truck that can travel from the factory (city 1) to
/// every other city.
///
/// An empty network yields an empty result.
#[must_use]
#[instrument(skip(network), fields(cities = network.city_count(), roads = network.road_count()))]
pub fn tallest_trucks(network: &RoadNetwork) -> TruckHeights {
    let mut best = vec![0_u32; network.city_count()];
    if !network.contains(FACTORY) {
        return TruckHeights { heights: best };
    }

    let mut todo = BinaryHeap::new();
    todo.push(Frontier {
        height: 0,
        city: FACTORY,
    });
    let mut pops = 0_usize;

    while let Some(Frontier { height, city }) = todo.pop() {
        let via = best[city - 1];
        if height < via {
            continue;
        }
        pops += 1;

        for (next, road) in network.roads_from(city) {
            if next == FACTORY {
                continue;
            }
            let current = best[next - 1];
            let offer = if via == 0 || road < via { road } else { via };
            let improves =
                current == 0 || (road > current && (city == FACTORY || via > current));
            if offer == 0 || !improves {
                continue;
            }

            trace!(from = city, to = next, offer, previous = current, "raise");
            best[next - 1] = offer;
            todo.push(Frontier {
                height: offer,
                city: next,
            });
        }
    }

    tracing::debug!(pops, "widest-path traversal finished");
    TruckHeights { heights: best }
}
