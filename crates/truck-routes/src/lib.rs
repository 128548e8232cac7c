#![forbid(unsafe_code)]
//! truck-routes library.
//!
//! Finds, for every city, the tallest truck that can drive there from the
//! factory in city 1 when each two-way road has a height limit.
//!
//! ```text
//! stdin "N M / U V H …"
//!        ↓  input::parse_roads()
//! RoadList
//!        ↓  graph::RoadNetwork::from_roads()
//! RoadNetwork (petgraph UnGraph)
//!        ↓  widest::tallest_trucks()
//! TruckHeights
//!        ↓  report::render_text() / report::render_json()
//! ```
//!
//! # Conventions
//!
//! - **Errors**: [`ParseError`] for input-format violations.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod error;
pub mod graph;
pub mod input;
pub mod report;
pub mod widest;

pub use error::{ParseError, Result};
pub use graph::{FACTORY, RoadNetwork};
pub use input::{Road, RoadList, parse_roads};
pub use widest::{CityHeight, TruckHeights, tallest_trucks};

/// Parse `text` and solve it in one step.
///
/// # Errors
///
/// Returns [`ParseError`] if `text` is not a valid road list.
pub fn solve(text: &str) -> Result<TruckHeights> {
    let roads = parse_roads(text)?;
    Ok(tallest_trucks(&RoadNetwork::from_roads(&roads)))
}
