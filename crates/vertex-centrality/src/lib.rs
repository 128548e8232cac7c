#![forbid(unsafe_code)]
//! vertex-centrality library.
//!
//! Computes closeness centrality for every vertex of a weighted directed
//! graph and reports the most central one.
//!
//! ```text
//! stdin "N M / U V W …"
//!        ↓  input::parse_links()
//! LinkList
//!        ↓  graph::LinkGraph::from_links()
//! LinkGraph (petgraph DiGraph, walked through incoming edges)
//!        ↓  closeness::closeness_scores() → closeness::most_central()
//! CentralVertex
//! ```
//!
//! # Conventions
//!
//! - **Errors**: [`ParseError`] for input-format violations.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod closeness;
pub mod error;
pub mod graph;
pub mod input;
pub mod report;

pub use closeness::{
    CentralVertex, closeness, closeness_scores, distances_to, most_central, pick_leader,
};
pub use error::{ParseError, Result};
pub use graph::LinkGraph;
pub use input::{Link, LinkList, parse_links};

/// Parse `text` and return its most central vertex.
///
/// # Errors
///
/// Returns [`ParseError`] if `text` is not a valid edge list.
pub fn solve(text: &str) -> Result<CentralVertex> {
    let links = parse_links(text)?;
    Ok(most_central(&LinkGraph::from_links(&links)))
}
