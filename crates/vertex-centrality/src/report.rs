//! Output rendering for the centrality winner.

use serde::Serialize;

use crate::closeness::CentralVertex;

/// JSON shape emitted by `vertex-centrality --json`.
#[derive(Debug, Serialize)]
pub struct CentralityReport<'a> {
    pub vertex: usize,
    pub score: f64,
    pub scores: &'a [f64],
}

/// The winning vertex id.
#[must_use]
pub fn render_text(winner: &CentralVertex) -> String {
    winner.vertex.to_string()
}

/// Pretty-printed [`CentralityReport`].
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(winner: &CentralVertex, scores: &[f64]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&CentralityReport {
        vertex: winner.vertex,
        score: winner.score,
        scores,
    })
}
