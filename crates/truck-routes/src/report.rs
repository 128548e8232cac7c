//! Output rendering for [`TruckHeights`].

use serde::Serialize;

use crate::{
    graph::FACTORY,
    widest::{CityHeight, TruckHeights},
};

/// JSON shape emitted by `truck-routes --json`.
#[derive(Debug, Serialize)]
pub struct HeightReport {
    pub source: usize,
    pub heights: Vec<CityHeight>,
}

impl From<&TruckHeights> for HeightReport {
    fn from(heights: &TruckHeights) -> Self {
        Self {
            source: FACTORY,
            heights: heights.destinations().collect(),
        }
    }
}

/// Heights for cities `2..=N`, separated by single spaces.
#[must_use]
pub fn render_text(heights: &TruckHeights) -> String {
    heights
        .destinations()
        .map(|d| d.height.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pretty-printed [`HeightReport`].
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(heights: &TruckHeights) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&HeightReport::from(heights))
}
