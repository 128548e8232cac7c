//! Road list parsing.
//!
//! The input is a header line `N M` followed by `M` lines `U V H`: a
//! two-way road between cities `U` and `V` (both in `1..=N`) whose bridges
//! and tunnels let through trucks up to height `H`.
//!
//! Fields are separated by any run of ASCII whitespace. Extra tokens after
//! the required fields, and lines after the `M`th road, are ignored.

use std::str::{FromStr, SplitAsciiWhitespace};

use tracing::instrument;

use crate::error::{ParseError, Result};

/// One two-way road as written in the input (1-based city ids).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Road {
    pub from: usize,
    pub to: usize,
    pub height: u32,
}

/// A parsed road list: the declared city count plus every road, in input
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoadList {
    pub cities: usize,
    pub roads: Vec<Road>,
}

/// Parse the `N M` / `U V H` text format.
///
/// # Errors
///
/// Returns [`ParseError`] when the header is missing, a road line is missing
/// or short, a field is not an integer, or a city id lies outside `1..=N`.
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_roads(text: &str) -> Result<RoadList> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let (header_line, header) = lines.next().ok_or(ParseError::MissingHeader)?;
    let mut fields = Fields::new(header_line, header);
    let cities: usize = fields.next("N")?;
    let road_count: usize = fields.next("M")?;

    let mut roads = Vec::new();
    for expected in 1..=road_count {
        let Some((line_no, line)) = lines.next() else {
            return Err(ParseError::MissingRecord {
                line: header_line + expected,
                expected,
            });
        };

        let mut fields = Fields::new(line_no, line);
        let from = fields.city("U", cities)?;
        let to = fields.city("V", cities)?;
        let height: u32 = fields.next("H")?;
        roads.push(Road { from, to, height });
    }

    tracing::debug!(cities, roads = roads.len(), "parsed road list");
    Ok(RoadList { cities, roads })
}

/// Whitespace-separated fields of one input line.
struct Fields<'a> {
    line: usize,
    tokens: SplitAsciiWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn new(line: usize, text: &'a str) -> Self {
        Self {
            line,
            tokens: text.split_ascii_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, field: &'static str) -> Result<T> {
        let token = self.tokens.next().ok_or(ParseError::MissingField {
            line: self.line,
            field,
        })?;
        token.parse().map_err(|_| ParseError::InvalidInteger {
            line: self.line,
            field,
            token: token.to_string(),
        })
    }

    fn city(&mut self, field: &'static str, cities: usize) -> Result<usize> {
        let city: usize = self.next(field)?;
        if (1..=cities).contains(&city) {
            Ok(city)
        } else {
            Err(ParseError::CityOutOfRange {
                line: self.line,
                city,
                max: cities,
            })
        }
    }
}
