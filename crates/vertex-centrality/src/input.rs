//! Weighted edge list parsing.
//!
//! Header `N M`, then `M` lines `U V W`: a directed edge from origin `U` to
//! destination `V` (both in `0..N`) with non-negative weight `W`.

use std::str::{FromStr, SplitAsciiWhitespace};

use tracing::instrument;

use crate::error::{ParseError, Result};

/// A directed, weighted edge as written in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub origin: usize,
    pub destination: usize,
    pub weight: u32,
}

/// Declared vertex count plus every edge in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkList {
    pub vertices: usize,
    pub links: Vec<Link>,
}

/// Parse the `N M` / `U V W` text format.
///
/// Tokens may be separated by any ASCII whitespace. Tokens past the third
/// field and lines past the `M`th edge are ignored.
///
/// # Errors
///
/// Returns [`ParseError`] on a missing header, a missing or short edge line,
/// a non-integer field, or a vertex id outside `0..N`.
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_links(text: &str) -> Result<LinkList> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let (header_line, header) = lines.next().ok_or(ParseError::MissingHeader)?;
    let mut fields = Fields::new(header_line, header);
    let vertices: usize = fields.next("N")?;
    let link_count: usize = fields.next("M")?;

    let mut links = Vec::new();
    for expected in 1..=link_count {
        let (line_no, line) = lines.next().ok_or(ParseError::MissingRecord {
            line: header_line + expected,
            expected,
        })?;

        let mut fields = Fields::new(line_no, line);
        let origin = fields.vertex("U", vertices)?;
        let destination = fields.vertex("V", vertices)?;
        let weight = fields.next("W")?;
        links.push(Link {
            origin,
            destination,
            weight,
        });
    }

    tracing::debug!(vertices, links = links.len(), "parsed link list");
    Ok(LinkList { vertices, links })
}

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

    fn vertex(&mut self, field: &'static str, count: usize) -> Result<usize> {
        let vertex: usize = self.next(field)?;
        if vertex < count {
            Ok(vertex)
        } else {
            Err(ParseError::VertexOutOfRange {
                line: self.line,
                vertex,
                count,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edges_in_order() {
        let list = parse_links("3 2\n0 1 4\n2 1 9\n").expect("valid input");
        assert_eq!(list.vertices, 3);
        assert_eq!(
            list.links,
            vec![
                Link { origin: 0, destination: 1, weight: 4 },
                Link { origin: 2, destination: 1, weight: 9 },
            ]
        );
    }

    #[test]
    fn trailing_whitespace_is_ignored() {
        let list = parse_links("2 1   \n0 1 3 \t\n").expect("valid input");
        assert_eq!(list.links.len(), 1);
    }

    #[test]
    fn header_only_graph() {
        let list = parse_links("5 0\n").expect("valid input");
        assert_eq!(list.vertices, 5);
        assert!(list.links.is_empty());
    }

    #[test]
    fn empty_input_is_missing_header() {
        assert_eq!(parse_links(""), Err(ParseError::MissingHeader));
    }

    #[test]
    fn blank_edge_line_is_missing_field() {
        assert_eq!(
            parse_links("2 1\n\n0 1 3\n"),
            Err(ParseError::MissingField { line: 2, field: "U" })
        );
    }

    #[test]
    fn missing_weight_is_reported() {
        assert_eq!(
            parse_links("2 1\n0 1\n"),
            Err(ParseError::MissingField { line: 2, field: "W" })
        );
    }

    #[test]
    fn truncated_input_reports_missing_record() {
        assert_eq!(
            parse_links("3 3\n0 1 1\n"),
            Err(ParseError::MissingRecord { line: 3, expected: 2 })
        );
    }

    #[test]
    fn vertex_equal_to_n_is_out_of_range() {
        assert_eq!(
            parse_links("3 1\n0 3 1\n"),
            Err(ParseError::VertexOutOfRange { line: 2, vertex: 3, count: 3 })
        );
    }

    #[test]
    fn non_numeric_vertex_is_rejected() {
        let err = parse_links("3 1\na 1 1\n").expect_err("must fail");
        assert_eq!(
            err.to_string(),
            "line 2: field `U` is not a valid integer: \"a\""
        );
    }
}
