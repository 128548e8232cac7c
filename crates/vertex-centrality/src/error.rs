//! Errors surfaced while reading a link list.

/// Convenience alias for results carrying a [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;

/// Input-format violations in the `N M` / `U V W` link format.
///
/// Line numbers are 1-based and refer to the raw input text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input has no `N M` header line.
    #[error("missing header line \"N M\"")]
    MissingHeader,

    /// The header promised more edge lines than the input contains.
    #[error("line {line}: expected edge {expected} of the declared edge count, found end of input")]
    MissingRecord { line: usize, expected: usize },

    /// A line ended before a required field.
    #[error("line {line}: missing field `{field}`")]
    MissingField { line: usize, field: &'static str },

    /// A field is not a non-negative integer.
    #[error("line {line}: field `{field}` is not a valid integer: {token:?}")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        token: String,
    },

    /// An edge endpoint falls outside `0..N`.
    #[error("line {line}: vertex {vertex} is outside the declared range 0..{count}")]
    VertexOutOfRange {
        line: usize,
        vertex: usize,
        count: usize,
    },
}
