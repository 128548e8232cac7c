//! Errors surfaced while reading a road list.

/// Convenience alias for results carrying a [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;

/// Input-format violations in the `N M` / `U V H` road format.
///
/// Line numbers are 1-based and refer to the raw input text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input has no `N M` header line.
    #[error("missing header line \"N M\"")]
    MissingHeader,

    /// The header promised more road lines than the input contains.
    #[error("line {line}: expected road {expected} of the declared road count, found end of input")]
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

    /// A road endpoint falls outside `1..=N`.
    #[error("line {line}: city {city} is outside the declared range 1..={max}")]
    CityOutOfRange { line: usize, city: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::ParseError;

    #[test]
    fn messages_carry_line_numbers() {
        let err = ParseError::InvalidInteger {
            line: 3,
            field: "H",
            token: "tall".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 3: field `H` is not a valid integer: \"tall\""
        );

        let err = ParseError::CityOutOfRange {
            line: 2,
            city: 9,
            max: 4,
        };
        assert!(err.to_string().contains("1..=4"));
    }
}
