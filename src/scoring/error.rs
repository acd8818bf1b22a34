use thiserror::Error;

/// Why a free-text field could not be read as a number.
///
/// Never leaves the scorer: every variant maps to the neutral sub-score.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("value is empty")]
    Empty,

    #[error("not a number: '{value}'")]
    InvalidNumber { value: String },

    #[error("malformed range: '{value}'")]
    InvalidRange { value: String },

    #[error("no digits in '{value}'")]
    NoDigits { value: String },

    #[error("unknown duration unit in '{value}'")]
    UnknownUnit { value: String },
}
