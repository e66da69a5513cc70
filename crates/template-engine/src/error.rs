//! Error types for conditional-expression handling
//!
//! These never escape `render`: a failing expression substitutes the empty
//! string. They exist so the expression pipeline can be exercised and
//! logged precisely.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("Unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("Unterminated string literal at position {0}")]
    UnterminatedString(usize),

    #[error("Unexpected token '{found}' at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Unknown variable: {0}")]
    UnknownVariable(String),
}
