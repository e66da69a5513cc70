//! Conditional-expression pipeline: lexer, parser, evaluator
//!
//! The grammar is deliberately small:
//!
//! ```text
//! expr     := ternary
//! ternary  := equality [ '?' ternary ':' ternary ]
//! equality := primary { ('===' | '!==') primary }
//! primary  := string | number | 'true' | 'false' | identifier | '(' expr ')'
//! ```
//!
//! Identifiers resolve against the value map and nothing else.

mod eval;
mod lexer;
mod parser;

pub use eval::{evaluate, Value};
pub use lexer::{tokenize, SpannedToken, Token};
pub use parser::{parse, Expr};
