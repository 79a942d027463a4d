//! Recursive-descent parser producing a [`Program`].
//!
//! Grammar, lowest to highest binding power:
//!
//! ```text
//! Program        := Statement ';' (Statement ';')*
//! Statement      := Expression (',' Expression)*
//! Expression     := Additive ('?' Additive ':' Additive)?
//! Additive       := Multiplicative (('+' | '-') Additive)?
//! Multiplicative := Primary (('*' | '/') Multiplicative)?
//! Primary        := Number | String | Identifier ('(' Arguments ')')? | '(' Statement ')'
//! Arguments      := (Expression (',' Expression)*)?
//! ```
//!
//! `Additive` and `Multiplicative` recurse on their right operand, so chains of
//! the same precedence group to the right: `a - b - c` is `a - (b - c)`.

mod ast;
mod display;
mod error;
#[allow(clippy::module_inception)]
mod parser;



pub use crate::syntax::{BinaryOp, Span};
pub use ast::{Expr, Program, Statement};
pub use error::{Expected, ParseError, ParseErrorKind};
pub use parser::{DEFAULT_MAX_DEPTH, Parser, parse, parse_with_max_depth};
