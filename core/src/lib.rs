//! Core of the dyadic expression language: lexer, parser, values and evaluator.
//!
//! The pipeline is strictly layered:
//!
//! - [`lexer`] turns source text into a sequence of [`lexer::Token`]s.
//! - [`parser`] consumes the tokens and builds a [`parser::Program`].
//! - [`evaluator`] walks the tree against a caller-supplied [`api::Environment`].
//!
//! The [`api`] module composes the three stages and is what most callers want.

pub mod api;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod syntax;
pub mod values;
