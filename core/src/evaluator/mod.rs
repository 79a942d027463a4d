//! Tree-walking evaluator for parsed programs.
//!
//! The evaluator interprets a [`Program`] against an [`Environment`] and
//! produces a runtime [`Value`].
//!
//! ## Design Principles
//!
//! - **Never panic**: coercion failures produce `NaN` or `undefined` values
//! - **Stack-safe**: depth tracking bounds recursion on hand-built trees
//! - **Left to right**: operands and arguments are evaluated in source order
//!
//! ## Example
//!
//! ```
//! use dyadic_core::api::Environment;
//! use dyadic_core::{evaluator, lexer, parser};
//! use dyadic_core::values::Value;
//!
//! let tokens = lexer::tokenize("x * 2;").unwrap();
//! let program = parser::parse(tokens).unwrap();
//! let env = Environment::new().with("x", 21.0);
//!
//! let result = evaluator::eval(&program, &env).unwrap();
//! assert_eq!(result, Value::Number(42.0));
//! ```

mod error;
mod eval;
mod operators;


pub use error::{EvalError, NotCallableReason};
pub use eval::Evaluator;

use crate::api::{Environment, ExecutionOptions};
use crate::parser::Program;
use crate::values::Value;

/// Evaluate a program with default limits.
///
/// Uses default stack depth limit of 1000.
pub fn eval(program: &Program, env: &Environment) -> Result<Value, EvalError> {
    eval_with_options(program, env, ExecutionOptions::default())
}

/// Evaluate a program with custom limits.
///
/// ## Example
///
/// ```ignore
/// // Allow deeper recursion for generated trees
/// let result = eval_with_options(&program, &env, ExecutionOptions { max_depth: 5000 })?;
/// ```
pub fn eval_with_options(
    program: &Program,
    env: &Environment,
    options: ExecutionOptions,
) -> Result<Value, EvalError> {
    Evaluator::new(options, env).eval_program(program)
}
