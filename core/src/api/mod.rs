//! Public API for the dyadic expression language.
//!
//! [`parse`] and [`evaluate`] run the pipeline with default options. An
//! [`Engine`] carries custom [`EngineOptions`] and can hand out [`Script`]s
//! that evaluate the same source against different environments.
//!
//! # Example
//!
//! ```
//! use dyadic_core::api::{Environment, evaluate};
//! use dyadic_core::values::{NativeFunction, Value};
//!
//! let env = Environment::new()
//!     .with("pi", 3.0)
//!     .with_function(NativeFunction::with_arity("double", 1, |args, _| {
//!         Ok(Value::Number(args[0].to_number() * 2.0))
//!     }));
//!
//! assert_eq!(evaluate("double(pi) + 1;", &env).unwrap(), Value::Number(7.0));
//! // There are no comparison operators.
//! assert!(evaluate("pi > 2;", &env).is_err());
//! ```

pub mod engine;
pub mod environment;
pub mod error;
pub mod options;

pub use engine::{Engine, Script};
pub use environment::Environment;
pub use error::{Diagnostic, Error, Severity};
pub use options::{EngineOptions, ExecutionOptions, ParseOptions};

use crate::parser::Program;
use crate::values::Value;

/// Lex and parse `source` with default options.
pub fn parse(source: &str) -> Result<Program, Error> {
    Engine::default().parse(source)
}

/// Lex, parse and evaluate `source` against `env` with default options.
pub fn evaluate(source: &str, env: &Environment) -> Result<Value, Error> {
    Engine::default().evaluate(source, env)
}
