//! Dyadic - a tiny embeddable expression language
//!
//! # Overview
//!
//! Dyadic evaluates `;`-terminated statements built from numbers, strings,
//! identifiers, the four arithmetic operators, a conditional `?:` and calls
//! to host functions. Values are dynamically typed with JavaScript-style
//! coercion.
//!
//! The grammar is deliberately small:
//!
//! - `+ - * /` associate to the right, so `2 - 3 - 4;` is `3`
//! - `,` sequences expressions; a statement is worth its last expression
//! - `( ... )` groups a whole comma sequence
//! - a conditional's branches cannot hold another conditional without
//!   parentheses
//!
//! # Quick Start
//!
//! ```
//! use dyadic::{Environment, NativeFunction, Value, evaluate};
//!
//! let env = Environment::new()
//!     .with("name", "world")
//!     .with_function(NativeFunction::with_arity("add", 2, |args, _| {
//!         Ok(Value::Number(args[0].to_number() + args[1].to_number()))
//!     }));
//!
//! assert_eq!(evaluate("add(1, 2);", &env).unwrap(), Value::Number(3.0));
//! assert_eq!(
//!     evaluate("'hello, ' + name;", &env).unwrap(),
//!     Value::from("hello, world")
//! );
//! ```
//!
//! # Errors
//!
//! Every failure is an [`Error`] naming the stage that stopped the run.
//! [`render_error_to_string`] formats one against its source:
//!
//! ```
//! use dyadic::{Environment, evaluate, render_error_to_string_no_color};
//!
//! let source = "1 +;";
//! let err = evaluate(source, &Environment::new()).unwrap_err();
//! let rendered = render_error_to_string_no_color(source, &err);
//! assert!(rendered.contains("expected number, string, identifier or `(`"));
//! ```

pub mod error_renderer;

// Re-export public API from dyadic_core
pub use dyadic_core::api::{
    Diagnostic, Engine, EngineOptions, Environment, Error, ExecutionOptions, ParseOptions, Script,
    Severity, evaluate, parse,
};

// Re-export commonly used types and values
pub use dyadic_core::parser::{Expr, Program, Statement};
pub use dyadic_core::values::{self, CallError, Callable, Function, NativeFunction, Value};

// Re-export errors
pub use dyadic_core::evaluator::{EvalError, NotCallableReason};
pub use dyadic_core::lexer::LexError;
pub use dyadic_core::parser::{ParseError, ParseErrorKind};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
