//! The dyadic engine.

use tracing::debug;

use super::{EngineOptions, Environment, Error};
use crate::evaluator::Evaluator;
use crate::lexer;
use crate::parser::{self, Program};
use crate::values::Value;

/// Lexes, parses and evaluates source text with a fixed set of options.
///
/// # Example
///
/// ```
/// use dyadic_core::api::{Engine, EngineOptions, Environment};
/// use dyadic_core::values::{NativeFunction, Value};
///
/// let engine = Engine::new(EngineOptions::default());
/// let env = Environment::new().with_function(NativeFunction::with_arity("add", 2, |args, _| {
///     Ok(Value::Number(args[0].to_number() + args[1].to_number()))
/// }));
///
/// let result = engine.evaluate("add(40, 2);", &env).unwrap();
/// assert_eq!(result, Value::Number(42.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Lex and parse `source` into a program.
    pub fn parse(&self, source: &str) -> Result<Program, Error> {
        let tokens = lexer::tokenize(source)?;
        let program = parser::parse_with_max_depth(tokens, self.options.parse_options.max_depth)?;
        Ok(program)
    }

    /// Lex, parse and evaluate `source` against `env`.
    ///
    /// Nothing is cached: every call starts from the source text.
    pub fn evaluate(&self, source: &str, env: &Environment) -> Result<Value, Error> {
        let program = self.parse(source)?;
        debug!(source_len = source.len(), "evaluating source");
        let mut evaluator = Evaluator::new(self.options.execution_options.clone(), env);
        Ok(evaluator.eval_program(&program)?)
    }

    /// Prepare `source` for repeated evaluation against different
    /// environments.
    ///
    /// The source is not checked until the script runs.
    pub fn script(&self, source: impl Into<String>) -> Script {
        Script {
            engine: self.clone(),
            source: source.into(),
        }
    }
}

/// Source text bound to an engine, evaluated on demand.
///
/// Each [`run`](Script::run) re-lexes and re-parses the source, so errors in
/// it surface on every run.
///
/// # Example
///
/// ```
/// use dyadic_core::api::{Engine, Environment};
/// use dyadic_core::values::Value;
///
/// let script = Engine::default().script("price * qty;");
///
/// let env = Environment::new().with("price", 2.5).with("qty", 4.0);
/// assert_eq!(script.run(&env).unwrap(), Value::Number(10.0));
///
/// let env = Environment::new().with("price", "3").with("qty", 2.0);
/// assert_eq!(script.run(&env).unwrap(), Value::Number(6.0));
/// ```
#[derive(Debug, Clone)]
pub struct Script {
    engine: Engine,
    source: String,
}

impl Script {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn run(&self, env: &Environment) -> Result<Value, Error> {
        self.engine.evaluate(&self.source, env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ExecutionOptions, ParseOptions};
    use crate::evaluator::EvalError;
    use crate::lexer::LexError;
    use crate::parser::ParseErrorKind;

    #[test]
    fn test_parse_reports_lex_errors_first() {
        let engine = Engine::default();
        assert_eq!(
            engine.parse("1 + #;"),
            Err(Error::Lex(LexError::InvalidCharacter {
                ch: '#',
                position: 4
            }))
        );
    }

    #[test]
    fn test_parse_options_are_used() {
        let engine = Engine::new(EngineOptions {
            parse_options: ParseOptions { max_depth: 10 },
            ..Default::default()
        });
        let err = engine.parse("((((((1))))));").unwrap_err();
        match err {
            Error::Parse(e) => {
                assert_eq!(e.kind, ParseErrorKind::MaxDepthExceeded { max_depth: 10 })
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(engine.parse("(1);").is_ok());
    }

    #[test]
    fn test_execution_options_are_used() {
        let engine = Engine::new(EngineOptions {
            execution_options: ExecutionOptions { max_depth: 3 },
            ..Default::default()
        });
        assert_eq!(
            engine.evaluate("1 + 2 * 3 * 4;", &Environment::new()),
            Err(Error::Eval(EvalError::StackOverflow {
                depth: 3,
                max_depth: 3
            }))
        );
        assert_eq!(
            engine.evaluate("1 + 2;", &Environment::new()),
            Ok(Value::Number(3.0))
        );
    }

    #[test]
    fn test_script_is_not_checked_until_run() {
        let script = Engine::default().script("1 +;");
        assert_eq!(script.source(), "1 +;");
        assert!(matches!(script.run(&Environment::new()), Err(Error::Parse(_))));
    }

    #[test]
    fn test_script_sees_each_environment() {
        let script = Engine::default().script("greeting + ', ' + name;");
        let env = Environment::new()
            .with("greeting", "hello")
            .with("name", "world");
        assert_eq!(script.run(&env).unwrap(), Value::from("hello, world"));

        let env = env.with("name", 42.0);
        assert_eq!(script.run(&env).unwrap(), Value::from("hello, 42"));
    }
}
