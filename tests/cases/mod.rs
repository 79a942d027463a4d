#![allow(dead_code)]

use dyadic::{CallError, Environment, Error, NativeFunction, Value};
use once_cell::sync::Lazy;

/// Environment shared by every case.
///
/// Constants: `x = 5`, `pi = 3.5`, `name = 'world'`, `empty = ''`,
/// `zero = 0`, `digits = '42'`.
/// Functions: `add(a, b)`, `concat(...)`, `len(s)`, `pick(c, a, b)` and
/// `fail(...)`, which always errors.
pub static ENV: Lazy<Environment> = Lazy::new(|| {
    Environment::new()
        .with("x", 5.0)
        .with("pi", 3.5)
        .with("name", "world")
        .with("empty", "")
        .with("zero", 0.0)
        .with("digits", "42")
        .with_function(NativeFunction::with_arity("add", 2, |args, _| {
            Ok(Value::Number(args[0].to_number() + args[1].to_number()))
        }))
        .with_function(NativeFunction::new("concat", |args, _| {
            Ok(Value::Str(args.iter().map(Value::to_text).collect()))
        }))
        .with_function(NativeFunction::with_arity("len", 1, |args, _| {
            Ok(Value::Number(args[0].to_text().chars().count() as f64))
        }))
        .with_function(NativeFunction::with_arity("pick", 3, |args, _| {
            Ok(if args[0].is_truthy() {
                args[1].clone()
            } else {
                args[2].clone()
            })
        }))
        .with_function(NativeFunction::new("fail", |args, _| {
            Err(CallError::new(format!("failed with {} arguments", args.len())))
        }))
});

pub fn run(source: &str) -> Result<Value, Error> {
    dyadic::evaluate(source, &ENV)
}

/// Declares a test evaluating `input` against [`ENV`].
///
/// - `value: v` expects success with `Value::from(v)`
/// - `nan` expects a numeric `NaN` result
/// - `error: pattern` expects an error matching `pattern`, with an optional
///   `if` guard
#[macro_export]
macro_rules! test_case {
    ($name:ident, input: $input:expr, value: $value:expr $(,)?) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(
                $crate::cases::run($input),
                Ok(dyadic::Value::from($value)),
                "input: {:?}",
                $input
            );
        }
    };
    ($name:ident, input: $input:expr, nan $(,)?) => {
        #[test]
        fn $name() {
            let result = $crate::cases::run($input);
            assert!(
                matches!(&result, Ok(dyadic::Value::Number(n)) if n.is_nan()),
                "input: {:?} produced {:?}",
                $input,
                result
            );
        }
    };
    ($name:ident, input: $input:expr, error: $pattern:pat if $guard:expr $(,)?) => {
        #[test]
        fn $name() {
            let result = $crate::cases::run($input);
            assert!(
                matches!(&result, Err($pattern) if $guard),
                "input: {:?} produced {:?}",
                $input,
                result
            );
        }
    };
    ($name:ident, input: $input:expr, error: $pattern:pat $(,)?) => {
        #[test]
        fn $name() {
            let result = $crate::cases::run($input);
            assert!(
                matches!(&result, Err($pattern)),
                "input: {:?} produced {:?}",
                $input,
                result
            );
        }
    };
}
