//! Callable values supplied by the host.
//!
//! The language has no way to define functions, so every callable comes from
//! the environment. Anything implementing [`Function`] can be registered.

use core::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::value::Value;
use crate::api::Environment;

/// Trait for callable values.
pub trait Function: Send + Sync {
    /// Name used in error messages and when the function is printed.
    fn name(&self) -> &str;

    /// Whether the function can be invoked with `argc` arguments.
    ///
    /// The evaluator checks this before calling and reports
    /// [`NotCallable`](crate::evaluator::EvalError::NotCallable) when it
    /// returns `false`.
    fn accepts(&self, argc: usize) -> bool {
        let _ = argc;
        true
    }

    /// Invoke the function with already-evaluated arguments.
    fn call(&self, args: &[Value], env: &Environment) -> Result<Value, CallError>;
}

/// Error reported by a host function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CallError {
    pub message: String,
}

impl CallError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Shared handle to a host function.
///
/// Cloning is cheap. Two handles are equal only if they point at the same
/// function object.
#[derive(Clone)]
pub struct Callable(Arc<dyn Function>);

impl Callable {
    pub fn new(function: impl Function + 'static) -> Self {
        Self(Arc::new(function))
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn accepts(&self, argc: usize) -> bool {
        self.0.accepts(argc)
    }

    pub fn call(&self, args: &[Value], env: &Environment) -> Result<Value, CallError> {
        self.0.call(args, env)
    }

    pub fn ptr_eq(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Arc<dyn Function>> for Callable {
    fn from(function: Arc<dyn Function>) -> Self {
        Self(function)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.name())
    }
}

type NativeFn = dyn Fn(&[Value], &Environment) -> Result<Value, CallError> + Send + Sync;

/// Wrapper for Rust closures.
///
/// # Example
///
/// ```
/// use dyadic_core::values::{NativeFunction, Value};
///
/// let add = NativeFunction::with_arity("add", 2, |args, _env| {
///     Ok(Value::Number(args[0].to_number() + args[1].to_number()))
/// });
/// assert!(!dyadic_core::values::Function::accepts(&add, 3));
/// ```
pub struct NativeFunction {
    name: String,
    arity: Option<usize>,
    func: Box<NativeFn>,
}

impl NativeFunction {
    /// Create a function accepting any number of arguments.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value], &Environment) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity: None,
            func: Box::new(func),
        }
    }

    /// Create a function that only accepts exactly `arity` arguments.
    pub fn with_arity<F>(name: impl Into<String>, arity: usize, func: F) -> Self
    where
        F: Fn(&[Value], &Environment) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity: Some(arity),
            func: Box::new(func),
        }
    }

    pub fn arity(&self) -> Option<usize> {
        self.arity
    }
}

impl Function for NativeFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn accepts(&self, argc: usize) -> bool {
        self.arity.is_none_or(|arity| arity == argc)
    }

    fn call(&self, args: &[Value], env: &Environment) -> Result<Value, CallError> {
        (self.func)(args, env)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
