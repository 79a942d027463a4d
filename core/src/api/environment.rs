//! Name bindings visible to evaluated programs.

use hashbrown::HashMap;

use crate::values::{Function, Value};

/// Flat mapping from identifier to value.
///
/// The evaluator only reads the environment. Identifiers not present in it
/// evaluate to [`Value::Undefined`].
///
/// # Example
///
/// ```
/// use dyadic_core::api::{Environment, evaluate};
/// use dyadic_core::values::{NativeFunction, Value};
///
/// let env = Environment::new()
///     .with("x", Value::Number(40.0))
///     .with_function(NativeFunction::with_arity("inc", 1, |args, _| {
///         Ok(Value::Number(args[0].to_number() + 1.0))
///     }));
///
/// assert_eq!(evaluate("inc(x) + 1;", &env).unwrap(), Value::Number(42.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn register(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.bindings.insert(name.into(), value.into());
    }

    /// Register a host function under its own name.
    pub fn register_function(&mut self, function: impl Function + 'static) {
        let name = function.name().to_string();
        self.bindings.insert(name, Value::function(function));
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.register(name, value);
        self
    }

    /// Builder-style [`register_function`](Self::register_function).
    pub fn with_function(mut self, function: impl Function + 'static) -> Self {
        self.register_function(function);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Environment {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.register(name, value);
        }
    }
}
