//! Runtime values produced by the evaluator and supplied by the host.
//!
//! A [`Value`] is dynamically typed: operators coerce their operands the
//! same way JavaScript does, so `'1' + 2` is `"12"` and `'6' / 2` is `3`.

pub mod function;
pub mod value;


pub use function::{CallError, Callable, Function, NativeFunction};
pub use value::Value;
