//! Configuration options for the engine.

use crate::parser::DEFAULT_MAX_DEPTH;

/// Configuration options for parsing.
///
/// # Example
///
/// ```
/// use dyadic_core::api::ParseOptions;
///
/// let options = ParseOptions { max_depth: 100 };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum grammar nesting depth.
    ///
    /// Every expression level, operator and parenthesized group counts
    /// towards the limit.
    ///
    /// Default: 500
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Configuration options for evaluation.
///
/// # Example
///
/// ```
/// use dyadic_core::api::ExecutionOptions;
///
/// let options = ExecutionOptions { max_depth: 200 };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Maximum evaluation stack depth.
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}

/// Configuration options for the engine.
///
/// # Example
///
/// ```
/// use dyadic_core::api::{EngineOptions, ExecutionOptions, ParseOptions};
///
/// let options = EngineOptions {
///     parse_options: ParseOptions::default(),
///     execution_options: ExecutionOptions { max_depth: 200 },
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub parse_options: ParseOptions,
    pub execution_options: ExecutionOptions,
}
