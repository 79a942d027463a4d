//! Runtime evaluation errors.
//!
//! Evaluation is permissive: unbound identifiers become
//! [`Value::Undefined`](crate::values::Value::Undefined) and failed numeric
//! coercions become `NaN`. Only the conditions below abort a run.

use core::fmt;

use thiserror::Error;

use crate::api::{Diagnostic, Severity};
use crate::values::CallError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A call named something that cannot be invoked with its arguments.
    #[error("`{name}` is not callable: {reason}")]
    NotCallable {
        name: String,
        reason: NotCallableReason,
    },

    /// The host function reported an error.
    #[error("call to `{name}` failed: {source}")]
    CallFailed { name: String, source: CallError },

    /// Evaluation recursion depth exceeded.
    #[error("evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}

/// Why a call target was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotCallableReason {
    /// The name is not in the environment.
    Unbound,
    /// The name is bound to a value of another type.
    NotAFunction { found: &'static str },
    /// The function does not accept this many arguments.
    ArityRejected { found: usize },
}

impl fmt::Display for NotCallableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotCallableReason::Unbound => write!(f, "it is not defined"),
            NotCallableReason::NotAFunction { found } => write!(f, "it is a {}", found),
            NotCallableReason::ArityRejected { found: 1 } => {
                write!(f, "it does not accept 1 argument")
            }
            NotCallableReason::ArityRejected { found } => {
                write!(f, "it does not accept {} arguments", found)
            }
        }
    }
}

impl EvalError {
    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match self {
            EvalError::NotCallable {
                reason: NotCallableReason::Unbound,
                name,
            } => ("E001", vec![format!("register `{}` in the environment", name)]),
            EvalError::NotCallable { .. } => ("E001", vec![]),
            EvalError::CallFailed { .. } => ("E002", vec![]),
            EvalError::StackOverflow { .. } => (
                "E003",
                vec!["reduce nesting or raise the execution depth limit".to_string()],
            ),
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.to_string(),
            span: None,
            help,
            code: Some(code.to_string()),
        }
    }
}
