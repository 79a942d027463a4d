use core::fmt;

use thiserror::Error;

use crate::api::{Diagnostic, Severity};
use crate::lexer::{Token, TokenKind};
use crate::syntax::Span;

/// Parser error with the location it was detected at.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// The head token cannot continue the current production.
    /// `found` is `None` at end of input.
    #[error("expected {}, found {}", format_expected(.expected), format_found(.found))]
    UnexpectedToken {
        expected: Vec<Expected>,
        found: Option<Token>,
    },

    /// Tokens remain after a complete program.
    #[error("unexpected {found} after the last statement")]
    UnexpectedTrailingToken { found: Token },

    /// Maximum nesting depth exceeded
    #[error("expression nesting exceeds the maximum depth of {max_depth}")]
    MaxDepthExceeded { max_depth: usize },
}

/// One member of the set of tokens a grammar rule would have accepted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Expected {
    Kind(TokenKind),
    Symbol(char),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "{}", kind),
            Expected::Symbol(c) => write!(f, "`{}`", c),
        }
    }
}

fn format_expected(expected: &[Expected]) -> String {
    let names: Vec<String> = expected.iter().map(|e| e.to_string()).collect();
    match names.split_last() {
        None => "nothing".to_string(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

fn format_found(found: &Option<Token>) -> String {
    match found {
        Some(token) => token.to_string(),
        None => "end of input".to_string(),
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match &self.kind {
            ParseErrorKind::UnexpectedToken { found: None, expected } => (
                "P001",
                if expected.contains(&Expected::Symbol(';')) {
                    vec!["every statement must end with `;`".to_string()]
                } else {
                    vec![]
                },
            ),
            ParseErrorKind::UnexpectedToken { .. } => ("P001", vec![]),
            ParseErrorKind::UnexpectedTrailingToken { .. } => (
                "P002",
                vec!["remove the tokens after the last `;`".to_string()],
            ),
            ParseErrorKind::MaxDepthExceeded { .. } => (
                "P003",
                vec!["reduce nesting or simplify the expression".to_string()],
            ),
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: Some(self.span.clone()),
            help,
            code: Some(code.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_expected() {
        assert_eq!(format_expected(&[]), "nothing");
        assert_eq!(format_expected(&[Expected::Symbol(':')]), "`:`");
        assert_eq!(
            format_expected(&[
                Expected::Kind(TokenKind::Number),
                Expected::Kind(TokenKind::String),
                Expected::Symbol('('),
            ]),
            "number, string or `(`"
        );
    }

    #[test]
    fn test_display_end_of_input() {
        let err = ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected: vec![Expected::Symbol(';')],
                found: None,
            },
            Span::at(3),
        );
        assert_eq!(err.to_string(), "expected `;`, found end of input");
        assert_eq!(err.to_diagnostic().code.as_deref(), Some("P001"));
        assert_eq!(err.to_diagnostic().help.len(), 1);
    }
}
