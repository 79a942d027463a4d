//! Lexical errors.

use thiserror::Error;

use crate::api::{Diagnostic, Severity};
use crate::syntax::Span;

/// Failure to tokenize the source. Positions are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("invalid character {ch:?} at {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("malformed number: unexpected second decimal point at {position}")]
    MalformedNumber { position: usize },

    #[error("unterminated string starting at {position}")]
    UnterminatedString { position: usize },
}

impl LexError {
    pub fn position(&self) -> usize {
        match self {
            LexError::InvalidCharacter { position, .. }
            | LexError::MalformedNumber { position }
            | LexError::UnterminatedString { position } => *position,
        }
    }

    /// Span of the offending input, one character wide.
    pub fn span(&self) -> Span {
        let width = match self {
            LexError::InvalidCharacter { ch, .. } => ch.len_utf8(),
            LexError::MalformedNumber { .. } | LexError::UnterminatedString { .. } => 1,
        };
        Span::new(self.position(), self.position() + width)
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match self {
            LexError::InvalidCharacter { .. } => (
                "L001",
                vec!["characters outside string literals must be part of a token".to_string()],
            ),
            LexError::MalformedNumber { .. } => ("L002", vec![]),
            LexError::UnterminatedString { .. } => (
                "L003",
                vec!["close the string with the same quote it was opened with".to_string()],
            ),
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.to_string(),
            span: Some(self.span()),
            help,
            code: Some(code.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_width() {
        let err = LexError::InvalidCharacter {
            ch: '€',
            position: 2,
        };
        assert_eq!(err.span(), Span::new(2, 5));
        assert_eq!(LexError::MalformedNumber { position: 3 }.span(), Span::new(3, 4));
    }

    #[test]
    fn test_diagnostic_codes() {
        let diagnostic = LexError::UnterminatedString { position: 0 }.to_diagnostic();
        assert_eq!(diagnostic.code.as_deref(), Some("L003"));
        assert_eq!(diagnostic.message, "unterminated string starting at 0");
        assert_eq!(diagnostic.span, Some(Span::new(0, 1)));
        assert_eq!(
            LexError::MalformedNumber { position: 3 }
                .to_diagnostic()
                .code
                .as_deref(),
            Some("L002")
        );
    }
}
