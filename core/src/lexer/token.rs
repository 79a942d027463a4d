use core::fmt;

use crate::syntax::Span;

/// The kind of a token, without its payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    String,
    Identifier,
    Operator,
    Parenthesis,
    Colon,
    Comma,
    Semicolon,
    QuestionMark,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Operator => "operator",
            TokenKind::Parenthesis => "parenthesis",
            TokenKind::Colon => "colon",
            TokenKind::Comma => "comma",
            TokenKind::Semicolon => "semicolon",
            TokenKind::QuestionMark => "question mark",
        };
        f.write_str(name)
    }
}

/// Payload carried by a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Number(f64),
    /// String contents (without delimiters) or identifier name.
    Text(String),
    /// Operators and punctuation.
    Symbol(char),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    pub fn number(value: f64, span: Span) -> Self {
        Self {
            kind: TokenKind::Number,
            value: TokenValue::Number(value),
            span,
        }
    }

    pub fn string(value: impl Into<String>, span: Span) -> Self {
        Self {
            kind: TokenKind::String,
            value: TokenValue::Text(value.into()),
            span,
        }
    }

    pub fn identifier(name: impl Into<String>, span: Span) -> Self {
        Self {
            kind: TokenKind::Identifier,
            value: TokenValue::Text(name.into()),
            span,
        }
    }

    pub fn symbol(kind: TokenKind, symbol: char, span: Span) -> Self {
        Self {
            kind,
            value: TokenValue::Symbol(symbol),
            span,
        }
    }

    /// True if this is the punctuation or operator token `symbol`.
    pub fn is_symbol(&self, symbol: char) -> bool {
        self.value == TokenValue::Symbol(symbol)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::Number(n) => write!(f, "number `{}`", n),
            TokenValue::Text(s) if self.kind == TokenKind::String => write!(f, "string {:?}", s),
            TokenValue::Text(s) => write!(f, "identifier `{}`", s),
            TokenValue::Symbol(c) => write!(f, "`{}`", c),
        }
    }
}
