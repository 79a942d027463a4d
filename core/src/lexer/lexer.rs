use tracing::{debug, trace};

use super::error::LexError;
use super::token::{Token, TokenKind};
use crate::syntax::Span;

/// Tokenize `source` into the complete token sequence.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Single-pass scanner over a source string.
///
/// The cursor only ever moves forward. At each position the character classes
/// are tried in a fixed order: number, string, identifier, operator,
/// parenthesis, colon, comma, semicolon, question mark, whitespace.
pub struct Lexer<'a> {
    source: &'a str,
    position: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            tokens: Vec::new(),
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(ch) = self.peek() {
            if is_number_start(ch) {
                self.read_number()?;
            } else if is_string_start(ch) {
                self.read_string(ch)?;
            } else if is_identifier_start(ch) {
                self.read_identifier();
            } else if let Some(kind) = symbol_kind(ch) {
                self.read_symbol(kind, ch);
            } else if ch.is_whitespace() {
                self.position += ch.len_utf8();
            } else {
                return Err(LexError::InvalidCharacter {
                    ch,
                    position: self.position,
                });
            }
        }

        debug!(tokens = self.tokens.len(), "tokenized source");
        Ok(self.tokens)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn push(&mut self, token: Token) {
        trace!(token = %token, "token");
        self.tokens.push(token);
    }

    fn read_number(&mut self) -> Result<(), LexError> {
        let start = self.position;
        let mut has_decimal_point = false;

        while let Some(ch) = self.peek() {
            match ch {
                '0'..='9' => self.position += 1,
                '.' if has_decimal_point => {
                    return Err(LexError::MalformedNumber {
                        position: self.position,
                    });
                }
                '.' => {
                    has_decimal_point = true;
                    self.position += 1;
                }
                _ => break,
            }
        }

        // A lone "." has no digits and reads as NaN.
        let text = &self.source[start..self.position];
        let value = text.parse::<f64>().unwrap_or(f64::NAN);
        self.push(Token::number(value, Span::new(start, self.position)));
        Ok(())
    }

    fn read_string(&mut self, delimiter: char) -> Result<(), LexError> {
        let start = self.position;
        let content_start = start + delimiter.len_utf8();

        let Some(length) = self.source[content_start..].find(delimiter) else {
            return Err(LexError::UnterminatedString { position: start });
        };

        let content_end = content_start + length;
        self.position = content_end + delimiter.len_utf8();

        let content = &self.source[content_start..content_end];
        self.push(Token::string(content, Span::new(start, self.position)));
        Ok(())
    }

    fn read_identifier(&mut self) {
        let start = self.position;
        // The first character was already classified as an identifier start.
        self.position += 1;

        while let Some(ch) = self.peek() {
            if !is_identifier_continue(ch) {
                break;
            }
            self.position += 1;
        }

        let name = &self.source[start..self.position];
        self.push(Token::identifier(name, Span::new(start, self.position)));
    }

    fn read_symbol(&mut self, kind: TokenKind, symbol: char) {
        let start = self.position;
        self.position += symbol.len_utf8();
        self.push(Token::symbol(kind, symbol, Span::new(start, self.position)));
    }
}

fn is_number_start(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}

fn is_string_start(ch: char) -> bool {
    ch == '\'' || ch == '"'
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

fn symbol_kind(ch: char) -> Option<TokenKind> {
    match ch {
        '+' | '-' | '*' | '/' => Some(TokenKind::Operator),
        '(' | ')' => Some(TokenKind::Parenthesis),
        ':' => Some(TokenKind::Colon),
        ',' => Some(TokenKind::Comma),
        ';' => Some(TokenKind::Semicolon),
        '?' => Some(TokenKind::QuestionMark),
        _ => None,
    }
}
