//! Tokenizer for dyadic source text.
//!
//! The lexer makes a single forward pass over the input and produces the
//! complete token sequence before parsing starts.
//!
//! ```
//! use dyadic_core::lexer::{TokenKind, tokenize};
//!
//! let tokens = tokenize("add(1, 2);").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Identifier);
//! assert_eq!(tokens.len(), 7);
//! ```

mod error;
mod lexer;
mod token;

#[cfg(test)]
mod lexer_test;

pub use error::LexError;
pub use lexer::{Lexer, tokenize};
pub use token::{Token, TokenKind, TokenValue};
