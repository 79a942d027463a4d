use std::collections::VecDeque;

use tracing::debug;

use super::ast::{Expr, Program, Statement};
use super::error::{Expected, ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind, TokenValue};
use crate::syntax::{BinaryOp, Span};

/// Default maximum nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 500;

const EXPRESSION_START: &[Expected] = &[
    Expected::Kind(TokenKind::Number),
    Expected::Kind(TokenKind::String),
    Expected::Kind(TokenKind::Identifier),
    Expected::Symbol('('),
];

const ARGUMENT_START: &[Expected] = &[
    Expected::Kind(TokenKind::Number),
    Expected::Kind(TokenKind::String),
    Expected::Kind(TokenKind::Identifier),
    Expected::Symbol('('),
    Expected::Symbol(')'),
];

const AFTER_ARGUMENT: &[Expected] = &[Expected::Symbol(','), Expected::Symbol(')')];

const AFTER_EXPRESSION: &[Expected] = &[
    Expected::Symbol(','),
    Expected::Symbol(';'),
    Expected::Symbol(')'),
];

// Tokens that may legally follow a complete additive operand.
const ADDITIVE_FOLLOW: &[char] = &[';', '?', ':', ')', ','];

const AFTER_ADDITIVE: &[Expected] = &[
    Expected::Symbol('+'),
    Expected::Symbol('-'),
    Expected::Symbol(';'),
    Expected::Symbol('?'),
    Expected::Symbol(':'),
    Expected::Symbol(')'),
    Expected::Symbol(','),
];

const AFTER_MULTIPLICATIVE: &[Expected] = &[
    Expected::Symbol('*'),
    Expected::Symbol('/'),
    Expected::Symbol('+'),
    Expected::Symbol('-'),
    Expected::Symbol(';'),
    Expected::Symbol('?'),
    Expected::Symbol(':'),
    Expected::Symbol(')'),
    Expected::Symbol(','),
];

/// Parse a token sequence into a program with the default depth limit.
pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Result<Program, ParseError> {
    parse_with_max_depth(tokens, DEFAULT_MAX_DEPTH)
}

/// Parse a token sequence into a program with a custom depth limit.
pub fn parse_with_max_depth(
    tokens: impl IntoIterator<Item = Token>,
    max_depth: usize,
) -> Result<Program, ParseError> {
    Parser::new(tokens, max_depth).parse_program()
}

/// Recursive-descent parser over a queue of tokens.
///
/// Every rule checks that the head token can begin (and, after its operand,
/// continue) the production. The first mismatch aborts the whole parse.
pub struct Parser {
    tokens: VecDeque<Token>,
    // Offset reported for errors at end of input.
    end: usize,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    pub fn new(tokens: impl IntoIterator<Item = Token>, max_depth: usize) -> Self {
        let tokens: VecDeque<Token> = tokens.into_iter().collect();
        let end = tokens.back().map_or(0, |t| t.span.0.end);
        Self {
            tokens,
            end,
            depth: 0,
            max_depth,
        }
    }

    /// Parse the whole token queue as a program.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        loop {
            statements.push(self.statement()?);
            self.expect_symbol(';')?;
            if !self.at_expression_start() {
                break;
            }
        }

        if let Some(found) = self.tokens.pop_front() {
            let span = found.span.clone();
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedTrailingToken { found },
                span,
            ));
        }

        debug!(statements = statements.len(), "parsed program");
        Ok(Program { statements })
    }

    fn statement(&mut self) -> Result<Statement, ParseError> {
        let mut expressions = vec![self.expression()?];

        loop {
            if self.at_symbol(',') {
                self.advance();
                expressions.push(self.expression()?);
            } else if self.at_symbol(';') || self.at_symbol(')') {
                break;
            } else {
                return Err(self.unexpected(AFTER_EXPRESSION));
            }
        }

        Ok(Statement { expressions })
    }

    fn expression(&mut self) -> Result<Expr, ParseError> {
        self.nested(|p| {
            p.expect_expression_start()?;
            let cond = p.additive()?;

            if !p.at_symbol('?') {
                return Ok(cond);
            }
            p.advance();

            // Branches are additive, so a ternary can only nest inside parentheses.
            let then_branch = p.additive()?;
            p.expect_symbol(':')?;
            let else_branch = p.additive()?;

            Ok(Expr::conditional(cond, then_branch, else_branch))
        })
    }

    fn additive(&mut self) -> Result<Expr, ParseError> {
        self.nested(|p| {
            p.expect_expression_start()?;
            let left = p.multiplicative()?;

            match p.head_operator() {
                Some(op) if op.is_additive() => {
                    p.advance();
                    let right = p.additive()?;
                    Ok(Expr::dyadic(op, left, right))
                }
                _ if p.at_any(ADDITIVE_FOLLOW) => Ok(left),
                _ => Err(p.unexpected(AFTER_ADDITIVE)),
            }
        })
    }

    fn multiplicative(&mut self) -> Result<Expr, ParseError> {
        self.nested(|p| {
            p.expect_expression_start()?;
            let left = p.primary()?;

            match p.head_operator() {
                Some(op) if !op.is_additive() => {
                    p.advance();
                    let right = p.multiplicative()?;
                    Ok(Expr::dyadic(op, left, right))
                }
                Some(_) => Ok(left),
                None if p.at_any(ADDITIVE_FOLLOW) => Ok(left),
                None => Err(p.unexpected(AFTER_MULTIPLICATIVE)),
            }
        })
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.tokens.pop_front() else {
            return Err(self.unexpected(EXPRESSION_START));
        };

        let Token { kind, value, span } = token;
        match (kind, value) {
            (TokenKind::Number, TokenValue::Number(n)) => Ok(Expr::Number(n)),
            (TokenKind::String, TokenValue::Text(s)) => Ok(Expr::Str(s)),
            (TokenKind::Identifier, TokenValue::Text(name)) => {
                if !self.at_symbol('(') {
                    return Ok(Expr::Ident(name));
                }
                self.advance();
                let args = self.arguments()?;
                self.expect_symbol(')')?;
                Ok(Expr::Call { name, args })
            }
            (TokenKind::Parenthesis, TokenValue::Symbol('(')) => {
                let statement = self.statement()?;
                self.expect_symbol(')')?;
                Ok(Expr::Group(statement))
            }
            (kind, value) => {
                let found = Token {
                    kind,
                    value,
                    span: span.clone(),
                };
                Err(ParseError::new(
                    ParseErrorKind::UnexpectedToken {
                        expected: EXPRESSION_START.to_vec(),
                        found: Some(found),
                    },
                    span,
                ))
            }
        }
    }

    fn arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        if self.at_symbol(')') {
            return Ok(Vec::new());
        }
        if !self.at_expression_start() {
            return Err(self.unexpected(ARGUMENT_START));
        }

        let mut args = vec![self.expression()?];
        loop {
            if self.at_symbol(')') {
                return Ok(args);
            }
            if !self.at_symbol(',') {
                return Err(self.unexpected(AFTER_ARGUMENT));
            }
            self.advance();
            args.push(self.expression()?);
        }
    }

    /// Run `f` one nesting level deeper, failing once the limit is reached.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::new(
                ParseErrorKind::MaxDepthExceeded {
                    max_depth: self.max_depth,
                },
                self.head_span(),
            ));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn advance(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    fn head(&self) -> Option<&Token> {
        self.tokens.front()
    }

    fn head_span(&self) -> Span {
        self.head()
            .map_or_else(|| Span::at(self.end), |t| t.span.clone())
    }

    fn head_operator(&self) -> Option<BinaryOp> {
        match self.head() {
            Some(Token {
                kind: TokenKind::Operator,
                value: TokenValue::Symbol(c),
                ..
            }) => BinaryOp::from_symbol(*c),
            _ => None,
        }
    }

    fn at_symbol(&self, symbol: char) -> bool {
        self.head().is_some_and(|t| t.is_symbol(symbol))
    }

    fn at_any(&self, symbols: &[char]) -> bool {
        symbols.iter().any(|&s| self.at_symbol(s))
    }

    fn at_expression_start(&self) -> bool {
        match self.head() {
            Some(t) => {
                matches!(
                    t.kind,
                    TokenKind::Number | TokenKind::String | TokenKind::Identifier
                ) || t.is_symbol('(')
            }
            None => false,
        }
    }

    fn expect_expression_start(&self) -> Result<(), ParseError> {
        if self.at_expression_start() {
            Ok(())
        } else {
            Err(self.unexpected(EXPRESSION_START))
        }
    }

    fn expect_symbol(&mut self, symbol: char) -> Result<Token, ParseError> {
        if self.at_symbol(symbol) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }
        Err(self.unexpected(&[Expected::Symbol(symbol)]))
    }

    fn unexpected(&self, expected: &[Expected]) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected: expected.to_vec(),
                found: self.head().cloned(),
            },
            self.head_span(),
        )
    }
}
