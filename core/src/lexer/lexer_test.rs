use pretty_assertions::assert_eq;

use super::{LexError, Token, TokenKind, TokenValue, tokenize};
use crate::syntax::Span;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap_or_else(|e| panic!("tokenizing {:?} failed: {}", source, e))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn values(source: &str) -> Vec<TokenValue> {
    tokenize(source)
        .unwrap_or_else(|e| panic!("tokenizing {:?} failed: {}", source, e))
        .into_iter()
        .map(|t| t.value)
        .collect()
}

#[test]
fn test_empty_input() {
    assert_eq!(tokenize("").unwrap(), vec![]);
    assert_eq!(tokenize(" \t\n\r ").unwrap(), vec![]);
}

#[test]
fn test_numbers() {
    assert_eq!(
        values("1 42 3.5 0.25 7. .5"),
        vec![
            TokenValue::Number(1.0),
            TokenValue::Number(42.0),
            TokenValue::Number(3.5),
            TokenValue::Number(0.25),
            TokenValue::Number(7.0),
            TokenValue::Number(0.5),
        ]
    );
}

#[test]
fn test_lone_decimal_point_is_nan() {
    let tokens = tokenize(".").unwrap();
    assert_eq!(tokens.len(), 1);
    match tokens[0].value {
        TokenValue::Number(n) => assert!(n.is_nan()),
        ref other => panic!("expected number, got {:?}", other),
    }
}

#[test]
fn test_malformed_number() {
    assert_eq!(
        tokenize("1.2.3;"),
        Err(LexError::MalformedNumber { position: 3 })
    );
    assert_eq!(
        tokenize("x + 10..5"),
        Err(LexError::MalformedNumber { position: 7 })
    );
}

#[test]
fn test_number_stops_at_letter() {
    assert_eq!(
        kinds("12abc"),
        vec![TokenKind::Number, TokenKind::Identifier]
    );
}

#[test]
fn test_strings() {
    assert_eq!(
        values(r#"'abc' "def" '' "it's" 'say "hi"'"#),
        vec![
            TokenValue::Text("abc".to_string()),
            TokenValue::Text("def".to_string()),
            TokenValue::Text("".to_string()),
            TokenValue::Text("it's".to_string()),
            TokenValue::Text("say \"hi\"".to_string()),
        ]
    );
}

#[test]
fn test_strings_have_no_escapes() {
    assert_eq!(
        values(r"'a\n'"),
        vec![TokenValue::Text("a\\n".to_string())]
    );
}

#[test]
fn test_string_with_unicode_content() {
    let tokens = tokenize("'héllo' + 1").unwrap();
    assert_eq!(tokens[0].value, TokenValue::Text("héllo".to_string()));
    assert_eq!(tokens[0].span, Span::new(0, 8));
    assert_eq!(tokens[1].span, Span::new(9, 10));
}

#[test]
fn test_unterminated_string() {
    assert_eq!(
        tokenize("'abc;"),
        Err(LexError::UnterminatedString { position: 0 })
    );
    // The closing delimiter must be the same quote character.
    assert_eq!(
        tokenize(r#"1 + "abc';"#),
        Err(LexError::UnterminatedString { position: 4 })
    );
}

#[test]
fn test_identifiers() {
    assert_eq!(
        values("foo _bar $baz a1_$ X"),
        vec![
            TokenValue::Text("foo".to_string()),
            TokenValue::Text("_bar".to_string()),
            TokenValue::Text("$baz".to_string()),
            TokenValue::Text("a1_$".to_string()),
            TokenValue::Text("X".to_string()),
        ]
    );
}

#[test]
fn test_no_reserved_words() {
    assert_eq!(
        kinds("if then else true"),
        vec![TokenKind::Identifier; 4]
    );
}

#[test]
fn test_punctuation() {
    assert_eq!(
        kinds("+-*/():,;?"),
        vec![
            TokenKind::Operator,
            TokenKind::Operator,
            TokenKind::Operator,
            TokenKind::Operator,
            TokenKind::Parenthesis,
            TokenKind::Parenthesis,
            TokenKind::Colon,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::QuestionMark,
        ]
    );
}

#[test]
fn test_leading_minus_is_separate_token() {
    assert_eq!(
        values("-5"),
        vec![TokenValue::Symbol('-'), TokenValue::Number(5.0)]
    );
}

#[test]
fn test_full_statement() {
    assert_eq!(
        tokenize("add(1, x);").unwrap(),
        vec![
            Token::identifier("add", Span::new(0, 3)),
            Token::symbol(TokenKind::Parenthesis, '(', Span::new(3, 4)),
            Token::number(1.0, Span::new(4, 5)),
            Token::symbol(TokenKind::Comma, ',', Span::new(5, 6)),
            Token::identifier("x", Span::new(7, 8)),
            Token::symbol(TokenKind::Parenthesis, ')', Span::new(8, 9)),
            Token::symbol(TokenKind::Semicolon, ';', Span::new(9, 10)),
        ]
    );
}

#[test]
fn test_invalid_character() {
    assert_eq!(
        tokenize("1 % 2"),
        Err(LexError::InvalidCharacter { ch: '%', position: 2 })
    );
    assert_eq!(
        tokenize("a = 1;"),
        Err(LexError::InvalidCharacter { ch: '=', position: 2 })
    );
}

#[test]
fn test_non_ascii_identifier_is_invalid() {
    assert_eq!(
        tokenize("x + é"),
        Err(LexError::InvalidCharacter { ch: 'é', position: 4 })
    );
    assert_eq!(
        LexError::InvalidCharacter { ch: 'é', position: 4 }.span(),
        Span::new(4, 6)
    );
}

#[test]
fn test_first_error_wins() {
    // The string error comes first in source order.
    assert_eq!(
        tokenize("'abc 1.2.3"),
        Err(LexError::UnterminatedString { position: 0 })
    );
}
