//! Re-serialization of parsed programs back to source text.
//!
//! The output is fully parenthesized, so it re-parses to a tree that
//! evaluates to the same value even though the grouping nodes differ.

use core::fmt;

use super::ast::{Expr, Program, Statement};

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{};", statement)?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.expressions)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write_number(f, *n),
            Expr::Str(s) => write_string(f, s),
            Expr::Ident(name) => write!(f, "{}", name),
            Expr::Dyadic { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Expr::Conditional {
                cond,
                then_branch,
                else_branch,
            } => write!(f, "({} ? {} : {})", cond, then_branch, else_branch),
            Expr::Call { name, args } => {
                write!(f, "{}(", name)?;
                write_list(f, args)?;
                write!(f, ")")
            }
            Expr::Group(statement) => write!(f, "({})", statement),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, exprs: &[Expr]) -> fmt::Result {
    for (i, expr) in exprs.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", expr)?;
    }
    Ok(())
}

// The lexer only reads unsigned decimal literals, so everything else is
// spelled as arithmetic that produces the same value.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, ".")
    } else if n == 0.0 && n.is_sign_negative() {
        write!(f, "(0 * (0 - 1))")
    } else if n.is_sign_negative() {
        write!(f, "(0 - ")?;
        write_number(f, -n)?;
        write!(f, ")")
    } else if n.is_infinite() {
        write!(f, "(1 / 0)")
    } else {
        write!(f, "{}", n)
    }
}

// There are no escape sequences: a string holding both quote characters is
// split into chunks that each avoid one of them.
fn write_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let chunks = split_quotes(s);
    if chunks.len() == 1 {
        return write_chunk(f, chunks[0]);
    }

    write!(f, "(")?;
    for (i, chunk) in chunks.iter().enumerate() {
        if i > 0 {
            write!(f, " + ")?;
        }
        write_chunk(f, chunk)?;
    }
    write!(f, ")")
}

fn write_chunk(f: &mut fmt::Formatter<'_>, chunk: &str) -> fmt::Result {
    if chunk.contains('\'') {
        write!(f, "\"{}\"", chunk)
    } else {
        write!(f, "'{}'", chunk)
    }
}

fn split_quotes(s: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let (mut single, mut double) = (false, false);

    for (i, ch) in s.char_indices() {
        let closes_chunk = (ch == '\'' && double) || (ch == '"' && single);
        if closes_chunk {
            chunks.push(&s[start..i]);
            start = i;
            single = false;
            double = false;
        }
        single |= ch == '\'';
        double |= ch == '"';
    }
    chunks.push(&s[start..]);
    chunks
}
