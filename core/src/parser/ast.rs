use crate::syntax::BinaryOp;

/// A complete source program: one or more `;`-terminated statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

/// Comma-joined expressions. Evaluates to the value of the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub expressions: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Str(String),
    Ident(String),
    Dyadic {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Conditional {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Call {
        name: String,
        args: Vec<Expr>,
    },
    /// Parenthesized statement, e.g. `(a, b)`.
    Group(Statement),
}

impl Expr {
    pub fn dyadic(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Dyadic {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn conditional(cond: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::Conditional {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            name: name.into(),
            args,
        }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }
}
