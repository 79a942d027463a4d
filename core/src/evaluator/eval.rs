//! Core evaluation logic.

use tracing::{debug, trace};

use super::error::{EvalError, NotCallableReason};
use super::operators::eval_dyadic;
use crate::api::{Environment, ExecutionOptions};
use crate::parser::{Expr, Program, Statement};
use crate::values::Value;

/// Tree-walking evaluator over a read-only environment.
pub struct Evaluator<'env> {
    options: ExecutionOptions,
    env: &'env Environment,
    depth: usize,
}

impl<'env> Evaluator<'env> {
    pub fn new(options: ExecutionOptions, env: &'env Environment) -> Self {
        Self {
            options,
            env,
            depth: 0,
        }
    }

    /// Evaluate every statement in order and return the value of the last one.
    pub fn eval_program(&mut self, program: &Program) -> Result<Value, EvalError> {
        debug!(
            statements = program.statements.len(),
            max_depth = self.options.max_depth,
            "evaluating program"
        );

        let mut result = Value::Undefined;
        for statement in &program.statements {
            result = self.eval_statement(statement)?;
        }
        Ok(result)
    }

    /// Evaluate a comma sequence, returning the value of its last expression.
    pub fn eval_statement(&mut self, statement: &Statement) -> Result<Value, EvalError> {
        let mut result = Value::Undefined;
        for expr in &statement.expressions {
            result = self.eval_expr(expr)?;
        }
        Ok(result)
    }

    /// Evaluate an expression node.
    pub fn eval_expr(&mut self, expr: &Expr) -> Result<Value, EvalError> {
        // Check depth before recursing
        if self.depth >= self.options.max_depth {
            return Err(EvalError::StackOverflow {
                depth: self.depth,
                max_depth: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = self.eval_expr_inner(expr);
        self.depth -= 1;

        result
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> Result<Value, EvalError> {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Str(s) => Ok(Value::Str(s.clone())),
            Expr::Ident(name) => Ok(self.env.get(name).cloned().unwrap_or(Value::Undefined)),
            Expr::Dyadic { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Ok(eval_dyadic(*op, &left, &right))
            }
            Expr::Conditional {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_expr(cond)?.is_truthy() {
                    self.eval_expr(then_branch)
                } else {
                    self.eval_expr(else_branch)
                }
            }
            Expr::Call { name, args } => self.eval_call(name, args),
            Expr::Group(statement) => self.eval_statement(statement),
        }
    }

    fn eval_call(&mut self, name: &str, args: &[Expr]) -> Result<Value, EvalError> {
        // Arguments are evaluated before the callee is resolved, so their
        // side effects happen even when the call is then refused.
        let args = args
            .iter()
            .map(|arg| self.eval_expr(arg))
            .collect::<Result<Vec<_>, _>>()?;

        let not_callable = |reason| EvalError::NotCallable {
            name: name.to_string(),
            reason,
        };

        let function = match self.env.get(name) {
            Some(Value::Function(function)) => function,
            Some(other) => {
                return Err(not_callable(NotCallableReason::NotAFunction {
                    found: other.type_name(),
                }));
            }
            None => return Err(not_callable(NotCallableReason::Unbound)),
        };

        if !function.accepts(args.len()) {
            return Err(not_callable(NotCallableReason::ArityRejected {
                found: args.len(),
            }));
        }

        trace!(name, argc = args.len(), "dispatching call");
        function
            .call(&args, self.env)
            .map_err(|source| EvalError::CallFailed {
                name: name.to_string(),
                source,
            })
    }
}
