//! Logical connectives and control operators.

use crate::node::{Expr, Operand};
use crate::op::ExprOp;

fn plain(op: ExprOp, children: Vec<Operand>) -> Expr {
    Expr::build(op, None, Vec::new(), None, children)
}

fn exprs(args: Vec<Expr>) -> Vec<Operand> {
    args.into_iter().map(Operand::Expr).collect()
}

/// Logical AND over boolean expressions.
pub fn and_(args: Vec<Expr>) -> Expr {
    plain(ExprOp::And, exprs(args))
}

/// Logical OR over boolean expressions.
pub fn or_(args: Vec<Expr>) -> Expr {
    plain(ExprOp::Or, exprs(args))
}

/// Logical negation.
pub fn not_(expr: Expr) -> Expr {
    plain(ExprOp::Not, vec![expr.into()])
}

/// True when exactly zero or one of the arguments is true.
pub fn exclusive(args: Vec<Expr>) -> Expr {
    plain(ExprOp::Exclusive, exprs(args))
}

/// Evaluate to unknown; terminates a `cond` branch that cannot produce a
/// usable value.
pub fn unknown() -> Expr {
    plain(ExprOp::Unknown, Vec::new())
}

/// Conditional chain: `cond(vec![if1, then1, if2, then2, ..., default])`.
///
/// Condition/value pairs are evaluated in order; the trailing argument is
/// the default. Requires at least one pair and the default.
pub fn cond(args: Vec<Operand>) -> Expr {
    plain(ExprOp::Cond, args)
}

/// Reference a variable bound by [`let_`].
pub fn var(name: &str) -> Expr {
    plain(ExprOp::Var, vec![name.into()])
}

/// Bind variables for a scope: `let_(vec![def1, def2, ..., body])`.
///
/// Every argument but the last must be a [`def_`]; the last is the
/// expression evaluated with the bindings in scope.
pub fn let_(args: Vec<Expr>) -> Expr {
    plain(ExprOp::Let, exprs(args))
}

/// One variable binding inside a [`let_`].
pub fn def_(name: &str, value: impl Into<Operand>) -> Expr {
    plain(ExprOp::Def, vec![name.into(), value.into()])
}
