//! Comparison operators.

use crate::node::{Expr, Operand};
use crate::op::ExprOp;

fn plain(op: ExprOp, children: Vec<Operand>) -> Expr {
    Expr::build(op, None, Vec::new(), None, children)
}

/// Equality. Operands of any one type, including lists and maps.
///
/// ```
/// use sift_expr::{eq, int_bin};
/// let expr = eq(int_bin("a"), 11);
/// ```
pub fn eq(left: impl Into<Operand>, right: impl Into<Operand>) -> Expr {
    plain(ExprOp::Eq, vec![left.into(), right.into()])
}

/// Inequality.
pub fn ne(left: impl Into<Operand>, right: impl Into<Operand>) -> Expr {
    plain(ExprOp::Ne, vec![left.into(), right.into()])
}

/// Strictly greater than.
pub fn gt(left: impl Into<Operand>, right: impl Into<Operand>) -> Expr {
    plain(ExprOp::Gt, vec![left.into(), right.into()])
}

/// Greater than or equal.
pub fn ge(left: impl Into<Operand>, right: impl Into<Operand>) -> Expr {
    plain(ExprOp::Ge, vec![left.into(), right.into()])
}

/// Strictly less than.
pub fn lt(left: impl Into<Operand>, right: impl Into<Operand>) -> Expr {
    plain(ExprOp::Lt, vec![left.into(), right.into()])
}

/// Less than or equal.
pub fn le(left: impl Into<Operand>, right: impl Into<Operand>) -> Expr {
    plain(ExprOp::Le, vec![left.into(), right.into()])
}

/// Regex match over a string expression. `flags` are the server's POSIX
/// regcomp flag bits.
pub fn cmp_regex(flags: i64, pattern: &str, target: Expr) -> Expr {
    plain(
        ExprOp::CmpRegex,
        vec![flags.into(), pattern.into(), target.into()],
    )
}

/// Geospatial containment compare between a point and a region (either side
/// may be the bin).
pub fn cmp_geo(left: impl Into<Operand>, right: impl Into<Operand>) -> Expr {
    plain(ExprOp::CmpGeo, vec![left.into(), right.into()])
}
