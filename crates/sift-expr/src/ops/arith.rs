//! Arithmetic and integer bitwise operators.
//!
//! All arithmetic operands must resolve to the same numeric type server-side
//! (integer or float); the compiler does not type-check operands, it only
//! guarantees structure.

use crate::node::{Expr, Operand};
use crate::op::ExprOp;

fn plain(op: ExprOp, children: Vec<Operand>) -> Expr {
    Expr::build(op, None, Vec::new(), None, children)
}

/// Sum of all arguments.
///
/// ```
/// use sift_expr::{add, eq, int_bin};
/// // int bin "a" + int bin "b" == 11
/// let expr = eq(
///     add(vec![int_bin("a").into(), int_bin("b").into()]),
///     11,
/// );
/// ```
pub fn add(args: Vec<Operand>) -> Expr {
    plain(ExprOp::Add, args)
}

/// First argument minus the rest. With a single argument the server
/// evaluates the negation; the compiled shape is identical.
pub fn sub(args: Vec<Operand>) -> Expr {
    plain(ExprOp::Sub, args)
}

/// Product of all arguments.
pub fn mul(args: Vec<Operand>) -> Expr {
    plain(ExprOp::Mul, args)
}

/// First argument divided by the product of the rest. With a single
/// argument the server evaluates the reciprocal; the compiled shape is
/// identical.
pub fn div(args: Vec<Operand>) -> Expr {
    plain(ExprOp::Div, args)
}

/// `base` raised to `exponent`. Float arguments only.
pub fn pow(base: impl Into<Operand>, exponent: impl Into<Operand>) -> Expr {
    plain(ExprOp::Pow, vec![base.into(), exponent.into()])
}

/// Logarithm of `num` with base `base`. Float arguments only.
pub fn log(num: impl Into<Operand>, base: impl Into<Operand>) -> Expr {
    plain(ExprOp::Log, vec![num.into(), base.into()])
}

/// Remainder of `numerator` divided by `denominator`. Integer arguments.
pub fn modulo(numerator: impl Into<Operand>, denominator: impl Into<Operand>) -> Expr {
    plain(ExprOp::Mod, vec![numerator.into(), denominator.into()])
}

/// Absolute value.
pub fn abs(value: impl Into<Operand>) -> Expr {
    plain(ExprOp::Abs, vec![value.into()])
}

/// Round a float down to the closest integral value.
pub fn floor(value: impl Into<Operand>) -> Expr {
    plain(ExprOp::Floor, vec![value.into()])
}

/// Round a float up to the closest integral value.
pub fn ceil(value: impl Into<Operand>) -> Expr {
    plain(ExprOp::Ceil, vec![value.into()])
}

/// Convert a float to an integer.
pub fn to_int(value: impl Into<Operand>) -> Expr {
    plain(ExprOp::ToInt, vec![value.into()])
}

/// Convert an integer to a float.
pub fn to_float(value: impl Into<Operand>) -> Expr {
    plain(ExprOp::ToFloat, vec![value.into()])
}

/// Minimum of all arguments.
pub fn min(args: Vec<Operand>) -> Expr {
    plain(ExprOp::Min, args)
}

/// Maximum of all arguments.
pub fn max(args: Vec<Operand>) -> Expr {
    plain(ExprOp::Max, args)
}

// Integer bitwise operators. These work on 64-bit integers directly, unlike
// the `bit_*` family which works on blob bins.

pub fn int_and(args: Vec<Operand>) -> Expr {
    plain(ExprOp::IntAnd, args)
}

pub fn int_or(args: Vec<Operand>) -> Expr {
    plain(ExprOp::IntOr, args)
}

pub fn int_xor(args: Vec<Operand>) -> Expr {
    plain(ExprOp::IntXor, args)
}

pub fn int_not(value: impl Into<Operand>) -> Expr {
    plain(ExprOp::IntNot, vec![value.into()])
}

pub fn int_lshift(value: impl Into<Operand>, shift: impl Into<Operand>) -> Expr {
    plain(ExprOp::IntLshift, vec![value.into(), shift.into()])
}

/// Logical (unsigned) shift right.
pub fn int_rshift(value: impl Into<Operand>, shift: impl Into<Operand>) -> Expr {
    plain(ExprOp::IntRshift, vec![value.into(), shift.into()])
}

/// Arithmetic (sign-preserving) shift right.
pub fn int_arshift(value: impl Into<Operand>, shift: impl Into<Operand>) -> Expr {
    plain(ExprOp::IntArshift, vec![value.into(), shift.into()])
}

/// Count of set bits.
pub fn int_count(value: impl Into<Operand>) -> Expr {
    plain(ExprOp::IntCount, vec![value.into()])
}

/// Index of the first bit equal to `search`, scanning from the left.
pub fn int_lscan(value: impl Into<Operand>, search: impl Into<Operand>) -> Expr {
    plain(ExprOp::IntLscan, vec![value.into(), search.into()])
}

/// Index of the first bit equal to `search`, scanning from the right.
pub fn int_rscan(value: impl Into<Operand>, search: impl Into<Operand>) -> Expr {
    plain(ExprOp::IntRscan, vec![value.into(), search.into()])
}
