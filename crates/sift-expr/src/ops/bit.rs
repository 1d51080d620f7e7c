//! Bit operators over blob bins.
//!
//! Offsets and sizes are in bits unless the name says bytes. The `bin`
//! argument is a blob expression, usually `blob_bin(..)` or the result of
//! another bit operator.

use crate::node::{Expr, Operand};
use crate::op::ExprOp;
use crate::policy::{BitPolicy, Policy};

fn modify(op: ExprOp, policy: Option<BitPolicy>, children: Vec<Operand>) -> Expr {
    Expr::build(op, None, Vec::new(), policy.map(Policy::Bit), children)
}

fn read(op: ExprOp, children: Vec<Operand>) -> Expr {
    Expr::build(op, None, Vec::new(), None, children)
}

/// Resize the blob to `byte_size` bytes.
pub fn bit_resize(policy: Option<BitPolicy>, byte_size: impl Into<Operand>, bin: Expr) -> Expr {
    modify(ExprOp::BitResize, policy, vec![byte_size.into(), bin.into()])
}

/// Insert `value` bytes at `byte_offset`.
pub fn bit_insert(
    policy: Option<BitPolicy>,
    byte_offset: impl Into<Operand>,
    value: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::BitInsert,
        policy,
        vec![byte_offset.into(), value.into(), bin.into()],
    )
}

/// Remove `byte_size` bytes at `byte_offset`.
pub fn bit_remove(
    policy: Option<BitPolicy>,
    byte_offset: impl Into<Operand>,
    byte_size: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::BitRemove,
        policy,
        vec![byte_offset.into(), byte_size.into(), bin.into()],
    )
}

/// Overwrite `bit_size` bits at `bit_offset` with `value` bytes.
pub fn bit_set(
    policy: Option<BitPolicy>,
    bit_offset: impl Into<Operand>,
    bit_size: impl Into<Operand>,
    value: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::BitSet,
        policy,
        vec![bit_offset.into(), bit_size.into(), value.into(), bin.into()],
    )
}

/// Bitwise OR `value` bytes into the range.
pub fn bit_or(
    policy: Option<BitPolicy>,
    bit_offset: impl Into<Operand>,
    bit_size: impl Into<Operand>,
    value: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::BitOr,
        policy,
        vec![bit_offset.into(), bit_size.into(), value.into(), bin.into()],
    )
}

/// Bitwise XOR `value` bytes into the range.
pub fn bit_xor(
    policy: Option<BitPolicy>,
    bit_offset: impl Into<Operand>,
    bit_size: impl Into<Operand>,
    value: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::BitXor,
        policy,
        vec![bit_offset.into(), bit_size.into(), value.into(), bin.into()],
    )
}

/// Bitwise AND `value` bytes into the range.
pub fn bit_and(
    policy: Option<BitPolicy>,
    bit_offset: impl Into<Operand>,
    bit_size: impl Into<Operand>,
    value: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::BitAnd,
        policy,
        vec![bit_offset.into(), bit_size.into(), value.into(), bin.into()],
    )
}

/// Invert the bits in the range.
pub fn bit_not(
    policy: Option<BitPolicy>,
    bit_offset: impl Into<Operand>,
    bit_size: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::BitNot,
        policy,
        vec![bit_offset.into(), bit_size.into(), bin.into()],
    )
}

/// Shift the range left by `shift` bits.
pub fn bit_lshift(
    policy: Option<BitPolicy>,
    bit_offset: impl Into<Operand>,
    bit_size: impl Into<Operand>,
    shift: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::BitLshift,
        policy,
        vec![bit_offset.into(), bit_size.into(), shift.into(), bin.into()],
    )
}

/// Shift the range right by `shift` bits.
pub fn bit_rshift(
    policy: Option<BitPolicy>,
    bit_offset: impl Into<Operand>,
    bit_size: impl Into<Operand>,
    shift: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::BitRshift,
        policy,
        vec![bit_offset.into(), bit_size.into(), shift.into(), bin.into()],
    )
}

/// Add `value` to the range, treated as an unsigned integer.
pub fn bit_add(
    policy: Option<BitPolicy>,
    bit_offset: impl Into<Operand>,
    bit_size: impl Into<Operand>,
    value: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::BitAdd,
        policy,
        vec![bit_offset.into(), bit_size.into(), value.into(), bin.into()],
    )
}

/// Subtract `value` from the range, treated as an unsigned integer.
pub fn bit_subtract(
    policy: Option<BitPolicy>,
    bit_offset: impl Into<Operand>,
    bit_size: impl Into<Operand>,
    value: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::BitSubtract,
        policy,
        vec![bit_offset.into(), bit_size.into(), value.into(), bin.into()],
    )
}

/// Overwrite the range with an integer `value`.
pub fn bit_set_int(
    policy: Option<BitPolicy>,
    bit_offset: impl Into<Operand>,
    bit_size: impl Into<Operand>,
    value: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::BitSetInt,
        policy,
        vec![bit_offset.into(), bit_size.into(), value.into(), bin.into()],
    )
}

/// Read the range as a blob.
pub fn bit_get(bit_offset: impl Into<Operand>, bit_size: impl Into<Operand>, bin: Expr) -> Expr {
    read(
        ExprOp::BitGet,
        vec![bit_offset.into(), bit_size.into(), bin.into()],
    )
}

/// Count of set bits in the range.
pub fn bit_count(bit_offset: impl Into<Operand>, bit_size: impl Into<Operand>, bin: Expr) -> Expr {
    read(
        ExprOp::BitCount,
        vec![bit_offset.into(), bit_size.into(), bin.into()],
    )
}

/// Index of the first bit equal to `search`, scanning the range from the
/// left.
pub fn bit_lscan(
    bit_offset: impl Into<Operand>,
    bit_size: impl Into<Operand>,
    search: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(
        ExprOp::BitLscan,
        vec![bit_offset.into(), bit_size.into(), search.into(), bin.into()],
    )
}

/// Index of the first bit equal to `search`, scanning the range from the
/// right.
pub fn bit_rscan(
    bit_offset: impl Into<Operand>,
    bit_size: impl Into<Operand>,
    search: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(
        ExprOp::BitRscan,
        vec![bit_offset.into(), bit_size.into(), search.into(), bin.into()],
    )
}

/// Read the range as an integer, sign-extended when `signed` is true.
pub fn bit_get_int(
    bit_offset: impl Into<Operand>,
    bit_size: impl Into<Operand>,
    signed: bool,
    bin: Expr,
) -> Expr {
    read(
        ExprOp::BitGetInt,
        vec![bit_offset.into(), bit_size.into(), signed.into(), bin.into()],
    )
}
