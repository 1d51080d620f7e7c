//! List operators.
//!
//! The `bin` argument may itself be the result of another collection
//! expression, which is what allows arbitrary nesting (sort the result of
//! appending to a sub-list reached via a context path). `ctx` descends into
//! nested structure before the operation applies; pass `&[]` to operate on
//! the bin directly.

use sift_wire::CtxStep;

use crate::node::{Expr, Operand};
use crate::op::ExprOp;
use crate::policy::{ListPolicy, Policy};
use crate::rtype::{Rtype, SelectReturn};

fn modify(
    op: ExprOp,
    policy: Option<ListPolicy>,
    ctx: &[CtxStep],
    children: Vec<Operand>,
) -> Expr {
    Expr::build(op, None, ctx.to_vec(), policy.map(Policy::List), children)
}

fn cdt(op: ExprOp, ctx: &[CtxStep], children: Vec<Operand>) -> Expr {
    Expr::build(op, None, ctx.to_vec(), None, children)
}

fn read(op: ExprOp, rt: SelectReturn, ctx: &[CtxStep], children: Vec<Operand>) -> Expr {
    Expr::build(op, Some(Rtype::Select(rt)), ctx.to_vec(), None, children)
}

/// Append a value to the list.
///
/// ```
/// use sift_expr::{list_append, list_bin};
/// let expr = list_append(None, &[], 42, list_bin("xs"));
/// ```
pub fn list_append(
    policy: Option<ListPolicy>,
    ctx: &[CtxStep],
    value: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(ExprOp::ListAppend, policy, ctx, vec![value.into(), bin.into()])
}

/// Append every element of a list value.
pub fn list_append_items(
    policy: Option<ListPolicy>,
    ctx: &[CtxStep],
    items: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::ListAppendItems,
        policy,
        ctx,
        vec![items.into(), bin.into()],
    )
}

/// Insert a value at an index.
pub fn list_insert(
    policy: Option<ListPolicy>,
    ctx: &[CtxStep],
    index: impl Into<Operand>,
    value: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::ListInsert,
        policy,
        ctx,
        vec![index.into(), value.into(), bin.into()],
    )
}

/// Insert every element of a list value at an index.
pub fn list_insert_items(
    policy: Option<ListPolicy>,
    ctx: &[CtxStep],
    index: impl Into<Operand>,
    items: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::ListInsertItems,
        policy,
        ctx,
        vec![index.into(), items.into(), bin.into()],
    )
}

/// Add `delta` to the numeric element at `index`.
pub fn list_increment(
    policy: Option<ListPolicy>,
    ctx: &[CtxStep],
    index: impl Into<Operand>,
    delta: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::ListIncrement,
        policy,
        ctx,
        vec![index.into(), delta.into(), bin.into()],
    )
}

/// Replace the element at `index`.
pub fn list_set(
    policy: Option<ListPolicy>,
    ctx: &[CtxStep],
    index: impl Into<Operand>,
    value: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::ListSet,
        policy,
        ctx,
        vec![index.into(), value.into(), bin.into()],
    )
}

/// Remove every element.
pub fn list_clear(ctx: &[CtxStep], bin: Expr) -> Expr {
    cdt(ExprOp::ListClear, ctx, vec![bin.into()])
}

/// Sort the list with the server's sort flag bits.
pub fn list_sort(ctx: &[CtxStep], sort_flags: i64, bin: Expr) -> Expr {
    cdt(ExprOp::ListSort, ctx, vec![sort_flags.into(), bin.into()])
}

/// Element count.
pub fn list_size(ctx: &[CtxStep], bin: Expr) -> Expr {
    cdt(ExprOp::ListSize, ctx, vec![bin.into()])
}

/// Select elements equal to `value`.
pub fn list_get_by_value(
    rt: SelectReturn,
    ctx: &[CtxStep],
    value: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(ExprOp::ListGetByValue, rt, ctx, vec![value.into(), bin.into()])
}

/// Select elements in `[begin, end)`. Either bound may be
/// `Value::Infinity`.
pub fn list_get_by_value_range(
    rt: SelectReturn,
    ctx: &[CtxStep],
    begin: impl Into<Operand>,
    end: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(
        ExprOp::ListGetByValueRange,
        rt,
        ctx,
        vec![begin.into(), end.into(), bin.into()],
    )
}

/// Select elements equal to any entry of a list value.
pub fn list_get_by_value_list(
    rt: SelectReturn,
    ctx: &[CtxStep],
    values: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(
        ExprOp::ListGetByValueList,
        rt,
        ctx,
        vec![values.into(), bin.into()],
    )
}

/// Select `count` elements starting at `rank` relative to `value`.
pub fn list_get_by_rel_rank_range(
    rt: SelectReturn,
    ctx: &[CtxStep],
    value: impl Into<Operand>,
    rank: impl Into<Operand>,
    count: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(
        ExprOp::ListGetByRelRankRange,
        rt,
        ctx,
        vec![value.into(), rank.into(), count.into(), bin.into()],
    )
}

/// Select the element at `index`.
pub fn list_get_by_index(
    rt: SelectReturn,
    ctx: &[CtxStep],
    index: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(ExprOp::ListGetByIndex, rt, ctx, vec![index.into(), bin.into()])
}

/// Select `count` elements starting at `index`.
pub fn list_get_by_index_range(
    rt: SelectReturn,
    ctx: &[CtxStep],
    index: impl Into<Operand>,
    count: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(
        ExprOp::ListGetByIndexRange,
        rt,
        ctx,
        vec![index.into(), count.into(), bin.into()],
    )
}

/// Select the element at `rank`.
pub fn list_get_by_rank(
    rt: SelectReturn,
    ctx: &[CtxStep],
    rank: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(ExprOp::ListGetByRank, rt, ctx, vec![rank.into(), bin.into()])
}

/// Select `count` elements starting at `rank`.
pub fn list_get_by_rank_range(
    rt: SelectReturn,
    ctx: &[CtxStep],
    rank: impl Into<Operand>,
    count: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(
        ExprOp::ListGetByRankRange,
        rt,
        ctx,
        vec![rank.into(), count.into(), bin.into()],
    )
}

/// Remove elements equal to `value`.
pub fn list_remove_by_value(ctx: &[CtxStep], value: impl Into<Operand>, bin: Expr) -> Expr {
    cdt(ExprOp::ListRemoveByValue, ctx, vec![value.into(), bin.into()])
}

/// Remove elements equal to any entry of a list value.
pub fn list_remove_by_value_list(ctx: &[CtxStep], values: impl Into<Operand>, bin: Expr) -> Expr {
    cdt(
        ExprOp::ListRemoveByValueList,
        ctx,
        vec![values.into(), bin.into()],
    )
}

/// Remove elements in `[begin, end)`.
pub fn list_remove_by_value_range(
    ctx: &[CtxStep],
    begin: impl Into<Operand>,
    end: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    cdt(
        ExprOp::ListRemoveByValueRange,
        ctx,
        vec![begin.into(), end.into(), bin.into()],
    )
}

/// Remove `count` elements starting at `rank` relative to `value`.
pub fn list_remove_by_rel_rank_range(
    ctx: &[CtxStep],
    value: impl Into<Operand>,
    rank: impl Into<Operand>,
    count: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    cdt(
        ExprOp::ListRemoveByRelRankRange,
        ctx,
        vec![value.into(), rank.into(), count.into(), bin.into()],
    )
}

/// Remove the element at `index`.
pub fn list_remove_by_index(ctx: &[CtxStep], index: impl Into<Operand>, bin: Expr) -> Expr {
    cdt(ExprOp::ListRemoveByIndex, ctx, vec![index.into(), bin.into()])
}

/// Remove `count` elements starting at `index`.
pub fn list_remove_by_index_range(
    ctx: &[CtxStep],
    index: impl Into<Operand>,
    count: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    cdt(
        ExprOp::ListRemoveByIndexRange,
        ctx,
        vec![index.into(), count.into(), bin.into()],
    )
}

/// Remove the element at `rank`.
pub fn list_remove_by_rank(ctx: &[CtxStep], rank: impl Into<Operand>, bin: Expr) -> Expr {
    cdt(ExprOp::ListRemoveByRank, ctx, vec![rank.into(), bin.into()])
}

/// Remove `count` elements starting at `rank`.
pub fn list_remove_by_rank_range(
    ctx: &[CtxStep],
    rank: impl Into<Operand>,
    count: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    cdt(
        ExprOp::ListRemoveByRankRange,
        ctx,
        vec![rank.into(), count.into(), bin.into()],
    )
}
