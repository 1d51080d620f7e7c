//! Map operators.
//!
//! Same conventions as the list module: `ctx` descends into nested
//! structure first, `bin` may be another collection expression, and range
//! bounds accept `Value::Infinity` / `Value::Wildcard`.

use sift_wire::CtxStep;

use crate::node::{Expr, Operand};
use crate::op::ExprOp;
use crate::policy::{MapPolicy, Policy};
use crate::rtype::{Rtype, SelectReturn};

fn modify(op: ExprOp, policy: Option<MapPolicy>, ctx: &[CtxStep], children: Vec<Operand>) -> Expr {
    Expr::build(op, None, ctx.to_vec(), policy.map(Policy::Map), children)
}

fn cdt(op: ExprOp, ctx: &[CtxStep], children: Vec<Operand>) -> Expr {
    Expr::build(op, None, ctx.to_vec(), None, children)
}

fn read(op: ExprOp, rt: SelectReturn, ctx: &[CtxStep], children: Vec<Operand>) -> Expr {
    Expr::build(op, Some(Rtype::Select(rt)), ctx.to_vec(), None, children)
}

/// Write one key/value entry.
pub fn map_put(
    policy: Option<MapPolicy>,
    ctx: &[CtxStep],
    key: impl Into<Operand>,
    value: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::MapPut,
        policy,
        ctx,
        vec![key.into(), value.into(), bin.into()],
    )
}

/// Write every entry of a map value.
pub fn map_put_items(
    policy: Option<MapPolicy>,
    ctx: &[CtxStep],
    items: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(ExprOp::MapPutItems, policy, ctx, vec![items.into(), bin.into()])
}

/// Add `delta` to the numeric value stored under `key`.
pub fn map_increment(
    policy: Option<MapPolicy>,
    ctx: &[CtxStep],
    key: impl Into<Operand>,
    delta: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::MapIncrement,
        policy,
        ctx,
        vec![key.into(), delta.into(), bin.into()],
    )
}

/// Remove every entry.
pub fn map_clear(ctx: &[CtxStep], bin: Expr) -> Expr {
    cdt(ExprOp::MapClear, ctx, vec![bin.into()])
}

/// Entry count.
pub fn map_size(ctx: &[CtxStep], bin: Expr) -> Expr {
    cdt(ExprOp::MapSize, ctx, vec![bin.into()])
}

/// Select the entry under `key`.
///
/// ```
/// use sift_expr::{eq, map_get_by_key, map_bin, SelectReturn};
/// let expr = eq(
///     map_get_by_key(SelectReturn::VALUE, &[], "score", map_bin("m")),
///     10,
/// );
/// ```
pub fn map_get_by_key(
    rt: SelectReturn,
    ctx: &[CtxStep],
    key: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(ExprOp::MapGetByKey, rt, ctx, vec![key.into(), bin.into()])
}

/// Select entries with keys in `[begin, end)`.
pub fn map_get_by_key_range(
    rt: SelectReturn,
    ctx: &[CtxStep],
    begin: impl Into<Operand>,
    end: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(
        ExprOp::MapGetByKeyRange,
        rt,
        ctx,
        vec![begin.into(), end.into(), bin.into()],
    )
}

/// Select entries whose key equals any entry of a list value.
pub fn map_get_by_key_list(
    rt: SelectReturn,
    ctx: &[CtxStep],
    keys: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(ExprOp::MapGetByKeyList, rt, ctx, vec![keys.into(), bin.into()])
}

/// Select `count` entries starting at `index` relative to `key`.
pub fn map_get_by_key_rel_index_range(
    rt: SelectReturn,
    ctx: &[CtxStep],
    key: impl Into<Operand>,
    index: impl Into<Operand>,
    count: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(
        ExprOp::MapGetByKeyRelIndexRange,
        rt,
        ctx,
        vec![key.into(), index.into(), count.into(), bin.into()],
    )
}

/// Select entries holding `value`.
pub fn map_get_by_value(
    rt: SelectReturn,
    ctx: &[CtxStep],
    value: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(ExprOp::MapGetByValue, rt, ctx, vec![value.into(), bin.into()])
}

/// Select entries with values in `[begin, end)`.
pub fn map_get_by_value_range(
    rt: SelectReturn,
    ctx: &[CtxStep],
    begin: impl Into<Operand>,
    end: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(
        ExprOp::MapGetByValueRange,
        rt,
        ctx,
        vec![begin.into(), end.into(), bin.into()],
    )
}

/// Select entries whose value equals any entry of a list value.
pub fn map_get_by_value_list(
    rt: SelectReturn,
    ctx: &[CtxStep],
    values: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(
        ExprOp::MapGetByValueList,
        rt,
        ctx,
        vec![values.into(), bin.into()],
    )
}

/// Select `count` entries starting at `rank` relative to `value`.
pub fn map_get_by_value_rel_rank_range(
    rt: SelectReturn,
    ctx: &[CtxStep],
    value: impl Into<Operand>,
    rank: impl Into<Operand>,
    count: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(
        ExprOp::MapGetByValueRelRankRange,
        rt,
        ctx,
        vec![value.into(), rank.into(), count.into(), bin.into()],
    )
}

/// Select the entry at `index` in key order.
pub fn map_get_by_index(
    rt: SelectReturn,
    ctx: &[CtxStep],
    index: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(ExprOp::MapGetByIndex, rt, ctx, vec![index.into(), bin.into()])
}

/// Select `count` entries starting at `index` in key order.
pub fn map_get_by_index_range(
    rt: SelectReturn,
    ctx: &[CtxStep],
    index: impl Into<Operand>,
    count: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(
        ExprOp::MapGetByIndexRange,
        rt,
        ctx,
        vec![index.into(), count.into(), bin.into()],
    )
}

/// Select the entry at `rank` in value order.
pub fn map_get_by_rank(
    rt: SelectReturn,
    ctx: &[CtxStep],
    rank: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(ExprOp::MapGetByRank, rt, ctx, vec![rank.into(), bin.into()])
}

/// Select `count` entries starting at `rank` in value order.
pub fn map_get_by_rank_range(
    rt: SelectReturn,
    ctx: &[CtxStep],
    rank: impl Into<Operand>,
    count: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    read(
        ExprOp::MapGetByRankRange,
        rt,
        ctx,
        vec![rank.into(), count.into(), bin.into()],
    )
}

/// Remove the entry under `key`.
pub fn map_remove_by_key(ctx: &[CtxStep], key: impl Into<Operand>, bin: Expr) -> Expr {
    cdt(ExprOp::MapRemoveByKey, ctx, vec![key.into(), bin.into()])
}

/// Remove entries whose key equals any entry of a list value.
pub fn map_remove_by_key_list(ctx: &[CtxStep], keys: impl Into<Operand>, bin: Expr) -> Expr {
    cdt(ExprOp::MapRemoveByKeyList, ctx, vec![keys.into(), bin.into()])
}

/// Remove entries with keys in `[begin, end)`.
pub fn map_remove_by_key_range(
    ctx: &[CtxStep],
    begin: impl Into<Operand>,
    end: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    cdt(
        ExprOp::MapRemoveByKeyRange,
        ctx,
        vec![begin.into(), end.into(), bin.into()],
    )
}

/// Remove `count` entries starting at `index` relative to `key`.
pub fn map_remove_by_key_rel_index_range(
    ctx: &[CtxStep],
    key: impl Into<Operand>,
    index: impl Into<Operand>,
    count: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    cdt(
        ExprOp::MapRemoveByKeyRelIndexRange,
        ctx,
        vec![key.into(), index.into(), count.into(), bin.into()],
    )
}

/// Remove entries holding `value`.
pub fn map_remove_by_value(ctx: &[CtxStep], value: impl Into<Operand>, bin: Expr) -> Expr {
    cdt(ExprOp::MapRemoveByValue, ctx, vec![value.into(), bin.into()])
}

/// Remove entries whose value equals any entry of a list value.
pub fn map_remove_by_value_list(ctx: &[CtxStep], values: impl Into<Operand>, bin: Expr) -> Expr {
    cdt(
        ExprOp::MapRemoveByValueList,
        ctx,
        vec![values.into(), bin.into()],
    )
}

/// Remove entries with values in `[begin, end)`.
pub fn map_remove_by_value_range(
    ctx: &[CtxStep],
    begin: impl Into<Operand>,
    end: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    cdt(
        ExprOp::MapRemoveByValueRange,
        ctx,
        vec![begin.into(), end.into(), bin.into()],
    )
}

/// Remove `count` entries starting at `rank` relative to `value`.
pub fn map_remove_by_value_rel_rank_range(
    ctx: &[CtxStep],
    value: impl Into<Operand>,
    rank: impl Into<Operand>,
    count: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    cdt(
        ExprOp::MapRemoveByValueRelRankRange,
        ctx,
        vec![value.into(), rank.into(), count.into(), bin.into()],
    )
}

/// Remove the entry at `index` in key order.
pub fn map_remove_by_index(ctx: &[CtxStep], index: impl Into<Operand>, bin: Expr) -> Expr {
    cdt(ExprOp::MapRemoveByIndex, ctx, vec![index.into(), bin.into()])
}

/// Remove `count` entries starting at `index` in key order.
pub fn map_remove_by_index_range(
    ctx: &[CtxStep],
    index: impl Into<Operand>,
    count: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    cdt(
        ExprOp::MapRemoveByIndexRange,
        ctx,
        vec![index.into(), count.into(), bin.into()],
    )
}

/// Remove the entry at `rank` in value order.
pub fn map_remove_by_rank(ctx: &[CtxStep], rank: impl Into<Operand>, bin: Expr) -> Expr {
    cdt(ExprOp::MapRemoveByRank, ctx, vec![rank.into(), bin.into()])
}

/// Remove `count` entries starting at `rank` in value order.
pub fn map_remove_by_rank_range(
    ctx: &[CtxStep],
    rank: impl Into<Operand>,
    count: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    cdt(
        ExprOp::MapRemoveByRankRange,
        ctx,
        vec![rank.into(), count.into(), bin.into()],
    )
}
