//! HyperLogLog operators.
//!
//! Probabilistic cardinality sketches stored in HLL bins. The `bin`
//! argument is an HLL expression, usually `hll_bin(..)` or the result of
//! another HLL operator.

use crate::node::{Expr, Operand};
use crate::op::ExprOp;
use crate::policy::{HllPolicy, Policy};

fn modify(op: ExprOp, policy: Option<HllPolicy>, children: Vec<Operand>) -> Expr {
    Expr::build(op, None, Vec::new(), policy.map(Policy::Hll), children)
}

fn read(op: ExprOp, children: Vec<Operand>) -> Expr {
    Expr::build(op, None, Vec::new(), None, children)
}

/// Create an empty sketch with `index_bit_count` index bits.
pub fn hll_init(policy: Option<HllPolicy>, index_bit_count: impl Into<Operand>, bin: Expr) -> Expr {
    modify(ExprOp::HllInit, policy, vec![index_bit_count.into(), bin.into()])
}

/// Add every element of a list value to the sketch, creating it with
/// `index_bit_count` index bits when absent.
pub fn hll_add(
    policy: Option<HllPolicy>,
    items: impl Into<Operand>,
    index_bit_count: impl Into<Operand>,
    bin: Expr,
) -> Expr {
    modify(
        ExprOp::HllAdd,
        policy,
        vec![items.into(), index_bit_count.into(), bin.into()],
    )
}

/// Estimated cardinality.
pub fn hll_get_count(bin: Expr) -> Expr {
    read(ExprOp::HllGetCount, vec![bin.into()])
}

/// Union of the sketch with every sketch in a list value.
pub fn hll_get_union(hlls: impl Into<Operand>, bin: Expr) -> Expr {
    read(ExprOp::HllGetUnion, vec![hlls.into(), bin.into()])
}

/// Estimated cardinality of the union.
pub fn hll_get_union_count(hlls: impl Into<Operand>, bin: Expr) -> Expr {
    read(ExprOp::HllGetUnionCount, vec![hlls.into(), bin.into()])
}

/// Estimated cardinality of the intersection.
pub fn hll_get_intersect_count(hlls: impl Into<Operand>, bin: Expr) -> Expr {
    read(ExprOp::HllGetIntersectCount, vec![hlls.into(), bin.into()])
}

/// Estimated Jaccard similarity in `[0, 1]`.
pub fn hll_get_similarity(hlls: impl Into<Operand>, bin: Expr) -> Expr {
    read(ExprOp::HllGetSimilarity, vec![hlls.into(), bin.into()])
}

/// The sketch's index and min-hash bit counts as a two-element list.
pub fn hll_describe(bin: Expr) -> Expr {
    read(ExprOp::HllDescribe, vec![bin.into()])
}

/// Whether the sketch may contain every element of a list value.
pub fn hll_may_contain(items: impl Into<Operand>, bin: Expr) -> Expr {
    read(ExprOp::HllMayContain, vec![items.into(), bin.into()])
}
