//! Expression tree nodes.

use sift_wire::{CtxStep, Value};

use crate::error::ExprError;
use crate::op::{ExprOp, PolicySlot, RtypeSlot};
use crate::policy::Policy;
use crate::rtype::Rtype;

/// One child of an expression node: either a literal or a sub-expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Value(Value),
    Expr(Expr),
}

impl From<Expr> for Operand {
    fn from(e: Expr) -> Self {
        Operand::Expr(e)
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Value(v)
    }
}

// Literal shorthands, mirroring the `Value` conversions.
impl From<bool> for Operand {
    fn from(v: bool) -> Self {
        Operand::Value(v.into())
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Value(v.into())
    }
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Operand::Value(v.into())
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Value(v.into())
    }
}

impl From<&str> for Operand {
    fn from(v: &str) -> Self {
        Operand::Value(v.into())
    }
}

impl From<String> for Operand {
    fn from(v: String) -> Self {
        Operand::Value(v.into())
    }
}

impl From<Vec<u8>> for Operand {
    fn from(v: Vec<u8>) -> Self {
        Operand::Value(v.into())
    }
}

impl From<Vec<Value>> for Operand {
    fn from(v: Vec<Value>) -> Self {
        Operand::Value(v.into())
    }
}

impl From<Vec<(Value, Value)>> for Operand {
    fn from(v: Vec<(Value, Value)>) -> Self {
        Operand::Value(v.into())
    }
}

/// One operator application: a tag, its metadata, and its children in
/// semantic order.
///
/// Nodes are immutable after construction and hold no interior mutability,
/// so a shared tree can be compiled from any number of threads concurrently;
/// compilation is a read-only traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    op: ExprOp,
    rtype: Option<Rtype>,
    ctx: Vec<CtxStep>,
    policy: Option<Policy>,
    children: Vec<Operand>,
}

impl Expr {
    /// Generic checked constructor for operators without metadata slots.
    ///
    /// Validates the child count against the catalog eagerly. Operators
    /// carrying return-type, context, or policy slots must go through their
    /// typed builder functions instead.
    pub fn new(op: ExprOp, children: Vec<Operand>) -> Result<Self, ExprError> {
        let info = op.info();
        if info.rtype != RtypeSlot::None || info.ctx || info.policy != PolicySlot::None {
            return Err(ExprError::MetadataRequired { op: info.name });
        }
        if !info.arity.accepts(children.len()) {
            return Err(ExprError::Arity {
                op: info.name,
                expected: info.arity,
                got: children.len(),
            });
        }
        Ok(Self::build(op, None, Vec::new(), None, children))
    }

    /// Internal constructor used by the builder functions, which supply
    /// metadata matching the catalog row. Arity is re-checked at compile.
    pub(crate) fn build(
        op: ExprOp,
        rtype: Option<Rtype>,
        ctx: Vec<CtxStep>,
        policy: Option<Policy>,
        children: Vec<Operand>,
    ) -> Self {
        Self {
            op,
            rtype,
            ctx,
            policy,
            children,
        }
    }

    pub fn op(&self) -> ExprOp {
        self.op
    }

    pub fn rtype(&self) -> Option<Rtype> {
        self.rtype
    }

    pub fn ctx(&self) -> &[CtxStep] {
        &self.ctx
    }

    pub fn policy(&self) -> Option<Policy> {
        self.policy
    }

    pub fn children(&self) -> &[Operand] {
        &self.children
    }

    /// Compile this tree into a fresh instruction stream.
    ///
    /// Convenience for [`compile`](crate::compile::compile); the tree is
    /// untouched and can be compiled again.
    pub fn compile(&self) -> Result<sift_wire::InstructionStream, ExprError> {
        crate::compile::compile(self)
    }
}
