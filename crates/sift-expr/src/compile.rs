//! Tree-to-stream compiler.
//!
//! One pass over the node tree, bottom-up concatenation into a single
//! growing buffer. Per node the emission order is fixed: operator cell,
//! return-type cell (if the catalog row has the slot), context sub-sequence
//! (ditto), policy cells (ditto), then children left to right, then the
//! end-of-varargs marker for variadic operators. Nothing here writes to the
//! tree; compiling the same tree twice yields byte-identical streams.

use sift_wire::{InstructionStream, StreamWriter};

use crate::error::ExprError;
use crate::node::{Expr, Operand};
use crate::op::{OpInfo, PolicySlot, RtypeSlot};
use crate::policy::Policy;

/// Compile an expression tree into a fresh instruction stream.
///
/// All-or-nothing: any arity, encoding, or context failure anywhere in the
/// tree aborts the whole compile and the partial buffer is discarded with
/// the writer.
pub fn compile(root: &Expr) -> Result<InstructionStream, ExprError> {
    let mut w = StreamWriter::new();
    emit(root, &mut w)?;
    Ok(w.finish())
}

fn emit(expr: &Expr, w: &mut StreamWriter) -> Result<(), ExprError> {
    let info = expr.op().info();
    check_arity(&info, expr.children().len())?;

    w.push_op(expr.op().code());

    match info.rtype {
        RtypeSlot::None => {}
        RtypeSlot::Value | RtypeSlot::Select => {
            let rt = expr
                .rtype()
                .ok_or(ExprError::MissingReturnType { op: info.name })?;
            w.push_int(rt.code());
        }
    }

    if info.ctx {
        w.push_ctx(expr.ctx())?;
    }

    emit_policy(&info, expr.policy(), w)?;

    for child in expr.children() {
        match child {
            Operand::Value(v) => w.push_value(v)?,
            Operand::Expr(e) => emit(e, w)?,
        }
    }

    if info.arity.is_variadic() {
        w.push_end();
    }
    Ok(())
}

fn check_arity(info: &OpInfo, got: usize) -> Result<(), ExprError> {
    if info.arity.accepts(got) {
        Ok(())
    } else {
        Err(ExprError::Arity {
            op: info.name,
            expected: info.arity,
            got,
        })
    }
}

/// Policy cells occupy a fixed position, so the family default is encoded
/// when the caller set none.
fn emit_policy(
    info: &OpInfo,
    policy: Option<Policy>,
    w: &mut StreamWriter,
) -> Result<(), ExprError> {
    match (info.policy, policy) {
        (PolicySlot::None, None) => {}
        (PolicySlot::None, Some(_)) => {
            return Err(ExprError::PolicyMismatch { op: info.name });
        }
        (PolicySlot::List, p) => {
            let p = match p {
                Some(Policy::List(p)) => p,
                None => Default::default(),
                Some(_) => return Err(ExprError::PolicyMismatch { op: info.name }),
            };
            w.push_int(p.order as i64);
            w.push_int(p.flags as i64);
        }
        (PolicySlot::Map, p) => {
            let p = match p {
                Some(Policy::Map(p)) => p,
                None => Default::default(),
                Some(_) => return Err(ExprError::PolicyMismatch { op: info.name }),
            };
            w.push_int(p.order as i64);
            w.push_int(p.flags as i64);
        }
        (PolicySlot::Bit, p) => {
            let p = match p {
                Some(Policy::Bit(p)) => p,
                None => Default::default(),
                Some(_) => return Err(ExprError::PolicyMismatch { op: info.name }),
            };
            w.push_int(p.flags as i64);
        }
        (PolicySlot::Hll, p) => {
            let p = match p {
                Some(Policy::Hll(p)) => p,
                None => Default::default(),
                Some(_) => return Err(ExprError::PolicyMismatch { op: info.name }),
            };
            w.push_int(p.flags as i64);
        }
    }
    Ok(())
}
