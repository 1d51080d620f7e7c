//! Human-readable dump of a compiled instruction stream.
//!
//! Walks the stream with the catalog the same way the remote evaluator
//! would: fixed arities from the op table, end markers for varargs. One
//! line per operator or literal, indented by tree depth, metadata on the
//! operator's line.

use std::fmt::Write as _;

use sift_wire::{Cell, CellReader, CtxStep, InstructionStream, Value, WireError, tag};

use crate::error::ExprError;
use crate::op::{ExprOp, PolicySlot, RtypeSlot};
use crate::rtype::{ExprType, SelectReturn};

/// Render a compiled stream as an indented operator tree.
pub fn dump(stream: &InstructionStream) -> Result<String, ExprError> {
    let mut out = String::new();
    let mut r = stream.reader();
    while !r.is_at_end() {
        dump_node(&mut r, &mut out, 0)?;
    }
    Ok(out)
}

fn dump_node(r: &mut CellReader<'_>, out: &mut String, depth: usize) -> Result<(), ExprError> {
    let code = match require_cell(r)? {
        Cell::Op(code) => code,
        other => {
            return Err(ExprError::MalformedStream {
                expected: "operator",
                found: other.tag(),
            });
        }
    };
    let op = ExprOp::from_code(code).ok_or(ExprError::UnknownOp(code))?;
    let info = op.info();

    indent(out, depth);
    out.push_str(info.name);

    match info.rtype {
        RtypeSlot::None => {}
        RtypeSlot::Value => {
            let t = ExprType::from_code(require_int(r)?)?;
            write!(out, " type={}", t.as_str()).unwrap();
        }
        RtypeSlot::Select => {
            let s = SelectReturn::from_code(require_int(r)?)?;
            let bang = if s.inverted { "!" } else { "" };
            write!(out, " select={bang}{}", s.base.as_str()).unwrap();
        }
    }

    if info.ctx {
        let steps = r.read_ctx().map_err(ExprError::Wire)?;
        out.push_str(" ctx=[");
        for (i, step) in steps.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            fmt_step(out, step);
        }
        out.push(']');
    }

    match info.policy {
        PolicySlot::None => {}
        PolicySlot::List | PolicySlot::Map => {
            let order = require_int(r)?;
            let flags = require_int(r)?;
            write!(out, " policy=(order={order} flags={flags})").unwrap();
        }
        PolicySlot::Bit | PolicySlot::Hll => {
            let flags = require_int(r)?;
            write!(out, " policy=(flags={flags})").unwrap();
        }
    }
    out.push('\n');

    match info.arity {
        crate::op::Arity::Fixed(n) => {
            for _ in 0..n {
                dump_operand(r, out, depth + 1)?;
            }
        }
        crate::op::Arity::Variadic { .. } => {
            while r.peek_tag() != Some(tag::END) {
                dump_operand(r, out, depth + 1)?;
            }
            require_cell(r)?; // consume the marker
            indent(out, depth + 1);
            out.push_str("end\n");
        }
    }
    Ok(())
}

fn dump_operand(r: &mut CellReader<'_>, out: &mut String, depth: usize) -> Result<(), ExprError> {
    if r.peek_tag() == Some(tag::OP) {
        return dump_node(r, out, depth);
    }
    let value = r.read_value().map_err(ExprError::Wire)?;
    indent(out, depth);
    fmt_value(out, &value);
    out.push('\n');
    Ok(())
}

fn require_cell<'a>(r: &mut CellReader<'a>) -> Result<Cell<'a>, ExprError> {
    match r.next_cell().map_err(ExprError::Wire)? {
        Some(cell) => Ok(cell),
        None => Err(ExprError::Wire(WireError::Truncated(r.position()))),
    }
}

fn require_int(r: &mut CellReader<'_>) -> Result<i64, ExprError> {
    match require_cell(r)? {
        Cell::Int(i) => Ok(i),
        other => Err(ExprError::MalformedStream {
            expected: "int",
            found: other.tag(),
        }),
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn fmt_step(out: &mut String, step: &CtxStep) {
    out.push_str(step.kind.as_str());
    if step.from_end {
        out.push_str("-from-end");
    }
    out.push('(');
    fmt_value(out, &step.operand);
    out.push(')');
}

fn fmt_value(out: &mut String, value: &Value) {
    match value {
        Value::Nil => out.push_str("nil"),
        Value::Bool(b) => write!(out, "{b}").unwrap(),
        Value::Int(i) => write!(out, "{i}").unwrap(),
        Value::Float(f) => write!(out, "{f:?}").unwrap(),
        Value::Str(s) => write!(out, "{s:?}").unwrap(),
        Value::Geo(g) => write!(out, "geo({g:?})").unwrap(),
        Value::Blob(bytes) => {
            out.push_str("blob(");
            for (i, b) in bytes.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write!(out, "{b:02x}").unwrap();
            }
            out.push(')');
        }
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                fmt_value(out, item);
            }
            out.push(']');
        }
        Value::Map(pairs) => {
            out.push('{');
            for (i, (k, v)) in pairs.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                fmt_value(out, k);
                out.push_str(": ");
                fmt_value(out, v);
            }
            out.push('}');
        }
        Value::Infinity => out.push_str("inf"),
        Value::Wildcard => out.push('*'),
    }
}
