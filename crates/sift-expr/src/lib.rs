#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Expression tree model and compiler for sift filter expressions.
//!
//! This crate contains:
//! - `op` - the operator catalog (tags, arity shapes, metadata slots)
//! - `node` - expression nodes (`Expr`, `Operand`)
//! - `ops` - one builder function per catalog entry
//! - `compile` - the tree-to-stream compiler
//! - `dump` - human-readable rendering of compiled streams
//!
//! A caller composes nodes with the builder functions and compiles the root
//! once per request; the resulting [`InstructionStream`] goes to the
//! transport as the request's filter-expression payload.

pub mod compile;
pub mod dump;
pub mod error;
pub mod node;
pub mod op;
pub mod ops;
pub mod policy;
pub mod rtype;

#[cfg(test)]
mod compile_tests;
#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod node_tests;
#[cfg(test)]
mod op_tests;

pub use compile::compile;
pub use dump::dump;
pub use error::ExprError;
pub use node::{Expr, Operand};
pub use op::{Arity, ExprOp, OpInfo, PolicySlot, RtypeSlot};
pub use ops::*;
pub use policy::{
    BitPolicy, HllPolicy, ListOrder, ListPolicy, MapOrder, MapPolicy, Policy, bit_flags,
    hll_flags, list_flags, map_flags,
};
pub use rtype::{ExprType, Rtype, SelectBase, SelectReturn};

// Re-export the wire-level types callers interact with directly.
pub use sift_wire::{CtxKind, CtxStep, InstructionStream, Value, WireError};
