//! Expression-level error types.

use crate::op::Arity;
use sift_wire::WireError;

/// Errors raised while constructing or compiling an expression tree.
///
/// Everything is detected synchronously at construction or compile time;
/// nothing is deferred to the server round-trip. A tree that compiles
/// successfully is structurally well-formed (the server may still reject it
/// for semantic reasons outside this crate's control).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    /// Child count inconsistent with the operator's declared arity shape.
    #[error("{op} expects {expected} arguments, got {got}")]
    Arity {
        op: &'static str,
        expected: Arity,
        got: usize,
    },

    /// The operator carries metadata slots and cannot be assembled through
    /// the generic constructor.
    #[error("{op} carries metadata and must be built through its typed constructor")]
    MetadataRequired { op: &'static str },

    /// A return-type slot was left unfilled.
    #[error("{op} requires a return-type code")]
    MissingReturnType { op: &'static str },

    /// A policy of the wrong family was attached to the node.
    #[error("{op} was given a write policy of the wrong family")]
    PolicyMismatch { op: &'static str },

    /// An out-of-range return-type code (decoder side).
    #[error("unrecognized return-type code {0}")]
    UnknownReturnType(i64),

    /// An operator code missing from the catalog (decoder side).
    #[error("unknown operator code {0}")]
    UnknownOp(u16),

    /// A structurally impossible cell while walking a stream (decoder side).
    #[error("malformed stream: expected {expected} cell, found tag 0x{found:02x}")]
    MalformedStream { expected: &'static str, found: u8 },

    /// An encoding or context-path failure, propagated unchanged.
    #[error(transparent)]
    Wire(#[from] WireError),
}
