//! Wire-level error types.

/// Errors raised while encoding values or decoding a cell stream.
///
/// Encoding failures (`Encoding`, `DuplicateMapKey`) are detected eagerly,
/// before anything reaches the transport. Context-step failures
/// (`CtxOperand`, `CtxFromEnd`) are configuration errors: the step itself is
/// malformed regardless of the value it carries. The remaining variants are
/// produced by [`CellReader`](crate::CellReader) on a malformed stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A literal has no defined wire representation.
    #[error("no wire representation for {0} value")]
    Encoding(&'static str),

    /// A map literal repeats a key.
    #[error("duplicate map key at pair {0}")]
    DuplicateMapKey(usize),

    /// An ordinal context step was given a non-integer operand.
    #[error("{kind} context step requires an integer operand, got {got}")]
    CtxOperand {
        kind: &'static str,
        got: &'static str,
    },

    /// A by-key/by-value context step carried the from-end flag.
    #[error("{kind} context step cannot address from the end")]
    CtxFromEnd { kind: &'static str },

    /// A by-key/by-value context step carried a sentinel operand.
    #[error("{kind} context step operand must be a concrete value, got {got}")]
    CtxSentinel {
        kind: &'static str,
        got: &'static str,
    },

    /// The stream ended inside a cell.
    #[error("unexpected end of stream at byte {0}")]
    Truncated(usize),

    /// An unrecognized cell tag.
    #[error("unknown cell tag 0x{0:02x} at byte {1}")]
    UnknownTag(u8, usize),

    /// An unrecognized context selector byte.
    #[error("unknown context selector 0x{0:02x}")]
    UnknownSelector(u8),

    /// A context step flags byte with undefined bits set.
    #[error("invalid context step flags 0x{0:02x}")]
    InvalidStepFlags(u8),

    /// A structural cell where a literal value was required.
    #[error("expected a value cell, found tag 0x{0:02x}")]
    ExpectedValue(u8),

    /// A cell other than a context header where one was required.
    #[error("expected a context header, found tag 0x{0:02x}")]
    ExpectedCtx(u8),

    /// A string cell holding non-UTF-8 bytes.
    #[error("string cell is not valid utf-8")]
    InvalidUtf8,
}
