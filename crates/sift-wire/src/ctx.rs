//! Context paths: ordered descent steps into nested list/map structure.
//!
//! A path is applied outermost-to-innermost, left to right, before the
//! operation it prefixes. An empty path addresses the bin value directly
//! and encodes as a zero-count header.

use crate::error::WireError;
use crate::stream::StreamWriter;
use crate::value::Value;

/// Selector kind for one descent step.
///
/// Codes 0x1_ select within a list, 0x2_ within a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CtxKind {
    ListIndex = 0x10,
    ListRank = 0x11,
    ListValue = 0x13,
    MapIndex = 0x20,
    MapRank = 0x21,
    MapKey = 0x22,
    MapValue = 0x23,
}

impl CtxKind {
    /// Decode from the wire selector byte.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x10 => Some(Self::ListIndex),
            0x11 => Some(Self::ListRank),
            0x13 => Some(Self::ListValue),
            0x20 => Some(Self::MapIndex),
            0x21 => Some(Self::MapRank),
            0x22 => Some(Self::MapKey),
            0x23 => Some(Self::MapValue),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Selector kind as a display string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListIndex => "list-index",
            Self::ListRank => "list-rank",
            Self::ListValue => "list-value",
            Self::MapIndex => "map-index",
            Self::MapRank => "map-rank",
            Self::MapKey => "map-key",
            Self::MapValue => "map-value",
        }
    }

    /// Whether the operand is an ordinal (index or rank) rather than a
    /// key/value literal.
    pub fn is_ordinal(self) -> bool {
        matches!(
            self,
            Self::ListIndex | Self::ListRank | Self::MapIndex | Self::MapRank
        )
    }
}

/// One descent step: selector kind, from-end polarity, operand.
#[derive(Debug, Clone, PartialEq)]
pub struct CtxStep {
    pub kind: CtxKind,
    /// Count positions from the end instead of the start. Only meaningful
    /// for ordinal selectors.
    pub from_end: bool,
    pub operand: Value,
}

impl CtxStep {
    /// Descend into a list element by index.
    pub fn list_index(index: i64) -> Self {
        Self::ordinal(CtxKind::ListIndex, index)
    }

    /// Descend into a list element by rank.
    pub fn list_rank(rank: i64) -> Self {
        Self::ordinal(CtxKind::ListRank, rank)
    }

    /// Descend into the list element holding a value.
    pub fn list_value(value: impl Into<Value>) -> Self {
        Self::selector(CtxKind::ListValue, value)
    }

    /// Descend into a map entry by index.
    pub fn map_index(index: i64) -> Self {
        Self::ordinal(CtxKind::MapIndex, index)
    }

    /// Descend into a map entry by rank.
    pub fn map_rank(rank: i64) -> Self {
        Self::ordinal(CtxKind::MapRank, rank)
    }

    /// Descend into a map entry by key.
    pub fn map_key(key: impl Into<Value>) -> Self {
        Self::selector(CtxKind::MapKey, key)
    }

    /// Descend into the map entry holding a value.
    pub fn map_value(value: impl Into<Value>) -> Self {
        Self::selector(CtxKind::MapValue, value)
    }

    /// Flip an ordinal step to count from the end.
    pub fn from_end(mut self) -> Self {
        self.from_end = true;
        self
    }

    fn ordinal(kind: CtxKind, ordinal: i64) -> Self {
        Self {
            kind,
            from_end: false,
            operand: Value::Int(ordinal),
        }
    }

    fn selector(kind: CtxKind, operand: impl Into<Value>) -> Self {
        Self {
            kind,
            from_end: false,
            operand: operand.into(),
        }
    }

    /// Check the selector/operand combination before encoding.
    pub fn validate(&self) -> Result<(), WireError> {
        if self.kind.is_ordinal() {
            if !matches!(self.operand, Value::Int(_)) {
                return Err(WireError::CtxOperand {
                    kind: self.kind.as_str(),
                    got: self.operand.kind(),
                });
            }
        } else {
            if self.from_end {
                return Err(WireError::CtxFromEnd {
                    kind: self.kind.as_str(),
                });
            }
            if self.operand.is_sentinel() || matches!(self.operand, Value::Nil) {
                return Err(WireError::CtxSentinel {
                    kind: self.kind.as_str(),
                    got: self.operand.kind(),
                });
            }
        }
        Ok(())
    }
}

/// Flags byte, bit 0: the from-end polarity. Other bits are reserved.
pub(crate) const STEP_FLAG_FROM_END: u8 = 0x01;

/// Union of every defined flag bit; the decoder rejects anything outside it.
pub(crate) const STEP_FLAG_MASK: u8 = STEP_FLAG_FROM_END;

impl StreamWriter {
    /// Encode a context path as one count-prefixed sub-sequence.
    ///
    /// All steps are validated before the header is written, so a bad path
    /// never emits anything.
    pub fn push_ctx(&mut self, steps: &[CtxStep]) -> Result<(), WireError> {
        if steps.len() > u32::MAX as usize {
            return Err(WireError::Encoding("context path"));
        }
        for step in steps {
            step.validate()?;
        }
        self.push_ctx_header(steps.len() as u32);
        for step in steps {
            self.push_raw_byte(step.kind.code());
            self.push_raw_byte(if step.from_end { STEP_FLAG_FROM_END } else { 0 });
            self.push_value(&step.operand)?;
        }
        Ok(())
    }
}
