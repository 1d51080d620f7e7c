//! Return-type codes carried in operator metadata.

use crate::error::ExprError;

/// Expected value type of a bin or record-key read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExprType {
    Nil = 0,
    Bool = 1,
    Int = 2,
    Str = 3,
    List = 4,
    Map = 5,
    Blob = 6,
    Float = 7,
    Geo = 8,
    Hll = 9,
}

impl ExprType {
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Decode a value type code, e.g. while inspecting a compiled stream.
    pub fn from_code(code: i64) -> Result<Self, ExprError> {
        match code {
            0 => Ok(Self::Nil),
            1 => Ok(Self::Bool),
            2 => Ok(Self::Int),
            3 => Ok(Self::Str),
            4 => Ok(Self::List),
            5 => Ok(Self::Map),
            6 => Ok(Self::Blob),
            7 => Ok(Self::Float),
            8 => Ok(Self::Geo),
            9 => Ok(Self::Hll),
            other => Err(ExprError::UnknownReturnType(other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Str => "string",
            Self::List => "list",
            Self::Map => "map",
            Self::Blob => "blob",
            Self::Float => "float",
            Self::Geo => "geojson",
            Self::Hll => "hll",
        }
    }
}

/// What a collection get-by/select operator returns for the selected
/// elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SelectBase {
    /// No result, modify-only selection.
    Nothing = 0,
    Index = 1,
    ReverseIndex = 2,
    Rank = 3,
    ReverseRank = 4,
    Count = 5,
    Key = 6,
    Value = 7,
    KeyValue = 8,
    Exists = 13,
}

impl SelectBase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nothing => "nothing",
            Self::Index => "index",
            Self::ReverseIndex => "reverse-index",
            Self::Rank => "rank",
            Self::ReverseRank => "reverse-rank",
            Self::Count => "count",
            Self::Key => "key",
            Self::Value => "value",
            Self::KeyValue => "key-value",
            Self::Exists => "exists",
        }
    }
}

/// Selector return code: a [`SelectBase`] plus an inverted flag that flips
/// the selection to everything *not* matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectReturn {
    pub base: SelectBase,
    pub inverted: bool,
}

/// Wire bit marking an inverted selection.
const INVERTED_BIT: i64 = 0x10000;

impl SelectReturn {
    pub const NOTHING: Self = Self::new(SelectBase::Nothing);
    pub const INDEX: Self = Self::new(SelectBase::Index);
    pub const REVERSE_INDEX: Self = Self::new(SelectBase::ReverseIndex);
    pub const RANK: Self = Self::new(SelectBase::Rank);
    pub const REVERSE_RANK: Self = Self::new(SelectBase::ReverseRank);
    pub const COUNT: Self = Self::new(SelectBase::Count);
    pub const KEY: Self = Self::new(SelectBase::Key);
    pub const VALUE: Self = Self::new(SelectBase::Value);
    pub const KEY_VALUE: Self = Self::new(SelectBase::KeyValue);
    pub const EXISTS: Self = Self::new(SelectBase::Exists);

    pub const fn new(base: SelectBase) -> Self {
        Self {
            base,
            inverted: false,
        }
    }

    /// Flip to select everything the operator did not match.
    pub const fn inverted(self) -> Self {
        Self {
            base: self.base,
            inverted: true,
        }
    }

    pub fn code(self) -> i64 {
        self.base as i64 | if self.inverted { INVERTED_BIT } else { 0 }
    }

    /// Decode a selector return code.
    pub fn from_code(code: i64) -> Result<Self, ExprError> {
        let inverted = code & INVERTED_BIT != 0;
        let base = match code & !INVERTED_BIT {
            0 => SelectBase::Nothing,
            1 => SelectBase::Index,
            2 => SelectBase::ReverseIndex,
            3 => SelectBase::Rank,
            4 => SelectBase::ReverseRank,
            5 => SelectBase::Count,
            6 => SelectBase::Key,
            7 => SelectBase::Value,
            8 => SelectBase::KeyValue,
            13 => SelectBase::Exists,
            _ => return Err(ExprError::UnknownReturnType(code)),
        };
        Ok(Self { base, inverted })
    }
}

/// The value carried by an operator's return-type slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rtype {
    Value(ExprType),
    Select(SelectReturn),
}

impl Rtype {
    pub fn code(self) -> i64 {
        match self {
            Rtype::Value(t) => t.code(),
            Rtype::Select(s) => s.code(),
        }
    }
}
