//! Cell-level decoder, symmetric to [`StreamWriter`](crate::StreamWriter).
//!
//! The compiler never needs this; it exists for tests, for the dump
//! facility, and for any consumer that wants to inspect a compiled stream
//! without shipping it to the server.

use crate::ctx::{CtxKind, CtxStep, STEP_FLAG_FROM_END, STEP_FLAG_MASK};
use crate::error::WireError;
use crate::tag;
use crate::value::Value;

/// One decoded cell. Container headers are returned as headers; their
/// elements follow as separate cells (use [`CellReader::read_value`] to
/// reassemble a full literal).
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(&'a str),
    Blob(&'a [u8]),
    Geo(&'a str),
    ListHeader(u32),
    MapHeader(u32),
    Infinity,
    Wildcard,
    Op(u16),
    CtxHeader(u32),
    End,
}

impl Cell<'_> {
    /// The tag byte this cell was decoded from.
    pub fn tag(&self) -> u8 {
        match self {
            Cell::Nil => tag::NIL,
            Cell::Bool(false) => tag::FALSE,
            Cell::Bool(true) => tag::TRUE,
            Cell::Int(_) => tag::INT,
            Cell::Float(_) => tag::FLOAT,
            Cell::Str(_) => tag::STR,
            Cell::Blob(_) => tag::BLOB,
            Cell::Geo(_) => tag::GEO,
            Cell::ListHeader(_) => tag::LIST,
            Cell::MapHeader(_) => tag::MAP,
            Cell::Infinity => tag::INF,
            Cell::Wildcard => tag::WILDCARD,
            Cell::Op(_) => tag::OP,
            Cell::CtxHeader(_) => tag::CTX,
            Cell::End => tag::END,
        }
    }
}

/// Sequential reader over the bytes of an instruction stream.
#[derive(Debug, Clone)]
pub struct CellReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> CellReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// The tag byte of the next cell, without consuming it.
    pub fn peek_tag(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Whether the reader has consumed the whole stream.
    pub fn is_at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }

    /// Byte offset of the next cell.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Decode the next cell, or `None` at end of stream.
    pub fn next_cell(&mut self) -> Result<Option<Cell<'a>>, WireError> {
        let Some(&t) = self.bytes.get(self.pos) else {
            return Ok(None);
        };
        let at = self.pos;
        self.pos += 1;
        let cell = match t {
            tag::NIL => Cell::Nil,
            tag::FALSE => Cell::Bool(false),
            tag::TRUE => Cell::Bool(true),
            tag::INT => Cell::Int(i64::from_be_bytes(self.take8()?)),
            tag::FLOAT => Cell::Float(f64::from_bits(u64::from_be_bytes(self.take8()?))),
            tag::STR => Cell::Str(self.take_str()?),
            tag::BLOB => {
                let len = self.take_u32()? as usize;
                Cell::Blob(self.take(len)?)
            }
            tag::GEO => Cell::Geo(self.take_str()?),
            tag::LIST => Cell::ListHeader(self.take_u32()?),
            tag::MAP => Cell::MapHeader(self.take_u32()?),
            tag::INF => Cell::Infinity,
            tag::WILDCARD => Cell::Wildcard,
            tag::OP => {
                let b = self.take(2)?;
                Cell::Op(u16::from_be_bytes([b[0], b[1]]))
            }
            tag::CTX => Cell::CtxHeader(self.take_u32()?),
            tag::END => Cell::End,
            other => return Err(WireError::UnknownTag(other, at)),
        };
        Ok(Some(cell))
    }

    /// Decode a full literal, reassembling nested containers.
    ///
    /// Fails with `ExpectedValue` on a structural cell (operator, context
    /// header, end marker) and with `Truncated` at end of stream.
    pub fn read_value(&mut self) -> Result<Value, WireError> {
        let Some(cell) = self.next_cell()? else {
            return Err(WireError::Truncated(self.pos));
        };
        match cell {
            Cell::Nil => Ok(Value::Nil),
            Cell::Bool(b) => Ok(Value::Bool(b)),
            Cell::Int(i) => Ok(Value::Int(i)),
            Cell::Float(f) => Ok(Value::Float(f)),
            Cell::Str(s) => Ok(Value::Str(s.to_string())),
            Cell::Blob(b) => Ok(Value::Blob(b.to_vec())),
            Cell::Geo(g) => Ok(Value::Geo(g.to_string())),
            Cell::ListHeader(n) => {
                // Header counts are untrusted; every element occupies at
                // least one byte, so the remaining stream bounds the
                // allocation.
                let mut items = Vec::with_capacity(self.capped(n));
                for _ in 0..n {
                    items.push(self.read_value()?);
                }
                Ok(Value::List(items))
            }
            Cell::MapHeader(n) => {
                let mut pairs = Vec::with_capacity(self.capped(n));
                for _ in 0..n {
                    let key = self.read_value()?;
                    let value = self.read_value()?;
                    pairs.push((key, value));
                }
                Ok(Value::Map(pairs))
            }
            Cell::Infinity => Ok(Value::Infinity),
            Cell::Wildcard => Ok(Value::Wildcard),
            other => Err(WireError::ExpectedValue(other.tag())),
        }
    }

    /// Decode a count-prefixed context path sub-sequence.
    pub fn read_ctx(&mut self) -> Result<Vec<CtxStep>, WireError> {
        let count = match self.next_cell()? {
            Some(Cell::CtxHeader(n)) => n,
            Some(other) => return Err(WireError::ExpectedCtx(other.tag())),
            None => return Err(WireError::Truncated(self.pos)),
        };
        let mut steps = Vec::with_capacity(self.capped(count));
        for _ in 0..count {
            let selector = self.take(1)?[0];
            let kind = CtxKind::from_code(selector).ok_or(WireError::UnknownSelector(selector))?;
            let flags = self.take(1)?[0];
            if flags & !STEP_FLAG_MASK != 0 {
                return Err(WireError::InvalidStepFlags(flags));
            }
            let operand = self.read_value()?;
            steps.push(CtxStep {
                kind,
                from_end: flags & STEP_FLAG_FROM_END != 0,
                operand,
            });
        }
        Ok(steps)
    }

    /// Pre-allocation bound for a claimed container count.
    fn capped(&self, claimed: u32) -> usize {
        (claimed as usize).min(self.bytes.len() - self.pos)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(WireError::Truncated(self.bytes.len()))?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn take8(&mut self) -> Result<[u8; 8], WireError> {
        let b = self.take(8)?;
        Ok([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
    }

    fn take_u32(&mut self) -> Result<u32, WireError> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn take_str(&mut self) -> Result<&'a str, WireError> {
        let len = self.take_u32()? as usize;
        std::str::from_utf8(self.take(len)?).map_err(|_| WireError::InvalidUtf8)
    }
}
