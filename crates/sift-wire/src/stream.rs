//! Instruction stream container and the cell writer that fills it.

use crate::error::WireError;
use crate::tag;
use crate::value::Value;

/// A compiled, self-delimiting instruction stream.
///
/// Produced once per compile from an immutable expression tree and never
/// mutated afterwards. The transport consumes it as an opaque byte sequence;
/// a consumer can find the end of the stream from structural markers alone
/// (fixed operator arities and end-of-varargs cells).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionStream {
    bytes: Vec<u8>,
    cells: usize,
}

impl InstructionStream {
    /// The raw wire bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the stream, yielding the wire bytes for the transport.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of cells written, counting container headers as one cell each.
    pub fn cell_count(&self) -> usize {
        self.cells
    }

    /// Total encoded size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// A decoder positioned at the start of the stream.
    pub fn reader(&self) -> crate::reader::CellReader<'_> {
        crate::reader::CellReader::new(&self.bytes)
    }
}

/// Appends tagged cells to a growing buffer.
///
/// On any error the writer must be discarded: a failing literal can leave a
/// partial container behind it. The compiler owns the writer for the whole
/// compile and drops it on the first error, so no partial stream ever
/// reaches the transport.
#[derive(Debug, Default)]
pub struct StreamWriter {
    buf: Vec<u8>,
    cells: usize,
}

impl StreamWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish writing and freeze the buffer into an [`InstructionStream`].
    pub fn finish(self) -> InstructionStream {
        InstructionStream {
            bytes: self.buf,
            cells: self.cells,
        }
    }

    pub fn push_nil(&mut self) {
        self.buf.push(tag::NIL);
        self.cells += 1;
    }

    pub fn push_bool(&mut self, v: bool) {
        self.buf.push(if v { tag::TRUE } else { tag::FALSE });
        self.cells += 1;
    }

    pub fn push_int(&mut self, v: i64) {
        self.buf.push(tag::INT);
        self.buf.extend_from_slice(&v.to_be_bytes());
        self.cells += 1;
    }

    /// Floats must be comparable server-side; NaN has no defined wire
    /// representation and is rejected here rather than at the server.
    pub fn push_float(&mut self, v: f64) -> Result<(), WireError> {
        if v.is_nan() {
            return Err(WireError::Encoding("NaN float"));
        }
        self.buf.push(tag::FLOAT);
        self.buf.extend_from_slice(&v.to_bits().to_be_bytes());
        self.cells += 1;
        Ok(())
    }

    pub fn push_str(&mut self, v: &str) -> Result<(), WireError> {
        self.push_prefixed(tag::STR, v.as_bytes(), "string")
    }

    pub fn push_blob(&mut self, v: &[u8]) -> Result<(), WireError> {
        self.push_prefixed(tag::BLOB, v, "blob")
    }

    pub fn push_geo(&mut self, v: &str) -> Result<(), WireError> {
        self.push_prefixed(tag::GEO, v.as_bytes(), "geojson")
    }

    pub fn push_list_header(&mut self, count: u32) {
        self.buf.push(tag::LIST);
        self.buf.extend_from_slice(&count.to_be_bytes());
        self.cells += 1;
    }

    pub fn push_map_header(&mut self, pairs: u32) {
        self.buf.push(tag::MAP);
        self.buf.extend_from_slice(&pairs.to_be_bytes());
        self.cells += 1;
    }

    pub fn push_infinity(&mut self) {
        self.buf.push(tag::INF);
        self.cells += 1;
    }

    pub fn push_wildcard(&mut self) {
        self.buf.push(tag::WILDCARD);
        self.cells += 1;
    }

    /// Operator cell carrying a catalog tag.
    pub fn push_op(&mut self, code: u16) {
        self.buf.push(tag::OP);
        self.buf.extend_from_slice(&code.to_be_bytes());
        self.cells += 1;
    }

    /// The reserved end-of-varargs marker.
    pub fn push_end(&mut self) {
        self.buf.push(tag::END);
        self.cells += 1;
    }

    pub(crate) fn push_ctx_header(&mut self, steps: u32) {
        self.buf.push(tag::CTX);
        self.buf.extend_from_slice(&steps.to_be_bytes());
        self.cells += 1;
    }

    pub(crate) fn push_raw_byte(&mut self, b: u8) {
        self.buf.push(b);
    }

    /// Encode a literal, recursing into containers.
    pub fn push_value(&mut self, v: &Value) -> Result<(), WireError> {
        match v {
            Value::Nil => self.push_nil(),
            Value::Bool(b) => self.push_bool(*b),
            Value::Int(i) => self.push_int(*i),
            Value::Float(f) => self.push_float(*f)?,
            Value::Str(s) => self.push_str(s)?,
            Value::Blob(b) => self.push_blob(b)?,
            Value::Geo(g) => self.push_geo(g)?,
            Value::List(items) => {
                check_count(items.len(), "list")?;
                self.push_list_header(items.len() as u32);
                for item in items {
                    self.push_value(item)?;
                }
            }
            Value::Map(pairs) => {
                check_count(pairs.len(), "map")?;
                for (i, (key, _)) in pairs.iter().enumerate() {
                    if pairs[..i].iter().any(|(seen, _)| seen == key) {
                        return Err(WireError::DuplicateMapKey(i));
                    }
                }
                self.push_map_header(pairs.len() as u32);
                for (key, value) in pairs {
                    self.push_value(key)?;
                    self.push_value(value)?;
                }
            }
            Value::Infinity => self.push_infinity(),
            Value::Wildcard => self.push_wildcard(),
        }
        Ok(())
    }

    fn push_prefixed(&mut self, t: u8, bytes: &[u8], kind: &'static str) -> Result<(), WireError> {
        check_count(bytes.len(), kind)?;
        self.buf.push(t);
        self.buf.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
        self.buf.extend_from_slice(bytes);
        self.cells += 1;
        Ok(())
    }
}

fn check_count(len: usize, kind: &'static str) -> Result<(), WireError> {
    if len > u32::MAX as usize {
        return Err(WireError::Encoding(kind));
    }
    Ok(())
}
