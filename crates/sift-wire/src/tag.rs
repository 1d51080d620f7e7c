//! Cell tag bytes.
//!
//! Tags 0x00-0x0F are literal value cells, 0x10-0x1F are structural cells.
//! `END` is reserved: it never collides with a value or operator cell, which
//! is what lets variadic argument lists terminate without a length prefix.

/// Null literal. No payload.
pub const NIL: u8 = 0x00;
/// Boolean `false`. No payload.
pub const FALSE: u8 = 0x01;
/// Boolean `true`. No payload.
pub const TRUE: u8 = 0x02;
/// Signed integer. Payload: 8 bytes, big-endian two's complement.
pub const INT: u8 = 0x03;
/// IEEE 754 double. Payload: 8 bytes, big-endian bit pattern.
pub const FLOAT: u8 = 0x04;
/// UTF-8 string. Payload: u32 byte length, then the bytes.
pub const STR: u8 = 0x05;
/// Raw byte blob. Payload: u32 byte length, then the bytes.
pub const BLOB: u8 = 0x06;
/// GeoJSON region. Payload: u32 byte length, then UTF-8 bytes.
pub const GEO: u8 = 0x07;
/// List header. Payload: u32 element count; the elements follow as cells.
pub const LIST: u8 = 0x08;
/// Map header. Payload: u32 pair count; key/value cells alternate after it.
pub const MAP: u8 = 0x09;
/// Unbounded range sentinel. No payload.
pub const INF: u8 = 0x0a;
/// Wildcard sentinel. No payload.
pub const WILDCARD: u8 = 0x0b;

/// Operator. Payload: u16 operator code, big-endian.
pub const OP: u8 = 0x10;
/// Context path header. Payload: u32 step count, then the steps
/// (selector byte, flags byte, operand cell each).
pub const CTX: u8 = 0x11;
/// End-of-varargs marker. No payload.
pub const END: u8 = 0x1f;
