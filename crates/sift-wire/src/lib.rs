#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Wire cell format for sift filter expressions.
//!
//! This crate contains:
//! - Cell tag scheme and primitive encoding (`tag`, `StreamWriter`)
//! - Literal values (`Value`)
//! - Context path steps and their encoding (`CtxKind`, `CtxStep`)
//! - The compiled output container (`InstructionStream`)
//! - A symmetric cell decoder (`Cell`, `CellReader`)
//!
//! A compiled stream is a flat sequence of tagged cells. Every cell is one
//! tag byte followed by a fixed- or length-prefixed payload, so a consumer
//! can walk the stream without an outer length field.

pub mod ctx;
pub mod error;
pub mod reader;
pub mod stream;
pub mod tag;
pub mod value;

#[cfg(test)]
mod stream_tests;
#[cfg(test)]
mod value_tests;

pub use ctx::{CtxKind, CtxStep};
pub use error::WireError;
pub use reader::{Cell, CellReader};
pub use stream::{InstructionStream, StreamWriter};
pub use value::Value;
