//! Builder functions for the operator catalog.
//!
//! One thin function per operator. Fixed-arity operators take their children
//! as typed parameters, so a mismatched count cannot be expressed; variadic
//! operators take a `Vec` and are validated at compile time. None of these
//! functions serialize anything themselves: they only assemble nodes for the
//! shared compiler.

pub mod arith;
pub mod bit;
pub mod cmp;
pub mod ctrl;
pub mod hll;
pub mod list;
pub mod map;
pub mod rec;

pub use arith::*;
pub use bit::*;
pub use cmp::*;
pub use ctrl::*;
pub use hll::*;
pub use list::*;
pub use map::*;
pub use rec::*;
