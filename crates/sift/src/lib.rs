#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Server-side filter expressions for the sift key-value store.
//!
//! Filter expressions are predicates and value computations evaluated by the
//! server against each record. A client composes an expression tree from the
//! builder functions here and compiles it once into a compact instruction
//! stream the transport attaches to a request:
//!
//! ```
//! use sift::{and_, eq, ge, compile, int_bin, str_bin};
//!
//! // name == "alice" && score >= 100
//! let filter = and_(vec![
//!     eq(str_bin("name"), "alice"),
//!     ge(int_bin("score"), 100),
//! ]);
//! let stream = compile(&filter)?;
//! assert!(!stream.as_bytes().is_empty());
//! # Ok::<(), sift::ExprError>(())
//! ```
//!
//! Trees are immutable once built; a shared tree can be compiled from many
//! threads concurrently and always yields byte-identical streams. All
//! structural validation (arity, metadata, literal encoding) happens at
//! compile time, before anything reaches the server.
//!
//! The crate is a facade: the tree model and compiler live in `sift-expr`,
//! the cell-level wire format in `sift-wire`.

#[cfg(test)]
mod lib_tests;

pub use sift_expr::*;
