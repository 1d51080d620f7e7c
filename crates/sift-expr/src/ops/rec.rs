//! Bin accessors and record-metadata readers.

use crate::node::{Expr, Operand};
use crate::op::ExprOp;
use crate::rtype::{ExprType, Rtype};

fn plain(op: ExprOp, children: Vec<Operand>) -> Expr {
    Expr::build(op, None, Vec::new(), None, children)
}

/// Read a bin, expecting the given value type.
///
/// The typed shorthands below (`int_bin`, `float_bin`, ...) are the usual
/// entry points.
pub fn bin(bin_type: ExprType, name: &str) -> Expr {
    Expr::build(
        ExprOp::Bin,
        Some(Rtype::Value(bin_type)),
        Vec::new(),
        None,
        vec![name.into()],
    )
}

pub fn int_bin(name: &str) -> Expr {
    bin(ExprType::Int, name)
}

pub fn float_bin(name: &str) -> Expr {
    bin(ExprType::Float, name)
}

pub fn str_bin(name: &str) -> Expr {
    bin(ExprType::Str, name)
}

pub fn bool_bin(name: &str) -> Expr {
    bin(ExprType::Bool, name)
}

pub fn blob_bin(name: &str) -> Expr {
    bin(ExprType::Blob, name)
}

pub fn list_bin(name: &str) -> Expr {
    bin(ExprType::List, name)
}

pub fn map_bin(name: &str) -> Expr {
    bin(ExprType::Map, name)
}

pub fn geo_bin(name: &str) -> Expr {
    bin(ExprType::Geo, name)
}

pub fn hll_bin(name: &str) -> Expr {
    bin(ExprType::Hll, name)
}

/// Whether the bin holds any value.
pub fn bin_exists(name: &str) -> Expr {
    plain(ExprOp::BinExists, vec![name.into()])
}

/// The type code of a bin's stored value.
pub fn bin_type(name: &str) -> Expr {
    plain(ExprOp::BinType, vec![name.into()])
}

/// The record's user key, expecting the given type. Only usable when keys
/// are stored with the record.
pub fn record_key(key_type: ExprType) -> Expr {
    Expr::build(
        ExprOp::RecKey,
        Some(Rtype::Value(key_type)),
        Vec::new(),
        None,
        Vec::new(),
    )
}

/// Whether the record's user key is stored server-side.
pub fn key_exists() -> Expr {
    plain(ExprOp::KeyExists, Vec::new())
}

/// Seconds until the record expires.
pub fn ttl() -> Expr {
    plain(ExprOp::Ttl, Vec::new())
}

/// Expiration epoch in nanoseconds, or -1 for never.
pub fn void_time() -> Expr {
    plain(ExprOp::VoidTime, Vec::new())
}

/// The record's set name, or the empty string for the null set.
pub fn set_name() -> Expr {
    plain(ExprOp::SetName, Vec::new())
}

/// Last-update epoch in nanoseconds.
pub fn last_update() -> Expr {
    plain(ExprOp::LastUpdate, Vec::new())
}

/// Seconds since the record was last updated.
pub fn since_update() -> Expr {
    plain(ExprOp::SinceUpdate, Vec::new())
}

/// Storage bytes consumed by the record on disk, 0 for memory-only
/// namespaces.
pub fn device_size() -> Expr {
    plain(ExprOp::DeviceSize, Vec::new())
}

/// Memory bytes consumed by the record, 0 for disk-only namespaces.
pub fn memory_size() -> Expr {
    plain(ExprOp::MemorySize, Vec::new())
}

/// Whether the record is a tombstone (durable-delete marker).
pub fn is_tombstone() -> Expr {
    plain(ExprOp::IsTombstone, Vec::new())
}

/// The record digest modulo the given divisor; partitions scans cheaply.
pub fn digest_modulo(modulo: i64) -> Expr {
    plain(ExprOp::DigestModulo, vec![modulo.into()])
}
