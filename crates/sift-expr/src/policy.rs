//! Write policies for collection mutator operators.
//!
//! Policies are encoded as fixed int cells in a declared position, so a
//! consumer always finds them whether or not the caller set one; `None`
//! encodes the family default.

/// Storage order of a list bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ListOrder {
    #[default]
    Unordered = 0,
    Ordered = 1,
}

/// List write flag bits. Combine with `|`.
pub mod list_flags {
    pub const DEFAULT: u8 = 0;
    /// Only add values not already present.
    pub const ADD_UNIQUE: u8 = 0x01;
    /// Fail inserts past the end of the list.
    pub const INSERT_BOUNDED: u8 = 0x02;
    /// Turn policy violations into no-ops instead of errors.
    pub const NO_FAIL: u8 = 0x04;
    /// With `NO_FAIL`, apply the elements that do not violate the policy.
    pub const PARTIAL: u8 = 0x08;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListPolicy {
    pub order: ListOrder,
    pub flags: u8,
}

/// Storage order of a map bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum MapOrder {
    #[default]
    Unordered = 0,
    KeyOrdered = 1,
    KeyValueOrdered = 3,
}

/// Map write flag bits. Combine with `|`.
pub mod map_flags {
    pub const DEFAULT: u8 = 0;
    /// Only write keys not already present.
    pub const CREATE_ONLY: u8 = 0x01;
    /// Only overwrite keys already present.
    pub const UPDATE_ONLY: u8 = 0x02;
    pub const NO_FAIL: u8 = 0x04;
    pub const PARTIAL: u8 = 0x08;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapPolicy {
    pub order: MapOrder,
    pub flags: u8,
}

/// Bit write flag bits. Combine with `|`.
pub mod bit_flags {
    pub const DEFAULT: u8 = 0;
    /// Only create the blob bin if it does not exist.
    pub const CREATE_ONLY: u8 = 0x01;
    /// Only operate on an existing blob bin.
    pub const UPDATE_ONLY: u8 = 0x02;
    /// Do not resize the blob past its current size.
    pub const NO_FAIL: u8 = 0x04;
    pub const PARTIAL: u8 = 0x08;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitPolicy {
    pub flags: u8,
}

/// HLL write flag bits. Combine with `|`.
pub mod hll_flags {
    pub const DEFAULT: u8 = 0;
    pub const CREATE_ONLY: u8 = 0x01;
    pub const UPDATE_ONLY: u8 = 0x02;
    pub const NO_FAIL: u8 = 0x04;
    /// Allow the server to fold the sketch to fit the bin's parameters.
    pub const ALLOW_FOLD: u8 = 0x08;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HllPolicy {
    pub flags: u8,
}

/// A write policy of any family, as attached to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    List(ListPolicy),
    Map(MapPolicy),
    Bit(BitPolicy),
    Hll(HllPolicy),
}
