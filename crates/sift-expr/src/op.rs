//! Operator catalog: tags, arity shapes, and metadata slots.
//!
//! Every operator is one row in the `op_table!` invocation below. The
//! compiler reads the row through [`ExprOp::info`] and never special-cases
//! individual operators, so adding one is a single new row plus a builder.

use std::fmt;

/// Arity shape of an operator.
///
/// Fixed-arity operators encode their children with no framing; the consumer
/// knows the count from the tag. Variadic operators are terminated by the
/// reserved end-of-varargs cell instead of a length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many children.
    Fixed(usize),
    /// At least `min` children, end-marker terminated.
    Variadic { min: usize },
}

impl Arity {
    /// Whether a child count satisfies this shape.
    pub fn accepts(self, n: usize) -> bool {
        match self {
            Arity::Fixed(k) => n == k,
            Arity::Variadic { min } => n >= min,
        }
    }

    pub fn is_variadic(self) -> bool {
        matches!(self, Arity::Variadic { .. })
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Fixed(k) => write!(f, "exactly {k}"),
            Arity::Variadic { min } => write!(f, "at least {min}"),
        }
    }
}

/// Which return-type slot an operator carries, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtypeSlot {
    None,
    /// A value type code ([`ExprType`](crate::rtype::ExprType)): bin readers.
    Value,
    /// A selector return code ([`SelectReturn`](crate::rtype::SelectReturn)):
    /// collection get-by/select operators.
    Select,
}

/// Which write-policy slot an operator carries, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicySlot {
    None,
    List,
    Map,
    Bit,
    Hll,
}

/// One catalog row: display name, arity shape, metadata slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpInfo {
    pub name: &'static str,
    pub arity: Arity,
    pub rtype: RtypeSlot,
    /// Whether the operator addresses nested structure through a context
    /// path (encoded even when empty, as a zero-count header).
    pub ctx: bool,
    pub policy: PolicySlot,
}

/// Metadata slot combination shared by a family of operators.
#[derive(Clone, Copy)]
struct Meta {
    rtype: RtypeSlot,
    ctx: bool,
    policy: PolicySlot,
}

/// Plain operator: no metadata, children only.
const PLAIN: Meta = Meta {
    rtype: RtypeSlot::None,
    ctx: false,
    policy: PolicySlot::None,
};
/// Bin reader: carries the expected value type.
const BIN: Meta = Meta {
    rtype: RtypeSlot::Value,
    ctx: false,
    policy: PolicySlot::None,
};
/// Collection read: selector return code plus context path.
const READ: Meta = Meta {
    rtype: RtypeSlot::Select,
    ctx: true,
    policy: PolicySlot::None,
};
/// Collection accessor/mutator without a policy (size, clear, sort,
/// remove-by): context path only.
const CDT: Meta = Meta {
    rtype: RtypeSlot::None,
    ctx: true,
    policy: PolicySlot::None,
};
/// List mutator: context path plus list write policy.
const LIST_MOD: Meta = Meta {
    rtype: RtypeSlot::None,
    ctx: true,
    policy: PolicySlot::List,
};
/// Map mutator: context path plus map write policy.
const MAP_MOD: Meta = Meta {
    rtype: RtypeSlot::None,
    ctx: true,
    policy: PolicySlot::Map,
};
/// Bit mutator: bit write policy, no context (operates on a blob child).
const BIT_MOD: Meta = Meta {
    rtype: RtypeSlot::None,
    ctx: false,
    policy: PolicySlot::Bit,
};
/// HLL mutator: HLL write policy, no context.
const HLL_MOD: Meta = Meta {
    rtype: RtypeSlot::None,
    ctx: false,
    policy: PolicySlot::Hll,
};

const fn fixed(n: usize) -> Arity {
    Arity::Fixed(n)
}

const fn va(min: usize) -> Arity {
    Arity::Variadic { min }
}

macro_rules! op_table {
    ($($variant:ident = $code:literal, $name:literal, $arity:expr, $meta:ident;)+) => {
        /// Operator tag: an opaque enumerated identifier naming one
        /// server-side operation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u16)]
        pub enum ExprOp {
            $( $variant = $code, )+
        }

        impl ExprOp {
            /// Every catalog entry, in declaration order.
            pub const ALL: &'static [ExprOp] = &[ $( ExprOp::$variant, )+ ];

            /// Decode from the wire operator code.
            pub fn from_code(code: u16) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// The wire operator code.
            pub fn code(self) -> u16 {
                self as u16
            }

            /// The catalog row for this operator.
            pub fn info(self) -> OpInfo {
                match self {
                    $( Self::$variant => OpInfo {
                        name: $name,
                        arity: $arity,
                        rtype: $meta.rtype,
                        ctx: $meta.ctx,
                        policy: $meta.policy,
                    }, )+
                }
            }
        }
    };
}

op_table! {
    // Comparison
    Unknown = 0, "unknown", fixed(0), PLAIN;
    Eq = 1, "eq", fixed(2), PLAIN;
    Ne = 2, "ne", fixed(2), PLAIN;
    Gt = 3, "gt", fixed(2), PLAIN;
    Ge = 4, "ge", fixed(2), PLAIN;
    Lt = 5, "lt", fixed(2), PLAIN;
    Le = 6, "le", fixed(2), PLAIN;
    CmpRegex = 7, "cmp_regex", fixed(3), PLAIN;
    CmpGeo = 8, "cmp_geo", fixed(2), PLAIN;

    // Logical
    And = 16, "and", va(1), PLAIN;
    Or = 17, "or", va(1), PLAIN;
    Not = 18, "not", fixed(1), PLAIN;
    Exclusive = 19, "exclusive", va(1), PLAIN;

    // Arithmetic
    Add = 20, "add", va(1), PLAIN;
    Sub = 21, "sub", va(1), PLAIN;
    Mul = 22, "mul", va(1), PLAIN;
    Div = 23, "div", va(1), PLAIN;
    Pow = 24, "pow", fixed(2), PLAIN;
    Log = 25, "log", fixed(2), PLAIN;
    Mod = 26, "mod", fixed(2), PLAIN;
    Abs = 27, "abs", fixed(1), PLAIN;
    Floor = 28, "floor", fixed(1), PLAIN;
    Ceil = 29, "ceil", fixed(1), PLAIN;
    ToInt = 30, "to_int", fixed(1), PLAIN;
    ToFloat = 31, "to_float", fixed(1), PLAIN;

    // Integer bitwise
    IntAnd = 32, "int_and", va(1), PLAIN;
    IntOr = 33, "int_or", va(1), PLAIN;
    IntXor = 34, "int_xor", va(1), PLAIN;
    IntNot = 35, "int_not", fixed(1), PLAIN;
    IntLshift = 36, "int_lshift", fixed(2), PLAIN;
    IntRshift = 37, "int_rshift", fixed(2), PLAIN;
    IntArshift = 38, "int_arshift", fixed(2), PLAIN;
    IntCount = 39, "int_count", fixed(1), PLAIN;
    IntLscan = 40, "int_lscan", fixed(2), PLAIN;
    IntRscan = 41, "int_rscan", fixed(2), PLAIN;

    Min = 50, "min", va(1), PLAIN;
    Max = 51, "max", va(1), PLAIN;

    // Record metadata
    DigestModulo = 64, "digest_modulo", fixed(1), PLAIN;
    DeviceSize = 65, "device_size", fixed(0), PLAIN;
    LastUpdate = 66, "last_update", fixed(0), PLAIN;
    VoidTime = 67, "void_time", fixed(0), PLAIN;
    Ttl = 68, "ttl", fixed(0), PLAIN;
    SetName = 69, "set_name", fixed(0), PLAIN;
    KeyExists = 70, "key_exists", fixed(0), PLAIN;
    SinceUpdate = 71, "since_update", fixed(0), PLAIN;
    IsTombstone = 72, "is_tombstone", fixed(0), PLAIN;
    MemorySize = 73, "memory_size", fixed(0), PLAIN;

    // Record and bin access
    RecKey = 80, "rec_key", fixed(0), BIN;
    Bin = 81, "bin", fixed(1), BIN;
    BinType = 82, "bin_type", fixed(1), PLAIN;
    BinExists = 83, "bin_exists", fixed(1), PLAIN;

    // Control
    Cond = 123, "cond", va(3), PLAIN;
    Var = 124, "var", fixed(1), PLAIN;
    Let = 125, "let", va(2), PLAIN;
    Def = 126, "def", fixed(2), PLAIN;

    // List operations
    ListAppend = 256, "list_append", fixed(2), LIST_MOD;
    ListAppendItems = 257, "list_append_items", fixed(2), LIST_MOD;
    ListInsert = 258, "list_insert", fixed(3), LIST_MOD;
    ListInsertItems = 259, "list_insert_items", fixed(3), LIST_MOD;
    ListIncrement = 260, "list_increment", fixed(3), LIST_MOD;
    ListSet = 261, "list_set", fixed(3), LIST_MOD;
    ListClear = 262, "list_clear", fixed(1), CDT;
    ListSort = 263, "list_sort", fixed(2), CDT;
    ListSize = 264, "list_size", fixed(1), CDT;
    ListGetByValue = 265, "list_get_by_value", fixed(2), READ;
    ListGetByValueRange = 266, "list_get_by_value_range", fixed(3), READ;
    ListGetByValueList = 267, "list_get_by_value_list", fixed(2), READ;
    ListGetByRelRankRange = 268, "list_get_by_rel_rank_range", fixed(4), READ;
    ListGetByIndex = 269, "list_get_by_index", fixed(2), READ;
    ListGetByIndexRange = 270, "list_get_by_index_range", fixed(3), READ;
    ListGetByRank = 271, "list_get_by_rank", fixed(2), READ;
    ListGetByRankRange = 272, "list_get_by_rank_range", fixed(3), READ;
    ListRemoveByValue = 273, "list_remove_by_value", fixed(2), CDT;
    ListRemoveByValueList = 274, "list_remove_by_value_list", fixed(2), CDT;
    ListRemoveByValueRange = 275, "list_remove_by_value_range", fixed(3), CDT;
    ListRemoveByRelRankRange = 276, "list_remove_by_rel_rank_range", fixed(4), CDT;
    ListRemoveByIndex = 277, "list_remove_by_index", fixed(2), CDT;
    ListRemoveByIndexRange = 278, "list_remove_by_index_range", fixed(3), CDT;
    ListRemoveByRank = 279, "list_remove_by_rank", fixed(2), CDT;
    ListRemoveByRankRange = 280, "list_remove_by_rank_range", fixed(3), CDT;

    // Map operations
    MapPut = 512, "map_put", fixed(3), MAP_MOD;
    MapPutItems = 513, "map_put_items", fixed(2), MAP_MOD;
    MapIncrement = 514, "map_increment", fixed(3), MAP_MOD;
    MapClear = 515, "map_clear", fixed(1), CDT;
    MapGetByKey = 516, "map_get_by_key", fixed(2), READ;
    MapGetByKeyRange = 517, "map_get_by_key_range", fixed(3), READ;
    MapGetByKeyList = 518, "map_get_by_key_list", fixed(2), READ;
    MapGetByKeyRelIndexRange = 519, "map_get_by_key_rel_index_range", fixed(4), READ;
    MapGetByValue = 520, "map_get_by_value", fixed(2), READ;
    MapGetByValueRange = 521, "map_get_by_value_range", fixed(3), READ;
    MapGetByValueList = 522, "map_get_by_value_list", fixed(2), READ;
    MapGetByValueRelRankRange = 523, "map_get_by_value_rel_rank_range", fixed(4), READ;
    MapGetByIndex = 524, "map_get_by_index", fixed(2), READ;
    MapGetByIndexRange = 525, "map_get_by_index_range", fixed(3), READ;
    MapGetByRank = 526, "map_get_by_rank", fixed(2), READ;
    MapGetByRankRange = 527, "map_get_by_rank_range", fixed(3), READ;
    MapSize = 528, "map_size", fixed(1), CDT;
    MapRemoveByKey = 529, "map_remove_by_key", fixed(2), CDT;
    MapRemoveByKeyList = 530, "map_remove_by_key_list", fixed(2), CDT;
    MapRemoveByKeyRange = 531, "map_remove_by_key_range", fixed(3), CDT;
    MapRemoveByKeyRelIndexRange = 532, "map_remove_by_key_rel_index_range", fixed(4), CDT;
    MapRemoveByValue = 533, "map_remove_by_value", fixed(2), CDT;
    MapRemoveByValueList = 534, "map_remove_by_value_list", fixed(2), CDT;
    MapRemoveByValueRange = 535, "map_remove_by_value_range", fixed(3), CDT;
    MapRemoveByValueRelRankRange = 536, "map_remove_by_value_rel_rank_range", fixed(4), CDT;
    MapRemoveByIndex = 537, "map_remove_by_index", fixed(2), CDT;
    MapRemoveByIndexRange = 538, "map_remove_by_index_range", fixed(3), CDT;
    MapRemoveByRank = 539, "map_remove_by_rank", fixed(2), CDT;
    MapRemoveByRankRange = 540, "map_remove_by_rank_range", fixed(3), CDT;

    // Bit operations (blob bins)
    BitResize = 768, "bit_resize", fixed(2), BIT_MOD;
    BitInsert = 769, "bit_insert", fixed(3), BIT_MOD;
    BitRemove = 770, "bit_remove", fixed(3), BIT_MOD;
    BitSet = 771, "bit_set", fixed(4), BIT_MOD;
    BitOr = 772, "bit_or", fixed(4), BIT_MOD;
    BitXor = 773, "bit_xor", fixed(4), BIT_MOD;
    BitAnd = 774, "bit_and", fixed(4), BIT_MOD;
    BitNot = 775, "bit_not", fixed(3), BIT_MOD;
    BitLshift = 776, "bit_lshift", fixed(4), BIT_MOD;
    BitRshift = 777, "bit_rshift", fixed(4), BIT_MOD;
    BitAdd = 778, "bit_add", fixed(4), BIT_MOD;
    BitSubtract = 779, "bit_subtract", fixed(4), BIT_MOD;
    BitSetInt = 780, "bit_set_int", fixed(4), BIT_MOD;
    BitGet = 781, "bit_get", fixed(3), PLAIN;
    BitCount = 782, "bit_count", fixed(3), PLAIN;
    BitLscan = 783, "bit_lscan", fixed(4), PLAIN;
    BitRscan = 784, "bit_rscan", fixed(4), PLAIN;
    BitGetInt = 785, "bit_get_int", fixed(4), PLAIN;

    // HyperLogLog operations
    HllInit = 1024, "hll_init", fixed(2), HLL_MOD;
    HllAdd = 1025, "hll_add", fixed(3), HLL_MOD;
    HllGetCount = 1026, "hll_get_count", fixed(1), PLAIN;
    HllGetUnion = 1027, "hll_get_union", fixed(2), PLAIN;
    HllGetUnionCount = 1028, "hll_get_union_count", fixed(2), PLAIN;
    HllGetIntersectCount = 1029, "hll_get_intersect_count", fixed(2), PLAIN;
    HllGetSimilarity = 1030, "hll_get_similarity", fixed(2), PLAIN;
    HllDescribe = 1031, "hll_describe", fixed(1), PLAIN;
    HllMayContain = 1032, "hll_may_contain", fixed(2), PLAIN;
}
