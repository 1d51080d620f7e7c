//! Literal values carried by expression nodes.

/// A literal value with a defined wire representation.
///
/// Values are immutable and owned by the node that references them; encoding
/// copies them into the output stream, so trees can be recompiled freely.
///
/// Map literals keep insertion order (a pair vector, not a hash map) so that
/// compiling the same tree twice yields byte-identical streams. Key
/// uniqueness is enforced at encode time.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Blob(Vec<u8>),
    /// A GeoJSON region, used by geo containment comparisons.
    Geo(String),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
    /// Unbounded end of a range query.
    Infinity,
    /// Matches any value in a range query.
    Wildcard,
}

impl Value {
    /// Short kind name, used in error messages and dumps.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Blob(_) => "blob",
            Value::Geo(_) => "geojson",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Infinity => "infinity",
            Value::Wildcard => "wildcard",
        }
    }

    /// Whether this is one of the range sentinels (`Infinity`, `Wildcard`).
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Value::Infinity | Value::Wildcard)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<Vec<(Value, Value)>> for Value {
    fn from(v: Vec<(Value, Value)>) -> Self {
        Value::Map(v)
    }
}
