use super::*;

#[test]
fn kind_names() {
    assert_eq!(Value::Nil.kind(), "nil");
    assert_eq!(Value::Bool(true).kind(), "bool");
    assert_eq!(Value::Int(1).kind(), "int");
    assert_eq!(Value::Float(1.5).kind(), "float");
    assert_eq!(Value::Str("x".into()).kind(), "string");
    assert_eq!(Value::Blob(vec![1]).kind(), "blob");
    assert_eq!(Value::Geo("{}".into()).kind(), "geojson");
    assert_eq!(Value::List(vec![]).kind(), "list");
    assert_eq!(Value::Map(vec![]).kind(), "map");
    assert_eq!(Value::Infinity.kind(), "infinity");
    assert_eq!(Value::Wildcard.kind(), "wildcard");
}

#[test]
fn sentinels() {
    assert!(Value::Infinity.is_sentinel());
    assert!(Value::Wildcard.is_sentinel());
    assert!(!Value::Nil.is_sentinel());
    assert!(!Value::Int(0).is_sentinel());
}

#[test]
fn conversions() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7i64), Value::Int(7));
    assert_eq!(Value::from(7i32), Value::Int(7));
    assert_eq!(Value::from(2.5f64), Value::Float(2.5));
    assert_eq!(Value::from("hi"), Value::Str("hi".to_string()));
    assert_eq!(Value::from("hi".to_string()), Value::Str("hi".to_string()));
    assert_eq!(Value::from(vec![1u8, 2]), Value::Blob(vec![1, 2]));
    assert_eq!(
        Value::from(vec![Value::Int(1)]),
        Value::List(vec![Value::Int(1)])
    );
}
