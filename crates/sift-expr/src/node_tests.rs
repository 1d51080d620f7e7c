use super::*;
use crate::op::ExprOp;

#[test]
fn new_builds_plain_operators() {
    let e = Expr::new(ExprOp::Not, vec![key_exists().into()]).unwrap();
    assert_eq!(e.op(), ExprOp::Not);
    assert_eq!(e.rtype(), None);
    assert!(e.ctx().is_empty());
    assert_eq!(e.policy(), None);
    assert_eq!(e.children().len(), 1);
}

#[test]
fn new_checks_arity_eagerly() {
    let err = Expr::new(ExprOp::Not, Vec::new()).unwrap_err();
    assert_eq!(
        err,
        ExprError::Arity {
            op: "not",
            expected: Arity::Fixed(1),
            got: 0,
        }
    );

    let err = Expr::new(ExprOp::And, Vec::new()).unwrap_err();
    assert_eq!(
        err,
        ExprError::Arity {
            op: "and",
            expected: Arity::Variadic { min: 1 },
            got: 0,
        }
    );
}

#[test]
fn new_refuses_operators_with_metadata_slots() {
    for op in [ExprOp::Bin, ExprOp::ListAppend, ExprOp::MapGetByKey, ExprOp::HllInit] {
        let err = Expr::new(op, vec![1.into(), 2.into()]).unwrap_err();
        assert_eq!(err, ExprError::MetadataRequired { op: op.info().name });
    }
}

#[test]
fn operand_conversions_cover_the_literal_kinds() {
    assert_eq!(Operand::from(true), Operand::Value(Value::Bool(true)));
    assert_eq!(Operand::from(7i64), Operand::Value(Value::Int(7)));
    assert_eq!(Operand::from(7i32), Operand::Value(Value::Int(7)));
    assert_eq!(Operand::from(1.5), Operand::Value(Value::Float(1.5)));
    assert_eq!(
        Operand::from("hi"),
        Operand::Value(Value::Str("hi".to_string()))
    );
    assert_eq!(
        Operand::from("hi".to_string()),
        Operand::Value(Value::Str("hi".to_string()))
    );
    assert_eq!(
        Operand::from(vec![1u8, 2]),
        Operand::Value(Value::Blob(vec![1, 2]))
    );
    assert_eq!(
        Operand::from(vec![Value::Int(1)]),
        Operand::Value(Value::List(vec![Value::Int(1)]))
    );
    assert!(matches!(Operand::from(ttl()), Operand::Expr(_)));
}

#[test]
fn trees_are_cloneable_and_comparable() {
    let a = eq(int_bin("a"), 11);
    let b = a.clone();
    assert_eq!(a, b);
    assert_ne!(a, eq(int_bin("a"), 12));
}

#[test]
fn compile_method_matches_free_function() {
    let e = gt(add(vec![int_bin("a").into(), 1.into()]), 10);
    assert_eq!(e.compile().unwrap(), compile(&e).unwrap());
}
