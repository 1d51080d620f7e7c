use sift_wire::{Cell, CtxStep, StreamWriter, Value, WireError, tag};

use super::*;
use crate::node::Expr as ExprNode;
use crate::op::ExprOp;

#[test]
fn compiles_to_the_exact_documented_byte_layout() {
    // eq(add(1, 2), 3)
    let expr = eq(add(vec![1.into(), 2.into()]), 3);
    let stream = compile(&expr).unwrap();

    let mut w = StreamWriter::new();
    w.push_op(ExprOp::Eq.code());
    w.push_op(ExprOp::Add.code());
    w.push_int(1);
    w.push_int(2);
    w.push_end();
    w.push_int(3);
    assert_eq!(stream, w.finish());
}

#[test]
fn compiling_twice_is_byte_identical_and_leaves_the_tree_untouched() {
    let expr = and_(vec![
        gt(add(vec![int_bin("a").into(), 5.into()]), 10),
        eq(str_bin("name"), "x"),
    ]);
    let copy = expr.clone();
    let first = compile(&expr).unwrap();
    let second = compile(&expr).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
    assert_eq!(expr, copy);
}

#[test]
fn every_variadic_node_is_end_terminated() {
    // Nested varargs: or(and(x), y) carries one marker per variadic node.
    let expr = or_(vec![and_(vec![key_exists()]), is_tombstone()]);
    let stream = compile(&expr).unwrap();

    let mut r = stream.reader();
    let mut ends = 0;
    while let Some(cell) = r.next_cell().unwrap() {
        if cell == Cell::End {
            ends += 1;
        }
    }
    assert_eq!(ends, 2);
    assert_eq!(*stream.as_bytes().last().unwrap(), tag::END);
}

#[test]
fn fixed_arity_nodes_carry_no_end_marker() {
    let stream = compile(&eq(int_bin("a"), 1)).unwrap();
    assert!(!stream.as_bytes().contains(&tag::END));
}

#[test]
fn zero_argument_varargs_are_rejected() {
    let err = compile(&add(Vec::new())).unwrap_err();
    assert_eq!(
        err,
        ExprError::Arity {
            op: "add",
            expected: Arity::Variadic { min: 1 },
            got: 0,
        }
    );
}

#[test]
fn cond_requires_a_pair_plus_default() {
    let err = compile(&cond(vec![key_exists().into(), 1.into()])).unwrap_err();
    assert_eq!(
        err,
        ExprError::Arity {
            op: "cond",
            expected: Arity::Variadic { min: 3 },
            got: 2,
        }
    );
    assert!(compile(&cond(vec![key_exists().into(), 1.into(), 0.into()])).is_ok());
}

#[test]
fn arity_errors_deep_in_the_tree_abort_the_whole_compile() {
    let expr = eq(mul(Vec::new()), 0);
    assert!(matches!(
        compile(&expr),
        Err(ExprError::Arity { op: "mul", .. })
    ));
}

#[test]
fn single_argument_sub_compiles_as_an_ordinary_varargs_node() {
    // Negation is evaluated server-side; the stream shape is the one-element
    // argument list, not a distinct operator.
    let stream = compile(&sub(vec![int_bin("a").into()])).unwrap();
    let mut r = stream.reader();
    assert_eq!(r.next_cell().unwrap(), Some(Cell::Op(ExprOp::Sub.code())));
    assert_eq!(r.next_cell().unwrap(), Some(Cell::Op(ExprOp::Bin.code())));
    assert_eq!(r.next_cell().unwrap(), Some(Cell::Int(ExprType::Int.code())));
    assert_eq!(r.next_cell().unwrap(), Some(Cell::Str("a")));
    assert_eq!(r.next_cell().unwrap(), Some(Cell::End));
    assert!(r.is_at_end());
}

#[test]
fn bin_reader_emits_type_code_before_the_name() {
    let stream = compile(&float_bin("ratio")).unwrap();
    let mut r = stream.reader();
    assert_eq!(r.next_cell().unwrap(), Some(Cell::Op(ExprOp::Bin.code())));
    assert_eq!(
        r.next_cell().unwrap(),
        Some(Cell::Int(ExprType::Float.code()))
    );
    assert_eq!(r.next_cell().unwrap(), Some(Cell::Str("ratio")));
    assert!(r.is_at_end());
}

#[test]
fn metadata_is_emitted_in_fixed_order() {
    // Collection read: op, selector return, ctx, children.
    let expr = map_get_by_key(
        SelectReturn::VALUE,
        &[CtxStep::map_key("inner")],
        "score",
        map_bin("m"),
    );
    let stream = compile(&expr).unwrap();
    let mut r = stream.reader();
    assert_eq!(
        r.next_cell().unwrap(),
        Some(Cell::Op(ExprOp::MapGetByKey.code()))
    );
    assert_eq!(
        r.next_cell().unwrap(),
        Some(Cell::Int(SelectReturn::VALUE.code()))
    );
    let steps = r.read_ctx().unwrap();
    assert_eq!(steps, vec![CtxStep::map_key("inner")]);
    assert_eq!(r.next_cell().unwrap(), Some(Cell::Str("score")));
    assert_eq!(r.next_cell().unwrap(), Some(Cell::Op(ExprOp::Bin.code())));
}

#[test]
fn empty_context_path_still_occupies_its_slot() {
    let stream = compile(&list_size(&[], list_bin("xs"))).unwrap();
    let mut r = stream.reader();
    assert_eq!(
        r.next_cell().unwrap(),
        Some(Cell::Op(ExprOp::ListSize.code()))
    );
    assert_eq!(r.next_cell().unwrap(), Some(Cell::CtxHeader(0)));
}

#[test]
fn omitted_policy_encodes_family_defaults() {
    let stream = compile(&list_append(None, &[], 42, list_bin("xs"))).unwrap();
    let mut r = stream.reader();
    assert_eq!(
        r.next_cell().unwrap(),
        Some(Cell::Op(ExprOp::ListAppend.code()))
    );
    assert_eq!(r.next_cell().unwrap(), Some(Cell::CtxHeader(0)));
    // ListPolicy::default(): unordered, no flags.
    assert_eq!(r.next_cell().unwrap(), Some(Cell::Int(0)));
    assert_eq!(r.next_cell().unwrap(), Some(Cell::Int(0)));
    assert_eq!(r.next_cell().unwrap(), Some(Cell::Int(42)));
}

#[test]
fn explicit_policy_values_are_encoded() {
    let policy = ListPolicy {
        order: ListOrder::Ordered,
        flags: list_flags::ADD_UNIQUE | list_flags::NO_FAIL,
    };
    let stream = compile(&list_append(Some(policy), &[], 42, list_bin("xs"))).unwrap();
    let mut r = stream.reader();
    r.next_cell().unwrap(); // op
    r.read_ctx().unwrap();
    assert_eq!(r.next_cell().unwrap(), Some(Cell::Int(1)));
    assert_eq!(r.next_cell().unwrap(), Some(Cell::Int(policy.flags as i64)));
}

#[test]
fn policy_of_the_wrong_family_is_rejected() {
    let expr = ExprNode::build(
        ExprOp::ListAppend,
        None,
        Vec::new(),
        Some(Policy::Map(MapPolicy::default())),
        vec![42.into(), list_bin("xs").into()],
    );
    assert_eq!(
        compile(&expr).unwrap_err(),
        ExprError::PolicyMismatch { op: "list_append" }
    );

    let expr = ExprNode::build(
        ExprOp::Eq,
        None,
        Vec::new(),
        Some(Policy::Bit(BitPolicy::default())),
        vec![1.into(), 1.into()],
    );
    assert_eq!(
        compile(&expr).unwrap_err(),
        ExprError::PolicyMismatch { op: "eq" }
    );
}

#[test]
fn missing_return_type_is_rejected() {
    let expr = ExprNode::build(ExprOp::Bin, None, Vec::new(), None, vec!["a".into()]);
    assert_eq!(
        compile(&expr).unwrap_err(),
        ExprError::MissingReturnType { op: "bin" }
    );
}

#[test]
fn nan_literal_anywhere_in_the_tree_fails_the_compile() {
    let expr = eq(
        add(vec![float_bin("x").into(), f64::NAN.into()]),
        1.0,
    );
    assert_eq!(
        compile(&expr).unwrap_err(),
        ExprError::Wire(WireError::Encoding("NaN float"))
    );

    // Infinity is a legal sentinel, not a float failure.
    let ok = map_get_by_key_range(
        SelectReturn::COUNT,
        &[],
        "a",
        Value::Infinity,
        map_bin("m"),
    );
    assert!(compile(&ok).is_ok());
}

#[test]
fn duplicate_map_keys_in_a_literal_fail_the_compile() {
    let pairs = vec![
        (Value::Str("k".into()), Value::Int(1)),
        (Value::Str("k".into()), Value::Int(2)),
    ];
    let expr = eq(map_bin("m"), pairs);
    assert_eq!(
        compile(&expr).unwrap_err(),
        ExprError::Wire(WireError::DuplicateMapKey(1))
    );
}

#[test]
fn invalid_context_step_fails_the_compile() {
    let bad = CtxStep::map_key(Value::Wildcard);
    let expr = list_size(&[bad], list_bin("xs"));
    assert!(matches!(
        compile(&expr).unwrap_err(),
        ExprError::Wire(WireError::CtxSentinel { .. })
    ));
}

#[test]
fn nested_collection_expressions_compile_inside_out() {
    // Size of the result of appending to a nested list.
    let inner = list_append(None, &[CtxStep::list_index(0)], 7, list_bin("xs"));
    let stream = compile(&list_size(&[], inner)).unwrap();
    let mut r = stream.reader();
    assert_eq!(
        r.next_cell().unwrap(),
        Some(Cell::Op(ExprOp::ListSize.code()))
    );
    r.read_ctx().unwrap();
    assert_eq!(
        r.next_cell().unwrap(),
        Some(Cell::Op(ExprOp::ListAppend.code()))
    );
    let steps = r.read_ctx().unwrap();
    assert_eq!(steps, vec![CtxStep::list_index(0)]);
}

#[test]
fn let_var_def_compile_as_nested_nodes() {
    let expr = let_(vec![
        def_("x", add(vec![int_bin("a").into(), 1.into()])),
        gt(var("x"), 10),
    ]);
    let stream = compile(&expr).unwrap();
    let mut r = stream.reader();
    assert_eq!(r.next_cell().unwrap(), Some(Cell::Op(ExprOp::Let.code())));
    assert_eq!(r.next_cell().unwrap(), Some(Cell::Op(ExprOp::Def.code())));
    assert_eq!(r.next_cell().unwrap(), Some(Cell::Str("x")));
}

#[test]
fn cell_count_matches_a_full_walk() {
    let expr = cond(vec![
        key_exists().into(),
        list_size(&[], list_bin("xs")).into(),
        0.into(),
    ]);
    let stream = compile(&expr).unwrap();
    let mut r = stream.reader();
    let mut cells = 0;
    while r.next_cell().unwrap().is_some() {
        cells += 1;
    }
    assert_eq!(cells, stream.cell_count());
    assert_eq!(r.position(), stream.len());
}
