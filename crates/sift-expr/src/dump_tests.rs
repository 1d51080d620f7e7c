use insta::assert_snapshot;
use sift_wire::{CtxStep, StreamWriter, Value, WireError};

use super::*;

fn dumped(expr: &Expr) -> String {
    dump(&compile(expr).unwrap()).unwrap()
}

#[test]
fn dumps_a_simple_comparison() {
    let expr = eq(int_bin("a"), 11);
    assert_snapshot!(dumped(&expr), @r#"
    eq
      bin type=int
        "a"
      11
    "#);
}

#[test]
fn dumps_variadic_nodes_with_their_end_markers() {
    let expr = and_(vec![
        gt(add(vec![int_bin("a").into(), 1.into()]), 10),
        key_exists(),
    ]);
    assert_snapshot!(dumped(&expr), @r#"
    and
      gt
        add
          bin type=int
            "a"
          1
          end
        10
      key_exists
      end
    "#);
}

#[test]
fn dumps_selector_return_and_context_path() {
    let expr = map_get_by_key(
        SelectReturn::VALUE.inverted(),
        &[CtxStep::map_key("inner"), CtxStep::list_index(0).from_end()],
        "score",
        map_bin("m"),
    );
    assert_snapshot!(dumped(&expr), @r#"
    map_get_by_key select=!value ctx=[map-key("inner") list-index-from-end(0)]
      "score"
      bin type=map
        "m"
    "#);
}

#[test]
fn dumps_default_policy_and_empty_context() {
    let expr = list_append(None, &[], 42, list_bin("xs"));
    assert_snapshot!(dumped(&expr), @r#"
    list_append ctx=[] policy=(order=0 flags=0)
      42
      bin type=list
        "xs"
    "#);
}

#[test]
fn dumps_single_flag_policies() {
    let policy = HllPolicy {
        flags: hll_flags::CREATE_ONLY,
    };
    let expr = hll_init(Some(policy), 10, hll_bin("h"));
    assert_snapshot!(dumped(&expr), @r#"
    hll_init policy=(flags=1)
      10
      bin type=hll
        "h"
    "#);
}

#[test]
fn dumps_container_and_sentinel_literals() {
    let items = vec![Value::Int(1), Value::Str("two".into()), Value::Float(0.5)];
    let expr = or_(vec![
        eq(list_bin("xs"), items),
        gt(map_get_by_key_range(SelectReturn::COUNT, &[], "a", Value::Infinity, map_bin("m")), 0),
    ]);
    assert_snapshot!(dumped(&expr), @r#"
    or
      eq
        bin type=list
          "xs"
        [1, "two", 0.5]
      gt
        map_get_by_key_range select=count ctx=[]
          "a"
          inf
          bin type=map
            "m"
        0
      end
    "#);
}

#[test]
fn rejects_a_stream_that_does_not_start_with_an_operator() {
    let mut w = StreamWriter::new();
    w.push_int(1);
    let err = dump(&w.finish()).unwrap_err();
    assert_eq!(
        err,
        ExprError::MalformedStream {
            expected: "operator",
            found: sift_wire::tag::INT,
        }
    );
}

#[test]
fn rejects_an_operator_code_missing_from_the_catalog() {
    let mut w = StreamWriter::new();
    w.push_op(9999);
    let err = dump(&w.finish()).unwrap_err();
    assert_eq!(err, ExprError::UnknownOp(9999));
}

#[test]
fn rejects_a_truncated_stream() {
    let mut w = StreamWriter::new();
    w.push_op(ExprOp::Eq.code());
    let err = dump(&w.finish()).unwrap_err();
    assert!(matches!(err, ExprError::Wire(WireError::Truncated(_))));
}
