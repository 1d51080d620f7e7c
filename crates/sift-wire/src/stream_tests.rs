use super::*;

#[test]
fn int_cell_layout() {
    let mut w = StreamWriter::new();
    w.push_int(1);
    let s = w.finish();
    assert_eq!(s.as_bytes(), &[tag::INT, 0, 0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(s.cell_count(), 1);
}

#[test]
fn negative_int_cell_layout() {
    let mut w = StreamWriter::new();
    w.push_int(-1);
    let s = w.finish();
    assert_eq!(
        s.as_bytes(),
        &[tag::INT, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
    );
}

#[test]
fn bool_and_nil_cells() {
    let mut w = StreamWriter::new();
    w.push_nil();
    w.push_bool(false);
    w.push_bool(true);
    let s = w.finish();
    assert_eq!(s.as_bytes(), &[tag::NIL, tag::FALSE, tag::TRUE]);
    assert_eq!(s.cell_count(), 3);
}

#[test]
fn str_cell_layout() {
    let mut w = StreamWriter::new();
    w.push_str("ab").unwrap();
    let s = w.finish();
    assert_eq!(s.as_bytes(), &[tag::STR, 0, 0, 0, 2, b'a', b'b']);
}

#[test]
fn float_cell_layout() {
    let mut w = StreamWriter::new();
    w.push_float(1.0).unwrap();
    let s = w.finish();
    let mut expected = vec![tag::FLOAT];
    expected.extend_from_slice(&1.0f64.to_bits().to_be_bytes());
    assert_eq!(s.as_bytes(), &expected[..]);
}

#[test]
fn nan_float_rejected() {
    let mut w = StreamWriter::new();
    assert_eq!(w.push_float(f64::NAN), Err(WireError::Encoding("NaN float")));
}

#[test]
fn infinite_float_is_encodable() {
    // Only NaN lacks a wire representation; IEEE infinities pass through.
    let mut w = StreamWriter::new();
    w.push_float(f64::INFINITY).unwrap();
    w.push_float(f64::NEG_INFINITY).unwrap();
    assert_eq!(w.finish().cell_count(), 2);
}

#[test]
fn op_and_end_cells() {
    let mut w = StreamWriter::new();
    w.push_op(0x0114);
    w.push_end();
    let s = w.finish();
    assert_eq!(s.as_bytes(), &[tag::OP, 0x01, 0x14, tag::END]);
}

#[test]
fn nested_list_value() {
    let mut w = StreamWriter::new();
    w.push_value(&Value::List(vec![Value::Int(1), Value::Str("x".into())]))
        .unwrap();
    let s = w.finish();
    let expected = [
        tag::LIST,
        0,
        0,
        0,
        2,
        tag::INT,
        0,
        0,
        0,
        0,
        0,
        0,
        0,
        1,
        tag::STR,
        0,
        0,
        0,
        1,
        b'x',
    ];
    assert_eq!(s.as_bytes(), &expected);
    // header + two elements
    assert_eq!(s.cell_count(), 3);
}

#[test]
fn map_value_keeps_insertion_order() {
    let mut w = StreamWriter::new();
    w.push_value(&Value::Map(vec![
        (Value::Str("b".into()), Value::Int(2)),
        (Value::Str("a".into()), Value::Int(1)),
    ]))
    .unwrap();
    let bytes = w.finish().into_bytes();
    let b_pos = bytes.iter().position(|&x| x == b'b').unwrap();
    let a_pos = bytes.iter().position(|&x| x == b'a').unwrap();
    assert!(b_pos < a_pos);
}

#[test]
fn duplicate_map_key_rejected() {
    let mut w = StreamWriter::new();
    let err = w
        .push_value(&Value::Map(vec![
            (Value::Str("k".into()), Value::Int(1)),
            (Value::Str("k".into()), Value::Int(2)),
        ]))
        .unwrap_err();
    assert_eq!(err, WireError::DuplicateMapKey(1));
}

#[test]
fn nan_inside_container_rejected() {
    let mut w = StreamWriter::new();
    let err = w
        .push_value(&Value::List(vec![Value::List(vec![Value::Float(
            f64::NAN,
        )])]))
        .unwrap_err();
    assert_eq!(err, WireError::Encoding("NaN float"));
}

#[test]
fn empty_stream() {
    let s = StreamWriter::new().finish();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    assert_eq!(s.cell_count(), 0);
}
