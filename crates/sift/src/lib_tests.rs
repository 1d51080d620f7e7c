use std::sync::Arc;
use std::thread;

use super::*;

fn sample_filter() -> Expr {
    // name == "alice" && (score + bonus > 100 || tags contains "vip")
    and_(vec![
        eq(str_bin("name"), "alice"),
        or_(vec![
            gt(
                add(vec![int_bin("score").into(), int_bin("bonus").into()]),
                100,
            ),
            gt(
                list_get_by_value(SelectReturn::COUNT, &[], "vip", list_bin("tags")),
                0,
            ),
        ]),
    ])
}

#[test]
fn end_to_end_compile_walks_cleanly() {
    let stream = compile(&sample_filter()).unwrap();
    let mut r = stream.reader();
    while r.next_cell().unwrap().is_some() {}
    assert_eq!(r.position(), stream.len());

    let text = dump(&stream).unwrap();
    assert!(text.starts_with("and\n"));
    assert!(text.contains("list_get_by_value select=count"));
}

#[test]
fn construction_errors_surface_through_the_facade() {
    assert!(matches!(
        compile(&add(Vec::new())),
        Err(ExprError::Arity { op: "add", .. })
    ));
    assert!(matches!(
        compile(&eq(float_bin("x"), f64::NAN)),
        Err(ExprError::Wire(WireError::Encoding(_)))
    ));
}

#[test]
fn concurrent_compiles_of_a_shared_tree_are_byte_identical() {
    let tree = Arc::new(sample_filter());
    let reference = compile(&tree).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let tree = Arc::clone(&tree);
            thread::spawn(move || {
                let mut streams = Vec::new();
                for _ in 0..100 {
                    streams.push(compile(&tree).unwrap());
                }
                streams
            })
        })
        .collect();

    for handle in handles {
        for stream in handle.join().unwrap() {
            assert_eq!(stream.as_bytes(), reference.as_bytes());
        }
    }
}
