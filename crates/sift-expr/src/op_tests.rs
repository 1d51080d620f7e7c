use std::collections::HashSet;

use super::*;

#[test]
fn codes_round_trip_for_every_catalog_entry() {
    for &op in ExprOp::ALL {
        assert_eq!(ExprOp::from_code(op.code()), Some(op));
    }
}

#[test]
fn codes_and_names_are_unique() {
    let mut codes = HashSet::new();
    let mut names = HashSet::new();
    for &op in ExprOp::ALL {
        assert!(codes.insert(op.code()), "duplicate code {}", op.code());
        assert!(names.insert(op.info().name), "duplicate name {}", op.info().name);
    }
}

#[test]
fn unassigned_codes_decode_to_none() {
    assert_eq!(ExprOp::from_code(9), None);
    assert_eq!(ExprOp::from_code(255), None);
    assert_eq!(ExprOp::from_code(u16::MAX), None);
}

#[test]
fn every_variadic_operator_requires_at_least_one_argument() {
    for &op in ExprOp::ALL {
        if let Arity::Variadic { min } = op.info().arity {
            assert!(min >= 1, "{} allows zero arguments", op.info().name);
        }
    }
}

#[test]
fn control_operators_have_their_documented_minimums() {
    assert_eq!(ExprOp::Cond.info().arity, Arity::Variadic { min: 3 });
    assert_eq!(ExprOp::Let.info().arity, Arity::Variadic { min: 2 });
}

#[test]
fn arity_accepts() {
    assert!(Arity::Fixed(2).accepts(2));
    assert!(!Arity::Fixed(2).accepts(1));
    assert!(!Arity::Fixed(2).accepts(3));
    assert!(Arity::Variadic { min: 1 }.accepts(1));
    assert!(Arity::Variadic { min: 1 }.accepts(7));
    assert!(!Arity::Variadic { min: 3 }.accepts(2));
}

#[test]
fn arity_display_names_the_shape() {
    assert_eq!(Arity::Fixed(2).to_string(), "exactly 2");
    assert_eq!(Arity::Variadic { min: 3 }.to_string(), "at least 3");
}

#[test]
fn metadata_slots_follow_family_shape() {
    // Bin readers carry a value type and nothing else.
    let bin = ExprOp::Bin.info();
    assert_eq!(bin.rtype, RtypeSlot::Value);
    assert!(!bin.ctx);
    assert_eq!(bin.policy, PolicySlot::None);

    // Collection reads carry a selector return plus a context path.
    let read = ExprOp::MapGetByKey.info();
    assert_eq!(read.rtype, RtypeSlot::Select);
    assert!(read.ctx);
    assert_eq!(read.policy, PolicySlot::None);

    // List mutators carry a context path plus the list write policy.
    let append = ExprOp::ListAppend.info();
    assert_eq!(append.rtype, RtypeSlot::None);
    assert!(append.ctx);
    assert_eq!(append.policy, PolicySlot::List);

    // Bit mutators carry only the bit write policy.
    let resize = ExprOp::BitResize.info();
    assert!(!resize.ctx);
    assert_eq!(resize.policy, PolicySlot::Bit);

    // Plain operators carry nothing.
    let eq = ExprOp::Eq.info();
    assert_eq!(eq.rtype, RtypeSlot::None);
    assert!(!eq.ctx);
    assert_eq!(eq.policy, PolicySlot::None);
}

#[test]
fn select_return_codes_round_trip() {
    for base in [
        SelectBase::Nothing,
        SelectBase::Index,
        SelectBase::ReverseIndex,
        SelectBase::Rank,
        SelectBase::ReverseRank,
        SelectBase::Count,
        SelectBase::Key,
        SelectBase::Value,
        SelectBase::KeyValue,
        SelectBase::Exists,
    ] {
        let plain = SelectReturn::new(base);
        assert_eq!(SelectReturn::from_code(plain.code()).unwrap(), plain);
        let inverted = plain.inverted();
        assert_eq!(SelectReturn::from_code(inverted.code()).unwrap(), inverted);
        assert_ne!(plain.code(), inverted.code());
    }
}

#[test]
fn select_return_rejects_unknown_codes() {
    assert_eq!(
        SelectReturn::from_code(9),
        Err(ExprError::UnknownReturnType(9))
    );
    assert_eq!(
        SelectReturn::from_code(-1),
        Err(ExprError::UnknownReturnType(-1))
    );
}

#[test]
fn expr_type_codes_round_trip() {
    for code in 0..=9 {
        let t = ExprType::from_code(code).unwrap();
        assert_eq!(t.code(), code);
    }
    assert_eq!(ExprType::from_code(10), Err(ExprError::UnknownReturnType(10)));
}
