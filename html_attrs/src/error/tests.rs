//! Unit tests for error construction and display.

use rstest::rstest;

use super::{HtmlAttrsError, KeyPath, Operand};
use crate::{AttrValue, ValueKind, attrs};

#[rstest]
#[case::target_wrong(attrs!({ a: 1 }), attrs!([1]), Operand::Target, ValueKind::List)]
#[case::other_wrong(attrs!("x"), attrs!({ a: 1 }), Operand::Other, ValueKind::Text)]
fn blames_the_operand_with_the_wrong_shape(
    #[case] other: AttrValue,
    #[case] target: AttrValue,
    #[case] side: Operand,
    #[case] found: ValueKind,
) {
    let err = HtmlAttrsError::type_mismatch(ValueKind::Map, &other, &target, &KeyPath::root());
    match err {
        HtmlAttrsError::TypeMismatch {
            side: actual_side,
            found: actual_found,
            expected,
            ..
        } => {
            assert_eq!(actual_side, side);
            assert_eq!(actual_found, found);
            assert_eq!(expected, ValueKind::Map);
        }
        other_err => panic!("expected TypeMismatch, got {other_err:?}"),
    }
}

#[rstest]
fn type_mismatch_display_names_side_and_path() {
    let path: KeyPath = ["data", "deep"].into_iter().collect();
    let err = HtmlAttrsError::type_mismatch(ValueKind::List, &attrs!([1]), &attrs!("x"), &path);
    assert_eq!(
        err.to_string(),
        "expected target to be a sequence or nil, found text at data.deep"
    );
}

#[rstest]
fn root_path_displays_placeholder() {
    assert_eq!(KeyPath::root().to_string(), "<root>");
    assert!(KeyPath::root().segments().is_empty());
}

#[rstest]
fn collected_path_keeps_segment_order() {
    let path: KeyPath = ["data", "deep"].into_iter().collect();
    assert_eq!(path.segments(), ["data", "deep"]);
}

#[rstest]
fn config_errors_round_trip_through_figment() {
    let original = figment::Error::from("bad toml");
    let err = HtmlAttrsError::from(original);
    assert!(matches!(err, HtmlAttrsError::Config(_)));
    let back = figment::Error::from(err);
    assert!(back.to_string().contains("bad toml"));
}

#[rstest]
fn non_config_errors_become_figment_messages() {
    let err = HtmlAttrsError::InvalidMergePolicy {
        found: ValueKind::Number,
    };
    let figment_err = figment::Error::from(err);
    assert!(figment_err.to_string().contains("found a number"));
}
