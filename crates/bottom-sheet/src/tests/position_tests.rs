use super::*;

#[test]
fn presets_have_fixed_fractions() {
    assert_eq!(Position::Bottom.fraction(), 0.2);
    assert_eq!(Position::Middle.fraction(), 0.5);
    assert_eq!(Position::Top.fraction(), 0.8);
    assert_eq!(Position::Custom(1.0).fraction(), 1.0);
}

#[test]
fn positions_compare_by_fraction_only() {
    assert_eq!(Position::Custom(0.5), Position::Middle);
    assert!(Position::Bottom < Position::Middle);
    assert!(Position::Custom(1.0) > Position::Top);
}

#[test]
fn min_and_max_pick_extremes_regardless_of_order() {
    let set = PositionSet::new([Position::Middle, Position::Custom(1.0), Position::Bottom]);
    assert_eq!(set.min(), Some(Position::Bottom));
    assert_eq!(set.max(), Some(Position::Custom(1.0)));
}

#[test]
fn equal_fractions_resolve_to_first_entry() {
    let set = PositionSet::new([Position::Custom(0.2), Position::Bottom]);
    let min = set.min().expect("non-empty set");
    let max = set.max().expect("non-empty set");
    assert!(matches!(min, Position::Custom(_)));
    assert!(matches!(max, Position::Custom(_)));
    assert_eq!(min, max);
}

#[test]
fn empty_set_has_no_extremes() {
    let set = PositionSet::new([]);
    assert!(set.is_empty());
    assert_eq!(set.min(), None);
    assert_eq!(set.max(), None);
}

#[test]
fn default_set_is_bottom_middle_top() {
    let set = PositionSet::default();
    let fractions: Vec<f32> = set.iter().map(Position::fraction).collect();
    assert_eq!(fractions, vec![0.2, 0.5, 0.8]);
}

#[test]
fn try_new_requires_two_positions() {
    assert_eq!(
        PositionSet::try_new([Position::Top]),
        Err(PositionSetError::TooFewPositions { count: 1 })
    );
}

#[test]
fn try_new_rejects_fractions_outside_unit_range() {
    let err = PositionSet::try_new([Position::Bottom, Position::Custom(1.5)])
        .expect_err("1.5 is out of range");
    assert_eq!(
        err,
        PositionSetError::FractionOutOfRange {
            index: 1,
            fraction: 1.5
        }
    );
    assert!(err.to_string().contains("#1"));

    assert!(PositionSet::try_new([Position::Custom(f32::NAN), Position::Top]).is_err());
}

#[test]
fn try_new_accepts_full_range() {
    let set = PositionSet::try_new([Position::Custom(0.0), Position::Custom(1.0)])
        .expect("endpoints are valid");
    assert_eq!(set.len(), 2);
}
