//! Assertions over sheet offsets shared by robot-driven tests.

use bottom_sheet::OffsetBounds;

/// Offsets and multipliers derived from fractions pick up f32 rounding, so
/// compare them with a tolerance.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, what: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{what}: {actual} is {diff} away from {expected}, allowed {tolerance}"
    );
}

/// Assert that an offset lies within the sheet's drag range.
pub fn assert_within_bounds(offset: f32, bounds: OffsetBounds, msg: &str) {
    assert!(
        bounds.contains(offset),
        "{}: offset {} outside [{}, {}]",
        msg,
        offset,
        bounds.top,
        bounds.bottom
    );
}
