//! Decides whether a drag delta moves the sheet or scrolls nested content.
//!
//! When scroll lock is on and the sheet is fully raised, a pan that starts
//! outside the nested scroll view keeps driving the content instead of
//! pulling the sheet down while the content is still scrolled. The nested
//! view's own pan scrolls it natively, so deltas are only forwarded while
//! that view is *not* being driven by the user.

use crate::geometry::OffsetBounds;
use crate::gesture::DragDirection;

/// Nested scroll state read once per delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NestedScrollSnapshot {
    pub offset_y: f32,
    /// The nested view is tracking, dragging or decelerating on its own.
    pub user_driven: bool,
}

/// Everything one arbitration needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArbitrationInput {
    pub delta: f32,
    pub sheet_offset: f32,
    pub bounds: OffsetBounds,
    pub scroll_lock_enabled: bool,
    pub nested: Option<NestedScrollSnapshot>,
}

/// Where a delta goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arbitration {
    /// Write this content offset to the nested scroll view; the sheet stays.
    ForwardToScroll { offset_y: f32 },
    /// Apply this offset to the sheet without transition.
    MoveSheet { offset: f32 },
    /// Nested content still has room to scroll back to its top.
    Suppressed,
}

pub fn arbitrate(input: &ArbitrationInput) -> Arbitration {
    if let Some(nested) = forwarding_target(input) {
        return Arbitration::ForwardToScroll {
            offset_y: (nested.offset_y - input.delta).max(0.0),
        };
    }

    if !is_available_scroll(input.delta, input.nested) {
        return Arbitration::Suppressed;
    }

    Arbitration::MoveSheet {
        offset: input.bounds.clamp(input.sheet_offset + input.delta),
    }
}

/// Nested view the delta should be forwarded to, if scroll lock applies.
fn forwarding_target(input: &ArbitrationInput) -> Option<NestedScrollSnapshot> {
    if !input.scroll_lock_enabled {
        return None;
    }
    let nested = input.nested.filter(|nested| !nested.user_driven)?;
    if input.sheet_offset != input.bounds.top {
        return None;
    }
    let direction = DragDirection::from_delta(input.delta);
    (nested.offset_y > 0.0 || direction == DragDirection::Up).then_some(nested)
}

/// Whether the sheet may move by `delta` given what the nested view is doing.
///
/// Pulling down while the user drives scrolled content leaves the delta to
/// the content until it is back at its top.
pub fn is_available_scroll(delta: f32, nested: Option<NestedScrollSnapshot>) -> bool {
    match nested {
        Some(nested) if nested.user_driven => match DragDirection::from_delta(delta) {
            DragDirection::Up => true,
            DragDirection::Down => nested.offset_y <= 0.0,
        },
        _ => true,
    }
}

#[cfg(test)]
#[path = "tests/arbitration_tests.rs"]
mod tests;
