//! Recording fakes for the host collaborators.

use std::cell::{Cell, RefCell};

use bottom_sheet::{NestedScroll, SheetSurface};
use bottom_sheet_animation::AnimationSpec;
use bottom_sheet_graphics::Point;

/// One `apply_offset` call seen by [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppliedOffset {
    pub offset: f32,
    pub transition: Option<AnimationSpec>,
}

impl AppliedOffset {
    pub fn is_animated(&self) -> bool {
        self.transition.is_some()
    }
}

/// Constrained view that records every offset it is asked to apply.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    container_height: Cell<f32>,
    applied: RefCell<Vec<AppliedOffset>>,
}

impl RecordingSurface {
    pub fn new(container_height: f32) -> Self {
        Self {
            container_height: Cell::new(container_height),
            applied: RefCell::new(Vec::new()),
        }
    }

    pub fn set_container_height(&self, height: f32) {
        self.container_height.set(height);
    }

    pub fn applied(&self) -> Vec<AppliedOffset> {
        self.applied.borrow().clone()
    }

    pub fn last_applied(&self) -> Option<AppliedOffset> {
        self.applied.borrow().last().copied()
    }

    pub fn clear(&self) {
        self.applied.borrow_mut().clear();
    }
}

impl SheetSurface for RecordingSurface {
    fn container_height(&self) -> f32 {
        self.container_height.get()
    }

    fn apply_offset(&self, offset: f32, transition: Option<AnimationSpec>) {
        self.applied
            .borrow_mut()
            .push(AppliedOffset { offset, transition });
    }
}

/// Nested scroll view with a settable content offset.
///
/// Offsets written by the controller are recorded separately from offsets
/// the test sets to simulate the user scrolling.
#[derive(Debug, Default)]
pub struct RecordingScroll {
    offset: Cell<Point>,
    user_driven: Cell<bool>,
    writes: RefCell<Vec<Point>>,
}

impl RecordingScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates native scrolling without recording a controller write.
    pub fn scroll_to(&self, y: f32) {
        self.offset.set(self.offset.get().with_y(y));
    }

    pub fn set_user_driven(&self, user_driven: bool) {
        self.user_driven.set(user_driven);
    }

    pub fn writes(&self) -> Vec<Point> {
        self.writes.borrow().clone()
    }
}

impl NestedScroll for RecordingScroll {
    fn offset(&self) -> Point {
        self.offset.get()
    }

    fn is_user_driven(&self) -> bool {
        self.user_driven.get()
    }

    fn set_offset(&self, offset: Point) {
        self.writes.borrow_mut().push(offset);
        self.offset.set(offset);
    }
}
