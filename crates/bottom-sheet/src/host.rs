//! Seams to the host's view system.
//!
//! Both collaborators are shared with the host and held weakly by the
//! controller, so methods take `&self`; implementations use interior
//! mutability the way scroll state holders do.

use bottom_sheet_animation::AnimationSpec;
use bottom_sheet_graphics::Point;

/// The constrained view the sheet offset is applied to.
pub trait SheetSurface {
    /// Height of the container the sheet lives in. Read on every offset
    /// computation.
    fn container_height(&self) -> f32;

    /// Move the sheet. `None` applies immediately (continuous drag);
    /// `Some(spec)` settles with the given transition.
    fn apply_offset(&self, offset: f32, transition: Option<AnimationSpec>);
}

/// Scrollable content hosted inside the sheet.
pub trait NestedScroll {
    fn offset(&self) -> Point;

    /// The view's own pan is tracking, dragging or decelerating.
    fn is_user_driven(&self) -> bool;

    fn set_offset(&self, offset: Point);

    fn set_offset_y(&self, y: f32) {
        self.set_offset(self.offset().with_y(y));
    }
}
