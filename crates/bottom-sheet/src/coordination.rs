//! Keeps nested content pinned to its top while the sheet can still move.
//!
//! Runs on every content-offset change reported by the nested scroll view,
//! independently of the sheet's own drag.

use bottom_sheet_graphics::Point;

/// Where the sheet currently rests relative to its drag range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SheetExtent {
    /// At or above the highest configured position.
    pub reached_max: bool,
    /// Exactly at the lowest configured position.
    pub at_min: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollCoordinator {
    last_offset: Point,
}

impl ScrollCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last accepted content offset.
    pub fn last_offset(&self) -> Point {
        self.last_offset
    }

    /// Returns the offset the nested view must be forced back to, if any.
    pub fn on_scroll(&mut self, offset: Point, extent: SheetExtent) -> Option<Point> {
        if offset.y > self.last_offset.y {
            // Content moving away from its top.
            if extent.reached_max {
                self.last_offset = offset;
                None
            } else {
                Some(self.last_offset)
            }
        } else if self.last_offset.y <= 0.0 {
            self.last_offset = Point::ZERO;
            if extent.at_min {
                None
            } else {
                Some(Point::ZERO)
            }
        } else {
            self.last_offset = offset;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAISED: SheetExtent = SheetExtent {
        reached_max: true,
        at_min: false,
    };
    const BETWEEN: SheetExtent = SheetExtent {
        reached_max: false,
        at_min: false,
    };
    const LOWERED: SheetExtent = SheetExtent {
        reached_max: false,
        at_min: true,
    };

    #[test]
    fn content_scrolls_freely_once_sheet_is_raised() {
        let mut coordinator = ScrollCoordinator::new();
        assert_eq!(coordinator.on_scroll(Point::new(0.0, 40.0), RAISED), None);
        assert_eq!(coordinator.last_offset(), Point::new(0.0, 40.0));
        assert_eq!(coordinator.on_scroll(Point::new(0.0, 25.0), RAISED), None);
        assert_eq!(coordinator.last_offset(), Point::new(0.0, 25.0));
    }

    #[test]
    fn content_cannot_leave_top_while_sheet_can_grow() {
        let mut coordinator = ScrollCoordinator::new();
        assert_eq!(
            coordinator.on_scroll(Point::new(0.0, 12.0), BETWEEN),
            Some(Point::ZERO)
        );
        assert_eq!(coordinator.last_offset(), Point::ZERO);
    }

    #[test]
    fn overscroll_past_top_is_pinned_unless_sheet_is_lowered() {
        let mut coordinator = ScrollCoordinator::new();
        assert_eq!(
            coordinator.on_scroll(Point::new(0.0, -8.0), BETWEEN),
            Some(Point::ZERO)
        );
        assert_eq!(coordinator.on_scroll(Point::new(0.0, -8.0), LOWERED), None);
        assert_eq!(coordinator.last_offset(), Point::ZERO);
    }

    #[test]
    fn scrolled_content_returns_towards_top() {
        let mut coordinator = ScrollCoordinator::new();
        coordinator.on_scroll(Point::new(0.0, 90.0), RAISED);
        assert_eq!(coordinator.on_scroll(Point::new(0.0, 30.0), BETWEEN), None);
        assert_eq!(coordinator.last_offset(), Point::new(0.0, 30.0));
    }

    #[test]
    fn oscillation_near_zero_never_escapes_top_below_max() {
        let mut coordinator = ScrollCoordinator::new();
        let mut content = Point::ZERO;
        for y in [0.5, -0.5, 1.0, -2.0, 0.25, 0.0, -0.1, 3.0] {
            let reported = Point::new(0.0, y);
            content = coordinator.on_scroll(reported, BETWEEN).unwrap_or(reported);
            assert_eq!(content, Point::ZERO, "content escaped top at {y}");
        }
        assert_eq!(content, Point::ZERO);
    }
}
