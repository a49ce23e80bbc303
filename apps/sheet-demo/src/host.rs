//! Console-backed host views.

use std::cell::{Cell, RefCell};

use bottom_sheet::{NestedScroll, SheetSurface};
use bottom_sheet_animation::{AnimationSpec, OffsetAnimator};
use bottom_sheet_graphics::Point;

const FRAME_NANOS: u64 = 16_666_667;

/// Sheet surface that animates settles with an [`OffsetAnimator`] and
/// prints what a renderer would draw.
pub struct ConsoleSheet {
    container_height: f32,
    animator: RefCell<OffsetAnimator>,
    frame_time_nanos: Cell<u64>,
}

impl ConsoleSheet {
    pub fn new(container_height: f32) -> Self {
        Self {
            container_height,
            animator: RefCell::new(OffsetAnimator::new(container_height)),
            frame_time_nanos: Cell::new(0),
        }
    }

    pub fn offset(&self) -> f32 {
        self.animator.borrow().value()
    }

    /// Runs frames until the running transition settles, printing samples.
    pub fn settle(&self) {
        let mut frames = 0;
        while self.animator.borrow().is_running() {
            let time = self.frame_time_nanos.get() + FRAME_NANOS;
            self.frame_time_nanos.set(time);
            let value = self.animator.borrow_mut().on_frame(time);
            frames += 1;
            if frames % 4 == 0 {
                println!("      frame {frames:>2}: offset {value:>7.1}");
            }
        }
        if frames > 0 {
            println!("      settled at {:.1} after {frames} frames", self.offset());
        }
    }
}

impl SheetSurface for ConsoleSheet {
    fn container_height(&self) -> f32 {
        self.container_height
    }

    fn apply_offset(&self, offset: f32, transition: Option<AnimationSpec>) {
        let mut animator = self.animator.borrow_mut();
        match transition {
            Some(spec) => {
                println!(
                    "    animate {:.1} -> {offset:.1} over {} ms",
                    animator.value(),
                    spec.total_millis()
                );
                animator.animate_to(offset, spec);
            }
            None => animator.snap_to(offset),
        }
    }
}

/// A list of fixed-height rows, like a plain table of "Cell N" rows.
pub struct TableContent {
    max_offset: f32,
    offset: Cell<Point>,
    user_driven: Cell<bool>,
}

impl TableContent {
    pub fn new(rows: usize, row_height: f32, viewport_height: f32) -> Self {
        Self {
            max_offset: (rows as f32 * row_height - viewport_height).max(0.0),
            offset: Cell::new(Point::ZERO),
            user_driven: Cell::new(false),
        }
    }

    pub fn set_user_driven(&self, user_driven: bool) {
        self.user_driven.set(user_driven);
    }

    /// Native scroll of the table, bounced slightly past its top when asked.
    pub fn scroll_natively_to(&self, y: f32) {
        self.offset.set(Point::new(0.0, y.min(self.max_offset)));
    }

    pub fn first_visible_row(&self, row_height: f32) -> usize {
        (self.offset.get().y.max(0.0) / row_height) as usize
    }
}

impl NestedScroll for TableContent {
    fn offset(&self) -> Point {
        self.offset.get()
    }

    fn is_user_driven(&self) -> bool {
        self.user_driven.get()
    }

    fn set_offset(&self, offset: Point) {
        self.offset.set(offset.with_y(offset.y.min(self.max_offset)));
    }
}
