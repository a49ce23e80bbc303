//! Scripted gestures against a controller wired to recording fakes.
//!
//! ```
//! use bottom_sheet::{Position, SheetConfig};
//! use bottom_sheet_testing::SheetRobot;
//!
//! let mut robot = SheetRobot::new(800.0, SheetConfig::default());
//! robot.drag(&[-120.0, -120.0]);
//! assert_eq!(robot.current_position(), Position::Middle);
//! ```

use std::rc::Rc;

use bottom_sheet::{
    BottomSheetController, GesturePhase, GestureSample, NestedScroll, Position, SheetConfig,
};
use bottom_sheet_graphics::Point;

use crate::testing::{RecordingScroll, RecordingSurface};

/// Owns a controller plus its fakes and replays gestures one sample at a time.
pub struct SheetRobot {
    controller: BottomSheetController,
    surface: Rc<RecordingSurface>,
    scroll: Rc<RecordingScroll>,
    translation: f32,
}

impl SheetRobot {
    /// Controller bound to a surface of `container_height`, no nested scroll.
    pub fn new(container_height: f32, config: SheetConfig) -> Self {
        let surface = Rc::new(RecordingSurface::new(container_height));
        let mut controller = BottomSheetController::new(config);
        controller.bind_surface(&surface);
        Self {
            controller,
            surface,
            scroll: Rc::new(RecordingScroll::new()),
            translation: 0.0,
        }
    }

    /// Same as [`SheetRobot::new`] with the nested scroll view bound.
    pub fn with_nested_scroll(container_height: f32, config: SheetConfig) -> Self {
        let mut robot = Self::new(container_height, config);
        robot.controller.bind_nested_scroll(&robot.scroll);
        robot
    }

    pub fn controller(&self) -> &BottomSheetController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut BottomSheetController {
        &mut self.controller
    }

    pub fn surface(&self) -> &RecordingSurface {
        &self.surface
    }

    pub fn scroll(&self) -> &RecordingScroll {
        &self.scroll
    }

    pub fn current_position(&self) -> Position {
        self.controller.current_position()
    }

    pub fn offset(&self) -> f32 {
        self.controller.state().raw_offset()
    }

    pub fn content_offset(&self) -> f32 {
        self.scroll.offset().y
    }

    pub fn press(&mut self) {
        self.translation = 0.0;
        self.controller.on_gesture(GestureSample::start());
    }

    /// Moves the finger by `delta` relative to the previous sample.
    pub fn move_by(&mut self, delta: f32) {
        self.translation += delta;
        self.controller
            .on_gesture(GestureSample::vertical(GesturePhase::Move, self.translation));
    }

    /// Releases after moving a further `delta`.
    pub fn release_by(&mut self, delta: f32) {
        self.finish(GesturePhase::End, delta);
    }

    pub fn cancel_by(&mut self, delta: f32) {
        self.finish(GesturePhase::Cancel, delta);
    }

    /// Press, one move per entry in `deltas`, release in place.
    pub fn drag(&mut self, deltas: &[f32]) {
        self.press();
        for delta in deltas {
            self.move_by(*delta);
        }
        self.release_by(0.0);
    }

    /// Simulates the nested view scrolling itself and notifies the controller.
    pub fn scroll_content_to(&mut self, y: f32) {
        self.scroll.scroll_to(y);
        self.controller.on_nested_scroll();
    }

    fn finish(&mut self, phase: GesturePhase, delta: f32) {
        self.translation += delta;
        let sample = GestureSample::new(phase, Point::new(0.0, self.translation));
        log::trace!("robot release {sample:?}");
        self.controller.on_gesture(sample);
        self.translation = 0.0;
    }
}
