//! Turns a stream of cumulative pan translations into incremental deltas.

use bottom_sheet_graphics::Point;

/// Recogniser phase attached to every sample.
///
/// Anything other than `Start` and `Move` ends the drag; a cancelled gesture
/// settles exactly like a release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Start,
    Move,
    End,
    Cancel,
}

impl GesturePhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GesturePhase::Start | GesturePhase::Move)
    }
}

/// One sample from the gesture source: phase plus translation since the
/// gesture began, in container coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    pub translation: Point,
}

impl GestureSample {
    pub fn new(phase: GesturePhase, translation: Point) -> Self {
        Self { phase, translation }
    }

    pub fn start() -> Self {
        Self::new(GesturePhase::Start, Point::ZERO)
    }

    /// Vertical-only sample.
    pub fn vertical(phase: GesturePhase, y: f32) -> Self {
        Self::new(phase, Point::new(0.0, y))
    }
}

/// Pan direction of a delta. Negative deltas move the finger up, revealing
/// more of the sheet; zero counts as down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragDirection {
    Up,
    Down,
}

impl DragDirection {
    pub fn from_delta(delta: f32) -> Self {
        if delta < 0.0 {
            DragDirection::Up
        } else {
            DragDirection::Down
        }
    }
}

/// What a sample means for the sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragStep {
    Started,
    Moved { delta: f32 },
    Released { delta: f32 },
}

/// Sequential accumulator for a single gesture stream.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragAccumulator {
    last_sample: Point,
}

impl DragAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last cumulative translation seen.
    pub fn last_sample(&self) -> Point {
        self.last_sample
    }

    pub fn feed(&mut self, sample: GestureSample) -> DragStep {
        match sample.phase {
            GesturePhase::Start => {
                self.last_sample = sample.translation;
                DragStep::Started
            }
            GesturePhase::Move => {
                let delta = sample.translation.y - self.last_sample.y;
                self.last_sample = sample.translation;
                DragStep::Moved { delta }
            }
            GesturePhase::End | GesturePhase::Cancel => {
                let delta = sample.translation.y - self.last_sample.y;
                self.last_sample = Point::ZERO;
                DragStep::Released { delta }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_resets_to_current_translation() {
        let mut drag = DragAccumulator::new();
        drag.feed(GestureSample::vertical(GesturePhase::Move, 40.0));
        assert_eq!(
            drag.feed(GestureSample::vertical(GesturePhase::Start, 3.0)),
            DragStep::Started
        );
        assert_eq!(drag.last_sample(), Point::new(0.0, 3.0));
    }

    #[test]
    fn moves_emit_incremental_deltas() {
        let mut drag = DragAccumulator::new();
        drag.feed(GestureSample::start());
        let deltas: Vec<DragStep> = [10.0, 25.0, 5.0]
            .into_iter()
            .map(|y| drag.feed(GestureSample::vertical(GesturePhase::Move, y)))
            .collect();
        assert_eq!(
            deltas,
            vec![
                DragStep::Moved { delta: 10.0 },
                DragStep::Moved { delta: 15.0 },
                DragStep::Moved { delta: -20.0 },
            ]
        );
    }

    #[test]
    fn horizontal_motion_is_ignored() {
        let mut drag = DragAccumulator::new();
        drag.feed(GestureSample::start());
        let step = drag.feed(GestureSample::new(GesturePhase::Move, Point::new(90.0, 4.0)));
        assert_eq!(step, DragStep::Moved { delta: 4.0 });
    }

    #[test]
    fn release_and_cancel_report_final_delta_and_reset() {
        for phase in [GesturePhase::End, GesturePhase::Cancel] {
            let mut drag = DragAccumulator::new();
            drag.feed(GestureSample::start());
            drag.feed(GestureSample::vertical(GesturePhase::Move, -30.0));
            let step = drag.feed(GestureSample::vertical(phase, -42.0));
            assert_eq!(step, DragStep::Released { delta: -12.0 });
            assert_eq!(drag.last_sample(), Point::ZERO);
            assert!(phase.is_terminal());
        }
    }

    #[test]
    fn zero_delta_counts_as_down() {
        assert_eq!(DragDirection::from_delta(0.0), DragDirection::Down);
        assert_eq!(DragDirection::from_delta(-0.5), DragDirection::Up);
        assert_eq!(DragDirection::from_delta(2.0), DragDirection::Down);
    }
}
