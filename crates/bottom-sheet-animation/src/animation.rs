//! Time-based offset transitions with easing curves.

/// Easing curves applied to the linear progress of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Material standard curve. Default settle curve.
    FastOutSlowIn,
}

impl Easing {
    const FAST_OUT_SLOW_IN: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);

    /// Map linear progress in `[0, 1]` to eased progress.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => fraction,
            Easing::FastOutSlowIn => Self::FAST_OUT_SLOW_IN.y_at(fraction),
        }
    }
}

/// CSS-style cubic bezier from `(0, 0)` to `(1, 1)` with two control points.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    const ITERATIONS: usize = 24;

    const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn component(p1: f32, p2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    /// Curve height at horizontal position `x`.
    ///
    /// `x(t)` is monotonic for control points inside the unit square, so the
    /// parameter is found by bisection.
    fn y_at(&self, x: f32) -> f32 {
        if x <= 0.0 || x >= 1.0 {
            return x;
        }
        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        for _ in 0..Self::ITERATIONS {
            let mid = 0.5 * (low + high);
            if Self::component(self.x1, self.x2, mid) < x {
                low = mid;
            } else {
                high = mid;
            }
        }
        Self::component(self.y1, self.y2, 0.5 * (low + high))
    }
}

/// Transition specification combining duration and easing.
///
/// This is the sheet's `transitionDuration` knob: the core hands it to the
/// host together with the target offset whenever a position is committed
/// with animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Total time from start to settle, delay included.
    pub fn total_millis(&self) -> u64 {
        self.delay_millis + self.duration_millis
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// Frame-driven tween of a single offset value.
///
/// Hosts call [`OffsetAnimator::animate_to`] from their `apply_offset`
/// implementation and [`OffsetAnimator::on_frame`] from their frame clock.
/// The first frame after a retarget pins the start time, so frame timestamps
/// only need to be monotonic, not zero-based.
#[derive(Debug, Clone)]
pub struct OffsetAnimator {
    current: f32,
    start: f32,
    target: f32,
    spec: Option<AnimationSpec>,
    start_time_nanos: Option<u64>,
}

impl OffsetAnimator {
    pub fn new(initial: f32) -> Self {
        Self {
            current: initial,
            start: initial,
            target: initial,
            spec: None,
            start_time_nanos: None,
        }
    }

    /// Current sampled value.
    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether a transition is still in flight.
    pub fn is_running(&self) -> bool {
        self.spec.is_some()
    }

    /// Start a transition from the current value towards `target`.
    pub fn animate_to(&mut self, target: f32, spec: AnimationSpec) {
        self.start = self.current;
        self.target = target;
        self.spec = Some(spec);
        self.start_time_nanos = None;
    }

    /// Jump to `target` immediately, cancelling any running transition.
    pub fn snap_to(&mut self, target: f32) {
        self.current = target;
        self.start = target;
        self.target = target;
        self.spec = None;
        self.start_time_nanos = None;
    }

    /// Advance to `frame_time_nanos` and return the sampled value.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> f32 {
        let Some(spec) = self.spec else {
            return self.current;
        };

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let delay_nanos = spec.delay_millis * 1_000_000;
        if elapsed_nanos < delay_nanos {
            return self.current;
        }

        let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
        let linear_progress =
            ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0);

        if linear_progress >= 1.0 {
            log::trace!("offset transition settled at {}", self.target);
            self.snap_to(self.target);
        } else {
            let eased = spec.easing.transform(linear_progress);
            self.current = self.start + (self.target - self.start) * eased;
        }
        self.current
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
