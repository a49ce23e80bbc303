use super::*;

const FRAME_NANOS: u64 = 16_666_667;

#[test]
fn easing_curves_pin_endpoints() {
    for easing in [Easing::Linear, Easing::FastOutSlowIn] {
        assert_eq!(easing.transform(0.0), 0.0, "{easing:?} at 0");
        assert_eq!(easing.transform(1.0), 1.0, "{easing:?} at 1");
    }
}

#[test]
fn fast_out_slow_in_runs_ahead_of_linear() {
    let eased = Easing::FastOutSlowIn.transform(0.5);
    assert!(eased > 0.5, "expected eased midpoint above 0.5, got {eased}");
}

#[test]
fn fast_out_slow_in_never_runs_backwards() {
    let mut previous = 0.0;
    for step in 1..=50 {
        let eased = Easing::FastOutSlowIn.transform(step as f32 / 50.0);
        assert!(eased >= previous, "dipped at step {step}: {eased} < {previous}");
        previous = eased;
    }
}

#[test]
fn default_spec_is_short_material_settle() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowIn);
    assert_eq!(spec.with_delay(50).total_millis(), 350);
}

#[test]
fn animator_interpolates_and_settles() {
    let mut animator = OffsetAnimator::new(640.0);
    animator.animate_to(160.0, AnimationSpec::linear(100));
    assert!(animator.is_running());

    let base = 5_000_000_000u64;
    assert_eq!(animator.on_frame(base), 640.0);

    let halfway = animator.on_frame(base + 50_000_000);
    assert!((halfway - 400.0).abs() < 0.01, "got {halfway}");

    let mut frame = base + 50_000_000;
    for _ in 0..10 {
        frame += FRAME_NANOS;
        animator.on_frame(frame);
    }
    assert_eq!(animator.value(), 160.0);
    assert!(!animator.is_running());
}

#[test]
fn animator_honours_delay() {
    let mut animator = OffsetAnimator::new(0.0);
    animator.animate_to(100.0, AnimationSpec::linear(100).with_delay(40));
    animator.on_frame(0);
    assert_eq!(animator.on_frame(30_000_000), 0.0);
    let value = animator.on_frame(90_000_000);
    assert!((value - 50.0).abs() < 0.01, "got {value}");
}

#[test]
fn retarget_starts_from_sampled_value() {
    let mut animator = OffsetAnimator::new(0.0);
    animator.animate_to(100.0, AnimationSpec::linear(100));
    animator.on_frame(0);
    animator.on_frame(50_000_000);

    animator.animate_to(0.0, AnimationSpec::linear(100));
    assert_eq!(animator.on_frame(60_000_000), 50.0);
    let value = animator.on_frame(110_000_000);
    assert!((value - 25.0).abs() < 0.01, "got {value}");
}

#[test]
fn snap_cancels_running_transition() {
    let mut animator = OffsetAnimator::new(0.0);
    animator.animate_to(100.0, AnimationSpec::default());
    animator.snap_to(42.0);
    assert!(!animator.is_running());
    assert_eq!(animator.on_frame(1_000_000_000), 42.0);
    assert_eq!(animator.target(), 42.0);
}
