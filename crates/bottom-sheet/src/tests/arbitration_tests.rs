use super::*;

const BOUNDS: OffsetBounds = OffsetBounds {
    top: 160.0,
    bottom: 640.0,
};

fn input(delta: f32, sheet_offset: f32) -> ArbitrationInput {
    ArbitrationInput {
        delta,
        sheet_offset,
        bounds: BOUNDS,
        scroll_lock_enabled: true,
        nested: Some(NestedScrollSnapshot {
            offset_y: 0.0,
            user_driven: false,
        }),
    }
}

fn with_nested(mut input: ArbitrationInput, offset_y: f32, user_driven: bool) -> ArbitrationInput {
    input.nested = Some(NestedScrollSnapshot {
        offset_y,
        user_driven,
    });
    input
}

#[test]
fn drag_up_at_top_scrolls_content() {
    let decision = arbitrate(&input(-15.0, 160.0));
    assert_eq!(decision, Arbitration::ForwardToScroll { offset_y: 15.0 });
}

#[test]
fn drag_down_at_top_scrolls_content_back_to_its_top() {
    let decision = arbitrate(&with_nested(input(30.0, 160.0), 100.0, false));
    assert_eq!(decision, Arbitration::ForwardToScroll { offset_y: 70.0 });

    let decision = arbitrate(&with_nested(input(30.0, 160.0), 10.0, false));
    assert_eq!(decision, Arbitration::ForwardToScroll { offset_y: 0.0 });
}

#[test]
fn drag_down_at_top_with_content_at_top_moves_sheet() {
    let decision = arbitrate(&input(30.0, 160.0));
    assert_eq!(decision, Arbitration::MoveSheet { offset: 190.0 });
}

#[test]
fn below_top_the_sheet_moves() {
    let decision = arbitrate(&with_nested(input(-15.0, 400.0), 50.0, false));
    assert_eq!(decision, Arbitration::MoveSheet { offset: 385.0 });
}

#[test]
fn scroll_lock_disabled_always_moves_sheet() {
    let mut unlocked = with_nested(input(-15.0, 160.0), 80.0, false);
    unlocked.scroll_lock_enabled = false;
    assert_eq!(
        arbitrate(&unlocked),
        Arbitration::MoveSheet { offset: 160.0 }
    );

    unlocked.delta = 25.0;
    assert_eq!(
        arbitrate(&unlocked),
        Arbitration::MoveSheet { offset: 185.0 }
    );
}

#[test]
fn missing_nested_scroll_moves_sheet() {
    let mut bare = input(-15.0, 160.0);
    bare.nested = None;
    assert_eq!(arbitrate(&bare), Arbitration::MoveSheet { offset: 160.0 });
}

#[test]
fn user_driven_content_is_never_forwarded_to() {
    let decision = arbitrate(&with_nested(input(-15.0, 160.0), 0.0, true));
    assert_eq!(decision, Arbitration::MoveSheet { offset: 160.0 });
}

#[test]
fn pulling_down_user_driven_scrolled_content_is_suppressed() {
    let decision = arbitrate(&with_nested(input(12.0, 400.0), 30.0, true));
    assert_eq!(decision, Arbitration::Suppressed);

    let decision = arbitrate(&with_nested(input(12.0, 400.0), 0.0, true));
    assert_eq!(decision, Arbitration::MoveSheet { offset: 412.0 });
}

#[test]
fn suppression_ignores_scroll_lock_flag() {
    let mut unlocked = with_nested(input(12.0, 400.0), 30.0, true);
    unlocked.scroll_lock_enabled = false;
    assert_eq!(arbitrate(&unlocked), Arbitration::Suppressed);
}

#[test]
fn moves_are_clamped_to_bounds() {
    let mut free = input(0.0, 400.0);
    free.scroll_lock_enabled = false;
    for delta in [-1000.0, -241.0, -240.0, 0.0, 239.0, 241.0, 5000.0] {
        free.delta = delta;
        match arbitrate(&free) {
            Arbitration::MoveSheet { offset } => assert!(
                BOUNDS.contains(offset),
                "offset {offset} escaped bounds for delta {delta}"
            ),
            other => panic!("expected sheet move, got {other:?}"),
        }
    }
}

#[test]
fn available_scroll_without_user_driven_content() {
    assert!(is_available_scroll(10.0, None));
    assert!(is_available_scroll(
        10.0,
        Some(NestedScrollSnapshot {
            offset_y: 300.0,
            user_driven: false
        })
    ));
    assert!(is_available_scroll(
        -10.0,
        Some(NestedScrollSnapshot {
            offset_y: 300.0,
            user_driven: true
        })
    ));
}
