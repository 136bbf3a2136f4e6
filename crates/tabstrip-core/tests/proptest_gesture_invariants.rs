//! Property-based invariant tests for the gesture mode controller.
//!
//! Arbitrary interleavings of touch-down, long-press, tick, host-timer fire
//! and touch-up must preserve:
//!
//! 1. The long-press timer is only ever pending in `PotentialDrag`.
//! 2. `touch_up` always lands in the platform default mode.
//! 3. Pointer platforms never leave `Auto`.
//! 4. `can_drag` and `can_scroll` are never both false.

use proptest::prelude::*;
use tabstrip_core::{GestureConfig, GestureMode, GestureModeController, Platform, TaskId};
use web_time::{Duration, Instant};

#[derive(Debug, Clone)]
enum Op {
    TouchDown,
    LongPress,
    Advance(u64),
    FireLatest,
    TouchUp,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::TouchDown),
        Just(Op::LongPress),
        (0u64..800).prop_map(Op::Advance),
        Just(Op::FireLatest),
        Just(Op::TouchUp),
    ]
}

fn platform() -> impl Strategy<Value = Platform> {
    prop_oneof![Just(Platform::Touch), Just(Platform::Pointer)]
}

fn run(platform: Platform, ops: &[Op], mut check: impl FnMut(&Op, &GestureModeController)) {
    let mut gc = GestureModeController::new(platform, GestureConfig::default());
    let mut now = Instant::now();
    let mut latest: Option<TaskId> = None;
    for op in ops {
        match op {
            Op::TouchDown => {
                if let Some(id) = gc.touch_down(now) {
                    latest = Some(id);
                }
            }
            Op::LongPress => {
                gc.long_press();
            }
            Op::Advance(ms) => {
                now += Duration::from_millis(*ms);
                gc.tick(now);
            }
            Op::FireLatest => {
                if let Some(id) = latest {
                    gc.fire(id);
                }
            }
            Op::TouchUp => gc.touch_up(),
        }
        check(op, &gc);
    }
}

proptest! {
    #[test]
    fn timer_pending_only_in_potential_drag(
        platform in platform(),
        ops in proptest::collection::vec(op(), 0..64),
    ) {
        run(platform, &ops, |op, gc| {
            if gc.is_timer_pending() {
                assert_eq!(gc.mode(), GestureMode::PotentialDrag, "after {op:?}");
            }
        });
    }

    #[test]
    fn touch_up_restores_platform_default(
        platform in platform(),
        ops in proptest::collection::vec(op(), 0..64),
    ) {
        run(platform, &ops, |op, gc| {
            if matches!(op, Op::TouchUp) {
                assert_eq!(gc.mode(), GestureMode::default_for(platform));
            }
        });
    }

    #[test]
    fn pointer_platform_never_leaves_auto(ops in proptest::collection::vec(op(), 0..64)) {
        run(Platform::Pointer, &ops, |op, gc| {
            assert_eq!(gc.mode(), GestureMode::Auto, "after {op:?}");
        });
    }

    #[test]
    fn some_gesture_is_always_eligible(
        platform in platform(),
        ops in proptest::collection::vec(op(), 0..64),
    ) {
        run(platform, &ops, |_, gc| {
            assert!(gc.can_drag() || gc.can_scroll());
        });
    }
}
