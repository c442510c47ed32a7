//! Property-based tests for the animation primitives.
//! Invariants checked over arbitrary times and curves, not just fixed frames.

use motion::{CubicBezier, Easing, GestureTargets, Keyframes, Pointer, Repeat, Spring, SpringConfig, Tween};

proptest::proptest! {
    /// any valid curve stays monotone in time when y control points are in [0, 1]
    #[test]
    fn bezier_is_monotone(
        x1 in 0.0f64..=1.0, y1 in 0.0f64..=1.0,
        x2 in 0.0f64..=1.0, y2 in 0.0f64..=1.0,
        lo in 0.0f64..0.99, gap in 0.01f64..=1.0,
    ) {
        let curve = CubicBezier::new(x1, y1, x2, y2).unwrap();
        let hi = (lo + gap).min(1.0);
        assert!(curve.ease(lo) <= curve.ease(hi) + 1e-6,
            "curve {:?}: ease({}) > ease({})", curve.control_points(), lo, hi);
    }

    /// a looping tween never reports finished and stays in [0, 1)
    #[test]
    fn forever_never_finishes(elapsed in 0.0f64..1.0e6) {
        let tween = Tween::new(2.0, Easing::EaseInOut, Repeat::Forever).unwrap();
        let p = tween.progress(elapsed);
        assert!(!p.finished);
        assert!((0.0..1.0).contains(&p.value));
    }

    /// pulse values stay within the keyframe envelope, so the dot is never invisible
    #[test]
    fn pulse_stays_in_envelope(elapsed in 0.0f64..1.0e4) {
        let tween = Tween::new(2.0, Easing::EaseInOut, Repeat::Forever).unwrap();
        let scale = Keyframes::new(vec![1.0, 1.4, 1.0]).unwrap();
        let opacity = Keyframes::new(vec![0.6, 0.2, 0.6]).unwrap();
        let s = tween.sample(&scale, elapsed);
        let o = tween.sample(&opacity, elapsed);
        assert!((1.0 - 1e-9..=1.4 + 1e-9).contains(&s));
        assert!((0.2 - 1e-9..=0.6 + 1e-9).contains(&o));
        // scale and opacity move in opposite directions from the same progress
        assert!(((s - 1.0) / 0.4 - (0.6 - o) / 0.4).abs() < 1e-9);
    }

    /// whatever the pointer did, the cta spring ends exactly on its target
    #[test]
    fn spring_always_settles(
        hover in proptest::bool::ANY,
        press in proptest::bool::ANY,
        switch_at in 0.0f64..0.5,
    ) {
        let config = SpringConfig::new(400.0, 20.0, 1.0).unwrap();
        let mut pointer = Pointer::default();
        if hover { pointer.enter(); }
        if press { pointer.press(); }
        let targets = GestureTargets { rest: 1.0, hover: 1.02, press: 0.98 };
        let target = targets.target_scale(pointer);

        let spring = Spring::new(1.0, 1.02, 0.0, config).retarget(switch_at, target);
        let state = spring.sample(switch_at + 3.0);
        assert!(state.settled);
        assert_eq!(state.position, target);
    }
}
