//! ==============================================================================
//! easing.rs - cubic-bezier timing curves
//! ==============================================================================
//!
//! a css timing function is a cubic bezier from (0, 0) to (1, 1) with two free
//! control points. x is time, y is progress, so easing means: given x, find
//! the curve parameter t with bx(t) = x, then return by(t).
//!
//! ==============================================================================

use crate::error::MotionError;

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_MIN_SLOPE: f64 = 1e-3;
const SUBDIVISION_PRECISION: f64 = 1e-7;
const SUBDIVISION_MAX_ITERATIONS: usize = 32;

/// css `cubic-bezier(x1, y1, x2, y2)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// x control points must lie in [0, 1] so the curve is a function of time.
    /// y control points may overshoot.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, MotionError> {
        for v in [x1, y1, x2, y2] {
            if !v.is_finite() {
                return Err(MotionError::NonFinite { what: "bezier control point" });
            }
        }
        if !(0.0..=1.0).contains(&x1) {
            return Err(MotionError::InvalidControlPoint { index: 1, value: x1 });
        }
        if !(0.0..=1.0).contains(&x2) {
            return Err(MotionError::InvalidControlPoint { index: 2, value: x2 });
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// from a `[x1, y1, x2, y2]` array, the form presets are stored in
    pub fn from_points(points: [f64; 4]) -> Result<Self, MotionError> {
        Self::new(points[0], points[1], points[2], points[3])
    }

    const fn unchecked(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn control_points(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// progress at time `x`; `x` is clamped to [0, 1] and the endpoints are exact
    pub fn ease(&self, x: f64) -> f64 {
        if x.is_nan() || x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        // the identity curve needs no solving
        if self.x1 == self.y1 && self.x2 == self.y2 {
            return x;
        }
        bezier(self.solve_t(x), self.y1, self.y2)
    }

    fn solve_t(&self, x: f64) -> f64 {
        // newton-raphson from a linear guess
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let slope = bezier_slope(t, self.x1, self.x2);
            if slope.abs() < NEWTON_MIN_SLOPE {
                break;
            }
            let err = bezier(t, self.x1, self.x2) - x;
            if err.abs() < SUBDIVISION_PRECISION {
                return t;
            }
            t -= err / slope;
            if !(0.0..=1.0).contains(&t) {
                break;
            }
        }

        // flat spots: fall back to bisection, which always converges because
        // bx is monotone when x1, x2 are in [0, 1]
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..SUBDIVISION_MAX_ITERATIONS {
            let err = bezier(t, self.x1, self.x2) - x;
            if err.abs() < SUBDIVISION_PRECISION {
                break;
            }
            if err > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }
}

/// one coordinate of the bezier with endpoints 0 and 1
fn bezier(t: f64, p1: f64, p2: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}

// ==============================================================================
// named curves
// ==============================================================================

/// timing function applied to a tween or keyframe segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Bezier(CubicBezier),
}

const EASE_IN: CubicBezier = CubicBezier::unchecked(0.42, 0.0, 1.0, 1.0);
const EASE_OUT: CubicBezier = CubicBezier::unchecked(0.0, 0.0, 0.58, 1.0);
const EASE_IN_OUT: CubicBezier = CubicBezier::unchecked(0.42, 0.0, 0.58, 1.0);

impl Easing {
    pub fn ease(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t.clamp(0.0, 1.0),
            Easing::EaseIn => EASE_IN.ease(t),
            Easing::EaseOut => EASE_OUT.ease(t),
            Easing::EaseInOut => EASE_IN_OUT.ease(t),
            Easing::Bezier(curve) => curve.ease(t),
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
