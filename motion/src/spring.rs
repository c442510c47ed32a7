//! ==============================================================================
//! spring.rs - damped harmonic oscillator
//! ==============================================================================
//!
//! purpose:
//!     physical easing for pointer feedback. a spring is evaluated in closed
//!     form, so sampling is exact at any frame rate and a dropped frame never
//!     changes where the animation ends up.
//!
//! model:
//!     m x'' + c x' + k (x - target) = 0
//!     w0 = sqrt(k / m), zeta = c / (2 sqrt(k m))
//!     zeta < 1 under-damped (overshoots), = 1 critical, > 1 over-damped
//!
//! ==============================================================================

use log::trace;

use crate::error::MotionError;

const CRITICAL_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// distance from target below which the spring may come to rest
    pub rest_delta: f64,
    /// speed below which the spring may come to rest
    pub rest_speed: f64,
}

impl SpringConfig {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Result<Self, MotionError> {
        for (param, value) in [("stiffness", stiffness), ("damping", damping), ("mass", mass)] {
            if !value.is_finite() {
                return Err(MotionError::NonFinite { what: param });
            }
            if value <= 0.0 {
                return Err(MotionError::InvalidSpring { param, value });
            }
        }
        Ok(Self {
            stiffness,
            damping,
            mass,
            rest_delta: 0.001,
            rest_speed: 0.01,
        })
    }

    /// undamped angular frequency
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringState {
    pub position: f64,
    pub velocity: f64,
    pub settled: bool,
}

/// a spring released from `from` toward `to` at time `start`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    from: f64,
    to: f64,
    velocity: f64,
    start: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(from: f64, to: f64, velocity: f64, config: SpringConfig) -> Self {
        Self { from, to, velocity, start: 0.0, config }
    }

    /// a spring already sitting on `value`
    pub fn at_rest(value: f64, config: SpringConfig) -> Self {
        Self::new(value, value, 0.0, config)
    }

    /// shift the release time to `start` on the caller's clock
    pub fn starting_at(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// state at clock time `t`; times before the release read as the release state
    pub fn sample(&self, t: f64) -> SpringState {
        let tau = if t.is_nan() { 0.0 } else { (t - self.start).max(0.0) };
        let (delta, velocity) = self.displacement(tau);

        if delta.abs() <= self.config.rest_delta && velocity.abs() <= self.config.rest_speed {
            return SpringState { position: self.to, velocity: 0.0, settled: true };
        }
        SpringState { position: self.to + delta, velocity, settled: false }
    }

    /// new spring toward `to`, continuing from this spring's position and
    /// velocity at time `at`
    pub fn retarget(&self, at: f64, to: f64) -> Spring {
        let state = self.sample(at);
        trace!(
            "spring retarget at {:.3}s: {:.4} -> {:.4} (v = {:.4})",
            at,
            state.position,
            to,
            state.velocity
        );
        Spring::new(state.position, to, state.velocity, self.config).starting_at(at)
    }

    /// offset from target and velocity, `tau` seconds after release
    fn displacement(&self, tau: f64) -> (f64, f64) {
        let d0 = self.from - self.to;
        let v0 = self.velocity;
        let w0 = self.config.natural_frequency();
        let zeta = self.config.damping_ratio();

        if (zeta - 1.0).abs() < CRITICAL_EPSILON {
            let decay = (-w0 * tau).exp();
            let b = v0 + w0 * d0;
            let delta = decay * (d0 + b * tau);
            let velocity = decay * (b - w0 * (d0 + b * tau));
            (delta, velocity)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * tau).exp();
            let b = (v0 + zeta * w0 * d0) / wd;
            let (sin, cos) = (wd * tau).sin_cos();
            let delta = decay * (d0 * cos + b * sin);
            let velocity = decay * (-zeta * w0 * (d0 * cos + b * sin) + wd * (b * cos - d0 * sin));
            (delta, velocity)
        } else {
            let s = w0 * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * w0 + s;
            let r2 = -zeta * w0 - s;
            let a = (v0 - r2 * d0) / (r1 - r2);
            let b = d0 - a;
            let (e1, e2) = ((r1 * tau).exp(), (r2 * tau).exp());
            (a * e1 + b * e2, a * r1 * e1 + b * r2 * e2)
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cta_config() -> SpringConfig {
        SpringConfig::new(400.0, 20.0, 1.0).unwrap()
    }

    #[test]
    fn test_cta_spring_is_underdamped() {
        let config = cta_config();
        assert!((config.damping_ratio() - 0.5).abs() < 1e-12);
        assert_eq!(config.natural_frequency(), 20.0);
    }

    #[test]
    fn test_starts_at_from() {
        let spring = Spring::new(1.0, 1.02, 0.0, cta_config());
        let state = spring.sample(0.0);
        assert!((state.position - 1.0).abs() < 1e-12);
        assert!(state.velocity.abs() < 1e-12);
        assert!(!state.settled);
    }

    #[test]
    fn test_settles_exactly_on_target() {
        let spring = Spring::new(1.0, 1.02, 0.0, cta_config());
        let state = spring.sample(2.0);
        assert!(state.settled);
        assert_eq!(state.position, 1.02);
        assert_eq!(state.velocity, 0.0);
    }

    #[test]
    fn test_underdamped_overshoots() {
        let spring = Spring::new(1.0, 1.02, 0.0, cta_config());
        let peak = (0..200)
            .map(|i| spring.sample(i as f64 * 0.005).position)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(peak > 1.02);
    }

    #[test]
    fn test_critical_and_overdamped_do_not_overshoot() {
        for damping in [40.0, 80.0] {
            let config = SpringConfig::new(400.0, damping, 1.0).unwrap();
            let spring = Spring::new(0.0, 1.0, 0.0, config);
            for i in 0..400 {
                let pos = spring.sample(i as f64 * 0.005).position;
                assert!(pos <= 1.0 + 1e-9, "damping {} overshot: {}", damping, pos);
            }
            assert!(spring.sample(5.0).settled);
        }
    }

    #[test]
    fn test_initial_velocity_respected() {
        for damping in [10.0, 40.0, 80.0] {
            let config = SpringConfig::new(400.0, damping, 1.0).unwrap();
            let spring = Spring::new(0.0, 0.0, 3.0, config).starting_at(1.0);
            let state = spring.sample(1.0);
            assert!((state.velocity - 3.0).abs() < 1e-9, "damping {}", damping);
        }
    }

    #[test]
    fn test_retarget_is_continuous() {
        let spring = Spring::new(1.0, 1.02, 0.0, cta_config());
        let before = spring.sample(0.05);
        let next = spring.retarget(0.05, 1.0);
        let after = next.sample(0.05);
        assert!((before.position - after.position).abs() < 1e-12);
        assert!((before.velocity - after.velocity).abs() < 1e-12);
        assert_eq!(next.target(), 1.0);
        assert_eq!(next.sample(3.0).position, 1.0);
    }

    #[test]
    fn test_before_release() {
        let spring = Spring::new(1.0, 0.98, 0.0, cta_config()).starting_at(4.0);
        assert!((spring.sample(1.0).position - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_config() {
        assert_eq!(
            SpringConfig::new(0.0, 20.0, 1.0),
            Err(MotionError::InvalidSpring { param: "stiffness", value: 0.0 })
        );
        assert_eq!(
            SpringConfig::new(400.0, -1.0, 1.0),
            Err(MotionError::InvalidSpring { param: "damping", value: -1.0 })
        );
        assert!(matches!(
            SpringConfig::new(400.0, 20.0, f64::NAN),
            Err(MotionError::NonFinite { what: "mass" })
        ));
    }
}
