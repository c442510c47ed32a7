//! ==============================================================================
//! lib.rs - frame-independent animation primitives
//! ==============================================================================
//!
//! purpose:
//!     the maths behind the signal bar's animations, with no dependency on a
//!     browser. every animation is a pure function of elapsed seconds, so the
//!     host only has to supply a clock.
//!
//! relationships:
//!     - used by: signal-bar (entrance fade, pulse loop, cta spring)
//!
//! pieces:
//!     - easing: css-style cubic-bezier curves and the named presets
//!     - keyframes: piecewise interpolation with per-segment easing
//!     - tween: fixed-duration timelines, played once or looped forever
//!     - spring: closed-form damped harmonic oscillator
//!     - gesture: pointer hover/press state and the targets it selects
//!
//! ==============================================================================

pub mod easing;
pub mod error;
pub mod gesture;
pub mod keyframes;
pub mod spring;
pub mod tween;

pub use easing::{CubicBezier, Easing};
pub use error::MotionError;
pub use gesture::{GestureTargets, Pointer};
pub use keyframes::{Keyframes, Lerp};
pub use spring::{Spring, SpringConfig, SpringState};
pub use tween::{OneShot, Progress, Repeat, Tween};
