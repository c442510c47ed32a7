//! ==============================================================================
//! tween.rs - fixed-duration timelines
//! ==============================================================================
//!
//! a tween maps elapsed seconds to progress in [0, 1]. it does not know what
//! it animates; pair it with `Keyframes` to get values.
//!
//! ==============================================================================

use log::debug;

use crate::easing::Easing;
use crate::error::MotionError;
use crate::keyframes::Keyframes;

/// how a tween behaves after its first cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// stop at the final frame
    Once,
    /// wrap around and start again, never finishes
    Forever,
}

/// progress through a tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// linear progress in [0, 1], before easing
    pub value: f64,
    pub finished: bool,
}

impl Progress {
    pub const DONE: Progress = Progress { value: 1.0, finished: true };
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    duration: f64,
    easing: Easing,
    repeat: Repeat,
}

impl Tween {
    pub fn new(duration: f64, easing: Easing, repeat: Repeat) -> Result<Self, MotionError> {
        if !duration.is_finite() {
            return Err(MotionError::NonFinite { what: "duration" });
        }
        if duration <= 0.0 {
            return Err(MotionError::InvalidDuration(duration));
        }
        Ok(Self { duration, easing, repeat })
    }

    pub fn easing(&self) -> &Easing {
        &self.easing
    }

    /// progress after `elapsed` seconds; negative or nan elapsed is treated as 0
    pub fn progress(&self, elapsed: f64) -> Progress {
        let elapsed = if elapsed.is_nan() { 0.0 } else { elapsed.max(0.0) };

        match self.repeat {
            Repeat::Once if elapsed >= self.duration => Progress::DONE,
            Repeat::Once => Progress { value: elapsed / self.duration, finished: false },
            Repeat::Forever => Progress {
                value: (elapsed % self.duration) / self.duration,
                finished: false,
            },
        }
    }

    /// value of `frames` after `elapsed` seconds
    pub fn sample(&self, frames: &Keyframes, elapsed: f64) -> f64 {
        frames.sample(self.progress(elapsed).value, &self.easing)
    }
}

// ==============================================================================
// one-shot with completion latch
// ==============================================================================

/// a `Repeat::Once` tween that stays finished.
///
/// once a sample has reached the end, later samples return the final frame
/// even if the clock they are given is earlier (a restarted clock, a
/// re-render that passes a stale time). the animation never replays.
#[derive(Debug, Clone, PartialEq)]
pub struct OneShot {
    tween: Tween,
    completed: bool,
}

impl OneShot {
    pub fn new(duration: f64, easing: Easing) -> Result<Self, MotionError> {
        Ok(Self {
            tween: Tween::new(duration, easing, Repeat::Once)?,
            completed: false,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn progress(&mut self, elapsed: f64) -> Progress {
        if self.completed {
            return Progress::DONE;
        }
        let progress = self.tween.progress(elapsed);
        if progress.finished {
            debug!("one-shot tween finished after {:.3}s", elapsed);
            self.completed = true;
        }
        progress
    }

    /// eased progress, ready to feed several keyframe tracks in lockstep
    pub fn eased(&mut self, elapsed: f64) -> f64 {
        let progress = self.progress(elapsed);
        self.tween.easing.ease(progress.value)
    }
}

// ==============================================================================
// tests
// ==============================================================================
