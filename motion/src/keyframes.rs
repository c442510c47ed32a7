//! Keyframe interpolation

use crate::easing::Easing;
use crate::error::MotionError;

/// linear interpolation between two values
pub trait Lerp {
    fn lerp(&self, to: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

/// evenly spaced keyframes, e.g. `[1.0, 1.4, 1.0]` puts 1.4 at the midpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    values: Vec<f64>,
}

impl Keyframes {
    pub fn new(values: Vec<f64>) -> Result<Self, MotionError> {
        if values.len() < 2 {
            return Err(MotionError::TooFewKeyframes(values.len()));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(MotionError::NonFinite { what: "keyframe value" });
        }
        Ok(Self { values })
    }

    /// `from -> to`
    pub fn pair(from: f64, to: f64) -> Result<Self, MotionError> {
        Self::new(vec![from, to])
    }

    pub fn first(&self) -> f64 {
        self.values[0]
    }

    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// value at overall `progress` in [0, 1]; `easing` shapes each segment
    /// separately, so every keyframe is hit exactly
    pub fn sample(&self, progress: f64, easing: &Easing) -> f64 {
        if progress.is_nan() || progress <= 0.0 {
            return self.first();
        }
        if progress >= 1.0 {
            return self.last();
        }

        let segments = self.values.len() - 1;
        let scaled = progress * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local = scaled - index as f64;

        self.values[index].lerp(&self.values[index + 1], easing.ease(local))
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hits_every_keyframe() {
        let frames = Keyframes::new(vec![1.0, 1.4, 1.0]).unwrap();
        assert_eq!(frames.sample(0.0, &Easing::EaseInOut), 1.0);
        assert_eq!(frames.sample(0.5, &Easing::EaseInOut), 1.4);
        assert_eq!(frames.sample(1.0, &Easing::EaseInOut), 1.0);
    }

    #[test]
    fn test_segment_easing() {
        let frames = Keyframes::new(vec![0.0, 10.0, 0.0]).unwrap();
        // a quarter of the way is the middle of the first segment
        let v = frames.sample(0.25, &Easing::EaseInOut);
        assert!((v - 5.0).abs() < 1e-4);
        // ease-in-out lags linear early in a segment
        assert!(frames.sample(0.1, &Easing::EaseInOut) < frames.sample(0.1, &Easing::Linear));
    }

    #[test]
    fn test_too_few() {
        assert_eq!(Keyframes::new(vec![1.0]), Err(MotionError::TooFewKeyframes(1)));
        assert_eq!(Keyframes::new(vec![]), Err(MotionError::TooFewKeyframes(0)));
    }

    #[test]
    fn test_non_finite() {
        assert!(matches!(
            Keyframes::new(vec![0.0, f64::INFINITY]),
            Err(MotionError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_bounds() {
        let frames = Keyframes::new(vec![0.6, 0.2, 0.6]).unwrap();
        assert_eq!(frames.min(), 0.2);
        assert_eq!(frames.max(), 0.6);
    }
}
