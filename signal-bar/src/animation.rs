//! ==============================================================================
//! animation.rs - the bar's three timelines and their inline styles
//! ==============================================================================
//!
//! purpose:
//!     turns the motion presets from shared into sampled frames and css.
//!     nothing here touches the dom; components feed in the frame clock and
//!     pointer changes and write the returned strings into `style`.
//!
//! timelines:
//!     - entrance: one-shot fade + slide, latched so it never replays
//!     - pulse: infinite scale/opacity loop on the seat-count dot
//!     - cta: two springs (scale, glow) retargeted by pointer state
//!
//! ==============================================================================

use motion::{
    CubicBezier, Easing, GestureTargets, Keyframes, MotionError, OneShot, Pointer, Repeat, Spring,
    SpringConfig, Tween,
};
use shared::palette::{self, Rgba, ShadowLayer};
use shared::{CtaPreset, EntrancePreset, MotionPresets, PulsePreset};

// ==============================================================================
// frames
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceFrame {
    pub opacity: f64,
    /// vertical offset in px
    pub offset_y: f64,
}

impl EntranceFrame {
    /// fully visible, in place
    pub const RESTING: EntranceFrame = EntranceFrame { opacity: 1.0, offset_y: 0.0 };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseFrame {
    pub scale: f64,
    pub opacity: f64,
}

impl PulseFrame {
    pub const RESTING: PulseFrame = PulseFrame { scale: 1.0, opacity: 0.6 };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CtaFrame {
    pub scale: f64,
    /// 0 = resting shadow, 1 = full hover glow
    pub glow: f64,
}

impl CtaFrame {
    pub const RESTING: CtaFrame = CtaFrame { scale: 1.0, glow: 0.0 };
}

// ==============================================================================
// timelines
// ==============================================================================

/// fade in while sliding down, once per mount
#[derive(Debug, Clone)]
pub struct Entrance {
    shot: OneShot,
    opacity: Keyframes,
    offset_y: Keyframes,
}

impl Entrance {
    pub fn new(preset: &EntrancePreset) -> Result<Self, MotionError> {
        let curve = CubicBezier::from_points(preset.bezier)?;
        Ok(Self {
            shot: OneShot::new(preset.duration, Easing::Bezier(curve))?,
            opacity: Keyframes::pair(preset.opacity[0], preset.opacity[1])?,
            offset_y: Keyframes::pair(preset.offset_y[0], preset.offset_y[1])?,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.shot.is_complete()
    }

    pub fn sample(&mut self, elapsed: f64) -> EntranceFrame {
        // both tracks share one eased progress, then interpolate linearly
        let eased = self.shot.eased(elapsed);
        EntranceFrame {
            opacity: self.opacity.sample(eased, &Easing::Linear),
            offset_y: self.offset_y.sample(eased, &Easing::Linear),
        }
    }
}

/// looping attention pulse; never finishes
#[derive(Debug, Clone)]
pub struct Pulse {
    tween: Tween,
    scale: Keyframes,
    opacity: Keyframes,
}

impl Pulse {
    pub fn new(preset: &PulsePreset) -> Result<Self, MotionError> {
        Ok(Self {
            tween: Tween::new(preset.period, Easing::EaseInOut, Repeat::Forever)?,
            scale: Keyframes::new(preset.scale.clone())?,
            opacity: Keyframes::new(preset.opacity.clone())?,
        })
    }

    pub fn sample(&self, elapsed: f64) -> PulseFrame {
        let progress = self.tween.progress(elapsed).value;
        let easing = self.tween.easing();
        PulseFrame {
            scale: self.scale.sample(progress, easing),
            opacity: self.opacity.sample(progress, easing),
        }
    }
}

/// hover/press feedback on the call-to-action
#[derive(Debug, Clone)]
pub struct CtaMotion {
    targets: GestureTargets,
    pointer: Pointer,
    scale: Spring,
    glow: Spring,
}

impl CtaMotion {
    pub fn new(preset: &CtaPreset) -> Result<Self, MotionError> {
        let config = SpringConfig::new(preset.stiffness, preset.damping, preset.mass)?;
        Ok(Self {
            targets: GestureTargets {
                rest: preset.rest_scale,
                hover: preset.hover_scale,
                press: preset.press_scale,
            },
            pointer: Pointer::default(),
            scale: Spring::at_rest(preset.rest_scale, config),
            glow: Spring::at_rest(0.0, config),
        })
    }

    /// retarget both springs from wherever they are at `now`
    pub fn set_pointer(&mut self, pointer: Pointer, now: f64) {
        if pointer == self.pointer {
            return;
        }
        self.pointer = pointer;
        self.scale = self.scale.retarget(now, self.targets.target_scale(pointer));
        self.glow = self.glow.retarget(now, self.targets.glow(pointer));
    }

    /// apply a pointer transition such as `Pointer::enter`
    pub fn update_pointer(&mut self, now: f64, change: impl FnOnce(&mut Pointer)) {
        let mut pointer = self.pointer;
        change(&mut pointer);
        self.set_pointer(pointer, now);
    }

    pub fn sample(&self, now: f64) -> CtaFrame {
        CtaFrame {
            scale: self.scale.sample(now).position,
            // the glow spring overshoots too; shadows can't go past full glow
            glow: self.glow.sample(now).position.clamp(0.0, 1.0),
        }
    }
}

/// every timeline the bar runs
#[derive(Debug, Clone)]
pub struct SignalBarMotion {
    pub entrance: Entrance,
    pub pulse: Pulse,
    pub cta: CtaMotion,
}

impl SignalBarMotion {
    pub fn from_presets(presets: &MotionPresets) -> Result<Self, MotionError> {
        Ok(Self {
            entrance: Entrance::new(&presets.entrance)?,
            pulse: Pulse::new(&presets.pulse)?,
            cta: CtaMotion::new(&presets.cta)?,
        })
    }

    pub fn entrance(&mut self, elapsed: f64) -> EntranceFrame {
        self.entrance.sample(elapsed)
    }

    pub fn pulse(&self, elapsed: f64) -> PulseFrame {
        self.pulse.sample(elapsed)
    }
}

// ==============================================================================
// inline styles
// ==============================================================================

pub fn header_style(frame: EntranceFrame) -> String {
    format!(
        "font-family: {}; opacity: {:.3}; transform: translateY({:.2}px);",
        shared::FONT_FAMILY,
        frame.opacity,
        frame.offset_y
    )
}

pub fn pulse_style(frame: PulseFrame) -> String {
    format!(
        "background-color: {}; opacity: {:.3}; transform: scale({:.4});",
        palette::ROSE,
        frame.opacity,
        frame.scale
    )
}

pub fn cta_style(frame: CtaFrame) -> String {
    format!(
        "background-color: {}; color: {}; font-weight: 500; box-shadow: {}; transform: scale({:.4});",
        palette::DEEP_TEAL,
        palette::IVORY,
        cta_shadow(frame.glow),
        frame.scale
    )
}

/// resting shadow blended toward the champagne glow
fn cta_shadow(glow: f64) -> String {
    palette::CTA_SHADOW
        .iter()
        .zip(palette::CTA_GLOW.iter())
        .map(|(rest, hover)| blend_shadow(rest, hover, glow).css())
        .collect::<Vec<_>>()
        .join(", ")
}

fn blend_shadow(from: &ShadowLayer, to: &ShadowLayer, t: f64) -> ShadowLayer {
    let mix = |a: f64, b: f64| a + (b - a) * t;
    let channel = |a: u8, b: u8| mix(a as f64, b as f64).round().clamp(0.0, 255.0) as u8;
    ShadowLayer {
        offset_y: mix(from.offset_y, to.offset_y),
        blur: mix(from.blur, to.blur),
        spread: mix(from.spread, to.spread),
        color: Rgba::new(
            channel(from.color.r, to.color.r),
            channel(from.color.g, to.color.g),
            channel(from.color.b, to.color.b),
            mix(from.color.a, to.color.a),
        ),
    }
}

// ==============================================================================
// tests
// ==============================================================================
