//! ==============================================================================
//! lib.rs - shared configuration for the signal bar
//! ==============================================================================
//!
//! purpose:
//!     build-time configuration for the sticky "signal bar" header: the copy
//!     it displays, the palette and font tokens, the motion presets and the
//!     responsive layout rules.
//!
//! relationships:
//!     - used by: signal-bar (copy, palette, layout, presets)
//!     - motion presets are plain numbers; the motion crate turns them into
//!       validated curves and springs
//!
//! design rationale:
//!     nothing here is read at runtime from outside the binary. every type is
//!     serde-derived so the configuration can be dumped and diffed.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

/// in-page anchor the call-to-action navigates to
pub const CTA_HREF: &str = "#join";

/// font stack used by every text node in the bar
pub const FONT_FAMILY: &str = "'Satoshi Variable', sans-serif";

// ==============================================================================
// copy
// ==============================================================================

/// literal text rendered by the bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalBarCopy {
    /// badge text on the left, drawn with a hand-made underline
    pub cohort_label: String,
    /// scarcity text next to the pulsing dot
    pub spots_label: String,
    /// pricing deadline notice
    pub deadline: String,
    /// call-to-action link text
    pub cta_label: String,
    /// call-to-action link target
    pub cta_href: String,
    /// textual dot separator
    pub separator: String,
}

impl Default for SignalBarCopy {
    fn default() -> Self {
        Self {
            cohort_label: "Founding Cohort".to_string(),
            spots_label: "~10 Spots".to_string(),
            deadline: "Black Friday Pricing Ends Dec 14".to_string(),
            cta_label: "See If It's a Fit".to_string(),
            cta_href: CTA_HREF.to_string(),
            separator: "·".to_string(),
        }
    }
}

impl SignalBarCopy {
    /// every visible string, in reading order
    pub fn visible_text(&self) -> [&str; 4] {
        [
            &self.cohort_label,
            &self.spots_label,
            &self.deadline,
            &self.cta_label,
        ]
    }
}

// ==============================================================================
// palette
// ==============================================================================

/// colour tokens
pub mod palette {
    /// labels and cta background
    pub const DEEP_TEAL: &str = "#1B4D4A";
    /// wavy divider stroke
    pub const TEAL: &str = "#2D7A75";
    /// underline stroke and pulse dot
    pub const ROSE: &str = "#C17B7B";
    /// dot separators
    pub const SAGE: &str = "#8FA5A3";
    /// deadline text
    pub const SLATE: &str = "#5A7A78";
    /// cta text
    pub const IVORY: &str = "#FAF9F7";

    /// frosted background, warm champagne tint toward the bottom
    pub const BACKGROUND_GRADIENT: &str =
        "linear-gradient(180deg, rgba(250, 249, 247, 0.95) 0%, rgba(247, 231, 206, 0.08) 100%)";
    pub const HAIRLINE: &str = "1px solid rgba(27, 77, 74, 0.08)";

    /// rgba colour with a separate alpha, so shadows can be interpolated
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Rgba {
        pub r: u8,
        pub g: u8,
        pub b: u8,
        pub a: f64,
    }

    impl Rgba {
        pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
            Self { r, g, b, a }
        }

        pub fn css(&self) -> String {
            format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
        }
    }

    /// one layer of a css box-shadow: offset-y, blur, spread, colour
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct ShadowLayer {
        pub offset_y: f64,
        pub blur: f64,
        pub spread: f64,
        pub color: Rgba,
    }

    impl ShadowLayer {
        pub fn css(&self) -> String {
            format!(
                "0 {:.2}px {:.2}px {:.2}px {}",
                self.offset_y,
                self.blur,
                self.spread,
                self.color.css()
            )
        }
    }

    /// cta shadow at rest
    pub const CTA_SHADOW: [ShadowLayer; 2] = [
        ShadowLayer { offset_y: 2.0, blur: 12.0, spread: 0.0, color: Rgba::new(27, 77, 74, 0.15) },
        ShadowLayer { offset_y: 0.0, blur: 0.0, spread: 1.0, color: Rgba::new(247, 231, 206, 0.2) },
    ];

    /// champagne glow while hovered
    pub const CTA_GLOW: [ShadowLayer; 2] = [
        ShadowLayer { offset_y: 4.0, blur: 20.0, spread: 0.0, color: Rgba::new(212, 175, 55, 0.25) },
        ShadowLayer { offset_y: 0.0, blur: 0.0, spread: 1.0, color: Rgba::new(212, 175, 55, 0.15) },
    ];
}

// ==============================================================================
// motion presets
// ==============================================================================

/// one-shot fade and slide played on mount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntrancePreset {
    /// seconds
    pub duration: f64,
    /// cubic-bezier control points x1, y1, x2, y2
    pub bezier: [f64; 4],
    pub opacity: [f64; 2],
    /// vertical offset in px
    pub offset_y: [f64; 2],
}

/// looping scale/opacity pulse on the scarcity dot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulsePreset {
    /// seconds per cycle
    pub period: f64,
    pub scale: Vec<f64>,
    pub opacity: Vec<f64>,
}

/// spring-driven hover/press feedback on the cta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtaPreset {
    pub rest_scale: f64,
    pub hover_scale: f64,
    pub press_scale: f64,
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionPresets {
    pub entrance: EntrancePreset,
    pub pulse: PulsePreset,
    pub cta: CtaPreset,
}

impl Default for MotionPresets {
    fn default() -> Self {
        Self {
            entrance: EntrancePreset {
                duration: 0.5,
                bezier: [0.22, 1.0, 0.36, 1.0],
                opacity: [0.0, 1.0],
                offset_y: [-20.0, 0.0],
            },
            pulse: PulsePreset {
                period: 2.0,
                scale: vec![1.0, 1.4, 1.0],
                opacity: vec![0.6, 0.2, 0.6],
            },
            cta: CtaPreset {
                rest_scale: 1.0,
                hover_scale: 1.02,
                press_scale: 0.98,
                stiffness: 400.0,
                damping: 20.0,
                mass: 1.0,
            },
        }
    }
}

// ==============================================================================
// responsive layout
// ==============================================================================

/// viewport breakpoints in css px
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// at and above this width the zones sit side by side
    pub md: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self { md: 768.0 }
    }
}

/// how the two zones are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneDirection {
    /// narrow viewports: column, centred
    Stacked,
    /// wide viewports: row, space-between
    SideBySide,
}

/// layout decisions for a given viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub direction: ZoneDirection,
    /// the hand-drawn svg divider after the cohort badge
    pub show_wavy_divider: bool,
    /// the plain dot used instead of the wavy divider on narrow screens
    pub show_mobile_dot: bool,
}

impl Layout {
    pub fn for_width(width: f64) -> Self {
        Self::for_width_with(width, &Breakpoints::default())
    }

    pub fn for_width_with(width: f64, breakpoints: &Breakpoints) -> Self {
        let wide = width >= breakpoints.md;
        Self {
            direction: if wide { ZoneDirection::SideBySide } else { ZoneDirection::Stacked },
            show_wavy_divider: wide,
            show_mobile_dot: !wide,
        }
    }

    pub fn is_wide(&self) -> bool {
        self.direction == ZoneDirection::SideBySide
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_copy() {
        let copy = SignalBarCopy::default();
        assert_eq!(
            copy.visible_text(),
            [
                "Founding Cohort",
                "~10 Spots",
                "Black Friday Pricing Ends Dec 14",
                "See If It's a Fit",
            ]
        );
        assert_eq!(copy.cta_href, "#join");
    }

    #[test]
    fn test_copy_serialization() {
        let json = serde_json::to_string(&SignalBarCopy::default()).unwrap();
        assert!(json.contains("\"cta_href\":\"#join\""));
    }

    #[test]
    fn test_presets_match_design() {
        let presets = MotionPresets::default();
        assert_eq!(presets.entrance.duration, 0.5);
        assert_eq!(presets.entrance.offset_y, [-20.0, 0.0]);
        assert_eq!(presets.pulse.period, 2.0);
        assert_eq!(presets.cta.hover_scale, 1.02);
        assert_eq!(presets.cta.press_scale, 0.98);
    }

    #[test]
    fn test_narrow_layout() {
        let layout = Layout::for_width(375.0);
        assert_eq!(layout.direction, ZoneDirection::Stacked);
        assert!(!layout.show_wavy_divider);
        assert!(layout.show_mobile_dot);
    }

    #[test]
    fn test_breakpoint_boundary() {
        assert!(!Layout::for_width(767.9).is_wide());
        assert!(Layout::for_width(768.0).is_wide());
    }

    #[test]
    fn test_one_separator_at_every_width() {
        for width in [0.0, 320.0, 767.0, 768.0, 1024.0, 2560.0] {
            let layout = Layout::for_width(width);
            assert_ne!(layout.show_wavy_divider, layout.show_mobile_dot, "width {}", width);
        }
    }

    #[test]
    fn test_shadow_css() {
        let css = palette::CTA_GLOW[0].css();
        assert_eq!(css, "0 4.00px 20.00px 0.00px rgba(212, 175, 55, 0.250)");
    }
}
