//! Signal bar header

use leptos::prelude::*;
use log::error;
use shared::{palette, Layout, MotionPresets, SignalBarCopy};

use super::{CallToAction, CohortBadge, Deadline, DotSeparator, SpotsIndicator, WavyDivider};
use crate::animation::{header_style, EntranceFrame, SignalBarMotion};
use crate::hooks::{use_frame_clock, use_viewport_width};

#[component]
pub fn SignalBar() -> impl IntoView {
    let clock = use_frame_clock();
    let width = use_viewport_width();

    view! { <SignalBarView clock=clock width=width /> }
}

/// the bar's markup, driven by an explicit clock (seconds) and viewport width (px)
#[component]
pub fn SignalBarView(clock: ReadSignal<f64>, width: ReadSignal<f64>) -> impl IntoView {
    let copy = SignalBarCopy::default();
    let layout = Memo::new(move |_| Layout::for_width(width.get()));

    // invalid presets leave the bar static and fully visible
    let (entrance, pulse, cta) = match SignalBarMotion::from_presets(&MotionPresets::default()) {
        Ok(motion) => (Some(motion.entrance), Some(motion.pulse), Some(motion.cta)),
        Err(e) => {
            error!("signal bar motion presets rejected: {}", e);
            (None, None, None)
        }
    };

    // the frame stops changing once the entrance latches, so the memo stops
    // notifying and the style string is no longer rebuilt
    let entrance = StoredValue::new(entrance);
    let frame = Memo::new(move |_| {
        let now = clock.get();
        let mut frame = EntranceFrame::RESTING;
        entrance.update_value(|entrance| {
            if let Some(entrance) = entrance {
                frame = entrance.sample(now);
            }
        });
        frame
    });
    let style = move || header_style(frame.get());

    let inner_class = move || {
        if layout.get().is_wide() {
            "signal-bar__inner signal-bar__inner--wide"
        } else {
            "signal-bar__inner"
        }
    };

    let separator = copy.separator.clone();

    view! {
        <header class="signal-bar" style=style>
            // frosted glass with warm champagne tint
            <div
                class="signal-bar__glass"
                style=format!(
                    "background: {}; border-bottom: {};",
                    palette::BACKGROUND_GRADIENT,
                    palette::HAIRLINE,
                )
            ></div>

            <div class="signal-bar__content">
                <div class=inner_class>
                    <div class="signal-bar__info">
                        <CohortBadge label=copy.cohort_label />

                        <Show
                            when=move || layout.get().show_wavy_divider
                            fallback=move || view! { <DotSeparator symbol=separator.clone() /> }
                        >
                            <WavyDivider />
                        </Show>

                        <SpotsIndicator label=copy.spots_label clock=clock pulse=pulse />
                        <DotSeparator symbol=copy.separator />
                        <Deadline text=copy.deadline />
                    </div>

                    <CallToAction
                        label=copy.cta_label
                        href=copy.cta_href
                        clock=clock
                        motion=cta
                    />
                </div>
            </div>
        </header>
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    const NARROW: f64 = 375.0;
    const WIDE: f64 = 1280.0;

    fn render(now: f64, width: f64) -> String {
        Owner::new().with(|| {
            let (clock, _) = signal(now);
            let (width, _) = signal(width);
            view! { <SignalBarView clock=clock width=width /> }.to_html()
        })
    }

    /// text may come back with the apostrophe entity-encoded
    fn has_text(html: &str, text: &str) -> bool {
        html.contains(text)
            || html.contains(&text.replace('\'', "&#x27;"))
            || html.contains(&text.replace('\'', "&#39;"))
    }

    #[test]
    fn test_both_zones_at_every_width() {
        for width in [0.0, NARROW, 767.0, 768.0, WIDE] {
            let html = render(1.0, width);
            assert!(html.contains("signal-bar__info"), "info zone missing at {}", width);
            assert!(html.contains("class=\"cta\""), "cta missing at {}", width);
            assert!(html.contains("href=\"#join\""), "cta target wrong at {}", width);
        }
    }

    #[test]
    fn test_all_copy_rendered_after_entrance() {
        for width in [NARROW, WIDE] {
            let html = render(0.5, width);
            for text in [
                "Founding Cohort",
                "~10 Spots",
                "Black Friday Pricing Ends Dec 14",
                "See If It's a Fit",
            ] {
                assert!(has_text(&html, text), "{:?} missing at width {}", text, width);
            }
            assert!(html.contains("opacity: 1.000"));
            assert!(html.contains("translateY(0.00px)"));
        }
    }

    #[test]
    fn test_entrance_starts_hidden() {
        let html = render(0.0, WIDE);
        assert!(html.contains("opacity: 0.000"));
        assert!(html.contains("translateY(-20.00px)"));
    }

    #[test]
    fn test_narrow_layout_uses_dots() {
        let html = render(1.0, NARROW);
        assert!(!html.contains("wavy-divider"));
        assert!(!html.contains("signal-bar__inner--wide"));
        // mobile dot after the badge plus the one before the deadline
        assert_eq!(html.matches("class=\"dot-separator\"").count(), 2);
    }

    #[test]
    fn test_wide_layout_uses_wavy_divider() {
        let html = render(1.0, WIDE);
        assert!(html.contains("wavy-divider"));
        assert!(html.contains("signal-bar__inner--wide"));
        assert_eq!(html.matches("class=\"dot-separator\"").count(), 1);
    }
}
