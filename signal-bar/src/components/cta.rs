//! Call-to-action link with spring hover/press feedback

use leptos::prelude::*;
use motion::Pointer;

use crate::animation::{cta_style, CtaFrame, CtaMotion};

/// the right-hand balancing element.
///
/// pointer events only retarget the springs; the frame is re-sampled on
/// every clock tick.
#[component]
pub fn CallToAction(
    label: String,
    href: String,
    clock: ReadSignal<f64>,
    motion: Option<CtaMotion>,
) -> impl IntoView {
    let motion = StoredValue::new(motion);

    let pointer = move |change: fn(&mut Pointer)| {
        let now = clock.get_untracked();
        motion.update_value(|motion| {
            if let Some(motion) = motion {
                motion.update_pointer(now, change);
            }
        });
    };

    // settled springs sample to the same frame, so the memo holds still and
    // the style string is only rebuilt while the link is moving
    let frame = Memo::new(move |_| {
        let now = clock.get();
        motion
            .with_value(|motion| motion.as_ref().map(|motion| motion.sample(now)))
            .unwrap_or(CtaFrame::RESTING)
    });
    let style = move || cta_style(frame.get());

    view! {
        <a
            href=href
            class="cta"
            style=style
            on:pointerenter=move |_| pointer(Pointer::enter)
            on:pointerleave=move |_| pointer(Pointer::leave)
            on:pointerdown=move |_| pointer(Pointer::press)
            on:pointerup=move |_| pointer(Pointer::release)
            on:pointercancel=move |_| pointer(Pointer::leave)
        >
            {label}
            <ArrowGlyph />
        </a>
    }
}

#[component]
pub fn ArrowGlyph() -> impl IntoView {
    view! {
        <svg
            class="cta__arrow"
            viewBox="0 0 14 14"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path
                d="M2 7H12M12 7L8 3M12 7L8 11"
                stroke="currentColor"
                stroke-width="1.5"
                stroke-linecap="round"
                stroke-linejoin="round"
                style="opacity: 0.8"
            />
        </svg>
    }
}
