//! Seat-count indicator and deadline

use leptos::prelude::*;
use shared::palette;

use crate::animation::{pulse_style, Pulse, PulseFrame};

/// pulsing rose dot next to the seat count.
///
/// without a pulse timeline the halo sits still at its first frame.
#[component]
pub fn SpotsIndicator(
    label: String,
    clock: ReadSignal<f64>,
    pulse: Option<Pulse>,
) -> impl IntoView {
    let halo_style = move || {
        let frame = pulse
            .as_ref()
            .map(|pulse| pulse.sample(clock.get()))
            .unwrap_or(PulseFrame::RESTING);
        pulse_style(frame)
    };

    view! {
        <div class="spots">
            <div class="spots__signal">
                <div class="spots__halo" style=halo_style></div>
                <div
                    class="spots__dot"
                    style=format!("background-color: {};", palette::ROSE)
                ></div>
            </div>
            <span
                class="spots__label"
                style=format!("color: {}; font-weight: 500;", palette::DEEP_TEAL)
            >
                {label}
            </span>
        </div>
    }
}

#[component]
pub fn Deadline(text: String) -> impl IntoView {
    view! {
        <span
            class="deadline"
            style=format!("color: {}; font-weight: 400;", palette::SLATE)
        >
            {text}
        </span>
    }
}
