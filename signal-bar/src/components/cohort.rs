//! Cohort badge and the separators between left-cluster items

use leptos::prelude::*;
use shared::palette;

/// cohort label with a hand-drawn underline
#[component]
pub fn CohortBadge(label: String) -> impl IntoView {
    view! {
        <div class="cohort">
            <span
                class="cohort__label"
                style=format!("color: {}; font-weight: 500;", palette::DEEP_TEAL)
            >
                {label}
            </span>
            <svg
                class="cohort__underline"
                height="4"
                viewBox="0 0 100 4"
                preserveAspectRatio="none"
                fill="none"
                xmlns="http://www.w3.org/2000/svg"
            >
                <path
                    d="M0 2.5C15 1 25 3.5 40 2C55 0.5 70 3 85 1.5C92 1 100 2.5 100 2.5"
                    stroke=palette::ROSE
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    style="opacity: 0.7"
                />
            </svg>
        </div>
    }
}

/// organic wave, wide layouts only
#[component]
pub fn WavyDivider() -> impl IntoView {
    view! {
        <svg
            class="wavy-divider"
            viewBox="0 0 24 16"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path
                d="M4 8C6 6 8 10 12 8C16 6 18 10 20 8"
                stroke=palette::TEAL
                stroke-width="1.5"
                stroke-linecap="round"
                style="opacity: 0.4"
            />
        </svg>
    }
}

#[component]
pub fn DotSeparator(symbol: String) -> impl IntoView {
    view! {
        <span class="dot-separator" style=format!("color: {};", palette::SAGE)>
            {symbol}
        </span>
    }
}
