//! ==============================================================================
//! lib.rs - Signal Bar
//! ==============================================================================
//!
//! purpose:
//!     sticky marketing header for the founding cohort page. a left cluster
//!     (cohort badge, pulsing seat count, deadline) balanced by a glowing
//!     call-to-action on the right.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser, built with trunk
//!     - one requestAnimationFrame clock per mounted bar drives three
//!       independent timelines: entrance fade, pulse loop, cta spring
//!     - animation maths lives in the motion crate, copy and tokens in shared
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use wasm_bindgen::prelude::*;

pub mod animation;
mod components;
pub mod hooks;
pub mod logging;

pub use components::SignalBar;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Founding Cohort" />
        <Meta name="theme-color" content=shared::palette::IVORY />

        <SignalBar />
        <main class="page">
            <section id="join" class="join"></section>
        </main>
    }
}
