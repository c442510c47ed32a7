//! ==============================================================================
//! hooks.rs - browser-driven signals
//! ==============================================================================
//!
//! purpose:
//!     the only two things the bar reads from the host: time and viewport
//!     width. both degrade to a fixed value when there is no window: the
//!     clock parks past every one-shot timeline (bar fully visible, springs
//!     at rest) and the layout stays narrow.
//!
//! ==============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// width assumed before the first measurement
const FALLBACK_WIDTH: f64 = 0.0;

/// clock value used when frames can't be scheduled; a whole number of pulse
/// periods, long after the entrance and any spring have settled
const PARKED_CLOCK: f64 = 60.0;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

// ==============================================================================
// frame clock
// ==============================================================================

/// seconds since the first animation frame after mount.
///
/// one requestAnimationFrame loop per caller; it stops on the first frame
/// after the owning component is cleaned up.
pub fn use_frame_clock() -> ReadSignal<f64> {
    let (now, set_now) = signal(0.0);

    let Some(window) = web_sys::window() else {
        warn!("no window, animations parked at rest");
        set_now.set(PARKED_CLOCK);
        return now;
    };

    let stopped = Arc::new(AtomicBool::new(false));
    let frame: FrameCallback = Rc::new(RefCell::new(None));

    {
        let stopped = Arc::clone(&stopped);
        let next = Rc::clone(&frame);
        let window = window.clone();
        let origin = Cell::new(None::<f64>);

        *frame.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            if stopped.load(Ordering::Relaxed) {
                // drop our own closure to break the Rc cycle
                next.borrow_mut().take();
                debug!("frame clock stopped");
                return;
            }

            let start = match origin.get() {
                Some(start) => start,
                None => {
                    origin.set(Some(timestamp));
                    timestamp
                }
            };
            set_now.set((timestamp - start) / 1000.0);

            if let Some(callback) = next.borrow().as_ref() {
                if window
                    .request_animation_frame(callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    warn!("requestAnimationFrame rejected, animations parked at rest");
                    set_now.set(PARKED_CLOCK);
                }
            }
        }));
    }

    if let Some(callback) = frame.borrow().as_ref() {
        if window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("requestAnimationFrame rejected, animations parked at rest");
            set_now.set(PARKED_CLOCK);
        }
    }

    on_cleanup(move || stopped.store(true, Ordering::Relaxed));

    now
}

// ==============================================================================
// viewport width
// ==============================================================================

fn inner_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// `window.innerWidth` in css px, updated on resize
pub fn use_viewport_width() -> ReadSignal<f64> {
    let Some(initial) = inner_width() else {
        warn!("no window, using the narrow layout");
        return signal(FALLBACK_WIDTH).0;
    };
    let (width, set_width) = signal(initial);

    let handle = window_event_listener(ev::resize, move |_| {
        if let Some(current) = inner_width() {
            set_width.set(current);
        }
    });
    on_cleanup(move || handle.remove());

    width
}
