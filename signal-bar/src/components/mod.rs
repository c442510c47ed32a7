//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod cohort;
mod cta;
mod header;
mod spots;

pub use cohort::{CohortBadge, DotSeparator, WavyDivider};
pub use cta::CallToAction;
pub use header::SignalBar;
pub use spots::{Deadline, SpotsIndicator};
