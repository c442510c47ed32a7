//! ==============================================================================
//! logging.rs - `log` facade backed by the browser console
//! ==============================================================================
//!
//! records from this crate and from the motion crate are formatted once and
//! handed to leptos' logging macros, so errors and warnings keep their
//! console severity.
//!
//! ==============================================================================

use log::{Level, LevelFilter, Log, Metadata, Record};

const LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Warn
};

struct ConsoleLogger {
    level: LevelFilter,
}

static LOGGER: ConsoleLogger = ConsoleLogger { level: LEVEL };

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        match record.level() {
            Level::Error => leptos::logging::error!("{}", line),
            Level::Warn => leptos::logging::warn!("{}", line),
            _ => leptos::logging::log!("{}", line),
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!("[{} {}] {}", record.level(), record.target(), record.args())
}

/// install the console logger; a second call only warns
pub fn init() {
    match log::set_logger(&LOGGER) {
        Ok(()) => log::set_max_level(LOGGER.level),
        Err(_) => leptos::logging::warn!("signal-bar: a logger is already installed"),
    }
}

// ==============================================================================
// tests
// ==============================================================================
