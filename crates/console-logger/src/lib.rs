//! Console Logger
//!
//! `log` backend for the browser. Records are prefixed with a local
//! timestamp and the level, then routed to the matching `console.*` call.
//! Off wasm32 (native tests, tooling) the same lines go to stderr.

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger writing formatted records to the console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(Local::now(), record.level(), &record.args().to_string());
        emit(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Can only succeed once per process; later calls return the `log` error.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Format one console line: `HH:MM:SS.mmm LEVEL message`
pub fn format_line(at: DateTime<Local>, level: Level, message: &str) -> String {
    format!("{} {:<5} {}", at.format("%H:%M:%S%.3f"), level, message)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = line.into();
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::log_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}
