//! Console Logger
//!
//! A `log` backend for WASM front ends. Lines are timestamped, tagged with
//! the app name and routed to the matching `console.*` method so browser
//! devtools can filter by severity.

use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger writing to `window.console`
#[derive(Debug)]
pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(app_name: impl Into<String>, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.into(),
            level,
        }
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
        let time = Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&time, &self.app_name, record.level(), record.target(), &record.args().to_string());
        let value = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Only the first call installs a logger; later calls return an error.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(app_name, level));
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}

/// `[12:00:00.000] [App] INFO target: message`
pub fn format_line(time: &str, app_name: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] [{}] {:<5} {}: {}", time, app_name, level, target, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line("09:15:00.123", "UserDetails", Level::Warn, "user_records::slot", "slot unreadable");
        assert_eq!(line, "[09:15:00.123] [UserDetails] WARN  user_records::slot: slot unreadable");
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new("UserDetails", LevelFilter::Info);
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }
}
