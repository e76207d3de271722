//! Console Logger
//!
//! A `log` backend for browser frontends. Records go to the matching
//! `console.*` method on wasm targets and to stderr everywhere else, so the
//! same call sites work in native unit tests.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Render a record as `[module] message`, keeping only the last path
/// segment of the target.
pub fn format_record(record: &Record) -> String {
    let target = record.target();
    let short = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", short, record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        write_line(record.level(), &format_record(record));
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(level: Level, line: &str) {
    eprintln!("{:<5} {}", level, line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_shortens_target() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("bound {} forms", 2))
                .level(Level::Info)
                .target("score_ambiental_ui::components::form_guard")
                .build(),
        );
        assert_eq!(line, "[form_guard] bound 2 forms");
    }

    #[test]
    fn test_format_record_plain_target() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("ready"))
                .level(Level::Debug)
                .target("app")
                .build(),
        );
        assert_eq!(line, "[app] ready");
    }
}
