#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{self, LevelFilter, Metadata, Record};

/// Writes `LEVEL - message` lines to stderr so stdout stays free for the
/// terminal board and the simulator's JSON.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr(), "{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "MINIBATTLE_LOG";

/// Parse a level name, falling back to `default` for missing or unknown
/// values.
pub fn level_from(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value.and_then(|lvl| lvl.parse().ok()).unwrap_or(default)
}

/// Initialize logging with a level taken from `MINIBATTLE_LOG`, `default`
/// when unset or invalid. Safe to call more than once.
pub fn init_logging(default: LevelFilter) {
    let value = env::var(LOG_ENV).ok();
    let level = level_from(value.as_deref(), default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
