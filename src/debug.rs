//! Stderr log bridge for the CLI.
//!
//! The converted shader owns stdout, so every diagnostic from the
//! conversion pipeline is routed to stderr through the standard `log`
//! facade. Level precedence: `--log-level` flag, then `RUST_LOG`, then
//! `warn`.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let level = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "WARN ",
                Level::Info => "INFO ",
                Level::Debug => "DEBUG",
                Level::Trace => "TRACE",
            };
            eprintln!("[{}] {}", level, record.args());
        }
    }

    fn flush(&self) {}
}

fn parse_level(token: &str) -> Option<LevelFilter> {
    match token.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Install the stderr logger. Level precedence: `--log-level` flag, then
/// `RUST_LOG`, then `warn`. A second call is a no-op because the `log`
/// facade rejects double installation.
pub fn init_log_bridge(cli_level: Option<&str>) {
    let level = cli_level
        .and_then(parse_level)
        .or_else(|| {
            std::env::var("RUST_LOG")
                .ok()
                .as_deref()
                .and_then(parse_level)
        })
        .unwrap_or(LevelFilter::Warn);

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
