use std::env;

use fern::colors::{Color, ColoredLevelConfig};
use fern::Dispatch;
use log::{LevelFilter, SetLoggerError};

pub const LEVEL_VARIABLE: &str = "VIEWER_LOG";

/// Reads the log level from `VIEWER_LOG`, falling back to `info`.
pub fn level_from_env() -> LevelFilter {
    env::var(LEVEL_VARIABLE)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

pub fn setup(level: LevelFilter) -> Result<(), SetLoggerError> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::BrightBlue)
        .trace(Color::BrightBlack);

    Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{level}]({target}) {message}",
                level = colors.color(record.level()),
                target = record.target(),
                message = message
            ))
        })
        .level(LevelFilter::Warn)
        .level_for("viewer", level)
        .level_for("game", level)
        .level_for("io", level)
        .chain(std::io::stderr())
        .apply()
}
