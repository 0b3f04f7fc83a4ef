//! Named configuration options
//!
//! Each option is a single mutation of a [`Logger`](crate::core::Logger),
//! applied through [`Logger::apply`](crate::core::Logger::apply) or
//! [`global::configure`](crate::global::configure). Options compose by
//! sequential application; later options override earlier ones on the same
//! field.

use crate::core::error::Result;
use crate::core::fanout::Destination;
use crate::core::format::Formatter;
use crate::core::header::Flags;
use crate::core::log_level::LogLevel;
use crate::writers;
use std::io::Write;
use std::path::Path;

pub enum LoggerOption {
    Level(LogLevel),
    Writer(Destination),
    LevelWriter(LogLevel, Vec<Destination>),
    Flags(Flags),
    Prefix(String),
    ModuleNames(bool),
    Formatter(Box<dyn Formatter>),
}

/// Threshold by name, case-insensitive; unknown names fall back to `debug`.
pub fn with_level(name: &str) -> LoggerOption {
    LoggerOption::Level(LogLevel::from_name(name))
}

/// Replace the primary destination.
pub fn with_writer(destination: impl Write + Send + 'static) -> LoggerOption {
    LoggerOption::Writer(Box::new(destination))
}

/// Append extra destinations for the named level.
pub fn with_level_writer(name: &str, destinations: Vec<Destination>) -> LoggerOption {
    LoggerOption::LevelWriter(LogLevel::from_name(name), destinations)
}

/// Header rendering flags, see [`crate::core::header`].
pub fn with_flags(flags: Flags) -> LoggerOption {
    LoggerOption::Flags(flags)
}

/// Set or replace the header prefix text.
pub fn with_prefix(prefix: impl Into<String>) -> LoggerOption {
    LoggerOption::Prefix(prefix.into())
}

/// Toggle the caller's module name in the header.
pub fn with_module_names(show: bool) -> LoggerOption {
    LoggerOption::ModuleNames(show)
}

/// Replace the formatter.
pub fn with_formatter(formatter: impl Formatter + 'static) -> LoggerOption {
    LoggerOption::Formatter(Box::new(formatter))
}

/// Primary destination teeing stdout with `<dir>/service.log`, creating the
/// directory as needed.
///
/// Opening the file is the fallible step; applying the returned option cannot
/// fail.
pub fn with_path(dir: impl AsRef<Path>) -> Result<LoggerOption> {
    Ok(LoggerOption::Writer(Box::new(writers::stdout_tee(dir)?)))
}
