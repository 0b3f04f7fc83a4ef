//! Process-wide default logger
//!
//! One lazily-created `Logger` shared by the whole process, mirrored by
//! free-function severity calls. The default is an ordinary instance; nothing
//! in the engine is tied to it, and independently constructed loggers stay
//! fully isolated. Configure it before the first concurrent use: the
//! threshold may change at any time, but writer and header mutation race
//! in-flight dispatches only for the duration of the configuration lock.

use crate::core::fanout::Destination;
use crate::core::log_level::LogLevel;
use crate::core::logger::{LogOutcome, Logger};
use crate::core::template::Args;
use crate::options::LoggerOption;
use std::sync::OnceLock;

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// The process-wide default logger: console formatter writing to stdout,
/// threshold `Debug`. Created on first use.
pub fn default() -> &'static Logger {
    DEFAULT.get_or_init(Logger::console)
}

/// Apply configuration options to the default logger, in order.
pub fn configure(options: impl IntoIterator<Item = LoggerOption>) {
    default().apply(options);
}

/// Threshold by name on the default logger; unknown names fall back to
/// `debug`.
pub fn set_level(name: &str) {
    default().set_level_by_name(name);
}

/// Replace the default logger's primary destination.
pub fn set_writer(destination: Destination) {
    default().set_writer(destination);
}

/// Append extra destinations for the named level on the default logger.
pub fn set_level_writer(level_name: &str, destinations: Vec<Destination>) {
    default().set_level_writer(level_name, destinations);
}

#[track_caller]
pub fn debug(template: &str, args: Args<'_>) -> LogOutcome {
    default().log(LogLevel::Debug, template, args)
}

#[track_caller]
pub fn info(template: &str, args: Args<'_>) -> LogOutcome {
    default().log(LogLevel::Info, template, args)
}

#[track_caller]
pub fn warn(template: &str, args: Args<'_>) -> LogOutcome {
    default().log(LogLevel::Warn, template, args)
}

#[track_caller]
pub fn error(template: &str, args: Args<'_>) -> LogOutcome {
    default().log(LogLevel::Error, template, args)
}

/// Panic-level call on the default logger; the control transfer is the
/// returned outcome.
#[track_caller]
pub fn panic(template: &str, args: Args<'_>) -> LogOutcome {
    default().log(LogLevel::Panic, template, args)
}

/// Fatal-level call on the default logger; terminates the process after the
/// write completes.
#[track_caller]
pub fn fatal(template: &str, args: Args<'_>) -> LogOutcome {
    default().log(LogLevel::Fatal, template, args)
}
