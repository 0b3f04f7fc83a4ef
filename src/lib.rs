//! # Leveled Log
//!
//! A leveled logging engine: log calls from debug through fatal are gated
//! against a configurable threshold, rendered through a pluggable formatter
//! and fanned out to one primary destination plus per-level extras.
//!
//! ## Features
//!
//! - **Leveled Gating**: atomic severity threshold, safe to change while
//!   other threads log
//! - **Pluggable Formatters**: colorized console lines or classic headers
//!   with date, time and `file:line` blocks
//! - **Per-Level Fan-out**: route urgent levels to extra destinations on top
//!   of the primary one
//! - **Typed Termination**: panic-level calls return the control transfer as
//!   a value; fatal-level calls end the process after the write
//!
//! ## Quick start
//!
//! ```
//! use leveled_log::prelude::*;
//! use leveled_log::info;
//!
//! let logger = Logger::new();
//! logger.set_level(LogLevel::Info);
//! info!(logger, "listening on port %v", 8080);
//! ```

pub mod core;
pub mod formatters;
pub mod global;
pub mod macros;
pub mod options;
pub mod writers;

pub mod prelude {
    pub use crate::core::header;
    pub use crate::core::{
        BufferPool, CallSite, Destination, Flags, Formatter, HeaderOptions, LevelGate, LogLevel,
        LogOutcome, Logger, LoggerError, PanicFault, PooledBuf, Result, WriterFanout,
    };
    pub use crate::formatters::{ConsoleFormatter, HeaderFormatter};
    pub use crate::options::{
        with_flags, with_formatter, with_level, with_level_writer, with_module_names, with_path,
        with_prefix, with_writer, LoggerOption,
    };
}

pub use self::core::{
    BufferPool, CallSite, Destination, Flags, Formatter, HeaderOptions, LevelGate, LogLevel,
    LogOutcome, Logger, LoggerError, PanicFault, PooledBuf, Result, WriterFanout,
};
pub use self::formatters::{
    color_by_method, color_by_status, reset_color, ConsoleFormatter, HeaderFormatter,
};
pub use self::options::LoggerOption;
pub use self::writers::{
    create_dir_if_not_exists, exists, file_writer, stdout_tee, MultiWriter, SERVICE_LOG,
};
