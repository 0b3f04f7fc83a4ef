//! Console formatter implementation

use super::colors;
use crate::core::buffer_pool::{self, PooledBuf};
use crate::core::call_site::CallSite;
use crate::core::format::{terminate, Formatter};
use crate::core::header::HeaderOptions;
use crate::core::log_level::LogLevel;
use chrono::Local;

/// Renders `<time> <colorized level tag> <message>\n`.
///
/// The date/time block follows the header flags; the level tag is wrapped in
/// the per-severity brush color.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for ConsoleFormatter {
    fn render(
        &self,
        opts: &HeaderOptions,
        level: LogLevel,
        _site: Option<&CallSite>,
        message: &str,
    ) -> PooledBuf {
        let now = Local::now();
        let mut buf = buffer_pool::acquire();
        opts.write_time(&mut buf, now);
        buf.extend_from_slice(colors::brush(level, level.console_tag()).as_bytes());
        buf.push(b' ');
        buf.extend_from_slice(message.as_bytes());
        terminate(&mut buf);
        buf
    }
}
