//! Formatter trait for rendering records into output bytes

use super::buffer_pool::PooledBuf;
use super::call_site::CallSite;
use super::header::HeaderOptions;
use super::log_level::LogLevel;

/// Renders one record into a finished byte sequence.
///
/// The returned buffer ends with exactly one trailing newline: a newline is
/// appended only when the message does not already end with one, and
/// preexisting trailing newlines are never collapsed. `message` is the
/// fully-resolved message text; template/argument combination happens before
/// the formatter runs.
pub trait Formatter: Send + Sync {
    fn render(
        &self,
        opts: &HeaderOptions,
        level: LogLevel,
        site: Option<&CallSite>,
        message: &str,
    ) -> PooledBuf;
}

/// Append the single guaranteed trailing newline.
pub(crate) fn terminate(buf: &mut Vec<u8>) {
    if buf.last() != Some(&b'\n') {
        buf.push(b'\n');
    }
}
