//! Header (default) formatter implementation

use crate::core::buffer_pool::{self, PooledBuf};
use crate::core::call_site::CallSite;
use crate::core::format::{terminate, Formatter};
use crate::core::header::{HeaderOptions, MSG_PREFIX};
use crate::core::log_level::LogLevel;
use chrono::Local;

/// Renders the classic header line:
/// `[prefix]<date/time>[level tag][module]<file:line:> [prefix] <message>\n`.
///
/// The prefix leads the header unless `MSG_PREFIX` moves it directly before
/// the message; date, time and file blocks follow the flag bitmask.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderFormatter;

impl HeaderFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for HeaderFormatter {
    fn render(
        &self,
        opts: &HeaderOptions,
        level: LogLevel,
        site: Option<&CallSite>,
        message: &str,
    ) -> PooledBuf {
        let now = Local::now();
        let mut buf = buffer_pool::acquire();
        if opts.flags & MSG_PREFIX == 0 {
            buf.extend_from_slice(opts.prefix.as_bytes());
        }
        opts.write_time(&mut buf, now);
        buf.extend_from_slice(level.tag().as_bytes());
        if opts.show_module {
            if let Some(site) = site {
                if !site.module.is_empty() {
                    buf.push(b'[');
                    buf.extend_from_slice(site.scope().as_bytes());
                    buf.push(b']');
                }
            }
        }
        opts.write_file(&mut buf, site);
        if opts.flags & MSG_PREFIX != 0 {
            buf.extend_from_slice(opts.prefix.as_bytes());
        }
        buf.push(b' ');
        buf.extend_from_slice(message.as_bytes());
        terminate(&mut buf);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::header::{self, Flags};

    fn options(flags: Flags, prefix: &str, show_module: bool) -> HeaderOptions {
        HeaderOptions {
            flags,
            prefix: prefix.to_string(),
            show_module,
        }
    }

    fn render(opts: &HeaderOptions, level: LogLevel, site: Option<&CallSite>, msg: &str) -> String {
        let buf = HeaderFormatter::new().render(opts, level, site, msg);
        String::from_utf8(buf.to_vec()).expect("valid utf8")
    }

    #[test]
    fn test_bare_header_is_level_tag_and_message() {
        let opts = options(0, "", false);
        assert_eq!(render(&opts, LogLevel::Info, None, "hello"), "[info ] hello\n");
        assert_eq!(render(&opts, LogLevel::Error, None, "bad"), "[error] bad\n");
    }

    #[test]
    fn test_prefix_leads_header_by_default() {
        let opts = options(0, "svc: ", false);
        assert_eq!(render(&opts, LogLevel::Warn, None, "w"), "svc: [warn ] w\n");
    }

    #[test]
    fn test_msg_prefix_moves_prefix_before_message() {
        let opts = options(header::MSG_PREFIX, "svc:", false);
        assert_eq!(render(&opts, LogLevel::Warn, None, "w"), "[warn ]svc: w\n");
    }

    #[test]
    fn test_file_block_follows_level_tag() {
        let site = CallSite::new("src/bin/app.rs", 7, "app");
        let opts = options(header::SHORT_FILE, "", false);
        assert_eq!(
            render(&opts, LogLevel::Debug, Some(&site), "m"),
            "[debug]app.rs:7: m\n"
        );
    }

    #[test]
    fn test_module_tag_between_level_and_file() {
        let site = CallSite::new("src/worker.rs", 12, "svc::worker");
        let opts = options(header::SHORT_FILE, "", true);
        assert_eq!(
            render(&opts, LogLevel::Info, Some(&site), "m"),
            "[info ][worker]worker.rs:12: m\n"
        );
    }

    #[test]
    fn test_module_tag_skipped_without_capture() {
        let site = CallSite::new("src/worker.rs", 12, "");
        let opts = options(0, "", true);
        assert_eq!(render(&opts, LogLevel::Info, Some(&site), "m"), "[info ] m\n");
    }

    #[test]
    fn test_single_trailing_newline() {
        let opts = options(0, "", false);
        assert_eq!(render(&opts, LogLevel::Info, None, "m\n"), "[info ] m\n");
        assert_eq!(render(&opts, LogLevel::Info, None, "m\n\n"), "[info ] m\n\n");
    }
}
