//! Header rendering flags and options

use super::call_site::CallSite;
use chrono::{DateTime, Datelike, Local, Timelike, Utc};

/// Header flag bitmask
pub type Flags = u32;

/// Include the date: `2009/01/23`
pub const DATE: Flags = 1 << 0;
/// Include the time: `01:23:23`
pub const TIME: Flags = 1 << 1;
/// Include microsecond resolution: `01:23:23.123123` (implies `TIME`)
pub const MICROSECONDS: Flags = 1 << 2;
/// Include the full file path and line number: `/a/b/c/d.rs:23`
pub const LONG_FILE: Flags = 1 << 3;
/// Include the final file name element and line number: `d.rs:23`
/// (overrides `LONG_FILE`)
pub const SHORT_FILE: Flags = 1 << 4;
/// Render the date and time in UTC rather than the local time zone
pub const UTC: Flags = 1 << 5;
/// Move the prefix from the beginning of the header to before the message
pub const MSG_PREFIX: Flags = 1 << 6;
/// Initial values for the default logger
pub const STD_FLAGS: Flags = DATE | TIME;

/// Configuration bag consumed by the formatters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    pub flags: Flags,
    pub prefix: String,
    /// Include the caller's module name in the header
    pub show_module: bool,
}

impl HeaderOptions {
    pub fn new() -> Self {
        Self {
            flags: STD_FLAGS | MICROSECONDS | SHORT_FILE,
            prefix: String::new(),
            show_module: true,
        }
    }

    /// Write the date/time block selected by the flags, with a trailing
    /// space per populated block.
    pub(crate) fn write_time(&self, buf: &mut Vec<u8>, now: DateTime<Local>) {
        if self.flags & (DATE | TIME | MICROSECONDS) == 0 {
            return;
        }
        if self.flags & UTC != 0 {
            self.write_clock(buf, &now.with_timezone(&Utc));
        } else {
            self.write_clock(buf, &now);
        }
    }

    fn write_clock<T: Datelike + Timelike>(&self, buf: &mut Vec<u8>, t: &T) {
        if self.flags & DATE != 0 {
            push_uint(buf, t.year().max(0) as u64, 4);
            buf.push(b'/');
            push_uint(buf, u64::from(t.month()), 2);
            buf.push(b'/');
            push_uint(buf, u64::from(t.day()), 2);
            buf.push(b' ');
        }
        if self.flags & (TIME | MICROSECONDS) != 0 {
            push_uint(buf, u64::from(t.hour()), 2);
            buf.push(b':');
            push_uint(buf, u64::from(t.minute()), 2);
            buf.push(b':');
            push_uint(buf, u64::from(t.second()), 2);
            if self.flags & MICROSECONDS != 0 {
                buf.push(b'.');
                push_uint(buf, u64::from(t.nanosecond() / 1_000 % 1_000_000), 6);
            }
            buf.push(b' ');
        }
    }

    /// Write the `file:line:` block when a file flag is set and a call site
    /// is available.
    pub(crate) fn write_file(&self, buf: &mut Vec<u8>, site: Option<&CallSite>) {
        if self.flags & (SHORT_FILE | LONG_FILE) == 0 {
            return;
        }
        let Some(site) = site else { return };
        let file = if self.flags & SHORT_FILE != 0 {
            site.short_file()
        } else {
            site.file
        };
        buf.extend_from_slice(file.as_bytes());
        buf.push(b':');
        push_uint(buf, u64::from(site.line), 0);
        buf.push(b':');
    }
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheap integer to fixed-width decimal ASCII; width 0 or 1 means no padding.
pub(crate) fn push_uint(buf: &mut Vec<u8>, mut n: u64, mut width: usize) {
    let mut digits = [0u8; 20];
    let mut pos = digits.len();
    loop {
        pos -= 1;
        digits[pos] = b'0' + (n % 10) as u8;
        n /= 10;
        width = width.saturating_sub(1);
        if n == 0 && width == 0 {
            break;
        }
    }
    buf.extend_from_slice(&digits[pos..]);
}
