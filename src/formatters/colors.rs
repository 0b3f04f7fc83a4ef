//! ANSI color tables and HTTP coloring helpers
//!
//! The tables are constants, built eagerly; there is no first-use
//! initialization to guard.

use crate::core::log_level::LogLevel;

const ESCAPE_PREFIX: &str = "\x1b[";
const RESET: &str = "\x1b[0m";

/// Per-severity brush colors for the console level tag, indexed by severity,
/// plus the background-blue slot and the non-logging notice slot.
const LEVEL_BRUSHES: [&str; 8] = [
    "1;37", // debug       white
    "1;34", // info        blue
    "1;33", // warn        yellow
    "1;31", // error       red
    "1;35", // panic       magenta
    "1;36", // fatal       cyan
    "1;44", //             background blue
    "1;32", // notice      green
];

/// Wrap `text` in the brush color for `level`.
pub(crate) fn brush(level: LogLevel, text: &str) -> String {
    let color = LEVEL_BRUSHES[level as usize];
    format!("{}{}m{}{}", ESCAPE_PREFIX, color, text, RESET)
}

#[cfg(not(windows))]
mod table {
    pub const GREEN: &str = "\x1b[97;42m";
    pub const WHITE: &str = "\x1b[90;47m";
    pub const YELLOW: &str = "\x1b[97;43m";
    pub const RED: &str = "\x1b[97;41m";
    pub const BLUE: &str = "\x1b[97;44m";
    pub const MAGENTA: &str = "\x1b[97;45m";
    pub const CYAN: &str = "\x1b[97;46m";
}

#[cfg(windows)]
mod table {
    pub const GREEN: &str = "\x1b[42m";
    pub const WHITE: &str = "\x1b[47m";
    pub const YELLOW: &str = "\x1b[43m";
    pub const RED: &str = "\x1b[41m";
    pub const BLUE: &str = "\x1b[44m";
    pub const MAGENTA: &str = "\x1b[45m";
    pub const CYAN: &str = "\x1b[46m";
}

/// Color for an HTTP status code.
///
/// 2xx is green, 3xx white, 4xx yellow; 5xx and anything unmatched is red.
pub fn color_by_status(code: i32) -> &'static str {
    match code {
        200..=299 => table::GREEN,
        300..=399 => table::WHITE,
        400..=499 => table::YELLOW,
        _ => table::RED,
    }
}

/// Color for an HTTP method; unrecognized methods get the reset code.
pub fn color_by_method(method: &str) -> &'static str {
    match method {
        "GET" => table::BLUE,
        "POST" => table::CYAN,
        "PUT" => table::YELLOW,
        "DELETE" => table::RED,
        "PATCH" => table::GREEN,
        "HEAD" => table::MAGENTA,
        "OPTIONS" => table::WHITE,
        _ => RESET,
    }
}

/// The reset escape sequence
pub fn reset_color() -> &'static str {
    RESET
}
