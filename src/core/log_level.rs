//! Log level definitions and the atomic threshold gate

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Number of severity levels
pub const LEVEL_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Panic = 4,
    Fatal = 5,
}

impl LogLevel {
    /// All levels in ascending severity order
    pub const ALL: [LogLevel; LEVEL_COUNT] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Panic,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Panic => "panic",
            LogLevel::Fatal => "fatal",
        }
    }

    /// Fixed-width bracketed tag used by the header formatter
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Debug => "[debug]",
            LogLevel::Info => "[info ]",
            LogLevel::Warn => "[warn ]",
            LogLevel::Error => "[error]",
            LogLevel::Panic => "[panic]",
            LogLevel::Fatal => "[fatal]",
        }
    }

    /// Single-letter bracketed tag used by the console formatter
    pub fn console_tag(&self) -> &'static str {
        match self {
            LogLevel::Debug => "[D]",
            LogLevel::Info => "[I]",
            LogLevel::Warn => "[W]",
            LogLevel::Error => "[E]",
            LogLevel::Panic => "[P]",
            LogLevel::Fatal => "[F]",
        }
    }

    /// Parse a level name, falling back to `Debug` for unrecognized names.
    ///
    /// Matching is case-insensitive. This is the lenient parser used by the
    /// name-based configuration surface; for strict parsing use `FromStr`.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(LogLevel::Debug)
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warn,
            3 => LogLevel::Error,
            4 => LogLevel::Panic,
            _ => LogLevel::Fatal,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "panic" => Ok(LogLevel::Panic),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// Atomically-readable severity threshold.
///
/// The threshold is the single point of true concurrent mutation on the hot
/// path, so it lives outside the logger's configuration lock. A reader racing
/// `set` observes either the old or the new threshold, never a torn value.
#[derive(Debug)]
pub struct LevelGate(AtomicU8);

impl LevelGate {
    pub fn new(threshold: LogLevel) -> Self {
        Self(AtomicU8::new(threshold as u8))
    }

    /// A record at `level` is emitted iff `level >= threshold`.
    #[inline]
    pub fn should_emit(&self, level: LogLevel) -> bool {
        level as u8 >= self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, threshold: LogLevel) {
        self.0.store(threshold as u8, Ordering::Relaxed);
    }

    pub fn get(&self) -> LogLevel {
        LogLevel::from_u8(self.0.load(Ordering::Relaxed))
    }
}
