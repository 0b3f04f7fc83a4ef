//! Logging macros
//!
//! These wrap the `Logger` severity methods and capture the expansion site,
//! so the header's `file:line` and module blocks point at the calling code
//! even through layered helpers.
//!
//! # Examples
//!
//! ```
//! use leveled_log::prelude::*;
//! use leveled_log::{info, warn};
//!
//! let logger = Logger::new();
//! info!(logger, "server listening on port %v", 8080);
//! warn!(logger, "retry %v of %v", 3, 5);
//! ```

/// Log at an explicit level, capturing the call site.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_at(
            $level,
            $crate::CallSite::new(file!(), line!(), module_path!()),
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a panic-level message. The returned outcome carries the resolved
/// message when the record clears the threshold; named to avoid shadowing
/// `std::panic!`.
#[macro_export]
macro_rules! panic_log {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Panic, $($arg)+)
    };
}

/// Log a fatal-level message, terminating the process after the write.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, LogOutcome, Logger};
    use crate::formatters::HeaderFormatter;
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).expect("valid utf8")
        }
    }

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn plain_logger() -> (Logger, SharedBuf) {
        let buf = SharedBuf::default();
        let logger = Logger::with_parts(Box::new(HeaderFormatter::new()), Box::new(buf.clone()));
        logger.set_flags(0);
        logger.set_module_names(false);
        (logger, buf)
    }

    #[test]
    fn test_log_macro_with_explicit_level() {
        let (logger, buf) = plain_logger();
        log!(logger, LogLevel::Info, "simple");
        log!(logger, LogLevel::Error, "code %v", 500);
        assert_eq!(buf.contents(), "[info ] simple\n[error] code 500\n");
    }

    #[test]
    fn test_severity_macros() {
        let (logger, buf) = plain_logger();
        debug!(logger, "d");
        info!(logger, "i %v", 1);
        warn!(logger, "w");
        error!(logger, "e");
        assert_eq!(buf.contents(), "[debug] d\n[info ] i 1\n[warn ] w\n[error] e\n");
    }

    #[test]
    fn test_panic_log_macro_returns_outcome() {
        let (logger, _buf) = plain_logger();
        let outcome = panic_log!(logger, "stop %v", "now");
        assert_eq!(outcome, LogOutcome::Panic("stop now".to_string()));
    }

    #[test]
    fn test_macros_capture_call_site() {
        let buf = SharedBuf::default();
        let logger = Logger::with_parts(Box::new(HeaderFormatter::new()), Box::new(buf.clone()));
        logger.set_flags(crate::core::header::SHORT_FILE);
        logger.set_module_names(true);

        info!(logger, "located");
        let line = buf.contents();
        // module_path!() expands inside this test module
        assert!(line.contains("[tests]"), "module tag missing: {}", line);
        assert!(line.contains("macros.rs:"), "file block missing: {}", line);
    }
}
