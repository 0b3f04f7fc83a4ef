//! Logger core: level gate + formatter + writer fan-out

use super::call_site::CallSite;
use super::error::PanicFault;
use super::fanout::{Destination, WriterFanout};
use super::format::Formatter;
use super::header::{Flags, HeaderOptions};
use super::log_level::{LevelGate, LogLevel};
use super::template::{self, Args};
use crate::formatters::{ConsoleFormatter, HeaderFormatter};
use crate::options::LoggerOption;
use parking_lot::Mutex;
use std::io;
use std::process;

/// Result of a single logging call.
///
/// Panic-level records surface their control transfer here as a typed value
/// instead of an implicit side effect, so calling code can observe or ignore
/// it. Fatal-level records terminate the process and never produce a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutcome {
    /// The record was below the threshold and fully suppressed
    Suppressed,
    /// The record was rendered and dispatched
    Emitted,
    /// A panic-level record was dispatched; carries the resolved message
    Panic(String),
}

impl LogOutcome {
    pub fn is_emitted(&self) -> bool {
        !matches!(self, LogOutcome::Suppressed)
    }

    /// Convert a panic-level outcome into an error for `?`-style handling.
    pub fn into_result(self) -> Result<(), PanicFault> {
        match self {
            LogOutcome::Panic(message) => Err(PanicFault(message)),
            _ => Ok(()),
        }
    }
}

struct Config {
    formatter: Box<dyn Formatter>,
    fanout: WriterFanout,
    header: HeaderOptions,
    closed: bool,
}

/// A leveled logger: gates records against an atomic threshold, renders them
/// through the configured formatter and fans the bytes out to the primary
/// destination plus per-level extras.
///
/// The threshold is lock-free; all other configuration sits behind one mutex
/// so every dispatch observes a consistent snapshot even while another thread
/// reconfigures the logger. Independent instances share nothing.
pub struct Logger {
    gate: LevelGate,
    config: Mutex<Config>,
}

impl Logger {
    /// A logger rendering the classic header line to stdout, threshold
    /// `Debug`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(Box::new(HeaderFormatter::new()), Box::new(io::stdout()))
    }

    /// A logger rendering colorized console lines to stdout, threshold
    /// `Debug`.
    #[must_use]
    pub fn console() -> Self {
        Self::with_parts(Box::new(ConsoleFormatter::new()), Box::new(io::stdout()))
    }

    pub fn with_parts(formatter: Box<dyn Formatter>, destination: Destination) -> Self {
        Self {
            gate: LevelGate::new(LogLevel::Debug),
            config: Mutex::new(Config {
                formatter,
                fanout: WriterFanout::new(destination),
                header: HeaderOptions::new(),
                closed: false,
            }),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.gate.get()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.gate.set(level);
    }

    /// Threshold by name, case-insensitive; unknown names fall back to
    /// `Debug`.
    pub fn set_level_by_name(&self, name: &str) {
        self.gate.set(LogLevel::from_name(name));
    }

    /// Replace the primary destination.
    pub fn set_writer(&self, destination: Destination) {
        self.config.lock().fanout.set_primary(destination);
    }

    /// Append extra destinations for the named level, in the given order.
    /// Unknown level names fall back to `Debug`.
    pub fn set_level_writer(&self, level_name: &str, destinations: Vec<Destination>) {
        let level = LogLevel::from_name(level_name);
        let mut config = self.config.lock();
        for destination in destinations {
            config.fanout.register_extra(level, destination);
        }
    }

    pub fn set_flags(&self, flags: Flags) {
        self.config.lock().header.flags = flags;
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.config.lock().header.prefix = prefix.into();
    }

    /// Toggle the caller's module name in the header.
    pub fn set_module_names(&self, show: bool) {
        self.config.lock().header.show_module = show;
    }

    pub fn set_formatter(&self, formatter: Box<dyn Formatter>) {
        self.config.lock().formatter = formatter;
    }

    /// Apply configuration options in order; later options override earlier
    /// ones on the same field.
    pub fn apply(&self, options: impl IntoIterator<Item = LoggerOption>) {
        for option in options {
            match option {
                LoggerOption::Level(level) => self.gate.set(level),
                LoggerOption::Writer(destination) => {
                    self.config.lock().fanout.set_primary(destination);
                }
                LoggerOption::LevelWriter(level, destinations) => {
                    let mut config = self.config.lock();
                    for destination in destinations {
                        config.fanout.register_extra(level, destination);
                    }
                }
                LoggerOption::Flags(flags) => self.config.lock().header.flags = flags,
                LoggerOption::Prefix(prefix) => self.config.lock().header.prefix = prefix,
                LoggerOption::ModuleNames(show) => self.config.lock().header.show_module = show,
                LoggerOption::Formatter(formatter) => self.config.lock().formatter = formatter,
            }
        }
    }

    /// Flush and detach all destinations. Logging through a closed logger
    /// panics; silent data loss there would be misleading.
    pub fn close(&self) {
        let mut config = self.config.lock();
        config.fanout.close();
        config.closed = true;
    }

    #[track_caller]
    pub fn debug(&self, template: &str, args: Args<'_>) -> LogOutcome {
        self.log(LogLevel::Debug, template, args)
    }

    #[track_caller]
    pub fn info(&self, template: &str, args: Args<'_>) -> LogOutcome {
        self.log(LogLevel::Info, template, args)
    }

    #[track_caller]
    pub fn warn(&self, template: &str, args: Args<'_>) -> LogOutcome {
        self.log(LogLevel::Warn, template, args)
    }

    #[track_caller]
    pub fn error(&self, template: &str, args: Args<'_>) -> LogOutcome {
        self.log(LogLevel::Error, template, args)
    }

    /// Log at panic level. When the record clears the threshold the outcome
    /// is `LogOutcome::Panic` carrying the resolved message; below threshold
    /// the call is fully suppressed, fault included.
    #[track_caller]
    pub fn panic(&self, template: &str, args: Args<'_>) -> LogOutcome {
        self.log(LogLevel::Panic, template, args)
    }

    /// Log at fatal level, then terminate the process with status 1 after the
    /// current record's writes are flushed. Gated like every other level.
    #[track_caller]
    pub fn fatal(&self, template: &str, args: Args<'_>) -> LogOutcome {
        self.log(LogLevel::Fatal, template, args)
    }

    /// Log at `level`, capturing the caller's file and line. Wrappers that
    /// should stay transparent annotate themselves with `#[track_caller]`,
    /// or pass an explicit site to [`log_at`](Self::log_at).
    #[track_caller]
    pub fn log(&self, level: LogLevel, template: &str, args: Args<'_>) -> LogOutcome {
        self.log_at(level, CallSite::here(), template, args)
    }

    /// Log at `level` with an explicit call site.
    ///
    /// # Panics
    ///
    /// Panics when the logger has been closed.
    pub fn log_at(
        &self,
        level: LogLevel,
        site: CallSite,
        template: &str,
        args: Args<'_>,
    ) -> LogOutcome {
        if !self.gate.should_emit(level) {
            return LogOutcome::Suppressed;
        }

        let message = template::expand(template, args);
        {
            let mut config = self.config.lock();
            if config.closed {
                panic!("logger closed");
            }
            let buf = config
                .formatter
                .render(&config.header, level, Some(&site), &message);
            config.fanout.dispatch(level, &buf);
            if level == LogLevel::Fatal {
                // Only the current record's destinations are flushed; no
                // coordination with other in-flight calls.
                config.fanout.flush_level(level);
                process::exit(1);
            }
        }

        if level == LogLevel::Panic {
            LogOutcome::Panic(message)
        } else {
            LogOutcome::Emitted
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let config = self.config.get_mut();
        if !config.closed {
            config.fanout.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options;
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

    /// Header-formatted logger with all header fields off, writing to a
    /// shared buffer.
    fn plain_logger() -> (Logger, SharedBuf) {
        let buf = SharedBuf::default();
        let logger = Logger::with_parts(Box::new(HeaderFormatter::new()), Box::new(buf.clone()));
        logger.set_flags(0);
        logger.set_module_names(false);
        (logger, buf)
    }

    #[test]
    fn test_emitted_record_reaches_primary() {
        let (logger, buf) = plain_logger();
        assert_eq!(logger.info("server up", &[]), LogOutcome::Emitted);
        assert_eq!(buf.contents(), "[info ] server up\n");
    }

    #[test]
    fn test_below_threshold_writes_nothing() {
        let (logger, buf) = plain_logger();
        logger.set_level(LogLevel::Error);

        assert_eq!(logger.warn("dropped", &[]), LogOutcome::Suppressed);
        assert!(buf.contents().is_empty());
    }

    #[test]
    fn test_template_args_flow_through() {
        let (logger, buf) = plain_logger();
        logger.debug("this is info", &[&111, &1113]);
        assert_eq!(buf.contents(), "[debug] this is info 111 1113\n");
    }

    #[test]
    fn test_set_level_by_name_unknown_falls_back_to_debug() {
        let (logger, _buf) = plain_logger();
        logger.set_level(LogLevel::Fatal);
        logger.set_level_by_name("verbose");
        assert_eq!(logger.level(), LogLevel::Debug);
    }

    #[test]
    fn test_level_writer_receives_only_its_level() {
        let (logger, primary) = plain_logger();
        let extra = SharedBuf::default();
        logger.set_level_writer("error", vec![Box::new(extra.clone())]);

        logger.info("ordinary", &[]);
        logger.error("urgent", &[]);

        assert_eq!(primary.contents(), "[info ] ordinary\n[error] urgent\n");
        assert_eq!(extra.contents(), "[error] urgent\n");
    }

    #[test]
    fn test_panic_outcome_carries_resolved_message() {
        let (logger, buf) = plain_logger();
        let outcome = logger.panic("stopping %v", &[&"worker"]);
        assert_eq!(outcome, LogOutcome::Panic("stopping worker".to_string()));
        assert_eq!(buf.contents(), "[panic] stopping worker\n");

        let fault = outcome.into_result().expect_err("panic outcome");
        assert_eq!(fault.message(), "stopping worker");
    }

    #[test]
    fn test_panic_below_threshold_is_fully_suppressed() {
        let (logger, buf) = plain_logger();
        logger.set_level(LogLevel::Fatal);

        let outcome = logger.panic("never seen", &[]);
        assert_eq!(outcome, LogOutcome::Suppressed);
        assert!(outcome.into_result().is_ok());
        assert!(buf.contents().is_empty());
    }

    #[test]
    #[should_panic(expected = "logger closed")]
    fn test_logging_after_close_panics() {
        let (logger, _buf) = plain_logger();
        logger.close();
        logger.info("too late", &[]);
    }

    #[test]
    fn test_set_writer_replaces_primary() {
        let (logger, old) = plain_logger();
        let new = SharedBuf::default();
        logger.set_writer(Box::new(new.clone()));

        logger.info("rerouted", &[]);
        assert!(old.contents().is_empty());
        assert_eq!(new.contents(), "[info ] rerouted\n");
    }

    #[test]
    fn test_options_compose_with_later_wins() {
        let (logger, buf) = plain_logger();
        logger.apply([
            options::with_prefix("first: "),
            options::with_level("error"),
            options::with_prefix("second: "),
        ]);

        logger.warn("hidden", &[]);
        logger.error("shown", &[]);
        assert_eq!(buf.contents(), "second: [error] shown\n");
    }

    #[test]
    fn test_formatter_swap() {
        let (logger, buf) = plain_logger();
        logger.set_formatter(Box::new(ConsoleFormatter::new()));
        logger.info("colored", &[]);
        assert_eq!(buf.contents(), "\x1b[1;34m[I]\x1b[0m colored\n");
    }

    #[test]
    fn test_concurrent_logging_and_level_changes() {
        let (logger, buf) = plain_logger();
        let logger = Arc::new(logger);

        let writers: Vec<_> = (0..4)
            .map(|_| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        logger.error("concurrent", &[]);
                    }
                })
            })
            .collect();
        let leveler = {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for _ in 0..100 {
                    logger.set_level(LogLevel::Debug);
                    logger.set_level(LogLevel::Warn);
                }
            })
        };

        for handle in writers {
            handle.join().expect("writer panicked");
        }
        leveler.join().expect("leveler panicked");

        // Error is above every threshold the leveler sets, so all 200 lines
        // arrive intact.
        let contents = buf.contents();
        assert_eq!(contents.lines().count(), 200);
        assert!(contents.lines().all(|l| l == "[error] concurrent"));
    }
}
