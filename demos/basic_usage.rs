//! Basic logger usage example
//!
//! Demonstrates leveled logging, thresholds, per-level extra destinations and
//! the process-wide default logger.
//!
//! Run with: cargo run --example basic_usage

use leveled_log::prelude::*;
use leveled_log::{global, info, warn};

fn main() -> Result<()> {
    println!("=== Leveled Log - Basic Usage Example ===\n");

    // A console logger writing colorized lines to stdout
    let logger = Logger::console();

    println!("1. Logging at different levels:");
    logger.debug("this is a debug message", &[]);
    logger.info("this is an info message", &[]);
    logger.warn("this is a warning message", &[]);
    logger.error("this is an error message", &[]);

    println!("\n2. Raising the threshold to warn:");
    logger.set_level_by_name("warn");
    logger.debug("hidden below the threshold", &[]);
    logger.info("also hidden", &[]);
    logger.warn("still visible", &[]);

    println!("\n3. Template arguments:");
    logger.set_level(LogLevel::Debug);
    logger.info("listening on port %v", &[&8080]);
    logger.info("this is info", &[&111, &1113]);

    println!("\n4. Header formatter with file:line and prefix:");
    let header_logger = Logger::new();
    header_logger.apply([
        with_prefix("demo "),
        with_flags(header::TIME | header::SHORT_FILE),
    ]);
    header_logger.info("classic header line", &[]);

    println!("\n5. Extra destination for error-level records:");
    let errors = tempfile::tempdir().expect("temp dir");
    let err_file = leveled_log::file_writer(errors.path().join("service.err.log"))?;
    logger.set_level_writer("error", vec![Box::new(err_file)]);
    logger.error("this line also lands in service.err.log", &[]);

    println!("\n6. The process-wide default logger and macros:");
    global::set_level("info");
    global::info("free-function call on the default instance", &[]);

    info!(header_logger, "macro call with a captured call site");
    warn!(header_logger, "retry %v of %v", 1, 3);

    println!("\n7. Panic-level control transfer as a value:");
    match logger.panic("recoverable shutdown signal", &[]) {
        LogOutcome::Panic(message) => println!("   observed fault: {}", message),
        other => println!("   unexpected outcome: {:?}", other),
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
