//! Formatter implementations

pub mod colors;
pub mod console;
pub mod header;

pub use colors::{color_by_method, color_by_status, reset_color};
pub use console::ConsoleFormatter;
pub use header::HeaderFormatter;
