//! Core engine types and traits

pub mod buffer_pool;
pub mod call_site;
pub mod error;
pub mod fanout;
pub mod format;
pub mod header;
pub mod log_level;
pub mod logger;
pub mod template;

pub use buffer_pool::{BufferPool, PooledBuf};
pub use call_site::CallSite;
pub use error::{LoggerError, PanicFault, Result};
pub use fanout::{Destination, WriterFanout};
pub use format::Formatter;
pub use header::{Flags, HeaderOptions};
pub use log_level::{LevelGate, LogLevel, LEVEL_COUNT};
pub use logger::{LogOutcome, Logger};
pub use template::{expand, Args};
