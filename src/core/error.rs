//! Error types for the logging engine

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// File writer error with path
    #[error("File writer error for '{path}': {message}")]
    FileWriterError { path: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a file writer error
    pub fn file_writer(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileWriterError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

/// Control-flow fault raised by a panic-level record.
///
/// Carries the fully formatted message text. This is a deliberate, gated
/// control transfer, not a write failure; callers may observe or ignore it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct PanicFault(pub String);

impl PanicFault {
    /// The formatted message carried by the fault
    pub fn message(&self) -> &str {
        &self.0
    }
}
