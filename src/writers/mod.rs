//! File destinations and directory glue consumed by the engine

use crate::core::error::{LoggerError, Result};
use crate::core::fanout::Destination;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Conventional combined log file name used by `with_path`
pub const SERVICE_LOG: &str = "service.log";

/// Whether `path` exists on disk
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Create `path` and any missing parents when it does not exist.
pub fn create_dir_if_not_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !exists(path) {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Open `path` for appending, creating it and its parent directories as
/// needed.
pub fn file_writer(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_if_not_exists(parent)?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggerError::file_writer(path.display().to_string(), e.to_string()))
}

/// Duplicates every write to all member destinations.
pub struct MultiWriter {
    targets: Vec<Destination>,
}

impl MultiWriter {
    pub fn new(targets: Vec<Destination>) -> Self {
        Self { targets }
    }
}

impl Write for MultiWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for target in &mut self.targets {
            target.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for target in &mut self.targets {
            target.flush()?;
        }
        Ok(())
    }
}

/// Tee of stdout and `<dir>/service.log`, the conventional combined output.
pub fn stdout_tee(dir: impl AsRef<Path>) -> Result<MultiWriter> {
    let file = file_writer(dir.as_ref().join(SERVICE_LOG))?;
    Ok(MultiWriter::new(vec![
        Box::new(io::stdout()),
        Box::new(file),
    ]))
}
