//! Writer fan-out: one primary destination plus per-level extras

use super::log_level::{LogLevel, LEVEL_COUNT};
use std::io::{self, Write};

/// Anything capable of accepting a byte sequence.
pub type Destination = Box<dyn Write + Send>;

/// Holds the primary destination and, per severity level, an ordered list of
/// extra destinations. The same rendered bytes go to all of them.
pub struct WriterFanout {
    primary: Destination,
    extras: [Vec<Destination>; LEVEL_COUNT],
}

impl WriterFanout {
    pub fn new(primary: Destination) -> Self {
        Self {
            primary,
            extras: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Replace the primary destination.
    pub fn set_primary(&mut self, destination: Destination) {
        self.primary = destination;
    }

    /// Append an extra destination for `level`. Registration order is
    /// preserved; there is no deduplication and no removal.
    pub fn register_extra(&mut self, level: LogLevel, destination: Destination) {
        self.extras[level as usize].push(destination);
    }

    /// Write `bytes` to the primary destination, then to every extra
    /// registered for `level`, in registration order.
    ///
    /// Write failures are swallowed here and never retried: logging must not
    /// fail the caller's primary work, so a broken destination loses its
    /// bytes instead of propagating an error.
    pub fn dispatch(&mut self, level: LogLevel, bytes: &[u8]) {
        let _ = self.primary.write_all(bytes);
        for extra in &mut self.extras[level as usize] {
            let _ = extra.write_all(bytes);
        }
    }

    /// Best-effort flush of the primary and the extras for `level`.
    pub fn flush_level(&mut self, level: LogLevel) {
        let _ = self.primary.flush();
        for extra in &mut self.extras[level as usize] {
            let _ = extra.flush();
        }
    }

    /// Flush everything, then detach all destinations. Afterward the fan-out
    /// writes into a sink.
    pub fn close(&mut self) {
        let _ = self.primary.flush();
        for list in &mut self.extras {
            for extra in list.iter_mut() {
                let _ = extra.flush();
            }
            list.clear();
        }
        self.primary = Box::new(io::sink());
    }
}
