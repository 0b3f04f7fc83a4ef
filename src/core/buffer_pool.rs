//! Reusable render-buffer pool
//!
//! Formatting a record happens on the hot path of every logging call; the
//! pool recycles the byte buffers used for rendering so steady-state logging
//! does not allocate. A pool miss (fresh allocation) and a pool hit are
//! indistinguishable to callers.

use parking_lot::Mutex;
use std::ops::{Deref, DerefMut};

// Buffers that grew past this capacity are not returned to the shelf.
const MAX_POOLED_CAPACITY: usize = 64 * 1024;
const MAX_POOLED_BUFFERS: usize = 32;

/// Free-list of reusable byte buffers.
#[derive(Debug)]
pub struct BufferPool {
    shelf: Mutex<Vec<Vec<u8>>>,
}

impl BufferPool {
    pub const fn new() -> Self {
        Self {
            shelf: Mutex::new(Vec::new()),
        }
    }

    /// Take a cleared buffer from the pool, allocating if none is shelved.
    ///
    /// The buffer is returned to the pool when the guard is dropped, so
    /// release happens exactly once on every exit path.
    pub fn acquire(&'static self) -> PooledBuf {
        let buf = self.shelf.lock().pop().unwrap_or_default();
        PooledBuf { buf, pool: self }
    }

    fn release(&self, mut buf: Vec<u8>) {
        if buf.capacity() > MAX_POOLED_CAPACITY {
            return;
        }
        buf.clear();
        let mut shelf = self.shelf.lock();
        if shelf.len() < MAX_POOLED_BUFFERS {
            shelf.push(buf);
        }
    }

    #[cfg(test)]
    fn shelved(&self) -> usize {
        self.shelf.lock().len()
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}

/// An acquired render buffer; storage goes back to its pool on drop.
#[derive(Debug)]
pub struct PooledBuf {
    buf: Vec<u8>,
    pool: &'static BufferPool,
}

impl Deref for PooledBuf {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        &self.buf
    }
}

impl DerefMut for PooledBuf {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.buf
    }
}

impl Drop for PooledBuf {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buf));
    }
}

static RENDER_POOL: BufferPool = BufferPool::new();

/// Acquire a buffer from the shared render pool.
pub fn acquire() -> PooledBuf {
    RENDER_POOL.acquire()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_returns_empty_buffer() {
        let mut buf = acquire();
        assert!(buf.is_empty());
        buf.extend_from_slice(b"hello");
        assert_eq!(&buf[..], b"hello");
    }

    #[test]
    fn test_release_on_drop_recycles_storage() {
        static POOL: BufferPool = BufferPool::new();
        {
            let mut buf = POOL.acquire();
            buf.extend_from_slice(b"recycled");
        }
        assert_eq!(POOL.shelved(), 1);

        let buf = POOL.acquire();
        assert!(buf.is_empty(), "shelved buffer must come back cleared");
        assert!(buf.capacity() >= 8);
    }

    #[test]
    fn test_oversized_buffers_are_discarded() {
        static POOL: BufferPool = BufferPool::new();
        {
            let mut buf = POOL.acquire();
            buf.reserve(MAX_POOLED_CAPACITY + 1);
        }
        assert_eq!(POOL.shelved(), 0);
    }

    #[test]
    fn test_concurrent_acquire_release() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let mut buf = acquire();
                        buf.extend_from_slice(format!("thread {}", i).as_bytes());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("worker panicked");
        }
    }
}
