// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::CaptureConfig;
use crate::ring::{RingBuffer, MAX_READ_ALLOC};

/// Cloneable, thread-safe handle around a [`RingBuffer`].
///
/// Every operation serializes through one mutex, so a reader observes a
/// prior append in full or not at all; two appends never interleave. The
/// lock is held only for the duration of a bounded copy (at most the read
/// ceiling or the buffer capacity), never across I/O.
#[derive(Debug, Clone)]
pub struct SharedRing {
    inner: Arc<Mutex<RingBuffer>>,
}

impl SharedRing {
    /// Create a shared ring with the given capacity, clamped as in
    /// [`RingBuffer::new`].
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RingBuffer::new(capacity))),
        }
    }

    /// Create a shared ring sized from a [`CaptureConfig`].
    pub fn with_config(config: &CaptureConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Append data to the buffer.
    pub fn append(&self, data: &[u8]) {
        self.inner.lock().write(data);
    }

    /// Read the last `n` bytes, oldest first. Returns an independent copy;
    /// callers may keep or mutate it without racing future writes.
    ///
    /// Out-of-range sizes are rejected before the lock is taken: the check
    /// depends only on the argument, so a malformed request never contends
    /// with writers.
    pub fn read_tail(&self, n: usize) -> Option<Vec<u8>> {
        if n == 0 || n > MAX_READ_ALLOC {
            return None;
        }
        self.inner.lock().tail(n)
    }

    /// Number of bytes currently stored.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether nothing has been written since construction or the last reset.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Effective (clamped) capacity.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Clear the buffer back to its freshly-constructed state.
    pub fn reset(&self) {
        self.inner.lock().reset();
    }
}

/// Infallible sink adapter so capture code can `io::copy` straight into
/// the ring.
impl io::Write for SharedRing {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Write for &SharedRing {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;
