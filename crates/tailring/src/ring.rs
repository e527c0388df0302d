// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

/// Upper bound for buffer creation (1 MiB).
pub const MAX_CAPACITY: usize = 1 << 20;

/// Upper bound for a single tail-read allocation (64 KiB).
pub const MAX_READ_ALLOC: usize = 1 << 16;

/// Fixed-capacity circular byte buffer for captured process output.
///
/// Retains the most recent `capacity` bytes ever written; once the buffer
/// wraps, older data is silently overwritten. Reads return the tail of the
/// stream, oldest byte first.
#[derive(Debug)]
pub struct RingBuffer {
    buf: Vec<u8>,
    capacity: usize,
    write_pos: usize,
    wrapped: bool,
}

impl RingBuffer {
    /// Create a ring buffer with the given capacity.
    /// Capacity is clamped to `[1, MAX_CAPACITY]`; construction never fails.
    pub fn new(capacity: usize) -> Self {
        let effective = capacity.clamp(1, MAX_CAPACITY);
        if effective != capacity {
            tracing::debug!(requested = capacity, effective, "ring capacity clamped");
        }
        Self {
            buf: vec![0u8; effective],
            capacity: effective,
            write_pos: 0,
            wrapped: false,
        }
    }

    /// Append data into the circular buffer, overwriting the oldest bytes
    /// once full. A slice longer than the capacity leaves the buffer
    /// holding exactly its final `capacity` bytes.
    pub fn write(&mut self, data: &[u8]) {
        for chunk in data.chunks(self.capacity) {
            let start = self.write_pos;
            let end = start + chunk.len();

            if end <= self.capacity {
                self.buf[start..end].copy_from_slice(chunk);
            } else {
                let first = self.capacity - start;
                self.buf[start..self.capacity].copy_from_slice(&chunk[..first]);
                self.buf[..chunk.len() - first].copy_from_slice(&chunk[first..]);
            }

            if end >= self.capacity {
                self.wrapped = true;
            }
            self.write_pos = end % self.capacity;
        }
    }

    /// Read the last `n` bytes from the buffer, oldest first.
    ///
    /// If `n` exceeds the stored data, returns everything stored. Returns
    /// `None` if `n` is outside `[1, MAX_READ_ALLOC]` or nothing has been
    /// written since construction or the last [`reset`](Self::reset).
    pub fn tail(&self, n: usize) -> Option<Vec<u8>> {
        if n == 0 || n > MAX_READ_ALLOC {
            return None;
        }

        let take = n.min(self.len());
        if take == 0 {
            return None;
        }

        // Oldest requested byte, walking back from the write cursor
        let start = if self.write_pos >= take {
            self.write_pos - take
        } else {
            self.capacity - (take - self.write_pos)
        };

        let mut out = Vec::with_capacity(take);
        if start + take <= self.capacity {
            out.extend_from_slice(&self.buf[start..start + take]);
        } else {
            let first = self.capacity - start;
            out.extend_from_slice(&self.buf[start..self.capacity]);
            out.extend_from_slice(&self.buf[..take - first]);
        }
        Some(out)
    }

    /// Number of bytes currently stored.
    pub fn len(&self) -> usize {
        if self.wrapped {
            self.capacity
        } else {
            self.write_pos
        }
    }

    /// Whether nothing has been written since construction or the last reset.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Effective (clamped) capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear the buffer back to its freshly-constructed state.
    ///
    /// Storage is not zeroed: once the cursor and wrap flag are reset, the
    /// stale bytes are unreachable through any read.
    pub fn reset(&mut self) {
        self.write_pos = 0;
        self.wrapped = false;
    }
}

#[cfg(test)]
#[path = "ring_tests.rs"]
mod tests;
