// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ring::MAX_CAPACITY;

fn default_capacity() -> usize {
    MAX_CAPACITY
}

/// Sizing settings for a capture buffer, typically read from the embedding
/// process's JSON settings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Requested buffer capacity in bytes. Out-of-range values are clamped
    /// at construction; see [`effective_capacity`](Self::effective_capacity).
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl CaptureConfig {
    /// The capacity a buffer built from this config will actually get.
    pub fn effective_capacity(&self) -> usize {
        self.capacity.clamp(1, MAX_CAPACITY)
    }
}

/// Load and parse the capture config file at `path`.
///
/// Missing keys fall back to their defaults.
pub fn load_capture_config(path: &Path) -> anyhow::Result<CaptureConfig> {
    let contents = std::fs::read_to_string(path)?;
    let config: CaptureConfig = serde_json::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
