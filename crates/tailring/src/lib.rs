// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod handle;
pub mod ring;

pub use config::CaptureConfig;
pub use handle::SharedRing;
pub use ring::RingBuffer;
