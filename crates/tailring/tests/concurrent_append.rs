// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Concurrency contract: appends and reads from many threads serialize
//! through the buffer's lock — no torn bytes, no out-of-bounds access, and
//! the live length always tracks min(capacity, total bytes written).

use std::thread;

use tailring::SharedRing;

const WRITERS: usize = 8;
const PER_WRITER: usize = 500;

fn spawn_writers(ring: &SharedRing) -> Vec<thread::JoinHandle<()>> {
    (0..WRITERS)
        .map(|i| {
            let ring = ring.clone();
            thread::spawn(move || {
                let marker = b'a' + i as u8;
                for _ in 0..PER_WRITER {
                    ring.append(&[marker]);
                }
            })
        })
        .collect()
}

fn join_all(handles: Vec<thread::JoinHandle<()>>) -> anyhow::Result<()> {
    for handle in handles {
        handle
            .join()
            .map_err(|_| anyhow::anyhow!("thread panicked"))?;
    }
    Ok(())
}

#[test]
fn wrapped_buffer_holds_only_valid_markers() -> anyhow::Result<()> {
    // 4000 bytes through a 1024-byte ring
    let ring = SharedRing::new(1024);
    join_all(spawn_writers(&ring))?;

    assert_eq!(ring.len(), 1024);
    let data = ring
        .read_tail(1024)
        .ok_or_else(|| anyhow::anyhow!("no data"))?;
    assert_eq!(data.len(), 1024);
    assert!(data.iter().all(|b| (b'a'..b'a' + WRITERS as u8).contains(b)));
    Ok(())
}

#[test]
fn unwrapped_buffer_holds_every_byte_written() -> anyhow::Result<()> {
    // 4000 bytes through an 8192-byte ring: nothing is discarded
    let ring = SharedRing::new(8192);
    join_all(spawn_writers(&ring))?;

    assert_eq!(ring.len(), WRITERS * PER_WRITER);
    let data = ring
        .read_tail(8192)
        .ok_or_else(|| anyhow::anyhow!("no data"))?;
    assert_eq!(data.len(), WRITERS * PER_WRITER);

    // every writer's full contribution survives, in some interleaving
    for i in 0..WRITERS {
        let marker = b'a' + i as u8;
        let count = data.iter().filter(|&&b| b == marker).count();
        assert_eq!(count, PER_WRITER, "marker {} lost bytes", marker as char);
    }
    Ok(())
}

#[test]
fn readers_racing_writers_see_consistent_snapshots() -> anyhow::Result<()> {
    let ring = SharedRing::new(256);
    let writers = spawn_writers(&ring);

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let ring = ring.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    if let Some(data) = ring.read_tail(256) {
                        // a snapshot only ever contains fully-written markers
                        assert!(data
                            .iter()
                            .all(|b| (b'a'..b'a' + WRITERS as u8).contains(b)));
                    }
                    assert!(ring.len() <= 256);
                }
            })
        })
        .collect();

    join_all(writers)?;
    join_all(readers)?;
    Ok(())
}
