// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Reference padding oracle and stream-driving helpers.
//!
//! `reference_pad` computes the expected padded stream by direct arithmetic,
//! independent of the engine's state machine, so tests compare two unrelated
//! implementations of the same convention.

use padframe_core::{Block, Chunk, EngineError, HashVariant, LANE_BYTES, PadEngine};

/// Pads `message` per the Merkle-Damgard convention by direct construction.
pub fn reference_pad(message: &[u8], variant: HashVariant) -> Vec<u8> {
    let block_bytes = match variant {
        HashVariant::Narrow => 64,
        HashVariant::Wide => 128,
    };
    let trailer_bytes = variant.trailer_bytes();

    let mut out = message.to_vec();
    out.push(0x80);
    while (out.len() + trailer_bytes) % block_bytes != 0 {
        out.push(0);
    }

    let bits = (message.len() as u128) * 8;
    match variant {
        HashVariant::Narrow => out.extend_from_slice(&(bits as u64).to_be_bytes()),
        HashVariant::Wide => out.extend_from_slice(&bits.to_be_bytes()),
    }
    out
}

/// Cuts a message into lane-width chunks with correct keep masks and
/// end-of-message flag (an empty message yields one zero-valid last chunk).
pub fn lane_chunks(message: &[u8], variant: HashVariant) -> Vec<Chunk> {
    if message.is_empty() {
        return vec![Chunk::last([0u8; LANE_BYTES], 0, variant)];
    }

    let mut chunks = Vec::new();
    let mut offset = 0;
    while offset < message.len() {
        let end = (offset + LANE_BYTES).min(message.len());
        let mut data = [0u8; LANE_BYTES];
        data[..end - offset].copy_from_slice(&message[offset..end]);
        if end == message.len() {
            chunks.push(Chunk::last(data, end - offset, variant));
        } else {
            chunks.push(Chunk::full(data, variant));
        }
        offset = end;
    }
    chunks
}

/// Drives `chunks` through `engine` with an always-ready consumer, returning
/// every emitted block through the end-of-message marker.
///
/// Panics if the engine stalls with all chunks offered and nothing to drain.
pub fn drive(engine: &mut PadEngine, chunks: &[Chunk]) -> Result<Vec<Block>, EngineError> {
    let mut blocks = Vec::new();
    let mut next = 0;

    loop {
        if next < chunks.len() && engine.offer(&chunks[next])? {
            next += 1;
        }
        while let Some(block) = engine.pull() {
            let done = block.last;
            blocks.push(block);
            if done {
                return Ok(blocks);
            }
        }
        assert!(
            next < chunks.len(),
            "engine stalled with all chunks offered and no output"
        );
    }
}
