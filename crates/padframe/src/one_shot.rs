// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot padding over the streaming engine.

use alloc::vec::Vec;

use padframe_core::{Chunk, EngineError, HashVariant, LANE_BYTES, PadEngine};

/// Pads a whole in-memory message, returning the concatenated padded stream.
///
/// Drives a [`PadEngine`] chunk by chunk with an always-ready consumer. The
/// result length is the message length rounded up to the variant's block
/// size (64 bytes narrow, 128 bytes wide), with at least one terminator byte
/// and one trailer of headroom.
pub fn pad_message(message: &[u8], variant: HashVariant) -> Result<Vec<u8>, EngineError> {
    let mut engine = PadEngine::new();
    let mut out = Vec::with_capacity(message.len() + 3 * LANE_BYTES);
    let mut offset = 0;
    let mut sent_last = false;
    let mut done = false;

    while !done {
        if !sent_last && engine.in_ready() {
            let end = (offset + LANE_BYTES).min(message.len());
            let mut data = [0u8; LANE_BYTES];
            data[..end - offset].copy_from_slice(&message[offset..end]);

            let last = end == message.len();
            let chunk = if last {
                Chunk::last(data, end - offset, variant)
            } else {
                Chunk::full(data, variant)
            };
            if engine.offer(&chunk)? {
                offset = end;
                sent_last = last;
            }
        }
        while let Some(block) = engine.pull() {
            out.extend_from_slice(&block.data);
            if block.last {
                done = true;
            }
        }
    }

    Ok(out)
}
