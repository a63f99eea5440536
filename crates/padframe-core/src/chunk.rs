// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Stream transfer types.

use crate::LANE_BYTES;
use crate::mask::keep_mask;
use crate::variant::HashVariant;

/// One upstream transfer: a lane of payload plus its sideband signals.
///
/// `keep` is the byte-validity mask (bit `i` set = byte lane `i` valid); a
/// partial mask is only meaningful when `last` is set. `variant_tag` is
/// honored on the first chunk of a message only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Payload bytes.
    pub data: [u8; LANE_BYTES],
    /// Byte-validity mask, contiguous from the low-order lane.
    pub keep: u64,
    /// End-of-message flag.
    pub last: bool,
    /// Variant tag bits (see [`HashVariant::classify`]).
    pub variant_tag: u8,
}

impl Chunk {
    /// A fully valid, non-final chunk.
    pub const fn full(data: [u8; LANE_BYTES], variant: HashVariant) -> Self {
        Self {
            data,
            keep: u64::MAX,
            last: false,
            variant_tag: variant.tag_bits(),
        }
    }

    /// The final chunk of a message, carrying `valid_bytes` bytes of payload.
    pub const fn last(data: [u8; LANE_BYTES], valid_bytes: usize, variant: HashVariant) -> Self {
        Self {
            data,
            keep: keep_mask(valid_bytes),
            last: true,
            variant_tag: variant.tag_bits(),
        }
    }
}

/// One downstream transfer: a fully assembled lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Padded payload bytes.
    pub data: [u8; LANE_BYTES],
    /// Variant propagated from the first chunk of the message.
    pub variant: HashVariant,
    /// End-of-message marker, asserted on the final block only.
    pub last: bool,
}
