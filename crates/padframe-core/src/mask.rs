// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-validity mask decoding.

use crate::LANE_BYTES;
use crate::error::EngineError;

/// How the engine reacts to a byte-validity mask that is not a contiguous
/// low-order run of ones.
///
/// The upstream contract only ever produces contiguous masks, so a malformed
/// mask is a protocol violation. The original hardware silently treated it as
/// "all bytes valid"; [`MaskPolicy::Strict`] surfaces it instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaskPolicy {
    /// Malformed masks decode to "all bytes valid".
    #[default]
    Lenient,
    /// Malformed masks fail with [`EngineError::MalformedKeepMask`].
    Strict,
}

/// Decodes a byte-validity mask into a valid-byte count.
///
/// A well-formed mask is `(1 << n) - 1` for some `n` in `0..=64`: bit `i` set
/// means byte lane `i` carries message data. Returns `n` for well-formed
/// masks; malformed masks are handled per `policy`.
pub fn decode_keep_mask(mask: u64, policy: MaskPolicy) -> Result<usize, EngineError> {
    let run = mask.trailing_ones() as usize;
    let well_formed = run == LANE_BYTES || mask == (1u64 << run) - 1;

    if well_formed {
        Ok(run)
    } else {
        match policy {
            MaskPolicy::Lenient => Ok(LANE_BYTES),
            MaskPolicy::Strict => Err(EngineError::MalformedKeepMask { mask }),
        }
    }
}

/// Builds the well-formed mask for `valid_bytes` valid byte lanes.
pub const fn keep_mask(valid_bytes: usize) -> u64 {
    if valid_bytes >= LANE_BYTES {
        u64::MAX
    } else {
        (1u64 << valid_bytes) - 1
    }
}
