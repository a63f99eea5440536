// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Running bit-length accumulation and trailer rendering.

/// Total bits consumed so far, as a pair of 64-bit words.
///
/// `low` increments by the accepted chunk's valid bit count exactly once per
/// chunk; carry into `high` occurs exactly on 64-bit wraparound of `low`.
/// After the last chunk of a message is recorded the value is frozen: the
/// trailer renders whatever was recorded at that moment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningLength {
    low: u64,
    high: u64,
}

impl RunningLength {
    /// A zeroed accumulator.
    pub const fn new() -> Self {
        Self { low: 0, high: 0 }
    }

    #[cfg(test)]
    pub(crate) const fn from_parts(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    /// Records one accepted chunk carrying `valid_bytes` bytes of message
    /// data.
    pub fn record_bytes(&mut self, valid_bytes: usize) {
        let bits = (valid_bytes as u64) << 3;
        let (low, carry) = self.low.overflowing_add(bits);

        self.low = low;
        if carry {
            self.high = self.high.wrapping_add(1);
        }
    }

    /// Low 64 bits of the accumulated bit count.
    pub const fn bits_low(&self) -> u64 {
        self.low
    }

    /// High 64 bits of the accumulated bit count.
    pub const fn bits_high(&self) -> u64 {
        self.high
    }

    /// Whether the accumulated bit count is representable in a single 64-bit
    /// word (a narrow trailer requires this).
    pub const fn fits_in_u64(&self) -> bool {
        self.high == 0
    }

    /// Renders the 8-byte big-endian narrow trailer.
    pub const fn to_trailer_narrow(&self) -> [u8; 8] {
        self.low.to_be_bytes()
    }

    /// Renders the 16-byte big-endian wide trailer (high word first).
    pub fn to_trailer_wide(&self) -> [u8; 16] {
        let mut trailer = [0u8; 16];
        trailer[..8].copy_from_slice(&self.high.to_be_bytes());
        trailer[8..].copy_from_slice(&self.low.to_be_bytes());
        trailer
    }

    /// Discards the accumulated count.
    pub fn clear(&mut self) {
        self.low = 0;
        self.high = 0;
    }
}
