// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The padding engine: chunk ingest, block assembly and output sequencing.

use crate::LANE_BYTES;
use crate::chunk::{Block, Chunk};
use crate::error::EngineError;
use crate::length::RunningLength;
use crate::mask::{MaskPolicy, decode_keep_mask};
use crate::variant::HashVariant;

/// Controller states, one message lifecycle per pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No message in flight.
    Idle,
    /// Accepting chunks.
    Feed,
    /// Placing the terminator byte and testing trailer fit.
    Pad,
    /// Staging alignment and/or trailer lanes that did not fit.
    ExtraPad,
    /// Draining the remaining staged lanes.
    Wait,
}

/// One lane-width staging register.
#[derive(Debug, Clone, Copy)]
struct StagingBlock {
    data: [u8; LANE_BYTES],
    last: bool,
}

/// Fixed-depth ring of staging registers (depth 2: the wide family keeps one
/// lane of lookahead, modeled as a ring instead of shift registers).
#[derive(Debug)]
struct StagingRing {
    slots: [StagingBlock; 2],
    head: usize,
    len: usize,
}

impl StagingRing {
    const fn new() -> Self {
        Self {
            slots: [StagingBlock {
                data: [0u8; LANE_BYTES],
                last: false,
            }; 2],
            head: 0,
            len: 0,
        }
    }

    const fn len(&self) -> usize {
        self.len
    }

    const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    /// Stages a lane behind any lane already held.
    fn push(&mut self, data: [u8; LANE_BYTES]) {
        debug_assert!(self.len < 2);
        let slot = (self.head + self.len) % 2;
        self.slots[slot] = StagingBlock { data, last: false };
        self.len += 1;
    }

    /// Drains the oldest staged lane.
    fn pop(&mut self) -> Option<StagingBlock> {
        if self.len == 0 {
            return None;
        }
        let slot = self.slots[self.head];
        self.head = (self.head + 1) % 2;
        self.len -= 1;
        Some(slot)
    }

    /// The most recently staged lane, still being assembled.
    fn newest_mut(&mut self) -> Option<&mut StagingBlock> {
        if self.len == 0 {
            return None;
        }
        let slot = (self.head + self.len - 1) % 2;
        Some(&mut self.slots[slot])
    }
}

/// Streaming Merkle-Damgard padding engine.
///
/// Processes one message at a time: chunks in via [`PadEngine::offer`],
/// padded blocks out via [`PadEngine::pull`], with readiness exposed on both
/// sides. After the final block of a message drains the engine returns to
/// idle and accepts the next message.
#[derive(Debug)]
pub struct PadEngine {
    state: State,
    policy: MaskPolicy,
    variant: Option<HashVariant>,
    length: RunningLength,
    /// Offset of the terminator byte within the lane being assembled.
    cursor: usize,
    /// True while an odd number of lanes has been staged for this message.
    parity: bool,
    ring: StagingRing,
    pending_align: bool,
    pending_trailer: bool,
}

impl PadEngine {
    /// Creates an idle engine with the lenient mask policy.
    pub fn new() -> Self {
        Self::with_mask_policy(MaskPolicy::Lenient)
    }

    /// Creates an idle engine with an explicit mask policy.
    pub fn with_mask_policy(policy: MaskPolicy) -> Self {
        Self {
            state: State::Idle,
            policy,
            variant: None,
            length: RunningLength::new(),
            cursor: 0,
            parity: false,
            ring: StagingRing::new(),
            pending_align: false,
            pending_trailer: false,
        }
    }

    /// Whether the engine can accept a chunk right now.
    ///
    /// Readiness is withdrawn while staged lanes await draining and for the
    /// whole tail of a message once its last chunk has been accepted.
    pub fn in_ready(&self) -> bool {
        match self.state {
            State::Idle => true,
            State::Feed => self.ring.len() < self.capacity(),
            State::Pad | State::ExtraPad | State::Wait => false,
        }
    }

    /// Offers a chunk to the engine.
    ///
    /// Returns `Ok(true)` when the chunk was accepted atomically, `Ok(false)`
    /// when readiness is withdrawn (the producer retries after the consumer
    /// drains). Errors abort the in-flight message and leave the engine idle.
    pub fn offer(&mut self, chunk: &Chunk) -> Result<bool, EngineError> {
        if !self.in_ready() {
            return Ok(false);
        }

        if self.state == State::Idle {
            // Only the first chunk's tag is honored; fail fast before any
            // state is touched.
            self.variant = Some(HashVariant::classify(chunk.variant_tag)?);
            self.state = State::Feed;
        }

        let valid_bytes = match self.valid_bytes(chunk) {
            Ok(n) => n,
            Err(e) => {
                self.reset();
                return Err(e);
            }
        };

        self.length.record_bytes(valid_bytes);
        self.stage(chunk.data);

        if chunk.last {
            if self.variant == Some(HashVariant::Narrow) && !self.length.fits_in_u64() {
                self.reset();
                return Err(EngineError::LengthOverflow);
            }
            self.cursor = valid_bytes;
            self.state = State::Pad;
            self.advance();
        }

        Ok(true)
    }

    /// Whether a fully assembled block is available to drain.
    ///
    /// The narrow family exposes a lane as soon as it is staged. The wide
    /// family keeps one lane of lookahead: a lane becomes visible once its
    /// successor is staged, or once the final lane of the message is.
    pub fn out_valid(&self) -> bool {
        if self.ring.is_empty() {
            return false;
        }
        match self.variant {
            Some(HashVariant::Wide) => self.ring.len() == 2 || self.state == State::Wait,
            _ => true,
        }
    }

    /// Drains the oldest assembled block, if one is visible.
    ///
    /// Draining frees staging space, advancing any deferred padding work.
    /// The block carrying the end-of-message marker returns the engine to
    /// idle once taken.
    pub fn pull(&mut self) -> Option<Block> {
        if !self.out_valid() {
            return None;
        }
        let variant = self.variant?;
        let slot = self.ring.pop()?;

        self.advance();
        if self.state == State::Wait && self.ring.is_empty() {
            self.reset();
        }

        Some(Block {
            data: slot.data,
            variant,
            last: slot.last,
        })
    }

    /// Unconditionally aborts any message in flight and returns to idle.
    ///
    /// All accumulated length and staging state is discarded; no partial
    /// flush is attempted. The mask policy is retained.
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.variant = None;
        self.length.clear();
        self.cursor = 0;
        self.parity = false;
        self.ring.clear();
        self.pending_align = false;
        self.pending_trailer = false;
    }

    /// Whether the engine is idle (no message in flight).
    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }

    /// The variant latched for the message in flight, if any.
    pub fn variant(&self) -> Option<HashVariant> {
        self.variant
    }

    /// Seeds the accumulator as if the given bit count had already been
    /// consumed, to exercise overflow handling without feeding 2^61 bytes.
    #[cfg(test)]
    pub(crate) fn preload_length(&mut self, length: RunningLength) {
        self.length = length;
    }

    /// Staging depth for the latched variant: the wide family pipelines two
    /// lanes, the narrow family stalls through a single register.
    fn capacity(&self) -> usize {
        match self.variant {
            Some(HashVariant::Wide) => 2,
            _ => 1,
        }
    }

    /// Valid-byte count of a chunk under the configured mask policy.
    ///
    /// Non-final chunks always carry a full lane; a partial mask there is an
    /// upstream protocol violation surfaced only under the strict policy.
    fn valid_bytes(&self, chunk: &Chunk) -> Result<usize, EngineError> {
        let run = decode_keep_mask(chunk.keep, self.policy)?;
        if chunk.last {
            return Ok(run);
        }
        match self.policy {
            MaskPolicy::Lenient => Ok(LANE_BYTES),
            MaskPolicy::Strict if run == LANE_BYTES => Ok(LANE_BYTES),
            MaskPolicy::Strict => Err(EngineError::MalformedKeepMask { mask: chunk.keep }),
        }
    }

    fn stage(&mut self, data: [u8; LANE_BYTES]) {
        self.ring.push(data);
        self.parity = !self.parity;
    }

    /// Runs deferred padding steps as far as staging space allows.
    ///
    /// Called after a chunk finalizes the message and after every drain; each
    /// blocked step simply returns and resumes on the next call.
    fn advance(&mut self) {
        let Some(variant) = self.variant else {
            return;
        };

        loop {
            match self.state {
                State::Pad => {
                    if self.cursor == LANE_BYTES {
                        // The last chunk was completely full: the terminator
                        // spills into a fresh lane.
                        if self.ring.len() == self.capacity() {
                            return;
                        }
                        self.stage([0u8; LANE_BYTES]);
                        self.cursor = 0;
                    }

                    let fits = self.cursor < LANE_BYTES - variant.trailer_bytes();
                    // A wide trailer may only sit in the second lane of a
                    // 1024-bit pair, i.e. when the terminator lane brought
                    // the staged-lane count to an even value.
                    let aligned = match variant {
                        HashVariant::Narrow => true,
                        HashVariant::Wide => !self.parity,
                    };

                    let frozen = self.length;
                    let Some(slot) = self.ring.newest_mut() else {
                        return;
                    };
                    slot.data[self.cursor] = 0x80;
                    slot.data[self.cursor + 1..].fill(0);

                    if fits && aligned {
                        write_trailer(&mut slot.data, variant, &frozen);
                        slot.last = true;
                        self.state = State::Wait;
                    } else {
                        self.pending_align = variant == HashVariant::Wide && !self.parity;
                        self.pending_trailer = true;
                        self.state = State::ExtraPad;
                    }
                }
                State::ExtraPad => {
                    if self.pending_align {
                        if self.ring.len() == self.capacity() {
                            return;
                        }
                        self.stage([0u8; LANE_BYTES]);
                        self.pending_align = false;
                        continue;
                    }
                    if self.ring.len() == self.capacity() {
                        return;
                    }
                    let mut data = [0u8; LANE_BYTES];
                    write_trailer(&mut data, variant, &self.length);
                    self.stage(data);
                    if let Some(slot) = self.ring.newest_mut() {
                        slot.last = true;
                    }
                    self.pending_trailer = false;
                    self.state = State::Wait;
                }
                State::Idle | State::Feed | State::Wait => return,
            }
        }
    }
}

impl Default for PadEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlays the big-endian length trailer, right-aligned to the lane's end.
fn write_trailer(data: &mut [u8; LANE_BYTES], variant: HashVariant, length: &RunningLength) {
    match variant {
        HashVariant::Narrow => {
            data[LANE_BYTES - 8..].copy_from_slice(&length.to_trailer_narrow());
        }
        HashVariant::Wide => {
            data[LANE_BYTES - 16..].copy_from_slice(&length.to_trailer_wide());
        }
    }
}
