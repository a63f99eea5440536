// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming Merkle-Damgard message padding engine.
//!
//! The engine accepts an arbitrary-length byte stream as a sequence of
//! lane-width chunks and emits lane-width blocks terminated per the SHA-1/SHA-2
//! padding convention: a `0x80` terminator byte, zero fill, and the total
//! message bit-length appended big-endian at the tail of the final block(s).
//!
//! Two variant families are supported, selected by the first chunk of each
//! message:
//!
//! - **Narrow** (SHA-1/SHA-224/SHA-256 class): 512-bit blocks, 64-bit length
//!   trailer.
//! - **Wide** (SHA-384/SHA-512 class): 1024-bit blocks assembled from pairs of
//!   512-bit lanes, 128-bit length trailer.
//!
//! Both sides of the engine speak a ready/valid handshake: `in_ready`/`offer`
//! upstream and `out_valid`/`pull` downstream. The engine never accepts a
//! chunk it has no staging space for and never exposes a block before it is
//! fully assembled, so an arbitrarily stalled consumer loses nothing.
//!
//! # Example
//!
//! ```rust
//! use padframe_core::{Chunk, HashVariant, PadEngine};
//!
//! let mut engine = PadEngine::new();
//!
//! // A zero-length message still produces one fully padded block.
//! let accepted = engine
//!     .offer(&Chunk::last([0u8; 64], 0, HashVariant::Narrow))
//!     .unwrap();
//! assert!(accepted);
//!
//! let block = engine.pull().unwrap();
//! assert!(block.last);
//! assert_eq!(block.data[0], 0x80);
//! assert!(block.data[1..].iter().all(|&b| b == 0));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod chunk;
mod engine;
mod error;
mod length;
mod mask;
mod variant;

pub use chunk::{Block, Chunk};
pub use engine::PadEngine;
pub use error::EngineError;
pub use length::RunningLength;
pub use mask::{MaskPolicy, decode_keep_mask, keep_mask};
pub use variant::HashVariant;

/// Width of one chunk/block transfer in bytes.
pub const LANE_BYTES: usize = 64;

/// Width of one chunk/block transfer in bits.
pub const LANE_BITS: usize = LANE_BYTES * 8;
