// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming Merkle-Damgard message padding.
//!
//! Padframe frames an arbitrary-length byte stream into fixed-size blocks
//! conforming to the SHA-1/SHA-2 family padding convention: `0x80`
//! terminator, zero fill, big-endian bit-length trailer. The streaming
//! engine lives in [`padframe_core`] and is re-exported here; this crate
//! adds the one-shot [`pad_message`] convenience for callers that hold the
//! whole message in memory.
//!
//! # Example
//!
//! ```rust
//! use padframe::{HashVariant, pad_message};
//!
//! let padded = pad_message(b"abc", HashVariant::Narrow).unwrap();
//!
//! assert_eq!(padded.len(), 64);
//! assert_eq!(&padded[..3], b"abc");
//! assert_eq!(padded[3], 0x80);
//! assert_eq!(&padded[56..], &24u64.to_be_bytes());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod one_shot;

pub use one_shot::pad_message;
pub use padframe_core::{
    Block, Chunk, EngineError, HashVariant, LANE_BITS, LANE_BYTES, MaskPolicy, PadEngine,
    RunningLength, decode_keep_mask, keep_mask,
};
