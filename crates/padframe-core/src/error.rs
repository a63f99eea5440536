// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for the padding engine.

use thiserror::Error;

/// Errors surfaced by [`crate::PadEngine`].
///
/// Every error aborts the in-flight message: the engine re-initializes to its
/// idle state and the failed message is not partially flushed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The first chunk's variant tag classifies to neither the narrow nor the
    /// wide family.
    #[error("unsupported hash variant tag {bits:#04x}")]
    UnsupportedVariant {
        /// Raw tag bits carried by the offending chunk.
        bits: u8,
    },

    /// The byte-validity mask is not a contiguous low-order run of ones
    /// (raised under [`crate::MaskPolicy::Strict`] only).
    #[error("malformed byte-validity mask {mask:#018x}")]
    MalformedKeepMask {
        /// The offending mask.
        mask: u64,
    },

    /// A narrow-variant message's total bit-length exceeds 2^64 - 1 and
    /// cannot be encoded in the 64-bit trailer.
    #[error("message length exceeds the 64-bit trailer")]
    LengthOverflow,
}
