// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash variant classification.

use crate::error::EngineError;

/// The two padding families the engine distinguishes.
///
/// The variant is latched from the first chunk of a message and fixed until
/// the engine returns to idle. An external classifier is expected to map
/// concrete digest identifiers onto these two families (or reject them)
/// before data reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashVariant {
    /// Single block width, 64-bit length trailer (SHA-1/SHA-224/SHA-256
    /// class).
    Narrow,
    /// Double block width (lane pairs), 128-bit length trailer
    /// (SHA-384/SHA-512 class).
    Wide,
}

impl HashVariant {
    /// Tag bits selecting the narrow family.
    pub const NARROW_TAG: u8 = 0;

    /// Tag bits selecting the wide family.
    pub const WIDE_TAG: u8 = 1;

    /// Classifies raw variant tag bits, failing fast on anything that is not
    /// one of the two supported families.
    pub fn classify(bits: u8) -> Result<Self, EngineError> {
        match bits {
            Self::NARROW_TAG => Ok(Self::Narrow),
            Self::WIDE_TAG => Ok(Self::Wide),
            _ => Err(EngineError::UnsupportedVariant { bits }),
        }
    }

    /// The tag bits this variant classifies from.
    pub const fn tag_bits(self) -> u8 {
        match self {
            Self::Narrow => Self::NARROW_TAG,
            Self::Wide => Self::WIDE_TAG,
        }
    }

    /// Width of the big-endian length trailer in bytes.
    pub const fn trailer_bytes(self) -> usize {
        match self {
            Self::Narrow => 8,
            Self::Wide => 16,
        }
    }
}
