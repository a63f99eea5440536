// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for Padframe crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod oracle;

pub use oracle::{drive, lane_chunks, reference_pad};
