// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::LANE_BYTES;
use crate::length::RunningLength;

#[test]
fn test_record_accumulates_bits() {
    let mut length = RunningLength::new();

    length.record_bytes(LANE_BYTES);
    length.record_bytes(LANE_BYTES);
    length.record_bytes(5);

    assert_eq!(length.bits_low(), (2 * LANE_BYTES as u64 + 5) * 8);
    assert_eq!(length.bits_high(), 0);
    assert!(length.fits_in_u64());
}

#[test]
fn test_carry_on_low_word_wraparound() {
    let mut length = RunningLength::from_parts(u64::MAX - 8 + 1, 0);

    length.record_bytes(1);

    assert_eq!(length.bits_low(), 0);
    assert_eq!(length.bits_high(), 1);
    assert!(!length.fits_in_u64());
}

#[test]
fn test_carry_lands_past_the_boundary() {
    let mut length = RunningLength::from_parts(u64::MAX - 15, 3);

    length.record_bytes(3);

    assert_eq!(length.bits_low(), 8);
    assert_eq!(length.bits_high(), 4);
}

#[test]
fn test_narrow_trailer_is_big_endian() {
    let mut length = RunningLength::new();
    length.record_bytes(3);

    assert_eq!(length.to_trailer_narrow(), 24u64.to_be_bytes());
}

#[test]
fn test_wide_trailer_concatenates_high_then_low() {
    let length = RunningLength::from_parts(0x0102_0304_0506_0708, 0x1122_3344_5566_7788);

    let trailer = length.to_trailer_wide();

    assert_eq!(&trailer[..8], &0x1122_3344_5566_7788u64.to_be_bytes());
    assert_eq!(&trailer[8..], &0x0102_0304_0506_0708u64.to_be_bytes());
}

#[test]
fn test_clear_discards_everything() {
    let mut length = RunningLength::from_parts(99, 7);

    length.clear();

    assert_eq!(length, RunningLength::new());
}
