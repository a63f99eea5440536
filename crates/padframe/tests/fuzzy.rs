// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use padframe::{Chunk, HashVariant, PadEngine, pad_message};
use padframe_test_utils::{drive, lane_chunks, reference_pad};
use proptest::prelude::*;

fn variant_for(wide: bool) -> HashVariant {
    if wide {
        HashVariant::Wide
    } else {
        HashVariant::Narrow
    }
}

proptest! {
    #[test]
    fn padded_stream_matches_reference(
        message in proptest::collection::vec(any::<u8>(), 0..600),
        wide in any::<bool>()
    ) {
        let variant = variant_for(wide);

        prop_assert_eq!(
            pad_message(&message, variant).expect("pad_message failed"),
            reference_pad(&message, variant)
        );
    }

    #[test]
    fn any_backpressure_schedule_preserves_the_stream(
        message in proptest::collection::vec(any::<u8>(), 0..400),
        wide in any::<bool>(),
        schedule in proptest::collection::vec(any::<bool>(), 1..64)
    ) {
        let variant = variant_for(wide);
        let chunks = lane_chunks(&message, variant);
        let mut engine = PadEngine::new();

        let mut out = Vec::new();
        let mut next = 0;
        let mut tick = 0;
        let mut done = false;

        while !done {
            let prefer_pull = schedule[tick % schedule.len()];
            tick += 1;

            let mut progressed = false;
            if prefer_pull {
                if let Some(block) = engine.pull() {
                    out.extend_from_slice(&block.data);
                    done = block.last;
                    progressed = true;
                }
            }
            if !progressed
                && !done
                && next < chunks.len()
                && engine.offer(&chunks[next]).expect("offer failed")
            {
                next += 1;
                progressed = true;
            }
            if !progressed && !done {
                if let Some(block) = engine.pull() {
                    out.extend_from_slice(&block.data);
                    done = block.last;
                    progressed = true;
                }
            }

            prop_assert!(progressed || done, "engine stalled at tick {}", tick);
        }

        prop_assert_eq!(out, reference_pad(&message, variant));
        prop_assert!(engine.is_idle());
    }

    #[test]
    fn reset_leaves_a_clean_engine(
        prefix_lanes in 0usize..3,
        wide in any::<bool>(),
        message in proptest::collection::vec(any::<u8>(), 0..200)
    ) {
        let variant = variant_for(wide);
        let mut engine = PadEngine::new();

        // Abandon a message partway through, staged lanes and all.
        for _ in 0..prefix_lanes {
            let _ = engine.offer(&Chunk::full([0x5a; 64], variant)).expect("offer failed");
        }
        engine.reset();
        prop_assert!(engine.is_idle());

        let blocks = drive(&mut engine, &lane_chunks(&message, variant)).expect("drive failed");
        let mut streamed = Vec::new();
        for block in &blocks {
            streamed.extend_from_slice(&block.data);
        }

        prop_assert_eq!(streamed, reference_pad(&message, variant));
    }
}
