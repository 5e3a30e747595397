// Copyright 2025 the Paintroid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared input generators for the Paintroid benchmarks.

/// Deterministic pseudo-random `(dx, dy, zoom_factor)` triples, one per pointer event.
///
/// Deltas are in `[-100, 100)` screen pixels and factors in `[0.9, 1.1]`.
pub fn gesture_deltas(len: usize) -> Vec<(f64, f64, f64)> {
    let mut state = 0x2545_f491_u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let dx = f64::from(state % 200) - 100.0;
            let dy = f64::from((state >> 8) % 200) - 100.0;
            let factor = 0.9 + f64::from(state % 21) / 100.0;
            (dx, dy, factor)
        })
        .collect()
}
