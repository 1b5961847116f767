/*
 * SPDX-FileCopyrightText: 2026 The succinct authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::{rngs::SmallRng, Rng, SeedableRng};
use succinct::bits::BitVec;
use succinct::rank_sel::SimpleSelectHalf;

#[test]
fn select_matches_naive_positions_across_lengths() {
    let mut rng = SmallRng::seed_from_u64(42);
    let lens = (64..2000).step_by(131).chain((2_000..60_000).step_by(4001));
    for len in lens {
        let bits: Vec<bool> = (0..len).map(|_| rng.gen_bool(0.5)).collect();
        let mut bv = BitVec::with_trailing_free_bit(len);
        for (i, &b) in bits.iter().enumerate() {
            bv.set(i, b);
        }
        let sel = SimpleSelectHalf::new(bv.as_words(), bv.len() as u64);

        let positions: Vec<u64> = bits
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(|(i, _)| i as u64)
            .collect();
        assert_eq!(sel.num_ones(), positions.len() as u64, "len={len}");
        for (r, &p) in positions.iter().enumerate() {
            assert_eq!(sel.select(r as u64), p, "len={len} r={r}");
        }
    }
}

#[test]
fn select_next_matches_consecutive_naive_positions() {
    let positions = [0u64, 1, 2, 500, 501, 4000, 4001, 4002, 8191];
    let mut bv = BitVec::with_trailing_free_bit(8192);
    for &p in &positions {
        bv.set(p as usize, true);
    }
    let sel = SimpleSelectHalf::new(bv.as_words(), bv.len() as u64);
    for r in 0..positions.len() as u64 - 1 {
        assert_eq!(sel.select_next(r), (positions[r as usize], positions[r as usize + 1]));
    }
}

#[test]
fn sparse_bit_vector_forces_wide_sub_inventory() {
    // Ones spaced far enough apart that a 1024-one inventory group spans
    // more than 2^16 bits, forcing the wide 64-bit sub-inventory branch.
    let gap = 1u64 << 17;
    let count = 200u64;
    let n = gap * count + 1;
    let mut bv = BitVec::with_trailing_free_bit(n as usize);
    for i in 0..count {
        bv.set((i * gap) as usize, true);
    }
    let sel = SimpleSelectHalf::new(bv.as_words(), n);
    assert_eq!(sel.num_ones(), count);
    for i in 0..count {
        assert_eq!(sel.select(i), i * gap);
    }
}
