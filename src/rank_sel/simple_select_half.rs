/*
 * SPDX-FileCopyrightText: 2026 The succinct authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! SimpleSelectHalf: a constant-time select index tuned for bit vectors
//! where roughly half the bits are set.
//!
//! The index is a flat inventory of groups, one per 1024 consecutive ones.
//! Each group records the bit position of its first one plus a
//! sub-inventory of 16 finer-grained offsets; when a group spans more than
//! 2^16 bits (too sparse for 16-bit offsets to address), it instead stores
//! 4 coarser 64-bit absolute offsets. This crate uses a tagged enum for
//! that choice (the design notes suggest this over reading the sign bit of
//! a shared `i64` slot, which the original C/C++ source does to save one
//! word per group); the in-memory footprint is identical and the tag makes
//! the two cases impossible to confuse at the type level.

use crate::bits::{popcount, select64};
use mem_dbg::{MemDbg, MemSize};

const ONES_PER_INVENTORY: u64 = 1024;
const ONES_PER_SUB64: u64 = 256;
const ONES_PER_SUB16: u64 = 64;

/// A group's sub-inventory: either 16 16-bit offsets (dense groups) or 4
/// 64-bit offsets (groups whose bit span exceeds 2^16).
#[derive(Debug, Clone, Copy, MemDbg, MemSize)]
enum SubInventory {
    Narrow([u16; 16]),
    Wide([u64; 4]),
}

#[derive(Debug, Clone, Copy, MemDbg, MemSize)]
struct Group {
    /// Absolute bit position of the first one in this group.
    start: u64,
    sub: SubInventory,
}

/// Iterates the bit positions of the set bits of `bits`, stopping at
/// `num_bits` (so any trailing free bits beyond the logical length, even if
/// nonzero, are never yielded).
fn iter_ones(bits: &[u64], num_bits: u64) -> impl Iterator<Item = u64> + '_ {
    let num_words = (num_bits as usize).div_ceil(64);
    (0..num_words)
        .flat_map(move |i| {
            let mut w = bits[i];
            std::iter::from_fn(move || {
                if w == 0 {
                    None
                } else {
                    let b = w.trailing_zeros() as u64;
                    w &= w - 1;
                    Some(i as u64 * 64 + b)
                }
            })
        })
        .take_while(move |&pos| pos < num_bits)
}

/// A constant-time select index over a borrowed bit vector that is roughly
/// half dense. See the [module documentation](self) for the inventory
/// layout.
#[derive(Debug, MemDbg, MemSize)]
pub struct SimpleSelectHalf<'a> {
    bits: &'a [u64],
    num_bits: u64,
    num_ones: u64,
    inventory: Box<[Group]>,
}

impl<'a> SimpleSelectHalf<'a> {
    /// Builds a select index over `bits`, a bit vector of `num_bits` bits.
    pub fn new(bits: &'a [u64], num_bits: u64) -> Self {
        log::debug!("building SimpleSelectHalf over {num_bits} bits");
        let num_ones = iter_ones(bits, num_bits).count() as u64;
        let inventory_size = num_ones.div_ceil(ONES_PER_INVENTORY) as usize;

        let mut starts = Vec::with_capacity(inventory_size + 1);
        for (d, pos) in iter_ones(bits, num_bits).enumerate() {
            if d as u64 % ONES_PER_INVENTORY == 0 {
                starts.push(pos);
            }
        }
        starts.push(num_bits);
        debug_assert_eq!(starts.len(), inventory_size + 1);

        let mut inventory: Vec<Group> = (0..inventory_size)
            .map(|g| {
                let span = starts[g + 1] - starts[g];
                let sub = if span < (1 << 16) {
                    SubInventory::Narrow([0u16; 16])
                } else {
                    SubInventory::Wide([0u64; 4])
                };
                Group {
                    start: starts[g],
                    sub,
                }
            })
            .collect();

        for (d, pos) in iter_ones(bits, num_bits).enumerate() {
            let d = d as u64;
            let g = (d / ONES_PER_INVENTORY) as usize;
            let sub_rank = d % ONES_PER_INVENTORY;
            let group = &mut inventory[g];
            match &mut group.sub {
                SubInventory::Narrow(offsets) => {
                    if sub_rank % ONES_PER_SUB16 == 0 {
                        let idx = (sub_rank / ONES_PER_SUB16) as usize;
                        offsets[idx] = (pos - group.start) as u16;
                    }
                }
                SubInventory::Wide(offsets) => {
                    if sub_rank % ONES_PER_SUB64 == 0 {
                        let idx = (sub_rank / ONES_PER_SUB64) as usize;
                        offsets[idx] = pos - group.start;
                    }
                }
            }
        }

        Self {
            bits,
            num_bits,
            num_ones,
            inventory: inventory.into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> u64 {
        self.num_bits
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_bits == 0
    }

    #[inline(always)]
    pub fn num_ones(&self) -> u64 {
        self.num_ones
    }

    /// Returns the bit position of the `r`-th set bit (0-indexed).
    ///
    /// `r` must be `< num_ones`.
    pub fn select(&self, r: u64) -> u64 {
        debug_assert!(r < self.num_ones, "select({r}) out of range ({})", self.num_ones);
        let g = (r / ONES_PER_INVENTORY) as usize;
        let sub_rank = r % ONES_PER_INVENTORY;
        let group = &self.inventory[g];

        let (start, mut residual) = match &group.sub {
            SubInventory::Narrow(offsets) => {
                let idx = (sub_rank / ONES_PER_SUB16) as usize;
                (group.start + offsets[idx] as u64, sub_rank % ONES_PER_SUB16)
            }
            SubInventory::Wide(offsets) => {
                let idx = (sub_rank / ONES_PER_SUB64) as usize;
                (group.start + offsets[idx], sub_rank % ONES_PER_SUB64)
            }
        };

        if residual == 0 {
            return start;
        }

        let mut word_index = (start / 64) as usize;
        let mut word = self.bits[word_index] & (u64::MAX << (start % 64));
        loop {
            let bit_count = popcount(word) as u64;
            if residual < bit_count {
                break;
            }
            residual -= bit_count;
            word_index += 1;
            word = self.bits[word_index];
        }

        word_index as u64 * 64 + select64(word, residual as u32) as u64
    }

    /// Returns `(select(r), select(r + 1))`.
    ///
    /// `r + 1` must be `< num_ones`.
    pub fn select_next(&self, r: u64) -> (u64, u64) {
        debug_assert!(
            r + 1 < self.num_ones,
            "select_next({r}) requires r + 1 < num_ones ({})",
            self.num_ones
        );
        let s = self.select(r);
        let mut curr = (s / 64) as usize;
        let mut window = self.bits[curr] & (u64::MAX << (s % 64));
        window &= window - 1; // clear the bit at s itself
        while window == 0 {
            curr += 1;
            window = self.bits[curr];
        }
        (s, curr as u64 * 64 + window.trailing_zeros() as u64)
    }
}
