/*
 * SPDX-FileCopyrightText: 2026 The succinct authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Word-parallel ("broadword") primitives shared by every index in this
//! crate: population count, in-word select, and the two log-ish helpers
//! (`lambda`, `rho`) used to size and navigate Elias–Fano streams.
//!
//! None of these functions allocate or touch memory outside the word they
//! are given; they are the leaves every other module in this crate is built
//! on.

use common_traits::SelectInWord;

/// Number of set bits in `word`.
#[inline(always)]
pub fn popcount(word: u64) -> u32 {
    word.count_ones()
}

/// Alias for [`popcount`], kept because the unary-decoding code in
/// [`crate::dict::double_ef`] reads more clearly as `nu(window)` than
/// `popcount(window)` — `nu` is how the number of ones in a unary-coded
/// window is named in the Elias–Fano literature this module follows.
#[inline(always)]
pub fn nu(word: u64) -> u32 {
    popcount(word)
}

/// Index of the least significant set bit of `word`.
///
/// # Panics (debug only)
/// Undefined (returns 64, the width of the word) when `word == 0`; callers
/// must never invoke this on an empty window.
#[inline(always)]
pub fn rho(word: u64) -> u32 {
    debug_assert_ne!(word, 0, "rho is undefined for a zero word");
    word.trailing_zeros()
}

/// `floor(log2(x))` for `x >= 1`.
///
/// Undefined for `x == 0`; callers guard with an explicit `x == 0` check
/// before calling, matching the `l = u/(n+1) == 0 ? 0 : lambda(u/(n+1))`
/// idiom used throughout [`crate::dict::double_ef`].
#[inline(always)]
pub fn lambda(x: u64) -> u32 {
    debug_assert_ne!(x, 0, "lambda is undefined for x == 0");
    63 - x.leading_zeros()
}

/// Returns the bit position (0-indexed, in `[0, 64)`) of the `k`-th set bit
/// of `word`, where `k` is itself 0-indexed.
///
/// Undefined (panics in debug builds) when `k >= popcount(word)`.
///
/// Delegates to `common_traits::SelectInWord`, the same broadword
/// select-in-word primitive the rest of this crate's ecosystem calls
/// (`word.select_in_word(rank)` in `sux-rs`'s `SimpleSelectConst`,
/// `QuantumZeroIndex`, and `Bitmap`).
#[inline(always)]
pub fn select64(word: u64, k: u32) -> u32 {
    debug_assert!(
        k < popcount(word),
        "select64: k={k} out of range for popcount={}",
        popcount(word)
    );
    word.select_in_word(k as usize) as u32
}
