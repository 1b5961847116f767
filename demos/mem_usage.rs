/*
 * SPDX-FileCopyrightText: 2026 The succinct authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Builds each of this crate's three structures over synthetic data and
//! prints a `mem_dbg` memory report for each. Not part of the public API;
//! a quick way to eyeball real overhead against the documented targets
//! (~25% for `Rank9`, ~half a bit per element for `SimpleSelectHalf`).

use anyhow::Result;
use mem_dbg::{DbgFlags, MemDbg};
use succinct::bits::BitVec;
use succinct::dict::DoubleEF;
use succinct::rank_sel::{Rank9, SimpleSelectHalf};

fn main() -> Result<()> {
    env_logger::init();

    let n = 1 << 20;
    let mut bv = BitVec::with_trailing_free_bit(n);
    for i in 0..n {
        bv.set(i, i % 3 == 0);
    }

    let rank9 = Rank9::new(bv.as_words(), bv.len() as u64);
    println!("Rank9 over {n} bits:");
    rank9.mem_dbg(DbgFlags::default())?;

    let select = SimpleSelectHalf::new(bv.as_words(), bv.len() as u64);
    println!("\nSimpleSelectHalf over {n} bits:");
    select.mem_dbg(DbgFlags::default())?;

    let buckets = 10_000u64;
    let cum_keys: Vec<u64> = (0..=buckets).map(|i| i * 7).collect();
    let position: Vec<u64> = (0..=buckets).map(|i| i * 11 + (i % 13)).collect();
    let ef = DoubleEF::new(&cum_keys, &position)?;
    println!("\nDoubleEF over {buckets} buckets:");
    ef.mem_dbg(DbgFlags::default())?;

    Ok(())
}
