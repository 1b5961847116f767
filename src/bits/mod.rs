/*
 * SPDX-FileCopyrightText: 2026 The succinct authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Bit-level building blocks: word-parallel primitives and a plain owned
//! bit vector.

mod bit_vec;
mod word;

pub use bit_vec::BitVec;
pub use word::{lambda, nu, popcount, rho, select64};
