/*
 * SPDX-FileCopyrightText: 2026 The succinct authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Rank and select indexes over borrowed bit vectors.

mod rank9;
mod simple_select_half;

pub use rank9::Rank9;
pub use simple_select_half::SimpleSelectHalf;
