/*
 * SPDX-FileCopyrightText: 2026 The succinct authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

#[cfg(not(target_pointer_width = "64"))]
compile_error!("`target_pointer_width` must be 64");

pub mod bits;
pub mod dict;
pub mod error;
pub mod rank_sel;

pub mod prelude {
    pub use crate::bits::*;
    pub use crate::dict::*;
    pub use crate::error::*;
    pub use crate::rank_sel::*;
}
