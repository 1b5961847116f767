/*
 * SPDX-FileCopyrightText: 2026 The succinct authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Dictionaries over monotone sequences.

mod double_ef;

pub use double_ef::DoubleEF;
