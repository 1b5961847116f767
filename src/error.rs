/*
 * SPDX-FileCopyrightText: 2026 The succinct authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The crate's only public error type.
//!
//! Every query operation in this crate is precondition-checked only by
//! `debug_assert!`, per the spec's error-handling model: out-of-range
//! arguments are undefined behavior, not a recoverable error. The two
//! failure modes that *are* recoverable — a jump-table offset overflowing
//! 16 bits during [`crate::dict::DoubleEF`] construction, and I/O failure on
//! `dump`/`load` — are the only two variants below.

use std::fmt;

/// Errors produced by the fallible parts of this crate's public API.
#[derive(Debug)]
pub enum SuccinctError {
    /// A jump-table offset for one of the two Elias–Fano upper-bits streams
    /// exceeded 16 bits during [`crate::dict::DoubleEF`] construction. The
    /// original C++ source treats this as fatal (`abort()`); this crate
    /// surfaces it as a typed error before any of the four backing arrays
    /// are allocated, per the spec's own suggestion (§7).
    JumpOffsetOverflow {
        stream: &'static str,
        bucket: u64,
        offset: u64,
    },
    /// An I/O error occurred while reading or writing a [`crate::dict::DoubleEF`]
    /// dump. A short/truncated stream surfaces here too, as
    /// `io::ErrorKind::UnexpectedEof` from `Read::read_exact`.
    Io(std::io::Error),
}

impl fmt::Display for SuccinctError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuccinctError::JumpOffsetOverflow {
                stream,
                bucket,
                offset,
            } => write!(
                f,
                "jump offset {offset} for bucket {bucket} in the {stream} stream exceeds 2^16"
            ),
            SuccinctError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SuccinctError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SuccinctError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SuccinctError {
    fn from(e: std::io::Error) -> Self {
        SuccinctError::Io(e)
    }
}
