// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

/// Error returned when an annotation range does not fit the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    range: Range<usize>,
    text_len: usize,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, range: Range<usize>, text_len: usize) -> Self {
        Self {
            kind,
            range,
            text_len,
        }
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The range that was rejected.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The length in bytes of the text the range was checked against.
    pub fn text_len(&self) -> usize {
        self.text_len
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Range { start, end } = self.range;
        match self.kind {
            ErrorKind::Inverted => write!(f, "range {start}..{end} is inverted"),
            ErrorKind::OutOfBounds => {
                write!(f, "range {start}..{end} exceeds text length {}", self.text_len)
            }
            ErrorKind::NotOnCharBoundary(which) => {
                let (name, index) = match which {
                    Endpoint::Start => ("start", start),
                    Endpoint::End => ("end", end),
                };
                write!(
                    f,
                    "range {start}..{end}: {name} index {index} is inside a UTF-8 character"
                )
            }
        }
    }
}

impl core::error::Error for Error {}

/// The category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// `start > end`.
    Inverted,
    /// One of the endpoints is past the end of the text.
    OutOfBounds,
    /// The given endpoint splits a multi-byte character.
    NotOnCharBoundary(Endpoint),
}

/// Identifies an endpoint of a range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The inclusive start.
    Start,
    /// The exclusive end.
    End,
}
