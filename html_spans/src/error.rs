// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Errors surfaced by the conversion entry points.
///
/// Conversion is all-or-nothing: when an error is returned, no annotated text was produced.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The markup could not be read.
    #[cfg(feature = "std")]
    Io(std::io::Error),
    /// The cleaner rejected the markup.
    Markup(MarkupError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::Io(err) => write!(f, "failed to read markup: {err}"),
            Self::Markup(err) => write!(f, "{err}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            #[cfg(feature = "std")]
            Self::Io(err) => Some(err),
            Self::Markup(err) => Some(err),
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<MarkupError> for Error {
    fn from(err: MarkupError) -> Self {
        Self::Markup(err)
    }
}

/// A cleaner failure, with the byte offset where it was detected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkupError {
    message: String,
    offset: u64,
}

impl MarkupError {
    /// Creates a markup error.
    pub fn new(message: impl Into<String>, offset: u64) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }

    /// A human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset into the markup.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed markup at byte {}: {}", self.offset, self.message)
    }
}

impl core::error::Error for MarkupError {}
