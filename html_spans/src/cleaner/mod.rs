// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning raw markup into the [`Node`] tree the converter consumes.

#[cfg(feature = "std")]
mod xhtml;

#[cfg(feature = "std")]
pub use xhtml::XhtmlCleaner;

use crate::node::Node;
use crate::Error;

/// Name of the synthetic element that holds the top-level nodes of a cleaned document.
///
/// No handler is registered for it, so it is transparent.
pub const DOCUMENT_ROOT: &str = "#document";

/// Parses markup into a cleaned tree.
///
/// Implementations should lowercase tag and attribute names and decode character references.
/// Closures of the right shape are cleaners too.
pub trait Cleaner {
    /// Cleans `markup`.
    fn clean(&self, markup: &str) -> Result<Node, Error>;
}

impl<F> Cleaner for F
where
    F: Fn(&str) -> Result<Node, Error>,
{
    fn clean(&self, markup: &str) -> Result<Node, Error> {
        self(markup)
    }
}
