// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annotated Text stores a finished string together with style annotations on byte ranges.
//!
//! Each annotation names a category (via [`Categorized`]) so consumers can ask for the value that
//! is in effect for one dimension (font, color, size…) at a given position, while annotations of
//! different categories overlap freely.
//!
//! ## Indices
//!
//! All ranges are **byte indices** into UTF-8 text and must lie on character boundaries.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod annotated_text;
mod error;

pub use crate::annotated_text::AnnotatedText;
pub use crate::error::{Endpoint, Error, ErrorKind};

/// An annotation value that belongs to exactly one category.
///
/// Annotations of the same category describe the same logical dimension; when two of them cover
/// the same position, the one applied last is the one in effect.
pub trait Categorized {
    /// The category type, usually a fieldless enum.
    type Category: Copy + Eq + core::fmt::Debug;

    /// Returns the category of this annotation.
    fn category(&self) -> Self::Category;
}
