// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convert cleaned HTML trees into styled text.
//!
//! The result is an [`AnnotatedText`]: one string plus [`Annotation`]s on byte ranges of it, each
//! belonging to a [`Category`] (font, size, color, alignment…). Within a category, annotations
//! never overlap.
//!
//! Conversion happens in two phases:
//!
//! 1. A walk over the tree dispatches every element to the [`TagHandler`] registered for its
//!    name. Handlers append text and record requests on a [`SpanStack`]; nothing is styled yet.
//! 2. The stack is resolved against the finished text. Nested requests are combined per
//!    category: the innermost tag decides each font attribute, relative sizes multiply, indents
//!    add up and the innermost value wins everywhere else.
//!
//! Markup parsing is left to a [`Cleaner`]. With the `std` feature the crate ships
//! [`XhtmlCleaner`], a tolerant cleaner built on `quick-xml`.
//!
//! ## Indices
//!
//! All ranges are **byte indices** into UTF-8 text, on character boundaries.
//!
//! ## Example
//!
//! ```
//! use html_spans::{Annotation, Category, Converter, Element, Node};
//!
//! let tree: Node = Element::new("p")
//!     .with_child(Element::new("b").with_text("Hello"))
//!     .with_text("world")
//!     .into();
//! let text = Converter::default().render(&tree);
//!
//! assert_eq!(text.as_str(), "Hello world\n\n");
//! let bold = text.effective_at(Category::Font, 0);
//! assert!(matches!(bold, Some(Annotation::Font(font)) if font.is_bold()));
//! assert!(text.effective_at(Category::Font, 6).is_none());
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): reader-based conversion and [`XhtmlCleaner`].
//! - `libm`: float math for color conversion in `no_std` builds. One of `std` or `libm` is
//!   required.
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

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("html_spans requires either the `std` or `libm` feature to be enabled");

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod cleaner;
pub mod handlers;
pub mod style;

mod commit;
mod config;
mod convert;
mod error;
mod handler;
mod node;
mod stack;
mod text;

#[cfg(test)]
mod tests;

pub use annotated_text::AnnotatedText;

#[cfg(feature = "std")]
pub use crate::cleaner::XhtmlCleaner;
pub use crate::cleaner::{Cleaner, DOCUMENT_ROOT};
pub use crate::commit::{resolve, Annotation, Category, ResolvedFont};
pub use crate::config::Config;
pub use crate::convert::Converter;
pub use crate::error::{Error, MarkupError};
pub use crate::handler::{HandlerTable, RenderContext, TagHandler};
pub use crate::node::{Element, Node};
pub use crate::stack::{Intent, SpanStack, StackEntry};
pub use crate::style::Style;
pub use crate::text::TextBuffer;
