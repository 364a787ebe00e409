// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use annotated_text::AnnotatedText;

use crate::commit::{resolve, Annotation};
use crate::style::Style;
use crate::Config;

/// What a tag asked for over its range.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    /// Visual style attributes.
    Style(Style),
    /// A hyperlink target.
    Link(Arc<str>),
    /// An image source; the range covers the placeholder character.
    Image(Arc<str>),
}

/// One pending annotation request.
#[derive(Clone, Debug, PartialEq)]
pub struct StackEntry {
    /// Byte range in the text buffer.
    pub range: Range<usize>,
    /// The request.
    pub intent: Intent,
}

/// Pending annotation requests, in the order their tags finished.
///
/// Tags finish in post-order, so an entry always comes after the entries of its descendants.
/// Nothing touches the text until [`commit`](Self::commit).
#[derive(Clone, Debug, Default)]
pub struct SpanStack {
    entries: Vec<StackEntry>,
}

impl SpanStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, range: Range<usize>, intent: Intent) {
        self.entries.push(StackEntry { range, intent });
    }

    /// Appends a style entry. Empty styles are dropped.
    pub fn push_style(&mut self, range: Range<usize>, style: Style) {
        if style.is_empty() {
            return;
        }
        self.push(range, Intent::Style(style));
    }

    /// Inserts a style entry at `index`, ahead of the entries pushed after that point.
    ///
    /// Earlier entries take precedence, so this lets a wrapper outrank what it wraps.
    pub fn insert_style(&mut self, index: usize, range: Range<usize>, style: Style) {
        if style.is_empty() {
            return;
        }
        let index = index.min(self.entries.len());
        self.entries.insert(
            index,
            StackEntry {
                range,
                intent: Intent::Style(style),
            },
        );
    }

    /// The entries in commit order.
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves every entry against `text` and returns the annotated result.
    pub fn commit(self, text: String, config: &Config) -> AnnotatedText<Annotation> {
        let resolved = resolve(&self.entries, &text, config);
        let mut annotated = AnnotatedText::new(text);
        for (range, annotation) in resolved {
            // `resolve` only emits validated ranges.
            if let Err(err) = annotated.annotate(range, annotation) {
                log::warn!("dropping annotation: {err}");
            }
        }
        annotated
    }
}
