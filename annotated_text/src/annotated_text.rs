// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{Categorized, Endpoint, Error, ErrorKind};

/// A finished string with annotations applied to byte ranges within it.
///
/// The text is fixed at construction; annotations can only be added, so every recorded range
/// stays valid for the lifetime of the value.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotatedText<A> {
    text: String,
    annotations: Vec<(Range<usize>, A)>,
}

impl<A> AnnotatedText<A> {
    /// Create an `AnnotatedText` with no annotations.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotations: Vec::new(),
        }
    }

    /// Borrow the text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Apply `annotation` to `range`.
    ///
    /// The range must be ordered, inside the text, and on UTF-8 character boundaries.
    pub fn annotate(&mut self, range: Range<usize>, annotation: A) -> Result<(), Error> {
        let len = self.text.len();
        if range.start > range.end {
            return Err(Error::new(ErrorKind::Inverted, range, len));
        }
        if range.end > len {
            return Err(Error::new(ErrorKind::OutOfBounds, range, len));
        }
        if !self.text.is_char_boundary(range.start) {
            let kind = ErrorKind::NotOnCharBoundary(Endpoint::Start);
            return Err(Error::new(kind, range, len));
        }
        if !self.text.is_char_boundary(range.end) {
            let kind = ErrorKind::NotOnCharBoundary(Endpoint::End);
            return Err(Error::new(kind, range, len));
        }
        self.annotations.push((range, annotation));
        Ok(())
    }

    /// Iterate over all annotations in the order they were applied.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &A)> {
        self.annotations.iter().map(|(range, annotation)| (range, annotation))
    }

    /// Returns the number of annotations.
    pub fn annotations_len(&self) -> usize {
        self.annotations.len()
    }

    /// Iterate over every annotation covering the byte at `index`.
    pub fn annotations_at(&self, index: usize) -> impl Iterator<Item = &A> {
        self.annotations
            .iter()
            .filter(move |(range, _)| range.contains(&index))
            .map(|(_, annotation)| annotation)
    }

    /// Iterate over every annotation that intersects `range`.
    pub fn annotations_overlapping(&self, range: Range<usize>) -> impl Iterator<Item = &A> {
        self.annotations
            .iter()
            .filter(move |(span, _)| span.start < range.end && span.end > range.start)
            .map(|(_, annotation)| annotation)
    }

    /// Consume `self`, returning the text and the annotations in application order.
    pub fn into_parts(self) -> (String, Vec<(Range<usize>, A)>) {
        (self.text, self.annotations)
    }
}

impl<A: Categorized> AnnotatedText<A> {
    /// Iterate over the annotations of one category, in application order.
    pub fn of_category(
        &self,
        category: A::Category,
    ) -> impl Iterator<Item = (&Range<usize>, &A)> {
        self.iter()
            .filter(move |(_, annotation)| annotation.category() == category)
    }

    /// Returns the annotation of `category` in effect at `index`.
    ///
    /// When several annotations of the category cover `index`, the last one applied wins.
    pub fn effective_at(&self, category: A::Category, index: usize) -> Option<&A> {
        self.annotations
            .iter()
            .rev()
            .find(|(range, annotation)| {
                range.contains(&index) && annotation.category() == category
            })
            .map(|(_, annotation)| annotation)
    }
}
