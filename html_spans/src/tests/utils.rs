// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use crate::{AnnotatedText, Annotation, Category, Config, Converter, Element, Node, DOCUMENT_ROOT};

pub(crate) type Annotated = AnnotatedText<Annotation>;

/// A document root holding `children`.
pub(crate) fn document(children: impl IntoIterator<Item = Node>) -> Node {
    let mut root = Element::new(DOCUMENT_ROOT);
    for child in children {
        root.push_child(child);
    }
    root.into()
}

/// An element with a single text child.
pub(crate) fn tag(name: &str, text: &str) -> Node {
    Element::new(name).with_text(text).into()
}

pub(crate) fn render(node: &Node) -> Annotated {
    Converter::default().render(node)
}

pub(crate) fn render_with(config: Config, node: &Node) -> Annotated {
    Converter::new(config).render(node)
}

pub(crate) fn annotations(text: &Annotated) -> Vec<(Range<usize>, Annotation)> {
    text.iter()
        .map(|(range, annotation)| (range.clone(), annotation.clone()))
        .collect()
}

pub(crate) fn of_category(text: &Annotated, category: Category) -> Vec<(Range<usize>, Annotation)> {
    text.of_category(category)
        .map(|(range, annotation)| (range.clone(), annotation.clone()))
        .collect()
}
