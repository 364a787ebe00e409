// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::handler::{RenderContext, TagHandler};
use crate::node::{Element, Node};
use crate::style::Style;
use crate::text::TextBuffer;

/// Sets the configured monospace family (`tt`, `code`, `kbd`, `samp`).
#[derive(Copy, Clone, Debug, Default)]
pub struct MonospaceHandler;

impl TagHandler for MonospaceHandler {
    fn handle(&self, _: &Element, cx: &mut RenderContext<'_>, range: Range<usize>) {
        let family = cx.config().monospace_font.clone();
        cx.push_style(range, Style::new().with_font_family(family));
    }
}

/// Preformatted text: the subtree is written verbatim in the monospace family on lines of its
/// own.
///
/// Nested markup inside `pre` contributes only its text; `br` becomes a newline.
#[derive(Copy, Clone, Debug, Default)]
pub struct PreHandler;

impl TagHandler for PreHandler {
    fn renders_content(&self) -> bool {
        true
    }

    fn before_children(&self, _: &Element, cx: &mut RenderContext<'_>) {
        cx.text_mut().ensure_newline();
    }

    fn handle(&self, element: &Element, cx: &mut RenderContext<'_>, range: Range<usize>) {
        for child in element.children() {
            write_verbatim(child, cx.text_mut());
        }
        cx.text_mut().ensure_newline();
        let family = cx.config().monospace_font.clone();
        let end = cx.text().len();
        cx.push_style(range.start..end, Style::new().with_font_family(family));
    }
}

fn write_verbatim(node: &Node, buffer: &mut TextBuffer) {
    match node {
        Node::Text(text) => buffer.push_str(text),
        Node::Element(element) if element.name() == "br" => buffer.push_str("\n"),
        Node::Element(element) => {
            for child in element.children() {
                write_verbatim(child, buffer);
            }
        }
    }
}
