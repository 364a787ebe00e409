// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::handler::{RenderContext, TagHandler};
use crate::node::Element;
use crate::style::{parse_inline_style, Style, TextAlignment};
use crate::Config;

/// The style asked for by an element's own `align` and `style` attributes.
///
/// The inline style beats the legacy `align` attribute.
pub(crate) fn attribute_style(
    element: &Element,
    config: &Config,
    read_style: bool,
    read_align: bool,
) -> Style {
    let mut own = Style::new();
    if read_align {
        own.text_alignment = element.attribute("align").and_then(TextAlignment::parse);
    }
    if read_style {
        if let Some(declarations) = element.attribute("style") {
            own = own.cascade(&parse_inline_style(declarations, config));
        }
    }
    own
}

/// Layers the element's `style` and `align` attributes over any handler.
///
/// The attributes take precedence over whatever the wrapped handler pushes, and a block
/// `display` puts the content on lines of its own.
///
/// ```
/// use html_spans::handlers::AttributeHandler;
/// use html_spans::{Converter, Element, Node};
///
/// let mut converter = Converter::default();
/// if let Some(li) = converter.shared_handler_for("li") {
///     converter.register_handler("li", AttributeHandler::new(li));
/// }
/// let tree: Node = Element::new("li").with_attribute("align", "right").with_text("x").into();
/// assert_eq!(converter.render(&tree).as_str(), "\u{2022} x\n");
/// ```
#[derive(Clone, Debug)]
pub struct AttributeHandler<H> {
    inner: H,
}

impl<H: TagHandler> AttributeHandler<H> {
    /// Wraps `inner`.
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    /// The wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }

    /// Unwraps the handler.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: TagHandler> TagHandler for AttributeHandler<H> {
    fn renders_content(&self) -> bool {
        self.inner.renders_content()
    }

    fn before_children(&self, element: &Element, cx: &mut RenderContext<'_>) {
        if attribute_style(element, cx.config(), true, true).is_block() {
            cx.text_mut().ensure_newline();
        }
        self.inner.before_children(element, cx);
    }

    fn handle(&self, element: &Element, cx: &mut RenderContext<'_>, range: Range<usize>) {
        let mut own = attribute_style(element, cx.config(), true, true);
        let mark = cx.pending();
        self.inner.handle(element, cx, range.clone());
        if own.is_block() {
            cx.text_mut().ensure_newline();
        }
        own.display = None;
        let end = cx.text().len();
        cx.push_style_before(mark, range.start..end, own);
    }
}

#[cfg(test)]
mod tests {
    use super::attribute_style;
    use crate::node::Element;
    use crate::style::TextAlignment;
    use crate::Config;

    #[test]
    fn inline_style_beats_align() {
        let config = Config::default();
        let element = Element::new("td")
            .with_attribute("align", "left")
            .with_attribute("style", "text-align: center");
        assert_eq!(
            attribute_style(&element, &config, true, true).text_alignment,
            Some(TextAlignment::Center)
        );
        assert_eq!(
            attribute_style(&element, &config, false, true).text_alignment,
            Some(TextAlignment::Left)
        );
        assert!(attribute_style(&element, &config, false, false).is_empty());
    }
}
