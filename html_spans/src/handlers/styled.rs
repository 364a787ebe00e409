// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use super::attributes::attribute_style;
use crate::handler::{RenderContext, TagHandler};
use crate::node::Element;
use crate::style::{Display, FontWeight, Style};
use crate::Config;

/// How many line breaks a handler writes after its content.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
enum Breaks {
    /// None beyond what block display asks for.
    #[default]
    None,
    /// One newline, always (`br`).
    Line,
    /// A blank line after the block (`p`, `div`).
    Paragraph,
}

/// Applies a fixed [`Style`] over the element's content.
///
/// Block styles start and end the content on a line of its own. Optionally the element's own
/// `style` and `align` attributes are layered on top of the fixed style.
#[derive(Clone, Debug, Default)]
pub struct StyledHandler {
    style: Style,
    read_style_attribute: bool,
    read_align_attribute: bool,
    breaks: Breaks,
}

impl StyledHandler {
    /// Applies `style` to every occurrence of the tag.
    pub fn new(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// A heading: bold block text at `size` times the surrounding size, with half a line of
    /// space below.
    pub fn heading(size: f32) -> Self {
        Self::new(
            Style::new()
                .with_font_weight(FontWeight::Bold)
                .with_display(Display::Block)
                .with_relative_font_size(size)
                .with_relative_margin_bottom(0.5),
        )
    }

    /// A paragraph-like block followed by a blank line.
    pub fn paragraph() -> Self {
        let mut handler = Self::new(Style::new().with_display(Display::Block))
            .with_style_attribute()
            .with_align_attribute();
        handler.breaks = Breaks::Paragraph;
        handler
    }

    /// A forced line break.
    pub fn line_break() -> Self {
        let mut handler = Self::default()
            .with_style_attribute()
            .with_align_attribute();
        handler.breaks = Breaks::Line;
        handler
    }

    /// Also read the element's `style` attribute.
    pub fn with_style_attribute(mut self) -> Self {
        self.read_style_attribute = true;
        self
    }

    /// Also read the element's `align` attribute.
    pub fn with_align_attribute(mut self) -> Self {
        self.read_align_attribute = true;
        self
    }

    /// The fixed style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The fixed style with the element's own attributes layered on top.
    pub fn effective_style(&self, element: &Element, config: &Config) -> Style {
        let own = attribute_style(
            element,
            config,
            self.read_style_attribute,
            self.read_align_attribute,
        );
        self.style.cascade(&own)
    }
}

impl TagHandler for StyledHandler {
    fn before_children(&self, element: &Element, cx: &mut RenderContext<'_>) {
        if self.effective_style(element, cx.config()).is_block() {
            cx.text_mut().ensure_newline();
        }
    }

    fn handle(&self, element: &Element, cx: &mut RenderContext<'_>, range: Range<usize>) {
        let mut style = self.effective_style(element, cx.config());
        match self.breaks {
            Breaks::Line => {
                cx.text_mut().push_newline();
            }
            Breaks::Paragraph => {
                cx.text_mut().ensure_newline();
                cx.text_mut().push_newline();
            }
            Breaks::None => {
                if style.is_block() {
                    cx.text_mut().ensure_newline();
                }
            }
        }
        // Display only drives the breaks above.
        style.display = None;
        let end = cx.text().len();
        log::debug!("<{}> styles {}..{end}", element.name(), range.start);
        cx.push_style(range.start..end, style);
    }
}

#[cfg(test)]
mod tests {
    use super::StyledHandler;
    use crate::node::Element;
    use crate::style::{Display, FontWeight, TextAlignment};
    use crate::Config;

    #[test]
    fn attributes_layer_over_fixed_style() {
        let config = Config::default();
        let handler = StyledHandler::paragraph();
        let element = Element::new("p")
            .with_attribute("align", "center")
            .with_attribute("style", "font-weight: bold; text-align: right");
        let style = handler.effective_style(&element, &config);
        // The inline style beats the legacy attribute.
        assert_eq!(style.text_alignment, Some(TextAlignment::Right));
        assert_eq!(style.font_weight, Some(FontWeight::Bold));
        assert_eq!(style.display, Some(Display::Block));
    }

    #[test]
    fn attributes_ignored_unless_enabled() {
        let config = Config::default();
        let element = Element::new("h2").with_attribute("align", "center");
        let style = StyledHandler::heading(1.4).effective_style(&element, &config);
        assert_eq!(style.text_alignment, None);
        assert_eq!(style.relative_font_size, Some(1.4));
    }

    #[test]
    fn unknown_alignment_is_dropped() {
        let config = Config::default();
        let element = Element::new("div").with_attribute("align", "justify");
        let style = StyledHandler::paragraph().effective_style(&element, &config);
        assert_eq!(style.text_alignment, None);
    }
}
