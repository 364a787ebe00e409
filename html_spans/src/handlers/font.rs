// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::handler::{RenderContext, TagHandler};
use crate::node::Element;
use crate::style::{parse_font_size_level, Color, Style};
use crate::Config;

/// The legacy `font` tag: `face`, `size` (levels 1 to 7) and `color`.
#[derive(Copy, Clone, Debug, Default)]
pub struct FontHandler;

impl FontHandler {
    /// The style described by the element's attributes.
    pub fn style_for(element: &Element, config: &Config) -> Style {
        let mut style = Style::new();
        if let Some(face) = element.attribute("face") {
            style.font_family = Some(config.font(face));
        }
        if let Some(size) = element.attribute("size") {
            style.relative_font_size = Some(parse_font_size_level(size));
        }
        if let Some(color) = element.attribute("color") {
            style.color = Color::parse(color);
            if style.color.is_none() {
                log::debug!("ignoring font color {color:?}");
            }
        }
        style
    }
}

impl TagHandler for FontHandler {
    fn handle(&self, element: &Element, cx: &mut RenderContext<'_>, range: Range<usize>) {
        let style = Self::style_for(element, cx.config());
        cx.push_style(range, style);
    }
}

#[cfg(test)]
mod tests {
    use super::FontHandler;
    use crate::node::Element;
    use crate::style::{Color, GenericFamily};
    use crate::Config;

    #[test]
    fn reads_all_attributes() {
        let config = Config::default();
        let element = Element::new("font")
            .with_attribute("face", "Courier New, monospace")
            .with_attribute("size", "5")
            .with_attribute("color", "#ff0000");
        let style = FontHandler::style_for(&element, &config);
        let family = style.font_family.as_ref().map(|family| family.name());
        assert_eq!(family, Some("Courier New"));
        assert_eq!(
            style.font_family.map(|family| family.generic()),
            Some(GenericFamily::SystemUi)
        );
        assert_eq!(style.relative_font_size, Some(1.4));
        assert_eq!(style.color, Some(Color::from_rgb(0xff, 0, 0)));
    }

    #[test]
    fn malformed_size_falls_back() {
        let config = Config::default();
        let element = Element::new("font").with_attribute("size", "xl");
        let style = FontHandler::style_for(&element, &config);
        assert_eq!(style.relative_font_size, Some(1.0));
    }
}
