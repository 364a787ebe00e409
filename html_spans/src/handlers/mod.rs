// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The built-in tag handlers.

mod attributes;
mod font;
mod link;
mod list;
mod monospace;
mod styled;

use alloc::sync::Arc;

pub use attributes::AttributeHandler;
pub use font::FontHandler;
pub use link::{ImageHandler, LinkHandler, OBJECT_REPLACEMENT};
pub use list::{ListItemHandler, BULLET};
pub use monospace::{MonospaceHandler, PreHandler};
pub use styled::StyledHandler;

use crate::handler::{HandlerTable, TagHandler};
use crate::style::{Display, FontStyle, FontWeight, Style, TextAlignment, VerticalAlign};

const HEADING_SIZES: [(&str, f32); 6] = [
    ("h1", 1.5),
    ("h2", 1.4),
    ("h3", 1.3),
    ("h4", 1.2),
    ("h5", 1.1),
    ("h6", 1.0),
];

fn register_all(table: &mut HandlerTable, tags: &[&str], handler: Arc<dyn TagHandler>) {
    for tag in tags {
        table.register_shared(*tag, handler.clone());
    }
}

/// Registers every built-in handler in `table`, replacing earlier registrations of the same tags.
pub fn register_builtins(table: &mut HandlerTable) {
    let italic = StyledHandler::new(Style::new().with_font_style(FontStyle::Italic));
    register_all(table, &["i", "em", "cite", "dfn", "var"], Arc::new(italic));

    let bold = StyledHandler::new(Style::new().with_font_weight(FontWeight::Bold));
    register_all(table, &["b", "strong"], Arc::new(bold));

    table.register(
        "big",
        StyledHandler::new(Style::new().with_relative_font_size(1.25)),
    );
    table.register(
        "small",
        StyledHandler::new(Style::new().with_relative_font_size(0.8)),
    );

    let indented = StyledHandler::new(
        Style::new()
            .with_display(Display::Block)
            .with_relative_margin_left(1.0),
    );
    register_all(table, &["blockquote", "ul", "ol"], Arc::new(indented));

    register_all(table, &["p", "div"], Arc::new(StyledHandler::paragraph()));
    table.register("br", StyledHandler::line_break());

    for (tag, size) in HEADING_SIZES {
        table.register(tag, StyledHandler::heading(size));
    }

    register_all(
        table,
        &["tt", "code", "kbd", "samp"],
        Arc::new(MonospaceHandler),
    );
    table.register("pre", PreHandler);

    table.register(
        "sub",
        StyledHandler::new(
            Style::new()
                .with_vertical_align(VerticalAlign::Sub)
                .with_relative_font_size(0.8),
        ),
    );
    table.register(
        "sup",
        StyledHandler::new(
            Style::new()
                .with_vertical_align(VerticalAlign::Super)
                .with_relative_font_size(0.8),
        ),
    );
    table.register(
        "center",
        StyledHandler::new(Style::new().with_text_alignment(TextAlignment::Center)),
    );

    table.register("li", ListItemHandler);
    table.register("a", LinkHandler);
    table.register("img", ImageHandler);
    table.register("font", FontHandler);
    table.register("span", StyledHandler::default().with_style_attribute());
}
