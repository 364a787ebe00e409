// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::ops::Range;

use crate::handler::{RenderContext, TagHandler};
use crate::node::Element;
use crate::stack::Intent;

/// Placeholder character standing in for an image.
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

/// Marks the content of `a` as a link to its `href`.
#[derive(Copy, Clone, Debug, Default)]
pub struct LinkHandler;

impl TagHandler for LinkHandler {
    fn handle(&self, element: &Element, cx: &mut RenderContext<'_>, range: Range<usize>) {
        match element.attribute("href") {
            Some(href) => cx.push(range, Intent::Link(Arc::from(href))),
            None => log::debug!("<a> without href left unlinked"),
        }
    }
}

/// Writes a placeholder for `img` and attaches its `src` to it.
#[derive(Copy, Clone, Debug, Default)]
pub struct ImageHandler;

impl TagHandler for ImageHandler {
    fn handle(&self, element: &Element, cx: &mut RenderContext<'_>, _: Range<usize>) {
        let Some(src) = element.attribute("src") else {
            log::debug!("skipping <img> without src");
            return;
        };
        let start = cx.text().len();
        let mut placeholder = [0; 4];
        cx.text_mut()
            .push_str(OBJECT_REPLACEMENT.encode_utf8(&mut placeholder));
        let end = cx.text().len();
        cx.push(start..end, Intent::Image(Arc::from(src)));
    }
}
