// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use core::ops::Range;

use crate::handler::{RenderContext, TagHandler};
use crate::node::{Element, Node};

/// Bullet written in front of unordered list items.
pub const BULLET: &str = "\u{2022} ";

/// Writes the marker for a list item and ends it with a newline.
///
/// Items of an `ol` are numbered from its `start` attribute (1 when absent or malformed); all
/// other items get a bullet. The marker is written before the children, so it is not covered by
/// the item's range.
#[derive(Copy, Clone, Debug, Default)]
pub struct ListItemHandler;

impl ListItemHandler {
    /// The 1-based position of `item` among the `li` children of `list`.
    fn position(list: &Element, item: &Element) -> Option<usize> {
        list.children()
            .iter()
            .filter_map(Node::as_element)
            .filter(|child| child.name() == "li")
            .position(|child| core::ptr::eq(child, item))
            .map(|index| index + 1)
    }
}

impl TagHandler for ListItemHandler {
    fn before_children(&self, element: &Element, cx: &mut RenderContext<'_>) {
        let number = cx
            .parent()
            .filter(|parent| parent.name() == "ol")
            .and_then(|list| {
                let start = list
                    .attribute("start")
                    .and_then(|start| start.trim().parse::<i64>().ok())
                    .unwrap_or(1);
                let position = Self::position(list, element)?;
                Some(start.saturating_add(i64::try_from(position).ok()? - 1))
            });
        cx.text_mut().ensure_newline();
        match number {
            Some(number) => cx.text_mut().push_str(&format!("{number}. ")),
            None => cx.text_mut().push_str(BULLET),
        }
    }

    fn handle(&self, _: &Element, cx: &mut RenderContext<'_>, _: Range<usize>) {
        cx.text_mut().ensure_newline();
    }
}
