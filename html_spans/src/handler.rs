// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tag behavior and the table that dispatches to it.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use core::ops::Range;

use hashbrown::HashMap;

use crate::node::Element;
use crate::stack::{Intent, SpanStack};
use crate::style::Style;
use crate::text::TextBuffer;
use crate::Config;

/// Behavior attached to one tag name.
///
/// Handlers only get `&self`, so anything they need to remember between calls has to live in the
/// text buffer or the style stack. A single handler instance may serve many conversions at once.
pub trait TagHandler: fmt::Debug + Send + Sync {
    /// Returns `true` if the handler writes the element's content itself.
    ///
    /// The walker then skips the children, and [`handle`](Self::handle) receives an empty range.
    fn renders_content(&self) -> bool {
        false
    }

    /// Runs before the children are visited.
    ///
    /// Text written here lies outside the range later passed to [`handle`](Self::handle).
    fn before_children(&self, element: &Element, cx: &mut RenderContext<'_>) {
        let _ = (element, cx);
    }

    /// Runs after the children, with the byte range they produced.
    ///
    /// The handler may append more text and push any number of stack entries.
    fn handle(&self, element: &Element, cx: &mut RenderContext<'_>, range: Range<usize>);
}

impl<T: TagHandler + ?Sized> TagHandler for Arc<T> {
    fn renders_content(&self) -> bool {
        (**self).renders_content()
    }

    fn before_children(&self, element: &Element, cx: &mut RenderContext<'_>) {
        (**self).before_children(element, cx);
    }

    fn handle(&self, element: &Element, cx: &mut RenderContext<'_>, range: Range<usize>) {
        (**self).handle(element, cx, range);
    }
}

/// Mutable conversion state handed to a [`TagHandler`].
#[derive(Debug)]
pub struct RenderContext<'a> {
    pub(crate) buffer: &'a mut TextBuffer,
    pub(crate) stack: &'a mut SpanStack,
    pub(crate) config: &'a Config,
    pub(crate) parent: Option<&'a Element>,
}

impl RenderContext<'_> {
    /// The text written so far.
    pub fn text(&self) -> &TextBuffer {
        &*self.buffer
    }

    /// Mutable access to the text buffer.
    pub fn text_mut(&mut self) -> &mut TextBuffer {
        &mut *self.buffer
    }

    /// Records an annotation request.
    pub fn push(&mut self, range: Range<usize>, intent: Intent) {
        self.stack.push(range, intent);
    }

    /// Records a style request. Empty styles are ignored.
    pub fn push_style(&mut self, range: Range<usize>, style: Style) {
        self.stack.push_style(range, style);
    }

    /// Number of requests recorded so far.
    pub fn pending(&self) -> usize {
        self.stack.len()
    }

    /// Records a style request that outranks every request recorded after the first `mark`.
    ///
    /// Pair with [`pending`](Self::pending) taken before delegating to a wrapped handler.
    pub fn push_style_before(&mut self, mark: usize, range: Range<usize>, style: Style) {
        self.stack.insert_style(mark, range, style);
    }

    /// The conversion options.
    pub fn config(&self) -> &Config {
        self.config
    }

    /// The element enclosing the one being handled, if any.
    pub fn parent(&self) -> Option<&Element> {
        self.parent
    }
}

/// Tag name to handler lookup.
///
/// Matching is exact; register lowercase names. Registering a name again replaces the previous
/// handler.
#[derive(Clone, Debug, Default)]
pub struct HandlerTable(HashMap<String, Arc<dyn TagHandler>>);

impl HandlerTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding every built-in handler.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        crate::handlers::register_builtins(&mut table);
        table
    }

    /// Registers `handler` for `tag`, returning the handler it replaced.
    pub fn register<H: TagHandler + 'static>(
        &mut self,
        tag: impl Into<String>,
        handler: H,
    ) -> Option<Arc<dyn TagHandler>> {
        self.register_shared(tag, Arc::new(handler))
    }

    /// Registers an already shared handler, so one instance can serve several tags.
    pub fn register_shared(
        &mut self,
        tag: impl Into<String>,
        handler: Arc<dyn TagHandler>,
    ) -> Option<Arc<dyn TagHandler>> {
        self.0.insert(tag.into(), handler)
    }

    /// Removes the handler for `tag`, making the tag transparent.
    pub fn unregister(&mut self, tag: &str) -> Option<Arc<dyn TagHandler>> {
        self.0.remove(tag)
    }

    /// Looks up the handler for `tag`.
    pub fn get(&self, tag: &str) -> Option<&dyn TagHandler> {
        self.0.get(tag).map(|handler| &**handler)
    }

    /// Looks up the handler for `tag` as a shared handle.
    ///
    /// Useful for wrapping a registered handler and registering the wrapper in its place.
    pub fn get_shared(&self, tag: &str) -> Option<Arc<dyn TagHandler>> {
        self.0.get(tag).cloned()
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no tag is registered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the registered tag names, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
