// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use annotated_text::AnnotatedText;

use crate::cleaner::Cleaner;
use crate::commit::Annotation;
use crate::handler::{HandlerTable, RenderContext, TagHandler};
use crate::node::{Element, Node};
use crate::stack::SpanStack;
use crate::text::TextBuffer;
use crate::{Config, Error};

/// Turns cleaned HTML trees into annotated text.
///
/// Rendering only needs `&self`, so a configured converter can be shared between threads.
/// Registration needs `&mut self` and therefore cannot overlap a conversion.
#[derive(Clone, Debug)]
pub struct Converter {
    config: Config,
    handlers: HandlerTable,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Converter {
    /// Creates a converter with the built-in handlers.
    pub fn new(config: Config) -> Self {
        Self::with_handlers(config, HandlerTable::with_builtins())
    }

    /// Creates a converter with a custom handler table.
    pub fn with_handlers(config: Config, handlers: HandlerTable) -> Self {
        Self { config, handlers }
    }

    /// The conversion options.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The handler table.
    pub fn handlers(&self) -> &HandlerTable {
        &self.handlers
    }

    /// Mutable access to the handler table.
    pub fn handlers_mut(&mut self) -> &mut HandlerTable {
        &mut self.handlers
    }

    /// Registers `handler` for `tag`, replacing any earlier handler for it.
    pub fn register_handler<H: TagHandler + 'static>(&mut self, tag: &str, handler: H) {
        if self.handlers.register(tag, handler).is_some() {
            log::debug!("replaced handler for <{tag}>");
        }
    }

    /// Removes the handler for `tag`; the tag becomes transparent.
    pub fn unregister_handler(&mut self, tag: &str) {
        self.handlers.unregister(tag);
    }

    /// Looks up the handler for `tag`.
    pub fn handler_for(&self, tag: &str) -> Option<&dyn TagHandler> {
        self.handlers.get(tag)
    }

    /// Looks up the handler for `tag` as a shared handle, for wrapping.
    pub fn shared_handler_for(&self, tag: &str) -> Option<Arc<dyn TagHandler>> {
        self.handlers.get_shared(tag)
    }

    /// Renders a cleaned tree.
    ///
    /// The same tree always yields the same result.
    pub fn render(&self, root: &Node) -> AnnotatedText<Annotation> {
        let mut walk = Walk {
            handlers: &self.handlers,
            config: &self.config,
            buffer: TextBuffer::new(self.config.strip_extra_whitespace),
            stack: SpanStack::new(),
        };
        walk.visit(root, None);
        let Walk { buffer, stack, .. } = walk;
        log::trace!("committing {} stack entries", stack.len());
        stack.commit(buffer.into_string(), &self.config)
    }

    /// Cleans `markup` with `cleaner` and renders the result.
    pub fn convert<C: Cleaner + ?Sized>(
        &self,
        markup: &str,
        cleaner: &C,
    ) -> Result<AnnotatedText<Annotation>, Error> {
        let root = cleaner.clean(markup)?;
        Ok(self.render(&root))
    }

    /// Reads all of `reader`, then cleans and renders it.
    ///
    /// Nothing is rendered if reading fails.
    #[cfg(feature = "std")]
    pub fn convert_reader<R: std::io::Read, C: Cleaner + ?Sized>(
        &self,
        mut reader: R,
        cleaner: &C,
    ) -> Result<AnnotatedText<Annotation>, Error> {
        let mut markup = alloc::string::String::new();
        reader.read_to_string(&mut markup)?;
        self.convert(&markup, cleaner)
    }
}

struct Walk<'a> {
    handlers: &'a HandlerTable,
    config: &'a Config,
    buffer: TextBuffer,
    stack: SpanStack,
}

impl Walk<'_> {
    fn visit(&mut self, node: &Node, parent: Option<&Element>) {
        match node {
            Node::Text(text) => self.buffer.push_text_run(text),
            Node::Element(element) => self.visit_element(element, parent),
        }
    }

    fn visit_element(&mut self, element: &Element, parent: Option<&Element>) {
        let handlers = self.handlers;
        let handler = handlers.get(element.name());
        if let Some(handler) = handler {
            handler.before_children(element, &mut self.context(parent));
        }
        let start = self.buffer.len();
        if handler.is_none_or(|handler| !handler.renders_content()) {
            for child in element.children() {
                self.visit(child, Some(element));
            }
        }
        let end = self.buffer.len();
        if let Some(handler) = handler {
            handler.handle(element, &mut self.context(parent), start..end);
        }
    }

    fn context<'b>(&'b mut self, parent: Option<&'b Element>) -> RenderContext<'b> {
        RenderContext {
            buffer: &mut self.buffer,
            stack: &mut self.stack,
            config: self.config,
            parent,
        }
    }
}
