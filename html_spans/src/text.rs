// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// The text being assembled during a conversion.
///
/// The buffer only grows at the tail, so a byte offset recorded at any point during the walk
/// stays valid against the finished text.
#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    text: String,
    strip_extra_whitespace: bool,
}

impl TextBuffer {
    pub(crate) fn new(strip_extra_whitespace: bool) -> Self {
        Self {
            text: String::new(),
            strip_extra_whitespace,
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The last character written, if any.
    pub fn last_char(&self) -> Option<char> {
        self.text.chars().next_back()
    }

    /// Appends `text` verbatim.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Appends the content of a text node.
    ///
    /// Whitespace runs collapse to one space and the ends are trimmed. A single separating space
    /// goes in front unless the buffer is empty or already ends in whitespace.
    pub fn push_text_run(&mut self, raw: &str) {
        let collapsed = collapse_whitespace(raw);
        if collapsed.is_empty() && self.strip_extra_whitespace {
            return;
        }
        if self.last_char().is_some_and(|last| !last.is_whitespace()) {
            self.text.push(' ');
        }
        self.text.push_str(&collapsed);
    }

    /// Appends a newline unless the buffer is empty or already ends in one.
    pub fn ensure_newline(&mut self) {
        if self.last_char().is_some_and(|last| last != '\n') {
            self.text.push('\n');
        }
    }

    /// Appends a newline, returning whether one was written.
    ///
    /// With whitespace stripping enabled this never produces more than two newlines in a row.
    pub fn push_newline(&mut self) -> bool {
        if self.strip_extra_whitespace && self.text.ends_with("\n\n") {
            return false;
        }
        self.text.push('\n');
        true
    }

    pub(crate) fn into_string(self) -> String {
        self.text
    }
}

/// Collapses runs of ASCII whitespace into one space and trims both ends.
pub(crate) fn collapse_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_ascii_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{collapse_whitespace, TextBuffer};

    #[test]
    fn collapses_and_trims() {
        assert_eq!(collapse_whitespace("  a \n\t b  c "), "a b c");
        assert_eq!(collapse_whitespace(" \n "), "");
        // Non-breaking spaces are content, not layout whitespace.
        assert_eq!(collapse_whitespace("a\u{a0} b"), "a\u{a0} b");
    }

    #[test]
    fn separates_adjacent_runs_once() {
        let mut buffer = TextBuffer::new(false);
        buffer.push_text_run("Hello");
        buffer.push_text_run("world");
        assert_eq!(buffer.as_str(), "Hello world");

        buffer.push_str("\n");
        buffer.push_text_run("again");
        assert_eq!(buffer.as_str(), "Hello world\nagain");
    }

    #[test]
    fn whitespace_only_runs_depend_on_stripping() {
        let mut keep = TextBuffer::new(false);
        keep.push_text_run("a");
        keep.push_text_run("   ");
        keep.push_text_run("b");
        assert_eq!(keep.as_str(), "a b");

        let mut strip = TextBuffer::new(true);
        strip.push_text_run("a");
        strip.push_text_run("   ");
        assert_eq!(strip.as_str(), "a");
    }

    #[test]
    fn newlines() {
        let mut buffer = TextBuffer::new(false);
        buffer.ensure_newline();
        assert!(buffer.is_empty());
        buffer.push_str("x");
        buffer.ensure_newline();
        buffer.ensure_newline();
        assert_eq!(buffer.as_str(), "x\n");
        assert!(buffer.push_newline());
        assert!(buffer.push_newline());
        assert_eq!(buffer.as_str(), "x\n\n\n");

        let mut strip = TextBuffer::new(true);
        strip.push_str("x");
        assert!(strip.push_newline());
        assert!(strip.push_newline());
        assert!(!strip.push_newline());
        assert_eq!(strip.as_str(), "x\n\n");
    }
}
