// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::fmt;

/// The platform font a family falls back to when its name is not installed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GenericFamily {
    /// The system user interface font.
    #[default]
    SystemUi,
    /// A serif face.
    Serif,
    /// A sans-serif face.
    SansSerif,
    /// A fixed-pitch face.
    Monospace,
}

/// A logical font family: a name plus the generic handle used to realize it.
///
/// Cloning is cheap; the name is reference counted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontFamily {
    name: Arc<str>,
    generic: GenericFamily,
}

impl FontFamily {
    /// Creates a family named `name` backed by `generic`.
    pub fn new(name: impl Into<Arc<str>>, generic: GenericFamily) -> Self {
        Self {
            name: name.into(),
            generic,
        }
    }

    /// The family name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The generic handle.
    pub fn generic(&self) -> GenericFamily {
        self.generic
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One entry of a comma separated family list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FamilyName<'a> {
    /// A quoted name; never a generic keyword.
    Quoted(&'a str),
    /// A bare name, which may be a generic keyword.
    Bare(&'a str),
}

impl<'a> FamilyName<'a> {
    /// The name without quotes or surrounding whitespace.
    pub fn name(self) -> &'a str {
        match self {
            Self::Quoted(name) | Self::Bare(name) => name,
        }
    }

    /// Parses a `font-family` style list.
    ///
    /// Quoted names run to the matching quote, or to the end of input if it is missing, and may
    /// contain commas.
    ///
    /// ```
    /// use html_spans::style::FamilyName;
    ///
    /// let names: Vec<_> = FamilyName::parse_list("'Foo, Bar', serif").collect();
    /// assert_eq!(names, [FamilyName::Quoted("Foo, Bar"), FamilyName::Bare("serif")]);
    /// ```
    pub fn parse_list(source: &'a str) -> impl Iterator<Item = FamilyName<'a>> + Clone + 'a {
        FamilyList { source, pos: 0 }
    }
}

#[derive(Clone)]
struct FamilyList<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Iterator for FamilyList<'a> {
    type Item = FamilyName<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.source.as_bytes();
        let mut pos = self.pos;
        while pos < bytes.len() && (bytes[pos].is_ascii_whitespace() || bytes[pos] == b',') {
            pos += 1;
        }
        if pos >= bytes.len() {
            self.pos = pos;
            return None;
        }
        let first = bytes[pos];
        if first == b'"' || first == b'\'' {
            let start = pos + 1;
            let end = bytes[start..]
                .iter()
                .position(|&ch| ch == first)
                .map_or(bytes.len(), |offset| start + offset);
            self.pos = (end + 1).min(bytes.len());
            return Some(FamilyName::Quoted(self.source.get(start..end)?.trim()));
        }
        let end = bytes[pos..]
            .iter()
            .position(|&ch| ch == b',')
            .map_or(bytes.len(), |offset| pos + offset);
        self.pos = (end + 1).min(bytes.len());
        Some(FamilyName::Bare(self.source.get(pos..end)?.trim()))
    }
}
