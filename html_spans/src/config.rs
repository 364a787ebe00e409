// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::style::{FamilyName, FontFamily, GenericFamily};

/// Conversion options.
///
/// A `Config` is fixed for the lifetime of a [`Converter`](crate::Converter); build it up front
/// and hand it over.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Family used wherever a font annotation is needed and no tag chose a family.
    pub default_font: FontFamily,
    /// Family that `serif` resolves to.
    pub serif_font: FontFamily,
    /// Family that `sans-serif` resolves to.
    pub sans_serif_font: FontFamily,
    /// Family that `monospace` resolves to, also used by `tt`, `code` and `pre`.
    pub monospace_font: FontFamily,
    /// Drop whitespace-only text and cap handler line breaks at two in a row.
    pub strip_extra_whitespace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_font: FontFamily::new("default", GenericFamily::SystemUi),
            serif_font: FontFamily::new("serif", GenericFamily::Serif),
            sans_serif_font: FontFamily::new("sans-serif", GenericFamily::SansSerif),
            monospace_font: FontFamily::new("monospace", GenericFamily::Monospace),
            strip_extra_whitespace: false,
        }
    }
}

impl Config {
    /// Sets the default family.
    pub fn with_default_font(mut self, family: FontFamily) -> Self {
        self.default_font = family;
        self
    }

    /// Sets the family that `serif` resolves to.
    pub fn with_serif_font(mut self, family: FontFamily) -> Self {
        self.serif_font = family;
        self
    }

    /// Sets the family that `sans-serif` resolves to.
    pub fn with_sans_serif_font(mut self, family: FontFamily) -> Self {
        self.sans_serif_font = family;
        self
    }

    /// Sets the family that `monospace` resolves to.
    pub fn with_monospace_font(mut self, family: FontFamily) -> Self {
        self.monospace_font = family;
        self
    }

    /// Enables or disables whitespace stripping.
    pub fn with_strip_extra_whitespace(mut self, strip: bool) -> Self {
        self.strip_extra_whitespace = strip;
        self
    }

    /// Resolves a `font-family` list or `<font face>` value to a family.
    ///
    /// Only the first non-empty entry is considered. Bare generic keywords map to the configured
    /// aliases; any other name, quoted keywords included, becomes a family of that name backed by
    /// the default family's generic handle.
    pub fn font(&self, families: &str) -> FontFamily {
        let first = FamilyName::parse_list(families).find(|family| !family.name().is_empty());
        let name = match first {
            None => return self.default_font.clone(),
            Some(FamilyName::Quoted(name)) => name,
            Some(FamilyName::Bare(name)) => {
                if name.eq_ignore_ascii_case("serif") {
                    return self.serif_font.clone();
                } else if name.eq_ignore_ascii_case("sans-serif") {
                    return self.sans_serif_font.clone();
                } else if name.eq_ignore_ascii_case("monospace") {
                    return self.monospace_font.clone();
                } else if name.eq_ignore_ascii_case("default") {
                    return self.default_font.clone();
                }
                name
            }
        };
        FontFamily::new(name, self.default_font.generic())
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::style::GenericFamily;

    #[test]
    fn quoted_names_keep_commas() {
        let config = Config::default();
        let family = config.font("'Foo, Bar', serif");
        assert_eq!(family.name(), "Foo, Bar");
        assert_eq!(family.generic(), GenericFamily::SystemUi);
        assert_eq!(config.font("\"Unclosed, Name").name(), "Unclosed, Name");
    }

    #[test]
    fn only_bare_keywords_are_aliases() {
        let config = Config::default();
        assert_eq!(config.font(" , Monospace, serif"), config.monospace_font);
        let quoted = config.font("'monospace'");
        assert_eq!(quoted.name(), "monospace");
        assert_eq!(quoted.generic(), GenericFamily::SystemUi);
        assert_eq!(config.font("'', serif"), config.serif_font);
        assert_eq!(config.font(" ,, "), config.default_font);
    }
}
