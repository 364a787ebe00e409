// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed style vocabulary produced by tag handlers.
//!
//! A [`Style`] is a bag of optional attributes. An unset attribute means "inherit": it is filled
//! in from enclosing tags, or from the [`Config`](crate::Config) defaults, when the style stack is
//! committed.

mod color;
mod css;
mod font;


pub use color::{Color, ParseColorError};
pub use css::{parse_font_size_level, parse_inline_style, translate_font_size};
pub use font::{FamilyName, FontFamily, GenericFamily};

/// Font weight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

/// Font slant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Italic.
    Italic,
}

/// Horizontal alignment of a paragraph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Start of the line (the normal alignment).
    Left,
    /// Centered.
    Center,
    /// End of the line (the opposite alignment).
    Right,
}

impl TextAlignment {
    /// Parses an `align` attribute or `text-align` value.
    ///
    /// Anything other than `left`, `center` or `right` yields `None`, so no alignment is applied.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("left") {
            Some(Self::Left)
        } else if value.eq_ignore_ascii_case("center") {
            Some(Self::Center)
        } else if value.eq_ignore_ascii_case("right") {
            Some(Self::Right)
        } else {
            None
        }
    }
}

/// Whether content flows with surrounding text or sits on its own lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Display {
    /// Flows with the surrounding text.
    Inline,
    /// Starts and ends on a line of its own.
    Block,
}

/// Baseline shift for sub- and superscript.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    /// Lowered below the baseline.
    Sub,
    /// Raised above the baseline.
    Super,
}

/// A set of optional style attributes for one tag occurrence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Logical font family.
    pub font_family: Option<FontFamily>,
    /// Font weight.
    pub font_weight: Option<FontWeight>,
    /// Font slant.
    pub font_style: Option<FontStyle>,
    /// Font size as a multiple of the surrounding size.
    pub relative_font_size: Option<f32>,
    /// Font size in pixels.
    pub absolute_font_size: Option<f32>,
    /// Foreground color.
    pub color: Option<Color>,
    /// Background color.
    pub background_color: Option<Color>,
    /// Paragraph alignment.
    pub text_alignment: Option<TextAlignment>,
    /// Block or inline flow.
    ///
    /// This drives line breaking in handlers and is not itself turned into an annotation.
    pub display: Option<Display>,
    /// Space after the block, as a multiple of the line height.
    pub relative_margin_bottom: Option<f32>,
    /// Leading indent, in em-like units.
    pub relative_margin_left: Option<f32>,
    /// Baseline shift.
    pub vertical_align: Option<VerticalAlign>,
}

impl Style {
    /// Creates a style with every attribute unset.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `true` if any of family, weight or slant is set.
    pub fn has_font(&self) -> bool {
        self.font_family.is_some() || self.font_weight.is_some() || self.font_style.is_some()
    }

    /// Returns `true` if this style asks for block display.
    pub fn is_block(&self) -> bool {
        self.display == Some(Display::Block)
    }

    /// Combines `self` (the parent) with `child`.
    ///
    /// Every attribute the child sets wins; everything else comes from the parent. Family, weight
    /// and slant are merged independently.
    pub fn cascade(&self, child: &Self) -> Self {
        Self {
            font_family: child.font_family.clone().or_else(|| self.font_family.clone()),
            font_weight: child.font_weight.or(self.font_weight),
            font_style: child.font_style.or(self.font_style),
            relative_font_size: child.relative_font_size.or(self.relative_font_size),
            absolute_font_size: child.absolute_font_size.or(self.absolute_font_size),
            color: child.color.or(self.color),
            background_color: child.background_color.or(self.background_color),
            text_alignment: child.text_alignment.or(self.text_alignment),
            display: child.display.or(self.display),
            relative_margin_bottom: child.relative_margin_bottom.or(self.relative_margin_bottom),
            relative_margin_left: child.relative_margin_left.or(self.relative_margin_left),
            vertical_align: child.vertical_align.or(self.vertical_align),
        }
    }

    /// Sets the font family.
    #[inline]
    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = Some(family);
        self
    }

    /// Sets the font weight.
    #[inline]
    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Sets the font slant.
    #[inline]
    pub fn with_font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    /// Sets the relative font size.
    #[inline]
    pub fn with_relative_font_size(mut self, factor: f32) -> Self {
        self.relative_font_size = Some(factor);
        self
    }

    /// Sets the absolute font size in pixels.
    #[inline]
    pub fn with_absolute_font_size(mut self, px: f32) -> Self {
        self.absolute_font_size = Some(px);
        self
    }

    /// Sets the foreground color.
    #[inline]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the background color.
    #[inline]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets the paragraph alignment.
    #[inline]
    pub fn with_text_alignment(mut self, alignment: TextAlignment) -> Self {
        self.text_alignment = Some(alignment);
        self
    }

    /// Sets block or inline display.
    #[inline]
    pub fn with_display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    /// Sets the relative bottom margin.
    #[inline]
    pub fn with_relative_margin_bottom(mut self, factor: f32) -> Self {
        self.relative_margin_bottom = Some(factor);
        self
    }

    /// Sets the leading indent.
    #[inline]
    pub fn with_relative_margin_left(mut self, em: f32) -> Self {
        self.relative_margin_left = Some(em);
        self
    }

    /// Sets the baseline shift.
    #[inline]
    pub fn with_vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = Some(align);
        self
    }
}
