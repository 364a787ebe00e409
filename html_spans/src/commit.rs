// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of the style stack into concrete annotations.
//!
//! Each category keeps its own list of contiguous, non-overlapping segments covering the text.
//! Entries are applied in stack order. Applying an entry splits the segments at the entry's
//! endpoints and then combines the entry's value into every segment inside its range, using the
//! rule of that category. Because descendants come first, "keep what is already there" is how a
//! child value beats its ancestors.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use annotated_text::Categorized;

use crate::stack::{Intent, StackEntry};
use crate::style::{
    Color, FontFamily, FontStyle, FontWeight, Style, TextAlignment, VerticalAlign,
};
use crate::Config;

/// The dimension an [`Annotation`] describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Family, weight and slant together.
    Font,
    /// Relative size multiplier.
    RelativeSize,
    /// Absolute size in pixels.
    AbsoluteSize,
    /// Foreground color.
    Color,
    /// Background color.
    BackgroundColor,
    /// Paragraph alignment.
    Alignment,
    /// Sub- or superscript.
    VerticalAlign,
    /// Leading indent.
    Indent,
    /// Paragraph spacing marker.
    MarginBottom,
    /// Hyperlink.
    Link,
    /// Image placeholder.
    Image,
}

/// A fully resolved font choice.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedFont {
    /// The family.
    pub family: FontFamily,
    /// The weight.
    pub weight: FontWeight,
    /// The slant.
    pub style: FontStyle,
}

impl ResolvedFont {
    /// Returns `true` for bold weight.
    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }

    /// Returns `true` for italic slant.
    pub fn is_italic(&self) -> bool {
        self.style == FontStyle::Italic
    }
}

/// A concrete style annotation on a range of the output text.
#[derive(Clone, Debug, PartialEq)]
pub enum Annotation {
    /// Font family, weight and slant.
    Font(ResolvedFont),
    /// Size relative to the base size.
    RelativeSize(f32),
    /// Size in pixels.
    AbsoluteSize(f32),
    /// Foreground color.
    Color(Color),
    /// Background color.
    BackgroundColor(Color),
    /// Paragraph alignment.
    Alignment(TextAlignment),
    /// Sub- or superscript.
    VerticalAlign(VerticalAlign),
    /// Leading indent, in em-like units.
    Indent(f32),
    /// Space after the paragraph, as a multiple of the line height.
    ///
    /// Always covers exactly one character: the last one of the tag that asked for it.
    MarginBottom(f32),
    /// Hyperlink target.
    Link(Arc<str>),
    /// Image source.
    Image(Arc<str>),
}

impl Categorized for Annotation {
    type Category = Category;

    fn category(&self) -> Category {
        match self {
            Self::Font(_) => Category::Font,
            Self::RelativeSize(_) => Category::RelativeSize,
            Self::AbsoluteSize(_) => Category::AbsoluteSize,
            Self::Color(_) => Category::Color,
            Self::BackgroundColor(_) => Category::BackgroundColor,
            Self::Alignment(_) => Category::Alignment,
            Self::VerticalAlign(_) => Category::VerticalAlign,
            Self::Indent(_) => Category::Indent,
            Self::MarginBottom(_) => Category::MarginBottom,
            Self::Link(_) => Category::Link,
            Self::Image(_) => Category::Image,
        }
    }
}

/// Font attributes gathered so far for one segment; unset parts are still open to ancestors.
#[derive(Clone, Debug, Default, PartialEq)]
struct PartialFont {
    family: Option<FontFamily>,
    weight: Option<FontWeight>,
    style: Option<FontStyle>,
}

impl PartialFont {
    fn fill_from(&mut self, style: &Style) {
        if self.family.is_none() {
            self.family.clone_from(&style.font_family);
        }
        self.weight = self.weight.or(style.font_weight);
        self.style = self.style.or(style.font_style);
    }

    fn finish(self, default_family: &FontFamily) -> ResolvedFont {
        ResolvedFont {
            family: self.family.unwrap_or_else(|| default_family.clone()),
            weight: self.weight.unwrap_or_default(),
            style: self.style.unwrap_or_default(),
        }
    }
}

/// Contiguous segments covering `0..len`, each holding an optional value.
#[derive(Debug)]
struct Segments<T> {
    runs: Vec<(Range<usize>, Option<T>)>,
}

impl<T: Clone> Segments<T> {
    fn new(len: usize) -> Self {
        let mut runs = Vec::new();
        if len > 0 {
            runs.push((0..len, None));
        }
        Self { runs }
    }

    /// Makes `at` a segment boundary.
    fn split_at(&mut self, at: usize) {
        let index = self.runs.partition_point(|(range, _)| range.end <= at);
        let Some((range, value)) = self.runs.get(index) else {
            return;
        };
        if range.start < at {
            let tail = (at..range.end, value.clone());
            self.runs[index].0.end = at;
            self.runs.insert(index + 1, tail);
        }
    }

    /// Calls `combine` on every segment slot inside `range`.
    fn update(&mut self, range: Range<usize>, mut combine: impl FnMut(&mut Option<T>)) {
        if range.is_empty() {
            return;
        }
        self.split_at(range.start);
        self.split_at(range.end);
        let first = self.runs.partition_point(|(run, _)| run.end <= range.start);
        for (run, slot) in &mut self.runs[first..] {
            if run.start >= range.end {
                break;
            }
            combine(slot);
        }
    }

    /// The set segments, in order.
    fn into_set(self) -> impl Iterator<Item = (Range<usize>, T)> {
        self.runs
            .into_iter()
            .filter_map(|(range, value)| Some((range, value?)))
    }
}

/// Merges adjacent runs holding equal values.
fn coalesce<T: PartialEq>(runs: impl Iterator<Item = (Range<usize>, T)>) -> Vec<(Range<usize>, T)> {
    let mut out: Vec<(Range<usize>, T)> = Vec::new();
    for (range, value) in runs {
        match out.last_mut() {
            Some((last_range, last_value)) if last_range.end == range.start && *last_value == value => {
                last_range.end = range.end;
            }
            _ => out.push((range, value)),
        }
    }
    out
}

fn keep_deepest<T>(slot: &mut Option<T>, value: T) {
    if slot.is_none() {
        *slot = Some(value);
    }
}

struct Resolver<'a> {
    text: &'a str,
    font: Segments<PartialFont>,
    relative_size: Segments<f32>,
    absolute_size: Segments<f32>,
    color: Segments<Color>,
    background_color: Segments<Color>,
    alignment: Segments<TextAlignment>,
    vertical_align: Segments<VerticalAlign>,
    indent: Segments<f32>,
    margin_bottom: Segments<f32>,
    link: Segments<Arc<str>>,
    image: Segments<Arc<str>>,
}

impl<'a> Resolver<'a> {
    fn new(text: &'a str) -> Self {
        let len = text.len();
        Self {
            text,
            font: Segments::new(len),
            relative_size: Segments::new(len),
            absolute_size: Segments::new(len),
            color: Segments::new(len),
            background_color: Segments::new(len),
            alignment: Segments::new(len),
            vertical_align: Segments::new(len),
            indent: Segments::new(len),
            margin_bottom: Segments::new(len),
            link: Segments::new(len),
            image: Segments::new(len),
        }
    }

    fn is_valid(&self, range: &Range<usize>) -> bool {
        range.start <= range.end
            && range.end <= self.text.len()
            && self.text.is_char_boundary(range.start)
            && self.text.is_char_boundary(range.end)
    }

    fn apply(&mut self, entry: &StackEntry) {
        let range = entry.range.clone();
        if !self.is_valid(&range) {
            log::warn!(
                "skipping stack entry with invalid range {}..{} (text length {})",
                range.start,
                range.end,
                self.text.len()
            );
            return;
        }
        match &entry.intent {
            Intent::Style(style) => self.apply_style(range, style),
            Intent::Link(url) => self.link.update(range, |slot| keep_deepest(slot, url.clone())),
            Intent::Image(src) => self.image.update(range, |slot| keep_deepest(slot, src.clone())),
        }
    }

    fn apply_style(&mut self, range: Range<usize>, style: &Style) {
        log::trace!("committing {style:?} on {}..{}", range.start, range.end);
        if style.has_font() {
            self.font.update(range.clone(), |slot| {
                slot.get_or_insert_with(PartialFont::default).fill_from(style);
            });
        }
        if let Some(factor) = style.relative_font_size {
            // Nested relative sizes compound.
            self.relative_size
                .update(range.clone(), |slot| *slot = Some(slot.unwrap_or(1.0) * factor));
        }
        if let Some(px) = style.absolute_font_size {
            self.absolute_size.update(range.clone(), |slot| keep_deepest(slot, px));
        }
        if let Some(color) = style.color {
            self.color.update(range.clone(), |slot| keep_deepest(slot, color));
        }
        if let Some(color) = style.background_color {
            self.background_color
                .update(range.clone(), |slot| keep_deepest(slot, color));
        }
        if let Some(alignment) = style.text_alignment {
            self.alignment.update(range.clone(), |slot| keep_deepest(slot, alignment));
        }
        if let Some(align) = style.vertical_align {
            self.vertical_align.update(range.clone(), |slot| keep_deepest(slot, align));
        }
        if let Some(em) = style.relative_margin_left {
            // Nested indents add up.
            self.indent
                .update(range.clone(), |slot| *slot = Some(slot.unwrap_or(0.0) + em));
        }
        if let Some(factor) = style.relative_margin_bottom {
            if let Some(marker) = last_char_range(self.text, range.end) {
                self.margin_bottom.update(marker, |slot| {
                    *slot = Some(slot.map_or(factor, |current: f32| current.max(factor)));
                });
            }
        }
    }

    fn finish(self, default_family: &FontFamily) -> Vec<(Range<usize>, Annotation)> {
        let mut out = Vec::new();
        let fonts = self
            .font
            .into_set()
            .map(|(range, partial)| (range, partial.finish(default_family)));
        extend(&mut out, fonts, Annotation::Font);
        extend(&mut out, self.relative_size.into_set(), Annotation::RelativeSize);
        extend(&mut out, self.absolute_size.into_set(), Annotation::AbsoluteSize);
        extend(&mut out, self.color.into_set(), Annotation::Color);
        extend(&mut out, self.background_color.into_set(), Annotation::BackgroundColor);
        extend(&mut out, self.alignment.into_set(), Annotation::Alignment);
        extend(&mut out, self.vertical_align.into_set(), Annotation::VerticalAlign);
        extend(&mut out, self.indent.into_set(), Annotation::Indent);
        extend(&mut out, self.margin_bottom.into_set(), Annotation::MarginBottom);
        extend(&mut out, self.link.into_set(), Annotation::Link);
        extend(&mut out, self.image.into_set(), Annotation::Image);
        out
    }
}

fn extend<T: PartialEq>(
    out: &mut Vec<(Range<usize>, Annotation)>,
    runs: impl Iterator<Item = (Range<usize>, T)>,
    wrap: impl Fn(T) -> Annotation,
) {
    out.extend(
        coalesce(runs)
            .into_iter()
            .map(|(range, value)| (range, wrap(value))),
    );
}

/// The range of the last character that ends at or before `end`.
fn last_char_range(text: &str, end: usize) -> Option<Range<usize>> {
    let (start, _) = text[..end].char_indices().next_back()?;
    Some(start..end)
}

/// Resolves stack entries against the finished `text`.
///
/// This is a pure function of its inputs. The output is ordered by category and then by offset,
/// ranges within one category never overlap, and adjacent equal values are merged.
pub fn resolve(
    entries: &[StackEntry],
    text: &str,
    config: &Config,
) -> Vec<(Range<usize>, Annotation)> {
    let mut resolver = Resolver::new(text);
    for entry in entries {
        resolver.apply(entry);
    }
    resolver.finish(&config.default_font)
}
