// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A reader for the small CSS declaration subset found in `style` attributes.

use super::{Color, Display, FontStyle, FontWeight, Style, TextAlignment, VerticalAlign};
use crate::Config;

/// Maps a legacy `<font size>` level to a relative size multiplier.
///
/// Levels 1 through 7 map to 0.6 through 1.8 in steps of 0.2; any other level maps to 1.0.
pub fn translate_font_size(level: i32) -> f32 {
    match level {
        1 => 0.6,
        2 => 0.8,
        3 => 1.0,
        4 => 1.2,
        5 => 1.4,
        6 => 1.6,
        7 => 1.8,
        _ => 1.0,
    }
}

/// Parses a legacy size level and translates it with [`translate_font_size`].
///
/// Unparseable values fall back to 1.0.
pub fn parse_font_size_level(value: &str) -> f32 {
    match value.trim().parse::<i32>() {
        Ok(level) => translate_font_size(level),
        Err(_) => {
            log::debug!("ignoring malformed font size level {value:?}");
            1.0
        }
    }
}

/// Parses a `style` attribute into a [`Style`].
///
/// Unknown properties and values that cannot be parsed are skipped. When a property repeats, the
/// last declaration wins.
pub fn parse_inline_style(declarations: &str, config: &Config) -> Style {
    let mut style = Style::new();
    for declaration in declarations.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim();
        let value = value.trim();
        let value = value
            .strip_suffix("!important")
            .map_or(value, str::trim_end);
        if value.is_empty() {
            continue;
        }
        apply_declaration(&mut style, property, value, config);
    }
    style
}

fn apply_declaration(style: &mut Style, property: &str, value: &str, config: &Config) {
    let property = property.to_ascii_lowercase();
    match property.as_str() {
        "font-weight" => {
            if let Some(weight) = parse_font_weight(value) {
                style.font_weight = Some(weight);
            }
        }
        "font-style" => {
            if value.eq_ignore_ascii_case("italic") || value.eq_ignore_ascii_case("oblique") {
                style.font_style = Some(FontStyle::Italic);
            } else if value.eq_ignore_ascii_case("normal") {
                style.font_style = Some(FontStyle::Normal);
            }
        }
        "font-family" => style.font_family = Some(config.font(value)),
        "font-size" => match parse_length(value) {
            Some(Length::Em(em)) => style.relative_font_size = Some(em),
            Some(Length::Percent(pct)) => style.relative_font_size = Some(pct / 100.0),
            Some(Length::Px(px)) => style.absolute_font_size = Some(px),
            Some(Length::Pt(pt)) => style.absolute_font_size = Some(pt * 4.0 / 3.0),
            None => log::debug!("ignoring font-size {value:?}"),
        },
        "color" => {
            if let Some(color) = Color::parse(value) {
                style.color = Some(color);
            }
        }
        "background-color" => {
            if let Some(color) = Color::parse(value) {
                style.background_color = Some(color);
            }
        }
        "text-align" => {
            if let Some(alignment) = TextAlignment::parse(value) {
                style.text_alignment = Some(alignment);
            }
        }
        "display" => {
            if value.eq_ignore_ascii_case("block") {
                style.display = Some(Display::Block);
            } else if value.eq_ignore_ascii_case("inline") {
                style.display = Some(Display::Inline);
            }
        }
        "margin-bottom" => {
            if let Some(Length::Em(em)) = parse_length(value) {
                style.relative_margin_bottom = Some(em);
            }
        }
        "margin-left" => {
            if let Some(Length::Em(em)) = parse_length(value) {
                style.relative_margin_left = Some(em);
            }
        }
        "vertical-align" => {
            if value.eq_ignore_ascii_case("sub") {
                style.vertical_align = Some(VerticalAlign::Sub);
            } else if value.eq_ignore_ascii_case("super") {
                style.vertical_align = Some(VerticalAlign::Super);
            }
        }
        _ => log::trace!("unsupported style property {property:?}"),
    }
}

fn parse_font_weight(value: &str) -> Option<FontWeight> {
    if value.eq_ignore_ascii_case("bold") || value.eq_ignore_ascii_case("bolder") {
        return Some(FontWeight::Bold);
    }
    if value.eq_ignore_ascii_case("normal") || value.eq_ignore_ascii_case("lighter") {
        return Some(FontWeight::Normal);
    }
    let numeric: u16 = value.parse().ok()?;
    Some(if numeric >= 600 {
        FontWeight::Bold
    } else {
        FontWeight::Normal
    })
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Length {
    Em(f32),
    Percent(f32),
    Px(f32),
    Pt(f32),
}

fn parse_length(value: &str) -> Option<Length> {
    let split = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    let number: f32 = number.parse().ok()?;
    if !number.is_finite() || number < 0.0 {
        return None;
    }
    let unit = unit.trim();
    if unit.eq_ignore_ascii_case("em") {
        Some(Length::Em(number))
    } else if unit == "%" {
        Some(Length::Percent(number))
    } else if unit.eq_ignore_ascii_case("px") {
        Some(Length::Px(number))
    } else if unit.eq_ignore_ascii_case("pt") {
        Some(Length::Pt(number))
    } else {
        None
    }
}
