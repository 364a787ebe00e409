// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec;

use super::utils::{annotations, document, of_category, render, tag};
use crate::style::{Color, FontStyle, FontWeight, TextAlignment, VerticalAlign};
use crate::{Annotation, Category, Config, Element, Node, ResolvedFont};

fn family_font(family: crate::style::FontFamily, weight: FontWeight) -> Annotation {
    Annotation::Font(ResolvedFont {
        family,
        weight,
        style: FontStyle::Normal,
    })
}

#[test]
fn paragraph_alignment_and_breaks() {
    let tree: Node = Element::new("p")
        .with_attribute("align", "center")
        .with_text("x")
        .into();
    let text = render(&tree);
    assert_eq!(text.as_str(), "x\n\n");
    assert_eq!(
        annotations(&text),
        vec![(0..3, Annotation::Alignment(TextAlignment::Center))]
    );
}

#[test]
fn div_with_unknown_alignment_is_unaligned() {
    let tree: Node = Element::new("div")
        .with_attribute("align", "justify")
        .with_text("x")
        .into();
    let text = render(&tree);
    assert_eq!(text.as_str(), "x\n\n");
    assert!(of_category(&text, Category::Alignment).is_empty());
}

#[test]
fn span_reads_inline_style() {
    let tree: Node = Element::new("span")
        .with_attribute("style", "color: #00ff00; font-weight: bold")
        .with_text("x")
        .into();
    let text = render(&tree);
    assert_eq!(
        annotations(&text),
        vec![
            (
                0..1,
                family_font(Config::default().default_font, FontWeight::Bold)
            ),
            (0..1, Annotation::Color(Color::from_rgb(0, 0xff, 0))),
        ]
    );
}

#[test]
fn font_tag() {
    let tree: Node = Element::new("font")
        .with_attribute("face", "serif")
        .with_attribute("color", "blue")
        .with_text("x")
        .into();
    let text = render(&tree);
    assert_eq!(
        annotations(&text),
        vec![
            (
                0..1,
                family_font(Config::default().serif_font, FontWeight::Normal)
            ),
            (0..1, Annotation::Color(Color::from_rgb(0, 0, 0xff))),
        ]
    );
}

#[test]
fn malformed_font_size_is_neutral() {
    let tree: Node = Element::new("font")
        .with_attribute("size", "xl")
        .with_text("x")
        .into();
    let text = render(&tree);
    assert_eq!(text.as_str(), "x");
    assert_eq!(
        annotations(&text),
        vec![(0..1, Annotation::RelativeSize(1.0))]
    );
}

#[test]
fn code_uses_monospace() {
    let text = render(&document([Node::text("run"), tag("code", "ls")]));
    assert_eq!(text.as_str(), "run ls");
    assert_eq!(
        annotations(&text),
        vec![(
            3..6,
            family_font(Config::default().monospace_font, FontWeight::Normal)
        )]
    );
}

#[test]
fn pre_is_verbatim() {
    let pre = Element::new("pre")
        .with_text("let  a;")
        .with_child(Element::new("br"))
        .with_child(tag("b", " b "));
    let text = render(&document([Node::text("x"), pre.into(), Node::text("y")]));
    assert_eq!(text.as_str(), "x\nlet  a;\n b \ny");
    // Markup inside `pre` adds no style of its own.
    assert_eq!(
        annotations(&text),
        vec![(
            2..14,
            family_font(Config::default().monospace_font, FontWeight::Normal)
        )]
    );
}

#[test]
fn ordered_list_numbers_from_start() {
    let list = Element::new("ol")
        .with_attribute("start", "3")
        .with_child(tag("li", "a"))
        .with_child(tag("li", "b"));
    let text = render(&document([list.into()]));
    assert_eq!(text.as_str(), "3. a\n4. b\n");
    assert_eq!(
        annotations(&text),
        vec![(0..10, Annotation::Indent(1.0))]
    );
}

#[test]
fn nested_lists_indent_further() {
    let inner = Element::new("ul").with_child(tag("li", "b"));
    let outer = Element::new("ul").with_child(Element::new("li").with_text("a").with_child(inner));
    let text = render(&outer.into());
    assert_eq!(text.as_str(), "\u{2022} a\n\u{2022} b\n");
    assert_eq!(
        annotations(&text),
        vec![
            (0..6, Annotation::Indent(1.0)),
            (6..12, Annotation::Indent(2.0)),
        ]
    );
}

#[test]
fn list_items_outside_ol_get_bullets() {
    let text = render(&document([tag("li", "loose")]));
    assert_eq!(text.as_str(), "\u{2022} loose\n");
}

#[test]
fn links_and_images() {
    let tree = document([
        Element::new("a")
            .with_attribute("href", "https://example.com")
            .with_text("go")
            .into(),
        Node::text("now"),
        Element::new("img").with_attribute("src", "cat.png").into(),
        Element::new("img").with_attribute("alt", "no source").into(),
    ]);
    let text = render(&tree);
    assert_eq!(text.as_str(), "go now\u{FFFC}");
    assert_eq!(
        annotations(&text),
        vec![
            (0..2, Annotation::Link(Arc::from("https://example.com"))),
            (6..9, Annotation::Image(Arc::from("cat.png"))),
        ]
    );
}

#[test]
fn subscript_and_superscript() {
    let text = render(&document([
        Node::text("H"),
        tag("sub", "2"),
        Node::text("O"),
        tag("sup", "n"),
    ]));
    assert_eq!(text.as_str(), "H 2 O n");
    assert_eq!(
        annotations(&text),
        vec![
            (1..3, Annotation::RelativeSize(0.8)),
            (5..7, Annotation::RelativeSize(0.8)),
            (1..3, Annotation::VerticalAlign(VerticalAlign::Sub)),
            (5..7, Annotation::VerticalAlign(VerticalAlign::Super)),
        ]
    );
}

#[test]
fn blockquote_is_an_indented_block() {
    let text = render(&document([Node::text("said"), tag("blockquote", "quote")]));
    assert_eq!(text.as_str(), "said\nquote\n");
    assert_eq!(
        annotations(&text),
        vec![(5..11, Annotation::Indent(1.0))]
    );
}

#[test]
fn font_tag_accepts_any_css_color() {
    let tree = document([
        Element::new("font")
            .with_attribute("color", "orange")
            .with_text("warm")
            .into(),
        Element::new("font")
            .with_attribute("color", "hsl(120, 100%, 50%)")
            .with_text("green")
            .into(),
    ]);
    let text = render(&tree);
    assert_eq!(
        of_category(&text, Category::Color),
        vec![
            (0..4, Annotation::Color(Color::from_rgb(0xff, 0xa5, 0))),
            (4..10, Annotation::Color(Color::from_rgb(0, 0xff, 0))),
        ]
    );
}
