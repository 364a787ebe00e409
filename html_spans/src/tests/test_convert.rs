// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::utils::of_category;
use crate::style::{FontStyle, FontWeight};
use crate::{Annotation, Category, Converter, Error, MarkupError, Node};

#[test]
fn closures_are_cleaners() {
    let cleaner = |markup: &str| -> Result<Node, Error> { Ok(Node::text(markup)) };
    let text = Converter::default().convert("a \n b", &cleaner);
    assert!(matches!(text, Ok(text) if text.as_str() == "a b"));
}

#[test]
fn cleaner_errors_pass_through() {
    let cleaner =
        |_: &str| -> Result<Node, Error> { Err(MarkupError::new("unexpected token", 3).into()) };
    match Converter::default().convert("<<<", &cleaner) {
        Err(Error::Markup(err)) => {
            assert_eq!(err.offset(), 3);
            assert_eq!(err.message(), "unexpected token");
        }
        other => panic!("expected a markup error, got {other:?}"),
    }
}

#[cfg(feature = "std")]
mod xhtml {
    use alloc::vec;
    use alloc::vec::Vec;
    use std::io;

    use super::of_category;
    use crate::style::{FontStyle, FontWeight};
    use crate::{Annotation, Category, Converter, Error, XhtmlCleaner};

    #[test]
    fn converts_markup() {
        let converter = Converter::default();
        let text = converter
            .convert(
                "<p>Hello <b>world</b></p><h1>T&amp;C</h1><script>ignored()</script>",
                &XhtmlCleaner::new(),
            )
            .unwrap();
        assert_eq!(text.as_str(), "Hello world\n\nT&C\n");
        let fonts = of_category(&text, Category::Font);
        assert_eq!(fonts.len(), 2);
        assert_eq!(fonts[0].0, 5..11);
        assert_eq!(fonts[1].0, 13..17);
        assert!(fonts
            .iter()
            .all(|(_, font)| matches!(font, Annotation::Font(font) if font.is_bold())));
    }

    #[test]
    fn converts_from_reader() {
        let markup: &[u8] = b"<i>x</i>";
        let text = Converter::default()
            .convert_reader(markup, &XhtmlCleaner::new())
            .unwrap();
        assert_eq!(text.as_str(), "x");
        assert_eq!(
            of_category(&text, Category::Font)
                .iter()
                .map(|(range, annotation)| match annotation {
                    Annotation::Font(font) => (range.clone(), font.weight, font.style),
                    _ => unreachable!(),
                })
                .collect::<Vec<_>>(),
            vec![(0..1, FontWeight::Normal, FontStyle::Italic)]
        );
    }

    struct Broken;

    impl io::Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn read_failure_is_io_error() {
        let result = Converter::default().convert_reader(Broken, &XhtmlCleaner::new());
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let markup: &[u8] = b"<p>\xff</p>";
        let result = Converter::default().convert_reader(markup, &XhtmlCleaner::new());
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn unterminated_markup_is_markup_error() {
        let result = Converter::default().convert("<p>ok</p><!-- never closed", &XhtmlCleaner::new());
        assert!(matches!(result, Err(Error::Markup(_))));
    }
}

#[test]
fn render_matches_manual_tree() {
    let tree: Node = crate::Element::new("em").with_text("x").into();
    let text = Converter::default().render(&tree);
    let fonts = of_category(&text, Category::Font);
    assert_eq!(fonts.len(), 1);
    assert!(matches!(
        &fonts[0].1,
        Annotation::Font(font)
            if font.style == FontStyle::Italic && font.weight == FontWeight::Normal
    ));
    assert_eq!(fonts[0].0, 0..1);
}
