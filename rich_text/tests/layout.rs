// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{Point, Size};
use rich_text::{FixedAdvanceEngine, Label, LayoutEngine, LayoutOptions, RichText};
use text_primitives::{LineBreakMode, TextAlignment};

#[test]
fn wrapped_label_maps_points_to_indices() {
    let mut label = Label::new(RichText::new("Hello World"), 40.0);
    label.number_of_lines = 0;
    let mut engine = FixedAdvanceEngine;

    assert_eq!(label.character_index_at(&mut engine, Point::new(13.0, 5.0)), Some(2));
    assert_eq!(label.character_index_at(&mut engine, Point::new(13.0, 20.0)), Some(8));
    // Past the end of the first line and below the last one.
    assert_eq!(label.character_index_at(&mut engine, Point::new(37.0, 5.0)), None);
    assert_eq!(label.character_index_at(&mut engine, Point::new(1.0, 30.0)), None);
}

#[test]
fn single_line_label_truncates() {
    let label = Label::new(RichText::new("Hello World"), 40.0);
    let options = label.current_layout_options();
    assert_eq!(options.line_break_mode, LineBreakMode::TruncatingTail);

    let layout = FixedAdvanceEngine.layout(&label.text, &options);
    assert_eq!(layout.lines().len(), 1);
    let mut engine = FixedAdvanceEngine;
    assert_eq!(label.character_index_at(&mut engine, Point::new(61.0, 5.0)), Some(10));
}

#[test]
fn measured_size_of_wrapped_text() {
    let text = RichText::new("Hello World");
    let size = text.size_constrained_to(&mut FixedAdvanceEngine, Size::new(40.0, 100.0));
    assert_eq!(size, Size::new(30.0, 29.0));
}

#[test]
fn measured_size_follows_fonts() {
    let text = RichText::from_markup(r#"<font size="5">Hi</font>"#).unwrap();
    let size = text.size_constrained_to(&mut FixedAdvanceEngine, Size::new(500.0, 500.0));
    assert_eq!(size, Size::new(18.0, 22.0));
}

#[test]
fn label_alignment_comes_from_the_first_paragraph() {
    let mut text = RichText::new("ab\ncd");
    text.set_text_alignment_in(TextAlignment::Right, 0..3).unwrap();
    let label = Label {
        number_of_lines: 0,
        ..Label::new(text, 100.0)
    };
    assert_eq!(label.current_layout_options().alignment, TextAlignment::Right);

    let mut engine = FixedAdvanceEngine;
    // Every line is shifted to the right edge, including the one without the style.
    assert_eq!(label.character_index_at(&mut engine, Point::new(95.0, 20.0)), Some(4));
    assert_eq!(label.character_index_at(&mut engine, Point::new(1.0, 20.0)), None);
}

#[test]
fn layout_lines_cover_the_text() {
    let text = RichText::new("one two three\nfour five");
    let options = LayoutOptions {
        max_width: Some(30.0),
        ..LayoutOptions::default()
    };
    let layout = FixedAdvanceEngine.layout(&text, &options);
    let mut expected = 0;
    for line in layout.lines() {
        assert_eq!(line.text_range.start, expected);
        expected = line.text_range.end;
    }
    assert_eq!(expected, text.len());
}
