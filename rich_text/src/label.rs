// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Point;
use text_primitives::LineBreakMode;

use crate::{LayoutEngine, LayoutOptions, RichText};

/// A read-only text display: a rich text laid out into a box of fixed width.
///
/// Text is drawn from the top-left corner of the label.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// The displayed text.
    pub text: RichText,
    /// The width lines wrap at.
    pub width: f64,
    /// The maximum number of lines, `0` for no limit.
    pub number_of_lines: usize,
    /// How lines break and are truncated.
    pub line_break_mode: LineBreakMode,
}

impl Default for Label {
    fn default() -> Self {
        Self::new(RichText::default(), 0.0)
    }
}

impl Label {
    /// A single-line label truncating at the tail.
    pub fn new(text: RichText, width: f64) -> Self {
        Self {
            text,
            width,
            number_of_lines: 1,
            line_break_mode: LineBreakMode::TruncatingTail,
        }
    }

    /// The layout configuration the label's text is drawn with.
    ///
    /// Labels allowing more than one line wrap words even when their mode only truncates.
    pub fn current_layout_options(&self) -> LayoutOptions {
        let line_break_mode = if self.number_of_lines != 1 && !self.line_break_mode.wraps() {
            LineBreakMode::WordWrapping
        } else {
            self.line_break_mode
        };
        let alignment = if self.text.is_empty() {
            LayoutOptions::default().alignment
        } else {
            self.text.text_alignment_at(0).0
        };
        LayoutOptions {
            max_width: Some(self.width),
            max_lines: self.number_of_lines,
            line_break_mode,
            alignment,
            ..LayoutOptions::default()
        }
    }

    /// The byte index of the character drawn under `point`, in label coordinates.
    ///
    /// A fresh layout is built for every call. Returns `None` when `point` is not inside any
    /// character's box, including points past the end of a line or below the last line.
    ///
    /// ```
    /// use peniko::kurbo::Point;
    /// use rich_text::{FixedAdvanceEngine, Label, RichText};
    ///
    /// let label = Label::new(RichText::new("Hello"), 100.0);
    /// let mut engine = FixedAdvanceEngine;
    /// assert_eq!(label.character_index_at(&mut engine, Point::new(13.0, 5.0)), Some(2));
    /// assert_eq!(label.character_index_at(&mut engine, Point::new(31.0, 5.0)), None);
    /// ```
    pub fn character_index_at(
        &self,
        engine: &mut impl LayoutEngine,
        point: Point,
    ) -> Option<usize> {
        let layout = engine.layout(&self.text, &self.current_layout_options());
        layout.index_at(point)
    }
}

#[cfg(test)]
mod tests {
    use peniko::kurbo::Point;
    use text_primitives::{LineBreakMode, TextAlignment};

    use crate::{FixedAdvanceEngine, Label, RichText};

    #[test]
    fn multi_line_labels_wrap() {
        let mut label = Label::new(RichText::new("one two"), 30.0);
        assert_eq!(
            label.current_layout_options().line_break_mode,
            LineBreakMode::TruncatingTail
        );
        label.number_of_lines = 0;
        let options = label.current_layout_options();
        assert_eq!(options.line_break_mode, LineBreakMode::WordWrapping);
        assert_eq!(options.max_lines, 0);
        assert_eq!(options.max_width, Some(30.0));
    }

    #[test]
    fn index_on_second_line() {
        let mut label = Label::new(RichText::new("one two"), 30.0);
        label.number_of_lines = 2;
        let mut engine = FixedAdvanceEngine;
        // Second line starts at byte 4 and is 14.4 points down.
        assert_eq!(label.character_index_at(&mut engine, Point::new(7.0, 20.0)), Some(5));
        label.number_of_lines = 1;
        assert_eq!(label.character_index_at(&mut engine, Point::new(7.0, 20.0)), None);
    }

    #[test]
    fn alignment_moves_hit_boxes() {
        let mut text = RichText::new("ab");
        text.set_text_alignment(TextAlignment::Right);
        let label = Label::new(text, 100.0);
        let mut engine = FixedAdvanceEngine;
        assert_eq!(label.character_index_at(&mut engine, Point::new(1.0, 1.0)), None);
        assert_eq!(label.character_index_at(&mut engine, Point::new(95.0, 1.0)), Some(1));
    }
}
