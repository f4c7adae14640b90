// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed readers for the common attributes.
//!
//! Every reader returns the effective range alongside the value and panics when the index is
//! not inside the text.

use core::ops::{ControlFlow, Range};

use peniko::Color;
use text_primitives::{LineBreakMode, ParagraphStyle, TextAlignment, UnderlineStyle};
use url::Url;

use crate::attribute::attr;
use crate::{Font, RichText};

impl RichText {
    /// The font at `index`, or `None` when no font is set there.
    pub fn font_at(&self, index: usize) -> (Option<&Font>, Range<usize>) {
        self.value_at::<attr::Font>(index)
    }

    /// Whether the font at `index` is bold; a missing font reads as the default font.
    pub fn is_font_bold_at(&self, index: usize) -> (bool, Range<usize>) {
        let (font, range) = self.font_at(index);
        (font.is_some_and(Font::is_bold), range)
    }

    /// Whether the font at `index` is italic; a missing font reads as the default font.
    pub fn is_font_italic_at(&self, index: usize) -> (bool, Range<usize>) {
        let (font, range) = self.font_at(index);
        (font.is_some_and(Font::is_italic), range)
    }

    /// The foreground color at `index`.
    pub fn text_color_at(&self, index: usize) -> (Option<Color>, Range<usize>) {
        let (color, range) = self.value_at::<attr::ForegroundColor>(index);
        (color.copied(), range)
    }

    /// The background color at `index`.
    pub fn text_background_color_at(&self, index: usize) -> (Option<Color>, Range<usize>) {
        let (color, range) = self.value_at::<attr::BackgroundColor>(index);
        (color.copied(), range)
    }

    /// The underline style at `index`, [`UnderlineStyle::NONE`] when unset.
    pub fn underline_style_at(&self, index: usize) -> (UnderlineStyle, Range<usize>) {
        let (style, range) = self.value_at::<attr::UnderlineStyle>(index);
        (style.copied().unwrap_or(UnderlineStyle::NONE), range)
    }

    /// Whether the text at `index` carries an underline.
    pub fn is_text_underlined_at(&self, index: usize) -> (bool, Range<usize>) {
        let (style, range) = self.underline_style_at(index);
        (!style.is_none(), range)
    }

    /// The underline color at `index`; `None` means the foreground color is used.
    pub fn text_underline_color_at(&self, index: usize) -> (Option<Color>, Range<usize>) {
        let (color, range) = self.value_at::<attr::UnderlineColor>(index);
        (color.copied(), range)
    }

    /// The kerning at `index` in points, `0.0` when unset.
    pub fn kerning_at(&self, index: usize) -> (f32, Range<usize>) {
        let (kerning, range) = self.value_at::<attr::Kerning>(index);
        (kerning.copied().unwrap_or(0.0), range)
    }

    /// The baseline offset at `index` in points, `0.0` when unset.
    pub fn baseline_offset_at(&self, index: usize) -> (f32, Range<usize>) {
        let (offset, range) = self.value_at::<attr::BaselineOffset>(index);
        (offset.copied().unwrap_or(0.0), range)
    }

    /// The link target at `index`.
    pub fn link_at(&self, index: usize) -> (Option<&Url>, Range<usize>) {
        self.value_at::<attr::Link>(index)
    }

    /// A copy of the paragraph style at `index`, ready to be edited and written back.
    pub fn paragraph_style_at(&self, index: usize) -> (Option<ParagraphStyle>, Range<usize>) {
        let (style, range) = self.value_at::<attr::ParagraphStyle>(index);
        (style.cloned(), range)
    }

    /// The alignment at `index`, [`TextAlignment::Natural`] without a paragraph style.
    ///
    /// The range is the paragraph style run.
    pub fn text_alignment_at(&self, index: usize) -> (TextAlignment, Range<usize>) {
        let (style, range) = self.value_at::<attr::ParagraphStyle>(index);
        (style.map_or(TextAlignment::Natural, |s| s.alignment), range)
    }

    /// The line break mode at `index`, [`LineBreakMode::WordWrapping`] without a paragraph
    /// style.
    pub fn line_break_mode_at(&self, index: usize) -> (LineBreakMode, Range<usize>) {
        let (style, range) = self.value_at::<attr::ParagraphStyle>(index);
        (
            style.map_or(LineBreakMode::WordWrapping, |s| s.line_break_mode),
            range,
        )
    }

    /// Visit the font runs in `range`, including runs without a font.
    pub fn for_each_font_in<F>(&self, range: Range<usize>, visit: F)
    where
        F: FnMut(Option<&Font>, Range<usize>) -> ControlFlow<()>,
    {
        self.for_each_run::<attr::Font, _>(range, true, visit);
    }

    /// Visit the linked runs in `range`.
    pub fn for_each_link_in<F>(&self, range: Range<usize>, mut visit: F)
    where
        F: FnMut(&Url, Range<usize>) -> ControlFlow<()>,
    {
        self.for_each_run::<attr::Link, _>(range, false, |url, run| match url {
            Some(url) => visit(url, run),
            None => ControlFlow::Continue(()),
        });
    }

    /// Visit the paragraph style runs in `range`, including runs without a style.
    pub fn for_each_paragraph_style_in<F>(&self, range: Range<usize>, visit: F)
    where
        F: FnMut(Option<&ParagraphStyle>, Range<usize>) -> ControlFlow<()>,
    {
        self.for_each_run::<attr::ParagraphStyle, _>(range, true, visit);
    }
}

#[cfg(test)]
mod tests {
    use core::ops::ControlFlow;

    use text_primitives::{LineBreakMode, TextAlignment, UnderlineStyle};
    use url::Url;

    use crate::RichText;

    #[test]
    fn absent_readers_return_defaults() {
        let text = RichText::new("plain");
        assert_eq!(text.font_at(0), (None, 0..5));
        assert_eq!(text.is_font_bold_at(4), (false, 0..5));
        assert_eq!(text.underline_style_at(1), (UnderlineStyle::NONE, 0..5));
        assert_eq!(text.is_text_underlined_at(1), (false, 0..5));
        assert_eq!(text.kerning_at(2), (0.0, 0..5));
        assert_eq!(text.baseline_offset_at(3), (0.0, 0..5));
        assert_eq!(text.text_alignment_at(0), (TextAlignment::Natural, 0..5));
        assert_eq!(text.line_break_mode_at(0), (LineBreakMode::WordWrapping, 0..5));
        assert_eq!(text.paragraph_style_at(0), (None, 0..5));
        assert_eq!(text.link_at(0), (None, 0..5));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn reader_past_end_panics() {
        let text = RichText::new("abc");
        let _ = text.kerning_at(3);
    }

    #[test]
    fn link_enumeration_skips_unlinked_text() {
        let mut text = RichText::new("see docs and home");
        let docs = Url::parse("https://docs.rs/").unwrap();
        let home = Url::parse("https://linebender.org/").unwrap();
        text.set_link_in(docs.clone(), 4..8).unwrap();
        text.set_link_in(home.clone(), 13..17).unwrap();

        let mut links = Vec::new();
        text.for_each_link_in(0..text.len(), |url, run| {
            links.push((url.clone(), run));
            ControlFlow::Continue(())
        });
        assert_eq!(links, vec![(docs, 4..8), (home, 13..17)]);
    }
}
