// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed writers for the common attributes.
//!
//! Whole-text writers are infallible; the `_in` variants validate their range first.

use core::ops::Range;

use peniko::Color;
use text_primitives::{
    LineBreakMode, ParagraphStyle, SymbolicTraits, TextAlignment, UnderlineStyle,
};
use url::Url;

use crate::attribute::attr;
use crate::{Error, Font, RichText};

impl RichText {
    /// Set the font over the whole text.
    pub fn set_font(&mut self, font: Font) {
        self.set::<attr::Font>(font);
    }

    /// Set the font over `range`.
    pub fn set_font_in(&mut self, font: Font, range: Range<usize>) -> Result<(), Error> {
        self.set_in::<attr::Font>(font, range)
    }

    /// Set the foreground color over the whole text.
    pub fn set_text_color(&mut self, color: Color) {
        self.set::<attr::ForegroundColor>(color);
    }

    /// Set the foreground color over `range`.
    pub fn set_text_color_in(&mut self, color: Color, range: Range<usize>) -> Result<(), Error> {
        self.set_in::<attr::ForegroundColor>(color, range)
    }

    /// Set the background color over the whole text.
    pub fn set_text_background_color(&mut self, color: Color) {
        self.set::<attr::BackgroundColor>(color);
    }

    /// Set the background color over `range`.
    pub fn set_text_background_color_in(
        &mut self,
        color: Color,
        range: Range<usize>,
    ) -> Result<(), Error> {
        self.set_in::<attr::BackgroundColor>(color, range)
    }

    /// Set the underline style over the whole text.
    pub fn set_text_underline_style(&mut self, style: UnderlineStyle) {
        self.set::<attr::UnderlineStyle>(style);
    }

    /// Set the underline style over `range`.
    pub fn set_text_underline_style_in(
        &mut self,
        style: UnderlineStyle,
        range: Range<usize>,
    ) -> Result<(), Error> {
        self.set_in::<attr::UnderlineStyle>(style, range)
    }

    /// Underline the whole text with a single line, or remove the underline.
    pub fn set_text_underlined(&mut self, underlined: bool) {
        self.set_text_underline_style(underline_for(underlined));
    }

    /// Underline `range` with a single line, or remove the underline there.
    pub fn set_text_underlined_in(
        &mut self,
        underlined: bool,
        range: Range<usize>,
    ) -> Result<(), Error> {
        self.set_text_underline_style_in(underline_for(underlined), range)
    }

    /// Set the underline color over the whole text.
    ///
    /// `None` removes the attribute so the underline follows the foreground color.
    pub fn set_text_underline_color(&mut self, color: Option<Color>) {
        let range = self.full_range();
        self.apply::<attr::UnderlineColor>(range, color);
    }

    /// Set the underline color over `range`; `None` removes it.
    pub fn set_text_underline_color_in(
        &mut self,
        color: Option<Color>,
        range: Range<usize>,
    ) -> Result<(), Error> {
        let range = self.validate(range)?;
        self.apply::<attr::UnderlineColor>(range, color);
        Ok(())
    }

    /// Set the kerning over the whole text, in points.
    pub fn set_kerning(&mut self, kerning: f32) {
        self.set::<attr::Kerning>(kerning);
    }

    /// Set the kerning over `range`, in points.
    pub fn set_kerning_in(&mut self, kerning: f32, range: Range<usize>) -> Result<(), Error> {
        self.set_in::<attr::Kerning>(kerning, range)
    }

    /// Set the baseline offset over the whole text, in points.
    pub fn set_baseline_offset(&mut self, offset: f32) {
        self.set::<attr::BaselineOffset>(offset);
    }

    /// Set the baseline offset over `range`, in points.
    pub fn set_baseline_offset_in(
        &mut self,
        offset: f32,
        range: Range<usize>,
    ) -> Result<(), Error> {
        self.set_in::<attr::BaselineOffset>(offset, range)
    }

    /// Link the whole text to `url`.
    pub fn set_link(&mut self, url: Url) {
        self.set::<attr::Link>(url);
    }

    /// Link `range` to `url`.
    pub fn set_link_in(&mut self, url: Url, range: Range<usize>) -> Result<(), Error> {
        self.set_in::<attr::Link>(url, range)
    }

    /// Set the paragraph style over the whole text.
    pub fn set_paragraph_style(&mut self, style: ParagraphStyle) {
        self.set::<attr::ParagraphStyle>(style);
    }

    /// Set the paragraph style over `range`.
    pub fn set_paragraph_style_in(
        &mut self,
        style: ParagraphStyle,
        range: Range<usize>,
    ) -> Result<(), Error> {
        self.set_in::<attr::ParagraphStyle>(style, range)
    }

    // --- Font traits ---

    /// Recompute the font traits of every font run in `range`.
    ///
    /// `compute` receives the current traits and the run, clipped to `range`, and returns
    /// the new traits. Runs without a font start from the default font. Family and size are
    /// kept.
    pub fn change_font_traits_in<F>(&mut self, range: Range<usize>, compute: F) -> Result<(), Error>
    where
        F: FnMut(SymbolicTraits, Range<usize>) -> SymbolicTraits,
    {
        let range = self.validate(range)?;
        self.change_font_traits_unchecked(range, compute);
        Ok(())
    }

    /// Recompute the font traits of every font run.
    pub fn change_font_traits<F>(&mut self, compute: F)
    where
        F: FnMut(SymbolicTraits, Range<usize>) -> SymbolicTraits,
    {
        let range = self.full_range();
        self.change_font_traits_unchecked(range, compute);
    }

    fn change_font_traits_unchecked<F>(&mut self, range: Range<usize>, mut compute: F)
    where
        F: FnMut(SymbolicTraits, Range<usize>) -> SymbolicTraits,
    {
        let runs: Vec<_> = self
            .runs_in::<attr::Font>(range)
            .map(|run| (run.value.cloned().unwrap_or_default(), run.range))
            .collect();
        for (font, run) in runs {
            let traits = compute(font.traits(), run.clone());
            self.apply::<attr::Font>(run, Some(font.with_traits(traits)));
        }
    }

    /// Add or remove the bold trait over the whole text.
    pub fn set_font_bold(&mut self, bold: bool) {
        self.change_font_traits(|traits, _| traits.with(SymbolicTraits::BOLD, bold));
    }

    /// Add or remove the bold trait over `range`.
    pub fn set_font_bold_in(&mut self, bold: bool, range: Range<usize>) -> Result<(), Error> {
        self.change_font_traits_in(range, |traits, _| traits.with(SymbolicTraits::BOLD, bold))
    }

    /// Add or remove the italic trait over the whole text.
    pub fn set_font_italic(&mut self, italic: bool) {
        self.change_font_traits(|traits, _| traits.with(SymbolicTraits::ITALIC, italic));
    }

    /// Add or remove the italic trait over `range`.
    pub fn set_font_italic_in(&mut self, italic: bool, range: Range<usize>) -> Result<(), Error> {
        self.change_font_traits_in(range, |traits, _| {
            traits.with(SymbolicTraits::ITALIC, italic)
        })
    }

    // --- Baseline shifts ---

    /// Raise `range` by half the size of the font at its start.
    ///
    /// Only the font at `range.start` is consulted, even when the range spans several fonts.
    ///
    /// ```
    /// use rich_text::RichText;
    ///
    /// let mut text = RichText::new("E = mc2 here");
    /// text.set_superscript_in(6..7).unwrap();
    /// assert_eq!(text.baseline_offset_at(6), (6.0, 6..7));
    /// ```
    pub fn set_superscript_in(&mut self, range: Range<usize>) -> Result<(), Error> {
        let range = self.validate(range)?;
        let offset = self.half_size_at(range.start);
        self.apply::<attr::BaselineOffset>(range, Some(offset));
        Ok(())
    }

    /// Lower `range` by half the size of the font at its start.
    pub fn set_subscript_in(&mut self, range: Range<usize>) -> Result<(), Error> {
        let range = self.validate(range)?;
        let offset = self.half_size_at(range.start);
        self.apply::<attr::BaselineOffset>(range, Some(-offset));
        Ok(())
    }

    fn half_size_at(&self, index: usize) -> f32 {
        let size = if index < self.len() {
            self.font_at(index).0.map_or_else(|| Font::default().size(), Font::size)
        } else {
            Font::default().size()
        };
        size / 2.0
    }

    // --- Paragraph styles ---

    /// Edit the paragraph style of every paragraph style run in `range`.
    ///
    /// `edit` receives a copy of the run's style, or the default style where none is set,
    /// and the run clipped to `range`. The copy is written back over that run.
    pub fn change_paragraph_styles_in<F>(
        &mut self,
        range: Range<usize>,
        edit: F,
    ) -> Result<(), Error>
    where
        F: FnMut(&mut ParagraphStyle, Range<usize>),
    {
        let range = self.validate(range)?;
        self.change_paragraph_styles_unchecked(range, edit);
        Ok(())
    }

    /// Edit the paragraph style of every paragraph style run.
    pub fn change_paragraph_styles<F>(&mut self, edit: F)
    where
        F: FnMut(&mut ParagraphStyle, Range<usize>),
    {
        let range = self.full_range();
        self.change_paragraph_styles_unchecked(range, edit);
    }

    fn change_paragraph_styles_unchecked<F>(&mut self, range: Range<usize>, mut edit: F)
    where
        F: FnMut(&mut ParagraphStyle, Range<usize>),
    {
        let runs: Vec<_> = self
            .runs_in::<attr::ParagraphStyle>(range)
            .map(|run| (run.value.cloned().unwrap_or_default(), run.range))
            .collect();
        for (mut style, run) in runs {
            edit(&mut style, run.clone());
            self.apply::<attr::ParagraphStyle>(run, Some(style));
        }
    }

    /// Set the alignment over the whole text, keeping the rest of each paragraph style.
    pub fn set_text_alignment(&mut self, alignment: TextAlignment) {
        self.change_paragraph_styles(|style, _| style.alignment = alignment);
    }

    /// Set the alignment over `range`, keeping the rest of each paragraph style.
    pub fn set_text_alignment_in(
        &mut self,
        alignment: TextAlignment,
        range: Range<usize>,
    ) -> Result<(), Error> {
        self.change_paragraph_styles_in(range, |style, _| style.alignment = alignment)
    }

    /// Set the line break mode over the whole text, keeping the rest of each paragraph style.
    pub fn set_line_break_mode(&mut self, mode: LineBreakMode) {
        self.change_paragraph_styles(|style, _| style.line_break_mode = mode);
    }

    /// Set the line break mode over `range`, keeping the rest of each paragraph style.
    pub fn set_line_break_mode_in(
        &mut self,
        mode: LineBreakMode,
        range: Range<usize>,
    ) -> Result<(), Error> {
        self.change_paragraph_styles_in(range, |style, _| style.line_break_mode = mode)
    }
}

fn underline_for(underlined: bool) -> UnderlineStyle {
    if underlined {
        UnderlineStyle::SINGLE
    } else {
        UnderlineStyle::NONE
    }
}
