// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::borrow::Cow;

use parley::layout::{Alignment, AlignmentOptions, PositionedLayoutItem};
use parley::style::{FontFamily, FontStack, FontStyle, FontWeight, StyleProperty};
use parley::{FontContext, Layout, LayoutContext};
use text_primitives::TextAlignment;

use super::{ClusterBox, LayoutEngine, LayoutOptions, LineBox, TextLayout};
use crate::attribute::attr;
use crate::{RichText, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};

/// A [`LayoutEngine`] shaping with Parley.
///
/// Fonts, kerning and underlines are passed to Parley. Colors, links and baseline offsets do
/// not affect line geometry and are ignored.
pub struct ParleyEngine {
    font_cx: FontContext,
    layout_cx: LayoutContext<()>,
}

impl ParleyEngine {
    /// Create an engine with a new font context.
    pub fn new() -> Self {
        Self::with_font_context(FontContext::new())
    }

    /// Create an engine reusing `font_cx` and its font collection.
    pub fn with_font_context(font_cx: FontContext) -> Self {
        Self {
            font_cx,
            layout_cx: LayoutContext::new(),
        }
    }

    /// The font context, to register additional fonts.
    pub fn font_context_mut(&mut self) -> &mut FontContext {
        &mut self.font_cx
    }

    fn build(&mut self, text: &RichText, options: &LayoutOptions) -> Layout<()> {
        let mut builder = self.layout_cx.ranged_builder(
            &mut self.font_cx,
            text.as_str(),
            options.display_scale,
            true,
        );
        builder.push_default(StyleProperty::FontStack(FontStack::Single(
            FontFamily::Named(Cow::Borrowed(DEFAULT_FONT_FAMILY)),
        )));
        builder.push_default(StyleProperty::FontSize(DEFAULT_FONT_SIZE));

        for run in text.runs::<attr::Font>() {
            let Some(font) = run.value else {
                continue;
            };
            let family = FontFamily::Named(Cow::Borrowed(font.family()));
            builder.push(StyleProperty::FontStack(FontStack::Single(family)), run.range.clone());
            builder.push(StyleProperty::FontSize(font.size()), run.range.clone());
            if font.is_bold() {
                builder.push(StyleProperty::FontWeight(FontWeight::BOLD), run.range.clone());
            }
            if font.is_italic() {
                builder.push(StyleProperty::FontStyle(FontStyle::Italic), run.range);
            }
        }
        for run in text.runs::<attr::Kerning>() {
            if let Some(kerning) = run.value {
                builder.push(StyleProperty::LetterSpacing(*kerning), run.range);
            }
        }
        for run in text.runs::<attr::UnderlineStyle>() {
            if run.value.is_some_and(|style| !style.is_none()) {
                builder.push(StyleProperty::Underline(true), run.range);
            }
        }

        builder.build(text.as_str())
    }
}

impl Default for ParleyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ParleyEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyEngine").finish_non_exhaustive()
    }
}

fn alignment(alignment: TextAlignment) -> Alignment {
    match alignment {
        TextAlignment::Natural => Alignment::Start,
        TextAlignment::Left => Alignment::Left,
        TextAlignment::Center => Alignment::Center,
        TextAlignment::Right => Alignment::Right,
        TextAlignment::Justified => Alignment::Justify,
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Parley measures in f32."
)]
impl LayoutEngine for ParleyEngine {
    fn layout(&mut self, text: &RichText, options: &LayoutOptions) -> TextLayout {
        let mut layout = self.build(text, options);
        let wrap_width = options.wrap_width().map(|width| width as f32);
        let container = options.max_width.map(|width| width as f32);
        layout.break_all_lines(wrap_width);
        layout.align(
            container,
            alignment(options.alignment),
            AlignmentOptions::default(),
        );

        let mut lines = Vec::new();
        for line in layout.lines() {
            let metrics = line.metrics();
            let mut clusters = Vec::new();
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut x = f64::from(glyph_run.offset());
                for cluster in glyph_run.run().visual_clusters() {
                    let advance = f64::from(cluster.advance());
                    clusters.push(ClusterBox {
                        text_range: cluster.text_range(),
                        x,
                        advance,
                        is_whitespace: cluster.is_space_or_nbsp(),
                    });
                    x += advance;
                }
            }
            lines.push(LineBox {
                text_range: line.text_range(),
                top: f64::from(metrics.min_coord),
                height: f64::from(metrics.max_coord - metrics.min_coord),
                clusters,
            });
        }

        let mut layout = TextLayout::new(lines);
        layout.truncate_lines(options.max_lines);
        tracing::trace!(lines = layout.lines().len(), "parley layout");
        layout
    }
}
