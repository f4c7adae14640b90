// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use text_primitives::{LineBreakMode, TextAlignment};

use super::{ClusterBox, LayoutEngine, LayoutOptions, LineBox, TextLayout};
use crate::{Font, RichText};

/// A layout engine with synthetic metrics, independent of installed fonts.
///
/// Every character advances by half its font size plus its kerning, and each line is
/// 1.2 times as tall as its largest font. Lines break at `\n` and, for wrapping modes, when
/// the next visible character would overflow the maximum width: after the last whitespace
/// of the line for [`WordWrapping`](LineBreakMode::WordWrapping), right before the
/// overflowing character otherwise. Whitespace never causes a break. Center and right
/// alignment shift whole lines; justification is not applied.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedAdvanceEngine;

/// Line height relative to font size.
const LINE_HEIGHT: f64 = 1.2;

struct Cluster {
    text_range: Range<usize>,
    advance: f64,
    height: f64,
    is_whitespace: bool,
    is_newline: bool,
}

impl LayoutEngine for FixedAdvanceEngine {
    fn layout(&mut self, text: &RichText, options: &LayoutOptions) -> TextLayout {
        let wrap_width = options.wrap_width();
        let mut lines: Vec<Vec<Cluster>> = vec![Vec::new()];
        let mut width = 0.0;

        for cluster in clusters(text) {
            let Some(current) = lines.last_mut() else {
                break;
            };
            if let Some(max) = wrap_width {
                if !cluster.is_whitespace && !current.is_empty() && width + cluster.advance > max {
                    let split = match options.line_break_mode {
                        LineBreakMode::WordWrapping => current
                            .iter()
                            .rposition(|c| c.is_whitespace)
                            .map_or(current.len(), |i| i + 1),
                        _ => current.len(),
                    };
                    let carried = current.split_off(split);
                    width = carried.iter().map(|c| c.advance).sum();
                    lines.push(carried);
                }
            }
            let is_newline = cluster.is_newline;
            width += cluster.advance;
            if let Some(current) = lines.last_mut() {
                current.push(cluster);
            }
            if is_newline {
                lines.push(Vec::new());
                width = 0.0;
            }
        }
        if lines.last().is_some_and(Vec::is_empty) {
            lines.pop();
        }

        let mut boxes = Vec::with_capacity(lines.len());
        let mut top = 0.0;
        for line in lines {
            let (Some(first), Some(last)) = (line.first(), line.last()) else {
                continue;
            };
            let text_range = first.text_range.start..last.text_range.end;
            let height = line.iter().map(|c| c.height).fold(0.0, f64::max);
            let mut x = 0.0;
            let clusters = line
                .into_iter()
                .map(|c| {
                    let cluster = ClusterBox {
                        text_range: c.text_range,
                        x,
                        advance: c.advance,
                        is_whitespace: c.is_whitespace,
                    };
                    x += c.advance;
                    cluster
                })
                .collect();
            boxes.push(LineBox {
                text_range,
                top,
                height,
                clusters,
            });
            top += height;
        }

        let container = options.max_width.unwrap_or_else(|| {
            boxes.iter().map(LineBox::width).fold(0.0, f64::max)
        });
        for line in &mut boxes {
            let slack = (container - line.width()).max(0.0);
            let offset = match options.alignment {
                TextAlignment::Center => slack / 2.0,
                TextAlignment::Right => slack,
                TextAlignment::Natural | TextAlignment::Left | TextAlignment::Justified => 0.0,
            };
            for cluster in &mut line.clusters {
                cluster.x += offset;
            }
        }

        let mut layout = TextLayout::new(boxes);
        layout.truncate_lines(options.max_lines);
        tracing::trace!(lines = layout.lines().len(), "fixed advance layout");
        layout
    }
}

fn clusters(text: &RichText) -> impl Iterator<Item = Cluster> + '_ {
    text.as_str().char_indices().map(move |(index, c)| {
        let size = f64::from(
            text.font_at(index)
                .0
                .map_or_else(|| Font::default().size(), Font::size),
        );
        let is_newline = c == '\n';
        let advance = if is_newline {
            0.0
        } else {
            size * 0.5 + f64::from(text.kerning_at(index).0)
        };
        Cluster {
            text_range: index..index + c.len_utf8(),
            advance,
            height: size * LINE_HEIGHT,
            is_whitespace: c.is_whitespace(),
            is_newline,
        }
    })
}

#[cfg(test)]
mod tests {
    use text_primitives::{LineBreakMode, TextAlignment};

    use crate::{Font, FixedAdvanceEngine, LayoutEngine, LayoutOptions, RichText};

    fn line_texts(text: &RichText, options: &LayoutOptions) -> Vec<String> {
        FixedAdvanceEngine
            .layout(text, options)
            .lines()
            .iter()
            .map(|line| text.as_str()[line.text_range.clone()].to_owned())
            .collect()
    }

    #[test]
    fn word_wrap_breaks_after_whitespace() {
        let text = RichText::new("aaa bbb ccc");
        let options = LayoutOptions {
            max_width: Some(45.0),
            ..LayoutOptions::default()
        };
        assert_eq!(line_texts(&text, &options), ["aaa bbb ", "ccc"]);
    }

    #[test]
    fn char_wrap_breaks_anywhere() {
        let text = RichText::new("abcdefg");
        let options = LayoutOptions {
            max_width: Some(20.0),
            line_break_mode: LineBreakMode::CharWrapping,
            ..LayoutOptions::default()
        };
        assert_eq!(line_texts(&text, &options), ["abc", "def", "g"]);
    }

    #[test]
    fn clipping_only_breaks_at_newlines() {
        let text = RichText::new("a long line\nnext");
        let options = LayoutOptions {
            max_width: Some(10.0),
            line_break_mode: LineBreakMode::Clipping,
            ..LayoutOptions::default()
        };
        assert_eq!(line_texts(&text, &options), ["a long line\n", "next"]);
    }

    #[test]
    fn max_lines_truncates() {
        let text = RichText::new("1\n2\n3\n");
        let options = LayoutOptions {
            max_lines: 2,
            ..LayoutOptions::default()
        };
        assert_eq!(line_texts(&text, &options), ["1\n", "2\n"]);
    }

    #[test]
    fn line_height_follows_largest_font() {
        let mut text = RichText::new("ab");
        text.set_font_in(Font::default().with_size(20.0), 1..2).unwrap();
        let layout = FixedAdvanceEngine.layout(&text, &LayoutOptions::default());
        let line = &layout.lines()[0];
        assert_eq!(line.height, 24.0);
        assert_eq!(line.clusters[1].x, 6.0);
        assert_eq!(line.clusters[1].advance, 10.0);
    }

    #[test]
    fn center_alignment_offsets_lines() {
        let text = RichText::new("ab");
        let options = LayoutOptions {
            max_width: Some(100.0),
            alignment: TextAlignment::Center,
            ..LayoutOptions::default()
        };
        let layout = FixedAdvanceEngine.layout(&text, &options);
        assert_eq!(layout.lines()[0].clusters[0].x, 44.0);
    }
}
