// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line layout of rich text, reduced to the geometry hit testing and measurement need.

mod fixed;
#[cfg(feature = "parley")]
mod parley_engine;

use core::ops::Range;

use peniko::kurbo::{Point, Rect, Size};
use text_primitives::{LineBreakMode, TextAlignment};

use crate::RichText;

pub use fixed::FixedAdvanceEngine;
#[cfg(feature = "parley")]
pub use parley_engine::ParleyEngine;

/// How a text is laid out.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutOptions {
    /// The width lines wrap at, `None` for unbounded lines.
    pub max_width: Option<f64>,
    /// The maximum number of lines kept, `0` for no limit.
    pub max_lines: usize,
    /// How lines wrap. Non-wrapping modes only break at hard line breaks.
    pub line_break_mode: LineBreakMode,
    /// Horizontal alignment of each line within `max_width`.
    pub alignment: TextAlignment,
    /// The scale applied by the engine when shaping.
    pub display_scale: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            max_width: None,
            max_lines: 0,
            line_break_mode: LineBreakMode::WordWrapping,
            alignment: TextAlignment::Natural,
            display_scale: 1.0,
        }
    }
}

impl LayoutOptions {
    /// The width passed to the line breaker, `None` when the mode does not wrap.
    pub fn wrap_width(&self) -> Option<f64> {
        if self.line_break_mode.wraps() {
            self.max_width
        } else {
            None
        }
    }
}

/// Lays out rich text into lines of clusters.
pub trait LayoutEngine {
    /// Lay out `text` according to `options`.
    fn layout(&mut self, text: &RichText, options: &LayoutOptions) -> TextLayout;
}

/// A laid-out cluster: the smallest unit of text that can be hit.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterBox {
    /// The text covered by the cluster.
    pub text_range: Range<usize>,
    /// The left edge of the cluster, relative to the layout.
    pub x: f64,
    /// The horizontal advance of the cluster.
    pub advance: f64,
    /// Whether the cluster is whitespace.
    pub is_whitespace: bool,
}

/// A laid-out line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineBox {
    /// The text covered by the line.
    pub text_range: Range<usize>,
    /// The top edge of the line, relative to the layout.
    pub top: f64,
    /// The height of the line.
    pub height: f64,
    /// The clusters of the line in visual order.
    pub clusters: Vec<ClusterBox>,
}

impl LineBox {
    /// The width of the line without trailing whitespace.
    pub fn width(&self) -> f64 {
        let Some(first) = self.clusters.first() else {
            return 0.0;
        };
        self.clusters
            .iter()
            .filter(|cluster| !cluster.is_whitespace)
            .map(|cluster| cluster.x + cluster.advance - first.x)
            .fold(0.0, f64::max)
    }

    /// The bounds of `cluster` within this line.
    pub fn cluster_rect(&self, cluster: &ClusterBox) -> Rect {
        Rect::new(
            cluster.x,
            self.top,
            cluster.x + cluster.advance,
            self.top + self.height,
        )
    }
}

/// The result of [`LayoutEngine::layout`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLayout {
    lines: Vec<LineBox>,
}

impl TextLayout {
    /// Create a layout from its lines, top to bottom.
    pub fn new(lines: Vec<LineBox>) -> Self {
        Self { lines }
    }

    /// The lines, top to bottom.
    pub fn lines(&self) -> &[LineBox] {
        &self.lines
    }

    /// Keep at most `max_lines` lines; `0` keeps all of them.
    pub fn truncate_lines(&mut self, max_lines: usize) {
        if max_lines > 0 {
            self.lines.truncate(max_lines);
        }
    }

    /// The width of the widest line and the height of all lines.
    ///
    /// Alignment offsets are not part of the width.
    pub fn size(&self) -> Size {
        let width = self.lines.iter().map(LineBox::width).fold(0.0, f64::max);
        let height = self
            .lines
            .last()
            .map_or(0.0, |line| line.top + line.height);
        Size::new(width, height)
    }

    /// The cluster whose box contains `point`.
    pub fn cluster_at(&self, point: Point) -> Option<&ClusterBox> {
        let line = self
            .lines
            .iter()
            .find(|line| point.y >= line.top && point.y < line.top + line.height)?;
        line.clusters
            .iter()
            .find(|cluster| line.cluster_rect(cluster).contains(point))
    }

    /// The byte index of the character under `point`.
    pub fn index_at(&self, point: Point) -> Option<usize> {
        self.cluster_at(point).map(|cluster| cluster.text_range.start)
    }
}

impl RichText {
    /// The size needed to draw this text within `max`.
    ///
    /// Alignment and line break mode come from the paragraph style at the start of the
    /// text. The result is rounded up to whole points and never exceeds `max`.
    ///
    /// ```
    /// use peniko::kurbo::Size;
    /// use rich_text::{FixedAdvanceEngine, RichText};
    ///
    /// let text = RichText::new("Hello World");
    /// let size = text.size_constrained_to(&mut FixedAdvanceEngine, Size::new(1000.0, 1000.0));
    /// assert_eq!(size, Size::new(66.0, 15.0));
    /// ```
    pub fn size_constrained_to(&self, engine: &mut impl LayoutEngine, max: Size) -> Size {
        let (alignment, line_break_mode) = if self.is_empty() {
            (TextAlignment::Natural, LineBreakMode::WordWrapping)
        } else {
            (self.text_alignment_at(0).0, self.line_break_mode_at(0).0)
        };
        let options = LayoutOptions {
            max_width: Some(max.width),
            alignment,
            line_break_mode,
            ..LayoutOptions::default()
        };
        let size = engine.layout(self, &options).size();
        Size::new(
            size.width.ceil().min(max.width),
            size.height.ceil().min(max.height),
        )
    }
}
