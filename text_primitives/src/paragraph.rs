// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Horizontal alignment of the lines of a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    /// Align to the leading edge of the writing direction. This is the default value.
    #[default]
    Natural,
    /// Align to the left edge.
    Left,
    /// Center lines.
    Center,
    /// Align to the right edge.
    Right,
    /// Stretch all lines but the last to fill the width.
    Justified,
}

impl TextAlignment {
    /// Parses a CSS `text-align` keyword (or the HTML `align` attribute value).
    ///
    /// ```
    /// use text_primitives::TextAlignment;
    ///
    /// assert_eq!(TextAlignment::parse("center"), Some(TextAlignment::Center));
    /// assert_eq!(TextAlignment::parse(" justify "), Some(TextAlignment::Justified));
    /// assert_eq!(TextAlignment::parse("middle"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "start" => Self::Natural,
            "left" => Self::Left,
            "center" => Self::Center,
            "right" => Self::Right,
            "justify" => Self::Justified,
            _ => return None,
        })
    }
}

/// What happens to text that does not fit the line it is laid out on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LineBreakMode {
    /// Wrap at word boundaries. This is the default value.
    #[default]
    WordWrapping,
    /// Wrap before the first character that does not fit.
    CharWrapping,
    /// Do not wrap; overflowing text is cut off.
    Clipping,
    /// Do not wrap; elide the start of the line.
    TruncatingHead,
    /// Do not wrap; elide the end of the line.
    TruncatingTail,
    /// Do not wrap; elide the middle of the line.
    TruncatingMiddle,
}

impl LineBreakMode {
    /// Returns `true` for the modes that continue text on a new line.
    pub const fn wraps(self) -> bool {
        matches!(self, Self::WordWrapping | Self::CharWrapping)
    }
}

/// Paragraph-level layout attributes.
///
/// Readers hand out copies: change the fields you care about and write the copy back to
/// leave the other fields as they were.
#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphStyle {
    /// Horizontal alignment of the lines.
    pub alignment: TextAlignment,
    /// How lines are broken.
    pub line_break_mode: LineBreakMode,
    /// Extra space between lines, in points.
    pub line_spacing: f32,
    /// Space after the paragraph, in points.
    pub paragraph_spacing: f32,
    /// Space before the paragraph, in points.
    pub paragraph_spacing_before: f32,
    /// Indent of the first line, in points.
    pub first_line_head_indent: f32,
    /// Indent of the lines after the first, in points.
    pub head_indent: f32,
    /// Trailing indent, in points. Negative values are measured from the trailing edge.
    pub tail_indent: f32,
    /// Multiplier applied to the natural line height. `0.0` means no multiplier.
    pub line_height_multiple: f32,
    /// Minimum line height, in points.
    pub minimum_line_height: f32,
    /// Maximum line height, in points. `0.0` means unbounded.
    pub maximum_line_height: f32,
}

impl ParagraphStyle {
    /// The style used where no paragraph style is set.
    pub const DEFAULT: Self = Self {
        alignment: TextAlignment::Natural,
        line_break_mode: LineBreakMode::WordWrapping,
        line_spacing: 0.0,
        paragraph_spacing: 0.0,
        paragraph_spacing_before: 0.0,
        first_line_head_indent: 0.0,
        head_indent: 0.0,
        tail_indent: 0.0,
        line_height_multiple: 0.0,
        minimum_line_height: 0.0,
        maximum_line_height: 0.0,
    };
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::{LineBreakMode, ParagraphStyle, TextAlignment};

    #[test]
    fn alignment_keywords() {
        let keywords = ["start", "left", "center", "right", "justify"];
        assert_eq!(
            keywords.map(TextAlignment::parse),
            [
                Some(TextAlignment::Natural),
                Some(TextAlignment::Left),
                Some(TextAlignment::Center),
                Some(TextAlignment::Right),
                Some(TextAlignment::Justified),
            ]
        );
        assert_eq!(TextAlignment::parse("Center"), None);
    }

    #[test]
    fn only_wrapping_modes_wrap() {
        assert!(LineBreakMode::WordWrapping.wraps());
        assert!(LineBreakMode::CharWrapping.wraps());
        assert!(!LineBreakMode::Clipping.wraps());
        assert!(!LineBreakMode::TruncatingTail.wraps());
        assert_eq!(ParagraphStyle::default(), ParagraphStyle::DEFAULT);
    }
}
