// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The stroke drawn for an underline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum UnderlineLine {
    /// No underline. This is the default value.
    #[default]
    None,
    /// A single thin line.
    Single,
    /// A single thick line.
    Thick,
    /// Two thin lines.
    Double,
}

/// The dash pattern of an underline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum UnderlinePattern {
    /// A continuous line. This is the default value.
    #[default]
    Solid,
    /// Dots.
    Dot,
    /// Dashes.
    Dash,
    /// Alternating dashes and dots.
    DashDot,
    /// Dashes each followed by two dots.
    DashDotDot,
}

/// Underline decoration: a stroke, a pattern and whether whitespace is skipped.
///
/// ```
/// use text_primitives::{UnderlinePattern, UnderlineStyle};
///
/// let dotted = UnderlineStyle::DOUBLE.with_pattern(UnderlinePattern::Dot);
/// assert!(!dotted.is_none());
/// assert_eq!(UnderlineStyle::default(), UnderlineStyle::NONE);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct UnderlineStyle {
    /// The stroke.
    pub line: UnderlineLine,
    /// The dash pattern of the stroke.
    pub pattern: UnderlinePattern,
    /// Underline words only, skipping whitespace.
    pub by_word: bool,
}

impl UnderlineStyle {
    /// No underline.
    pub const NONE: Self = Self::from_line(UnderlineLine::None);

    /// A solid single underline.
    pub const SINGLE: Self = Self::from_line(UnderlineLine::Single);

    /// A solid thick underline.
    pub const THICK: Self = Self::from_line(UnderlineLine::Thick);

    /// A solid double underline.
    pub const DOUBLE: Self = Self::from_line(UnderlineLine::Double);

    const fn from_line(line: UnderlineLine) -> Self {
        Self {
            line,
            pattern: UnderlinePattern::Solid,
            by_word: false,
        }
    }

    /// Returns `true` if nothing is drawn.
    pub const fn is_none(self) -> bool {
        matches!(self.line, UnderlineLine::None)
    }

    /// Returns a copy using `pattern`.
    #[must_use]
    pub const fn with_pattern(self, pattern: UnderlinePattern) -> Self {
        Self { pattern, ..self }
    }

    /// Returns a copy that only underlines words.
    #[must_use]
    pub const fn by_word(self) -> Self {
        Self {
            by_word: true,
            ..self
        }
    }
}
