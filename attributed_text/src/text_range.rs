// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error, ErrorKind};

/// A byte range checked against a UTF-8 text.
///
/// The range is ordered, ends within the text and starts and ends on character
/// boundaries. It is not tied to the text afterwards: after an edit, check again.
///
/// ```
/// use attributed_text::TextRange;
///
/// let range = TextRange::new("Hello!", 1..5).unwrap();
/// assert_eq!((range.len(), range.as_range()), (4, 1..5));
/// assert!(TextRange::new("Hello!", 2..9).is_err());
/// assert_eq!(TextRange::clamped(2..9, 6).as_range(), 2..6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Check `range` against `text`.
    pub fn new(text: &str, range: Range<usize>) -> Result<Self, Error> {
        let len = text.len();
        let kind = if range.start > range.end {
            Some(ErrorKind::InvalidRange)
        } else if range.end > len {
            Some(ErrorKind::InvalidBounds)
        } else {
            None
        };
        if let Some(kind) = kind {
            return Err(Error::new(kind, range, len));
        }
        for (index, endpoint) in [(range.start, Endpoint::Start), (range.end, Endpoint::End)] {
            if !text.is_char_boundary(index) {
                return Err(Error::misaligned(text, range, endpoint));
            }
        }
        Ok(Self {
            start: range.start,
            end: range.end,
        })
    }

    /// Intersect `range` with `0..len`.
    ///
    /// Reversed ranges become empty at their start. Character boundaries are not checked.
    pub fn clamped(range: Range<usize>, len: usize) -> Self {
        let start = range.start.min(len);
        Self {
            start,
            end: range.end.clamp(start, len),
        }
    }

    /// The first byte.
    pub const fn start(self) -> usize {
        self.start
    }

    /// One past the last byte.
    pub const fn end(self) -> usize {
        self.end
    }

    /// The number of bytes covered.
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Whether no byte is covered.
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// The range as a `Range<usize>`.
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    fn from(range: TextRange) -> Self {
        range.as_range()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::TextRange;
    use crate::{Endpoint, ErrorKind};

    #[test]
    fn accepts_ranges_inside_the_text() {
        for range in [0..0, 0..6, 6..6, 2..4] {
            assert_eq!(TextRange::new("Hello!", range.clone()).map(TextRange::as_range), Ok(range));
        }
    }

    #[test]
    #[expect(
        clippy::reversed_empty_ranges,
        reason = "Reversed ranges are the case under test."
    )]
    fn rejects_reversed_ranges() {
        let err = TextRange::new("Hello!", 4..3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert_eq!(err.range(), 4..3);
        assert_eq!(err.to_string(), "range 4..3 is reversed");
        assert!(TextRange::clamped(4..3, 6).is_empty());
    }

    #[test]
    fn rejects_ranges_past_the_end() {
        let err = TextRange::new("Hello!", 3..7).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(err.text_len(), 6);
        assert_eq!(err.to_string(), "range 3..7 exceeds text of 6 bytes");
    }

    #[test]
    fn reports_the_split_character() {
        // 'é' takes bytes 0..2.
        let err = TextRange::new("éclair", 1..3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let boundary = err.boundary().unwrap();
        assert_eq!(boundary.endpoint, Endpoint::Start);
        assert_eq!((boundary.index, boundary.char_range.clone()), (1, 0..2));
        assert_eq!(
            err.to_string(),
            "range 1..3 splits the character at 0..2 with its start 1"
        );

        // '€' takes bytes 1..4.
        let err = TextRange::new("a€b", 0..3).unwrap_err();
        let boundary = err.boundary().unwrap();
        assert_eq!(boundary.endpoint, Endpoint::End);
        assert_eq!(boundary.char_range, 1..4);
    }
}
