// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

/// A byte range that does not fit the text it was checked against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    range: Range<usize>,
    text_len: usize,
    boundary: Option<CharBoundary>,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, range: Range<usize>, text_len: usize) -> Self {
        Self {
            kind,
            range,
            text_len,
            boundary: None,
        }
    }

    pub(crate) fn misaligned(text: &str, range: Range<usize>, endpoint: Endpoint) -> Self {
        let index = match endpoint {
            Endpoint::Start => range.start,
            Endpoint::End => range.end,
        };
        Self {
            kind: ErrorKind::NotOnCharBoundary,
            text_len: text.len(),
            boundary: Some(CharBoundary {
                endpoint,
                index,
                char_range: char_range_around(text, index),
            }),
            range,
        }
    }

    /// What was wrong with the range.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The range as the caller passed it.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The length of the text in bytes when the range was checked.
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// The character split by the range, for [`ErrorKind::NotOnCharBoundary`].
    pub fn boundary(&self) -> Option<&CharBoundary> {
        self.boundary.as_ref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Range { start, end } = self.range;
        match (&self.kind, &self.boundary) {
            (ErrorKind::InvalidRange, _) => write!(f, "range {start}..{end} is reversed"),
            (ErrorKind::InvalidBounds, _) => {
                write!(f, "range {start}..{end} exceeds text of {} bytes", self.text_len)
            }
            (ErrorKind::NotOnCharBoundary, Some(boundary)) => write!(
                f,
                "range {start}..{end} splits the character at {}..{} with its {} {}",
                boundary.char_range.start,
                boundary.char_range.end,
                boundary.endpoint,
                boundary.index,
            ),
            (ErrorKind::NotOnCharBoundary, None) => {
                write!(f, "range {start}..{end} splits a character")
            }
        }
    }
}

impl core::error::Error for Error {}

/// The category of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// `start > end`.
    InvalidRange,
    /// The range ends past the end of the text.
    InvalidBounds,
    /// An endpoint falls inside a multi-byte character.
    NotOnCharBoundary,
}

/// One end of a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The inclusive start.
    Start,
    /// The exclusive end.
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// Where a range endpoint split a character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharBoundary {
    /// The misplaced endpoint.
    pub endpoint: Endpoint,
    /// Its byte index.
    pub index: usize,
    /// The bytes of the character it falls into.
    pub char_range: Range<usize>,
}

fn char_range_around(text: &str, index: usize) -> Range<usize> {
    text.char_indices()
        .map(|(start, c)| start..start + c.len_utf8())
        .find(|range| range.contains(&index))
        .unwrap_or(index..index)
}
