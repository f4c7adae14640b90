// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::{ControlFlow, Range};

use attributed_text::{Runs, TextRange};

use crate::attribute::{attr, Attribute, AttributeKind, AttributeLayers, AttributeValue};
use crate::Error;

/// A UTF-8 string with one run-partitioned layer per [`AttributeKind`].
///
/// Indices are byte offsets into the string. Point queries such as
/// [`value_at`](Self::value_at) return the value at an index together with its effective
/// range, the maximal run around the index holding that exact value. Writers take validated
/// ranges and leave every other attribute kind untouched.
///
/// Editing the string with [`replace_range`](Self::replace_range) and friends keeps every
/// layer in sync: runs after the edit shift by the length delta.
///
/// ```
/// use peniko::color::palette::css;
/// use rich_text::RichText;
///
/// let mut text = RichText::new("Hello World");
/// text.set_text_color_in(css::RED, 0..5).unwrap();
///
/// assert_eq!(text.text_color_at(2), (Some(css::RED), 0..5));
/// assert_eq!(text.text_color_at(7), (None, 5..11));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RichText {
    text: String,
    layers: AttributeLayers,
}

macro_rules! with_attribute {
    ($kind:expr, $marker:ident => $body:expr) => {
        match $kind {
            AttributeKind::Font => {
                type $marker = attr::Font;
                $body
            }
            AttributeKind::ForegroundColor => {
                type $marker = attr::ForegroundColor;
                $body
            }
            AttributeKind::BackgroundColor => {
                type $marker = attr::BackgroundColor;
                $body
            }
            AttributeKind::UnderlineStyle => {
                type $marker = attr::UnderlineStyle;
                $body
            }
            AttributeKind::UnderlineColor => {
                type $marker = attr::UnderlineColor;
                $body
            }
            AttributeKind::Link => {
                type $marker = attr::Link;
                $body
            }
            AttributeKind::Kerning => {
                type $marker = attr::Kerning;
                $body
            }
            AttributeKind::BaselineOffset => {
                type $marker = attr::BaselineOffset;
                $body
            }
            AttributeKind::ParagraphStyle => {
                type $marker = attr::ParagraphStyle;
                $body
            }
        }
    };
}

impl RichText {
    /// Create a rich text with no attributes.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let layers = AttributeLayers::new(text.len());
        Self { text, layers }
    }

    /// Create a rich text with no attributes from format arguments.
    ///
    /// See also the [`rich_text!`](crate::rich_text!) macro.
    pub fn from_fmt(args: fmt::Arguments<'_>) -> Self {
        Self::new(std::fmt::format(args))
    }

    /// The underlying string.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The attribute layers, for direct read access.
    pub fn layers(&self) -> &AttributeLayers {
        &self.layers
    }

    /// Split into the string and its attribute layers.
    pub fn into_parts(self) -> (String, AttributeLayers) {
        (self.text, self.layers)
    }

    pub(crate) fn full_range(&self) -> Range<usize> {
        0..self.text.len()
    }

    pub(crate) fn validate(&self, range: Range<usize>) -> Result<Range<usize>, Error> {
        Ok(TextRange::new(&self.text, range)?.as_range())
    }

    // --- Editing ---

    /// Replace the bytes in `range` with `replacement`.
    ///
    /// Runs after `range` shift by the length delta. The replacement takes the attributes
    /// of the first replaced byte or, for an insertion, of the byte before it.
    pub fn replace_range(&mut self, range: Range<usize>, replacement: &str) -> Result<(), Error> {
        let range = self.validate(range)?;
        self.text.replace_range(range.clone(), replacement);
        self.layers.splice(range, replacement.len());
        Ok(())
    }

    /// Insert `string` at byte `index`.
    pub fn insert_str(&mut self, index: usize, string: &str) -> Result<(), Error> {
        self.replace_range(index..index, string)
    }

    /// Remove the bytes in `range`.
    pub fn delete_range(&mut self, range: Range<usize>) -> Result<(), Error> {
        self.replace_range(range, "")
    }

    /// Append `string`, extending the attributes of the last byte over it.
    pub fn push_str(&mut self, string: &str) {
        let end = self.text.len();
        self.text.push_str(string);
        self.layers.splice(end..end, string.len());
    }

    /// Append `other` together with its attributes.
    pub fn append(&mut self, other: &Self) {
        self.text.push_str(&other.text);
        self.layers.append(&other.layers);
    }

    // --- Generic access ---

    /// The value of attribute `A` at `index` and its effective range.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn value_at<A: Attribute>(&self, index: usize) -> (Option<&A::Value>, Range<usize>) {
        A::layer(&self.layers).value_at(index)
    }

    /// Iterate over every run of attribute `A`, absent runs included.
    pub fn runs<A: Attribute>(&self) -> Runs<'_, A::Value> {
        A::layer(&self.layers).runs()
    }

    /// Iterate over the runs of attribute `A` clipped to `range`.
    ///
    /// `range` is clamped to the text.
    pub fn runs_in<A: Attribute>(&self, range: Range<usize>) -> Runs<'_, A::Value> {
        A::layer(&self.layers).runs_in(range)
    }

    /// Visit the runs of attribute `A` within `range`, left to right.
    ///
    /// Runs where the attribute is absent are only visited when `include_absent` is set.
    /// Returning [`ControlFlow::Break`] stops the walk. `range` is clamped to the text.
    pub fn for_each_run<A, F>(&self, range: Range<usize>, include_absent: bool, mut visit: F)
    where
        A: Attribute,
        F: FnMut(Option<&A::Value>, Range<usize>) -> ControlFlow<()>,
    {
        for run in self.runs_in::<A>(range) {
            if run.value.is_none() && !include_absent {
                continue;
            }
            if visit(run.value, run.range).is_break() {
                break;
            }
        }
    }

    /// Visit the runs of attribute `A` within `range` with mutable access to the text.
    ///
    /// The callback receives a copy of the run's value and may edit the text strictly
    /// inside the visited run, including changes of length. The walk then resumes right
    /// after the edited run, with the end of `range` shifted by the same length delta.
    /// Edits outside the visited run are not detected and leave the walk in an unspecified
    /// position.
    ///
    /// ```
    /// use core::ops::ControlFlow;
    /// use peniko::color::palette::css;
    /// use rich_text::{attr, RichText};
    ///
    /// let mut text = RichText::new("ab cd ef");
    /// text.set_text_color_in(css::RED, 3..5).unwrap();
    /// text.for_each_run_mut::<attr::ForegroundColor, _>(0..8, false, |text, _, run| {
    ///     text.replace_range(run, "XYZW").unwrap();
    ///     ControlFlow::Continue(())
    /// });
    /// assert_eq!(text.as_str(), "ab XYZW ef");
    /// assert_eq!(text.text_color_at(4), (Some(css::RED), 3..7));
    /// ```
    pub fn for_each_run_mut<A, F>(
        &mut self,
        range: Range<usize>,
        include_absent: bool,
        mut visit: F,
    )
    where
        A: Attribute,
        F: FnMut(&mut Self, Option<A::Value>, Range<usize>) -> ControlFlow<()>,
    {
        let range = TextRange::clamped(range, self.len());
        let (mut pos, mut end) = (range.start(), range.end());
        while pos < end {
            let (value, run) = self.value_at::<A>(pos);
            let value = value.cloned();
            let run_end = run.end.min(end);
            if value.is_none() && !include_absent {
                pos = run_end;
                continue;
            }
            let before = self.len();
            let flow = visit(self, value, pos..run_end);
            let delta = self.len() as isize - before as isize;
            pos = run_end.saturating_add_signed(delta).min(self.len());
            end = end.saturating_add_signed(delta).min(self.len());
            if flow.is_break() {
                break;
            }
        }
    }

    /// Set attribute `A` to `value` over the whole text.
    pub fn set<A: Attribute>(&mut self, value: A::Value) {
        let range = self.full_range();
        self.apply::<A>(range, Some(value));
    }

    /// Set attribute `A` to `value` over `range`.
    ///
    /// Setting the value already present is a no-op.
    pub fn set_in<A: Attribute>(
        &mut self,
        value: A::Value,
        range: Range<usize>,
    ) -> Result<(), Error> {
        let range = self.validate(range)?;
        self.apply::<A>(range, Some(value));
        Ok(())
    }

    /// Make attribute `A` absent over the whole text.
    pub fn remove<A: Attribute>(&mut self) {
        A::layer_mut(&mut self.layers).clear();
    }

    /// Make attribute `A` absent over `range`.
    pub fn remove_in<A: Attribute>(&mut self, range: Range<usize>) -> Result<(), Error> {
        let range = self.validate(range)?;
        self.apply::<A>(range, None);
        Ok(())
    }

    /// Write `value` over an already validated `range`.
    pub(crate) fn apply<A: Attribute>(&mut self, range: Range<usize>, value: Option<A::Value>) {
        A::layer_mut(&mut self.layers).set(range, value);
    }

    // --- Dynamic access ---

    /// The value of attribute `kind` at `index` and its effective range.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn attribute_at(
        &self,
        kind: AttributeKind,
        index: usize,
    ) -> (Option<AttributeValue>, Range<usize>) {
        with_attribute!(kind, A => {
            let (value, range) = self.value_at::<A>(index);
            (value.cloned().map(A::into_value), range)
        })
    }

    /// The kinds of attribute holding a value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn attribute_kinds_at(&self, index: usize) -> impl Iterator<Item = AttributeKind> + '_ {
        assert!(
            index < self.len(),
            "index {index} out of bounds for len {}",
            self.len()
        );
        AttributeKind::ALL
            .into_iter()
            .filter(move |kind| self.attribute_at(*kind, index).0.is_some())
    }

    /// Visit the runs of attribute `kind` within `range`, left to right.
    ///
    /// See [`for_each_run`](Self::for_each_run).
    pub fn for_each_attribute_run<F>(
        &self,
        kind: AttributeKind,
        range: Range<usize>,
        include_absent: bool,
        mut visit: F,
    ) where
        F: FnMut(Option<AttributeValue>, Range<usize>) -> ControlFlow<()>,
    {
        with_attribute!(kind, A => {
            self.for_each_run::<A, _>(range, include_absent, |value, run| {
                visit(value.cloned().map(A::into_value), run)
            });
        });
    }

    /// Set an attribute over `range`; the kind is taken from `value`.
    pub fn set_attribute(
        &mut self,
        value: AttributeValue,
        range: Range<usize>,
    ) -> Result<(), Error> {
        match value {
            AttributeValue::Font(v) => self.set_in::<attr::Font>(v, range),
            AttributeValue::ForegroundColor(v) => self.set_in::<attr::ForegroundColor>(v, range),
            AttributeValue::BackgroundColor(v) => self.set_in::<attr::BackgroundColor>(v, range),
            AttributeValue::UnderlineStyle(v) => self.set_in::<attr::UnderlineStyle>(v, range),
            AttributeValue::UnderlineColor(v) => self.set_in::<attr::UnderlineColor>(v, range),
            AttributeValue::Link(v) => self.set_in::<attr::Link>(v, range),
            AttributeValue::Kerning(v) => self.set_in::<attr::Kerning>(v, range),
            AttributeValue::BaselineOffset(v) => self.set_in::<attr::BaselineOffset>(v, range),
            AttributeValue::ParagraphStyle(v) => self.set_in::<attr::ParagraphStyle>(v, range),
        }
    }

    /// Make attribute `kind` absent over `range`.
    pub fn remove_attribute(
        &mut self,
        kind: AttributeKind,
        range: Range<usize>,
    ) -> Result<(), Error> {
        with_attribute!(kind, A => self.remove_in::<A>(range))
    }
}

impl From<&RichText> for RichText {
    fn from(text: &Self) -> Self {
        text.clone()
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
