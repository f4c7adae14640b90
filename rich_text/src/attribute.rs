// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute kinds and their storage layers.

use core::fmt::Debug;

use attributed_text::RunLayer;
use peniko::Color;
use text_primitives::{ParagraphStyle, UnderlineStyle};
use url::Url;

use crate::Font;

/// The attribute layers of a [`RichText`](crate::RichText).
///
/// Every layer covers the whole text. Obtained through
/// [`RichText::layers`](crate::RichText::layers).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeLayers {
    pub(crate) font: RunLayer<Font>,
    pub(crate) foreground_color: RunLayer<Color>,
    pub(crate) background_color: RunLayer<Color>,
    pub(crate) underline_style: RunLayer<UnderlineStyle>,
    pub(crate) underline_color: RunLayer<Color>,
    pub(crate) link: RunLayer<Url>,
    pub(crate) kerning: RunLayer<f32>,
    pub(crate) baseline_offset: RunLayer<f32>,
    pub(crate) paragraph_style: RunLayer<ParagraphStyle>,
}

impl AttributeLayers {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            font: RunLayer::new(len),
            foreground_color: RunLayer::new(len),
            background_color: RunLayer::new(len),
            underline_style: RunLayer::new(len),
            underline_color: RunLayer::new(len),
            link: RunLayer::new(len),
            kerning: RunLayer::new(len),
            baseline_offset: RunLayer::new(len),
            paragraph_style: RunLayer::new(len),
        }
    }

    /// Borrow the layer of attribute `A`.
    pub fn get<A: Attribute>(&self) -> &RunLayer<A::Value> {
        A::layer(self)
    }

    pub(crate) fn splice(&mut self, range: core::ops::Range<usize>, new_len: usize) {
        self.font.splice(range.clone(), new_len);
        self.foreground_color.splice(range.clone(), new_len);
        self.background_color.splice(range.clone(), new_len);
        self.underline_style.splice(range.clone(), new_len);
        self.underline_color.splice(range.clone(), new_len);
        self.link.splice(range.clone(), new_len);
        self.kerning.splice(range.clone(), new_len);
        self.baseline_offset.splice(range.clone(), new_len);
        self.paragraph_style.splice(range, new_len);
    }

    pub(crate) fn append(&mut self, other: &Self) {
        self.font.append(&other.font);
        self.foreground_color.append(&other.foreground_color);
        self.background_color.append(&other.background_color);
        self.underline_style.append(&other.underline_style);
        self.underline_color.append(&other.underline_color);
        self.link.append(&other.link);
        self.kerning.append(&other.kerning);
        self.baseline_offset.append(&other.baseline_offset);
        self.paragraph_style.append(&other.paragraph_style);
    }
}

/// Names one attribute layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// The font of the text.
    Font,
    /// The color of the glyphs.
    ForegroundColor,
    /// The color behind the glyphs.
    BackgroundColor,
    /// The underline decoration.
    UnderlineStyle,
    /// The color of the underline.
    UnderlineColor,
    /// A hyperlink target.
    Link,
    /// Extra spacing between characters, in points.
    Kerning,
    /// Vertical offset from the baseline, in points.
    BaselineOffset,
    /// Paragraph-level layout attributes.
    ParagraphStyle,
}

impl AttributeKind {
    /// Every attribute kind, in storage order.
    pub const ALL: [Self; 9] = [
        Self::Font,
        Self::ForegroundColor,
        Self::BackgroundColor,
        Self::UnderlineStyle,
        Self::UnderlineColor,
        Self::Link,
        Self::Kerning,
        Self::BaselineOffset,
        Self::ParagraphStyle,
    ];
}

/// A value of one attribute kind.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// See [`AttributeKind::Font`].
    Font(Font),
    /// See [`AttributeKind::ForegroundColor`].
    ForegroundColor(Color),
    /// See [`AttributeKind::BackgroundColor`].
    BackgroundColor(Color),
    /// See [`AttributeKind::UnderlineStyle`].
    UnderlineStyle(UnderlineStyle),
    /// See [`AttributeKind::UnderlineColor`].
    UnderlineColor(Color),
    /// See [`AttributeKind::Link`].
    Link(Url),
    /// See [`AttributeKind::Kerning`].
    Kerning(f32),
    /// See [`AttributeKind::BaselineOffset`].
    BaselineOffset(f32),
    /// See [`AttributeKind::ParagraphStyle`].
    ParagraphStyle(ParagraphStyle),
}

impl AttributeValue {
    /// The kind of this value.
    pub fn kind(&self) -> AttributeKind {
        match self {
            Self::Font(_) => AttributeKind::Font,
            Self::ForegroundColor(_) => AttributeKind::ForegroundColor,
            Self::BackgroundColor(_) => AttributeKind::BackgroundColor,
            Self::UnderlineStyle(_) => AttributeKind::UnderlineStyle,
            Self::UnderlineColor(_) => AttributeKind::UnderlineColor,
            Self::Link(_) => AttributeKind::Link,
            Self::Kerning(_) => AttributeKind::Kerning,
            Self::BaselineOffset(_) => AttributeKind::BaselineOffset,
            Self::ParagraphStyle(_) => AttributeKind::ParagraphStyle,
        }
    }
}

/// Statically typed access to one attribute layer.
///
/// Implemented by the marker types in [`attr`]; used as the type parameter of the generic
/// [`RichText`](crate::RichText) accessors such as
/// [`value_at`](crate::RichText::value_at) and [`set_in`](crate::RichText::set_in).
pub trait Attribute {
    /// The value stored in the layer.
    type Value: Clone + PartialEq + Debug;

    /// The dynamic name of the layer.
    const KIND: AttributeKind;

    /// Borrow the layer.
    fn layer(layers: &AttributeLayers) -> &RunLayer<Self::Value>;

    /// Mutably borrow the layer.
    fn layer_mut(layers: &mut AttributeLayers) -> &mut RunLayer<Self::Value>;

    /// Wrap a value into the dynamic representation.
    fn into_value(value: Self::Value) -> AttributeValue;
}

/// Marker types naming each attribute layer.
///
/// ```
/// use peniko::color::palette::css;
/// use rich_text::{attr, RichText};
///
/// let mut text = RichText::new("Hello");
/// text.set::<attr::ForegroundColor>(css::RED);
/// assert_eq!(text.value_at::<attr::ForegroundColor>(0).0, Some(&css::RED));
/// ```
pub mod attr {
    use super::{Attribute, AttributeKind, AttributeLayers, AttributeValue};
    use attributed_text::RunLayer;

    macro_rules! attributes {
        ($($(#[$meta:meta])* $name:ident($value:ty) => $field:ident;)*) => {
            $(
                $(#[$meta])*
                #[derive(Clone, Copy, Debug, PartialEq, Eq)]
                pub struct $name;

                impl Attribute for $name {
                    type Value = $value;
                    const KIND: AttributeKind = AttributeKind::$name;

                    fn layer(layers: &AttributeLayers) -> &RunLayer<$value> {
                        &layers.$field
                    }

                    fn layer_mut(layers: &mut AttributeLayers) -> &mut RunLayer<$value> {
                        &mut layers.$field
                    }

                    fn into_value(value: $value) -> AttributeValue {
                        AttributeValue::$name(value)
                    }
                }
            )*
        };
    }

    attributes! {
        /// The font layer.
        Font(crate::Font) => font;
        /// The foreground color layer.
        ForegroundColor(peniko::Color) => foreground_color;
        /// The background color layer.
        BackgroundColor(peniko::Color) => background_color;
        /// The underline style layer.
        UnderlineStyle(text_primitives::UnderlineStyle) => underline_style;
        /// The underline color layer.
        UnderlineColor(peniko::Color) => underline_color;
        /// The hyperlink layer.
        Link(url::Url) => link;
        /// The kerning layer.
        Kerning(f32) => kerning;
        /// The baseline offset layer.
        BaselineOffset(f32) => baseline_offset;
        /// The paragraph style layer.
        ParagraphStyle(text_primitives::ParagraphStyle) => paragraph_style;
    }
}
