// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich Text is an attributed string with typed, run-based attribute access.
//!
//! A [`RichText`] is a UTF-8 string plus one attribute layer per [`AttributeKind`]: font,
//! foreground and background color, underline style and color, link, kerning, baseline
//! offset and paragraph style. Each layer partitions the text into maximal runs, so every
//! point query also returns the effective range of its value.
//!
//! On top of the storage this crate provides:
//!
//! - typed readers and writers for the common attributes, including font trait toggling,
//!   superscript and subscript, and partial paragraph style edits;
//! - run enumeration, with a mutable variant allowing length-changing edits of each run;
//! - [`Font`] values and a [`FontResolver`] mapping family names and PostScript names onto a
//!   [`FontCatalog`];
//! - import of a small HTML-like markup subset, inline with [`RichText::from_markup`] or on
//!   a dedicated thread with [`MarkupService`];
//! - measurement with [`RichText::size_constrained_to`] and hit testing with
//!   [`Label::character_index_at`], through a [`LayoutEngine`].
//!
//! ## Features
//!
//! - `parley` (enabled by default): [`ParleyEngine`] and [`SystemFontCatalog`].
//! - `system`: Discover system fonts in the Parley font collection.
//!
//! ## Example
//!
//! ```
//! use peniko::color::palette::css;
//! use rich_text::{rich_text, RichText};
//!
//! let mut text = rich_text!("Hello {}", "World");
//! text.set_text_color_in(css::RED, 0..5).unwrap();
//! text.set_font_bold_in(true, 6..11).unwrap();
//!
//! assert_eq!(text.text_color_at(2), (Some(css::RED), 0..5));
//! assert_eq!(text.is_font_bold_at(8), (true, 6..11));
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod attribute;
mod error;
mod font;
mod label;
mod layout;
mod markup;
mod read;
mod resolver;
mod service;
mod text;
mod write;

pub use attribute::{attr, Attribute, AttributeKind, AttributeLayers, AttributeValue};
pub use error::Error;
pub use peniko::Color;
pub use font::{Font, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
pub use label::Label;
pub use layout::{
    ClusterBox, FixedAdvanceEngine, LayoutEngine, LayoutOptions, LineBox, TextLayout,
};
#[cfg(feature = "parley")]
pub use layout::ParleyEngine;
pub use markup::{import_markup, MarkupOptions};
#[cfg(feature = "parley")]
pub use resolver::SystemFontCatalog;
pub use resolver::{FontCatalog, FontResolver, StaticFontCatalog};
pub use service::{MarkupService, MarkupServiceOptions};
pub use text::RichText;

/// Create a [`RichText`] without attributes from format arguments.
///
/// ```
/// let text = rich_text::rich_text!("{} items", 3);
/// assert_eq!(text.as_str(), "3 items");
/// ```
#[macro_export]
macro_rules! rich_text {
    ($($arg:tt)*) => {
        $crate::RichText::from_fmt(::core::format_args!($($arg)*))
    };
}
