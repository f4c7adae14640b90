// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typographic property types for rich text.
//!
//! This crate is a small, `no_std` vocabulary layer shared by the attribute storage and the
//! rich-text API: font symbolic traits, paragraph styles, and underline styles.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use text_primitives::{ParagraphStyle, SymbolicTraits, TextAlignment};
//!
//! let traits = SymbolicTraits::BOLD | SymbolicTraits::ITALIC;
//! assert!(traits.is_bold());
//!
//! let mut style = ParagraphStyle::default();
//! style.alignment = TextAlignment::Center;
//! assert_eq!(style.line_break_mode, ParagraphStyle::DEFAULT.line_break_mode);
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
#![no_std]

mod paragraph;
mod traits;
mod underline;

pub use paragraph::{LineBreakMode, ParagraphStyle, TextAlignment};
pub use traits::SymbolicTraits;
pub use underline::{UnderlineLine, UnderlinePattern, UnderlineStyle};
