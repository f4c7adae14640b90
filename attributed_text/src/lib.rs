// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Text provides run-partitioned attribute storage for UTF-8 text.
//!
//! A [`RunLayer`] tracks one attribute over a text as a partition of `0..len` into maximal
//! runs, each holding a value or marking the attribute as absent. Layers follow text edits
//! through [`RunLayer::splice`], so callers can keep several layers (font, color, …) in sync
//! with a single string. [`TextRange`] validates byte ranges once against the text.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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

extern crate alloc;

mod error;
mod run_layer;
mod text_range;

pub use crate::error::{CharBoundary, Endpoint, Error, ErrorKind};
pub use crate::run_layer::{Run, RunLayer, Runs};
pub use crate::text_range::TextRange;
