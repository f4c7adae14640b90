// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `rich_text`.
//!
//! - The `util` module holds helpers shared by the test modules.
//! - Like the other suites in this workspace, all tests are compiled into one binary with this
//!   `mod.rs` as the entry point.
//! - Tests are grouped by topic: `attributes` for readers and writers, `runs` for enumeration
//!   and run partition properties, `markup` for import and the markup service, `layout` for
//!   measurement and hit testing, `engine` for the Parley engine and font catalog over a
//!   font generated in memory.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod layout;
mod util;
