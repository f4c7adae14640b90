// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions shared across tests.

use std::sync::Once;

use rich_text::{AttributeKind, RichText};

#[cfg(feature = "parley")]
pub(crate) mod font;

/// Install a test subscriber so `tracing` output shows up for failing tests.
pub(crate) fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Assert that every layer of `text` partitions `0..len` into maximal runs.
pub(crate) fn assert_run_cover(text: &RichText) {
    for kind in AttributeKind::ALL {
        let mut runs = Vec::new();
        text.for_each_attribute_run(kind, 0..text.len(), true, |value, range| {
            runs.push((value, range));
            core::ops::ControlFlow::Continue(())
        });
        let mut expected = 0;
        for (index, (value, range)) in runs.iter().enumerate() {
            assert_eq!(range.start, expected, "{kind:?}: gap or overlap at {expected}");
            assert!(range.end > range.start, "{kind:?}: empty run at {expected}");
            if index > 0 {
                let previous = &runs[index - 1].0;
                assert_ne!(previous, value, "{kind:?}: uncoalesced runs at {expected}");
            }
            expected = range.end;
        }
        assert_eq!(expected, text.len(), "{kind:?}: runs stop short of the end");
    }
}

/// Assert that `attribute_at` reports the enclosing run at every index, for every kind.
pub(crate) fn assert_self_consistent(text: &RichText) {
    for kind in AttributeKind::ALL {
        for index in 0..text.len() {
            let (value, range) = text.attribute_at(kind, index);
            assert!(range.contains(&index), "{kind:?}: {range:?} misses {index}");
            for other in range.clone() {
                assert_eq!(
                    text.attribute_at(kind, other),
                    (value.clone(), range.clone()),
                    "{kind:?}: index {other} disagrees with index {index}"
                );
            }
            if range.start > 0 {
                let before = text.attribute_at(kind, range.start - 1).0;
                assert_ne!(before, value, "{kind:?}: run not maximal");
            }
            if range.end < text.len() {
                let after = text.attribute_at(kind, range.end).0;
                assert_ne!(after, value, "{kind:?}: run not maximal");
            }
        }
    }
}
