// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run-partitioned storage for a single attribute.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::TextRange;

/// A maximal run of a [`RunLayer`], borrowed from the layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<'a, V> {
    /// The byte range covered by the run.
    pub range: Range<usize>,
    /// The value held over the run, or `None` where the attribute is absent.
    pub value: Option<&'a V>,
}

#[derive(Clone, Debug, PartialEq)]
struct Slot<V> {
    end: usize,
    value: Option<V>,
}

/// One attribute tracked as a partition of `0..len` into runs.
///
/// The runs of a layer are contiguous, do not overlap and cover the whole text exactly once.
/// Each run either holds a value or marks the attribute as absent. Adjacent runs never hold
/// equal values: every mutation coalesces neighbours, so the run containing an index is
/// always the maximal run for the value at that index.
///
/// ## Example
///
/// ```
/// use attributed_text::RunLayer;
///
/// let mut layer = RunLayer::new(11);
/// layer.set(0..5, Some("red"));
///
/// let (value, range) = layer.value_at(2);
/// assert_eq!(value, Some(&"red"));
/// assert_eq!(range, 0..5);
///
/// let (value, range) = layer.value_at(7);
/// assert_eq!(value, None);
/// assert_eq!(range, 5..11);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RunLayer<V> {
    slots: Vec<Slot<V>>,
}

impl<V> Default for RunLayer<V> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<V: Clone + PartialEq + Debug> RunLayer<V> {
    /// Create a layer of `len` bytes where the attribute is absent everywhere.
    pub fn new(len: usize) -> Self {
        let mut layer = Self::default();
        if len > 0 {
            layer.slots.push(Slot { end: len, value: None });
        }
        layer
    }

    /// Create a layer of `len` bytes holding `value` everywhere.
    pub fn with_value(len: usize, value: V) -> Self {
        let mut layer = Self::default();
        if len > 0 {
            layer.slots.push(Slot {
                end: len,
                value: Some(value),
            });
        }
        layer
    }

    /// The length of the text this layer covers, in bytes.
    pub fn len(&self) -> usize {
        self.slots.last().map_or(0, |slot| slot.end)
    }

    /// Returns `true` if the layer covers an empty text.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The number of runs in the layer.
    pub fn run_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the attribute is absent over the whole text.
    pub fn is_absent(&self) -> bool {
        self.slots.iter().all(|slot| slot.value.is_none())
    }

    fn slot_index(&self, index: usize) -> usize {
        self.slots.partition_point(|slot| slot.end <= index)
    }

    fn slot_start(&self, slot_index: usize) -> usize {
        if slot_index == 0 {
            0
        } else {
            self.slots[slot_index - 1].end
        }
    }

    /// The value at `index` and the maximal run holding it.
    ///
    /// When the attribute is absent at `index`, the returned range is the maximal run where it
    /// stays absent.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn value_at(&self, index: usize) -> (Option<&V>, Range<usize>) {
        let len = self.len();
        assert!(index < len, "index {index} out of bounds for len {len}");
        let slot_index = self.slot_index(index);
        let slot = &self.slots[slot_index];
        (slot.value.as_ref(), self.slot_start(slot_index)..slot.end)
    }

    /// Iterate over every run of the layer, left to right.
    pub fn runs(&self) -> Runs<'_, V> {
        Runs {
            slots: &self.slots,
            index: 0,
            start: 0,
            clip: 0..self.len(),
        }
    }

    /// Iterate over the runs intersecting `range`, clipped to `range`.
    ///
    /// `range` is clamped to the layer length.
    pub fn runs_in(&self, range: Range<usize>) -> Runs<'_, V> {
        let clip = TextRange::clamped(range, self.len()).as_range();
        let index = self.slot_index(clip.start);
        Runs {
            slots: &self.slots,
            index,
            start: self.slot_start(index.min(self.slots.len())),
            clip,
        }
    }

    /// Set the attribute to `value` over `range`, leaving the rest of the layer untouched.
    ///
    /// Passing `None` makes the attribute absent over `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is reversed or extends past the end of the layer. Callers validate
    /// ranges against the text first.
    pub fn set(&mut self, range: Range<usize>, value: Option<V>) {
        let len = self.len();
        assert!(
            range.start <= range.end && range.end <= len,
            "range {}..{} invalid for len {len}",
            range.start,
            range.end
        );
        if range.is_empty() {
            return;
        }
        let new_len = range.len();
        self.replace(range, new_len, value);
    }

    /// Make the attribute absent over the whole layer.
    pub fn clear(&mut self) {
        let len = self.len();
        self.slots.clear();
        if len > 0 {
            self.slots.push(Slot { end: len, value: None });
        }
    }

    /// Extend the layer with the runs of `other`, as when appending its text.
    pub fn append(&mut self, other: &Self) {
        let offset = self.len();
        for slot in &other.slots {
            push_coalesced(&mut self.slots, offset + slot.end, &slot.value);
        }
    }

    /// Track a text edit replacing the bytes in `range` with `new_len` bytes.
    ///
    /// Runs before the edit keep their boundaries; runs after it shift by the length delta.
    /// Inserted bytes take the value of the first replaced byte or, for a pure insertion, of
    /// the byte before the insertion point (the byte after it at the start of the text).
    ///
    /// # Panics
    ///
    /// Panics if `range` is reversed or extends past the end of the layer.
    pub fn splice(&mut self, range: Range<usize>, new_len: usize) {
        let len = self.len();
        assert!(
            range.start <= range.end && range.end <= len,
            "range {}..{} invalid for len {len}",
            range.start,
            range.end
        );
        let inherited = if !range.is_empty() {
            self.value_at(range.start).0.cloned()
        } else if range.start > 0 {
            self.value_at(range.start - 1).0.cloned()
        } else if len > 0 {
            self.value_at(0).0.cloned()
        } else {
            None
        };
        self.replace(range, new_len, inherited);
    }

    /// Rebuild the slots as prefix, `new_len` bytes of `value`, then the shifted suffix.
    fn replace(&mut self, range: Range<usize>, new_len: usize, value: Option<V>) {
        let old = core::mem::take(&mut self.slots);
        let suffix_start = range.start + new_len;
        let mut start = 0;
        for slot in &old {
            if start < range.start {
                push_coalesced(&mut self.slots, slot.end.min(range.start), &slot.value);
            }
            start = slot.end;
        }
        if new_len > 0 {
            push_coalesced(&mut self.slots, suffix_start, &value);
        }
        for slot in &old {
            if slot.end > range.end {
                push_coalesced(
                    &mut self.slots,
                    slot.end - range.end + suffix_start,
                    &slot.value,
                );
            }
        }
    }
}

fn push_coalesced<V: Clone + PartialEq>(slots: &mut Vec<Slot<V>>, end: usize, value: &Option<V>) {
    if let Some(last) = slots.last_mut() {
        if last.end >= end {
            return;
        }
        if last.value == *value {
            last.end = end;
            return;
        }
    }
    slots.push(Slot {
        end,
        value: value.clone(),
    });
}

/// Iterator over the runs of a [`RunLayer`].
///
/// Returned by [`RunLayer::runs`] and [`RunLayer::runs_in`].
#[derive(Clone, Debug)]
pub struct Runs<'a, V> {
    slots: &'a [Slot<V>],
    index: usize,
    start: usize,
    clip: Range<usize>,
}

impl<'a, V> Iterator for Runs<'a, V> {
    type Item = Run<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.slots.get(self.index)?;
        let start = self.start.max(self.clip.start);
        if start >= self.clip.end {
            return None;
        }
        let end = slot.end.min(self.clip.end);
        self.index += 1;
        self.start = slot.end;
        Some(Run {
            range: start..end,
            value: slot.value.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Run, RunLayer};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::ops::Range;

    fn ranges<V: Clone + PartialEq + core::fmt::Debug>(layer: &RunLayer<V>) -> Vec<Range<usize>> {
        layer.runs().map(|run| run.range).collect()
    }

    #[test]
    fn new_layer_is_one_absent_run() {
        let layer = RunLayer::<u32>::new(8);
        assert_eq!(layer.len(), 8);
        assert!(layer.is_absent());
        assert_eq!(layer.value_at(3), (None, 0..8));
    }

    #[test]
    fn empty_layer_has_no_runs() {
        let layer = RunLayer::<u32>::new(0);
        assert!(layer.is_empty());
        assert_eq!(layer.runs().count(), 0);
        assert_eq!(layer.runs_in(0..0).count(), 0);
    }

    #[test]
    fn set_splits_runs() {
        let mut layer = RunLayer::new(11);
        layer.set(3..6, Some(1));
        assert_eq!(ranges(&layer), vec![0..3, 3..6, 6..11]);
        assert_eq!(layer.value_at(0), (None, 0..3));
        assert_eq!(layer.value_at(5), (Some(&1), 3..6));
        assert_eq!(layer.value_at(6), (None, 6..11));
    }

    #[test]
    fn set_coalesces_equal_neighbours() {
        let mut layer = RunLayer::new(10);
        layer.set(0..4, Some('a'));
        layer.set(6..10, Some('a'));
        assert_eq!(layer.run_count(), 3);
        layer.set(4..6, Some('a'));
        assert_eq!(layer.run_count(), 1);
        assert_eq!(layer.value_at(9), (Some(&'a'), 0..10));
    }

    #[test]
    fn set_is_idempotent() {
        let mut once = RunLayer::new(9);
        once.set(2..7, Some(4));
        let mut twice = once.clone();
        twice.set(2..7, Some(4));
        assert_eq!(once, twice);
    }

    #[test]
    fn set_none_removes() {
        let mut layer = RunLayer::with_value(6, 1);
        layer.set(2..4, None);
        assert_eq!(layer.value_at(3), (None, 2..4));
        layer.set(2..4, Some(1));
        assert_eq!(layer.run_count(), 1);
    }

    #[test]
    fn runs_in_clips_to_range() {
        let mut layer = RunLayer::new(12);
        layer.set(0..4, Some(1));
        layer.set(4..8, Some(2));
        let runs: Vec<_> = layer.runs_in(2..6).collect();
        assert_eq!(
            runs,
            vec![
                Run {
                    range: 2..4,
                    value: Some(&1)
                },
                Run {
                    range: 4..6,
                    value: Some(&2)
                },
            ]
        );
        assert_eq!(layer.runs_in(12..12).count(), 0);
        assert_eq!(layer.runs_in(8..20).count(), 1);
    }

    #[test]
    fn runs_cover_whole_text() {
        let mut layer = RunLayer::new(20);
        layer.set(1..3, Some(1));
        layer.set(5..9, Some(2));
        layer.set(8..15, Some(3));
        let mut expected = 0;
        for run in layer.runs() {
            assert_eq!(run.range.start, expected, "gap or overlap at {expected}");
            assert!(run.range.end > run.range.start, "empty run");
            expected = run.range.end;
        }
        assert_eq!(expected, 20);
    }

    #[test]
    fn splice_insertion_inherits_previous_value() {
        let mut layer = RunLayer::new(10);
        layer.set(0..5, Some(7));
        layer.splice(5..5, 3);
        assert_eq!(layer.len(), 13);
        assert_eq!(layer.value_at(7), (Some(&7), 0..8));
        assert_eq!(layer.value_at(8), (None, 8..13));
    }

    #[test]
    fn splice_at_start_inherits_first_value() {
        let mut layer = RunLayer::new(4);
        layer.set(0..2, Some(1));
        layer.splice(0..0, 2);
        assert_eq!(layer.value_at(0), (Some(&1), 0..4));
    }

    #[test]
    fn splice_deletion_shifts_suffix() {
        let mut layer = RunLayer::new(12);
        layer.set(8..12, Some(2));
        layer.splice(2..6, 0);
        assert_eq!(layer.len(), 8);
        assert_eq!(layer.value_at(5), (Some(&2), 4..8));
        assert_eq!(layer.value_at(0), (None, 0..4));
    }

    #[test]
    fn splice_replacement_takes_first_replaced_value() {
        let mut layer = RunLayer::new(6);
        layer.set(2..4, Some(9));
        layer.splice(2..6, 1);
        assert_eq!(layer.len(), 3);
        assert_eq!(ranges(&layer), vec![0..2, 2..3]);
        assert_eq!(layer.value_at(2), (Some(&9), 2..3));
    }

    #[test]
    fn splice_deleting_everything_empties_layer() {
        let mut layer = RunLayer::with_value(5, 'x');
        layer.splice(0..5, 0);
        assert!(layer.is_empty());
        layer.splice(0..0, 3);
        assert_eq!(layer.value_at(0), (None, 0..3));
    }

    #[test]
    fn append_offsets_and_coalesces() {
        let mut head = RunLayer::new(3);
        head.set(1..3, Some(5));
        let mut tail = RunLayer::new(4);
        tail.set(0..2, Some(5));
        head.append(&tail);
        assert_eq!(head.len(), 7);
        assert_eq!(ranges(&head), vec![0..1, 1..5, 5..7]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn value_at_past_end_panics() {
        let layer = RunLayer::<u8>::new(3);
        let _ = layer.value_at(3);
    }
}
