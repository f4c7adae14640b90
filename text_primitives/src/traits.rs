// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;

bitflags! {
    /// Stylistic variants of a font, as a bitmask.
    ///
    /// The bit assignments follow the values font descriptors commonly use, so masks can be
    /// exchanged with platform font APIs unchanged.
    ///
    /// ```
    /// use text_primitives::SymbolicTraits;
    ///
    /// let traits = SymbolicTraits::BOLD | SymbolicTraits::CONDENSED;
    /// assert!(traits.is_bold());
    /// assert!(!traits.is_italic());
    /// assert_eq!(traits.with(SymbolicTraits::BOLD, false), SymbolicTraits::CONDENSED);
    /// ```
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SymbolicTraits: u32 {
        /// Italic or oblique variant.
        const ITALIC = 1 << 0;
        /// Bold variant.
        const BOLD = 1 << 1;
        /// Expanded (wider than normal) variant.
        const EXPANDED = 1 << 5;
        /// Condensed (narrower than normal) variant.
        const CONDENSED = 1 << 6;
        /// All glyphs share the same advance.
        const MONO_SPACE = 1 << 10;
        /// Vertical writing variant.
        const VERTICAL = 1 << 11;
        /// Variant tuned for user interface text.
        const UI_OPTIMIZED = 1 << 12;
        /// Tighter than normal line spacing.
        const TIGHT_LEADING = 1 << 15;
        /// Looser than normal line spacing.
        const LOOSE_LEADING = 1 << 16;
    }
}

impl SymbolicTraits {
    /// Returns a copy with the traits of `other` set or cleared.
    #[must_use]
    pub const fn with(self, other: Self, enabled: bool) -> Self {
        if enabled {
            self.union(other)
        } else {
            self.difference(other)
        }
    }

    /// Shorthand for `contains(SymbolicTraits::BOLD)`.
    pub const fn is_bold(self) -> bool {
        self.contains(Self::BOLD)
    }

    /// Shorthand for `contains(SymbolicTraits::ITALIC)`.
    pub const fn is_italic(self) -> bool {
        self.contains(Self::ITALIC)
    }
}
