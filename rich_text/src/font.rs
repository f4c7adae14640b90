// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::sync::Arc;

use text_primitives::SymbolicTraits;

/// The family used when no font is set or a family cannot be resolved.
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";

/// The size used when no font is set, in points.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// A font request: a family name, a size in points and a set of symbolic traits.
///
/// A `Font` does not own font data. It names a face the layout engine resolves through its
/// own font collection. Use [`FontResolver`](crate::FontResolver) to map arbitrary family
/// names onto families known to a [`FontCatalog`](crate::FontCatalog).
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    family: Arc<str>,
    size: f32,
    traits: SymbolicTraits,
}

impl Font {
    /// Create a font without consulting any catalog.
    pub fn new(family: impl Into<Arc<str>>, size: f32, traits: SymbolicTraits) -> Self {
        Self {
            family: family.into(),
            size,
            traits,
        }
    }

    /// Helvetica at 12 points, without traits.
    pub fn default_font() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, SymbolicTraits::empty())
    }

    /// The family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The size in points.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The symbolic traits.
    pub fn traits(&self) -> SymbolicTraits {
        self.traits
    }

    /// Returns `true` if the font carries the bold trait.
    pub fn is_bold(&self) -> bool {
        self.traits.is_bold()
    }

    /// Returns `true` if the font carries the italic trait.
    pub fn is_italic(&self) -> bool {
        self.traits.is_italic()
    }

    /// The same family and size with `traits` replacing the current traits.
    #[must_use]
    pub fn with_traits(&self, traits: SymbolicTraits) -> Self {
        Self {
            family: self.family.clone(),
            size: self.size,
            traits,
        }
    }

    /// The same family and traits at `size`.
    #[must_use]
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            family: self.family.clone(),
            size,
            traits: self.traits,
        }
    }

    /// The PostScript name derived from family and traits.
    ///
    /// Spaces are removed from the family and a `-Bold`, `-Italic` or `-BoldItalic` suffix
    /// is appended for the corresponding traits.
    ///
    /// ```
    /// use rich_text::Font;
    /// use text_primitives::SymbolicTraits;
    ///
    /// let font = Font::new("Times New Roman", 12.0, SymbolicTraits::BOLD);
    /// assert_eq!(font.postscript_name(), "TimesNewRoman-Bold");
    /// ```
    pub fn postscript_name(&self) -> String {
        let mut name: String = self.family.chars().filter(|c| *c != ' ').collect();
        match (self.is_bold(), self.is_italic()) {
            (false, false) => {}
            (true, false) => name.push_str("-Bold"),
            (false, true) => name.push_str("-Italic"),
            (true, true) => name.push_str("-BoldItalic"),
        }
        name
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::default_font()
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt", self.postscript_name(), self.size)
    }
}

/// Split a PostScript name into its family part and the traits named by its style suffix.
///
/// Unrecognized suffixes are kept as part of the family.
pub(crate) fn split_postscript_name(name: &str) -> (&str, SymbolicTraits) {
    let Some((family, style)) = name.rsplit_once('-') else {
        return (name, SymbolicTraits::empty());
    };
    let traits = match style {
        "Regular" | "Roman" => SymbolicTraits::empty(),
        "Bold" => SymbolicTraits::BOLD,
        "Italic" | "Oblique" => SymbolicTraits::ITALIC,
        "BoldItalic" | "BoldOblique" => SymbolicTraits::BOLD | SymbolicTraits::ITALIC,
        _ => return (name, SymbolicTraits::empty()),
    };
    (family, traits)
}
