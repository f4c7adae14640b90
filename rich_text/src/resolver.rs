// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping family names and traits onto fonts.

use std::sync::Arc;

use text_primitives::SymbolicTraits;

use crate::font::split_postscript_name;
use crate::{Font, DEFAULT_FONT_FAMILY};

/// A source of font family names.
///
/// The resolver only needs to know whether a family exists and what its canonical name is;
/// loading faces is left to the layout engine.
pub trait FontCatalog {
    /// The canonical name of the family called `name`, compared case-insensitively.
    fn find_family(&mut self, name: &str) -> Option<Arc<str>>;

    /// Every family name known to the catalog.
    fn family_names(&mut self) -> Vec<Arc<str>>;
}

/// A [`FontCatalog`] over a fixed list of family names.
#[derive(Clone, Debug, Default)]
pub struct StaticFontCatalog {
    families: Vec<Arc<str>>,
}

impl StaticFontCatalog {
    /// Create a catalog holding `families`.
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        Self {
            families: families.into_iter().map(Into::into).collect(),
        }
    }

    /// A catalog of widely installed families, including the default family.
    pub fn standard() -> Self {
        Self::new([
            DEFAULT_FONT_FAMILY,
            "Helvetica Neue",
            "Arial",
            "Times",
            "Times New Roman",
            "Courier",
            "Courier New",
            "Georgia",
            "Verdana",
            "Menlo",
        ])
    }

    /// Add a family to the catalog.
    pub fn insert(&mut self, family: impl Into<Arc<str>>) {
        let family = family.into();
        if self.find(&family).is_none() {
            self.families.push(family);
        }
    }

    fn find(&self, name: &str) -> Option<&Arc<str>> {
        self.families
            .iter()
            .find(|family| family.eq_ignore_ascii_case(name))
    }
}

impl FontCatalog for StaticFontCatalog {
    fn find_family(&mut self, name: &str) -> Option<Arc<str>> {
        self.find(name).cloned()
    }

    fn family_names(&mut self) -> Vec<Arc<str>> {
        self.families.clone()
    }
}

/// A [`FontCatalog`] backed by a fontique font collection.
#[cfg(feature = "parley")]
pub struct SystemFontCatalog {
    collection: parley::fontique::Collection,
}

#[cfg(feature = "parley")]
impl SystemFontCatalog {
    /// Create a catalog over a new collection.
    ///
    /// System fonts are only discovered when the `system` feature is enabled.
    pub fn new() -> Self {
        Self::with_collection(parley::fontique::Collection::new(
            parley::fontique::CollectionOptions::default(),
        ))
    }

    /// Create a catalog over an existing collection.
    pub fn with_collection(collection: parley::fontique::Collection) -> Self {
        Self { collection }
    }

    /// The underlying collection, to register additional fonts.
    pub fn collection_mut(&mut self) -> &mut parley::fontique::Collection {
        &mut self.collection
    }
}

#[cfg(feature = "parley")]
impl Default for SystemFontCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "parley")]
impl core::fmt::Debug for SystemFontCatalog {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SystemFontCatalog").finish_non_exhaustive()
    }
}

#[cfg(feature = "parley")]
impl FontCatalog for SystemFontCatalog {
    fn find_family(&mut self, name: &str) -> Option<Arc<str>> {
        self.collection
            .family_by_name(name)
            .map(|family| Arc::from(family.name()))
    }

    fn family_names(&mut self) -> Vec<Arc<str>> {
        self.collection.family_names().map(Arc::from).collect()
    }
}

/// Resolves family names and symbolic traits to [`Font`]s.
///
/// Families the catalog does not know fall back to the default family at the requested size,
/// with no traits.
///
/// ```
/// use rich_text::{FontResolver, StaticFontCatalog};
///
/// let mut resolver = FontResolver::new(StaticFontCatalog::standard());
/// let font = resolver.resolve_bold_italic("georgia", 14.0, true, false);
/// assert_eq!(font.family(), "Georgia");
/// assert!(font.is_bold());
///
/// let font = resolver.resolve_postscript_name("Courier-BoldOblique", 10.0);
/// assert_eq!(font.family(), "Courier");
/// assert!(font.is_bold() && font.is_italic());
///
/// let missing = resolver.resolve_bold_italic("No Such Family", 9.0, true, true);
/// assert_eq!(missing.family(), "Helvetica");
/// assert!(missing.traits().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct FontResolver<C = StaticFontCatalog> {
    catalog: C,
}

impl<C: FontCatalog> FontResolver<C> {
    /// Create a resolver over `catalog`.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// The catalog families are looked up in.
    pub fn catalog_mut(&mut self) -> &mut C {
        &mut self.catalog
    }

    /// Resolve `family` at `size` with `traits`.
    pub fn resolve(&mut self, family: &str, size: f32, traits: SymbolicTraits) -> Font {
        match self.catalog.find_family(family) {
            Some(family) => Font::new(family, size, traits),
            None => fallback(family, size),
        }
    }

    /// Resolve `family` at `size` with the bold and italic traits set as requested.
    pub fn resolve_bold_italic(
        &mut self,
        family: &str,
        size: f32,
        bold: bool,
        italic: bool,
    ) -> Font {
        let traits = SymbolicTraits::empty()
            .with(SymbolicTraits::BOLD, bold)
            .with(SymbolicTraits::ITALIC, italic);
        self.resolve(family, size, traits)
    }

    /// Resolve a PostScript name such as `Helvetica-BoldOblique` at `size`.
    ///
    /// A recognized style suffix becomes traits. The remaining family is looked up as
    /// written, then against catalog families with their spaces removed.
    pub fn resolve_postscript_name(&mut self, name: &str, size: f32) -> Font {
        let (family, traits) = split_postscript_name(name);
        if let Some(found) = self.catalog.find_family(family) {
            return Font::new(found, size, traits);
        }
        let compact = self.catalog.family_names().into_iter().find(|candidate| {
            let squeezed: String = candidate.chars().filter(|c| *c != ' ').collect();
            squeezed.eq_ignore_ascii_case(family)
        });
        match compact {
            Some(found) => Font::new(found, size, traits),
            None => fallback(name, size),
        }
    }

    /// `font` with its traits replaced by `traits`.
    pub fn with_traits(&self, font: &Font, traits: SymbolicTraits) -> Font {
        font.with_traits(traits)
    }

    /// The symbolic traits of `font`.
    pub fn traits_of(&self, font: &Font) -> SymbolicTraits {
        font.traits()
    }
}

impl Font {
    /// Resolve a PostScript name at `size` through `resolver`.
    pub fn from_postscript_name<C: FontCatalog>(
        name: &str,
        size: f32,
        resolver: &mut FontResolver<C>,
    ) -> Self {
        resolver.resolve_postscript_name(name, size)
    }
}

fn fallback(requested: &str, size: f32) -> Font {
    tracing::debug!(requested, size, "unknown font family, using {DEFAULT_FONT_FAMILY}");
    Font::new(DEFAULT_FONT_FAMILY, size, SymbolicTraits::empty())
}
