// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Import of a small HTML-like markup subset into [`RichText`].
//!
//! The markup is wrapped in a root element and parsed as XML, so it must be well formed: the
//! void elements `br` and `hr` may be left open, every other element must be closed.
//! Recognized elements map onto attributes; unknown elements contribute their text. Colors
//! accept any CSS color syntax.
//!
//! | Markup | Effect |
//! |---|---|
//! | `b`, `strong` | bold |
//! | `i`, `em` | italic |
//! | `u` | single underline |
//! | `s`, `strike` | text kept, no styling |
//! | `a href` | link |
//! | `font color face size` | color, family, HTML size `1`–`7` |
//! | `span style` | `color`, `background-color`, `font-weight`, `font-style`, `text-decoration`, `font-size`, `font-family` |
//! | `sup`, `sub` | baseline shifted by half the font size |
//! | `br`, `hr` | line break |
//! | `p`, `div`, `center` | paragraph; `align` or `text-align` set its alignment |

use std::sync::Arc;

use peniko::color::Srgb;
use peniko::Color;
use roxmltree::{Document, Node};
use text_primitives::{ParagraphStyle, SymbolicTraits, TextAlignment, UnderlineStyle};
use url::Url;

use crate::attribute::attr;
use crate::{Font, RichText};

/// Settings for [`import_markup`].
#[derive(Clone, Debug, PartialEq)]
pub struct MarkupOptions {
    /// The font imported text starts from.
    pub base_font: Font,
    /// Spacing after each `p` element, in points.
    pub paragraph_spacing: f32,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            base_font: Font::default(),
            paragraph_spacing: 12.0,
        }
    }
}

/// Parse `markup` into a rich text.
///
/// Returns `None` when the markup is not well formed.
///
/// ```
/// use rich_text::{import_markup, MarkupOptions};
///
/// let text = import_markup("Say <b>hi</b>!", &MarkupOptions::default()).unwrap();
/// assert_eq!(text.as_str(), "Say hi!");
/// assert_eq!(text.is_font_bold_at(4), (true, 4..6));
/// ```
pub fn import_markup(markup: &str, options: &MarkupOptions) -> Option<RichText> {
    let markup = close_void_elements(&markup.replace("&nbsp;", "&#160;"));
    let source = format!("<markup>{markup}</markup>");
    let doc = match Document::parse(&source) {
        Ok(doc) => doc,
        Err(err) => {
            tracing::debug!(%err, "markup is not well formed");
            return None;
        }
    };
    let mut importer = Importer {
        options,
        out: RichText::default(),
        pending_space: None,
        pending_break: false,
    };
    let style = Style::new(&options.base_font);
    importer.children(doc.root_element(), &style);
    Some(importer.out)
}

impl RichText {
    /// Parse `markup` with the default [`MarkupOptions`] on the calling thread.
    ///
    /// Returns `None` when the markup is not well formed. See also
    /// [`MarkupService`](crate::MarkupService) for import on a dedicated thread.
    pub fn from_markup(markup: &str) -> Option<Self> {
        import_markup(markup, &MarkupOptions::default())
    }
}

#[derive(Clone, Debug)]
struct Style {
    family: Arc<str>,
    size: f32,
    traits: SymbolicTraits,
    color: Option<Color>,
    background: Option<Color>,
    underline: bool,
    link: Option<Url>,
    baseline: f32,
}

impl Style {
    fn new(base: &Font) -> Self {
        Self {
            family: base.family().into(),
            size: base.size(),
            traits: base.traits(),
            color: None,
            background: None,
            underline: false,
            link: None,
            baseline: 0.0,
        }
    }

    fn font(&self) -> Font {
        Font::new(self.family.clone(), self.size, self.traits)
    }

    fn apply_css(&mut self, css: &str) {
        for declaration in css.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match property.trim().to_ascii_lowercase().as_str() {
                "color" => self.color = parse_color(value).or(self.color),
                "background-color" | "background" => {
                    self.background = parse_color(value).or(self.background);
                }
                "font-weight" => {
                    let bold = match value {
                        "bold" | "bolder" => true,
                        "normal" | "lighter" => false,
                        weight => weight.parse::<u16>().map_or(self.traits.is_bold(), |w| w >= 600),
                    };
                    self.traits.set(SymbolicTraits::BOLD, bold);
                }
                "font-style" => {
                    let italic = matches!(value, "italic" | "oblique");
                    self.traits.set(SymbolicTraits::ITALIC, italic);
                }
                "text-decoration" | "text-decoration-line" => {
                    if value.contains("underline") {
                        self.underline = true;
                    } else if value == "none" {
                        self.underline = false;
                    }
                }
                "font-size" => {
                    if let Some(size) = parse_length(value) {
                        self.size = size;
                    }
                }
                "font-family" => {
                    if let Some(family) = first_family(value) {
                        self.family = family.into();
                    }
                }
                _ => {}
            }
        }
    }
}

struct Importer<'a> {
    options: &'a MarkupOptions,
    out: RichText,
    /// Collapsed whitespace waiting for the next visible character, with its style.
    pending_space: Option<Style>,
    /// Set after a block closes; the next content starts on a new line.
    pending_break: bool,
}

impl Importer<'_> {
    fn children(&mut self, node: Node<'_, '_>, style: &Style) {
        for child in node.children() {
            if child.is_text() {
                if let Some(text) = child.text() {
                    self.text(text, style);
                }
            } else if child.is_element() {
                self.element(child, style);
            }
        }
    }

    fn element(&mut self, node: Node<'_, '_>, parent: &Style) {
        let name = node.tag_name().name().to_ascii_lowercase();
        let mut style = parent.clone();
        if let Some(css) = node.attribute("style") {
            style.apply_css(css);
        }
        match name.as_str() {
            "b" | "strong" => style.traits.set(SymbolicTraits::BOLD, true),
            "i" | "em" => style.traits.set(SymbolicTraits::ITALIC, true),
            "u" => style.underline = true,
            "a" => {
                if let Some(href) = node.attribute("href") {
                    match Url::parse(href) {
                        Ok(url) => style.link = Some(url),
                        Err(err) => tracing::trace!(href, %err, "ignoring unparsable link"),
                    }
                }
            }
            "font" => {
                if let Some(color) = node.attribute("color").and_then(parse_color) {
                    style.color = Some(color);
                }
                if let Some(family) = node.attribute("face").and_then(first_family) {
                    style.family = family.into();
                }
                if let Some(size) = node.attribute("size").and_then(html_font_size) {
                    style.size = size;
                }
            }
            "sup" => style.baseline += parent.size / 2.0,
            "sub" => style.baseline -= parent.size / 2.0,
            "br" | "hr" => {
                self.line_break(&style);
                return;
            }
            "head" | "script" | "style" | "title" => return,
            "p" | "div" | "center" => {
                self.block(node, &name, &style);
                return;
            }
            _ => {}
        }
        self.children(node, &style);
    }

    fn block(&mut self, node: Node<'_, '_>, name: &str, style: &Style) {
        self.pending_break = true;
        self.flush_break(style);
        let start = self.out.len();
        self.children(node, style);
        let end = self.out.len();
        self.pending_break = true;
        self.pending_space = None;
        if start == end {
            return;
        }

        let mut paragraph = ParagraphStyle::default();
        if name == "p" {
            paragraph.paragraph_spacing = self.options.paragraph_spacing;
        }
        let align = node.attribute("align").and_then(TextAlignment::parse).or_else(|| {
            node.attribute("style").and_then(|css| {
                css.split(';')
                    .filter_map(|decl| decl.split_once(':'))
                    .find(|(property, _)| property.trim().eq_ignore_ascii_case("text-align"))
                    .and_then(|(_, value)| TextAlignment::parse(value))
            })
        });
        paragraph.alignment = match (name, align) {
            (_, Some(alignment)) => alignment,
            ("center", None) => TextAlignment::Center,
            _ => TextAlignment::Natural,
        };

        // Nested blocks keep their own style.
        let unstyled: Vec<_> = self
            .out
            .runs_in::<attr::ParagraphStyle>(start..end)
            .filter(|run| run.value.is_none())
            .map(|run| run.range)
            .collect();
        for range in unstyled {
            self.out
                .apply::<attr::ParagraphStyle>(range, Some(paragraph.clone()));
        }
    }

    fn text(&mut self, text: &str, style: &Style) {
        let mut chunk = String::new();
        for c in text.chars() {
            if c.is_ascii_whitespace() {
                if self.pending_space.is_none() {
                    self.pending_space = Some(style.clone());
                }
                continue;
            }
            if self.pending_break {
                self.emit(&chunk, style);
                chunk.clear();
                self.flush_break(style);
            }
            if let Some(space_style) = self.pending_space.take() {
                self.emit(&chunk, style);
                chunk.clear();
                if !self.at_line_start() {
                    self.emit(" ", &space_style);
                }
            }
            chunk.push(c);
        }
        self.emit(&chunk, style);
    }

    fn at_line_start(&self) -> bool {
        self.out.is_empty() || self.out.as_str().ends_with('\n')
    }

    fn line_break(&mut self, style: &Style) {
        self.flush_break(style);
        self.emit("\n", style);
    }

    fn flush_break(&mut self, style: &Style) {
        if self.pending_break && !self.at_line_start() {
            self.emit("\n", style);
        }
        self.pending_break = false;
        self.pending_space = None;
    }

    /// Append `chunk` with every character attribute taken from `style`.
    fn emit(&mut self, chunk: &str, style: &Style) {
        if chunk.is_empty() {
            return;
        }
        let start = self.out.len();
        self.out.push_str(chunk);
        let range = start..self.out.len();
        let underline = style.underline.then_some(UnderlineStyle::SINGLE);
        let baseline = (style.baseline != 0.0).then_some(style.baseline);

        let out = &mut self.out;
        out.apply::<attr::Font>(range.clone(), Some(style.font()));
        out.apply::<attr::ForegroundColor>(range.clone(), style.color);
        out.apply::<attr::BackgroundColor>(range.clone(), style.background);
        out.apply::<attr::UnderlineStyle>(range.clone(), underline);
        out.apply::<attr::UnderlineColor>(range.clone(), None);
        out.apply::<attr::Link>(range.clone(), style.link.clone());
        out.apply::<attr::Kerning>(range.clone(), None);
        out.apply::<attr::BaselineOffset>(range.clone(), baseline);
        out.apply::<attr::ParagraphStyle>(range, None);
    }
}

/// Rewrite the void elements `br` and `hr` as self-closing tags.
fn close_void_elements(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];
        let name_end = rest[1..]
            .find(|c: char| !c.is_ascii_alphanumeric())
            .map_or(rest.len(), |end| end + 1);
        let name = &rest[1..name_end];
        let void = name.eq_ignore_ascii_case("br") || name.eq_ignore_ascii_case("hr");
        match rest.find('>') {
            Some(close) if void => {
                let tag = &rest[..close];
                out.push_str(tag.strip_suffix('/').unwrap_or(tag).trim_end());
                out.push_str("/>");
                rest = &rest[close + 1..];
            }
            _ => {
                out.push('<');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// A CSS color in any syntax the `color` crate parses, converted to sRGB.
fn parse_color(value: &str) -> Option<Color> {
    let color = peniko::color::parse_color(value.trim()).ok()?;
    Some(color.to_alpha_color::<Srgb>())
}

/// The first family of a CSS family list, without quotes.
fn first_family(list: &str) -> Option<&str> {
    let family = list.split(',').next()?.trim().trim_matches(['"', '\'']).trim();
    (!family.is_empty()).then_some(family)
}

/// A CSS length in points; `px`, `pt` and unitless values are accepted.
fn parse_length(value: &str) -> Option<f32> {
    let number = value
        .strip_suffix("px")
        .or_else(|| value.strip_suffix("pt"))
        .unwrap_or(value);
    number.trim().parse::<f32>().ok().filter(|size| *size > 0.0)
}

/// The point size of an HTML `font size`, absolute `1`–`7` or relative to `3`.
fn html_font_size(value: &str) -> Option<f32> {
    const SIZES: [f32; 7] = [9.0, 10.0, 12.0, 14.0, 18.0, 24.0, 36.0];
    let value = value.trim();
    let level = if let Some(delta) = value.strip_prefix('+') {
        delta.parse::<i32>().ok()?.saturating_add(3)
    } else if value.starts_with('-') {
        value.parse::<i32>().ok()?.saturating_add(3)
    } else {
        value.parse::<i32>().ok()?
    };
    let index = usize::try_from(level.clamp(1, 7) - 1).ok()?;
    Some(SIZES[index])
}
