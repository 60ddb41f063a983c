//! Font descriptions and text measurement.

use kestrel_common::warning::warn_once;
use serde::Serialize;
use strum_macros::Display;

use crate::style::{PropertyMap, parse_length};

/// [§ 3.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

/// [§ 3.3 'font-style'](https://www.w3.org/TR/css-fonts-4/#font-style-prop)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FontSlant {
    /// Upright glyphs.
    #[default]
    Roman,
    /// Italic or oblique glyphs.
    Italic,
}

/// Everything needed to measure and draw a run of text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Font {
    /// Family name, e.g. `Times New Roman`.
    pub family: String,
    /// Size in pixels.
    pub size: i32,
    /// Weight.
    pub weight: FontWeight,
    /// Slant.
    pub slant: FontSlant,
    /// Whether text is underlined.
    pub underline: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: Self::DEFAULT_FAMILY.to_string(),
            size: Self::DEFAULT_SIZE,
            weight: FontWeight::Normal,
            slant: FontSlant::Roman,
            underline: false,
        }
    }
}

impl Font {
    /// Family used when no `font-family` applies.
    pub const DEFAULT_FAMILY: &'static str = "Times New Roman";
    /// Size used when no `font-size` applies.
    pub const DEFAULT_SIZE: i32 = 14;

    /// A copy of this font with the `font-*` and `text-decoration`
    /// properties from `properties` applied.
    ///
    /// Values that cannot be understood leave the corresponding field
    /// unchanged.
    #[must_use]
    pub fn with_properties(&self, properties: &PropertyMap) -> Self {
        let mut font = self.clone();

        if let Some(family) = properties.get("font-family") {
            let first = family
                .split(',')
                .next()
                .map(|name| name.trim().trim_matches(['"', '\'']))
                .unwrap_or_default();
            if !first.is_empty() {
                font.family = first.to_string();
            }
        }

        if let Some(size) = properties.get("font-size") {
            match parse_length(size) {
                Ok(px) => font.size = px,
                Err(err) => warn_once("Layout", &format!("font-size: {err}")),
            }
        }

        // [§ 3.2](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
        // Numeric weights of 600 and above render bold.
        if let Some(weight) = properties.get("font-weight") {
            match weight.trim().to_ascii_lowercase().as_str() {
                "bold" | "bolder" => font.weight = FontWeight::Bold,
                "normal" | "lighter" => font.weight = FontWeight::Normal,
                other => match other.parse::<u16>() {
                    Ok(n) if n >= 600 => font.weight = FontWeight::Bold,
                    Ok(_) => font.weight = FontWeight::Normal,
                    Err(_) => warn_once("Layout", &format!("unknown font-weight `{other}`")),
                },
            }
        }

        if let Some(style) = properties.get("font-style") {
            match style.trim().to_ascii_lowercase().as_str() {
                "italic" | "oblique" => font.slant = FontSlant::Italic,
                "normal" => font.slant = FontSlant::Roman,
                other => warn_once("Layout", &format!("unknown font-style `{other}`")),
            }
        }

        if let Some(decoration) = properties.get("text-decoration") {
            font.underline = decoration.to_ascii_lowercase().contains("underline");
        }

        font
    }
}

/// Measures text for a given font.
///
/// Widths must be additive over concatenation for the line breaker's
/// guarantees to hold exactly; both built-in implementations are.
pub trait FontMetrics {
    /// Advance width of `text` in pixels.
    fn measure(&self, font: &Font, text: &str) -> i32;

    /// Distance between successive baselines in pixels.
    ///
    /// [§ 10.8.1 Leading and half-leading](https://www.w3.org/TR/CSS2/visudet.html#leading)
    fn line_height(&self, font: &Font) -> i32;
}

fn char_count(text: &str) -> i32 {
    i32::try_from(text.chars().count()).unwrap_or(i32::MAX)
}

/// Approximate proportional metrics: every glyph advances 0.6em and lines
/// are 1.2em apart, rounded to whole pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateFontMetrics;

impl FontMetrics for ApproximateFontMetrics {
    fn measure(&self, font: &Font, text: &str) -> i32 {
        // Round the per-glyph advance first so widths stay additive.
        let advance = (font.size.saturating_mul(6) + 5) / 10;
        char_count(text).saturating_mul(advance)
    }

    fn line_height(&self, font: &Font) -> i32 {
        (font.size.saturating_mul(12) + 5) / 10
    }
}

/// Fixed-advance metrics that ignore the font entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMetrics {
    /// Width of every glyph in pixels.
    pub advance: i32,
    /// Line height in pixels.
    pub line_height: i32,
}

impl FontMetrics for MonospaceMetrics {
    fn measure(&self, _font: &Font, text: &str) -> i32 {
        char_count(text).saturating_mul(self.advance)
    }

    fn line_height(&self, _font: &Font) -> i32 {
        self.line_height
    }
}
