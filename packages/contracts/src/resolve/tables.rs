//! Static token tables: every semantic token maps to exactly one concrete value.
//!
//! Tables are immutable statics shared by all resolutions. A lookup that finds no row
//! means a token enum grew a member its table never learned about; that is reported as
//! `ResolveError::TableMiss` and the exhaustiveness tests below keep it from shipping.

use crate::ast::{TextDecoration, TextTransform};
use crate::dsl::{
    BorderRadius, ColumnDistribution, FontFamily, FontSize, GradientDirection, HeadingStyle,
    MarginSize, PaperSize, Shadow, SpacingDensity, SpacingSize,
};
use crate::errors::ResolveError;

// ────────────────────────────────────────────────────────────────────────────
// Table type
// ────────────────────────────────────────────────────────────────────────────

/// A finite `(token, value)` mapping for one token category.
pub struct TokenTable<K: 'static, V: 'static> {
    category: &'static str,
    rows: &'static [(K, V)],
}

impl<K, V> TokenTable<K, V>
where
    K: Copy + PartialEq + AsRef<str>,
{
    pub const fn new(category: &'static str, rows: &'static [(K, V)]) -> Self {
        Self { category, rows }
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn lookup(&self, token: K) -> Result<&'static V, ResolveError> {
        self.rows
            .iter()
            .find(|(key, _)| *key == token)
            .map(|(_, value)| value)
            .ok_or_else(|| ResolveError::TableMiss {
                category: self.category,
                token: token.as_ref().to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Row types
// ────────────────────────────────────────────────────────────────────────────

/// Base pixel sizes for the two typographic roles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    pub title_px: f64,
    pub content_px: f64,
}

/// How a heading style alters the title role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingTreatment {
    pub font_weight: u16,
    pub text_transform: TextTransform,
    pub text_decoration: TextDecoration,
    /// Added to the title size; uppercase titles run smaller to keep their visual weight.
    pub size_delta_px: f64,
    /// Draw an accent-coloured border on the section container.
    pub accent_border: bool,
}

/// Line heights and spacing multiplier for a density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityScale {
    pub title_line_height: f64,
    pub content_line_height: f64,
    pub spacing_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperDimensions {
    pub width_mm: f64,
    pub height_mm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMargins {
    pub top_mm: f64,
    pub bottom_mm: f64,
    pub left_mm: f64,
    pub right_mm: f64,
}

impl PageMargins {
    const fn symmetric(mm: f64) -> Self {
        Self {
            top_mm: mm,
            bottom_mm: mm,
            left_mm: mm,
            right_mm: mm,
        }
    }
}

/// Whole-number width split; integers keep the 100% sum exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSplit {
    pub major: u8,
    pub minor: u8,
}

pub const BODY_FONT_WEIGHT: u16 = 400;
pub const ACCENT_BORDER_WIDTH_PX: f64 = 2.0;

// ────────────────────────────────────────────────────────────────────────────
// Tables
// ────────────────────────────────────────────────────────────────────────────

pub static FONT_STACKS: TokenTable<FontFamily, &str> = TokenTable::new(
    "fontFamily",
    &[
        (FontFamily::Inter, "Inter, sans-serif"),
        (FontFamily::Merriweather, "Merriweather, serif"),
        (FontFamily::Roboto, "Roboto, sans-serif"),
        (FontFamily::OpenSans, "'Open Sans', sans-serif"),
        (FontFamily::PlayfairDisplay, "'Playfair Display', serif"),
        (FontFamily::SourceSerif, "'Source Serif Pro', serif"),
        (FontFamily::Lato, "Lato, sans-serif"),
        (FontFamily::Poppins, "Poppins, sans-serif"),
    ],
);

pub static FONT_SCALES: TokenTable<FontSize, FontScale> = TokenTable::new(
    "fontSize",
    &[
        (FontSize::Sm, FontScale { title_px: 14.0, content_px: 12.0 }),
        (FontSize::Base, FontScale { title_px: 18.0, content_px: 14.0 }),
        (FontSize::Lg, FontScale { title_px: 22.0, content_px: 16.0 }),
    ],
);

#[rustfmt::skip]
pub static HEADING_STYLES: TokenTable<HeadingStyle, HeadingTreatment> = TokenTable::new(
    "headingStyle",
    &[
        (HeadingStyle::Bold, HeadingTreatment {
            font_weight: 700, text_transform: TextTransform::None,
            text_decoration: TextDecoration::None, size_delta_px: 0.0, accent_border: false,
        }),
        (HeadingStyle::Underline, HeadingTreatment {
            font_weight: 600, text_transform: TextTransform::None,
            text_decoration: TextDecoration::Underline, size_delta_px: 0.0, accent_border: false,
        }),
        (HeadingStyle::Uppercase, HeadingTreatment {
            font_weight: 700, text_transform: TextTransform::Uppercase,
            text_decoration: TextDecoration::None, size_delta_px: -2.0, accent_border: false,
        }),
        (HeadingStyle::AccentBorder, HeadingTreatment {
            font_weight: 700, text_transform: TextTransform::None,
            text_decoration: TextDecoration::None, size_delta_px: 0.0, accent_border: true,
        }),
        (HeadingStyle::Minimal, HeadingTreatment {
            font_weight: 500, text_transform: TextTransform::None,
            text_decoration: TextDecoration::None, size_delta_px: 0.0, accent_border: false,
        }),
    ],
);

#[rustfmt::skip]
pub static DENSITIES: TokenTable<SpacingDensity, DensityScale> = TokenTable::new(
    "density",
    &[
        (SpacingDensity::Compact, DensityScale {
            title_line_height: 1.4, content_line_height: 1.5, spacing_factor: 0.75,
        }),
        (SpacingDensity::Comfortable, DensityScale {
            title_line_height: 1.5, content_line_height: 1.6, spacing_factor: 1.0,
        }),
        (SpacingDensity::Spacious, DensityScale {
            title_line_height: 1.6, content_line_height: 1.8, spacing_factor: 1.25,
        }),
    ],
);

pub static SPACING_SIZES: TokenTable<SpacingSize, f64> = TokenTable::new(
    "spacing",
    &[
        (SpacingSize::Sm, 8.0),
        (SpacingSize::Md, 16.0),
        (SpacingSize::Lg, 24.0),
        (SpacingSize::Xl, 32.0),
    ],
);

pub static BORDER_RADII: TokenTable<BorderRadius, f64> = TokenTable::new(
    "borderRadius",
    &[
        (BorderRadius::None, 0.0),
        (BorderRadius::Sm, 2.0),
        (BorderRadius::Md, 4.0),
        (BorderRadius::Lg, 8.0),
        (BorderRadius::Full, 9999.0),
    ],
);

pub static SHADOWS: TokenTable<Shadow, Option<&str>> = TokenTable::new(
    "shadows",
    &[
        (Shadow::None, None),
        (Shadow::Subtle, Some("0 1px 3px rgba(0,0,0,0.1)")),
        (Shadow::Medium, Some("0 4px 6px rgba(0,0,0,0.1)")),
        (Shadow::Strong, Some("0 10px 15px rgba(0,0,0,0.15)")),
    ],
);

pub static GRADIENT_DIRECTIONS: TokenTable<GradientDirection, &str> = TokenTable::new(
    "gradientDirection",
    &[
        (GradientDirection::ToRight, "to right"),
        (GradientDirection::ToBottom, "to bottom"),
        (GradientDirection::Diagonal, "135deg"),
    ],
);

#[rustfmt::skip]
pub static PAPER_SIZES: TokenTable<PaperSize, PaperDimensions> = TokenTable::new(
    "paperSize",
    &[
        (PaperSize::A4, PaperDimensions { width_mm: 210.0, height_mm: 297.0 }),
        (PaperSize::Letter, PaperDimensions { width_mm: 215.9, height_mm: 279.4 }),
        (PaperSize::Legal, PaperDimensions { width_mm: 215.9, height_mm: 355.6 }),
    ],
);

pub static MARGINS: TokenTable<MarginSize, PageMargins> = TokenTable::new(
    "margins",
    &[
        (MarginSize::Compact, PageMargins::symmetric(10.0)),
        (MarginSize::Normal, PageMargins::symmetric(15.0)),
        (MarginSize::Relaxed, PageMargins::symmetric(20.0)),
        (MarginSize::Wide, PageMargins::symmetric(25.0)),
    ],
);

pub static COLUMN_SPLITS: TokenTable<ColumnDistribution, ColumnSplit> = TokenTable::new(
    "columnDistribution",
    &[
        (ColumnDistribution::Even, ColumnSplit { major: 50, minor: 50 }),
        (ColumnDistribution::SixtyForty, ColumnSplit { major: 60, minor: 40 }),
        (ColumnDistribution::SixtyFiveThirtyFive, ColumnSplit { major: 65, minor: 35 }),
        (ColumnDistribution::SeventyThirty, ColumnSplit { major: 70, minor: 30 }),
    ],
);

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
