//! The resolved, renderer-ready resume tree.
//!
//! Every value here is concrete: millimetres, pixels, CSS strings. A `ResumeAst` holds no
//! references back into the DSL it came from and is the entire input of a renderer.
//!
//! The schema is structural only. Column-width sums and column references are the
//! resolver's post-conditions, not validation rules, so hand-written ASTs that bend them
//! still validate.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, VariantNames};

use crate::ast::section_data::SectionData;
use crate::dsl::{PageBreakBehavior, PageNumberPosition};

/// Column id of the virtual column that spans the whole page.
pub const FULL_WIDTH_COLUMN: &str = "full-width";

// ────────────────────────────────────────────────────────────────────────────
// Resolved styles
// ────────────────────────────────────────────────────────────────────────────

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    AsRefStr,
    EnumString,
    EnumIter,
    VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TextTransform {
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    AsRefStr,
    EnumString,
    EnumIter,
    VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TextDecoration {
    None,
    Underline,
    LineThrough,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTypography {
    /// Concrete CSS font stack, e.g. `Inter, sans-serif`.
    pub font_family: String,
    pub font_size_px: f64,
    pub line_height: f64,
    pub font_weight: u16,
    pub text_transform: TextTransform,
    pub text_decoration: TextDecoration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBoxStyle {
    pub background_color: String,
    pub border_color: String,
    pub border_width_px: f64,
    pub border_radius_px: f64,
    pub padding_px: f64,
    pub margin_bottom_px: f64,
    /// Vertical gap between list items inside the section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_gap_px: Option<f64>,
    /// CSS `box-shadow`; absent means no shadow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SectionStyles {
    pub container: ResolvedBoxStyle,
    pub title: ResolvedTypography,
    pub content: ResolvedTypography,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStyles {
    pub background: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub accent: String,
    /// CSS `linear-gradient(...)` when gradients are enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_gradient: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Page geometry
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    pub id: String,
    pub width_percentage: f64,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PageNumbering {
    pub position: PageNumberPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    pub width_mm: f64,
    pub height_mm: f64,
    pub margin_top_mm: f64,
    pub margin_bottom_mm: f64,
    pub margin_left_mm: f64,
    pub margin_right_mm: f64,
    pub columns: Vec<ColumnDefinition>,
    pub column_gap_mm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_break_behavior: Option<PageBreakBehavior>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_numbers: Option<PageNumbering>,
}

impl PageLayout {
    /// Whether `column_id` names a declared column or the full-width column.
    pub fn has_column(&self, column_id: &str) -> bool {
        column_id == FULL_WIDTH_COLUMN || self.columns.iter().any(|c| c.id == column_id)
    }

    pub fn total_width_percentage(&self) -> f64 {
        self.columns.iter().map(|c| c.width_percentage).sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Placed content
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacedSection {
    pub section_id: String,
    /// A `ColumnDefinition::id` or [`FULL_WIDTH_COLUMN`].
    pub column_id: String,
    pub order: u32,
    pub data: SectionData,
    pub styles: SectionStyles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AstMeta {
    pub version: String,
    /// RFC 3339 timestamp, millisecond precision, UTC.
    #[schemars(regex(
        pattern = r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:\d{2})$"
    ))]
    pub generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAst {
    pub meta: AstMeta,
    pub page: PageLayout,
    pub sections: Vec<PlacedSection>,
    pub global_styles: GlobalStyles,
}
