//! Page layout configuration: archetype, paper, margins, columns and pagination.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, VariantNames};

use crate::schema::{CrossFieldCheck, CrossFieldRules};

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
pub enum LayoutType {
    SingleColumn,
    TwoColumn,
    SidebarLeft,
    SidebarRight,
    Magazine,
    Compact,
}

impl LayoutType {
    /// Layouts that are meaningless without a main/sidebar split.
    pub fn requires_distribution(self) -> bool {
        matches!(
            self,
            LayoutType::TwoColumn | LayoutType::SidebarLeft | LayoutType::SidebarRight
        )
    }
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
pub enum PaperSize {
    A4,
    Letter,
    Legal,
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
pub enum MarginSize {
    Compact,
    Normal,
    Relaxed,
    Wide,
}

/// Main/sidebar width split, written major-minor.
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
pub enum ColumnDistribution {
    #[serde(rename = "50-50")]
    #[strum(serialize = "50-50")]
    Even,
    #[serde(rename = "60-40")]
    #[strum(serialize = "60-40")]
    SixtyForty,
    #[serde(rename = "65-35")]
    #[strum(serialize = "65-35")]
    SixtyFiveThirtyFive,
    #[serde(rename = "70-30")]
    #[strum(serialize = "70-30")]
    SeventyThirty,
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
pub enum PageBreakBehavior {
    Auto,
    SectionAware,
    Manual,
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
pub enum PageNumberPosition {
    BottomCenter,
    BottomRight,
    TopRight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(rename = "type")]
    pub layout_type: LayoutType,
    pub paper_size: PaperSize,
    pub margins: MarginSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_distribution: Option<ColumnDistribution>,
    pub page_break_behavior: PageBreakBehavior,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_page_numbers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number_position: Option<PageNumberPosition>,
}

/// Combinations the lenient schema lets through; enforced in strict mode.
impl CrossFieldRules for LayoutConfig {
    fn check_cross_fields(&self, cx: &mut CrossFieldCheck) {
        if self.layout_type.requires_distribution() && self.column_distribution.is_none() {
            cx.report_at(
                "columnDistribution",
                format!(
                    "columnDistribution is required for '{}' layouts",
                    self.layout_type.as_ref()
                ),
            );
        }
        if self.show_page_numbers == Some(true) && self.page_number_position.is_none() {
            cx.report_at(
                "pageNumberPosition",
                "pageNumberPosition is required when showPageNumbers is true",
            );
        }
    }
}
