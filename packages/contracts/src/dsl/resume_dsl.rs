use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dsl::layout::LayoutConfig;
use crate::dsl::sections::{SectionConfig, SectionItemOverrides};
use crate::dsl::tokens::DesignTokens;
use crate::schema::{CrossFieldCheck, CrossFieldRules};

/// The complete, still-abstract resume configuration.
///
/// `version` is an opaque tag; no semver rules apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDsl {
    pub version: String,
    pub layout: LayoutConfig,
    pub tokens: DesignTokens,
    pub sections: Vec<SectionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_overrides: Option<SectionItemOverrides>,
}

impl CrossFieldRules for ResumeDsl {
    fn check_cross_fields(&self, cx: &mut CrossFieldCheck) {
        cx.nested("layout", |cx| self.layout.check_cross_fields(cx));
    }
}
