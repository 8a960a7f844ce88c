//! Section configuration: which sections appear, where, and in what order.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr, VariantNames};

/// Resume section kinds known to the content model.
///
/// Section ids are an open set; these are the ids that carry a dedicated
/// [`crate::ast::SectionData`] variant.
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
    IntoStaticStr,
    VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SectionKind {
    Basics,
    Summary,
    Objective,
    Experience,
    Education,
    Skills,
    Languages,
    Certifications,
    Projects,
    Publications,
    Awards,
    Volunteer,
    Interests,
    References,
}

/// Column a section is assigned to in the DSL.
///
/// `FullWidth` is a virtual column: it spans the page and is never listed in
/// `PageLayout::columns`.
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
pub enum ColumnId {
    Main,
    Sidebar,
    FullWidth,
}

/// Identifier of a resume section. Any non-empty string is accepted.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct SectionId(#[schemars(length(min = 1))] String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The known section kind this id names, if any.
    pub fn kind(&self) -> Option<SectionKind> {
        self.0.parse().ok()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SectionKind> for SectionId {
    fn from(kind: SectionKind) -> Self {
        Self(kind.as_ref().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SectionConfig {
    pub id: SectionId,
    pub visible: bool,
    /// Sort key only; duplicates are allowed and resolved by input position.
    pub order: u32,
    pub column: ColumnId,
}

/// Visibility and ordering override for one item inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemOverride {
    pub item_id: String,
    pub visible: bool,
    pub order: u32,
}

/// Per-section item overrides, keyed by section id.
pub type SectionItemOverrides = BTreeMap<String, Vec<ItemOverride>>;
