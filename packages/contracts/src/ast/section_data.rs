//! Already-fetched section content, one tagged variant per section kind.
//!
//! Content is supplied by the resume-data service. A section that matches none of the
//! variants is reported as one violation at the section itself.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dsl::SectionKind;

// ────────────────────────────────────────────────────────────────────────────
// Shared shapes
// ────────────────────────────────────────────────────────────────────────────

/// Dates are `YYYY-MM` or `YYYY-MM-DD` strings, kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextBlock {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProfileLink {
    pub network: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BasicsData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub profiles: Vec<ProfileLink>,
}

// ────────────────────────────────────────────────────────────────────────────
// Section items
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub date_range: DateRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: String,
    pub institution: String,
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub date_range: DateRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SkillItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cefr_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificationItem {
    pub id: String,
    pub name: String,
    pub issuer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicationItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AwardItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awarder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerItem {
    pub id: String,
    pub organization: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InterestItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReferenceItem {
    pub id: String,
    pub name: String,
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

/// Item of a user-defined section (any id outside [`SectionKind`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CustomItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// A list entry that item overrides can address by id.
pub trait SectionItem {
    fn item_id(&self) -> &str;
}

macro_rules! section_items {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl SectionItem for $ty {
                fn item_id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

section_items!(
    ExperienceItem,
    EducationItem,
    SkillItem,
    LanguageItem,
    CertificationItem,
    ProjectItem,
    PublicationItem,
    AwardItem,
    VolunteerItem,
    InterestItem,
    ReferenceItem,
    CustomItem,
);

// ────────────────────────────────────────────────────────────────────────────
// Section data union
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SectionData {
    Basics { data: BasicsData },
    Summary { data: TextBlock },
    Objective { data: TextBlock },
    Experience { items: Vec<ExperienceItem> },
    Education { items: Vec<EducationItem> },
    Skills { items: Vec<SkillItem> },
    Languages { items: Vec<LanguageItem> },
    Certifications { items: Vec<CertificationItem> },
    Projects { items: Vec<ProjectItem> },
    Publications { items: Vec<PublicationItem> },
    Awards { items: Vec<AwardItem> },
    Volunteer { items: Vec<VolunteerItem> },
    Interests { items: Vec<InterestItem> },
    References { items: Vec<ReferenceItem> },
    Custom { title: String, items: Vec<CustomItem> },
}

impl SectionData {
    /// The known section kind of this content; `None` for custom sections.
    pub fn kind(&self) -> Option<SectionKind> {
        let kind = match self {
            SectionData::Basics { .. } => SectionKind::Basics,
            SectionData::Summary { .. } => SectionKind::Summary,
            SectionData::Objective { .. } => SectionKind::Objective,
            SectionData::Experience { .. } => SectionKind::Experience,
            SectionData::Education { .. } => SectionKind::Education,
            SectionData::Skills { .. } => SectionKind::Skills,
            SectionData::Languages { .. } => SectionKind::Languages,
            SectionData::Certifications { .. } => SectionKind::Certifications,
            SectionData::Projects { .. } => SectionKind::Projects,
            SectionData::Publications { .. } => SectionKind::Publications,
            SectionData::Awards { .. } => SectionKind::Awards,
            SectionData::Volunteer { .. } => SectionKind::Volunteer,
            SectionData::Interests { .. } => SectionKind::Interests,
            SectionData::References { .. } => SectionKind::References,
            SectionData::Custom { .. } => return None,
        };
        Some(kind)
    }

    /// The `type` tag as it appears on the wire.
    pub fn type_str(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.into(),
            None => "custom",
        }
    }

    /// Ids of the list items, in order. Empty for single-block sections.
    pub fn item_ids(&self) -> Vec<&str> {
        fn ids<T: SectionItem>(items: &[T]) -> Vec<&str> {
            items.iter().map(SectionItem::item_id).collect()
        }
        match self {
            SectionData::Basics { .. }
            | SectionData::Summary { .. }
            | SectionData::Objective { .. } => Vec::new(),
            SectionData::Experience { items } => ids(items),
            SectionData::Education { items } => ids(items),
            SectionData::Skills { items } => ids(items),
            SectionData::Languages { items } => ids(items),
            SectionData::Certifications { items } => ids(items),
            SectionData::Projects { items } => ids(items),
            SectionData::Publications { items } => ids(items),
            SectionData::Awards { items } => ids(items),
            SectionData::Volunteer { items } => ids(items),
            SectionData::Interests { items } => ids(items),
            SectionData::References { items } => ids(items),
            SectionData::Custom { items, .. } => ids(items),
        }
    }
}
