// Resolved Layout Tree: the renderer-facing output contract.

pub mod resume_ast;
pub mod section_data;

pub use resume_ast::{
    AstMeta, ColumnDefinition, GlobalStyles, PageLayout, PageNumbering, PlacedSection,
    ResolvedBoxStyle, ResolvedTypography, ResumeAst, SectionStyles, TextDecoration,
    TextTransform, FULL_WIDTH_COLUMN,
};
pub use section_data::{
    AwardItem, BasicsData, CertificationItem, CustomItem, DateRange, EducationItem,
    ExperienceItem, InterestItem, LanguageItem, ProfileLink, ProjectItem, PublicationItem,
    ReferenceItem, SectionData, SectionItem, SkillItem, TextBlock, VolunteerItem,
};
