// Resume DSL: the user-facing, token-level description of a resume's design.
// Everything here is validated input; nothing here is resolved.

pub mod layout;
pub mod resume_dsl;
pub mod sections;
pub mod tokens;

pub use layout::{
    ColumnDistribution, LayoutConfig, LayoutType, MarginSize, PageBreakBehavior,
    PageNumberPosition, PaperSize,
};
pub use resume_dsl::ResumeDsl;
pub use sections::{
    ColumnId, ItemOverride, SectionConfig, SectionId, SectionItemOverrides, SectionKind,
};
pub use tokens::{
    BorderRadius, ColorPalette, ColorTokens, DesignTokens, FontFamily, FontPairing, FontSize,
    GradientDirection, GradientTokens, HeadingStyle, Shadow, SpacingDensity, SpacingSize,
    SpacingTokens, TextColors, TypographyTokens,
};
