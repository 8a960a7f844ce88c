//! Design tokens: semantic typography, colour and spacing choices.
//!
//! Tokens name a choice ("base", "md", "comfortable"), never a CSS value. The concrete
//! values live in the resolution tables (`crate::resolve::tables`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, VariantNames};

// ────────────────────────────────────────────────────────────────────────────
// Token enums
// ────────────────────────────────────────────────────────────────────────────

/// Named font stacks offered by the template picker.
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
pub enum FontFamily {
    Inter,
    Merriweather,
    Roboto,
    OpenSans,
    PlayfairDisplay,
    SourceSerif,
    Lato,
    Poppins,
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
pub enum FontSize {
    Sm,
    Base,
    Lg,
}

/// How section titles are set apart from body text.
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
pub enum HeadingStyle {
    Bold,
    Underline,
    Uppercase,
    AccentBorder,
    Minimal,
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
pub enum BorderRadius {
    None,
    Sm,
    Md,
    Lg,
    Full,
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
pub enum Shadow {
    None,
    Subtle,
    Medium,
    Strong,
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
pub enum GradientDirection {
    ToRight,
    ToBottom,
    Diagonal,
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
pub enum SpacingDensity {
    Compact,
    Comfortable,
    Spacious,
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
pub enum SpacingSize {
    Sm,
    Md,
    Lg,
    Xl,
}

// ────────────────────────────────────────────────────────────────────────────
// Token groups
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FontPairing {
    pub heading: FontFamily,
    pub body: FontFamily,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    pub font_family: FontPairing,
    pub font_size: FontSize,
    pub heading_style: HeadingStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

/// Colour values are free-form CSS strings; no format is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
    pub text: TextColors,
    pub border: String,
    pub divider: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GradientTokens {
    pub enabled: bool,
    pub direction: GradientDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    pub colors: ColorPalette,
    pub border_radius: BorderRadius,
    pub shadows: Shadow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradients: Option<GradientTokens>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpacingTokens {
    pub density: SpacingDensity,
    pub section_gap: SpacingSize,
    pub item_gap: SpacingSize,
    pub content_padding: SpacingSize,
}

/// The complete token set of a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DesignTokens {
    pub typography: TypographyTokens,
    pub colors: ColorTokens,
    pub spacing: SpacingTokens,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
