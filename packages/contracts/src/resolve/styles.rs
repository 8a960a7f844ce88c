//! Style composition: tokens → concrete typography, box model and global palette.

use crate::ast::{
    GlobalStyles, ResolvedBoxStyle, ResolvedTypography, SectionStyles, TextDecoration,
    TextTransform,
};
use crate::dsl::{DesignTokens, FontFamily, FontSize, HeadingStyle, SpacingDensity};
use crate::errors::ResolveError;
use crate::resolve::tables::{
    ACCENT_BORDER_WIDTH_PX, BODY_FONT_WEIGHT, BORDER_RADII, DENSITIES, FONT_SCALES, FONT_STACKS,
    GRADIENT_DIRECTIONS, HEADING_STYLES, SHADOWS, SPACING_SIZES,
};

/// Typographic role within a placed section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Title,
    Content,
}

/// Resolves one role's typography.
///
/// The title role combines the size and heading-style axes; the content role ignores the
/// heading style.
pub fn resolve_typography(
    role: TextRole,
    font: FontFamily,
    size: FontSize,
    heading: HeadingStyle,
    density: SpacingDensity,
) -> Result<ResolvedTypography, ResolveError> {
    let font_family = FONT_STACKS.lookup(font)?.to_string();
    let scale = FONT_SCALES.lookup(size)?;
    let treatment = HEADING_STYLES.lookup(heading)?;
    let density = DENSITIES.lookup(density)?;

    let typography = match role {
        TextRole::Title => ResolvedTypography {
            font_family,
            font_size_px: scale.title_px + treatment.size_delta_px,
            line_height: density.title_line_height,
            font_weight: treatment.font_weight,
            text_transform: treatment.text_transform,
            text_decoration: treatment.text_decoration,
        },
        TextRole::Content => ResolvedTypography {
            font_family,
            font_size_px: scale.content_px,
            line_height: density.content_line_height,
            font_weight: BODY_FONT_WEIGHT,
            text_transform: TextTransform::None,
            text_decoration: TextDecoration::None,
        },
    };
    Ok(typography)
}

/// Resolves the section container box from the colour and spacing tokens.
pub fn resolve_container(tokens: &DesignTokens) -> Result<ResolvedBoxStyle, ResolveError> {
    let palette = &tokens.colors.colors;
    let spacing = &tokens.spacing;
    let factor = DENSITIES.lookup(spacing.density)?.spacing_factor;
    let treatment = HEADING_STYLES.lookup(tokens.typography.heading_style)?;

    let (border_color, border_width_px) = if treatment.accent_border {
        (palette.text.accent.clone(), ACCENT_BORDER_WIDTH_PX)
    } else {
        (palette.border.clone(), 0.0)
    };

    Ok(ResolvedBoxStyle {
        background_color: palette.surface.clone(),
        border_color,
        border_width_px,
        border_radius_px: *BORDER_RADII.lookup(tokens.colors.border_radius)?,
        padding_px: SPACING_SIZES.lookup(spacing.content_padding)? * factor,
        margin_bottom_px: SPACING_SIZES.lookup(spacing.section_gap)? * factor,
        item_gap_px: Some(SPACING_SIZES.lookup(spacing.item_gap)? * factor),
        shadow: SHADOWS.lookup(tokens.colors.shadows)?.map(str::to_string),
    })
}

/// Resolves the three style records every placed section carries.
pub fn resolve_section_styles(tokens: &DesignTokens) -> Result<SectionStyles, ResolveError> {
    let typography = &tokens.typography;
    let density = tokens.spacing.density;
    Ok(SectionStyles {
        container: resolve_container(tokens)?,
        title: resolve_typography(
            TextRole::Title,
            typography.font_family.heading,
            typography.font_size,
            typography.heading_style,
            density,
        )?,
        content: resolve_typography(
            TextRole::Content,
            typography.font_family.body,
            typography.font_size,
            typography.heading_style,
            density,
        )?,
    })
}

pub fn resolve_global_styles(tokens: &DesignTokens) -> Result<GlobalStyles, ResolveError> {
    let palette = &tokens.colors.colors;
    let background_gradient = match &tokens.colors.gradients {
        Some(gradient) if gradient.enabled => {
            let direction = GRADIENT_DIRECTIONS.lookup(gradient.direction)?;
            Some(format!(
                "linear-gradient({direction}, {}, {})",
                palette.primary, palette.secondary
            ))
        }
        _ => None,
    };

    Ok(GlobalStyles {
        background: palette.background.clone(),
        text_primary: palette.text.primary.clone(),
        text_secondary: palette.text.secondary.clone(),
        accent: palette.text.accent.clone(),
        background_gradient,
    })
}
