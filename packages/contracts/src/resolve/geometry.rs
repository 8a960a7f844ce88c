//! Page geometry: paper, margins and the column grid.

use tracing::{debug, warn};

use crate::ast::{ColumnDefinition, PageLayout, PageNumbering};
use crate::config::EngineConfig;
use crate::dsl::{ColumnDistribution, ColumnId, LayoutConfig, LayoutType};
use crate::errors::ResolveError;
use crate::resolve::tables::{ColumnSplit, COLUMN_SPLITS, MARGINS, PAPER_SIZES};

/// Resolves a layout into concrete page geometry.
///
/// The returned columns always sum to exactly 100%; anything else is a defect.
pub fn resolve_page(
    layout: &LayoutConfig,
    config: &EngineConfig,
) -> Result<PageLayout, ResolveError> {
    let paper = PAPER_SIZES.lookup(layout.paper_size)?;
    let margins = MARGINS.lookup(layout.margins)?;
    let columns = resolve_columns(layout, config)?;
    check_column_widths(&columns)?;

    let column_gap_mm = if columns.len() > 1 {
        config.column_gap_mm
    } else {
        0.0
    };

    let page_numbers = match (layout.show_page_numbers, layout.page_number_position) {
        (Some(true), Some(position)) => Some(PageNumbering { position }),
        (Some(true), None) => {
            warn!(
                layout = layout.layout_type.as_ref(),
                "page numbers requested without a position; omitting them"
            );
            None
        }
        _ => None,
    };

    Ok(PageLayout {
        width_mm: paper.width_mm,
        height_mm: paper.height_mm,
        margin_top_mm: margins.top_mm,
        margin_bottom_mm: margins.bottom_mm,
        margin_left_mm: margins.left_mm,
        margin_right_mm: margins.right_mm,
        columns,
        column_gap_mm,
        page_break_behavior: Some(layout.page_break_behavior),
        page_numbers,
    })
}

/// Builds the ordered column grid for a layout.
///
/// Single-column and compact layouts always use one full column. Magazine layouts split
/// only when a distribution is given. The sidebar layouts and two-column layouts always
/// split, falling back to `config.default_distribution` when none is given.
pub fn resolve_columns(
    layout: &LayoutConfig,
    config: &EngineConfig,
) -> Result<Vec<ColumnDefinition>, ResolveError> {
    let distribution = match (layout.layout_type, layout.column_distribution) {
        (LayoutType::SingleColumn | LayoutType::Compact, _) => None,
        (LayoutType::Magazine, distribution) => distribution,
        (layout_type, Some(distribution)) => {
            debug_assert!(layout_type.requires_distribution());
            Some(distribution)
        }
        (layout_type, None) => {
            warn!(
                layout = layout_type.as_ref(),
                fallback = config.default_distribution.as_ref(),
                "multi-column layout without columnDistribution; using fallback split"
            );
            Some(config.default_distribution)
        }
    };

    let columns = match distribution {
        None => vec![column(ColumnId::Main, 100, 0)],
        Some(distribution) => split_columns(layout.layout_type, distribution)?,
    };

    debug!(
        layout = layout.layout_type.as_ref(),
        columns = columns.len(),
        "resolved column grid"
    );
    Ok(columns)
}

fn split_columns(
    layout_type: LayoutType,
    distribution: ColumnDistribution,
) -> Result<Vec<ColumnDefinition>, ResolveError> {
    let ColumnSplit { major, minor } = *COLUMN_SPLITS.lookup(distribution)?;
    let columns = if layout_type == LayoutType::SidebarLeft {
        vec![
            column(ColumnId::Sidebar, minor, 0),
            column(ColumnId::Main, major, 1),
        ]
    } else {
        vec![
            column(ColumnId::Main, major, 0),
            column(ColumnId::Sidebar, minor, 1),
        ]
    };
    Ok(columns)
}

fn column(id: ColumnId, width: u8, order: u32) -> ColumnDefinition {
    ColumnDefinition {
        id: id.as_ref().to_string(),
        width_percentage: f64::from(width),
        order,
    }
}

/// Post-condition: the declared column widths add up to exactly 100.
pub fn check_column_widths(columns: &[ColumnDefinition]) -> Result<(), ResolveError> {
    let total: f64 = columns.iter().map(|c| c.width_percentage).sum();
    if total != 100.0 {
        return Err(ResolveError::ColumnWidths { total });
    }
    Ok(())
}
