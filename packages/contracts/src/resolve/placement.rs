//! Section placement: visibility, column references, ordering and item overrides.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::ast::{PageLayout, PlacedSection, SectionData, SectionItem, SectionStyles};
use crate::dsl::{ColumnId, ItemOverride, SectionConfig, SectionItemOverrides};
use crate::errors::ResolveError;

/// Already-fetched section content, keyed by section id.
pub type SectionContent = BTreeMap<String, SectionData>;

/// Places every visible section onto the resolved page.
///
/// Sections are ordered by column rank (full-width first, then declared columns by their
/// `order`), then by section `order`; ties keep their input position.
pub fn place_sections(
    sections: &[SectionConfig],
    page: &PageLayout,
    content: &SectionContent,
    overrides: Option<&SectionItemOverrides>,
    styles: &SectionStyles,
) -> Result<Vec<PlacedSection>, ResolveError> {
    let mut visible = Vec::new();
    for section in sections.iter().filter(|s| s.visible) {
        let rank = column_rank(section, page)?;
        visible.push((rank, section));
    }
    // sort_by_key is stable; equal keys keep input order
    visible.sort_by_key(|(rank, section)| (*rank, section.order));

    let mut placed = Vec::with_capacity(visible.len());
    for (_, section) in visible {
        let id = section.id.as_str();
        let data = content.get(id).ok_or_else(|| ResolveError::MissingContent {
            section_id: id.to_string(),
        })?;
        check_content_kind(section, data)?;

        let data = match overrides.and_then(|o| o.get(id)) {
            Some(rules) => apply_overrides(data.clone(), rules),
            None => data.clone(),
        };

        placed.push(PlacedSection {
            section_id: id.to_string(),
            column_id: section.column.as_ref().to_string(),
            order: section.order,
            data,
            styles: styles.clone(),
        });
    }

    debug!(
        configured = sections.len(),
        placed = placed.len(),
        "placed sections"
    );
    Ok(placed)
}

/// Sort rank of the section's column; an undeclared column is a referential error.
///
/// Full-width ranks before every declared column, whatever their `order`.
fn column_rank(section: &SectionConfig, page: &PageLayout) -> Result<(u8, u32), ResolveError> {
    if section.column == ColumnId::FullWidth {
        return Ok((0, 0));
    }
    let column_id = section.column.as_ref();
    page.columns
        .iter()
        .find(|c| c.id == column_id)
        .map(|c| (1, c.order))
        .ok_or_else(|| ResolveError::UnknownColumn {
            section_id: section.id.to_string(),
            column_id: column_id.to_string(),
        })
}

/// A known section id must carry content of its own kind. Custom ids accept anything.
fn check_content_kind(section: &SectionConfig, data: &SectionData) -> Result<(), ResolveError> {
    match section.id.kind() {
        Some(kind) if data.kind() != Some(kind) => Err(ResolveError::ContentMismatch {
            section_id: section.id.to_string(),
            expected: kind.into(),
            found: data.type_str(),
        }),
        _ => Ok(()),
    }
}

/// Applies item overrides to a section's list items. Single-block sections pass through.
pub fn apply_overrides(data: SectionData, rules: &[ItemOverride]) -> SectionData {
    match data {
        SectionData::Basics { .. }
        | SectionData::Summary { .. }
        | SectionData::Objective { .. } => data,
        SectionData::Experience { items } => SectionData::Experience {
            items: apply_item_overrides(items, rules),
        },
        SectionData::Education { items } => SectionData::Education {
            items: apply_item_overrides(items, rules),
        },
        SectionData::Skills { items } => SectionData::Skills {
            items: apply_item_overrides(items, rules),
        },
        SectionData::Languages { items } => SectionData::Languages {
            items: apply_item_overrides(items, rules),
        },
        SectionData::Certifications { items } => SectionData::Certifications {
            items: apply_item_overrides(items, rules),
        },
        SectionData::Projects { items } => SectionData::Projects {
            items: apply_item_overrides(items, rules),
        },
        SectionData::Publications { items } => SectionData::Publications {
            items: apply_item_overrides(items, rules),
        },
        SectionData::Awards { items } => SectionData::Awards {
            items: apply_item_overrides(items, rules),
        },
        SectionData::Volunteer { items } => SectionData::Volunteer {
            items: apply_item_overrides(items, rules),
        },
        SectionData::Interests { items } => SectionData::Interests {
            items: apply_item_overrides(items, rules),
        },
        SectionData::References { items } => SectionData::References {
            items: apply_item_overrides(items, rules),
        },
        SectionData::Custom { title, items } => SectionData::Custom {
            title,
            items: apply_item_overrides(items, rules),
        },
    }
}

/// Filters and reorders items by their overrides.
///
/// Items hidden by an override are dropped. Overridden visible items come first, ordered by
/// `(order, input position)`; items without an override follow in their original order.
/// When an item id is overridden twice the first rule wins.
pub fn apply_item_overrides<T: SectionItem>(items: Vec<T>, rules: &[ItemOverride]) -> Vec<T> {
    let mut seen = HashSet::new();
    let rules: BTreeMap<&str, &ItemOverride> = rules
        .iter()
        .filter(|rule| seen.insert(rule.item_id.as_str()))
        .map(|rule| (rule.item_id.as_str(), rule))
        .collect();

    let mut ordered = Vec::new();
    let mut untouched = Vec::new();
    for item in items {
        match rules.get(item.item_id()) {
            Some(rule) if !rule.visible => {}
            Some(rule) => ordered.push((rule.order, item)),
            None => untouched.push(item),
        }
    }
    ordered.sort_by_key(|(order, _)| *order);

    ordered
        .into_iter()
        .map(|(_, item)| item)
        .chain(untouched)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ColumnDefinition, ExperienceItem, SkillItem, TextBlock};
    use crate::dsl::SectionId;
    use crate::fixtures;

    fn page(columns: &[(&str, u32)]) -> PageLayout {
        PageLayout {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_top_mm: 15.0,
            margin_bottom_mm: 15.0,
            margin_left_mm: 15.0,
            margin_right_mm: 15.0,
            columns: columns
                .iter()
                .map(|(id, order)| ColumnDefinition {
                    id: id.to_string(),
                    width_percentage: 100.0 / columns.len() as f64,
                    order: *order,
                })
                .collect(),
            column_gap_mm: 0.0,
            page_break_behavior: None,
            page_numbers: None,
        }
    }

    fn section(id: &str, visible: bool, order: u32, column: ColumnId) -> SectionConfig {
        SectionConfig {
            id: SectionId::new(id),
            visible,
            order,
            column,
        }
    }

    fn rule(item_id: &str, visible: bool, order: u32) -> ItemOverride {
        ItemOverride {
            item_id: item_id.to_string(),
            visible,
            order,
        }
    }

    fn skills(ids: &[&str]) -> Vec<SkillItem> {
        ids.iter()
            .map(|id| SkillItem {
                id: id.to_string(),
                name: id.to_uppercase(),
                level: None,
                category: None,
            })
            .collect()
    }

    fn ids<T: SectionItem>(items: &[T]) -> Vec<&str> {
        items.iter().map(SectionItem::item_id).collect()
    }

    fn placed_ids(placed: &[PlacedSection]) -> Vec<&str> {
        placed.iter().map(|p| p.section_id.as_str()).collect()
    }

    #[test]
    fn test_absent_items_stay_visible_after_overridden_ones() {
        let rules = [rule("exp-1", false, 0), rule("exp-2", true, 0)];
        let items = fixtures::experience_items(&["exp-1", "exp-2", "exp-3"]);
        let resolved: Vec<ExperienceItem> = apply_item_overrides(items, &rules);
        assert_eq!(ids(&resolved), vec!["exp-2", "exp-3"]);
    }

    #[test]
    fn test_overrides_reorder_with_stable_ties() {
        let rules = [rule("c", true, 0), rule("a", true, 1), rule("b", true, 0)];
        let resolved = apply_item_overrides(skills(&["a", "b", "c", "d"]), &rules);
        // b and c tie on order 0 and keep input order
        assert_eq!(ids(&resolved), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_first_duplicate_override_wins() {
        let rules = [rule("a", false, 0), rule("a", true, 5)];
        let resolved = apply_item_overrides(skills(&["a", "b"]), &rules);
        assert_eq!(ids(&resolved), vec!["b"]);
    }

    #[test]
    fn test_overrides_for_missing_items_are_ignored() {
        let rules = [rule("ghost", true, 0)];
        let resolved = apply_item_overrides(skills(&["a", "b"]), &rules);
        assert_eq!(ids(&resolved), vec!["a", "b"]);
    }

    #[test]
    fn test_block_sections_ignore_overrides() {
        let data = SectionData::Summary {
            data: TextBlock {
                content: "Engineer.".into(),
            },
        };
        assert_eq!(apply_overrides(data.clone(), &[rule("x", false, 0)]), data);
    }

    #[test]
    fn test_custom_section_keeps_title() {
        let data = fixtures::custom_talks();
        let resolved = apply_overrides(data, &[rule("talk-1", false, 0)]);
        let SectionData::Custom { title, items } = resolved else {
            panic!("expected custom section");
        };
        assert_eq!(title, "Talks");
        assert_eq!(ids(&items), vec!["talk-2"]);
    }

    #[test]
    fn test_hidden_sections_never_placed() {
        let sections = [
            section("summary", false, 0, ColumnId::Main),
            section("skills", true, 1, ColumnId::Main),
        ];
        let placed = place_sections(
            &sections,
            &page(&[("main", 0)]),
            &fixtures::section_content(),
            None,
            &fixtures::section_styles(),
        )
        .unwrap();
        assert_eq!(placed_ids(&placed), vec!["skills"]);
    }

    #[test]
    fn test_full_width_first_then_columns_by_order() {
        let sections = [
            section("skills", true, 0, ColumnId::Sidebar),
            section("experience", true, 1, ColumnId::Main),
            section("summary", true, 5, ColumnId::FullWidth),
            section("education", true, 0, ColumnId::Main),
        ];
        let placed = place_sections(
            &sections,
            &page(&[("main", 0), ("sidebar", 1)]),
            &fixtures::section_content(),
            None,
            &fixtures::section_styles(),
        )
        .unwrap();
        assert_eq!(
            placed_ids(&placed),
            vec!["summary", "education", "experience", "skills"]
        );
        assert_eq!(placed[0].column_id, "full-width");
        assert_eq!(placed[3].column_id, "sidebar");
    }

    #[test]
    fn test_column_rank_follows_declared_column_order() {
        let sections = [
            section("experience", true, 0, ColumnId::Main),
            section("skills", true, 0, ColumnId::Sidebar),
        ];
        let placed = place_sections(
            &sections,
            &page(&[("sidebar", 0), ("main", 1)]),
            &fixtures::section_content(),
            None,
            &fixtures::section_styles(),
        )
        .unwrap();
        assert_eq!(placed_ids(&placed), vec!["skills", "experience"]);
    }

    #[test]
    fn test_equal_order_keeps_input_position() {
        let sections = [
            section("skills", true, 3, ColumnId::Main),
            section("education", true, 3, ColumnId::Main),
            section("experience", true, 3, ColumnId::Main),
        ];
        let placed = place_sections(
            &sections,
            &page(&[("main", 0)]),
            &fixtures::section_content(),
            None,
            &fixtures::section_styles(),
        )
        .unwrap();
        assert_eq!(placed_ids(&placed), vec!["skills", "education", "experience"]);
    }

    #[test]
    fn test_undeclared_column_is_referential_error() {
        let sections = [section("skills", true, 0, ColumnId::Sidebar)];
        let err = place_sections(
            &sections,
            &page(&[("main", 0)]),
            &fixtures::section_content(),
            None,
            &fixtures::section_styles(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::UnknownColumn { ref section_id, ref column_id }
                if section_id == "skills" && column_id == "sidebar"
        ));
        assert!(!err.is_defect());
    }

    #[test]
    fn test_hidden_section_in_undeclared_column_is_ignored() {
        let sections = [section("skills", false, 0, ColumnId::Sidebar)];
        let placed = place_sections(
            &sections,
            &page(&[("main", 0)]),
            &fixtures::section_content(),
            None,
            &fixtures::section_styles(),
        )
        .unwrap();
        assert!(placed.is_empty());
    }

    #[test]
    fn test_visible_section_without_content_is_rejected() {
        let sections = [
            section("skills", true, 0, ColumnId::Main),
            section("awards", true, 1, ColumnId::Main),
        ];
        let err = place_sections(
            &sections,
            &page(&[("main", 0)]),
            &fixtures::section_content(),
            None,
            &fixtures::section_styles(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::MissingContent { ref section_id } if section_id == "awards"
        ));
        assert!(!err.is_defect());
    }

    #[test]
    fn test_hidden_section_without_content_is_fine() {
        let sections = [
            section("awards", false, 0, ColumnId::Main),
            section("skills", true, 1, ColumnId::Main),
        ];
        let placed = place_sections(
            &sections,
            &page(&[("main", 0)]),
            &fixtures::section_content(),
            None,
            &fixtures::section_styles(),
        )
        .unwrap();
        assert_eq!(placed_ids(&placed), vec!["skills"]);
    }

    #[test]
    fn test_max_column_order_still_ranks_after_full_width() {
        let sections = [
            section("skills", true, 0, ColumnId::Main),
            section("summary", true, 9, ColumnId::FullWidth),
        ];
        let placed = place_sections(
            &sections,
            &page(&[("main", u32::MAX)]),
            &fixtures::section_content(),
            None,
            &fixtures::section_styles(),
        )
        .unwrap();
        assert_eq!(placed_ids(&placed), vec!["summary", "skills"]);
    }

    #[test]
    fn test_mismatched_content_rejected() {
        let sections = [section("skills", true, 0, ColumnId::Main)];
        let mut content = SectionContent::new();
        content.insert("skills".into(), fixtures::summary_block());
        let err = place_sections(
            &sections,
            &page(&[("main", 0)]),
            &content,
            None,
            &fixtures::section_styles(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::ContentMismatch { expected: "skills", found: "summary", .. }
        ));
    }

    #[test]
    fn test_custom_section_id_accepts_any_content() {
        let sections = [section("talks", true, 0, ColumnId::Main)];
        let mut content = SectionContent::new();
        content.insert("talks".into(), fixtures::custom_talks());
        let placed = place_sections(
            &sections,
            &page(&[("main", 0)]),
            &content,
            None,
            &fixtures::section_styles(),
        )
        .unwrap();
        assert_eq!(placed[0].data.type_str(), "custom");
    }

    #[test]
    fn test_item_overrides_applied_per_section() {
        let sections = [section("experience", true, 0, ColumnId::Main)];
        let mut overrides = SectionItemOverrides::new();
        overrides.insert("experience".into(), vec![rule("exp-1", false, 0)]);
        let placed = place_sections(
            &sections,
            &page(&[("main", 0)]),
            &fixtures::section_content(),
            Some(&overrides),
            &fixtures::section_styles(),
        )
        .unwrap();
        assert_eq!(placed[0].data.item_ids(), vec!["exp-2", "exp-3"]);
    }
}
