// Resolution engine: turns a validated ResumeDsl plus fetched section content into a
// ResumeAst. Pure and deterministic given an injected clock.

pub mod engine;
pub mod geometry;
pub mod placement;
pub mod styles;
pub mod tables;

// Re-export the public API consumed by the binary and downstream renderers.
pub use engine::{Clock, FixedClock, Resolver, SystemClock};
pub use geometry::{check_column_widths, resolve_columns, resolve_page};
pub use placement::{apply_item_overrides, apply_overrides, place_sections, SectionContent};
pub use styles::{
    resolve_container, resolve_global_styles, resolve_section_styles, resolve_typography,
    TextRole,
};
pub use tables::TokenTable;
