use thiserror::Error;

use crate::schema::ValidationErrors;

/// Errors returned by the resolver.
///
/// Caller errors (`Validation`, `UnknownColumn`, `MissingContent`, `ContentMismatch`)
/// describe bad input and are fixed by changing it. Defects (`TableMiss`, `ColumnWidths`,
/// `InvalidOutput`) mean the resolver's tables or arithmetic disagree with the schemas;
/// retrying never helps.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(
        "Section '{section_id}' is placed in column '{column_id}', which the layout does not declare"
    )]
    UnknownColumn {
        section_id: String,
        column_id: String,
    },

    #[error("Section '{section_id}' is visible but no content was supplied for it")]
    MissingContent { section_id: String },

    #[error("Content for section '{section_id}' is '{found}', expected '{expected}'")]
    ContentMismatch {
        section_id: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("No {category} table entry for token '{token}'")]
    TableMiss {
        category: &'static str,
        token: String,
    },

    #[error("Column widths sum to {total}%, expected exactly 100%")]
    ColumnWidths { total: f64 },

    #[error("Resolved AST failed validation: {0}")]
    InvalidOutput(ValidationErrors),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResolveError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ResolveError::Validation(_) => "VALIDATION_ERROR",
            ResolveError::UnknownColumn { .. } => "REFERENTIAL_INTEGRITY_ERROR",
            ResolveError::MissingContent { .. } => "MISSING_CONTENT",
            ResolveError::ContentMismatch { .. } => "CONTENT_MISMATCH",
            ResolveError::TableMiss { .. } => "TOKEN_TABLE_MISS",
            ResolveError::ColumnWidths { .. } => "GEOMETRY_INVARIANT",
            ResolveError::InvalidOutput(_) => "INVALID_OUTPUT",
            ResolveError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// True for errors that indicate a bug in the resolver rather than bad input.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            ResolveError::TableMiss { .. }
                | ResolveError::ColumnWidths { .. }
                | ResolveError::InvalidOutput(_)
                | ResolveError::Serialization(_)
        )
    }
}
