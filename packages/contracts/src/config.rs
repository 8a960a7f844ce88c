use anyhow::{Context, Result};

use crate::dsl::ColumnDistribution;

/// Resolver configuration. `Default` matches the lenient schema behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Enforce cross-field layout rules when validating raw DSL JSON.
    pub strict_layout: bool,
    /// Re-validate every resolved AST before returning it.
    pub validate_output: bool,
    /// Split used by multi-column layouts that omit `columnDistribution`.
    pub default_distribution: ColumnDistribution,
    /// Gutter between columns on multi-column pages.
    pub column_gap_mm: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strict_layout: false,
            validate_output: true,
            default_distribution: ColumnDistribution::SeventyThirty,
            column_gap_mm: 5.0,
        }
    }
}

impl EngineConfig {
    /// Reads overrides from the environment (and `.env` if present).
    ///
    /// Unset variables keep their defaults; malformed ones are an error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Self::default();
        Ok(EngineConfig {
            strict_layout: env_flag("RESUME_STRICT_LAYOUT", defaults.strict_layout)?,
            validate_output: env_flag("RESUME_VALIDATE_OUTPUT", defaults.validate_output)?,
            default_distribution: match std::env::var("RESUME_DEFAULT_COLUMN_DISTRIBUTION") {
                Ok(raw) => raw.parse::<ColumnDistribution>().with_context(|| {
                    format!("RESUME_DEFAULT_COLUMN_DISTRIBUTION '{raw}' is not a known split")
                })?,
                Err(_) => defaults.default_distribution,
            },
            column_gap_mm: match std::env::var("RESUME_COLUMN_GAP_MM") {
                Ok(raw) => raw
                    .parse::<f64>()
                    .context("RESUME_COLUMN_GAP_MM must be a number")?,
                Err(_) => defaults.column_gap_mm,
            },
        })
    }
}

fn env_flag(key: &str, default: bool) -> Result<bool> {
    match std::env::var(key) {
        Ok(raw) => parse_flag(&raw).with_context(|| format!("{key} must be true or false")),
        Err(_) => Ok(default),
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognised flag value '{other}'"),
    }
}
