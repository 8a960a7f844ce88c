//! The resolver: validated DSL + fetched content → renderer-ready `ResumeAst`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use tracing::{debug, error};

use crate::ast::{AstMeta, ResumeAst};
use crate::config::EngineConfig;
use crate::dsl::ResumeDsl;
use crate::errors::ResolveError;
use crate::resolve::geometry::resolve_page;
use crate::resolve::placement::{place_sections, SectionContent};
use crate::resolve::styles::{resolve_global_styles, resolve_section_styles};
use crate::schema::{validate, validate_strict};

/// Source of the `generatedAt` timestamp. Inject a fixed clock for reproducible output.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Resolves resume DSL documents. Holds no state between calls and may be shared freely.
#[derive(Debug, Clone)]
pub struct Resolver<C = SystemClock> {
    config: EngineConfig,
    clock: C,
}

impl Resolver<SystemClock> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for Resolver<SystemClock> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<C: Clock> Resolver<C> {
    pub fn with_clock(config: EngineConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validates raw DSL and content JSON, then resolves them.
    ///
    /// The DSL is checked with cross-field rules when `strict_layout` is set.
    pub fn resolve_json(&self, dsl: &Value, content: &Value) -> Result<ResumeAst, ResolveError> {
        let dsl: ResumeDsl = if self.config.strict_layout {
            validate_strict(dsl)?
        } else {
            validate(dsl)?
        };
        let content: SectionContent = validate(content)?;
        self.resolve(&dsl, &content)
    }

    /// Resolves an already-validated DSL against its section content.
    ///
    /// The same inputs and clock always produce the same AST.
    pub fn resolve(
        &self,
        dsl: &ResumeDsl,
        content: &SectionContent,
    ) -> Result<ResumeAst, ResolveError> {
        let result = self.build(dsl, content);
        if let Err(err) = &result {
            if err.is_defect() {
                error!(code = err.code(), error = %err, "resume resolution defect");
            }
        }
        result
    }

    fn build(&self, dsl: &ResumeDsl, content: &SectionContent) -> Result<ResumeAst, ResolveError> {
        let page = resolve_page(&dsl.layout, &self.config)?;
        let section_styles = resolve_section_styles(&dsl.tokens)?;
        let global_styles = resolve_global_styles(&dsl.tokens)?;
        let sections = place_sections(
            &dsl.sections,
            &page,
            content,
            dsl.item_overrides.as_ref(),
            &section_styles,
        )?;

        let ast = ResumeAst {
            meta: AstMeta {
                version: dsl.version.clone(),
                generated_at: self.clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
            },
            page,
            sections,
            global_styles,
        };

        if self.config.validate_output {
            check_output(&ast)?;
        }

        debug!(
            version = %ast.meta.version,
            columns = ast.page.columns.len(),
            sections = ast.sections.len(),
            "resolved resume"
        );
        Ok(ast)
    }
}

/// Runs the AST validator over what the resolver is about to return.
fn check_output(ast: &ResumeAst) -> Result<(), ResolveError> {
    let value = serde_json::to_value(ast)?;
    validate::<ResumeAst>(&value)
        .map(|_| ())
        .map_err(ResolveError::InvalidOutput)
}
