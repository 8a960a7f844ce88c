use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use contracts::{EngineConfig, Resolver};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "resolve-resume",
    version,
    about = "Resolve a resume design document into a renderer-ready layout tree"
)]
struct Args {
    /// Resume DSL document (JSON)
    dsl: PathBuf,
    /// Section content keyed by section id (JSON)
    content: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration first; malformed RESUME_* variables abort here
    let config = EngineConfig::from_env()?;
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    // Logs go to stderr so stdout carries only the resolved AST
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "resolve-resume v{} (strict_layout={}, validate_output={})",
        env!("CARGO_PKG_VERSION"),
        config.strict_layout,
        config.validate_output
    );

    let dsl = read_json(&args.dsl)?;
    let content = read_json(&args.content)?;

    let resolver = Resolver::new(config);
    let ast = resolver
        .resolve_json(&dsl, &content)
        .with_context(|| format!("failed to resolve {}", args.dsl.display()))?;

    info!(sections = ast.sections.len(), "resume resolved");
    println!("{}", serde_json::to_string_pretty(&ast)?);
    Ok(())
}

fn read_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}
