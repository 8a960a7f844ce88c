//! Resume design contracts and the resolver that connects them.
//!
//! A resume's design is described twice. The [`dsl`] is what users and editors write:
//! semantic tokens ("base", "md", "comfortable"), section placement and pagination
//! preferences. The [`ast`] is what renderers consume: millimetres, pixels and CSS
//! strings, with every section already placed in a column. [`resolve::Resolver`] turns
//! the first into the second, and [`schema`] validates both at the JSON boundary.

pub mod ast;
pub mod config;
pub mod dsl;
pub mod errors;
pub mod resolve;
pub mod schema;

#[cfg(test)]
pub(crate) mod fixtures;

pub use ast::ResumeAst;
pub use config::EngineConfig;
pub use dsl::ResumeDsl;
pub use errors::ResolveError;
pub use resolve::{Clock, FixedClock, Resolver, SectionContent, SystemClock};
pub use schema::{
    validate, validate_strict, CrossFieldCheck, CrossFieldRules, ValidationErrors, Violation,
    ViolationKind,
};
