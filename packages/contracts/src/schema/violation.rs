use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use thiserror::Error;

/// Machine-readable category of a single field violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ViolationKind {
    /// A required field is absent.
    Required,
    /// The value has the wrong JSON type.
    InvalidType,
    /// A string is not one of the enum's declared members.
    InvalidEnumValue,
    TooSmall,
    TooBig,
    /// A string of the wrong shape, such as a malformed timestamp.
    InvalidFormat,
    /// Two fields disagree; only reported in strict mode.
    CrossField,
}

/// One field-level violation: where, what, and which category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Dot-joined path to the offending field, e.g. `sections.0.column`. Empty for the root.
    pub path: String,
    pub message: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{} ({})", self.message, self.kind)
        } else {
            write!(f, "{}: {} ({})", self.path, self.message, self.kind)
        }
    }
}

/// Every violation found while validating one document.
///
/// Never empty when returned from [`crate::schema::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{} violation(s): {}", .violations.len(), summarize(.violations))]
pub struct ValidationErrors {
    pub violations: Vec<Violation>,
}

impl ValidationErrors {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the violations reported at exactly `path`.
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.path == path)
    }

    pub fn has(&self, path: &str, kind: ViolationKind) -> bool {
        self.at(path).any(|v| v.kind == kind)
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
