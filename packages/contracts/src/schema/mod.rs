//! Validation of untrusted JSON into strongly-typed contract values.
//!
//! Contract types derive [`JsonSchema`]; the generated schema is compiled once per type
//! and every error it reports becomes a [`Violation`] with a dot-joined path. Only a
//! document that passes the structural pass is handed to serde. Rules that relate
//! several fields run afterwards, in strict mode only (see [`CrossFieldRules`]).
//!
//! Validators are pure. A failed validation is an ordinary `Err` value, not a panic.

mod violation;

use std::any::type_name;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use jsonschema::error::ValidationErrorKind;
use jsonschema::{validator_for, ValidationError, Validator};
use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

pub use violation::{ValidationErrors, Violation, ViolationKind};

static VALIDATORS: Lazy<RwLock<HashMap<&'static str, Arc<Validator>>>> =
    Lazy::new(Default::default);

/// Validates `value` against `T`'s schema using the lenient rules.
pub fn validate<T>(value: &Value) -> Result<T, ValidationErrors>
where
    T: JsonSchema + DeserializeOwned,
{
    let validator = compiled::<T>()?;
    let violations: Vec<Violation> = validator.iter_errors(value).map(to_violation).collect();
    if !violations.is_empty() {
        return Err(ValidationErrors::new(violations));
    }
    // The schema cannot express every bound serde enforces (e.g. `u16` overflow).
    serde_json::from_value(value.clone()).map_err(|err| {
        ValidationErrors::new(vec![Violation {
            path: String::new(),
            message: err.to_string(),
            kind: ViolationKind::InvalidType,
        }])
    })
}

/// Validates `value` and then applies `T`'s cross-field rules.
pub fn validate_strict<T>(value: &Value) -> Result<T, ValidationErrors>
where
    T: JsonSchema + DeserializeOwned + CrossFieldRules,
{
    let parsed: T = validate(value)?;
    let mut cx = CrossFieldCheck::default();
    parsed.check_cross_fields(&mut cx);
    if cx.violations.is_empty() {
        Ok(parsed)
    } else {
        Err(ValidationErrors::new(cx.violations))
    }
}

fn compiled<T: JsonSchema>() -> Result<Arc<Validator>, ValidationErrors> {
    let key = type_name::<T>();
    if let Some(found) = VALIDATORS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(key)
    {
        return Ok(Arc::clone(found));
    }

    let validator = compile::<T>().map_err(|message| {
        error!(schema = key, %message, "contract schema failed to compile");
        ValidationErrors::new(vec![Violation {
            path: String::new(),
            message,
            kind: ViolationKind::InvalidType,
        }])
    })?;
    VALIDATORS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key, Arc::clone(&validator));
    Ok(validator)
}

fn compile<T: JsonSchema>() -> Result<Arc<Validator>, String> {
    let schema = schemars::schema_for!(T);
    let schema_value = serde_json::to_value(&schema).map_err(|err| err.to_string())?;
    let validator = validator_for(&schema_value).map_err(|err| err.to_string())?;
    Ok(Arc::new(validator))
}

fn to_violation(err: ValidationError<'_>) -> Violation {
    let mut path = pointer_to_path(&err.instance_path.to_string());
    let kind = match &err.kind {
        ValidationErrorKind::Required { property } => {
            // Report a missing field at the field itself, not at its parent.
            if let Some(name) = property.as_str() {
                if !path.is_empty() {
                    path.push('.');
                }
                path.push_str(name);
            }
            ViolationKind::Required
        }
        ValidationErrorKind::Enum { .. } | ValidationErrorKind::Constant { .. } => {
            ViolationKind::InvalidEnumValue
        }
        ValidationErrorKind::Minimum { .. }
        | ValidationErrorKind::ExclusiveMinimum { .. }
        | ValidationErrorKind::MinLength { .. } => ViolationKind::TooSmall,
        ValidationErrorKind::Maximum { .. }
        | ValidationErrorKind::ExclusiveMaximum { .. }
        | ValidationErrorKind::MaxLength { .. } => ViolationKind::TooBig,
        ValidationErrorKind::Pattern { .. } | ValidationErrorKind::Format { .. } => {
            ViolationKind::InvalidFormat
        }
        // Optional enums are `anyOf [member, null]`, so a stray string lands here.
        ValidationErrorKind::AnyOf { .. } | ValidationErrorKind::OneOfNotValid { .. }
            if err.instance.is_string() =>
        {
            ViolationKind::InvalidEnumValue
        }
        _ => ViolationKind::InvalidType,
    };
    Violation {
        path,
        message: err.to_string(),
        kind,
    }
}

/// Turns a JSON pointer (`/sections/0/column`) into a dotted path (`sections.0.column`).
fn pointer_to_path(pointer: &str) -> String {
    pointer
        .split('/')
        .skip(1)
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}

// ────────────────────────────────────────────────────────────────────────────
// Cross-field rules
// ────────────────────────────────────────────────────────────────────────────

/// Rules that relate several fields of an already-parsed value.
pub trait CrossFieldRules {
    fn check_cross_fields(&self, cx: &mut CrossFieldCheck);
}

/// Path-tracking collector for [`CrossFieldRules`].
#[derive(Debug, Default)]
pub struct CrossFieldCheck {
    path: Vec<String>,
    violations: Vec<Violation>,
}

impl CrossFieldCheck {
    /// Records a `cross_field` violation at `key` below the current path.
    pub fn report_at(&mut self, key: &str, message: impl Into<String>) {
        let path = self
            .path
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(key))
            .collect::<Vec<_>>()
            .join(".");
        self.violations.push(Violation {
            path,
            message: message.into(),
            kind: ViolationKind::CrossField,
        });
    }

    /// Runs `f` with `key` appended to the current path.
    pub fn nested(&mut self, key: &str, f: impl FnOnce(&mut Self)) {
        self.path.push(key.to_string());
        f(self);
        self.path.pop();
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
