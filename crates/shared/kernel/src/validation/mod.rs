//! # Field Validation
//!
//! Declarative constraints for entity forms. A [`Schema`] lists [`Field`]s, each with
//! an ordered set of [`Rule`]s, plus optional cross-field [`Check`]s. Validation runs
//! against a JSON object and reports at most one [`Violation`] per field: the first
//! rule that fails. Violation codes are i18n keys (`validation.required`, ...), so the
//! UI resolves the message through the same catalog as everything else.
//!
//! Values are never coerced: `"42"` is not a number and `"true"` is not a boolean.

mod schemas;

pub use schemas::{
    client, invoice, invoice_item, login, project, register_password, register_preferences,
    register_profile, time_entry,
};

use crate::date::is_date_string;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[allow(clippy::expect_used)]
static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("slug pattern is valid"));

pub mod codes {
    pub const REQUIRED: &str = "validation.required";
    pub const INVALID_TYPE: &str = "validation.invalid_type";
    pub const TOO_SHORT: &str = "validation.too_short";
    pub const TOO_SMALL: &str = "validation.too_small";
    pub const TOO_BIG: &str = "validation.too_big";
    pub const NOT_INTEGER: &str = "validation.not_integer";
    pub const NOT_POSITIVE: &str = "validation.not_positive";
    pub const INVALID_EMAIL: &str = "validation.invalid_email";
    pub const INVALID_SLUG: &str = "validation.invalid_slug";
    pub const INVALID_DATE: &str = "validation.invalid_date";
    pub const INVALID_ENUM: &str = "validation.invalid_enum";
    pub const MISMATCH: &str = "validation.mismatch";
}

/// A single constraint on a field value.
#[derive(Debug, Clone)]
pub enum Rule {
    Text,
    /// String with at least this many characters.
    MinLength(usize),
    Email,
    Slug,
    Number,
    Integer,
    /// Strictly greater than zero.
    Positive,
    Min(f64),
    Max(f64),
    DateString,
    Boolean,
    OneOf(&'static [&'static str]),
    /// Array whose elements each satisfy the inner rule.
    Each(Box<Rule>),
    /// Array of objects validated by a nested schema.
    Items(Schema),
    /// Accepts an empty string, otherwise applies the inner rule.
    EmptyOr(Box<Rule>),
}

/// A failed rule for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Field path; nested items use dots (`items.0.description`).
    pub field: String,
    /// i18n key describing the failure.
    pub code: &'static str,
}

/// A named field with its rules.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub optional: bool,
    pub rules: Vec<Rule>,
}

impl Field {
    #[must_use]
    pub fn required(name: &'static str, rules: Vec<Rule>) -> Self {
        Self { name, optional: false, rules }
    }

    #[must_use]
    pub fn optional(name: &'static str, rules: Vec<Rule>) -> Self {
        Self { name, optional: true, rules }
    }

    /// Validates one value the way a form input validator would: returns the first
    /// failing rule, if any. `None` means the field is absent.
    ///
    /// # Errors
    /// Returns the first [`Violation`] produced by this field's rules.
    pub fn check(&self, value: Option<&Value>) -> Result<(), Violation> {
        let value = match value {
            None | Some(Value::Null) if self.optional => return Ok(()),
            None | Some(Value::Null) => return Err(self.violation(None, codes::REQUIRED)),
            Some(v) => v,
        };

        for rule in &self.rules {
            if let Err((suffix, code)) = apply(rule, value) {
                return Err(self.violation(suffix, code));
            }
        }
        Ok(())
    }

    fn violation(&self, suffix: Option<String>, code: &'static str) -> Violation {
        let field = suffix.map_or_else(|| self.name.to_owned(), |s| format!("{}.{s}", self.name));
        Violation { field, code }
    }
}

/// Cross-field constraints evaluated after the per-field rules pass.
#[derive(Debug, Clone)]
pub enum Check {
    /// `field` must equal `other`; the violation is reported on `field`.
    Matches { field: &'static str, other: &'static str },
}

impl Check {
    fn evaluate(&self, object: &Map<String, Value>) -> Option<Violation> {
        match self {
            Self::Matches { field, other } => (object.get(*field) != object.get(*other))
                .then(|| Violation { field: (*field).to_owned(), code: codes::MISMATCH }),
        }
    }
}

/// A named collection of fields and checks.
#[derive(Debug, Clone)]
pub struct Schema {
    pub name: &'static str,
    pub fields: Vec<Field>,
    pub checks: Vec<Check>,
}

impl Schema {
    #[must_use]
    pub const fn new(name: &'static str, fields: Vec<Field>) -> Self {
        Self { name, fields, checks: Vec::new() }
    }

    #[must_use]
    pub fn with_check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Collects every violation, in field declaration order.
    ///
    /// Cross-field checks only run when the per-field rules all pass.
    #[must_use]
    pub fn violations(&self, value: &Value) -> Vec<Violation> {
        let Some(object) = value.as_object() else {
            return vec![Violation { field: String::new(), code: codes::INVALID_TYPE }];
        };

        let mut found: Vec<Violation> =
            self.fields.iter().filter_map(|f| f.check(object.get(f.name)).err()).collect();

        if found.is_empty() {
            found.extend(self.checks.iter().filter_map(|c| c.evaluate(object)));
        }
        found
    }

    /// Validates an object.
    ///
    /// # Errors
    /// Returns [`ValidationError::Invalid`] with every violation found.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let violations = self.violations(value);
        if violations.is_empty() {
            return Ok(());
        }
        Err(ValidationError::Invalid { schema: self.name, violations, context: None })
    }
}

#[fhub_derive::fhub_error]
pub enum ValidationError {
    #[error(
        "Validation of {schema} failed{}: {}",
        format_context(.context),
        summarize(.violations)
    )]
    Invalid { schema: &'static str, violations: Vec<Violation>, context: Option<Cow<'static, str>> },
}

impl ValidationError {
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Invalid { violations, .. } => violations,
        }
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations.iter().map(|v| format!("{} ({})", v.field, v.code)).collect::<Vec<_>>().join(", ")
}

type Failure = (Option<String>, &'static str);

fn apply(rule: &Rule, value: &Value) -> Result<(), Failure> {
    let fail = |code: &'static str| -> Result<(), Failure> { Err((None, code)) };
    match rule {
        Rule::Text => value.as_str().map_or_else(|| fail(codes::INVALID_TYPE), |_| Ok(())),
        Rule::MinLength(min) => match value.as_str() {
            None => fail(codes::INVALID_TYPE),
            Some(s) if s.chars().count() < *min => fail(codes::TOO_SHORT),
            Some(_) => Ok(()),
        },
        Rule::Email => text_matching(value, &EMAIL, codes::INVALID_EMAIL),
        Rule::Slug => text_matching(value, &SLUG, codes::INVALID_SLUG),
        Rule::DateString => match value.as_str() {
            None => fail(codes::INVALID_TYPE),
            Some(s) if is_date_string(s) => Ok(()),
            Some(_) => fail(codes::INVALID_DATE),
        },
        Rule::Number => number(value).map(|_| ()),
        Rule::Integer => {
            let n = number(value)?;
            if n.fract() == 0.0 { Ok(()) } else { fail(codes::NOT_INTEGER) }
        },
        Rule::Positive => {
            if number(value)? > 0.0 { Ok(()) } else { fail(codes::NOT_POSITIVE) }
        },
        Rule::Min(min) => {
            if number(value)? >= *min { Ok(()) } else { fail(codes::TOO_SMALL) }
        },
        Rule::Max(max) => {
            if number(value)? <= *max { Ok(()) } else { fail(codes::TOO_BIG) }
        },
        Rule::Boolean => {
            if value.is_boolean() { Ok(()) } else { fail(codes::INVALID_TYPE) }
        },
        Rule::OneOf(allowed) => match value.as_str() {
            Some(s) if allowed.contains(&s) => Ok(()),
            _ => fail(codes::INVALID_ENUM),
        },
        Rule::Each(inner) => {
            let items = value.as_array().ok_or((None, codes::INVALID_TYPE))?;
            for (index, item) in items.iter().enumerate() {
                apply(inner, item).map_err(|(_, code)| (Some(index.to_string()), code))?;
            }
            Ok(())
        },
        Rule::Items(schema) => {
            let items = value.as_array().ok_or((None, codes::INVALID_TYPE))?;
            for (index, item) in items.iter().enumerate() {
                if let Some(first) = schema.violations(item).into_iter().next() {
                    let path = if first.field.is_empty() {
                        index.to_string()
                    } else {
                        format!("{index}.{}", first.field)
                    };
                    return Err((Some(path), first.code));
                }
            }
            Ok(())
        },
        Rule::EmptyOr(inner) => match value.as_str() {
            Some("") => Ok(()),
            _ => apply(inner, value),
        },
    }
}

fn number(value: &Value) -> Result<f64, Failure> {
    value.as_f64().ok_or((None, codes::INVALID_TYPE))
}

fn text_matching(value: &Value, pattern: &Regex, code: &'static str) -> Result<(), Failure> {
    match value.as_str() {
        None => Err((None, codes::INVALID_TYPE)),
        Some(s) if pattern.is_match(s) => Ok(()),
        Some(_) => Err((None, code)),
    }
}
