//! Field rules applied during validation

use super::field::FieldSpec;
use super::validation::FieldValues;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A named, pure predicate over a field's string value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming whitespace
    Required,
    /// Looks like `local@domain.tld`. An empty value passes; pair with
    /// `Required` to reject it.
    Email,
    /// At least `n` characters
    MinLength(usize),
    /// Same value as another field of the form (password confirmation)
    EqualsField(String),
    /// A calendar date in the given chrono format; `hint` is shown to the user
    Date { format: String, hint: String },
}

impl Rule {
    pub fn min_length(n: usize) -> Self {
        Rule::MinLength(n)
    }

    pub fn equals_field(other: &str) -> Self {
        Rule::EqualsField(other.to_string())
    }

    pub fn date(format: &str, hint: &str) -> Self {
        Rule::Date {
            format: format.to_string(),
            hint: hint.to_string(),
        }
    }

    /// Check `value` against this rule.
    ///
    /// Only `Required` rejects an empty value. The other format rules pass on
    /// empty input so optional fields can be left blank; `EqualsField` always
    /// compares.
    pub fn check(&self, value: &str, values: &FieldValues) -> bool {
        match self {
            Rule::Required => !value.trim().is_empty(),
            Rule::Email => value.is_empty() || EMAIL_PATTERN.is_match(value),
            Rule::MinLength(n) => value.is_empty() || value.chars().count() >= *n,
            Rule::EqualsField(other) => {
                let other_value = values.get(other).map(String::as_str).unwrap_or("");
                value == other_value
            }
            Rule::Date { format, .. } => {
                value.is_empty() || NaiveDate::parse_from_str(value.trim(), format).is_ok()
            }
        }
    }

    /// Human-readable message for a field that failed this rule
    pub fn message(&self, label: &str, specs: &[FieldSpec]) -> String {
        match self {
            Rule::Required => format!("{label} is required"),
            Rule::Email => "Invalid email format".to_string(),
            Rule::MinLength(n) => format!("{label} must be at least {n} characters"),
            Rule::EqualsField(other) => {
                let other_label = specs
                    .iter()
                    .find(|spec| &spec.name == other)
                    .map(|spec| spec.label.as_str())
                    .unwrap_or(other.as_str());
                format!("{label} does not match {other_label}")
            }
            Rule::Date { hint, .. } => format!("{label} must be a valid date ({hint})"),
        }
    }
}
