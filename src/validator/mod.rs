use crate::fields::classify;
use anyhow::Result;
use std::collections::HashMap;
use std::fmt::{self, Display};

/// The per-category regular expressions and message templates.
pub mod rules;
use rules::RuleSet;

#[cfg(test)]
mod test;

/// A single reported validation failure. Created when a field's value fails
/// its category rule and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field-name identifier the failure belongs to.
    pub field: String,
    /// The rendered user-facing message.
    pub message: String,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Checks form-field values against per-category character rules and
/// reports every failure. Holds the compiled [RuleSet] so repeated calls
/// don't recompile the patterns.
#[derive(Debug)]
pub struct FieldValidator {
    rules: RuleSet,
}

impl FieldValidator {
    /// Compiles the rule set. The patterns are fixed, so this only fails if
    /// the crate itself ships a broken pattern.
    pub fn new() -> Result<Self> {
        let rules = RuleSet::compile()?;
        Ok(Self { rules })
    }

    /// Checks each name in `fields`, in order, against the value found in
    /// `values`, and returns every failure as an ordered sequence.
    ///
    /// Fields absent from `values` or holding an empty string are skipped
    /// outright: empty values are exempt from validation, required-ness is
    /// the host form's concern. All listed fields are checked even when
    /// earlier ones fail, so the caller receives the complete failure set
    /// in one pass.
    pub fn validate(
        &self,
        values: &HashMap<String, String>,
        fields: &[&str],
    ) -> Vec<ValidationError> {
        let mut failures = Vec::new();

        for &field in fields {
            let value = values.get(field).map(String::as_str).unwrap_or_default();
            if value.is_empty() {
                continue;
            }

            let category = classify(field);
            if self.rules.is_valid(category, value) {
                continue;
            }
            log::debug!("field '{field}' failed {category:?} validation");

            failures.push(ValidationError {
                field: field.to_string(),
                message: self.rules.message(category, field),
            });
        }
        failures
    }
}
