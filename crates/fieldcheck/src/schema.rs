// File: src/schema.rs
// Purpose: Declarative validation schemas over form records

use crate::record::Record;
use crate::result::ValidationResult;
use crate::rules::Rule;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct FieldRules {
    name: String,
    rules: Vec<Rule>,
}

/// An ordered set of field rules.
///
/// Fields validate in declaration order; each field's rules run in
/// insertion order and stop at the first failure, so a field reports
/// at most one message per pass.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Attach rules to a field. Calling this again with the same name
    /// appends to that field's existing rules; the field keeps its
    /// original position.
    pub fn field(mut self, name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        let name = name.into();
        if let Some(existing) = self.fields.iter_mut().find(|f| f.name == name) {
            existing.rules.extend(rules);
        } else {
            self.fields.push(FieldRules {
                name,
                rules: rules.into_iter().collect(),
            });
        }
        self
    }

    /// Validate a record. Rule failures come back as data; this call
    /// itself cannot fail.
    pub fn validate(&self, record: &Record) -> ValidationResult {
        let mut errors = HashMap::new();
        for field in &self.fields {
            let value = record.get(&field.name);
            for rule in &field.rules {
                if !rule.check(value, record) {
                    errors.insert(field.name.clone(), rule.failure_message().to_string());
                    break;
                }
            }
        }
        ValidationResult::from_errors(errors)
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
