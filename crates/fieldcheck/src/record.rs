// File: src/record.rs
// Purpose: Form records submitted for validation

use crate::value::Value;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static NULL: Value = Value::Null;

/// A submitted form record: field names mapped to raw values.
/// Values are stored exactly as submitted; no trimming happens here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Chainable setter for building records inline
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Get a field value. Absent fields read as `Value::Null`.
    pub fn get(&self, name: &str) -> &Value {
        self.fields.get(name).unwrap_or(&NULL)
    }

    /// Get a field value only if the field was actually submitted
    pub fn maybe(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.fields.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge another record into this one. Fields present in `other`
    /// overwrite fields of the same name here.
    pub fn merge(&mut self, other: Record) {
        self.fields.extend(other.fields);
    }

    /// Build a record from a JSON object
    pub fn from_json(json: serde_json::Value) -> anyhow::Result<Self> {
        match json {
            serde_json::Value::Object(map) => Ok(Self {
                fields: map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            }),
            _ => anyhow::bail!("Form records must be JSON objects"),
        }
    }

    /// Build a record from any serializable form struct
    pub fn from_serialize<T: Serialize>(form: &T) -> anyhow::Result<Self> {
        let json = serde_json::to_value(form).context("Failed to serialize form into a record")?;
        Self::from_json(json)
    }
}

impl From<HashMap<String, Value>> for Record {
    fn from(fields: HashMap<String, Value>) -> Self {
        Self { fields }
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
