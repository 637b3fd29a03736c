// File: src/typed.rs
// Purpose: Validation for typed form structs

use crate::record::Record;
use crate::result::ValidationResult;
use crate::schema::Schema;
use serde::Serialize;
use std::collections::HashMap;

/// Trait for form types that can validate themselves
pub trait Validate {
    /// Returns Ok(()) if valid, or Err with a map of field names to
    /// error messages
    fn validate(&self) -> Result<(), HashMap<String, String>>;
}

impl Schema {
    /// Validate a typed form struct by serializing it into a record.
    /// Serialization failure is a real error; rule failures come back
    /// inside the Ok result as usual.
    pub fn validate_serialize<T: Serialize>(&self, form: &T) -> anyhow::Result<ValidationResult> {
        let record = Record::from_serialize(form)?;
        Ok(self.validate(&record))
    }
}
