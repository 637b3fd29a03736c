//! # fieldcheck
//!
//! Declarative validation for dynamic form records: build a schema of
//! per-field rules once, run it against submitted records, and get back
//! a field-to-message error map.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck::{Record, Rule, Schema};
//!
//! let schema = Schema::new()
//!     .field("email", [Rule::required(), Rule::email()])
//!     .field("password", [Rule::required(), Rule::min_length(8)]);
//!
//! let submission = Record::new()
//!     .set("email", "ada@example.com")
//!     .set("password", "longenough1");
//!
//! let result = schema.validate(&submission);
//! assert!(result.is_valid());
//!
//! let bad = Record::new().set("email", "bad").set("password", "short");
//! let result = schema.validate(&bad);
//! assert_eq!(result.error("email"), Some("Must be a valid email address"));
//! assert_eq!(result.error("password"), Some("Must be at least 8 characters"));
//! ```
//!
//! Rules fire in insertion order and stop at a field's first failure,
//! so each field reports at most one message per pass. Format rules
//! (`email`, `min_length`, ...) skip absent and empty values; add
//! `Rule::required()` when a field must be filled in.

pub mod config;
pub mod record;
pub mod result;
pub mod rules;
pub mod schema;
pub mod typed;
pub mod validators;
pub mod value;

pub use config::{Config, RuleTuning};
pub use record::Record;
pub use result::ValidationResult;
pub use rules::Rule;
pub use schema::Schema;
pub use typed::Validate;
pub use value::Value;
