// File: src/rules.rs
// Purpose: Field rule primitives (constraint + error message)

use crate::record::Record;
use crate::validators;
use crate::value::Value;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Custom predicate over a value and the whole record
#[derive(Clone)]
pub(crate) struct CustomCheck(Arc<dyn Fn(&Value, &Record) -> bool + Send + Sync>);

impl fmt::Debug for CustomCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomCheck")
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Constraint {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email(Regex),
    Phone { min_digits: usize },
    Url,
    Pattern(Regex),
    Numeric,
    Integer,
    Min(f64),
    Max(f64),
    OneOf(Vec<Value>),
    MatchesField(String),
    Contains(String),
    StartsWith(String),
    EndsWith(String),
    MinItems(usize),
    MaxItems(usize),
    Custom(CustomCheck),
}

impl Constraint {
    /// Format rules skip absent and empty values; `required` is the one
    /// rule that rejects emptiness. Custom and cross-field rules see
    /// every value so the predicate owns its own emptiness policy.
    fn skips_empty(&self) -> bool {
        !matches!(
            self,
            Constraint::Required | Constraint::Custom(_) | Constraint::MatchesField(_)
        )
    }
}

/// A single validation rule: one constraint paired with the message
/// reported when the constraint fails.
#[derive(Debug, Clone)]
pub struct Rule {
    constraint: Constraint,
    message: String,
}

impl Rule {
    fn new(constraint: Constraint, message: impl Into<String>) -> Self {
        Self {
            constraint,
            message: message.into(),
        }
    }

    /// Value must be present: non-null, non-empty array, and for strings
    /// non-empty after trimming. Numbers, booleans, and objects always pass.
    pub fn required() -> Self {
        Self::new(Constraint::Required, "This field is required")
    }

    /// Text length (in characters) must be at least `n`
    pub fn min_length(n: usize) -> Self {
        Self::new(
            Constraint::MinLength(n),
            format!("Must be at least {} characters", n),
        )
    }

    /// Text length (in characters) must be at most `n`
    pub fn max_length(n: usize) -> Self {
        Self::new(
            Constraint::MaxLength(n),
            format!("Must be at most {} characters", n),
        )
    }

    /// Text must look like `local@domain.tld` (simple pattern, not RFC 5322)
    pub fn email() -> Self {
        Self::email_with(validators::default_email_regex())
    }

    /// Email rule with a caller-supplied pattern
    pub fn email_with(pattern: Regex) -> Self {
        Self::new(Constraint::Email(pattern), "Must be a valid email address")
    }

    /// Phone number: digits, spaces, `+`, `-`, parentheses, with at least
    /// the default number of digits
    pub fn phone() -> Self {
        Self::phone_min_digits(validators::DEFAULT_PHONE_MIN_DIGITS)
    }

    /// Phone rule with a caller-supplied digit threshold
    pub fn phone_min_digits(min_digits: usize) -> Self {
        Self::new(
            Constraint::Phone { min_digits },
            "Must be a valid phone number",
        )
    }

    /// Text must parse as an absolute URL with a host
    pub fn url() -> Self {
        Self::new(Constraint::Url, "Must be a valid URL")
    }

    /// Text must match a pre-compiled regex. Taking `Regex` (not `&str`)
    /// keeps a bad pattern from turning into a silent validation failure.
    pub fn pattern(pattern: Regex) -> Self {
        Self::new(Constraint::Pattern(pattern), "Invalid format")
    }

    /// Value must read as a finite number
    pub fn numeric() -> Self {
        Self::new(Constraint::Numeric, "Must be a number")
    }

    /// Value must read as a whole number
    pub fn integer() -> Self {
        Self::new(Constraint::Integer, "Must be a whole number")
    }

    /// Numeric value must be at least `limit`. Non-numeric values fail.
    pub fn min(limit: impl Into<f64>) -> Self {
        let limit = limit.into();
        Self::new(Constraint::Min(limit), format!("Must be at least {}", limit))
    }

    /// Numeric value must be at most `limit`. Non-numeric values fail.
    pub fn max(limit: impl Into<f64>) -> Self {
        let limit = limit.into();
        Self::new(Constraint::Max(limit), format!("Must be at most {}", limit))
    }

    /// Value must equal one of the given options
    pub fn one_of<I, V>(options: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let options: Vec<Value> = options.into_iter().map(Into::into).collect();
        let listed: Vec<String> = options.iter().map(|v| v.to_string()).collect();
        let message = format!("Must be one of: {}", listed.join(", "));
        Self::new(Constraint::OneOf(options), message)
    }

    /// Value must equal the named sibling field
    pub fn matches_field(other: impl Into<String>) -> Self {
        let other = other.into();
        let message = format!("Must match {}", other);
        Self::new(Constraint::MatchesField(other), message)
    }

    /// Text must contain the given substring
    pub fn contains(needle: impl Into<String>) -> Self {
        let needle = needle.into();
        let message = format!("Must contain '{}'", needle);
        Self::new(Constraint::Contains(needle), message)
    }

    /// Text must start with the given prefix
    pub fn starts_with(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let message = format!("Must start with '{}'", prefix);
        Self::new(Constraint::StartsWith(prefix), message)
    }

    /// Text must end with the given suffix
    pub fn ends_with(suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let message = format!("Must end with '{}'", suffix);
        Self::new(Constraint::EndsWith(suffix), message)
    }

    /// Array must hold at least `n` items. Empty arrays count as unset
    /// and pass; pair with `required` to reject them.
    pub fn min_items(n: usize) -> Self {
        Self::new(
            Constraint::MinItems(n),
            format!("Must have at least {} items", n),
        )
    }

    /// Array must hold at most `n` items
    pub fn max_items(n: usize) -> Self {
        Self::new(
            Constraint::MaxItems(n),
            format!("Must have at most {} items", n),
        )
    }

    /// Custom predicate. Receives the field value and the whole record,
    /// so cross-field checks can read sibling fields. Runs against empty
    /// values too.
    pub fn custom<F>(message: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value, &Record) -> bool + Send + Sync + 'static,
    {
        Self::new(Constraint::Custom(CustomCheck(Arc::new(check))), message)
    }

    /// Replace the default error message
    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.message = text.into();
        self
    }

    pub(crate) fn failure_message(&self) -> &str {
        &self.message
    }

    /// Evaluate the rule. True means the value passes.
    pub(crate) fn check(&self, value: &Value, record: &Record) -> bool {
        if value.is_empty() && self.constraint.skips_empty() {
            return true;
        }
        match &self.constraint {
            Constraint::Required => match value {
                Value::String(s) => !s.trim().is_empty(),
                other => !other.is_empty(),
            },
            Constraint::MinLength(n) => text_of(value).chars().count() >= *n,
            Constraint::MaxLength(n) => text_of(value).chars().count() <= *n,
            Constraint::Email(pattern) => pattern.is_match(&text_of(value)),
            Constraint::Phone { min_digits } => {
                validators::is_valid_phone(&text_of(value), *min_digits)
            }
            Constraint::Url => validators::is_valid_url(&text_of(value)),
            Constraint::Pattern(pattern) => pattern.is_match(&text_of(value)),
            Constraint::Numeric => value.as_number().is_some(),
            Constraint::Integer => value
                .as_number()
                .map(|n| n.fract() == 0.0)
                .unwrap_or(false),
            Constraint::Min(limit) => value.as_number().map(|n| n >= *limit).unwrap_or(false),
            Constraint::Max(limit) => value.as_number().map(|n| n <= *limit).unwrap_or(false),
            Constraint::OneOf(options) => options.contains(value),
            Constraint::MatchesField(other) => value == record.get(other),
            Constraint::Contains(needle) => text_of(value).contains(needle.as_str()),
            Constraint::StartsWith(prefix) => text_of(value).starts_with(prefix.as_str()),
            Constraint::EndsWith(suffix) => text_of(value).ends_with(suffix.as_str()),
            Constraint::MinItems(n) => value.as_array().map(|a| a.len() >= *n).unwrap_or(false),
            Constraint::MaxItems(n) => value.as_array().map(|a| a.len() <= *n).unwrap_or(false),
            Constraint::Custom(check) => (check.0)(value, record),
        }
    }
}

/// Text reading used by string rules. Strings validate as-is; other
/// values validate against their display form.
fn text_of(value: &Value) -> Cow<'_, str> {
    match value.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(value.to_string()),
    }
}
