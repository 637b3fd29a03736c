//! Integration tests for fieldcheck
//!
//! Covers the behaviors a form controller relies on:
//! - Emptiness gating (format rules skip unset fields, required rejects them)
//! - Per-field short-circuit and one-message-per-field reporting
//! - Cross-field rules through the whole-record predicate
//! - Rule accumulation across repeated field declarations
//! - Typed form validation through serde

use fieldcheck::{Record, Rule, Schema, Validate, ValidationResult, Value};
use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::rstest;
use std::collections::HashMap;

fn signup_schema() -> Schema {
    Schema::new()
        .field("email", [Rule::required(), Rule::email()])
        .field("password", [Rule::required(), Rule::min_length(8)])
}

#[test]
fn test_signup_rejects_bad_submission_with_exact_messages() {
    let record = Record::new().set("email", "bad").set("password", "short");
    let result = signup_schema().validate(&record);

    assert!(!result.is_valid());
    assert_eq!(
        result.errors(),
        &HashMap::from([
            (
                "email".to_string(),
                "Must be a valid email address".to_string()
            ),
            (
                "password".to_string(),
                "Must be at least 8 characters".to_string()
            ),
        ])
    );
}

#[test]
fn test_signup_accepts_good_submission() {
    let record = Record::new()
        .set("email", "a@b.com")
        .set("password", "longenough1");
    let result = signup_schema().validate(&record);

    assert!(result.is_valid());
    assert!(result.errors().is_empty());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n ")]
fn test_required_rejects_blank_strings(#[case] raw: &str) {
    let schema = Schema::new().field("name", [Rule::required()]);
    let result = schema.validate(&Record::new().set("name", raw));
    assert_eq!(result.error("name"), Some("This field is required"));
}

#[test]
fn test_required_rejects_absent_field() {
    let schema = Schema::new().field("name", [Rule::required()]);
    let result = schema.validate(&Record::new());
    assert_eq!(result.error("name"), Some("This field is required"));
}

#[test]
fn test_required_accepts_zero_and_false() {
    let schema = Schema::new()
        .field("count", [Rule::required()])
        .field("subscribed", [Rule::required()]);
    let record = Record::new().set("count", 0).set("subscribed", false);
    assert!(schema.validate(&record).is_valid());
}

#[test]
fn test_format_rules_skip_absent_fields() {
    let schema = Schema::new().field("nickname", [Rule::min_length(3)]);

    // Absent field: vacuous pass
    assert!(schema.validate(&Record::new()).is_valid());
    // Present but too short: fails
    let result = schema.validate(&Record::new().set("nickname", "ab"));
    assert_eq!(result.error("nickname"), Some("Must be at least 3 characters"));
    // Present and long enough: passes
    assert!(schema
        .validate(&Record::new().set("nickname", "abc"))
        .is_valid());
}

#[test]
fn test_short_circuit_reports_first_failure_only() {
    let schema = Schema::new().field(
        "email",
        [Rule::required(), Rule::email(), Rule::max_length(5)],
    );

    // Fails required and the rest never run
    let result = schema.validate(&Record::new().set("email", ""));
    assert_eq!(result.error("email"), Some("This field is required"));

    // Passes required, fails email, max_length never runs
    let result = schema.validate(&Record::new().set("email", "nope"));
    assert_eq!(result.error("email"), Some("Must be a valid email address"));
}

#[test]
fn test_confirm_password_via_custom_rule() {
    let schema = Schema::new()
        .field("password", [Rule::required(), Rule::min_length(8)])
        .field(
            "confirmPassword",
            [Rule::custom("Passwords do not match", |value, record| {
                value == record.get("password")
            })],
        );

    let mismatched = Record::new()
        .set("password", "hunter2222")
        .set("confirmPassword", "hunter2223");
    let result = schema.validate(&mismatched);
    assert_eq!(
        result.errors(),
        &HashMap::from([(
            "confirmPassword".to_string(),
            "Passwords do not match".to_string()
        )])
    );

    let matched = Record::new()
        .set("password", "hunter2222")
        .set("confirmPassword", "hunter2222");
    assert!(schema.validate(&matched).is_valid());
}

#[test]
fn test_matches_field_shorthand() {
    let schema = Schema::new()
        .field("password", [Rule::required()])
        .field("confirmPassword", [Rule::matches_field("password")]);

    let result = schema.validate(
        &Record::new()
            .set("password", "hunter22")
            .set("confirmPassword", "different"),
    );
    assert_eq!(result.error("confirmPassword"), Some("Must match password"));
}

#[test]
fn test_blank_confirmation_fails_matches_field() {
    // Leaving the confirmation empty is not agreement; the rule has no
    // vacuous pass, unlike the format rules.
    let schema = Schema::new()
        .field("password", [Rule::required(), Rule::min_length(8)])
        .field("confirmPassword", [Rule::matches_field("password")]);

    let blank = Record::new()
        .set("password", "hunter2222")
        .set("confirmPassword", "");
    let result = schema.validate(&blank);
    assert_eq!(result.error("confirmPassword"), Some("Must match password"));

    let absent = Record::new().set("password", "hunter2222");
    let result = schema.validate(&absent);
    assert_eq!(result.error("confirmPassword"), Some("Must match password"));
}

#[rstest]
#[case("user@example.com", true)]
#[case("first.last+tag@sub.domain.org", true)]
#[case("not-an-email", false)]
#[case("missing@tld", false)]
#[case("@example.com", false)]
fn test_email_rule(#[case] input: &str, #[case] valid: bool) {
    let schema = Schema::new().field("email", [Rule::email()]);
    let result = schema.validate(&Record::new().set("email", input));
    assert_eq!(result.is_valid(), valid, "input: {input}");
}

#[rstest]
#[case("(555) 123-4567", true)]
#[case("+1 555 123 4567", true)]
#[case("555-1234", false)]
#[case("555-ABC-8901", false)]
fn test_phone_rule(#[case] input: &str, #[case] valid: bool) {
    let schema = Schema::new().field("phone", [Rule::phone()]);
    let result = schema.validate(&Record::new().set("phone", input));
    assert_eq!(result.is_valid(), valid, "input: {input}");
}

#[test]
fn test_pattern_rule_applies_only_when_filled() {
    let schema = Schema::new().field(
        "zip",
        [Rule::pattern(Regex::new(r"^\d{5}$").expect("zip pattern compiles"))],
    );

    // Absent and blank pass; the pattern only judges filled values
    assert!(schema.validate(&Record::new()).is_valid());
    assert!(schema.validate(&Record::new().set("zip", "")).is_valid());

    assert!(schema.validate(&Record::new().set("zip", "94103")).is_valid());

    let result = schema.validate(&Record::new().set("zip", "9410x"));
    assert_eq!(result.error("zip"), Some("Invalid format"));
}

#[test]
fn test_numeric_bounds_on_string_input() {
    // Form submissions arrive as strings; bounds read them numerically
    let schema = Schema::new().field(
        "years_experience",
        [Rule::numeric(), Rule::min(0), Rule::max(60)],
    );

    assert!(schema
        .validate(&Record::new().set("years_experience", "7"))
        .is_valid());

    let result = schema.validate(&Record::new().set("years_experience", "-2"));
    assert_eq!(result.error("years_experience"), Some("Must be at least 0"));

    let result = schema.validate(&Record::new().set("years_experience", "often"));
    assert_eq!(result.error("years_experience"), Some("Must be a number"));
}

#[test]
fn test_one_of_membership() {
    let schema = Schema::new().field("work_mode", [Rule::one_of(["remote", "hybrid", "onsite"])]);

    assert!(schema
        .validate(&Record::new().set("work_mode", "hybrid"))
        .is_valid());

    let result = schema.validate(&Record::new().set("work_mode", "moon"));
    assert_eq!(
        result.error("work_mode"),
        Some("Must be one of: remote, hybrid, onsite")
    );
}

#[test]
fn test_message_override_replaces_default() {
    let schema = Schema::new().field(
        "email",
        [
            Rule::required().message("We need your email to reach you"),
            Rule::email(),
        ],
    );

    let result = schema.validate(&Record::new());
    assert_eq!(
        result.error("email"),
        Some("We need your email to reach you")
    );
}

#[test]
fn test_rule_accumulation_keeps_declaration_order() {
    let schema = Schema::new()
        .field("email", [Rule::required()])
        .field("phone", [Rule::phone()])
        .field("email", [Rule::email()]);

    assert_eq!(schema.field_names(), vec!["email", "phone"]);

    // Appended rules run after the original ones
    let result = schema.validate(&Record::new().set("email", "not-an-email"));
    assert_eq!(result.error("email"), Some("Must be a valid email address"));
}

#[test]
fn test_array_fields() {
    let schema = Schema::new()
        .field("skills", [Rule::required(), Rule::min_items(2)])
        .field("referees", [Rule::max_items(3)]);

    let record = Record::new()
        .set("skills", vec![Value::from("rust")])
        .set(
            "referees",
            vec![
                Value::from("a"),
                Value::from("b"),
                Value::from("c"),
                Value::from("d"),
            ],
        );
    let result = schema.validate(&record);
    assert_eq!(result.error("skills"), Some("Must have at least 2 items"));
    assert_eq!(result.error("referees"), Some("Must have at most 3 items"));

    // Empty array fails required, not min_items
    let result = schema.validate(&Record::new().set("skills", Vec::<Value>::new()));
    assert_eq!(result.error("skills"), Some("This field is required"));
}

#[test]
fn test_validate_from_json_submission() {
    let json = serde_json::json!({
        "email": "ada@example.com",
        "password": "longenough1",
        "age": 36
    });
    let record = Record::from_json(json).unwrap();
    let schema = signup_schema().field("age", [Rule::integer(), Rule::min(16)]);
    assert!(schema.validate(&record).is_valid());
}

#[derive(serde::Serialize)]
struct ApplicationForm {
    email: String,
    years_experience: u32,
    portfolio_url: Option<String>,
}

#[test]
fn test_typed_form_through_serde() {
    let schema = Schema::new()
        .field("email", [Rule::required(), Rule::email()])
        .field("years_experience", [Rule::integer(), Rule::max(60)])
        .field("portfolio_url", [Rule::url()]);

    let form = ApplicationForm {
        email: "ada@example.com".to_string(),
        years_experience: 12,
        portfolio_url: None,
    };
    let result = schema.validate_serialize(&form).unwrap();
    assert!(result.is_valid());

    let form = ApplicationForm {
        email: "ada@example.com".to_string(),
        years_experience: 12,
        portfolio_url: Some("not a url".to_string()),
    };
    let result = schema.validate_serialize(&form).unwrap();
    assert_eq!(result.error("portfolio_url"), Some("Must be a valid URL"));
}

#[derive(serde::Serialize)]
struct ContactForm {
    email: String,
    message: String,
}

impl Validate for ContactForm {
    fn validate(&self) -> Result<(), HashMap<String, String>> {
        let schema = Schema::new()
            .field("email", [Rule::required(), Rule::email()])
            .field("message", [Rule::required(), Rule::max_length(500)]);
        schema
            .validate_serialize(self)
            .expect("contact form serializes")
            .into_result()
    }
}

#[test]
fn test_validate_trait_bridge() {
    let form = ContactForm {
        email: "ada@example.com".to_string(),
        message: "Hello there".to_string(),
    };
    assert!(form.validate().is_ok());

    let form = ContactForm {
        email: "nope".to_string(),
        message: "Hello there".to_string(),
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(
        errors.get("email").map(String::as_str),
        Some("Must be a valid email address")
    );

    let result = ValidationResult::from_result(form.validate());
    assert!(!result.is_valid());
}

#[test]
fn test_schemas_are_shareable_across_threads() {
    let schema = std::sync::Arc::new(signup_schema());
    let mut handles = Vec::new();
    for i in 0..4 {
        let schema = schema.clone();
        handles.push(std::thread::spawn(move || {
            let record = Record::new()
                .set("email", format!("user{}@example.com", i))
                .set("password", "longenough1");
            schema.validate(&record).is_valid()
        }));
    }
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
