// Example: Validating a job application form
// Shows schema construction, dynamic records, and typed forms

use fieldcheck::{Record, Rule, Schema, Value};
use regex::Regex;

fn application_schema() -> Schema {
    Schema::new()
        .field("full_name", [Rule::required(), Rule::min_length(2)])
        .field("email", [Rule::required(), Rule::email()])
        .field("phone", [Rule::phone()])
        .field(
            "years_experience",
            [Rule::required(), Rule::integer(), Rule::min(0), Rule::max(60)],
        )
        .field("portfolio_url", [Rule::url()])
        .field("work_mode", [Rule::one_of(["remote", "hybrid", "onsite"])])
        .field("skills", [Rule::required(), Rule::min_items(1)])
        .field(
            "cover_letter",
            [Rule::max_length(2000).message("Keep the cover letter under 2000 characters")],
        )
        .field(
            "linkedin",
            [Rule::pattern(
                Regex::new(r"^https://www\.linkedin\.com/in/[A-Za-z0-9-]+/?$")
                    .expect("linkedin pattern compiles"),
            )],
        )
        .field(
            "expected_salary",
            [Rule::custom(
                "Expected salary must not be below the minimum",
                |value, record| match (value.as_number(), record.get("minimum_salary").as_number()) {
                    (Some(expected), Some(minimum)) => expected >= minimum,
                    _ => true,
                },
            )],
        )
}

fn report(label: &str, schema: &Schema, record: &Record) {
    println!("{}", label);
    let result = schema.validate(record);
    if result.is_valid() {
        println!("✓ Validation passed!\n");
    } else {
        println!("✗ Validation failed ({} errors):", result.errors().len());
        for field in schema.field_names() {
            if let Some(message) = result.error(field) {
                println!("  - {}: {}", field, message);
            }
        }
        println!();
    }
}

fn main() {
    println!("=== Fieldcheck Job Application Demo ===\n");

    let schema = application_schema();

    // Test 1: a complete, valid application
    let complete = Record::new()
        .set("full_name", "Ada Lovelace")
        .set("email", "ada@example.com")
        .set("phone", "(555) 123-4567")
        .set("years_experience", "12")
        .set("portfolio_url", "https://ada.dev")
        .set("work_mode", "remote")
        .set(
            "skills",
            vec![Value::from("rust"), Value::from("distributed systems")],
        )
        .set("linkedin", "https://www.linkedin.com/in/ada-lovelace");
    report("Test 1: Complete Application", &schema, &complete);

    // Test 2: minimal application; optional fields stay unset
    let minimal = Record::new()
        .set("full_name", "Grace Hopper")
        .set("email", "grace@example.com")
        .set("years_experience", 43)
        .set("skills", vec![Value::from("compilers")]);
    report("Test 2: Minimal Application", &schema, &minimal);

    // Test 3: everything wrong at once; one message per field
    let broken = Record::new()
        .set("full_name", "X")
        .set("email", "not-an-email")
        .set("phone", "call me")
        .set("years_experience", "lots")
        .set("portfolio_url", "my-site")
        .set("work_mode", "moonbase")
        .set("skills", Vec::<Value>::new())
        .set("linkedin", "linkedin.com/ada");
    report("Test 3: Broken Application", &schema, &broken);

    // Test 4: cross-field salary check
    let lowball = Record::new()
        .set("full_name", "Ada Lovelace")
        .set("email", "ada@example.com")
        .set("years_experience", 12)
        .set("skills", vec![Value::from("rust")])
        .set("minimum_salary", 90000)
        .set("expected_salary", 80000);
    report("Test 4: Salary Below Minimum", &schema, &lowball);
}
