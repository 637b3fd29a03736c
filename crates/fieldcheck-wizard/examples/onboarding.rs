// Example: Driving a three-step job application wizard
// Shows session start, invalid and valid submissions, and completion

use fieldcheck::{Record, Rule, Schema, Value};
use fieldcheck_wizard::{StepOutcome, Wizard, WizardConfig, WizardEngine};

fn application_wizard() -> Wizard {
    Wizard::new("job-application")
        .step(
            "account",
            Schema::new()
                .field("email", [Rule::required(), Rule::email()])
                .field("password", [Rule::required(), Rule::min_length(8)])
                .field("confirm_password", [Rule::matches_field("password")]),
        )
        .step(
            "experience",
            Schema::new()
                .field("years_experience", [Rule::required(), Rule::integer(), Rule::min(0)])
                .field("skills", [Rule::required(), Rule::min_items(1)])
                .field("portfolio_url", [Rule::url()]),
        )
        .step(
            "preferences",
            Schema::new()
                .field("work_mode", [Rule::required(), Rule::one_of(["remote", "hybrid", "onsite"])])
                .field("phone", [Rule::phone()]),
        )
}

fn report(label: &str, outcome: &StepOutcome) {
    match outcome {
        StepOutcome::Valid(progress) => {
            println!("✓ {} (now on step {})\n", label, progress.current_step);
        }
        StepOutcome::Invalid { result, .. } => {
            println!("✗ {} ({} errors):", label, result.errors().len());
            for (field, message) in result.errors() {
                println!("  - {}: {}", field, message);
            }
            println!();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("=== Fieldcheck Wizard Onboarding Demo ===\n");

    let engine = WizardEngine::new(application_wizard(), WizardConfig::default()).await?;

    let progress = engine.start().await?;
    let session = progress.session.clone();
    println!("Started session {}\n", session);

    // First try: typo in the email, mismatched confirmation
    let outcome = engine
        .submit_step(
            &session,
            "account",
            Record::new()
                .set("email", "ada@example")
                .set("password", "longenough1")
                .set("confirm_password", "longenough2"),
        )
        .await?;
    report("Account step, first try", &outcome);

    // Second try: everything fixed
    let outcome = engine
        .submit_step(
            &session,
            "account",
            Record::new()
                .set("email", "ada@example.com")
                .set("password", "longenough1")
                .set("confirm_password", "longenough1"),
        )
        .await?;
    report("Account step, second try", &outcome);

    let outcome = engine
        .submit_step(
            &session,
            "experience",
            Record::new()
                .set("years_experience", 12)
                .set(
                    "skills",
                    vec![Value::from("rust"), Value::from("databases")],
                )
                .set("portfolio_url", "https://ada.dev"),
        )
        .await?;
    report("Experience step", &outcome);

    let outcome = engine
        .submit_step(
            &session,
            "preferences",
            Record::new()
                .set("work_mode", "remote")
                .set("phone", "(555) 123-4567"),
        )
        .await?;
    report("Preferences step", &outcome);

    let outcome = engine.complete(&session).await?;
    match outcome {
        StepOutcome::Valid(progress) => {
            println!("✓ Wizard completed with {} fields:", progress.values.len());
            let mut fields: Vec<_> = progress.values.iter().collect();
            fields.sort_by_key(|(name, _)| name.to_string());
            for (name, value) in fields {
                println!("  {} = {}", name, value);
            }
        }
        StepOutcome::Invalid { result, .. } => {
            println!("✗ Completion rejected: {:?}", result.errors());
        }
    }

    Ok(())
}
