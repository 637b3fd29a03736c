// File: src/config.rs
// Purpose: Rule tuning from fieldcheck.toml

use crate::rules::Rule;
use crate::validators;
use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tuning: RuleTuning,
}

/// Deployment-tunable rule thresholds. Rules built through these
/// helpers pick up the configured values; the plain `Rule`
/// constructors keep the compiled-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTuning {
    /// Minimum digit count for phone numbers
    #[serde(default = "default_phone_min_digits")]
    pub phone_min_digits: usize,

    /// Email pattern, as a regex source string
    #[serde(default = "default_email_pattern")]
    pub email_pattern: String,
}

// Default values
fn default_phone_min_digits() -> usize {
    validators::DEFAULT_PHONE_MIN_DIGITS
}

fn default_email_pattern() -> String {
    validators::DEFAULT_EMAIL_PATTERN.to_string()
}

impl Default for RuleTuning {
    fn default() -> Self {
        Self {
            phone_min_digits: default_phone_min_digits(),
            email_pattern: default_email_pattern(),
        }
    }
}

impl RuleTuning {
    /// Compile the configured email pattern
    pub fn email_regex(&self) -> Result<Regex> {
        Regex::new(&self.email_pattern)
            .with_context(|| format!("Invalid email pattern: {}", self.email_pattern))
    }

    /// Email rule using the configured pattern
    pub fn email_rule(&self) -> Result<Rule> {
        Ok(Rule::email_with(self.email_regex()?))
    }

    /// Phone rule using the configured digit threshold
    pub fn phone_rule(&self) -> Rule {
        Rule::phone_min_digits(self.phone_min_digits)
    }
}

impl Config {
    /// Load configuration from fieldcheck.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./fieldcheck.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("fieldcheck.toml")
    }
}
