//! Wizard progress types and utilities

use chrono::{DateTime, Utc};
use fieldcheck::Record;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Saved state of one wizard session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    /// Session identifier
    pub session: String,

    /// Name of the wizard this session belongs to
    pub wizard: String,

    /// Index of the next step awaiting a valid submission
    pub current_step: usize,

    /// Everything submitted so far, merged across steps
    pub values: Record,

    /// When the session was started
    pub started_at: DateTime<Utc>,

    /// When the session last changed
    pub updated_at: DateTime<Utc>,

    /// Whether the wizard finished successfully
    pub completed: bool,
}

impl Progress {
    /// Create fresh progress at the first step
    pub fn new(session: impl Into<String>, wizard: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            session: session.into(),
            wizard: wizard.into(),
            current_step: 0,
            values: Record::new(),
            started_at: now,
            updated_at: now,
            completed: false,
        }
    }

    /// Bump the updated timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Time since the session last changed
    pub fn idle_for(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.updated_at)
            .to_std()
            .unwrap_or(Duration::from_secs(0))
    }

    /// Whether the session has sat unchanged longer than `max_idle`
    pub fn is_idle(&self, max_idle: Duration) -> bool {
        self.idle_for() >= max_idle
    }

    /// Total session lifetime
    pub fn age(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::from_secs(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_progress_starts_at_step_zero() {
        let progress = Progress::new("session-1", "onboarding");
        assert_eq!(progress.session, "session-1");
        assert_eq!(progress.wizard, "onboarding");
        assert_eq!(progress.current_step, 0);
        assert!(progress.values.is_empty());
        assert!(!progress.completed);
    }

    #[test]
    fn test_touch_advances_updated_at() {
        let mut progress = Progress::new("session-1", "onboarding");
        let before = progress.updated_at;
        std::thread::sleep(Duration::from_millis(5));
        progress.touch();
        assert!(progress.updated_at > before);
        assert_eq!(progress.started_at, before);
    }

    #[test]
    fn test_idleness() {
        let mut progress = Progress::new("session-1", "onboarding");
        assert!(!progress.is_idle(Duration::from_secs(3600)));

        progress.updated_at = Utc::now() - chrono::Duration::hours(2);
        assert!(progress.is_idle(Duration::from_secs(3600)));
        assert!(progress.idle_for() >= Duration::from_secs(7000));
    }

    #[test]
    fn test_age_spans_the_whole_session() {
        // A just-touched session is fresh but not new: idleness resets
        // on every change, age only grows.
        let mut progress = Progress::new("session-1", "onboarding");
        progress.started_at = Utc::now() - chrono::Duration::minutes(30);
        progress.touch();

        assert!(progress.idle_for() < Duration::from_secs(5));
        assert!(progress.age() >= Duration::from_secs(29 * 60));
    }

    #[test]
    fn test_progress_serde_round_trip() {
        let mut progress = Progress::new("session-1", "onboarding");
        progress.values.insert("email", "ada@example.com");
        progress.current_step = 2;

        let json = serde_json::to_string(&progress).unwrap();
        let back: Progress = serde_json::from_str(&json).unwrap();
        assert_eq!(back.session, "session-1");
        assert_eq!(back.current_step, 2);
        assert_eq!(back.values.get("email").as_str(), Some("ada@example.com"));
    }
}
