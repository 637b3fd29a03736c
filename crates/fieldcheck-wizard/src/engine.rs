//! Wizard flow engine - validates steps and persists partial progress

use crate::config::{StoreBackend, WizardConfig};
use crate::progress::Progress;
use crate::storage::ProgressStore;
use anyhow::Result;
use fieldcheck::{Record, Schema, ValidationResult};
use std::sync::Arc;
use uuid::Uuid;

/// One step of a wizard: a name plus the schema its submissions must pass
#[derive(Debug, Clone)]
pub struct Step {
    name: String,
    schema: Schema,
}

impl Step {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

/// An ordered multi-step form definition
#[derive(Debug, Clone)]
pub struct Wizard {
    name: String,
    steps: Vec<Step>,
}

impl Wizard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Append a step. Step names identify steps in submissions, so a
    /// duplicate name is a programming error and panics immediately.
    pub fn step(mut self, name: impl Into<String>, schema: Schema) -> Self {
        let name = name.into();
        if self.steps.iter().any(|s| s.name == name) {
            panic!("duplicate wizard step: {}", name);
        }
        self.steps.push(Step { name, schema });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn index_of(&self, step_name: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.name == step_name)
    }

    pub fn step_at(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }
}

/// Outcome of a step submission or a completion attempt
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// The submission passed; progress reflects the new state
    Valid(Progress),

    /// The submission failed validation. Submitted values are still
    /// persisted so the user does not retype them, but the step
    /// pointer does not advance.
    Invalid {
        result: ValidationResult,
        progress: Progress,
    },
}

impl StepOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, StepOutcome::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn progress(&self) -> &Progress {
        match self {
            StepOutcome::Valid(progress) => progress,
            StepOutcome::Invalid { progress, .. } => progress,
        }
    }

    /// Validation errors, present only on the invalid side
    pub fn errors(&self) -> Option<&ValidationResult> {
        match self {
            StepOutcome::Valid(_) => None,
            StepOutcome::Invalid { result, .. } => Some(result),
        }
    }

    pub fn into_progress(self) -> Progress {
        match self {
            StepOutcome::Valid(progress) => progress,
            StepOutcome::Invalid { progress, .. } => progress,
        }
    }
}

/// Engine driving wizard sessions against a storage backend
pub struct WizardEngine {
    wizard: Wizard,
    config: WizardConfig,
    store: Arc<dyn ProgressStore>,
}

impl WizardEngine {
    /// Create a new engine, building the storage backend from config
    pub async fn new(wizard: Wizard, config: WizardConfig) -> Result<Self> {
        let store = Self::create_store(&config.storage).await?;
        Ok(Self {
            wizard,
            config,
            store,
        })
    }

    /// Create an engine over an existing storage backend
    pub fn with_store(wizard: Wizard, config: WizardConfig, store: Arc<dyn ProgressStore>) -> Self {
        Self {
            wizard,
            config,
            store,
        }
    }

    /// Create a storage backend from config
    async fn create_store(backend: &StoreBackend) -> Result<Arc<dyn ProgressStore>> {
        match backend {
            StoreBackend::Memory => {
                use crate::storage::memory::MemoryStore;
                Ok(Arc::new(MemoryStore::new()))
            }
            StoreBackend::Filesystem(config) => {
                use crate::storage::filesystem::FileStore;
                let store = FileStore::new(config.clone()).await?;
                Ok(Arc::new(store))
            }
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }

    /// Start a fresh session at the first step
    pub async fn start(&self) -> Result<Progress> {
        let session = Uuid::new_v4().to_string();
        let progress = Progress::new(session, self.wizard.name.clone());
        self.store.save(&progress).await?;

        tracing::debug!(
            "Started wizard '{}' session {} ({} steps)",
            self.wizard.name,
            progress.session,
            self.wizard.len()
        );

        Ok(progress)
    }

    /// Load a session's progress, if it still exists
    pub async fn resume(&self, session: &str) -> Result<Option<Progress>> {
        self.store.load(session).await
    }

    /// Submit values for a step.
    ///
    /// The submitted values merge into the session record first, so
    /// rules see the whole accumulated record (including fields from
    /// earlier steps). Values persist whether or not validation
    /// passes; the step pointer only advances on a valid submission
    /// of the step it is waiting on.
    pub async fn submit_step(
        &self,
        session: &str,
        step_name: &str,
        values: Record,
    ) -> Result<StepOutcome> {
        let mut progress = self.load_open_session(session).await?;

        let index = self.wizard.index_of(step_name).ok_or_else(|| {
            anyhow::anyhow!("Wizard '{}' has no step named '{}'", self.wizard.name, step_name)
        })?;
        if index > progress.current_step {
            anyhow::bail!(
                "Step '{}' is not reached yet (session {} is on step {})",
                step_name,
                session,
                progress.current_step
            );
        }

        progress.values.merge(values);
        progress.touch();

        let step = &self.wizard.steps[index];
        let result = step.schema.validate(&progress.values);

        if result.is_valid() {
            if index == progress.current_step {
                progress.current_step += 1;
            }
            self.store.save(&progress).await?;

            tracing::debug!(
                "Session {}: step '{}' accepted, now on step {}",
                session,
                step_name,
                progress.current_step
            );

            Ok(StepOutcome::Valid(progress))
        } else {
            self.store.save(&progress).await?;

            tracing::debug!(
                "Session {}: step '{}' rejected with {} errors",
                session,
                step_name,
                result.errors().len()
            );

            Ok(StepOutcome::Invalid { result, progress })
        }
    }

    /// Move the session back one step (no-op at the first step)
    pub async fn back(&self, session: &str) -> Result<Progress> {
        let mut progress = self.load_open_session(session).await?;

        progress.current_step = progress.current_step.saturating_sub(1);
        progress.touch();
        self.store.save(&progress).await?;

        tracing::debug!(
            "Session {}: moved back to step {}",
            session,
            progress.current_step
        );

        Ok(progress)
    }

    /// Finish the wizard.
    ///
    /// Every step must already have a valid submission; the whole
    /// accumulated record is then re-validated against every step
    /// schema in one pass, so cross-step rules get a final say. On
    /// success the session is sealed and its record is the payload
    /// the application should act on.
    pub async fn complete(&self, session: &str) -> Result<StepOutcome> {
        let mut progress = self.load_open_session(session).await?;

        if progress.current_step < self.wizard.len() {
            anyhow::bail!(
                "Session {} is still on step {} of {}",
                session,
                progress.current_step,
                self.wizard.len()
            );
        }

        let mut result = ValidationResult::success();
        for step in &self.wizard.steps {
            result.merge(step.schema.validate(&progress.values));
        }

        if result.is_valid() {
            progress.completed = true;
            progress.touch();
            self.store.save(&progress).await?;

            tracing::info!(
                "Wizard '{}' completed for session {} with {} fields",
                self.wizard.name,
                session,
                progress.values.len()
            );

            Ok(StepOutcome::Valid(progress))
        } else {
            tracing::debug!(
                "Session {}: completion rejected with {} errors",
                session,
                result.errors().len()
            );

            Ok(StepOutcome::Invalid { result, progress })
        }
    }

    /// Drop a session and everything it saved
    pub async fn abandon(&self, session: &str) -> Result<()> {
        self.store.delete(session).await?;
        tracing::debug!("Session {} abandoned", session);
        Ok(())
    }

    /// Delete sessions idle past the configured timeout. Returns how
    /// many were removed.
    pub async fn purge_idle(&self) -> Result<usize> {
        let mut purged = 0;
        for session in self.store.sessions().await? {
            if let Some(progress) = self.store.load(&session).await? {
                if progress.is_idle(self.config.idle_timeout) {
                    self.store.delete(&session).await?;
                    purged += 1;
                }
            }
        }

        if purged > 0 {
            tracing::debug!("Purged {} idle wizard sessions", purged);
        }

        Ok(purged)
    }

    /// List all stored session ids
    pub async fn sessions(&self) -> Result<Vec<String>> {
        self.store.sessions().await
    }

    async fn load_open_session(&self, session: &str) -> Result<Progress> {
        let progress = self
            .store
            .load(session)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Unknown session: {}", session))?;

        if progress.completed {
            anyhow::bail!("Session {} is already completed", session);
        }

        Ok(progress)
    }
}

impl Clone for WizardEngine {
    fn clone(&self) -> Self {
        Self {
            wizard: self.wizard.clone(),
            config: self.config.clone(),
            store: Arc::clone(&self.store),
        }
    }
}
