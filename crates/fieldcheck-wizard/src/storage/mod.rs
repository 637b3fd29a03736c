//! Storage backends for wizard progress

use crate::progress::Progress;
use anyhow::Result;
use async_trait::async_trait;

pub mod filesystem;
pub mod memory;

/// Trait for progress storage backends
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Load progress for a session
    async fn load(&self, session: &str) -> Result<Option<Progress>>;

    /// Save progress (keyed by its session id)
    async fn save(&self, progress: &Progress) -> Result<()>;

    /// Delete a session
    async fn delete(&self, session: &str) -> Result<()>;

    /// Check if a session exists
    async fn exists(&self, session: &str) -> Result<bool>;

    /// Delete all sessions
    async fn clear(&self) -> Result<()>;

    /// List all session ids
    async fn sessions(&self) -> Result<Vec<String>>;

    /// Get storage backend name
    fn name(&self) -> &'static str;
}
