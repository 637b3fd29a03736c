//! Filesystem storage backend for wizard progress

use crate::config::FileStoreConfig;
use crate::progress::Progress;
use crate::storage::ProgressStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Filesystem storage backend
///
/// Stores each session as a JSON file on disk. Persistent across
/// restarts, suitable for single-instance deployments.
#[derive(Clone)]
pub struct FileStore {
    config: FileStoreConfig,
}

impl FileStore {
    /// Create a new filesystem storage backend
    pub async fn new(config: FileStoreConfig) -> Result<Self> {
        // Create the progress directory if it doesn't exist
        fs::create_dir_all(&config.path)
            .await
            .context("Failed to create progress directory")?;

        Ok(Self { config })
    }

    /// Get the file path for a session id
    fn session_to_path(&self, session: &str) -> PathBuf {
        // Sanitize the id to make it filesystem-safe
        let safe_session = session
            .replace('/', "_")
            .replace('\\', "_")
            .replace(':', "_");

        self.config.path.join(format!("{}.json", safe_session))
    }
}

#[async_trait]
impl ProgressStore for FileStore {
    async fn load(&self, session: &str) -> Result<Option<Progress>> {
        let path = self.session_to_path(session);

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .await
            .context("Failed to read progress file")?;

        let progress: Progress =
            serde_json::from_str(&content).context("Failed to deserialize progress")?;

        Ok(Some(progress))
    }

    async fn save(&self, progress: &Progress) -> Result<()> {
        let path = self.session_to_path(&progress.session);

        let json = serde_json::to_string_pretty(progress).context("Failed to serialize progress")?;

        fs::write(&path, json)
            .await
            .context("Failed to write progress file")?;

        Ok(())
    }

    async fn delete(&self, session: &str) -> Result<()> {
        let path = self.session_to_path(session);

        if path.exists() {
            fs::remove_file(&path)
                .await
                .context("Failed to delete progress file")?;
        }

        Ok(())
    }

    async fn exists(&self, session: &str) -> Result<bool> {
        let path = self.session_to_path(session);
        Ok(path.exists())
    }

    async fn clear(&self) -> Result<()> {
        let mut entries = fs::read_dir(&self.config.path)
            .await
            .context("Failed to read progress directory")?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();

            if path.is_file() {
                fs::remove_file(&path).await.ok();
            }
        }

        Ok(())
    }

    async fn sessions(&self) -> Result<Vec<String>> {
        let mut sessions = Vec::new();
        let mut entries = fs::read_dir(&self.config.path)
            .await
            .context("Failed to read progress directory")?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();

            if path.is_file() {
                if let Some(stem) = path.file_stem() {
                    if let Some(session) = stem.to_str() {
                        sessions.push(session.to_string());
                    }
                }
            }
        }

        Ok(sessions)
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}
