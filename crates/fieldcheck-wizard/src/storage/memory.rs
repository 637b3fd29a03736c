//! In-memory storage backend for wizard progress

use crate::progress::Progress;
use crate::storage::ProgressStore;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory storage backend
///
/// Keeps sessions in a HashMap. Fast but non-persistent; every
/// in-flight wizard is lost on restart.
#[derive(Clone)]
pub struct MemoryStore {
    sessions: Arc<RwLock<HashMap<String, Progress>>>,
}

impl MemoryStore {
    /// Create a new memory storage backend
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored sessions
    pub async fn size(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProgressStore for MemoryStore {
    async fn load(&self, session: &str) -> Result<Option<Progress>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(session).cloned())
    }

    async fn save(&self, progress: &Progress) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(progress.session.clone(), progress.clone());
        Ok(())
    }

    async fn delete(&self, session: &str) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session);
        Ok(())
    }

    async fn exists(&self, session: &str) -> Result<bool> {
        let sessions = self.sessions.read().await;
        Ok(sessions.contains_key(session))
    }

    async fn clear(&self) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.clear();
        Ok(())
    }

    async fn sessions(&self) -> Result<Vec<String>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.keys().cloned().collect())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
