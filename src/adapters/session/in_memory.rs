//! In-memory wizard session store.
//!
//! Sessions live only as long as the process; a restart loses in-progress
//! wizards, which matches their per-visit lifetime.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionId, Timestamp};
use crate::domain::wizard::WizardSession;
use crate::ports::WizardSessionStore;

/// Wizard sessions keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWizardSessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, WizardSession>>>,
}

impl InMemoryWizardSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl WizardSessionStore for InMemoryWizardSessionStore {
    async fn save(&self, session: &WizardSession) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .insert(*session.id(), session.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<WizardSession>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn evict_idle(&self, now: Timestamp, idle_secs: i64) -> Result<usize, DomainError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_idle(&now, idle_secs));
        Ok(before - sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_find_returns_copy() {
        let store = InMemoryWizardSessionStore::new();
        let session = WizardSession::start(SessionId::new());
        store.save(&session).await.unwrap();

        let found = store.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(found.id(), session.id());
        assert_eq!(found.step(), session.step());
    }

    #[tokio::test]
    async fn find_unknown_returns_none() {
        let store = InMemoryWizardSessionStore::new();
        assert!(store.find_by_id(&SessionId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn sessions_are_isolated_by_id() {
        let store = InMemoryWizardSessionStore::new();
        let a = WizardSession::start(SessionId::new());
        let b = WizardSession::start(SessionId::new());
        store.save(&a).await.unwrap();
        store.save(&b).await.unwrap();
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn evict_idle_removes_only_stale_sessions() {
        let store = InMemoryWizardSessionStore::new();
        let session = WizardSession::start(SessionId::new());
        store.save(&session).await.unwrap();

        let soon = session.updated_at().plus_secs(10);
        assert_eq!(store.evict_idle(soon, 60).await.unwrap(), 0);

        let later = session.updated_at().plus_secs(61);
        assert_eq!(store.evict_idle(later, 60).await.unwrap(), 1);
        assert!(store.is_empty().await);
    }
}
