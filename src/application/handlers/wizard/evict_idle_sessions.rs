//! EvictIdleSessionsHandler - drops abandoned wizard sessions.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::ports::WizardSessionStore;

use super::WizardError;

/// Removes sessions idle for longer than the configured TTL.
pub struct EvictIdleSessionsHandler {
    sessions: Arc<dyn WizardSessionStore>,
    idle_secs: i64,
}

impl EvictIdleSessionsHandler {
    pub fn new(sessions: Arc<dyn WizardSessionStore>, idle_secs: i64) -> Self {
        Self {
            sessions,
            idle_secs,
        }
    }

    pub async fn handle(&self, now: Timestamp) -> Result<usize, WizardError> {
        let evicted = self.sessions.evict_idle(now, self.idle_secs).await?;
        if evicted > 0 {
            tracing::info!(evicted, "Evicted idle wizard sessions");
        }
        Ok(evicted)
    }
}
