//! Wizard session store port.
//!
//! Holds one `WizardSession` per interacting user. Sessions are never shared
//! between users; the store only keys them by `SessionId`.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId, Timestamp};
use crate::domain::wizard::WizardSession;

/// Repository port for in-progress wizard sessions.
#[async_trait]
pub trait WizardSessionStore: Send + Sync {
    /// Insert or replace a session.
    async fn save(&self, session: &WizardSession) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found or already evicted.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<WizardSession>, DomainError>;

    /// Drop sessions whose last activity is older than `idle_secs` before `now`.
    ///
    /// Returns the number of sessions removed.
    async fn evict_idle(&self, now: Timestamp, idle_secs: i64) -> Result<usize, DomainError>;
}
