//! Persistence collaborator contract.
//!
//! The backing store is out of scope for this crate; only its input/output
//! contract is modeled. Implementations bridge to whatever holds the goals
//! table (a SQL database, an RPC endpoint, a test double).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::plan::Plan;

/// Row counts reported by a successful persist, the only part of a plan a
/// caller ever observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedCounts {
    pub milestones_inserted: u32,
    pub tasks_inserted: u32,
}

#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Resolves the owning user of a goal, or `None` when the goal does not
    /// exist.
    async fn goal_owner(&self, goal_id: &str) -> Result<Option<String>, StoreError>;

    /// Inserts all milestones and all tasks of a validated plan as a single
    /// transaction and reports the inserted counts. Implementations must
    /// guarantee that no partial insert is ever visible to readers.
    async fn persist_plan(
        &self,
        goal_id: &str,
        user_id: &str,
        plan: &Plan,
    ) -> Result<PersistedCounts, StoreError>;
}
