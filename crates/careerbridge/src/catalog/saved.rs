use std::collections::HashSet;

use super::domain::OpportunityId;

/// Session-scoped set of saved opportunity ids. Membership is the only
/// semantic: no ordering, no payload, no expiry. Saved state is independent
/// of catalog membership, so an id may stay saved after the record it refers
/// to drops out of a filtered catalog.
#[derive(Debug, Clone, Default)]
pub struct SavedJobs {
    ids: HashSet<OpportunityId>,
}

impl SavedJobs {
    /// Seed the registry from a previously persisted set.
    pub fn from_ids(ids: HashSet<OpportunityId>) -> Self {
        Self { ids }
    }

    pub fn is_saved(&self, id: OpportunityId) -> bool {
        self.ids.contains(&id)
    }

    /// Remove the id if present, add it if absent. Returns the membership
    /// state after the toggle, so toggling twice always restores the original
    /// state.
    pub fn toggle(&mut self, id: OpportunityId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn ids(&self) -> &HashSet<OpportunityId> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Persistence port for saved-job state. The session loads once at start and
/// hands the full id set back after every toggle; the core never talks to the
/// backing store (local storage, a remote table) directly.
pub trait SavedJobsStore: Send + Sync {
    fn load(&self) -> Result<HashSet<OpportunityId>, StoreError>;
    fn persist(&self, ids: &HashSet<OpportunityId>) -> Result<(), StoreError>;
}

/// Error enumeration for saved-job store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("saved-job store unavailable: {0}")]
    Unavailable(String),
}
