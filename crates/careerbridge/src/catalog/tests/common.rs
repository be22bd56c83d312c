use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::catalog::domain::{OpportunityId, OpportunityRecord};
use crate::catalog::{sample_catalog, SavedJobsStore, SearchCriteria, SearchSession, StoreError};

pub(super) fn ids(records: &[OpportunityRecord]) -> Vec<u32> {
    records.iter().map(|record| record.id.0).collect()
}

pub(super) fn text_criteria(text: &str) -> SearchCriteria {
    SearchCriteria {
        text: text.to_string(),
        ..SearchCriteria::default()
    }
}

/// Record with only the required fields, for missing-attribute edge cases.
pub(super) fn bare_record(id: u32, title: &str, company: &str) -> OpportunityRecord {
    OpportunityRecord {
        id: OpportunityId(id),
        title: title.to_string(),
        company: company.to_string(),
        location: None,
        job_type: None,
        experience: None,
        salary: None,
        posted: None,
        description: String::new(),
        tags: Vec::new(),
        responsibilities: None,
        requirements: None,
    }
}

#[derive(Default)]
pub(super) struct MemoryStore {
    pub(super) ids: Mutex<HashSet<OpportunityId>>,
    pub(super) persist_calls: Mutex<usize>,
}

impl MemoryStore {
    pub(super) fn seeded(ids: impl IntoIterator<Item = u32>) -> Self {
        let store = Self::default();
        *store.ids.lock().expect("store mutex poisoned") =
            ids.into_iter().map(OpportunityId).collect();
        store
    }

    pub(super) fn persisted_ids(&self) -> HashSet<OpportunityId> {
        self.ids.lock().expect("store mutex poisoned").clone()
    }

    pub(super) fn persist_calls(&self) -> usize {
        *self.persist_calls.lock().expect("store mutex poisoned")
    }
}

impl SavedJobsStore for MemoryStore {
    fn load(&self) -> Result<HashSet<OpportunityId>, StoreError> {
        Ok(self.ids.lock().expect("store mutex poisoned").clone())
    }

    fn persist(&self, ids: &HashSet<OpportunityId>) -> Result<(), StoreError> {
        *self.ids.lock().expect("store mutex poisoned") = ids.clone();
        *self.persist_calls.lock().expect("store mutex poisoned") += 1;
        Ok(())
    }
}

pub(super) struct OfflineStore;

impl SavedJobsStore for OfflineStore {
    fn load(&self) -> Result<HashSet<OpportunityId>, StoreError> {
        Ok(HashSet::new())
    }

    fn persist(&self, _ids: &HashSet<OpportunityId>) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage offline".to_string()))
    }
}

pub(super) fn ready_session() -> (SearchSession<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let mut session = SearchSession::new(5, store.clone()).expect("session seeds from store");
    session
        .set_catalog(sample_catalog())
        .expect("catalog loads into idle session");
    (session, store)
}
