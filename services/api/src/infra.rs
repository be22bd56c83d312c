use std::collections::HashSet;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use careerbridge::catalog::domain::{OpportunityId, OpportunityRecord};
use careerbridge::catalog::{sample_catalog, SavedJobsStore, SearchSession, StoreError};
use careerbridge::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) session: Arc<Mutex<SearchSession<InMemorySavedJobsStore>>>,
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local stand-in for the external saved-job store (local storage or
/// a remote table in the real deployment).
#[derive(Default)]
pub(crate) struct InMemorySavedJobsStore {
    ids: Mutex<HashSet<OpportunityId>>,
}

impl SavedJobsStore for InMemorySavedJobsStore {
    fn load(&self) -> Result<HashSet<OpportunityId>, StoreError> {
        Ok(self.ids.lock().expect("store mutex poisoned").clone())
    }

    fn persist(&self, ids: &HashSet<OpportunityId>) -> Result<(), StoreError> {
        *self.ids.lock().expect("store mutex poisoned") = ids.clone();
        Ok(())
    }
}

/// Read a catalog from a JSON file, falling back to the bundled sample data.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Vec<OpportunityRecord>, AppError> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(sample_catalog()),
    }
}

/// Build a session and deliver the catalog in one step: this service is the
/// collaborator layer, so the fetch-then-notify handshake collapses into a
/// synchronous call here.
pub(crate) fn ready_session(
    page_size: usize,
    catalog: Vec<OpportunityRecord>,
) -> Result<SearchSession<InMemorySavedJobsStore>, AppError> {
    let mut session = SearchSession::new(page_size, Arc::new(InMemorySavedJobsStore::default()))?;
    session.begin_loading()?;
    session.set_catalog(catalog)?;
    Ok(session)
}

/// Split a pipe-separated query parameter into trimmed, non-empty values.
/// Pipes rather than commas, since location values carry commas ("New York,
/// NY").
pub(crate) fn split_multi(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split('|')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
