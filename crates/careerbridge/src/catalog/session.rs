use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::domain::{OpportunityId, OpportunityRecord, SortKey};
use super::facets::{FacetIndex, FacetKind};
use super::pager::{page_count, paginate, ResultPage};
use super::query::{search, SearchCriteria};
use super::saved::{SavedJobs, SavedJobsStore, StoreError};

/// Lifecycle of a search session. Only the initial catalog delivery is
/// asynchronous (driven by the collaborator layer); every transition after
/// `Ready` is a synchronous recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    Loading,
    Ready,
}

/// Error raised by session transitions invoked in the wrong phase, or by the
/// saved-job store.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("catalog already loaded for this session")]
    CatalogAlreadyLoaded,
    #[error("session not ready: catalog has not been loaded")]
    NotReady,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Read-only projection of session state handed to presentation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub page: ResultPage,
    pub active_filter_count: usize,
    pub is_empty: bool,
}

/// Owns the current criteria, page position, result set, and saved-job
/// registry for one user session. The catalog is read-only for the session's
/// lifetime; every criteria mutation re-runs the query engine and resets the
/// page in the same step, so a view can never pair stale results with fresh
/// criteria.
pub struct SearchSession<S> {
    phase: SessionPhase,
    page_size: usize,
    catalog: Vec<OpportunityRecord>,
    facet_index: FacetIndex,
    criteria: SearchCriteria,
    page_number: usize,
    results: Vec<OpportunityRecord>,
    saved: SavedJobs,
    store: Arc<S>,
}

impl<S> SearchSession<S>
where
    S: SavedJobsStore,
{
    /// Start an idle session, seeding the saved-job registry from whatever
    /// the collaborator persisted previously.
    pub fn new(page_size: usize, store: Arc<S>) -> Result<Self, SessionError> {
        let saved = SavedJobs::from_ids(store.load()?);
        Ok(Self {
            phase: SessionPhase::Idle,
            page_size: page_size.max(1),
            catalog: Vec::new(),
            facet_index: FacetIndex::default(),
            criteria: SearchCriteria::default(),
            page_number: 1,
            results: Vec::new(),
            saved,
            store,
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Mark the catalog fetch as in flight.
    pub fn begin_loading(&mut self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Idle | SessionPhase::Loading => {
                self.phase = SessionPhase::Loading;
                Ok(())
            }
            SessionPhase::Ready => Err(SessionError::CatalogAlreadyLoaded),
        }
    }

    /// One-shot catalog delivery. Builds the facet index, runs the query
    /// engine with default criteria, and moves to `Ready` on page 1.
    pub fn set_catalog(&mut self, records: Vec<OpportunityRecord>) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Ready {
            return Err(SessionError::CatalogAlreadyLoaded);
        }
        self.catalog = records;
        self.facet_index = FacetIndex::build(&self.catalog);
        self.criteria = SearchCriteria::default();
        self.phase = SessionPhase::Ready;
        self.refresh();
        Ok(())
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), SessionError> {
        self.ensure_ready()?;
        self.criteria.text = text.to_string();
        self.refresh();
        Ok(())
    }

    /// Flip one facet value on or off, returning whether it is now selected.
    pub fn toggle_facet_value(
        &mut self,
        kind: FacetKind,
        value: &str,
    ) -> Result<bool, SessionError> {
        self.ensure_ready()?;
        let selected = self.criteria.facets.toggle(kind, value);
        self.refresh();
        Ok(selected)
    }

    pub fn set_sort(&mut self, sort: SortKey) -> Result<(), SessionError> {
        self.ensure_ready()?;
        self.criteria.sort = sort;
        self.refresh();
        Ok(())
    }

    /// Reset criteria to defaults (blank text, no facets, recent-first).
    pub fn clear_all_filters(&mut self) -> Result<(), SessionError> {
        self.ensure_ready()?;
        self.criteria = SearchCriteria::default();
        self.refresh();
        Ok(())
    }

    /// Move to the requested page, clamped into `[1, total_pages]`. Criteria
    /// and results are untouched.
    pub fn set_page(&mut self, page: usize) -> Result<(), SessionError> {
        self.ensure_ready()?;
        let total_pages = page_count(self.results.len(), self.page_size);
        self.page_number = page.clamp(1, total_pages);
        Ok(())
    }

    /// Toggle saved membership for `id` and persist the full set through the
    /// store. Valid in any phase: saved state does not depend on the catalog,
    /// and it never touches criteria or page position.
    pub fn toggle_saved(&mut self, id: OpportunityId) -> Result<bool, SessionError> {
        let saved = self.saved.toggle(id);
        self.store.persist(self.saved.ids())?;
        Ok(saved)
    }

    pub fn is_saved(&self, id: OpportunityId) -> bool {
        self.saved.is_saved(id)
    }

    pub fn saved(&self) -> &SavedJobs {
        &self.saved
    }

    pub fn facet_index(&self) -> &FacetIndex {
        &self.facet_index
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Pure projection of the current state: the visible page, the active
    /// filter badge count, and the empty-result flag.
    pub fn view(&self) -> SessionView {
        let page = paginate(&self.results, self.page_number, self.page_size);
        SessionView {
            is_empty: page.total_count == 0,
            active_filter_count: self.criteria.active_filter_count(),
            page,
        }
    }

    /// Result-count message shown after a search completes.
    pub fn found_summary(&self) -> String {
        if self.results.is_empty() {
            "No jobs found. Try adjusting your search criteria.".to_string()
        } else {
            format!("Found {} jobs matching your criteria", self.results.len())
        }
    }

    fn ensure_ready(&self) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Ready {
            Ok(())
        } else {
            Err(SessionError::NotReady)
        }
    }

    // Criteria change, requery, and page reset form one indivisible step:
    // changing filters always lands back on page 1, which also keeps the page
    // in range for the new result set.
    fn refresh(&mut self) {
        self.results = search(&self.catalog, &self.criteria);
        self.page_number = 1;
        debug!(
            results = self.results.len(),
            sort = %self.criteria.sort,
            active_filters = self.criteria.active_filter_count(),
            "search session recomputed"
        );
    }
}
