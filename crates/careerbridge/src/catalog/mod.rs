//! Opportunity catalog search core: facet derivation, query evaluation,
//! pagination, saved-job membership, and the session state machine that ties
//! them together for the presentation layer.

pub mod domain;
mod facets;
mod pager;
mod query;
mod sample;
mod saved;
mod session;

#[cfg(test)]
mod tests;

pub use facets::{FacetIndex, FacetKind, FacetSelection};
pub use pager::{paginate, ResultPage};
pub use query::{search, SearchCriteria};
pub use sample::sample_catalog;
pub use saved::{SavedJobs, SavedJobsStore, StoreError};
pub use session::{SearchSession, SessionError, SessionPhase, SessionView};
