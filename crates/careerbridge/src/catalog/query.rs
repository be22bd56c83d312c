use serde::{Deserialize, Serialize};

use super::domain::{OpportunityRecord, SortKey};
use super::facets::FacetSelection;

/// The complete set of active search inputs driving one query evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub facets: FacetSelection,
    #[serde(default)]
    pub sort: SortKey,
}

impl SearchCriteria {
    /// Non-empty facet sets plus one for a non-blank text query; drives the
    /// "N filters active" badge.
    pub fn active_filter_count(&self) -> usize {
        self.facets.active_count() + usize::from(!self.text.trim().is_empty())
    }
}

/// Evaluate `criteria` against the catalog, producing a new filtered and
/// sorted sequence. Pure and deterministic: identical inputs always yield the
/// same ordered output, and the catalog is never mutated.
///
/// Filtering runs before sorting. Blank or whitespace-only text applies no
/// text filter; otherwise the trimmed, lower-cased text must be a substring of
/// the record's title, company, description, or any tag. Facets apply the
/// OR-within / AND-across rule from [`FacetSelection::matches`].
pub fn search(catalog: &[OpportunityRecord], criteria: &SearchCriteria) -> Vec<OpportunityRecord> {
    let needle = criteria.text.trim().to_lowercase();
    let mut results: Vec<OpportunityRecord> = catalog
        .iter()
        .filter(|record| needle.is_empty() || record.matches_text(&needle))
        .filter(|record| criteria.facets.matches(record))
        .cloned()
        .collect();
    sort_results(&mut results, criteria.sort);
    results
}

/// Stable sort so records with equal keys keep their filtered order. Records
/// without a salary sort as the empty string, which lands them last under
/// `salary-high` and first under `salary-low`.
fn sort_results(results: &mut [OpportunityRecord], sort: SortKey) {
    match sort {
        SortKey::Recent => results.sort_by_key(|record| record.id),
        SortKey::SalaryHigh => results.sort_by(|a, b| b.salary_key().cmp(a.salary_key())),
        SortKey::SalaryLow => results.sort_by(|a, b| a.salary_key().cmp(b.salary_key())),
    }
}
