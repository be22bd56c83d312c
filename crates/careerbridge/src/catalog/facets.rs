use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::domain::{JobType, OpportunityRecord};

/// The discrete filter dimensions exposed to the search UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FacetKind {
    JobType,
    Location,
    Experience,
}

impl FacetKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::JobType, Self::Location, Self::Experience]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::JobType => "jobType",
            Self::Location => "location",
            Self::Experience => "experience",
        }
    }

    /// The record attribute this facet filters on, if present on the record.
    pub(crate) fn value_of(self, record: &OpportunityRecord) -> Option<&str> {
        match self {
            Self::JobType => record.job_type.map(JobType::label),
            Self::Location => record.location.as_deref(),
            Self::Experience => record.experience.as_deref(),
        }
    }
}

/// Distinct non-empty values per facet, in first-seen catalog order so filter
/// controls render stably. Options depend only on the catalog, never on the
/// active selection, and are rebuilt only when the catalog changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetIndex {
    pub job_type: Vec<String>,
    pub location: Vec<String>,
    pub experience: Vec<String>,
}

impl FacetIndex {
    pub fn build(catalog: &[OpportunityRecord]) -> Self {
        let mut index = Self::default();
        for record in catalog {
            for kind in FacetKind::ordered() {
                let Some(value) = kind.value_of(record) else {
                    continue;
                };
                if value.is_empty() {
                    continue;
                }
                let bucket = index.bucket_mut(kind);
                if !bucket.iter().any(|existing| existing == value) {
                    bucket.push(value.to_string());
                }
            }
        }
        index
    }

    pub fn values(&self, kind: FacetKind) -> &[String] {
        match kind {
            FacetKind::JobType => &self.job_type,
            FacetKind::Location => &self.location,
            FacetKind::Experience => &self.experience,
        }
    }

    fn bucket_mut(&mut self, kind: FacetKind) -> &mut Vec<String> {
        match kind {
            FacetKind::JobType => &mut self.job_type,
            FacetKind::Location => &mut self.location,
            FacetKind::Experience => &mut self.experience,
        }
    }
}

/// The user's active filter choices: a value set per facet.
///
/// An empty set places no constraint on that facet. A record matches when it
/// satisfies every constrained facet (AND across facets) by carrying any one
/// of the selected values (OR within a facet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetSelection {
    #[serde(default)]
    pub job_type: BTreeSet<String>,
    #[serde(default)]
    pub location: BTreeSet<String>,
    #[serde(default)]
    pub experience: BTreeSet<String>,
}

impl FacetSelection {
    pub fn selected(&self, kind: FacetKind) -> &BTreeSet<String> {
        match kind {
            FacetKind::JobType => &self.job_type,
            FacetKind::Location => &self.location,
            FacetKind::Experience => &self.experience,
        }
    }

    fn selected_mut(&mut self, kind: FacetKind) -> &mut BTreeSet<String> {
        match kind {
            FacetKind::JobType => &mut self.job_type,
            FacetKind::Location => &mut self.location,
            FacetKind::Experience => &mut self.experience,
        }
    }

    /// Add the value if absent, remove it if present. Returns whether the
    /// value is selected after the toggle.
    pub fn toggle(&mut self, kind: FacetKind, value: &str) -> bool {
        let set = self.selected_mut(kind);
        if set.remove(value) {
            false
        } else {
            set.insert(value.to_string());
            true
        }
    }

    /// Number of facets with at least one selected value.
    pub fn active_count(&self) -> usize {
        FacetKind::ordered()
            .into_iter()
            .filter(|kind| !self.selected(*kind).is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn clear(&mut self) {
        for kind in FacetKind::ordered() {
            self.selected_mut(kind).clear();
        }
    }

    /// Set-membership check, short-circuiting on the first failing facet. A
    /// record missing a constrained attribute does not match that facet.
    pub fn matches(&self, record: &OpportunityRecord) -> bool {
        FacetKind::ordered().into_iter().all(|kind| {
            let selected = self.selected(kind);
            if selected.is_empty() {
                return true;
            }
            match kind.value_of(record) {
                Some(value) => selected.contains(value),
                None => false,
            }
        })
    }
}
