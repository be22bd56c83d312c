use std::collections::HashSet;

use crate::catalog::domain::OpportunityId;
use crate::catalog::SavedJobs;

#[test]
fn toggle_is_an_involution() {
    let mut saved = SavedJobs::default();
    let id = OpportunityId(3);

    assert!(!saved.is_saved(id));
    assert!(saved.toggle(id));
    assert!(saved.is_saved(id));
    assert!(!saved.toggle(id));
    assert!(!saved.is_saved(id));
}

#[test]
fn ids_outside_any_catalog_are_accepted() {
    let mut saved = SavedJobs::default();
    assert!(saved.toggle(OpportunityId(9999)));
    assert!(saved.is_saved(OpportunityId(9999)));
}

#[test]
fn seeding_restores_prior_membership() {
    let seed: HashSet<_> = [OpportunityId(2), OpportunityId(5)].into_iter().collect();
    let saved = SavedJobs::from_ids(seed);

    assert_eq!(saved.len(), 2);
    assert!(saved.is_saved(OpportunityId(2)));
    assert!(saved.is_saved(OpportunityId(5)));
    assert!(!saved.is_saved(OpportunityId(1)));
}

#[test]
fn empty_registry_reports_empty() {
    let saved = SavedJobs::default();
    assert!(saved.is_empty());
    assert_eq!(saved.len(), 0);
    assert!(saved.ids().is_empty());
}
