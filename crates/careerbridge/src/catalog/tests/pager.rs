use super::common::*;
use crate::catalog::{paginate, sample_catalog, search, SearchCriteria};

#[test]
fn seven_results_at_page_size_five_split_into_two_pages() {
    let results = search(&sample_catalog(), &SearchCriteria::default());

    let first = paginate(&results, 1, 5);
    assert_eq!(ids(&first.items), vec![1, 2, 3, 4, 5]);
    assert_eq!(first.total_count, 7);
    assert_eq!(first.total_pages, 2);

    let second = paginate(&results, 2, 5);
    assert_eq!(ids(&second.items), vec![6, 7]);
    assert_eq!(second.page_number, 2);
}

#[test]
fn empty_result_set_reports_one_empty_page() {
    let page = paginate(&[], 1, 5);
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 0);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn out_of_range_page_yields_empty_items() {
    let results = search(&sample_catalog(), &SearchCriteria::default());
    let page = paginate(&results, 9, 5);
    assert!(page.items.is_empty());
    assert_eq!(page.page_number, 9);
    assert_eq!(page.total_pages, 2);
}

#[test]
fn exact_multiple_has_no_trailing_empty_page() {
    let results: Vec<_> = (1..=10)
        .map(|id| bare_record(id, "Role", "Company"))
        .collect();
    let page = paginate(&results, 1, 5);
    assert_eq!(page.total_pages, 2);
}

#[test]
fn concatenated_pages_reproduce_the_result_set_exactly() {
    let results = search(&sample_catalog(), &SearchCriteria::default());
    let total_pages = paginate(&results, 1, 3).total_pages;

    let mut collected = Vec::new();
    for page_number in 1..=total_pages {
        collected.extend(paginate(&results, page_number, 3).items);
    }
    assert_eq!(collected, results);
}
