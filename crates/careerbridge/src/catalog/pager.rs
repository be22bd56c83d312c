use serde::Serialize;

use super::domain::OpportunityRecord;

/// One page of an ordered result set, recomputed whenever criteria or the
/// page number change. Never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    pub items: Vec<OpportunityRecord>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

/// Slice `results` into the requested fixed-size page.
///
/// An empty result set still reports one (empty) page so the UI always has a
/// page to display. Out-of-range page numbers yield an empty item slice; the
/// pager never clamps — keeping the requested page in range is the session's
/// job, since only it knows when the underlying result set changed.
pub fn paginate(results: &[OpportunityRecord], page_number: usize, page_size: usize) -> ResultPage {
    let page_size = page_size.max(1);
    let total_count = results.len();
    let total_pages = page_count(total_count, page_size);
    let start = page_number.saturating_sub(1).saturating_mul(page_size);
    let items = results.iter().skip(start).take(page_size).cloned().collect();

    ResultPage {
        items,
        page_number,
        page_size,
        total_count,
        total_pages,
    }
}

/// `ceil(total_count / page_size)`, floored at one page. `page_size` must be
/// non-zero.
pub(crate) fn page_count(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size).max(1)
}
