//! ViewResult and the pure derivation that produces it.

use serde::Serialize;

use catalog::RecordId;

use crate::criteria::FilterCriteria;
use crate::filter_pipeline::FilterPipeline;
use crate::pagination::{self, PageState};
use crate::sort::{self, SortSpec};
use crate::traits::Listable;

/// Page-sliced output consumed by the rendering layer.
///
/// Invariants:
/// - `total_pages == max(1, ceil(total_match_count / page_size))`
/// - `visible_records.len() <= page_size`
/// - `current_page < total_pages`
///
/// `revision` increases on every recompute, so a renderer can tell a fresh
/// result from the one it already drew.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewResult<R> {
    pub visible_records: Vec<R>,
    pub total_match_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub revision: u64,
}

impl<R> ViewResult<R> {
    /// Whether a "previous" control should be enabled
    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    /// Whether a "next" control should be enabled
    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.total_match_count == 0
    }

    /// Page indices to show as numbered buttons
    pub fn page_window(&self, width: usize) -> Vec<usize> {
        pagination::page_window(self.current_page, self.total_pages, width)
    }

    /// 1-based positions of the first and last visible record among all
    /// matches, e.g. (11, 20) for "Showing 11-20 of 25". None when empty.
    pub fn display_range(&self) -> Option<(usize, usize)> {
        if self.visible_records.is_empty() {
            return None;
        }
        let first = self.current_page * self.page_size + 1;
        Some((first, first + self.visible_records.len() - 1))
    }
}

impl<R: Listable> ViewResult<R> {
    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.visible_records.iter().map(|record| record.id()).collect()
    }

    /// Same page content and metadata, ignoring `revision`
    pub fn same_view(&self, other: &Self) -> bool {
        self.visible_ids() == other.visible_ids()
            && self.total_match_count == other.total_match_count
            && self.total_pages == other.total_pages
            && self.current_page == other.current_page
            && self.page_size == other.page_size
    }
}

/// Indices of the records passing `criteria`, ordered by `sort`.
pub fn order_records<R: Listable>(
    records: &[R],
    criteria: &FilterCriteria,
    sort: SortSpec,
) -> Vec<usize> {
    let pipeline = FilterPipeline::from_criteria(criteria);
    let mut order = pipeline.apply(records);
    sort::sort_indices(records, &mut order, sort);
    order
}

/// Slice one page out of an ordering produced by [`order_records`].
///
/// The page index in `page` is clamped; the clamped value is reported in
/// `current_page`.
pub fn slice_page<R: Listable + Clone>(
    records: &[R],
    order: &[usize],
    page: PageState,
    revision: u64,
) -> ViewResult<R> {
    let total_match_count = order.len();
    let total_pages = pagination::total_pages(total_match_count, page.size);
    let current_page = page.index.min(total_pages - 1);
    let bounds = pagination::page_bounds(current_page, page.size, total_match_count);

    ViewResult {
        visible_records: order[bounds].iter().map(|&i| records[i].clone()).collect(),
        total_match_count,
        total_pages,
        current_page,
        page_size: page.size,
        revision,
    }
}

/// Derive the view for one set of inputs: filter, then sort, then paginate.
pub fn compute_view_result<R: Listable + Clone>(
    records: &[R],
    criteria: &FilterCriteria,
    sort: SortSpec,
    page: PageState,
    revision: u64,
) -> ViewResult<R> {
    let order = order_records(records, criteria, sort);
    slice_page(records, &order, page, revision)
}
