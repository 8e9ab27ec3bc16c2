//! ListViewController: filter, sort and page state for one browse page.
//!
//! The controller owns the record set and the three inputs (criteria, sort,
//! page). Every mutation recomputes the ViewResult from scratch; nothing is
//! patched incrementally. The filtered and sorted ordering is cached so a
//! page change only re-slices.

use crate::criteria::{FilterCriteria, FilterKey, FilterValue};
use crate::error::{Result, ViewError};
use crate::pagination::{self, PageState};
use crate::sort::{SortDirection, SortField, SortSpec};
use crate::traits::Listable;
use crate::view::{self, ViewResult};

/// Browse state for a list of records.
///
/// ## Usage
/// ```ignore
/// let mut jobs = ListViewController::new(catalog.jobs());
/// jobs.set_filter("category", FilterValue::set(["Design"]))?;
/// jobs.set_sort("price", "asc")?;
/// jobs.set_page(1);
///
/// let view = jobs.view_result();
/// println!("page {} of {}", view.current_page + 1, view.total_pages);
/// ```
pub struct ListViewController<R> {
    records: Vec<R>,
    criteria: FilterCriteria,
    sort: SortSpec,
    page: PageState,
    /// Indices into `records` that pass the criteria, in sort order
    order: Vec<usize>,
    view: ViewResult<R>,
    revision: u64,
}

impl<R: Listable + Clone> ListViewController<R> {
    /// Controller with no filters, relevance ordering and the default page size.
    pub fn new(records: Vec<R>) -> Self {
        Self::with_state(records, FilterCriteria::new(), SortSpec::default(), PageState::default())
    }

    /// Controller with a custom page size.
    ///
    /// # Errors
    /// `InvalidPageSize` if `size` is not positive
    pub fn with_page_size(records: Vec<R>, size: i64) -> Result<Self> {
        let page = PageState::with_size(size)?;
        Ok(Self::with_state(records, FilterCriteria::new(), SortSpec::default(), page))
    }

    fn with_state(
        records: Vec<R>,
        criteria: FilterCriteria,
        sort: SortSpec,
        page: PageState,
    ) -> Self {
        let mut controller = Self {
            records,
            criteria,
            sort,
            page,
            order: Vec::new(),
            view: ViewResult {
                visible_records: Vec::new(),
                total_match_count: 0,
                total_pages: 1,
                current_page: 0,
                page_size: page.size,
                revision: 0,
            },
            revision: 0,
        };
        controller.recompute();
        controller
    }

    // =========================================================================
    // Filters
    // =========================================================================

    /// Replace the constraint for a filter key given by name.
    ///
    /// Resets to the first page.
    ///
    /// # Errors
    /// - `InvalidFilterKey` if the name is unknown or not declared by `R`
    /// - `FilterShapeMismatch` if the value has the wrong shape for the key
    pub fn set_filter(&mut self, key: &str, value: FilterValue) -> Result<&ViewResult<R>> {
        let key = resolve_key::<R>(key)?;
        self.set_filter_key(key, value)
    }

    /// Typed form of [`set_filter`](Self::set_filter).
    pub fn set_filter_key(&mut self, key: FilterKey, value: FilterValue) -> Result<&ViewResult<R>> {
        ensure_declared::<R>(key)?;
        if value.shape() != key.shape() {
            return Err(ViewError::FilterShapeMismatch {
                key,
                expected: key.shape(),
                found: value.shape(),
            });
        }
        self.criteria.set(key, value);
        self.page.index = 0;
        Ok(self.recompute())
    }

    /// Remove the constraint for one key. Resets to the first page.
    ///
    /// # Errors
    /// `InvalidFilterKey` if the name is unknown or not declared by `R`
    pub fn clear_filter(&mut self, key: &str) -> Result<&ViewResult<R>> {
        let key = resolve_key::<R>(key)?;
        self.criteria.remove(key);
        self.page.index = 0;
        Ok(self.recompute())
    }

    /// Remove every constraint. Resets to the first page.
    pub fn clear_all_filters(&mut self) -> &ViewResult<R> {
        self.criteria.clear();
        self.page.index = 0;
        self.recompute()
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Order by `field` in `direction`, both given by name.
    ///
    /// The page index is kept: re-ordering should not move the user to
    /// another page.
    ///
    /// # Errors
    /// - `InvalidSortField` if the field is unknown or not declared by `R`
    /// - `InvalidSortDirection` if the direction is not ascending/descending
    pub fn set_sort(&mut self, field: &str, direction: &str) -> Result<&ViewResult<R>> {
        let field: SortField = field.parse()?;
        let direction: SortDirection = direction.parse()?;
        self.set_sort_spec(SortSpec::new(field, direction))
    }

    /// Typed form of [`set_sort`](Self::set_sort).
    pub fn set_sort_spec(&mut self, spec: SortSpec) -> Result<&ViewResult<R>> {
        if !R::sort_fields().contains(&spec.field) {
            return Err(ViewError::InvalidSortField(spec.field.to_string()));
        }
        self.sort = spec;
        Ok(self.recompute())
    }

    // =========================================================================
    // Paging
    // =========================================================================

    /// Move to page `index` (0-based), clamped into the valid range.
    ///
    /// Only the visible slice is recomputed.
    pub fn set_page(&mut self, index: i64) -> &ViewResult<R> {
        let total_pages = pagination::total_pages(self.order.len(), self.page.size);
        let clamped = pagination::clamp_index(index, total_pages);
        if i64::try_from(clamped).ok() != Some(index) {
            tracing::debug!("Page {} clamped to {}", index, clamped);
        }
        self.page.index = clamped;
        self.reslice()
    }

    pub fn next_page(&mut self) -> &ViewResult<R> {
        let next = self.page.index.saturating_add(1);
        self.set_page(i64::try_from(next).unwrap_or(i64::MAX))
    }

    pub fn previous_page(&mut self) -> &ViewResult<R> {
        let previous = self.page.index.saturating_sub(1);
        self.set_page(i64::try_from(previous).unwrap_or(0))
    }

    /// Change the page size and return to the first page.
    ///
    /// # Errors
    /// `InvalidPageSize` if `size` is not positive
    pub fn set_page_size(&mut self, size: i64) -> Result<&ViewResult<R>> {
        self.page = PageState::with_size(size)?;
        Ok(self.reslice())
    }

    // =========================================================================
    // Records
    // =========================================================================

    /// Replace the record set, e.g. after a reload.
    ///
    /// Filters and sort are kept; the page index is clamped.
    pub fn refresh_records(&mut self, records: Vec<R>) -> &ViewResult<R> {
        tracing::debug!(
            "Refreshing records ({} -> {})",
            self.records.len(),
            records.len()
        );
        self.records = records;
        self.recompute()
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The current derived view
    pub fn view_result(&self) -> &ViewResult<R> {
        &self.view
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Re-run filter and sort, then re-slice.
    fn recompute(&mut self) -> &ViewResult<R> {
        self.order = view::order_records(&self.records, &self.criteria, self.sort);
        tracing::debug!(
            "Recomputed view: {} of {} records match {} filter(s), sorted by {} {}",
            self.order.len(),
            self.records.len(),
            self.criteria.len(),
            self.sort.field,
            self.sort.direction
        );
        self.reslice()
    }

    /// Slice the cached ordering for the current page and bump the revision.
    fn reslice(&mut self) -> &ViewResult<R> {
        self.revision += 1;
        self.view = view::slice_page(&self.records, &self.order, self.page, self.revision);
        // keep the stored index valid for the next relative move
        self.page.index = self.view.current_page;
        &self.view
    }
}

fn resolve_key<R: Listable>(name: &str) -> Result<FilterKey> {
    let key: FilterKey = name.parse()?;
    ensure_declared::<R>(key)?;
    Ok(key)
}

fn ensure_declared<R: Listable>(key: FilterKey) -> Result<()> {
    if R::filter_keys().contains(&key) {
        Ok(())
    } else {
        Err(ViewError::InvalidFilterKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Listing, listing};

    fn priced(prices: &[f64]) -> Vec<Listing> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| listing(i as u32 + 1, "Design", price))
            .collect()
    }

    #[test]
    fn test_new_controller_shows_first_page() {
        let controller = ListViewController::new(priced(&[1.0; 25]));
        let view = controller.view_result();

        assert_eq!(view.total_match_count, 25);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.visible_records.len(), 10);
        assert_eq!(view.current_page, 0);
    }

    #[test]
    fn test_set_filter_resets_page() {
        let mut controller = ListViewController::new(priced(&[1.0; 25]));
        controller.set_page(2);
        assert_eq!(controller.page_state().index, 2);

        controller
            .set_filter("price", FilterValue::at_most(5.0))
            .unwrap();
        assert_eq!(controller.page_state().index, 0);
    }

    #[test]
    fn test_set_sort_keeps_page() {
        let mut controller = ListViewController::new(priced(&[1.0; 25]));
        controller.set_page(1);

        let view = controller.set_sort("price", "descending").unwrap();
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn test_unknown_filter_key_rejected() {
        let mut controller = ListViewController::new(priced(&[1.0, 2.0]));
        let before = controller.view_result().revision;

        let err = controller
            .set_filter("colour", FilterValue::set(["red"]))
            .unwrap_err();
        assert_eq!(err, ViewError::InvalidFilterKey("colour".to_string()));

        // `available` is a real key but test listings do not declare it
        let err = controller
            .set_filter("available", FilterValue::flag(true))
            .unwrap_err();
        assert_eq!(err, ViewError::InvalidFilterKey("available".to_string()));

        assert!(controller.clear_filter("colour").is_err());
        assert_eq!(controller.view_result().revision, before);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let mut controller = ListViewController::new(priced(&[1.0]));
        let err = controller
            .set_filter("category", FilterValue::between(1.0, 2.0))
            .unwrap_err();
        assert!(matches!(
            err,
            ViewError::FilterShapeMismatch { key: FilterKey::Category, .. }
        ));
        assert!(controller.criteria().is_empty());
    }

    #[test]
    fn test_undeclared_sort_field_rejected() {
        let mut controller = ListViewController::new(priced(&[1.0]));
        let err = controller.set_sort("date", "asc").unwrap_err();
        assert_eq!(err, ViewError::InvalidSortField("date".to_string()));
        assert_eq!(controller.sort(), SortSpec::default());
    }

    #[test]
    fn test_page_size_validation() {
        let mut controller = ListViewController::new(priced(&[1.0; 25]));
        controller.set_page(2);

        assert_eq!(
            controller.set_page_size(0).unwrap_err(),
            ViewError::InvalidPageSize(0)
        );
        assert_eq!(controller.page_state().index, 2);

        let view = controller.set_page_size(5).unwrap();
        assert_eq!(view.total_pages, 5);
        assert_eq!(view.current_page, 0);
        assert!(ListViewController::with_page_size(priced(&[1.0]), -3).is_err());
    }

    #[test]
    fn test_next_and_previous_stop_at_edges() {
        let mut controller = ListViewController::new(priced(&[1.0; 15]));

        assert_eq!(controller.previous_page().current_page, 0);
        assert_eq!(controller.next_page().current_page, 1);
        assert_eq!(controller.next_page().current_page, 1);
        assert_eq!(controller.previous_page().current_page, 0);
    }

    #[test]
    fn test_refresh_clamps_page_and_keeps_filters() {
        let mut controller = ListViewController::new(priced(&[1.0; 30]));
        controller
            .set_filter("category", FilterValue::set(["Design"]))
            .unwrap();
        controller.set_page(2);

        let view = controller.refresh_records(priced(&[1.0; 12]));
        assert_eq!(view.current_page, 1);
        assert_eq!(view.total_match_count, 12);
        assert_eq!(controller.criteria().len(), 1);
    }

    #[test]
    fn test_every_mutation_bumps_revision() {
        let mut controller = ListViewController::new(priced(&[1.0; 3]));
        let first = controller.view_result().revision;
        let second = controller.set_page(0).revision;
        let third = controller.clear_all_filters().revision;
        assert!(first < second && second < third);
    }
}
