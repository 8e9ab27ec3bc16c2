//! The FilterPipeline chains filter predicates.
//!
//! A record passes the pipeline iff it passes every filter (AND across
//! dimensions). The result does not depend on filter order, so filters built
//! from criteria run cheapest first.

use crate::criteria::FilterCriteria;
use crate::filters;
use crate::traits::{Filter, Listable};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SetFilter::new(FilterKey::Category, ["Design"]))
///     .add_filter(FlagFilter::new(FilterKey::Remote, true));
///
/// let matching = pipeline.apply(&records);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// One filter per active constraint, cheapest shape first.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut filters: Vec<Box<dyn Filter>> = criteria
            .iter()
            .map(|(key, value)| filters::build(key, value))
            .collect();
        filters.sort_by_key(|filter| filter.key().shape().cost());
        Self { filters }
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence.
    ///
    /// ## Algorithm
    /// 1. Start with every record index, in record order
    /// 2. For each filter, keep only the indices whose record matches
    /// 3. Return the surviving indices, still in record order
    pub fn apply<R: Listable>(&self, records: &[R]) -> Vec<usize> {
        let mut current: Vec<usize> = (0..records.len()).collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} on {} (input count: {})",
                filter.name(),
                filter.key(),
                current.len()
            );
            current.retain(|&index| filter.matches(&records[index]));
            tracing::debug!(
                "Filter applied: {} on {} (output count: {})",
                filter.name(),
                filter.key(),
                current.len()
            );
            if current.is_empty() {
                break;
            }
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{FilterKey, FilterValue};
    use crate::filters::{FlagFilter, SetFilter};
    use crate::test_support::listing;

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let records = vec![listing(1, "Design", 10.0), listing(2, "Writing", 20.0)];

        assert_eq!(pipeline.apply(&records), vec![0, 1]);
    }

    #[test]
    fn test_filters_are_anded() {
        let mut remote_design = listing(1, "Design", 10.0);
        remote_design.remote = true;
        let onsite_design = listing(2, "Design", 10.0);
        let mut remote_writing = listing(3, "Writing", 10.0);
        remote_writing.remote = true;
        let records = vec![remote_design, onsite_design, remote_writing];

        let pipeline = FilterPipeline::new()
            .add_filter(SetFilter::new(FilterKey::Category, ["Design"]))
            .add_filter(FlagFilter::new(FilterKey::Remote, true));

        assert_eq!(pipeline.apply(&records), vec![0]);
    }

    #[test]
    fn test_from_criteria_orders_cheapest_first() {
        let mut criteria = FilterCriteria::new();
        criteria.set(FilterKey::Keyword, FilterValue::text("logo"));
        criteria.set(FilterKey::Price, FilterValue::at_most(100.0));
        criteria.set(FilterKey::Remote, FilterValue::flag(true));
        criteria.set(FilterKey::Category, FilterValue::set(["Design"]));

        let pipeline = FilterPipeline::from_criteria(&criteria);
        let keys: Vec<FilterKey> = pipeline.filters.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec![
                FilterKey::Remote,
                FilterKey::Category,
                FilterKey::Price,
                FilterKey::Keyword
            ]
        );
    }
}
