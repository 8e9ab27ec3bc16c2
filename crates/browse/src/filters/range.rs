//! Filter for numeric dimensions: price, rating, posted date.

use crate::criteria::{Bounds, FilterKey};
use crate::traits::{Attribute, Filter, Listable};

/// Keeps records whose attribute lies within inclusive bounds.
///
/// ## Algorithm
/// - Number attribute: passes if inside the bounds
/// - Span attribute (e.g. a job budget): passes if the span overlaps the bounds
pub struct RangeFilter {
    key: FilterKey,
    bounds: Bounds,
}

impl RangeFilter {
    pub fn new(key: FilterKey, bounds: Bounds) -> Self {
        Self { key, bounds }
    }
}

impl Filter for RangeFilter {
    fn name(&self) -> &str {
        "RangeFilter"
    }

    fn key(&self) -> FilterKey {
        self.key
    }

    fn matches(&self, record: &dyn Listable) -> bool {
        match record.attribute(self.key) {
            Some(Attribute::Number(value)) => self.bounds.contains(value),
            Some(Attribute::Span(low, high)) => self.bounds.overlaps(low, high),
            _ => false,
        }
    }
}
