//! Filter implementations for the browse pipeline.
//!
//! One filter per value shape. Each is keyed, so the same SetFilter type
//! serves category, experience and skills.

pub mod flag;
pub mod range;
pub mod set;
pub mod text;

// Re-export for convenience
pub use flag::FlagFilter;
pub use range::RangeFilter;
pub use set::SetFilter;
pub use text::TextFilter;

use crate::criteria::{FilterKey, FilterValue};
use crate::traits::Filter;

/// Build the predicate for one constraint.
pub fn build(key: FilterKey, value: &FilterValue) -> Box<dyn Filter> {
    match value {
        FilterValue::Set(values) => Box::new(SetFilter::new(key, values.iter().cloned())),
        FilterValue::Range(bounds) => Box::new(RangeFilter::new(key, *bounds)),
        FilterValue::Flag(expected) => Box::new(FlagFilter::new(key, *expected)),
        FilterValue::Text(needle) => Box::new(TextFilter::new(key, needle)),
    }
}
