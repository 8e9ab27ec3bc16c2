//! Core traits for browsing listings.
//!
//! `Listable` is what a record has to expose to be filtered, sorted and
//! paged. `Filter` is a single predicate built from one filter constraint;
//! the FilterPipeline chains them.

use catalog::RecordId;

use crate::criteria::FilterKey;
use crate::sort::SortField;

/// The value of one filterable attribute of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute<'a> {
    Text(&'a str),
    Number(f64),
    /// Inclusive numeric interval, such as a job budget
    Span(f64, f64),
    Flag(bool),
    /// Several strings, any of which may satisfy a constraint
    Terms(Vec<&'a str>),
}

/// A record the browse controller can work with.
///
/// The controller never mutates records; it only reads attributes.
pub trait Listable {
    /// Stable unique id
    fn id(&self) -> RecordId;

    /// Value of a filterable attribute, or None if the record has none.
    /// A record without the attribute never passes an active constraint on it.
    fn attribute(&self, key: FilterKey) -> Option<Attribute<'_>>;

    /// Numeric value the comparator for `field` orders by
    fn sort_value(&self, field: SortField) -> f64;

    /// Filter keys this record type declares
    fn filter_keys() -> &'static [FilterKey]
    where
        Self: Sized;

    /// Sort fields this record type declares
    fn sort_fields() -> &'static [SortField]
    where
        Self: Sized;
}

/// A predicate over records.
///
/// ## Design Note
/// - `Send + Sync` so a pipeline can be shared across threads
/// - Takes `&dyn Listable` so one boxed filter works for every record type
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// The dimension this filter constrains
    fn key(&self) -> FilterKey;

    /// True if the record satisfies this constraint
    fn matches(&self, record: &dyn Listable) -> bool;
}
