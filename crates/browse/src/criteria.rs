//! Filter keys, filter values and the active FilterCriteria.
//!
//! Each key has exactly one value shape. Values are normalized on the way
//! in, so an empty selection or blank search box simply means "no
//! constraint" for that dimension.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ViewError;

// =============================================================================
// Keys and Shapes
// =============================================================================

/// A filterable dimension of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKey {
    Category,
    Experience,
    Skills,
    Price,
    Rating,
    Posted,
    Location,
    Keyword,
    Remote,
    Verified,
    Available,
}

impl FilterKey {
    pub const ALL: [FilterKey; 11] = [
        FilterKey::Category,
        FilterKey::Experience,
        FilterKey::Skills,
        FilterKey::Price,
        FilterKey::Rating,
        FilterKey::Posted,
        FilterKey::Location,
        FilterKey::Keyword,
        FilterKey::Remote,
        FilterKey::Verified,
        FilterKey::Available,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Category => "category",
            FilterKey::Experience => "experience",
            FilterKey::Skills => "skills",
            FilterKey::Price => "price",
            FilterKey::Rating => "rating",
            FilterKey::Posted => "posted",
            FilterKey::Location => "location",
            FilterKey::Keyword => "keyword",
            FilterKey::Remote => "remote",
            FilterKey::Verified => "verified",
            FilterKey::Available => "available",
        }
    }

    /// The only value shape this key accepts
    pub fn shape(&self) -> ValueShape {
        match self {
            FilterKey::Category | FilterKey::Experience | FilterKey::Skills => ValueShape::Set,
            FilterKey::Price | FilterKey::Rating | FilterKey::Posted => ValueShape::Range,
            FilterKey::Location | FilterKey::Keyword => ValueShape::Text,
            FilterKey::Remote | FilterKey::Verified | FilterKey::Available => ValueShape::Flag,
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim().to_ascii_lowercase().as_str() {
            "category" => FilterKey::Category,
            "experience" | "experience_level" => FilterKey::Experience,
            "skills" | "skill" => FilterKey::Skills,
            "price" | "budget" | "rate" => FilterKey::Price,
            "rating" => FilterKey::Rating,
            "posted" | "posted_date" => FilterKey::Posted,
            "location" => FilterKey::Location,
            "keyword" | "search" => FilterKey::Keyword,
            "remote" => FilterKey::Remote,
            "verified" => FilterKey::Verified,
            "available" => FilterKey::Available,
            _ => return Err(ViewError::InvalidFilterKey(s.to_string())),
        };
        Ok(key)
    }
}

/// Shape of a filter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueShape {
    Flag,
    Set,
    Range,
    Text,
}

impl ValueShape {
    /// Relative cost of evaluating a predicate of this shape; lower runs first
    pub fn cost(&self) -> u8 {
        match self {
            ValueShape::Flag => 0,
            ValueShape::Set => 1,
            ValueShape::Range => 2,
            ValueShape::Text => 3,
        }
    }
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueShape::Flag => "boolean",
            ValueShape::Set => "set",
            ValueShape::Range => "range",
            ValueShape::Text => "string",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Values
// =============================================================================

/// Inclusive numeric bounds; a missing side is unbounded
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    /// True if [low, high] shares at least one point with these bounds
    pub fn overlaps(&self, low: f64, high: f64) -> bool {
        self.min.is_none_or(|min| high >= min) && self.max.is_none_or(|max| low <= max)
    }

    /// NaN sides are dropped and inverted bounds are swapped.
    /// Returns None when both sides end up unbounded.
    fn normalized(self) -> Option<Self> {
        let min = self.min.filter(|v| !v.is_nan());
        let max = self.max.filter(|v| !v.is_nan());
        match (min, max) {
            (None, None) => None,
            (Some(lo), Some(hi)) if lo > hi => Some(Self::new(Some(hi), Some(lo))),
            _ => Some(Self::new(min, max)),
        }
    }
}

/// A constraint for one filter key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "shape", content = "value")]
pub enum FilterValue {
    /// Passes if the attribute equals any member (case-insensitive)
    Set(BTreeSet<String>),
    Range(Bounds),
    Flag(bool),
    /// Passes if the attribute contains the text (case-insensitive)
    Text(String),
}

impl FilterValue {
    pub fn set<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterValue::Set(values.into_iter().map(Into::into).collect())
    }

    pub fn between(min: f64, max: f64) -> Self {
        FilterValue::Range(Bounds::new(Some(min), Some(max)))
    }

    pub fn at_least(min: f64) -> Self {
        FilterValue::Range(Bounds::new(Some(min), None))
    }

    pub fn at_most(max: f64) -> Self {
        FilterValue::Range(Bounds::new(None, Some(max)))
    }

    pub fn flag(value: bool) -> Self {
        FilterValue::Flag(value)
    }

    pub fn text(value: impl Into<String>) -> Self {
        FilterValue::Text(value.into())
    }

    pub fn shape(&self) -> ValueShape {
        match self {
            FilterValue::Set(_) => ValueShape::Set,
            FilterValue::Range(_) => ValueShape::Range,
            FilterValue::Flag(_) => ValueShape::Flag,
            FilterValue::Text(_) => ValueShape::Text,
        }
    }

    /// Canonical form of this value, or None if it constrains nothing.
    pub fn normalized(self) -> Option<Self> {
        match self {
            FilterValue::Set(values) => {
                let values: BTreeSet<String> = values
                    .into_iter()
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .collect();
                (!values.is_empty()).then_some(FilterValue::Set(values))
            }
            FilterValue::Range(bounds) => bounds.normalized().map(FilterValue::Range),
            FilterValue::Flag(flag) => Some(FilterValue::Flag(flag)),
            FilterValue::Text(text) => {
                let text = text.trim();
                (!text.is_empty()).then(|| FilterValue::Text(text.to_string()))
            }
        }
    }
}

// =============================================================================
// FilterCriteria
// =============================================================================

/// The active constraints, at most one per key.
///
/// An absent key means no constraint for that dimension. Iteration is in
/// key order, which keeps pipelines built from equal criteria identical.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    constraints: BTreeMap<FilterKey, FilterValue>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: FilterKey) -> Option<&FilterValue> {
        self.constraints.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &FilterValue)> {
        self.constraints.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Replace the constraint for `key`.
    ///
    /// The value is normalized first; one that constrains nothing removes
    /// the key instead. Shape checking is the caller's job.
    pub(crate) fn set(&mut self, key: FilterKey, value: FilterValue) {
        match value.normalized() {
            Some(value) => {
                self.constraints.insert(key, value);
            }
            None => {
                self.constraints.remove(&key);
            }
        }
    }

    pub(crate) fn remove(&mut self, key: FilterKey) {
        self.constraints.remove(&key);
    }

    pub(crate) fn clear(&mut self) {
        self.constraints.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_key_parsing() {
        assert_eq!("Category".parse::<FilterKey>().unwrap(), FilterKey::Category);
        assert_eq!("budget".parse::<FilterKey>().unwrap(), FilterKey::Price);
        assert_eq!(
            "colour".parse::<FilterKey>(),
            Err(ViewError::InvalidFilterKey("colour".to_string()))
        );
        for key in FilterKey::ALL {
            assert_eq!(key.as_str().parse::<FilterKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_empty_values_normalize_to_none() {
        assert_eq!(FilterValue::set(Vec::<String>::new()).normalized(), None);
        assert_eq!(FilterValue::set(["  "]).normalized(), None);
        assert_eq!(FilterValue::text("   ").normalized(), None);
        assert_eq!(FilterValue::Range(Bounds::default()).normalized(), None);
        assert_eq!(FilterValue::flag(false).normalized(), Some(FilterValue::Flag(false)));
    }

    #[test]
    fn test_inverted_range_is_swapped() {
        let value = FilterValue::between(100.0, 10.0).normalized().unwrap();
        assert_eq!(value, FilterValue::between(10.0, 100.0));
    }

    #[test]
    fn test_nan_bound_is_dropped() {
        let value = FilterValue::between(f64::NAN, 50.0).normalized().unwrap();
        assert_eq!(value, FilterValue::at_most(50.0));
    }

    #[test]
    fn test_bounds_overlap() {
        let bounds = Bounds::new(Some(500.0), Some(1000.0));
        assert!(bounds.overlaps(800.0, 1200.0));
        assert!(bounds.overlaps(1000.0, 2000.0));
        assert!(!bounds.overlaps(100.0, 400.0));
        assert!(Bounds::new(None, Some(10.0)).contains(-3.0));
    }

    #[test]
    fn test_criteria_set_with_empty_value_removes_key() {
        let mut criteria = FilterCriteria::new();
        criteria.set(FilterKey::Category, FilterValue::set(["Design"]));
        assert_eq!(criteria.len(), 1);

        criteria.set(FilterKey::Category, FilterValue::set(Vec::<String>::new()));
        assert!(criteria.is_empty());
    }
}
