//! Sort fields, directions and the stable single-field sort.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ViewError;
use crate::traits::Listable;

/// A sortable attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Externally supplied score
    Relevance,
    Price,
    Date,
    Rating,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Relevance => "relevance",
            SortField::Price => "price",
            SortField::Date => "date",
            SortField::Rating => "rating",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" | "best" => Ok(SortField::Relevance),
            "price" | "budget" | "rate" => Ok(SortField::Price),
            "date" | "newest" | "posted" => Ok(SortField::Date),
            "rating" => Ok(SortField::Rating),
            _ => Err(ViewError::InvalidSortField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Orient a comparator result
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ViewError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// The active ordering. Defaults to relevance, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(SortField::Relevance, SortDirection::Descending)
    }
}

/// Stable sort of `order` (indices into `records`) by `spec`.
///
/// Ties keep their relative order, so callers that pass indices in record
/// order get ties back in record order in either direction.
pub fn sort_indices<R: Listable>(records: &[R], order: &mut [usize], spec: SortSpec) {
    order.sort_by(|&a, &b| {
        let left = records[a].sort_value(spec.field);
        let right = records[b].sort_value(spec.field);
        spec.direction.apply(left.total_cmp(&right))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::listing;

    fn ids(records: &[crate::test_support::Listing], order: &[usize]) -> Vec<u32> {
        order.iter().map(|&i| records[i].id).collect()
    }

    #[test]
    fn test_sort_by_price_both_directions() {
        let records = vec![
            listing(1, "Design", 50.0),
            listing(2, "Design", 10.0),
            listing(3, "Design", 30.0),
        ];
        let mut order = vec![0, 1, 2];

        sort_indices(
            &records,
            &mut order,
            SortSpec::new(SortField::Price, SortDirection::Ascending),
        );
        assert_eq!(ids(&records, &order), vec![2, 3, 1]);

        sort_indices(
            &records,
            &mut order,
            SortSpec::new(SortField::Price, SortDirection::Descending),
        );
        assert_eq!(ids(&records, &order), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let records: Vec<_> = (1..=5).map(|id| listing(id, "Design", 20.0)).collect();

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let mut order: Vec<usize> = (0..records.len()).collect();
            sort_indices(&records, &mut order, SortSpec::new(SortField::Price, direction));
            assert_eq!(ids(&records, &order), vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_parse_field_and_direction() {
        assert_eq!("Price".parse::<SortField>().unwrap(), SortField::Price);
        assert_eq!("newest".parse::<SortField>().unwrap(), SortField::Date);
        assert!("popularity".parse::<SortField>().is_err());
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert_eq!(
            "sideways".parse::<SortDirection>(),
            Err(ViewError::InvalidSortDirection("sideways".to_string()))
        );
    }

    #[test]
    fn test_default_is_relevance_descending() {
        let spec = SortSpec::default();
        assert_eq!(spec.field, SortField::Relevance);
        assert_eq!(spec.direction, SortDirection::Descending);
    }
}
