//! Error types for the browse crate.
//!
//! Every variant here is a caller bug: something the UI should never send.
//! Values a user can reach through normal interaction (page numbers past the
//! end, filters that match nothing) are clamped instead of rejected.

use thiserror::Error;

use crate::criteria::{FilterKey, ValueShape};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    /// Key does not name a filterable attribute of the record type
    #[error("Unknown filter key: {0}")]
    InvalidFilterKey(String),

    /// Value shape does not fit the key (e.g. a range for `category`)
    #[error("Filter {key} expects a {expected} value, got a {found}")]
    FilterShapeMismatch {
        key: FilterKey,
        expected: ValueShape,
        found: ValueShape,
    },

    #[error("Unknown sort field: {0}")]
    InvalidSortField(String),

    #[error("Unknown sort direction: {0}")]
    InvalidSortDirection(String),

    /// Page size must be positive
    #[error("Invalid page size: {0}")]
    InvalidPageSize(i64),
}

pub type Result<T> = std::result::Result<T, ViewError>;
