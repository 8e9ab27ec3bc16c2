//! Page state and the arithmetic behind it.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::{Result, ViewError};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current page index (0-based) and page size (always positive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub index: usize,
    pub size: usize,
}

impl PageState {
    /// Page state starting at the first page.
    ///
    /// # Errors
    /// `InvalidPageSize` if `size` is not positive
    pub fn with_size(size: i64) -> Result<Self> {
        Ok(Self {
            index: 0,
            size: checked_page_size(size)?,
        })
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

pub(crate) fn checked_page_size(size: i64) -> Result<usize> {
    if size > 0 {
        usize::try_from(size).map_err(|_| ViewError::InvalidPageSize(size))
    } else {
        Err(ViewError::InvalidPageSize(size))
    }
}

/// ceil(match_count / page_size), but never less than one page
pub fn total_pages(match_count: usize, page_size: usize) -> usize {
    match_count.div_ceil(page_size).max(1)
}

/// Clamp a requested page index into [0, total_pages - 1]
pub fn clamp_index(requested: i64, total_pages: usize) -> usize {
    let last = total_pages.saturating_sub(1);
    usize::try_from(requested.max(0)).map_or(last, |index| index.min(last))
}

/// Positions of the records on page `index`
pub fn page_bounds(index: usize, page_size: usize, match_count: usize) -> Range<usize> {
    let start = index.saturating_mul(page_size).min(match_count);
    let end = start.saturating_add(page_size).min(match_count);
    start..end
}

/// Up to `width` consecutive page indices, centered on `current` where possible.
///
/// Used to render the numbered buttons of a pagination bar.
pub fn page_window(current: usize, total_pages: usize, width: usize) -> Vec<usize> {
    let width = width.clamp(1, total_pages.max(1));
    let half = width / 2;
    let start = current
        .saturating_sub(half)
        .min(total_pages.saturating_sub(width));
    (start..start + width).collect()
}
