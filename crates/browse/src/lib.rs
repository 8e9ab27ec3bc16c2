//! Browse engine for marketplace listings.
//!
//! This crate provides:
//! - Listable trait that records implement to be browsed
//! - Filter trait, per-shape filter implementations and the FilterPipeline
//! - Stable single-field sorting and page arithmetic
//! - ListViewController holding filter/sort/page state and the derived ViewResult
//!
//! ## Architecture
//! Every mutation of the controller runs the same derivation:
//! 1. Filters keep records satisfying every active constraint
//! 2. The survivors are stably sorted by the active sort field
//! 3. The sorted sequence is sliced into the current page
//!
//! ## Example Usage
//! ```ignore
//! use browse::{FilterValue, ListViewController};
//! use catalog::Catalog;
//!
//! let catalog = Catalog::sample();
//! let mut jobs = ListViewController::new(catalog.jobs());
//!
//! jobs.set_filter("category", FilterValue::set(["Design"]))?;
//! jobs.set_sort("price", "ascending")?;
//!
//! for job in &jobs.view_result().visible_records {
//!     println!("{} {}", job.title, job.budget);
//! }
//! ```

pub mod controller;
pub mod criteria;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod pagination;
pub mod records;
pub mod sort;
pub mod traits;
pub mod view;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use controller::ListViewController;
pub use criteria::{Bounds, FilterCriteria, FilterKey, FilterValue, ValueShape};
pub use error::{Result, ViewError};
pub use filter_pipeline::FilterPipeline;
pub use pagination::{DEFAULT_PAGE_SIZE, PageState};
pub use sort::{SortDirection, SortField, SortSpec};
pub use traits::{Attribute, Filter, Listable};
pub use view::{ViewResult, compute_view_result};
