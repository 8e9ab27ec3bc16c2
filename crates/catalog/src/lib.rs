//! # Catalog Crate
//!
//! Jobs and freelancer profiles shown on the marketplace browse pages.
//!
//! ## Main Components
//!
//! - **types**: Listing types (Job, Freelancer) and the Catalog store
//! - **loader**: Load and validate listings from JSON data files
//! - **seed**: Built-in listings for running without a data directory
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_dir(Path::new("data"))?;
//! let job = catalog.get_job(1).unwrap();
//! println!("{} ({})", job.title, job.budget);
//! ```

pub mod error;
pub mod types;
pub mod loader;
pub mod seed;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    Catalog,
    CategorySummary,
    ExperienceLevel,
    Freelancer,
    Job,
    PriceRange,
    RecordId,
    Timestamp,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.counts(), (0, 0));
        assert!(catalog.get_job(1).is_none());
        assert!(catalog.get_freelancer(1).is_none());
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn test_categories_merge_both_kinds() {
        let catalog = Catalog::sample();
        let categories = catalog.categories();

        let design = categories.iter().find(|c| c.name == "Design").unwrap();
        assert_eq!(design.jobs, 3);
        assert_eq!(design.freelancers, 2);

        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
