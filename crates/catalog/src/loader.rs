//! Loading a Catalog from JSON data files.
//!
//! A data directory holds two files, each a JSON array of records:
//! - jobs.json
//! - freelancers.json

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const JOBS_FILE: &str = "jobs.json";
pub const FREELANCERS_FILE: &str = "freelancers.json";

impl Catalog {
    /// Load jobs and freelancers from a data directory.
    ///
    /// Steps:
    /// 1. Parse both files in parallel
    /// 2. Insert records, rejecting duplicate ids
    /// 3. Validate field ranges
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        let jobs_path = data_dir.join(JOBS_FILE);
        let freelancers_path = data_dir.join(FREELANCERS_FILE);

        let (jobs, freelancers) = rayon::join(
            || read_records::<Job>(&jobs_path),
            || read_records::<Freelancer>(&freelancers_path),
        );
        let jobs = jobs?;
        let freelancers = freelancers?;

        let catalog = Self::from_records(jobs, freelancers)?;
        let (job_count, freelancer_count) = catalog.counts();
        tracing::info!(
            "Loaded {} jobs and {} freelancers from {}",
            job_count,
            freelancer_count,
            data_dir.display()
        );
        Ok(catalog)
    }

    /// Build a validated Catalog from already-decoded records.
    pub fn from_records(jobs: Vec<Job>, freelancers: Vec<Freelancer>) -> Result<Self> {
        let mut catalog = Catalog::new();

        for job in jobs {
            if catalog.jobs.contains_key(&job.id) {
                return Err(CatalogError::DuplicateId {
                    entity: "job".to_string(),
                    id: job.id,
                });
            }
            catalog.insert_job(job);
        }

        for freelancer in freelancers {
            if catalog.freelancers.contains_key(&freelancer.id) {
                return Err(CatalogError::DuplicateId {
                    entity: "freelancer".to_string(),
                    id: freelancer.id,
                });
            }
            catalog.insert_freelancer(freelancer);
        }

        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate field ranges.
    ///
    /// Check that:
    /// - Ratings are in [0.0, 5.0]
    /// - Budgets are non-negative with min <= max
    /// - Hourly rates are non-negative
    pub fn validate(&self) -> Result<()> {
        for job in self.jobs.values() {
            check_rating("client_rating", job.client_rating)?;
            if !(job.budget.min >= 0.0 && job.budget.min <= job.budget.max) {
                return Err(invalid("budget", job.budget));
            }
        }
        for freelancer in self.freelancers.values() {
            check_rating("rating", freelancer.rating)?;
            if !(freelancer.hourly_rate >= 0.0) {
                return Err(invalid("hourly_rate", freelancer.hourly_rate));
            }
        }
        Ok(())
    }
}

/// Decode a JSON array of records from a string.
pub fn parse_records<T: DeserializeOwned>(file: &str, content: &str) -> Result<Vec<T>> {
    serde_json::from_str(content).map_err(|source| CatalogError::JsonError {
        file: file.to_string(),
        source,
    })
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(err),
    })?;
    let records = parse_records(&path.display().to_string(), &content)?;
    tracing::debug!("Parsed {}", path.display());
    Ok(records)
}

fn check_rating(field: &str, rating: f64) -> Result<()> {
    // NaN fails both comparisons
    if (0.0..=5.0).contains(&rating) {
        Ok(())
    } else {
        Err(invalid(field, rating))
    }
}

fn invalid(field: &str, value: impl ToString) -> CatalogError {
    CatalogError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const JOBS_JSON: &str = r#"[
        {
            "id": 1,
            "title": "Landing page redesign",
            "client": "Acme",
            "category": "Design",
            "experience_level": "intermediate",
            "budget": { "min": 400.0, "max": 800.0 },
            "location": "Berlin, Germany",
            "remote": true,
            "client_rating": 4.6,
            "posted_at": 1717200000,
            "skills": ["Figma"]
        }
    ]"#;

    const FREELANCERS_JSON: &str = r#"[
        {
            "id": 7,
            "name": "Ada Park",
            "title": "Product Designer",
            "category": "Design",
            "experience_level": "expert",
            "hourly_rate": 85.0,
            "location": "Seoul, South Korea",
            "rating": 4.9,
            "joined_at": 1600000000
        }
    ]"#;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("catalog-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_parse_records_defaults_optional_fields() {
        let jobs: Vec<Job> = parse_records(JOBS_FILE, JOBS_JSON).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].proposals, 0);
        assert!(!jobs[0].client_verified);
        assert_eq!(jobs[0].relevance, 0.0);
    }

    #[test]
    fn test_parse_records_rejects_malformed_json() {
        let result = parse_records::<Job>(JOBS_FILE, "[{\"id\": }]");
        assert!(matches!(result, Err(CatalogError::JsonError { .. })));
    }

    #[test]
    fn test_load_from_dir() {
        let dir = scratch_dir("load");
        fs::write(dir.join(JOBS_FILE), JOBS_JSON).unwrap();
        fs::write(dir.join(FREELANCERS_FILE), FREELANCERS_JSON).unwrap();

        let catalog = Catalog::load_from_dir(&dir).unwrap();
        assert_eq!(catalog.counts(), (1, 1));
        assert_eq!(catalog.get_freelancer(7).unwrap().name, "Ada Park");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_from_dir_missing_file() {
        let dir = scratch_dir("missing");
        fs::write(dir.join(JOBS_FILE), JOBS_JSON).unwrap();

        let result = Catalog::load_from_dir(&dir);
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let jobs: Vec<Job> = parse_records(JOBS_FILE, JOBS_JSON).unwrap();
        let doubled = vec![jobs[0].clone(), jobs[0].clone()];

        let result = Catalog::from_records(doubled, Vec::new());
        assert!(matches!(result, Err(CatalogError::DuplicateId { id: 1, .. })));
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        let mut jobs: Vec<Job> = parse_records(JOBS_FILE, JOBS_JSON).unwrap();
        jobs[0].budget = PriceRange::new(900.0, 100.0);
        let result = Catalog::from_records(jobs, Vec::new());
        assert!(matches!(result, Err(CatalogError::InvalidValue { .. })));

        let mut freelancers: Vec<Freelancer> =
            parse_records(FREELANCERS_FILE, FREELANCERS_JSON).unwrap();
        freelancers[0].rating = 5.5;
        let result = Catalog::from_records(Vec::new(), freelancers);
        assert!(matches!(result, Err(CatalogError::InvalidValue { .. })));
    }
}
