//! Core domain types for marketplace listings.
//!
//! Jobs are posted by clients, freelancers advertise themselves. Both are
//! plain records: the browse layer only ever reads them.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

// =============================================================================
// Type Aliases
// =============================================================================

/// Stable identifier of a job or freelancer listing
pub type RecordId = u32;

/// Unix timestamp in seconds
pub type Timestamp = i64;

// =============================================================================
// Shared Value Types
// =============================================================================

/// Seniority a job asks for, or a freelancer advertises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    /// Lowercase label used in data files and filter values
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Expert => "expert",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExperienceLevel::Entry => "Entry Level",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Expert => "Expert",
        };
        f.write_str(label)
    }
}

impl FromStr for ExperienceLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "entry" | "entry level" | "beginner" => Ok(ExperienceLevel::Entry),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "expert" => Ok(ExperienceLevel::Expert),
            _ => Err(CatalogError::InvalidValue {
                field: "experience_level".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Inclusive budget window of a job, in USD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A fixed-price budget
    pub const fn fixed(amount: f64) -> Self {
        Self {
            min: amount,
            max: amount,
        }
    }

    /// Single number used when budgets are ordered against each other
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "${:.0}", self.min)
        } else {
            write!(f, "${:.0}-${:.0}", self.min, self.max)
        }
    }
}

// =============================================================================
// Listings
// =============================================================================

/// A job posted by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: RecordId,
    pub title: String,
    pub client: String,
    pub category: String,
    pub experience_level: ExperienceLevel,
    pub budget: PriceRange,
    pub location: String,
    #[serde(default)]
    pub remote: bool,
    /// Average rating the client received from past freelancers (0.0 - 5.0)
    pub client_rating: f64,
    #[serde(default)]
    pub client_verified: bool,
    pub posted_at: Timestamp,
    #[serde(default)]
    pub proposals: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Externally supplied ranking score, higher is more relevant
    #[serde(default)]
    pub relevance: f64,
}

/// A freelancer profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freelancer {
    pub id: RecordId,
    pub name: String,
    pub title: String,
    pub category: String,
    pub experience_level: ExperienceLevel,
    /// Hourly rate in USD
    pub hourly_rate: f64,
    pub location: String,
    /// Average review score (0.0 - 5.0)
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub available: bool,
    pub joined_at: Timestamp,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub relevance: f64,
}

/// Number of listings filed under one category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub jobs: usize,
    pub freelancers: usize,
}

// =============================================================================
// Catalog - In-Memory Listing Store
// =============================================================================

/// Holds every job and freelancer known to the application.
///
/// Lookups by id are O(1); the ordered accessors return clones in id order
/// so a browse controller starts from a deterministic sequence.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) jobs: HashMap<RecordId, Job>,
    pub(crate) freelancers: HashMap<RecordId, Freelancer>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            jobs: HashMap::new(),
            freelancers: HashMap::new(),
        }
    }

    /// Get a job by ID
    pub fn get_job(&self, id: RecordId) -> Option<&Job> {
        self.jobs.get(&id)
    }

    /// Get a freelancer by ID
    pub fn get_freelancer(&self, id: RecordId) -> Option<&Freelancer> {
        self.freelancers.get(&id)
    }

    /// All jobs, ordered by id
    pub fn jobs(&self) -> Vec<Job> {
        let mut jobs: Vec<Job> = self.jobs.values().cloned().collect();
        jobs.sort_by_key(|job| job.id);
        jobs
    }

    /// All freelancers, ordered by id
    pub fn freelancers(&self) -> Vec<Freelancer> {
        let mut freelancers: Vec<Freelancer> = self.freelancers.values().cloned().collect();
        freelancers.sort_by_key(|freelancer| freelancer.id);
        freelancers
    }

    /// Insert a job, replacing any job with the same id
    pub fn insert_job(&mut self, job: Job) {
        self.jobs.insert(job.id, job);
    }

    /// Insert a freelancer, replacing any profile with the same id
    pub fn insert_freelancer(&mut self, freelancer: Freelancer) {
        self.freelancers.insert(freelancer.id, freelancer);
    }

    /// (jobs, freelancers)
    pub fn counts(&self) -> (usize, usize) {
        (self.jobs.len(), self.freelancers.len())
    }

    /// Distinct categories across both listing kinds, alphabetically
    pub fn categories(&self) -> Vec<CategorySummary> {
        let mut summaries: BTreeMap<&str, CategorySummary> = BTreeMap::new();
        for job in self.jobs.values() {
            summaries
                .entry(job.category.as_str())
                .or_insert_with(|| CategorySummary {
                    name: job.category.clone(),
                    ..CategorySummary::default()
                })
                .jobs += 1;
        }
        for freelancer in self.freelancers.values() {
            summaries
                .entry(freelancer.category.as_str())
                .or_insert_with(|| CategorySummary {
                    name: freelancer.category.clone(),
                    ..CategorySummary::default()
                })
                .freelancers += 1;
        }
        summaries.into_values().collect()
    }
}
