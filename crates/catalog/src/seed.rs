//! Built-in listings used when no data directory is given.

use crate::types::ExperienceLevel::{Entry, Expert, Intermediate};
use crate::types::*;

const DAY: Timestamp = 86_400;
/// 2025-06-01T00:00:00Z
const SEED_EPOCH: Timestamp = 1_748_736_000;

struct JobRow {
    title: &'static str,
    client: &'static str,
    category: &'static str,
    level: ExperienceLevel,
    budget: PriceRange,
    location: &'static str,
    remote: bool,
    client_rating: f64,
    verified: bool,
    days_ago: i64,
    proposals: u32,
    skills: &'static [&'static str],
    relevance: f64,
}

struct FreelancerRow {
    name: &'static str,
    title: &'static str,
    category: &'static str,
    level: ExperienceLevel,
    rate: f64,
    location: &'static str,
    rating: f64,
    reviews: u32,
    available: bool,
    days_ago: i64,
    skills: &'static [&'static str],
    relevance: f64,
}

const JOBS: &[JobRow] = &[
    JobRow {
        title: "E-commerce storefront in React",
        client: "Northwind Goods",
        category: "Web Development",
        level: Intermediate,
        budget: PriceRange::new(1500.0, 3000.0),
        location: "Austin, USA",
        remote: true,
        client_rating: 4.8,
        verified: true,
        days_ago: 1,
        proposals: 14,
        skills: &["React", "TypeScript", "Stripe"],
        relevance: 0.94,
    },
    JobRow {
        title: "Brand identity for coffee roaster",
        client: "Bean There",
        category: "Design",
        level: Expert,
        budget: PriceRange::new(800.0, 1200.0),
        location: "Portland, USA",
        remote: true,
        client_rating: 4.9,
        verified: true,
        days_ago: 2,
        proposals: 22,
        skills: &["Branding", "Illustrator", "Logo Design"],
        relevance: 0.91,
    },
    JobRow {
        title: "iOS habit tracker MVP",
        client: "Streakly",
        category: "Mobile Development",
        level: Expert,
        budget: PriceRange::new(4000.0, 6000.0),
        location: "London, UK",
        remote: false,
        client_rating: 4.5,
        verified: true,
        days_ago: 3,
        proposals: 9,
        skills: &["Swift", "SwiftUI", "CloudKit"],
        relevance: 0.88,
    },
    JobRow {
        title: "Blog posts on personal finance",
        client: "CoinWise",
        category: "Writing",
        level: Entry,
        budget: PriceRange::new(150.0, 300.0),
        location: "Toronto, Canada",
        remote: true,
        client_rating: 4.2,
        verified: false,
        days_ago: 1,
        proposals: 31,
        skills: &["Copywriting", "SEO"],
        relevance: 0.72,
    },
    JobRow {
        title: "Churn prediction model",
        client: "Telco Partners",
        category: "Data Science",
        level: Expert,
        budget: PriceRange::new(3000.0, 5000.0),
        location: "Berlin, Germany",
        remote: true,
        client_rating: 4.7,
        verified: true,
        days_ago: 5,
        proposals: 7,
        skills: &["Python", "scikit-learn", "SQL"],
        relevance: 0.86,
    },
    JobRow {
        title: "Mobile app onboarding screens",
        client: "Fitloop",
        category: "Design",
        level: Intermediate,
        budget: PriceRange::new(500.0, 900.0),
        location: "Lisbon, Portugal",
        remote: true,
        client_rating: 4.4,
        verified: false,
        days_ago: 4,
        proposals: 18,
        skills: &["Figma", "UI Design"],
        relevance: 0.83,
    },
    JobRow {
        title: "WordPress plugin bug fixes",
        client: "Local Bakery Co",
        category: "Web Development",
        level: Entry,
        budget: PriceRange::new(100.0, 250.0),
        location: "Dublin, Ireland",
        remote: true,
        client_rating: 3.9,
        verified: false,
        days_ago: 8,
        proposals: 40,
        skills: &["PHP", "WordPress"],
        relevance: 0.61,
    },
    JobRow {
        title: "Paid social campaign management",
        client: "Glow Skincare",
        category: "Marketing",
        level: Intermediate,
        budget: PriceRange::new(1000.0, 2000.0),
        location: "Sydney, Australia",
        remote: true,
        client_rating: 4.6,
        verified: true,
        days_ago: 6,
        proposals: 12,
        skills: &["Meta Ads", "Analytics"],
        relevance: 0.77,
    },
    JobRow {
        title: "Rust backend for realtime chat",
        client: "Parley",
        category: "Web Development",
        level: Expert,
        budget: PriceRange::new(5000.0, 9000.0),
        location: "Amsterdam, Netherlands",
        remote: true,
        client_rating: 4.9,
        verified: true,
        days_ago: 2,
        proposals: 5,
        skills: &["Rust", "WebSockets", "PostgreSQL"],
        relevance: 0.97,
    },
    JobRow {
        title: "Illustrated children's book",
        client: "Little Owl Press",
        category: "Design",
        level: Expert,
        budget: PriceRange::fixed(2000.0),
        location: "Edinburgh, UK",
        remote: false,
        client_rating: 4.8,
        verified: true,
        days_ago: 12,
        proposals: 16,
        skills: &["Illustration", "Procreate"],
        relevance: 0.69,
    },
    JobRow {
        title: "Technical docs for REST API",
        client: "Hookline",
        category: "Writing",
        level: Intermediate,
        budget: PriceRange::new(600.0, 1000.0),
        location: "Remote",
        remote: true,
        client_rating: 4.3,
        verified: true,
        days_ago: 9,
        proposals: 11,
        skills: &["Technical Writing", "OpenAPI"],
        relevance: 0.74,
    },
    JobRow {
        title: "Sales dashboard in Power BI",
        client: "Harbor Logistics",
        category: "Data Science",
        level: Intermediate,
        budget: PriceRange::new(700.0, 1400.0),
        location: "Rotterdam, Netherlands",
        remote: false,
        client_rating: 4.1,
        verified: false,
        days_ago: 15,
        proposals: 8,
        skills: &["Power BI", "SQL"],
        relevance: 0.58,
    },
    JobRow {
        title: "Flutter delivery app tweaks",
        client: "QuickCart",
        category: "Mobile Development",
        level: Intermediate,
        budget: PriceRange::new(900.0, 1600.0),
        location: "Nairobi, Kenya",
        remote: true,
        client_rating: 4.0,
        verified: true,
        days_ago: 7,
        proposals: 19,
        skills: &["Flutter", "Dart", "Firebase"],
        relevance: 0.80,
    },
    JobRow {
        title: "SEO audit for SaaS site",
        client: "Ledgerly",
        category: "Marketing",
        level: Entry,
        budget: PriceRange::new(200.0, 400.0),
        location: "Austin, USA",
        remote: true,
        client_rating: 4.5,
        verified: true,
        days_ago: 3,
        proposals: 27,
        skills: &["SEO", "Ahrefs"],
        relevance: 0.66,
    },
];

const FREELANCERS: &[FreelancerRow] = &[
    FreelancerRow {
        name: "Maya Chen",
        title: "Full-stack React Developer",
        category: "Web Development",
        level: Expert,
        rate: 85.0,
        location: "San Francisco, USA",
        rating: 4.9,
        reviews: 127,
        available: true,
        days_ago: 1400,
        skills: &["React", "Node.js", "TypeScript"],
        relevance: 0.95,
    },
    FreelancerRow {
        name: "Luis Ortega",
        title: "Brand & Visual Designer",
        category: "Design",
        level: Expert,
        rate: 70.0,
        location: "Mexico City, Mexico",
        rating: 4.8,
        reviews: 96,
        available: true,
        days_ago: 1100,
        skills: &["Branding", "Illustrator", "Figma"],
        relevance: 0.90,
    },
    FreelancerRow {
        name: "Priya Nair",
        title: "Data Scientist",
        category: "Data Science",
        level: Expert,
        rate: 95.0,
        location: "Bangalore, India",
        rating: 5.0,
        reviews: 58,
        available: false,
        days_ago: 900,
        skills: &["Python", "PyTorch", "SQL"],
        relevance: 0.88,
    },
    FreelancerRow {
        name: "Tom Becker",
        title: "Junior Web Developer",
        category: "Web Development",
        level: Entry,
        rate: 25.0,
        location: "Hamburg, Germany",
        rating: 4.3,
        reviews: 12,
        available: true,
        days_ago: 200,
        skills: &["HTML", "CSS", "JavaScript"],
        relevance: 0.64,
    },
    FreelancerRow {
        name: "Aisha Bello",
        title: "Content Writer",
        category: "Writing",
        level: Intermediate,
        rate: 35.0,
        location: "Lagos, Nigeria",
        rating: 4.7,
        reviews: 73,
        available: true,
        days_ago: 650,
        skills: &["Copywriting", "SEO", "Blogging"],
        relevance: 0.79,
    },
    FreelancerRow {
        name: "Kenji Watanabe",
        title: "iOS Engineer",
        category: "Mobile Development",
        level: Expert,
        rate: 110.0,
        location: "Tokyo, Japan",
        rating: 4.9,
        reviews: 44,
        available: false,
        days_ago: 1800,
        skills: &["Swift", "SwiftUI", "Objective-C"],
        relevance: 0.86,
    },
    FreelancerRow {
        name: "Sofia Rossi",
        title: "UI/UX Designer",
        category: "Design",
        level: Intermediate,
        rate: 50.0,
        location: "Milan, Italy",
        rating: 4.6,
        reviews: 39,
        available: true,
        days_ago: 500,
        skills: &["Figma", "UI Design", "Prototyping"],
        relevance: 0.82,
    },
    FreelancerRow {
        name: "Daniel Okafor",
        title: "Growth Marketer",
        category: "Marketing",
        level: Intermediate,
        rate: 45.0,
        location: "London, UK",
        rating: 4.4,
        reviews: 27,
        available: true,
        days_ago: 730,
        skills: &["Meta Ads", "Google Ads", "Analytics"],
        relevance: 0.71,
    },
    FreelancerRow {
        name: "Elena Petrova",
        title: "Rust Systems Engineer",
        category: "Web Development",
        level: Expert,
        rate: 120.0,
        location: "Remote",
        rating: 4.9,
        reviews: 31,
        available: true,
        days_ago: 950,
        skills: &["Rust", "PostgreSQL", "Kubernetes"],
        relevance: 0.93,
    },
    FreelancerRow {
        name: "Noah Williams",
        title: "Technical Writer",
        category: "Writing",
        level: Expert,
        rate: 60.0,
        location: "Toronto, Canada",
        rating: 4.8,
        reviews: 52,
        available: false,
        days_ago: 1200,
        skills: &["Technical Writing", "OpenAPI", "Markdown"],
        relevance: 0.76,
    },
];

impl Catalog {
    /// Catalog populated with the built-in listings
    pub fn sample() -> Self {
        let mut catalog = Catalog::new();
        for (id, row) in (1..).zip(JOBS) {
            catalog.insert_job(Job {
                id,
                title: row.title.to_string(),
                client: row.client.to_string(),
                category: row.category.to_string(),
                experience_level: row.level,
                budget: row.budget,
                location: row.location.to_string(),
                remote: row.remote,
                client_rating: row.client_rating,
                client_verified: row.verified,
                posted_at: SEED_EPOCH - row.days_ago * DAY,
                proposals: row.proposals,
                skills: to_strings(row.skills),
                relevance: row.relevance,
            });
        }
        for (id, row) in (1..).zip(FREELANCERS) {
            catalog.insert_freelancer(Freelancer {
                id,
                name: row.name.to_string(),
                title: row.title.to_string(),
                category: row.category.to_string(),
                experience_level: row.level,
                hourly_rate: row.rate,
                location: row.location.to_string(),
                rating: row.rating,
                reviews: row.reviews,
                available: row.available,
                joined_at: SEED_EPOCH - row.days_ago * DAY,
                skills: to_strings(row.skills),
                relevance: row.relevance,
            });
        }
        catalog
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
