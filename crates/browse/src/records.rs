//! Listable implementations for catalog listings.
//!
//! Jobs filter on their budget window (a span) and sort on its midpoint.
//! Freelancers filter and sort on their hourly rate; their date is the day
//! they joined.

use catalog::{Freelancer, Job, RecordId};

use crate::criteria::FilterKey;
use crate::sort::SortField;
use crate::traits::{Attribute, Listable};

impl Listable for Job {
    fn id(&self) -> RecordId {
        self.id
    }

    fn attribute(&self, key: FilterKey) -> Option<Attribute<'_>> {
        let attribute = match key {
            FilterKey::Category => Attribute::Text(&self.category),
            FilterKey::Experience => Attribute::Text(self.experience_level.as_str()),
            FilterKey::Skills => Attribute::Terms(self.skills.iter().map(String::as_str).collect()),
            FilterKey::Price => Attribute::Span(self.budget.min, self.budget.max),
            FilterKey::Rating => Attribute::Number(self.client_rating),
            FilterKey::Posted => Attribute::Number(self.posted_at as f64),
            FilterKey::Location => Attribute::Text(&self.location),
            FilterKey::Keyword => {
                let mut terms = vec![self.title.as_str(), self.client.as_str()];
                terms.extend(self.skills.iter().map(String::as_str));
                Attribute::Terms(terms)
            }
            FilterKey::Remote => Attribute::Flag(self.remote),
            FilterKey::Verified => Attribute::Flag(self.client_verified),
            FilterKey::Available => return None,
        };
        Some(attribute)
    }

    fn sort_value(&self, field: SortField) -> f64 {
        match field {
            SortField::Relevance => self.relevance,
            SortField::Price => self.budget.midpoint(),
            SortField::Date => self.posted_at as f64,
            SortField::Rating => self.client_rating,
        }
    }

    fn filter_keys() -> &'static [FilterKey] {
        &[
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
        ]
    }

    fn sort_fields() -> &'static [SortField] {
        &[
            SortField::Relevance,
            SortField::Price,
            SortField::Date,
            SortField::Rating,
        ]
    }
}

impl Listable for Freelancer {
    fn id(&self) -> RecordId {
        self.id
    }

    fn attribute(&self, key: FilterKey) -> Option<Attribute<'_>> {
        let attribute = match key {
            FilterKey::Category => Attribute::Text(&self.category),
            FilterKey::Experience => Attribute::Text(self.experience_level.as_str()),
            FilterKey::Skills => Attribute::Terms(self.skills.iter().map(String::as_str).collect()),
            FilterKey::Price => Attribute::Number(self.hourly_rate),
            FilterKey::Rating => Attribute::Number(self.rating),
            FilterKey::Location => Attribute::Text(&self.location),
            FilterKey::Keyword => {
                let mut terms = vec![self.name.as_str(), self.title.as_str()];
                terms.extend(self.skills.iter().map(String::as_str));
                Attribute::Terms(terms)
            }
            FilterKey::Available => Attribute::Flag(self.available),
            FilterKey::Posted | FilterKey::Remote | FilterKey::Verified => return None,
        };
        Some(attribute)
    }

    fn sort_value(&self, field: SortField) -> f64 {
        match field {
            SortField::Relevance => self.relevance,
            SortField::Price => self.hourly_rate,
            SortField::Date => self.joined_at as f64,
            SortField::Rating => self.rating,
        }
    }

    fn filter_keys() -> &'static [FilterKey] {
        &[
            FilterKey::Category,
            FilterKey::Experience,
            FilterKey::Skills,
            FilterKey::Price,
            FilterKey::Rating,
            FilterKey::Location,
            FilterKey::Keyword,
            FilterKey::Available,
        ]
    }

    fn sort_fields() -> &'static [SortField] {
        &[
            SortField::Relevance,
            SortField::Price,
            SortField::Date,
            SortField::Rating,
        ]
    }
}
