//! Minimal record type for unit tests.

use catalog::RecordId;

use crate::criteria::FilterKey;
use crate::sort::SortField;
use crate::traits::{Attribute, Listable};

#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: RecordId,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    pub location: String,
    pub remote: bool,
    pub skills: Vec<String>,
    pub relevance: f64,
}

pub fn listing(id: RecordId, category: &str, price: f64) -> Listing {
    Listing {
        id,
        title: format!("Listing {}", id),
        category: category.to_string(),
        price,
        rating: 0.0,
        location: String::new(),
        remote: false,
        skills: Vec::new(),
        relevance: 0.0,
    }
}

impl Listable for Listing {
    fn id(&self) -> RecordId {
        self.id
    }

    fn attribute(&self, key: FilterKey) -> Option<Attribute<'_>> {
        match key {
            FilterKey::Category => Some(Attribute::Text(&self.category)),
            FilterKey::Skills => Some(Attribute::Terms(
                self.skills.iter().map(String::as_str).collect(),
            )),
            FilterKey::Price => Some(Attribute::Number(self.price)),
            FilterKey::Rating => Some(Attribute::Number(self.rating)),
            FilterKey::Location => Some(Attribute::Text(&self.location)),
            FilterKey::Keyword => {
                let mut terms = vec![self.title.as_str()];
                terms.extend(self.skills.iter().map(String::as_str));
                Some(Attribute::Terms(terms))
            }
            FilterKey::Remote => Some(Attribute::Flag(self.remote)),
            _ => None,
        }
    }

    fn sort_value(&self, field: SortField) -> f64 {
        match field {
            SortField::Relevance => self.relevance,
            SortField::Price => self.price,
            SortField::Rating => self.rating,
            SortField::Date => 0.0,
        }
    }

    fn filter_keys() -> &'static [FilterKey] {
        &[
            FilterKey::Category,
            FilterKey::Skills,
            FilterKey::Price,
            FilterKey::Rating,
            FilterKey::Location,
            FilterKey::Keyword,
            FilterKey::Remote,
        ]
    }

    fn sort_fields() -> &'static [SortField] {
        &[SortField::Relevance, SortField::Price, SortField::Rating]
    }
}
