//! Filter for multi-select dimensions such as category.

use crate::criteria::FilterKey;
use crate::traits::{Attribute, Filter, Listable};

/// Keeps records whose attribute equals any selected value.
///
/// ## Algorithm
/// - Text attribute: passes if it equals one of the values
/// - Terms attribute: passes if any term equals one of the values
///
/// Comparison ignores ASCII case, so "design" selects "Design".
pub struct SetFilter {
    key: FilterKey,
    values: Vec<String>,
}

impl SetFilter {
    pub fn new<I, S>(key: FilterKey, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    fn selects(&self, candidate: &str) -> bool {
        self.values
            .iter()
            .any(|value| value.eq_ignore_ascii_case(candidate))
    }
}

impl Filter for SetFilter {
    fn name(&self) -> &str {
        "SetFilter"
    }

    fn key(&self) -> FilterKey {
        self.key
    }

    fn matches(&self, record: &dyn Listable) -> bool {
        match record.attribute(self.key) {
            Some(Attribute::Text(text)) => self.selects(text),
            Some(Attribute::Terms(terms)) => terms.iter().any(|term| self.selects(term)),
            _ => false,
        }
    }
}
