//! Free-text filter for location and keyword search.

use crate::criteria::FilterKey;
use crate::traits::{Attribute, Filter, Listable};

/// Keeps records whose attribute contains the needle, ignoring case.
pub struct TextFilter {
    key: FilterKey,
    needle: String,
}

impl TextFilter {
    pub fn new(key: FilterKey, needle: &str) -> Self {
        Self {
            key,
            needle: needle.to_lowercase(),
        }
    }

    fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

impl Filter for TextFilter {
    fn name(&self) -> &str {
        "TextFilter"
    }

    fn key(&self) -> FilterKey {
        self.key
    }

    fn matches(&self, record: &dyn Listable) -> bool {
        match record.attribute(self.key) {
            Some(Attribute::Text(text)) => self.found_in(text),
            Some(Attribute::Terms(terms)) => terms.iter().any(|term| self.found_in(term)),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::listing;

    #[test]
    fn test_text_filter_substring_ignores_case() {
        let filter = TextFilter::new(FilterKey::Location, "BERLIN");

        let mut berlin = listing(1, "Design", 10.0);
        berlin.location = "Berlin, Germany".to_string();
        let mut lisbon = listing(2, "Design", 10.0);
        lisbon.location = "Lisbon, Portugal".to_string();

        assert!(filter.matches(&berlin));
        assert!(!filter.matches(&lisbon));
    }

    #[test]
    fn test_keyword_searches_title_and_skills() {
        let filter = TextFilter::new(FilterKey::Keyword, "figma");

        let mut by_skill = listing(1, "Design", 10.0);
        by_skill.skills = vec!["Figma".to_string()];
        let mut by_title = listing(2, "Design", 10.0);
        by_title.title = "Figma prototype".to_string();

        assert!(filter.matches(&by_skill));
        assert!(filter.matches(&by_title));
        assert!(!filter.matches(&listing(3, "Design", 10.0)));
    }
}
