//! Filter for yes/no dimensions such as remote or verified.

use crate::criteria::FilterKey;
use crate::traits::{Attribute, Filter, Listable};

pub struct FlagFilter {
    key: FilterKey,
    expected: bool,
}

impl FlagFilter {
    pub fn new(key: FilterKey, expected: bool) -> Self {
        Self { key, expected }
    }
}

impl Filter for FlagFilter {
    fn name(&self) -> &str {
        "FlagFilter"
    }

    fn key(&self) -> FilterKey {
        self.key
    }

    fn matches(&self, record: &dyn Listable) -> bool {
        matches!(record.attribute(self.key), Some(Attribute::Flag(flag)) if flag == self.expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::listing;

    #[test]
    fn test_flag_filter() {
        let mut remote = listing(1, "Design", 10.0);
        remote.remote = true;
        let onsite = listing(2, "Design", 10.0);

        let wants_remote = FlagFilter::new(FilterKey::Remote, true);
        assert!(wants_remote.matches(&remote));
        assert!(!wants_remote.matches(&onsite));

        let wants_onsite = FlagFilter::new(FilterKey::Remote, false);
        assert!(wants_onsite.matches(&onsite));
    }
}
