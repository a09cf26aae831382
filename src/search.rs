//! List Filtering
//!
//! Case-insensitive substring matching over each entity's designated
//! search fields. Filtering is a linear scan that preserves list order;
//! an empty term matches everything.

use crate::models::{
    AdvocacyAction, CaseRecord, Client, RapidResponse, SafeguardingIncident, Volunteer,
};

/// Case-folded substring containment
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// An entity that can be matched against a search term
pub trait Searchable {
    /// The string fields the search box looks at for this entity type
    fn search_fields(&self) -> Vec<&str>;

    fn matches(&self, term: &str) -> bool {
        term.is_empty() || self.search_fields().iter().any(|field| contains_ci(field, term))
    }
}

/// Filter a list by search term, keeping the original order
pub fn filter<T: Searchable + Clone>(items: &[T], term: &str) -> Vec<T> {
    items.iter().filter(|item| item.matches(term)).cloned().collect()
}

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.address]
    }
}

impl Searchable for Volunteer {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }
}

impl Searchable for CaseRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.client_name]
    }
}

impl Searchable for RapidResponse {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.client_name, &self.request_type]
    }
}

impl Searchable for SafeguardingIncident {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.client_name, &self.incident_type]
    }
}

impl Searchable for AdvocacyAction {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.client_name, &self.advocacy_type, &self.target_organization]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn empty_term_is_identity() {
        let clients = data::sample_clients();
        let filtered = filter(&clients, "");
        assert_eq!(filtered, clients);
    }

    #[test]
    fn filter_is_a_subset_and_idempotent() {
        let cases = data::sample_cases();
        let filtered = filter(&cases, "advocacy");
        assert!(filtered.iter().all(|c| cases.contains(c)));
        assert_eq!(filter(&filtered, "advocacy"), filtered);
    }

    #[test]
    fn matches_address_case_insensitively() {
        let clients = data::sample_clients();
        let filtered = filter(&clients, "oak");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Fatima Hassan");
    }

    #[test]
    fn matches_any_volunteer_skill() {
        let volunteers = data::sample_volunteers();
        let filtered = filter(&volunteers, "befriending");
        let names: Vec<&str> = filtered.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["John Smith", "Sarah Matthews"]);
    }

    #[test]
    fn preserves_original_order() {
        let volunteers = data::sample_volunteers();
        let filtered = filter(&volunteers, "o");
        let mut expected = volunteers.clone();
        expected.retain(|v| v.matches("o"));
        assert_eq!(filtered, expected);
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let incidents = data::sample_incidents();
        assert!(filter(&incidents, "zzz-no-such-incident").is_empty());
    }
}
