use crate::core::filters::{matches_name_query, matches_service_type, serves_region};
use crate::models::Contractor;

/// Search criteria resolved from a request: catalog display names plus
/// an optional free-text name filter.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Service type display name, e.g. "Electricians"
    pub service_name: String,
    /// Region display name, e.g. "Hannibal"
    pub region_name: String,
    pub name_query: Option<String>,
}

/// Result of running a search over the full listing set.
#[derive(Debug)]
pub struct SearchResult {
    pub contractors: Vec<Contractor>,
    pub total_listed: usize,
}

/// Contractor matcher.
///
/// Applies the search predicates in order: service type (singularized,
/// case-insensitive), service area, then the optional name filter.
/// Output preserves the input order of the listings document.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    pub fn search(&self, contractors: &[Contractor], query: &SearchQuery) -> SearchResult {
        let total_listed = contractors.len();

        let matched: Vec<Contractor> = contractors
            .iter()
            .filter(|c| matches_service_type(c, &query.service_name))
            .filter(|c| serves_region(c, &query.region_name))
            .filter(|c| {
                query
                    .name_query
                    .as_deref()
                    .map_or(true, |q| matches_name_query(c, q))
            })
            .cloned()
            .collect();

        SearchResult {
            contractors: matched,
            total_listed,
        }
    }
}
