// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod regions;

pub use distance::haversine_km;
pub use filters::{matches_name_query, matches_service_type, serves_region, singularize_service_name};
pub use matcher::{Matcher, SearchQuery, SearchResult};
pub use regions::{nearest_region, nearest_region_with_distance};
