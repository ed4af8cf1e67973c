use crate::models::Contractor;

/// Strip a single trailing "s" from a service type display name,
/// e.g. "Electricians" -> "Electrician".
///
/// This is a plain suffix trim, not real singularization: irregular
/// plurals pass through unchanged and will not match any listing type.
#[inline]
pub fn singularize_service_name(name: &str) -> &str {
    name.strip_suffix('s').unwrap_or(name)
}

/// Check if a contractor's listed type matches the requested service
/// type display name, after singularizing the request.
#[inline]
pub fn matches_service_type(contractor: &Contractor, requested_service: &str) -> bool {
    contractor
        .contractor_type
        .eq_ignore_ascii_case(singularize_service_name(requested_service))
}

/// Check if a contractor serves the requested region. The comparison is
/// a case-insensitive exact match on the region display name.
#[inline]
pub fn serves_region(contractor: &Contractor, region_name: &str) -> bool {
    contractor
        .service_area
        .iter()
        .any(|area| area.eq_ignore_ascii_case(region_name))
}

/// Check if a contractor's display name contains the query as a
/// case-insensitive substring.
#[inline]
pub fn matches_name_query(contractor: &Contractor, query: &str) -> bool {
    contractor
        .name
        .to_lowercase()
        .contains(&query.to_lowercase())
}
