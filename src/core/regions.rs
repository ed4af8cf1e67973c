use crate::catalog::{Region, REGIONS};
use crate::core::distance::haversine_km;
use crate::models::GeoPoint;

/// Find the service region whose center is closest to the given point.
///
/// Ties resolve to the earliest region in catalog order. The catalog is
/// never empty, so this always returns a region.
pub fn nearest_region(point: GeoPoint) -> &'static Region {
    nearest_region_with_distance(point).0
}

/// As [`nearest_region`], also returning the distance in kilometers.
pub fn nearest_region_with_distance(point: GeoPoint) -> (&'static Region, f64) {
    let mut closest = &REGIONS[0];
    let mut min_distance = f64::INFINITY;

    for region in REGIONS.iter() {
        let distance = haversine_km(point, region.location);
        if distance < min_distance {
            min_distance = distance;
            closest = region;
        }
    }

    (closest, min_distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_at_center_returns_that_region() {
        for region in REGIONS.iter() {
            let (assigned, distance) = nearest_region_with_distance(region.location);
            assert_eq!(assigned.id, region.id);
            assert!(distance < 0.001);
        }
    }

    #[test]
    fn test_moberly_coordinates() {
        let point = GeoPoint {
            lat: 39.41,
            lon: -92.43,
        };
        assert_eq!(nearest_region(point).name, "Moberly");
    }

    #[test]
    fn test_chillicothe_coordinates() {
        let point = GeoPoint {
            lat: 39.79,
            lon: -93.52,
        };
        assert_eq!(nearest_region(point).name, "Chillicothe");
    }

    #[test]
    fn test_always_returns_a_catalog_member() {
        // A point far outside the service area still gets assigned.
        let anchorage = GeoPoint {
            lat: 61.2181,
            lon: -149.9003,
        };
        let assigned = nearest_region(anchorage);
        assert!(REGIONS.iter().any(|r| r.id == assigned.id));
    }
}
