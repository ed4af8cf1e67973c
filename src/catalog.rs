//! Fixed catalogs of service regions and contractor service types.
//!
//! Both sets are compile-time constants. Contractors reference them by
//! display name in their `type` and `service_area` fields; a listing
//! whose names don't line up simply never matches a search.

use serde::Serialize;

use crate::models::GeoPoint;

/// Percentage-based placement of a region marker on the service area map.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MapPlacement {
    pub top: &'static str,
    pub left: &'static str,
}

/// A service region with its represented cities and center coordinate.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: &'static str,
    pub name: &'static str,
    pub cities: [&'static str; 4],
    pub color: &'static str,
    pub hover_color: &'static str,
    pub border_color: &'static str,
    pub coords: MapPlacement,
    pub location: GeoPoint,
}

/// A contractor service type offered through the directory.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceType {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

// All regions share the directory's yellow map styling.
const REGION_FILL: &str = "rgba(250, 204, 21, 0.5)";
const REGION_FILL_HOVER: &str = "rgba(250, 204, 21, 0.75)";
const REGION_BORDER: &str = "#EAB308";

pub const REGIONS: [Region; 4] = [
    Region {
        id: "chillicothe",
        name: "Chillicothe",
        cities: ["Chillicothe", "Trenton", "Gallatin", "Jamesport"],
        color: REGION_FILL,
        hover_color: REGION_FILL_HOVER,
        border_color: REGION_BORDER,
        coords: MapPlacement {
            top: "55%",
            left: "25%",
        },
        location: GeoPoint {
            lat: 39.7931,
            lon: -93.5266,
        },
    },
    Region {
        id: "hannibal",
        name: "Hannibal",
        cities: ["Hannibal", "Monroe City", "Palmyra", "New London"],
        color: REGION_FILL,
        hover_color: REGION_FILL_HOVER,
        border_color: REGION_BORDER,
        coords: MapPlacement {
            top: "60%",
            left: "80%",
        },
        location: GeoPoint {
            lat: 39.7084,
            lon: -91.3585,
        },
    },
    Region {
        id: "kirksville",
        name: "Kirksville",
        cities: ["Kirksville", "La Plata", "Novinger", "Greentop"],
        color: REGION_FILL,
        hover_color: REGION_FILL_HOVER,
        border_color: REGION_BORDER,
        coords: MapPlacement {
            top: "35%",
            left: "50%",
        },
        location: GeoPoint {
            lat: 40.1948,
            lon: -92.5832,
        },
    },
    Region {
        id: "moberly",
        name: "Moberly",
        cities: ["Moberly", "Madison", "Cairo", "Huntsville"],
        color: REGION_FILL,
        hover_color: REGION_FILL_HOVER,
        border_color: REGION_BORDER,
        coords: MapPlacement {
            top: "80%",
            left: "55%",
        },
        location: GeoPoint {
            lat: 39.4189,
            lon: -92.4385,
        },
    },
];

pub const SERVICE_TYPES: [ServiceType; 10] = [
    ServiceType {
        id: "electricians",
        name: "Electricians",
        icon: "zap",
    },
    ServiceType {
        id: "excavation-specialists",
        name: "Excavation Specialists",
        icon: "shovel",
    },
    ServiceType {
        id: "general-contractors",
        name: "General Contractors",
        icon: "hammer",
    },
    ServiceType {
        id: "home-builders",
        name: "Home Builders",
        icon: "home",
    },
    ServiceType {
        id: "hvac-specialists",
        name: "HVAC Specialists",
        icon: "air-vent",
    },
    ServiceType {
        id: "landscapers",
        name: "Landscapers",
        icon: "trees",
    },
    ServiceType {
        id: "lawn-care-specialists",
        name: "Lawn Care Specialists",
        icon: "leaf",
    },
    ServiceType {
        id: "painters",
        name: "Painters",
        icon: "paint-roller",
    },
    ServiceType {
        id: "plumbers",
        name: "Plumbers",
        icon: "wrench",
    },
    ServiceType {
        id: "roofers",
        name: "Roofers",
        icon: "shield",
    },
];

/// Look up a region by its id.
pub fn region_by_id(id: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.id == id)
}

/// Look up a service type by its id.
pub fn service_type_by_id(id: &str) -> Option<&'static ServiceType> {
    SERVICE_TYPES.iter().find(|s| s.id == id)
}
