//! NEMO Match - matching and listings backend for the NEMO Home Pros directory
//!
//! This library provides the contractor search matcher and the
//! nearest-region assignment used by the directory, plus the HTTP
//! surface for listing submissions and new-application notifications.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use catalog::{Region, ServiceType, REGIONS, SERVICE_TYPES};
pub use core::{haversine_km, nearest_region, Matcher, SearchQuery};
pub use models::{ApplicationRecord, Contractor, ContractorApplication, GeoPoint};
