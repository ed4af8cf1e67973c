// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ApplicationRecord, ApplicationStatus, Contractor, ContractorApplication, GeoPoint,
};
pub use requests::{AssignRegionRequest, ImageUpload, SearchParams, SubmitApplicationRequest};
pub use responses::{
    ApplicationSubmittedResponse, AssignRegionResponse, ErrorResponse, HealthResponse,
    NotificationError, SearchResponse,
};
