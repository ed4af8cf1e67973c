use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    ApplicationStatus, ApplicationSubmittedResponse, ContractorApplication, ErrorResponse,
    SubmitApplicationRequest,
};
use crate::routes::AppState;

/// Generic user-facing message for any storage or insert failure.
const SUBMISSION_FAILED: &str =
    "There was an error submitting your application. Please try again.";

/// Configure listing application routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/applications", web::post().to(submit_application));
}

/// Listing submission endpoint
///
/// POST /api/v1/applications
///
/// Validates the two selection rules, uploads any attached images as a
/// concurrent batch (one failed upload aborts the submission), then
/// inserts a single application row with status "pending".
async fn submit_application(
    state: web::Data<AppState>,
    req: web::Json<SubmitApplicationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for application submission: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if req.services.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: "Please select at least one service you offer.".to_string(),
            status_code: 400,
        });
    }

    if req.service_areas.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: "Please select at least one service area.".to_string(),
            status_code: 400,
        });
    }

    let image_urls = if req.images.is_empty() {
        None
    } else {
        match state.supabase.upload_images(&req.images).await {
            Ok(urls) => Some(urls),
            Err(e) => {
                tracing::error!("Error uploading application images: {}", e);
                return HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "Submission failed".to_string(),
                    message: SUBMISSION_FAILED.to_string(),
                    status_code: 500,
                });
            }
        }
    };

    let application = build_application(&req, image_urls);

    match state.supabase.insert_application(&application).await {
        Ok(()) => {
            tracing::info!("Accepted application from {}", application.name);
            HttpResponse::Ok().json(ApplicationSubmittedResponse {
                success: true,
                message: "Application submitted successfully.".to_string(),
            })
        }
        Err(e) => {
            tracing::error!("Error submitting application: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Submission failed".to_string(),
                message: SUBMISSION_FAILED.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Shape a validated request into the application row. Blank free-text
/// list entries are dropped and an empty website becomes null.
fn build_application(
    req: &SubmitApplicationRequest,
    image_urls: Option<Vec<String>>,
) -> ContractorApplication {
    let specialties: Vec<String> = req
        .specialties
        .iter()
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .collect();
    let specialized_training: Vec<String> = req
        .specialized_training
        .iter()
        .filter(|t| !t.trim().is_empty())
        .cloned()
        .collect();

    ContractorApplication {
        name: req.name.clone(),
        contact_name: req.contact_name.clone(),
        services: req.services.clone(),
        phone: req.phone.clone(),
        email: req.email.clone(),
        website: if req.website.trim().is_empty() {
            None
        } else {
            Some(req.website.clone())
        },
        service_areas: req.service_areas.clone(),
        description: req.description.clone(),
        specialties,
        years_experience: req.years_experience,
        completed_projects: req.completed_projects,
        licensed: req.licensed,
        insured: req.insured,
        specialized_training,
        image_urls,
        status: ApplicationStatus::Pending,
        nemo_certified: false,
    }
}
