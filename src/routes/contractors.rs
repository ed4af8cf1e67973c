use actix_web::{web, HttpResponse, Responder};

use crate::catalog;
use crate::core::{nearest_region_with_distance, SearchQuery};
use crate::models::{
    AssignRegionRequest, AssignRegionResponse, ErrorResponse, GeoPoint, HealthResponse,
    SearchParams, SearchResponse,
};
use crate::routes::AppState;
use crate::services::ListingsError;

/// Configure contractor directory routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/contractors/search", web::get().to(search_contractors))
        .route("/contractors/{id}", web::get().to(get_contractor))
        .route("/regions", web::get().to(list_regions))
        .route("/regions/assign", web::post().to(assign_region))
        .route("/services", web::get().to(list_services));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Contractor search endpoint
///
/// GET /api/v1/contractors/search?service={serviceId}&service_area={regionId}&name={query}
///
/// Unknown service or region ids are not an error: the response is an
/// empty result set, which the site renders as "no results found".
async fn search_contractors(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> impl Responder {
    let service = catalog::service_type_by_id(&params.service);
    let region = catalog::region_by_id(&params.service_area);

    let (service, region) = match (service, region) {
        (Some(service), Some(region)) => (service, region),
        _ => {
            tracing::debug!(
                "Search with unknown catalog ids: service={}, service_area={}",
                params.service,
                params.service_area
            );
            return HttpResponse::Ok().json(SearchResponse {
                contractors: vec![],
                total_results: 0,
            });
        }
    };

    let contractors = match state.listings.fetch_all().await {
        Ok(contractors) => contractors,
        Err(e) => {
            tracing::error!("Failed to fetch contractor listings: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch contractor data.".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let query = SearchQuery {
        service_name: service.name.to_string(),
        region_name: region.name.to_string(),
        name_query: params.name.clone(),
    };

    let result = state.matcher.search(&contractors, &query);

    tracing::info!(
        "Search {} in {} matched {} of {} listings",
        service.name,
        region.name,
        result.contractors.len(),
        result.total_listed
    );

    HttpResponse::Ok().json(SearchResponse {
        total_results: result.contractors.len(),
        contractors: result.contractors,
    })
}

/// Contractor profile endpoint
///
/// GET /api/v1/contractors/{id}
async fn get_contractor(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let contractor_id = path.into_inner();

    match state.listings.get(&contractor_id).await {
        Ok(contractor) => HttpResponse::Ok().json(contractor),
        Err(ListingsError::NotFound) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Not found".to_string(),
            message: "Contractor not found.".to_string(),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch contractor {}: {}", contractor_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch contractor data.".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Fixed region catalog
async fn list_regions() -> impl Responder {
    HttpResponse::Ok().json(catalog::REGIONS)
}

/// Fixed service type catalog
async fn list_services() -> impl Responder {
    HttpResponse::Ok().json(catalog::SERVICE_TYPES)
}

/// Region assignment endpoint
///
/// POST /api/v1/regions/assign
///
/// Request body:
/// ```json
/// { "lat": 39.41, "lon": -92.43 }
/// ```
async fn assign_region(req: web::Json<AssignRegionRequest>) -> impl Responder {
    let point = GeoPoint {
        lat: req.lat,
        lon: req.lon,
    };

    let (region, distance_km) = nearest_region_with_distance(point);

    HttpResponse::Ok().json(AssignRegionResponse {
        region: *region,
        distance_km,
    })
}
